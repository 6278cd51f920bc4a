use super::EnrichmentResult;
use crate::types::{Field, MetadataRecord};

/// The only fields enrichment may fill.
pub const ENRICHABLE_FIELDS: [Field; 4] = [
    Field::Description,
    Field::Author,
    Field::Publisher,
    Field::Lang,
];

/// Fill absent enrichable fields from `result`.
///
/// A field that already holds a value is never replaced, and fields outside
/// [`ENRICHABLE_FIELDS`] are never touched.
pub fn merge(mut record: MetadataRecord, result: &EnrichmentResult) -> MetadataRecord {
    for field in ENRICHABLE_FIELDS {
        if record.has(field) {
            continue;
        }
        if let Some(value) = result.get(field) {
            record.set(field, Some(value.to_string()));
        }
    }
    record
}
