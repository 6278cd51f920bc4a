//! Field Extractor Set and Metadata Aggregator.
//!
//! Each metadata field has one extractor: an ordered list of sources tried
//! until one yields a valid value. Extractors are plain functions registered
//! in [`FIELD_EXTRACTORS`]; the aggregator runs every entry against the same
//! [`Page`] and never touches the network.

mod fields;
mod utils;

pub use utils::{normalize_date, normalize_lang};

use scraper::Html;
use url::Url;

use crate::tools::scrape::Page;
use crate::types::{Field, MetadataRecord};

/// A field extractor: inspects one page, returns a candidate or nothing.
pub type Extractor = fn(&Page<'_>) -> Option<String>;

/// Every field extractor, in output order.
pub const FIELD_EXTRACTORS: [(Field, Extractor); 9] = [
    (Field::Lang, fields::lang),
    (Field::Author, fields::author),
    (Field::Title, fields::title),
    (Field::Description, fields::description),
    (Field::Publisher, fields::publisher),
    (Field::Image, fields::image),
    (Field::Logo, fields::logo),
    (Field::Url, fields::url),
    (Field::Date, fields::date),
];

/// Run every field extractor once and assemble the record.
///
/// Deterministic for identical HTML and URL. `url` is left absent when the
/// page declares none; the caller decides the fallback.
pub fn aggregate(page: &Page<'_>) -> MetadataRecord {
    let mut record = MetadataRecord::default();
    for (field, extractor) in FIELD_EXTRACTORS {
        record.set(field, extractor(page));
    }
    record
}

/// Parse `html` and aggregate it, defaulting `url` to the source URL.
///
/// # Examples
/// ```
/// use metascrape::tools::extract::extract_record;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/").unwrap();
/// let html = r#"<title>Example</title><meta name="description" content="A sample page.">"#;
/// let record = extract_record(html, &url);
/// assert_eq!(record.title.as_deref(), Some("Example"));
/// assert_eq!(record.description.as_deref(), Some("A sample page."));
/// assert_eq!(record.url.as_deref(), Some("https://example.com/"));
/// ```
pub fn extract_record(html: &str, url: &Url) -> MetadataRecord {
    let document = Html::parse_document(html);
    let page = Page::new(&document, url);
    let mut record = aggregate(&page);
    if record.url.is_none() {
        record.url = Some(url.to_string());
    }
    record
}

#[cfg(test)]
mod tests;
