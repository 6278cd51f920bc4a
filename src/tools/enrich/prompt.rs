use super::TextDigest;
use crate::tools::clean::truncate_chars;
use crate::types::MetadataRecord;

// Digest headings and content are already bounded; these two are not.
const MAX_TITLE_CHARS: usize = 300;
const MAX_META_DESCRIPTION_CHARS: usize = 500;

/// Prompt asking the backend for the missing enrichable fields as bare JSON.
pub fn build_prompt(url: &str, digest: &TextDigest, record: &MetadataRecord) -> String {
    let current = serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"Extract web page metadata.

URL: {url}
Title: {title}
Main headings: {headings}
Existing meta description: {meta_description}
Body text: {content}

Metadata extracted so far:
{current}

Reply with ONLY a JSON object holding the missing fields below, with no other text.
Use null for anything you cannot determine.
{{
  "description": "page summary, 50-160 characters, written in the page's own language",
  "author": "author name or null",
  "publisher": "publisher name or null",
  "lang": "language code (en/ko/etc) or null"
}}"#,
        title = truncate_chars(&digest.title, MAX_TITLE_CHARS),
        headings = digest.headings,
        meta_description = truncate_chars(&digest.meta_description, MAX_META_DESCRIPTION_CHARS),
        content = digest.content,
    )
}
