mod utils;

pub use utils::truncate_chars;
use utils::*;

/// Clean a scraped value.
///
/// Performs the following operations in order:
/// 1. Decode HTML entities left in attribute or JSON-LD text (`&amp;` → `&`)
/// 2. Normalize Unicode to NFC
/// 3. Remove zero-width and control characters
/// 4. Collapse whitespace runs to a single space and trim
///
/// Returns `None` when nothing is left.
///
/// # Examples
/// ```
/// use metascrape::tools::clean::clean;
///
/// assert_eq!(clean("  Tom &amp; Jerry\u{200B}\n"), Some("Tom & Jerry".to_string()));
/// assert_eq!(clean(" \t "), None);
/// ```
pub fn clean(text: &str) -> Option<String> {
    let decoded = decode_html_entities(text);
    let normalized = normalize_unicode(&decoded);
    let visible = remove_invisible_chars(&normalized);
    let collapsed = collapse_whitespace(&visible);

    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Collapse every whitespace run (spaces, tabs, newlines) to one space and trim.
pub fn collapse(text: &str) -> String {
    collapse_whitespace(text)
}
