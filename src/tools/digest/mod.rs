//! Text Summarizer
//!
//! Reduces a page to a bounded plain-text digest used only as input to
//! enrichment. Boilerplate regions are skipped while walking the tree, so
//! the shared document is never mutated.

mod utils;

use scraper::Html;
use serde::Serialize;

use crate::selectors::{BODY_SELECTOR, HEADINGS_SELECTOR, META_DESCRIPTION_SELECTOR, TITLE_SELECTOR};
use crate::tools::clean::{collapse, truncate_chars};
use utils::*;

/// Upper bound on the joined heading text, in characters.
pub const MAX_HEADINGS_CHARS: usize = 500;

/// Upper bound on the visible body text, in characters.
pub const MAX_CONTENT_CHARS: usize = 2000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDigest {
    pub title: String,
    /// H1-H3 text joined by single spaces.
    pub headings: String,
    /// Raw `meta[name=description]` content, possibly empty.
    pub meta_description: String,
    /// Whitespace-collapsed visible body text.
    pub content: String,
}

/// Summarize an already parsed document.
pub fn summarize(document: &Html) -> TextDigest {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let headings = document
        .select(&HEADINGS_SELECTOR)
        .filter(|el| !inside_boilerplate(*el))
        .map(|el| visible_text(el).trim().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let meta_description = document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string();

    let content = document
        .select(&BODY_SELECTOR)
        .next()
        .map(|body| collapse(&visible_text(body)))
        .unwrap_or_default();

    TextDigest {
        title,
        headings: truncate_chars(&headings, MAX_HEADINGS_CHARS),
        meta_description,
        content: truncate_chars(&content, MAX_CONTENT_CHARS),
    }
}

/// Parse `html` and summarize it.
///
/// # Examples
/// ```
/// use metascrape::tools::digest::summarize_html;
///
/// let digest = summarize_html(
///     "<title>T</title><body><nav>Menu</nav><h1>Hello</h1><p>World</p></body>",
/// );
/// assert_eq!(digest.title, "T");
/// assert_eq!(digest.headings, "Hello");
/// assert_eq!(digest.content, "Hello World");
/// ```
pub fn summarize_html(html: &str) -> TextDigest {
    summarize(&Html::parse_document(html))
}
