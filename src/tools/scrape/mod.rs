//! Parsed view of one page: meta tags and JSON-LD collected once, plus
//! selector helpers the field extractors share.

mod utils;

use scraper::{Html, Selector};
use serde_json::Value;
use url::Url;

use crate::selectors::TITLE_SELECTOR;

use utils::*;

/// One `<meta>` tag, keyed by `name`, `property` or `itemprop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: String,
    pub content: String,
}

/// A parsed document plus the URL it was fetched from.
pub struct Page<'a> {
    document: &'a Html,
    url: &'a Url,
    meta: Vec<MetaTag>,
    jsonld: Vec<Value>,
}

impl<'a> Page<'a> {
    pub fn new(document: &'a Html, url: &'a Url) -> Self {
        Self {
            document,
            url,
            meta: collect_meta_tags(document),
            jsonld: collect_jsonld(document),
        }
    }

    pub fn document(&self) -> &'a Html {
        self.document
    }

    pub fn url(&self) -> &'a Url {
        self.url
    }

    pub fn meta_tags(&self) -> &[MetaTag] {
        &self.meta
    }

    /// Flattened JSON-LD objects (`@graph` members included).
    pub fn jsonld(&self) -> &[Value] {
        &self.jsonld
    }

    /// First non-blank `content` for a meta key (case-insensitive).
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .filter(|tag| tag.key.eq_ignore_ascii_case(key))
            .map(|tag| tag.content.trim())
            .find(|content| !content.is_empty())
    }

    /// Text of the document's `<title>`, kept apart from `<meta name="title">`.
    pub fn title_tag(&self) -> Option<String> {
        self.document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>())
            .filter(|text| !text.trim().is_empty())
    }

    /// First JSON-LD value at `path` rendered as text (strings, or an object's `name`).
    pub fn jsonld_text(&self, path: &[&str]) -> Option<String> {
        self.jsonld
            .iter()
            .filter_map(|obj| lookup_path(obj, path))
            .find_map(|value| value_text(value, &["name"]))
    }

    /// First JSON-LD value at `path` rendered as a link (strings, or an object's `url`).
    pub fn jsonld_link(&self, path: &[&str]) -> Option<String> {
        self.jsonld
            .iter()
            .filter_map(|obj| lookup_path(obj, path))
            .find_map(|value| value_text(value, &["url", "contentUrl", "@id"]))
    }

    /// Text of the first element matching `selector` that has any.
    ///
    /// An unparseable selector yields `None`.
    pub fn select_text(&self, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        self.document
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .find(|text| !text.trim().is_empty())
    }

    /// Attribute of the first element matching `selector` that has it non-blank.
    pub fn select_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        self.document
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .find(|value| !value.trim().is_empty())
            .map(|value| value.to_string())
    }

    /// Resolve `href` against the page URL; only http(s) results are kept.
    pub fn resolve(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        let absolute = self.url.join(href).ok()?;
        match absolute.scheme() {
            "http" | "https" => Some(absolute.to_string()),
            _ => None,
        }
    }
}
