//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for JSON-LD script tags.
pub static JSONLD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script[type='application/ld+json']").expect("valid jsonld selector")
});

/// Selector for `<body>` elements.
pub static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("valid body selector"));

/// Selector for `<title>` tags.
pub static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("valid title selector"));

/// Selector for metadata tags keyed by name, property or itemprop.
pub static META_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name], meta[property], meta[itemprop]").expect("valid metadata selector")
});

/// Selector for the page description tag (digest input).
pub static META_DESCRIPTION_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='description']").expect("valid description selector")
});

/// Selector for top-level headings, in document order.
pub static HEADINGS_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3").expect("valid headings selector"));

/// Selector for `<link rel=... href=...>` elements.
pub static LINK_REL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("link[rel][href]").expect("valid link rel selector"));
