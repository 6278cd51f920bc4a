use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::selectors::LINK_REL_SELECTOR;
use crate::tools::clean::clean;
use crate::tools::scrape::Page;

/// Where a candidate value comes from.
pub(super) enum Source {
    /// `<meta>` content by name, property or itemprop.
    Meta(&'static str),
    /// JSON-LD text at a property path (strings, or an object's `name`).
    JsonLd(&'static [&'static str]),
    /// JSON-LD link at a property path (strings, or an object's `url`).
    JsonLdLink(&'static [&'static str]),
    /// Text of the first matching element.
    Text(&'static str),
    /// Attribute of the first matching element.
    Attr(&'static str, &'static str),
    /// Anything a table entry can't express.
    Custom(fn(&Page<'_>) -> Option<String>),
}

impl Source {
    fn read(&self, page: &Page<'_>) -> Option<String> {
        match self {
            Source::Meta(key) => page.meta(key).map(str::to_string),
            Source::JsonLd(path) => page.jsonld_text(path),
            Source::JsonLdLink(path) => page.jsonld_link(path),
            Source::Text(selector) => page.select_text(selector),
            Source::Attr(selector, attr) => page.select_attr(selector, attr),
            Source::Custom(read) => read(page),
        }
    }
}

/// First source whose raw value survives `finish`.
pub(super) fn first_match(
    page: &Page<'_>,
    sources: &[Source],
    finish: fn(&Page<'_>, &str) -> Option<String>,
) -> Option<String> {
    sources
        .iter()
        .filter_map(|source| source.read(page))
        .find_map(|raw| finish(page, &raw))
}

/* ------------ finishers ------------ */

pub(super) fn as_text(_page: &Page<'_>, raw: &str) -> Option<String> {
    clean(raw)
}

/// Resolve to an absolute http(s) URL.
pub(super) fn as_link(page: &Page<'_>, raw: &str) -> Option<String> {
    page.resolve(&html_escape::decode_html_entities(raw))
}

/// Person names: no URLs, no "By " prefix, nothing paragraph-sized.
pub(super) fn as_author(_page: &Page<'_>, raw: &str) -> Option<String> {
    let text = clean(raw)?;
    let text = strip_by_prefix(&text).to_string();
    if text.is_empty() || text.chars().count() > MAX_AUTHOR_CHARS || looks_like_url(&text) {
        return None;
    }
    Some(text)
}

pub(super) fn as_date(_page: &Page<'_>, raw: &str) -> Option<String> {
    normalize_date(raw)
}

pub(super) fn as_lang(_page: &Page<'_>, raw: &str) -> Option<String> {
    normalize_lang(raw)
}

const MAX_AUTHOR_CHARS: usize = 100;

fn strip_by_prefix(text: &str) -> &str {
    let lower = text.to_ascii_lowercase();
    if lower.starts_with("by ") {
        text[3..].trim_start()
    } else {
        text
    }
}

fn looks_like_url(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("www.")
}

/// Normalize a date string to ISO-8601 UTC with millisecond precision.
///
/// Accepts RFC 3339, RFC 2822, offset-less ISO timestamps (read as UTC) and
/// bare calendar dates. Anything else is rejected.
///
/// # Examples
/// ```
/// use metascrape::tools::extract::normalize_date;
///
/// assert_eq!(
///     normalize_date("2024-03-05T10:00:00+02:00").as_deref(),
///     Some("2024-03-05T08:00:00.000Z")
/// );
/// assert_eq!(normalize_date("2024-03-05").as_deref(), Some("2024-03-05T00:00:00.000Z"));
/// assert_eq!(normalize_date("last Tuesday"), None);
/// ```
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    parse_date(raw).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Offsets without a colon (`+0000`) are common in feeds and CMS output.
    for fmt in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

/// Reduce a language tag or locale to its lowercase primary subtag.
///
/// # Examples
/// ```
/// use metascrape::tools::extract::normalize_lang;
///
/// assert_eq!(normalize_lang("en-US").as_deref(), Some("en"));
/// assert_eq!(normalize_lang("ko_KR").as_deref(), Some("ko"));
/// assert_eq!(normalize_lang("english"), None);
/// ```
pub fn normalize_lang(raw: &str) -> Option<String> {
    let primary = raw.trim().split(|c| c == '-' || c == '_').next()?.trim();
    let valid =
        (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
    valid.then(|| primary.to_ascii_lowercase())
}

/// Largest declared `<link rel="...icon...">`; touch icons win ties.
pub(super) fn largest_icon(page: &Page<'_>) -> Option<String> {
    let mut best: Option<((u32, bool), String)> = None;

    for el in page.document().select(&LINK_REL_SELECTOR) {
        let attrs = el.value();
        let rel = attrs.attr("rel").unwrap_or_default().to_ascii_lowercase();
        let tokens: Vec<&str> = rel.split_whitespace().collect();
        let touch = tokens.iter().any(|t| t.starts_with("apple-touch-icon"));
        if !touch && !tokens.contains(&"icon") {
            continue;
        }
        let Some(href) = attrs.attr("href") else {
            continue;
        };
        let rank = (declared_size(attrs.attr("sizes")), touch);
        if best.as_ref().map_or(true, |(current, _)| rank > *current) {
            best = Some((rank, href.to_string()));
        }
    }

    best.map(|(_, href)| href)
}

/// Largest edge from a `sizes` attribute such as `"32x32 180x180"`.
fn declared_size(sizes: Option<&str>) -> u32 {
    sizes
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|size| {
            let (w, h) = size.to_ascii_lowercase().split_once('x').map(|(w, h)| {
                (w.parse::<u32>().unwrap_or(0), h.parse::<u32>().unwrap_or(0))
            })?;
            Some(w.max(h))
        })
        .max()
        .unwrap_or(0)
}

pub(super) fn title_tag(page: &Page<'_>) -> Option<String> {
    page.title_tag()
}

/// `{origin}/favicon.ico`; the only value derived from the URL alone.
pub(super) fn favicon(page: &Page<'_>) -> Option<String> {
    page.resolve("/favicon.ico")
}
