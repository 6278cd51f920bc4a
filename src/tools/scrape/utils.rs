use scraper::Html;
use serde_json::Value;

use super::MetaTag;
use crate::selectors::{JSONLD_SELECTOR, META_SELECTOR};

pub(super) fn collect_meta_tags(document: &Html) -> Vec<MetaTag> {
    let mut tags = Vec::new();

    for el in document.select(&META_SELECTOR) {
        let attrs = el.value();
        let key = attrs
            .attr("name")
            .or_else(|| attrs.attr("property"))
            .or_else(|| attrs.attr("itemprop"));
        let content = attrs.attr("content");
        if let (Some(k), Some(v)) = (key, content) {
            if !v.trim().is_empty() {
                tags.push(MetaTag {
                    key: k.trim().to_string(),
                    content: v.to_string(),
                });
            }
        }
    }

    tags
}

pub(super) fn collect_jsonld(document: &Html) -> Vec<Value> {
    document
        .select(&JSONLD_SELECTOR)
        .filter_map(|el| parse_jsonld_block(&el.text().collect::<String>()))
        .flat_map(flatten_jsonld)
        .collect()
}

/// Parse one script body; tolerates several objects separated by commas.
fn parse_jsonld_block(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_str(raw)
        .ok()
        .or_else(|| serde_json::from_str(&format!("[{raw}]")).ok())
}

fn flatten_jsonld(value: Value) -> Vec<Value> {
    match value {
        Value::Array(arr) => arr.into_iter().flat_map(flatten_jsonld).collect(),
        Value::Object(mut obj) => {
            let Some(graph) = obj.remove("@graph") else {
                return vec![Value::Object(obj)];
            };
            let mut out = Vec::new();
            // A wrapper holding only `@context` next to `@graph` carries no data.
            if obj.keys().any(|k| !k.starts_with('@')) {
                out.push(Value::Object(obj));
            }
            out.extend(flatten_jsonld(graph));
            out
        }
        _ => Vec::new(),
    }
}

/// Walk `path` through nested objects; arrays step into their first element.
pub(super) fn lookup_path<'v>(value: &'v Value, path: &[&str]) -> Option<&'v Value> {
    let mut current = first_of(value);
    for key in path {
        current = first_of(current.get(key)?);
    }
    Some(current)
}

fn first_of(value: &Value) -> &Value {
    match value {
        Value::Array(items) => items.first().unwrap_or(value),
        other => other,
    }
}

/// Render a JSON-LD value as text: strings directly, objects via the first
/// non-blank string under one of `keys`.
pub(super) fn value_text(value: &Value, keys: &[&str]) -> Option<String> {
    match first_of(value) {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(obj) => keys
            .iter()
            .filter_map(|key| obj.get(*key))
            .map(first_of)
            .filter_map(Value::as_str)
            .find(|s| !s.trim().is_empty())
            .map(str::to_string),
        _ => None,
    }
}
