//! One extractor per field. Sources are listed in precedence order:
//! structured and social markup first, generic HTML next, URL-derived last.

use super::utils::*;
use crate::tools::scrape::Page;

const TITLE: &[Source] = &[
    Source::Meta("og:title"),
    Source::Meta("twitter:title"),
    Source::JsonLd(&["headline"]),
    Source::Custom(title_tag),
    Source::Text(".post-title"),
    Source::Text(".entry-title"),
    Source::Text("h1[class*='title']"),
];

const DESCRIPTION: &[Source] = &[
    Source::Meta("og:description"),
    Source::Meta("twitter:description"),
    Source::Meta("description"),
    Source::JsonLd(&["description"]),
];

const AUTHOR: &[Source] = &[
    Source::JsonLd(&["author"]),
    Source::Meta("author"),
    Source::Meta("article:author"),
    Source::Text("[itemprop*='author'] [itemprop='name']"),
    Source::Text("[itemprop*='author']"),
    Source::Text("[rel='author']"),
    Source::Text(".byline"),
    Source::Text("a[class*='author']"),
    Source::Text(".author"),
];

const PUBLISHER: &[Source] = &[
    Source::Meta("og:site_name"),
    Source::JsonLd(&["publisher"]),
    Source::Meta("application-name"),
    Source::Meta("apple-mobile-web-app-title"),
    Source::Meta("al:iphone:app_name"),
    Source::Meta("al:android:app_name"),
    Source::Meta("twitter:app:name:iphone"),
];

const IMAGE: &[Source] = &[
    Source::Meta("og:image:secure_url"),
    Source::Meta("og:image:url"),
    Source::Meta("og:image"),
    Source::Meta("twitter:image:src"),
    Source::Meta("twitter:image"),
    Source::Attr("img[itemprop='image']", "src"),
    Source::Meta("image"),
    Source::JsonLdLink(&["image"]),
    Source::Attr("link[rel='image_src']", "href"),
    Source::Attr("article img[src]", "src"),
];

const LOGO: &[Source] = &[
    Source::JsonLdLink(&["publisher", "logo"]),
    Source::JsonLdLink(&["logo"]),
    Source::Meta("og:logo"),
    Source::Meta("logo"),
    Source::Attr("img[itemprop='logo']", "src"),
    Source::Custom(largest_icon),
    Source::Custom(favicon),
];

const URL: &[Source] = &[
    Source::Meta("og:url"),
    Source::Attr("link[rel='canonical']", "href"),
    Source::Meta("twitter:url"),
    Source::Meta("al:web:url"),
    Source::JsonLdLink(&["url"]),
];

const DATE: &[Source] = &[
    Source::JsonLd(&["datePublished"]),
    Source::JsonLd(&["dateCreated"]),
    Source::Meta("article:published_time"),
    Source::Meta("datePublished"),
    Source::Meta("date"),
    Source::Meta("dc.date"),
    Source::Meta("dc.date.issued"),
    Source::Attr("[itemprop='datePublished']", "datetime"),
    Source::Attr("time[datetime]", "datetime"),
    Source::JsonLd(&["dateModified"]),
    Source::Meta("article:modified_time"),
    Source::Meta("og:updated_time"),
];

const LANG: &[Source] = &[
    Source::Attr("html[lang]", "lang"),
    Source::Attr("meta[http-equiv='content-language']", "content"),
    Source::Attr("meta[http-equiv='Content-Language']", "content"),
    Source::Meta("og:locale"),
    Source::JsonLd(&["inLanguage"]),
    Source::Meta("inLanguage"),
];

pub(super) fn title(page: &Page<'_>) -> Option<String> {
    first_match(page, TITLE, as_text)
}

pub(super) fn description(page: &Page<'_>) -> Option<String> {
    first_match(page, DESCRIPTION, as_text)
}

pub(super) fn author(page: &Page<'_>) -> Option<String> {
    first_match(page, AUTHOR, as_author)
}

pub(super) fn publisher(page: &Page<'_>) -> Option<String> {
    first_match(page, PUBLISHER, as_text)
}

pub(super) fn image(page: &Page<'_>) -> Option<String> {
    first_match(page, IMAGE, as_link)
}

pub(super) fn logo(page: &Page<'_>) -> Option<String> {
    first_match(page, LOGO, as_link)
}

pub(super) fn url(page: &Page<'_>) -> Option<String> {
    first_match(page, URL, as_link)
}

pub(super) fn date(page: &Page<'_>) -> Option<String> {
    first_match(page, DATE, as_date)
}

pub(super) fn lang(page: &Page<'_>) -> Option<String> {
    first_match(page, LANG, as_lang)
}
