use super::*;

fn record_for(html: &str) -> MetadataRecord {
    let url = Url::parse("https://blog.example.com/posts/hello-world").unwrap();
    let document = Html::parse_document(html);
    let page = Page::new(&document, &url);
    aggregate(&page)
}

#[test]
fn test_extract_basic_title_and_description() {
    let html = r#"
        <html>
            <head>
                <title>Example</title>
                <meta name="description" content="A sample page.">
            </head>
            <body><p>Hello</p></body>
        </html>
    "#;

    let record = record_for(html);
    assert_eq!(record.title.as_deref(), Some("Example"));
    assert_eq!(record.description.as_deref(), Some("A sample page."));
}

#[test]
fn test_social_markup_beats_generic_tags() {
    let html = r#"
        <html>
            <head>
                <title>Generic Title | Site</title>
                <meta name="description" content="Generic description">
                <meta property="og:title" content="OG Title">
                <meta name="twitter:title" content="Twitter Title">
                <meta property="og:description" content="OG description">
            </head>
        </html>
    "#;

    let record = record_for(html);
    assert_eq!(record.title.as_deref(), Some("OG Title"));
    assert_eq!(record.description.as_deref(), Some("OG description"));
}

#[test]
fn test_title_tag_beats_stale_meta_title() {
    let html = r#"
        <html><head>
            <title>Real Title</title>
            <meta name="title" content="Old SEO title">
            <meta itemprop="title" content="Older SEO title">
        </head></html>
    "#;
    assert_eq!(record_for(html).title.as_deref(), Some("Real Title"));
}

#[test]
fn test_missing_description_stays_absent() {
    let html = r#"
        <html>
            <head><title>Only a title</title></head>
            <body>
                <h1>Heading</h1>
                <p>There is plenty of body text here but no description tag.</p>
            </body>
        </html>
    "#;

    let record = record_for(html);
    assert_eq!(record.title.as_deref(), Some("Only a title"));
    assert_eq!(record.description, None);
    assert_eq!(record.author, None);
    assert_eq!(record.publisher, None);
    assert_eq!(record.date, None);
    assert_eq!(record.lang, None);
}

#[test]
fn test_jsonld_article() {
    let html = r#"
        <html lang="en-GB">
            <head>
                <script type="application/ld+json">
                {
                    "@context": "https://schema.org",
                    "@type": "NewsArticle",
                    "headline": "Rust 2.0 Announced",
                    "description": "Not really.",
                    "datePublished": "2024-04-01T08:00:00+01:00",
                    "author": [{"@type": "Person", "name": "Ferris Crab"}],
                    "image": ["https://cdn.example.com/ferris.png"],
                    "publisher": {
                        "@type": "Organization",
                        "name": "Crab News",
                        "logo": {"@type": "ImageObject", "url": "/static/logo.svg"}
                    }
                }
                </script>
            </head>
        </html>
    "#;

    let record = record_for(html);
    assert_eq!(record.title.as_deref(), Some("Rust 2.0 Announced"));
    assert_eq!(record.description.as_deref(), Some("Not really."));
    assert_eq!(record.author.as_deref(), Some("Ferris Crab"));
    assert_eq!(record.publisher.as_deref(), Some("Crab News"));
    assert_eq!(
        record.image.as_deref(),
        Some("https://cdn.example.com/ferris.png")
    );
    assert_eq!(
        record.logo.as_deref(),
        Some("https://blog.example.com/static/logo.svg")
    );
    assert_eq!(record.date.as_deref(), Some("2024-04-01T07:00:00.000Z"));
    assert_eq!(record.lang.as_deref(), Some("en"));
}

#[test]
fn test_author_rejects_urls_and_strips_by() {
    let html = r#"
        <html>
            <head>
                <meta property="article:author" content="https://facebook.com/someone">
            </head>
            <body><span class="byline">By   Grace Hopper</span></body>
        </html>
    "#;

    let record = record_for(html);
    assert_eq!(record.author.as_deref(), Some("Grace Hopper"));
}

#[test]
fn test_publisher_sources() {
    let html = r#"<head><meta name="application-name" content="Example App"></head>"#;
    assert_eq!(record_for(html).publisher.as_deref(), Some("Example App"));

    let html = r#"
        <head>
            <meta name="application-name" content="Example App">
            <meta property="og:site_name" content="Example Site">
        </head>
    "#;
    assert_eq!(record_for(html).publisher.as_deref(), Some("Example Site"));
}

#[test]
fn test_image_is_resolved_against_page_url() {
    let html = r#"
        <head><meta property="og:image" content="/images/cover.jpg?w=1200&amp;h=630"></head>
    "#;

    let record = record_for(html);
    assert_eq!(
        record.image.as_deref(),
        Some("https://blog.example.com/images/cover.jpg?w=1200&h=630")
    );
}

#[test]
fn test_image_falls_back_to_article_img() {
    let html = r#"
        <body>
            <img src="/header-banner.png">
            <article><p>Text</p><img src="photos/first.jpg"></article>
        </body>
    "#;

    let record = record_for(html);
    assert_eq!(
        record.image.as_deref(),
        Some("https://blog.example.com/posts/photos/first.jpg")
    );
}

#[test]
fn test_logo_prefers_largest_icon() {
    let html = r#"
        <head>
            <link rel="icon" href="/favicon-16.png" sizes="16x16">
            <link rel="apple-touch-icon" href="/touch-180.png" sizes="180x180">
            <link rel="icon" href="/favicon-32.png" sizes="32x32">
        </head>
    "#;

    let record = record_for(html);
    assert_eq!(
        record.logo.as_deref(),
        Some("https://blog.example.com/touch-180.png")
    );
}

#[test]
fn test_logo_falls_back_to_favicon() {
    let record = record_for("<html><head></head><body></body></html>");
    assert_eq!(
        record.logo.as_deref(),
        Some("https://blog.example.com/favicon.ico")
    );
}

#[test]
fn test_url_prefers_og_then_canonical() {
    let html = r#"<head><link rel="canonical" href="/posts/hello-world?ref=canonical"></head>"#;
    assert_eq!(
        record_for(html).url.as_deref(),
        Some("https://blog.example.com/posts/hello-world?ref=canonical")
    );

    let html = r#"
        <head>
            <link rel="canonical" href="/canonical">
            <meta property="og:url" content="https://example.com/og">
        </head>
    "#;
    assert_eq!(record_for(html).url.as_deref(), Some("https://example.com/og"));
}

#[test]
fn test_url_absent_from_aggregate_but_defaulted_by_extract_record() {
    let html = "<html><head><title>t</title></head></html>";
    assert_eq!(record_for(html).url, None);

    let url = Url::parse("https://blog.example.com/a").unwrap();
    let record = extract_record(html, &url);
    assert_eq!(record.url.as_deref(), Some("https://blog.example.com/a"));
}

#[test]
fn test_date_skips_unparseable_candidates() {
    let html = r#"
        <head>
            <meta property="article:published_time" content="sometime last week">
            <meta name="date" content="2023-11-05">
        </head>
        <body><time datetime="2020-01-01T00:00:00Z">ages ago</time></body>
    "#;

    let record = record_for(html);
    assert_eq!(record.date.as_deref(), Some("2023-11-05T00:00:00.000Z"));
}

#[test]
fn test_publication_date_beats_modification_date() {
    let html = r#"
        <head>
            <script type="application/ld+json">{"dateModified": "2024-06-01"}</script>
            <meta property="article:modified_time" content="2024-05-01T00:00:00Z">
            <meta property="og:updated_time" content="2024-04-01T00:00:00Z">
        </head>
        <body><time datetime="2021-03-04T05:06:07Z">March</time></body>
    "#;
    assert_eq!(record_for(html).date.as_deref(), Some("2021-03-04T05:06:07.000Z"));

    let html = r#"<head><meta property="article:modified_time" content="2024-05-01T00:00:00Z"></head>"#;
    assert_eq!(record_for(html).date.as_deref(), Some("2024-05-01T00:00:00.000Z"));
}

#[test]
fn test_lang_from_locale_when_html_lang_missing() {
    let html = r#"<head><meta property="og:locale" content="ko_KR"></head>"#;
    assert_eq!(record_for(html).lang.as_deref(), Some("ko"));
}

#[test]
fn test_values_are_cleaned() {
    let html = "<head><title>\n   Spaced\t\tOut &amp; About\u{200B}  </title></head>";
    assert_eq!(record_for(html).title.as_deref(), Some("Spaced Out & About"));
}

#[test]
fn test_malformed_html_does_not_abort_other_fields() {
    let html = r#"
        <html><head>
            <meta name="description" content="Still found">
            <script type="application/ld+json">{"headline": </script>
        <body><div><p>unclosed
    "#;

    let record = record_for(html);
    assert_eq!(record.description.as_deref(), Some("Still found"));
    assert_eq!(
        record.logo.as_deref(),
        Some("https://blog.example.com/favicon.ico")
    );
}

#[test]
fn test_aggregate_is_deterministic() {
    let html = r#"
        <html lang="de"><head>
            <title>Stable</title>
            <meta property="og:image" content="/a.png">
            <meta name="author" content="Someone">
        </head></html>
    "#;
    assert_eq!(record_for(html), record_for(html));
}

#[test]
fn test_extractor_table_covers_every_field_once() {
    let fields: Vec<Field> = FIELD_EXTRACTORS.iter().map(|(field, _)| *field).collect();
    assert_eq!(fields, Field::ALL.to_vec());
}
