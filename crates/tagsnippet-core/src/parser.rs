//! Tolerant extraction of SEO facts from HTML

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::types::{ExtractedFacts, OpenGraph, TwitterCard, text_length};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("invalid built-in selector")
}

static TITLE: Lazy<Selector> = Lazy::new(|| selector("title"));
static META_DESCRIPTION: Lazy<Selector> = Lazy::new(|| selector(r#"meta[name="description"]"#));
static META_ROBOTS: Lazy<Selector> = Lazy::new(|| selector(r#"meta[name="robots"]"#));
static LINK_CANONICAL: Lazy<Selector> = Lazy::new(|| selector(r#"link[rel="canonical"]"#));
static H1: Lazy<Selector> = Lazy::new(|| selector("h1"));

static OG_TITLE: Lazy<Selector> = Lazy::new(|| selector(r#"meta[property="og:title"]"#));
static OG_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| selector(r#"meta[property="og:description"]"#));
static OG_IMAGE: Lazy<Selector> = Lazy::new(|| selector(r#"meta[property="og:image"]"#));
static OG_URL: Lazy<Selector> = Lazy::new(|| selector(r#"meta[property="og:url"]"#));
static OG_TYPE: Lazy<Selector> = Lazy::new(|| selector(r#"meta[property="og:type"]"#));

static TWITTER_CARD: Lazy<Selector> = Lazy::new(|| selector(r#"meta[name="twitter:card"]"#));
static TWITTER_TITLE: Lazy<Selector> = Lazy::new(|| selector(r#"meta[name="twitter:title"]"#));
static TWITTER_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| selector(r#"meta[name="twitter:description"]"#));
static TWITTER_IMAGE: Lazy<Selector> = Lazy::new(|| selector(r#"meta[name="twitter:image"]"#));
static TWITTER_CREATOR: Lazy<Selector> =
    Lazy::new(|| selector(r#"meta[name="twitter:creator"]"#));

/// Extract SEO facts from an HTML document.
///
/// Never fails: the parser recovers from malformed markup and missing tags
/// degrade to empty strings or `None`. Every field except the H1 list uses the
/// first matching element only.
pub fn extract_facts(html: &str) -> ExtractedFacts {
    let document = Html::parse_document(html);
    let facts = extract_from_document(&document);

    log::debug!(
        "extracted title={} units, description={} units, {} h1 tag(s)",
        text_length(&facts.title),
        text_length(&facts.description),
        facts.h1_tags.len()
    );

    facts
}

/// Extract SEO facts from an already parsed document
pub fn extract_from_document(document: &Html) -> ExtractedFacts {
    ExtractedFacts {
        title: first(document, &TITLE)
            .map(|el| element_text(&el))
            .unwrap_or_default(),
        description: first_attr(document, &META_DESCRIPTION, "content").unwrap_or_default(),
        canonical: first_attr(document, &LINK_CANONICAL, "href").unwrap_or_default(),
        robots: first_attr(document, &META_ROBOTS, "content").unwrap_or_default(),
        h1_tags: document.select(&H1).map(|el| element_text(&el)).collect(),
        open_graph: OpenGraph {
            title: first_attr(document, &OG_TITLE, "content"),
            description: first_attr(document, &OG_DESCRIPTION, "content"),
            image: first_attr(document, &OG_IMAGE, "content"),
            url: first_attr(document, &OG_URL, "content"),
            kind: first_attr(document, &OG_TYPE, "content"),
        },
        twitter: TwitterCard {
            card: first_attr(document, &TWITTER_CARD, "content"),
            title: first_attr(document, &TWITTER_TITLE, "content"),
            description: first_attr(document, &TWITTER_DESCRIPTION, "content"),
            image: first_attr(document, &TWITTER_IMAGE, "content"),
            creator: first_attr(document, &TWITTER_CREATOR, "content"),
        },
    }
}

fn first<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    document.select(selector).next()
}

/// Attribute of the first match; `None` when no element matches or the
/// attribute is missing.
fn first_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    first(document, selector)
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty_html() {
        let facts = extract_facts("");
        assert_eq!(facts, ExtractedFacts::default());
    }

    #[test]
    fn test_extract_basic_head() {
        let html = r#"
            <html>
                <head>
                    <title>  Example Page  </title>
                    <meta name="description" content="An example description">
                    <meta name="robots" content="index, follow">
                    <link rel="canonical" href="https://example.com/page">
                </head>
                <body><h1>Welcome</h1></body>
            </html>
        "#;

        let facts = extract_facts(html);
        assert_eq!(facts.title, "Example Page");
        assert_eq!(facts.description, "An example description");
        assert_eq!(facts.robots, "index, follow");
        assert_eq!(facts.canonical, "https://example.com/page");
        assert_eq!(facts.h1_tags, vec!["Welcome"]);
    }

    #[test]
    fn test_extract_uses_first_match() {
        let html = r#"
            <head>
                <title>First</title>
                <meta name="description" content="one">
                <meta name="description" content="two">
            </head>
            <body><svg><title>Second</title></svg></body>
        "#;

        let facts = extract_facts(html);
        assert_eq!(facts.title, "First");
        assert_eq!(facts.description, "one");
    }

    #[test]
    fn test_extract_all_h1_in_document_order() {
        let html = r#"
            <body>
                <h1>Alpha</h1>
                <div><h1> Beta <em>bold</em> </h1></div>
                <section><h1></h1></section>
            </body>
        "#;

        let facts = extract_facts(html);
        assert_eq!(facts.h1_tags, vec!["Alpha", "Beta bold", ""]);
    }

    #[test]
    fn test_extract_open_graph_absence_vs_empty() {
        let html = r#"
            <head>
                <meta property="og:title" content="OG Title">
                <meta property="og:description" content="">
                <meta property="og:image">
            </head>
        "#;

        let facts = extract_facts(html);
        assert_eq!(facts.open_graph.title.as_deref(), Some("OG Title"));
        assert_eq!(facts.open_graph.description.as_deref(), Some(""));
        // tag present without a content attribute reads as absent
        assert_eq!(facts.open_graph.image, None);
        assert_eq!(facts.open_graph.url, None);
        assert_eq!(facts.open_graph.kind, None);
    }

    #[test]
    fn test_extract_twitter_card() {
        let html = r#"
            <head>
                <meta name="twitter:card" content="summary_large_image">
                <meta name="twitter:title" content="Tweet Title">
                <meta name="twitter:creator" content="@tagsnippet">
                <meta property="twitter:image" content="ignored.png">
            </head>
        "#;

        let facts = extract_facts(html);
        assert_eq!(facts.twitter.card.as_deref(), Some("summary_large_image"));
        assert_eq!(facts.twitter.title.as_deref(), Some("Tweet Title"));
        assert_eq!(facts.twitter.creator.as_deref(), Some("@tagsnippet"));
        // twitter tags are matched by name, not property
        assert_eq!(facts.twitter.image, None);
        assert_eq!(facts.twitter.description, None);
    }

    #[test]
    fn test_extract_malformed_html() {
        let html = r#"<html><head><title>Broken<meta name="description" content="x"
            <body><h1>Unclosed <h1>Nested</p></div>"#;

        // Must not panic, whatever the recovered tree looks like
        let facts = extract_facts(html);
        assert!(facts.h1_tags.len() <= 2);
    }

    #[test]
    fn test_extract_ignores_other_meta_names() {
        let html = r#"
            <meta name="keywords" content="a, b">
            <meta property="description" content="not a name attribute">
            <link rel="alternate" href="https://example.com/fr">
        "#;

        let facts = extract_facts(html);
        assert!(facts.description.is_empty());
        assert!(facts.canonical.is_empty());
    }
}
