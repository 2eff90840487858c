//! Meta tag generator
//!
//! Renders the `<head>` tags for a page from a [`MetaTagConfig`]. Social tags
//! fall back to the basic page fields when left empty, so a config with only
//! a title and description still yields complete Open Graph and Twitter tags.

use serde::{Deserialize, Serialize};

fn default_viewport() -> String {
    "width=device-width, initial-scale=1.0".to_string()
}

fn default_robots() -> String {
    "index, follow".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_charset() -> String {
    "UTF-8".to_string()
}

fn default_og_type() -> String {
    "website".to_string()
}

fn default_twitter_card() -> String {
    "summary_large_image".to_string()
}

/// Input for the generator. Missing JSON fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub author: String,
    #[serde(default = "default_viewport")]
    pub viewport: String,
    #[serde(default = "default_robots")]
    pub robots: String,
    #[serde(default)]
    pub canonical: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_charset")]
    pub charset: String,

    #[serde(default)]
    pub og_title: String,
    #[serde(default)]
    pub og_description: String,
    #[serde(default)]
    pub og_image: String,
    #[serde(default)]
    pub og_url: String,
    #[serde(default = "default_og_type")]
    pub og_type: String,
    #[serde(default)]
    pub og_site_name: String,

    #[serde(default = "default_twitter_card")]
    pub twitter_card: String,
    #[serde(default)]
    pub twitter_title: String,
    #[serde(default)]
    pub twitter_description: String,
    #[serde(default)]
    pub twitter_image: String,
    #[serde(default)]
    pub twitter_creator: String,
    #[serde(default)]
    pub twitter_site: String,
}

impl Default for MetaTagConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            keywords: String::new(),
            author: String::new(),
            viewport: default_viewport(),
            robots: default_robots(),
            canonical: String::new(),
            language: default_language(),
            charset: default_charset(),
            og_title: String::new(),
            og_description: String::new(),
            og_image: String::new(),
            og_url: String::new(),
            og_type: default_og_type(),
            og_site_name: String::new(),
            twitter_card: default_twitter_card(),
            twitter_title: String::new(),
            twitter_description: String::new(),
            twitter_image: String::new(),
            twitter_creator: String::new(),
            twitter_site: String::new(),
        }
    }
}

/// Render the tag block, one tag per line
pub fn render_meta_tags(config: &MetaTagConfig) -> String {
    let mut tags = vec![
        format!("<title>{}</title>", escape_text(&config.title)),
        format!(r#"<meta charset="{}">"#, escape_attr(&config.charset)),
        meta_name("viewport", &config.viewport),
        meta_name("description", &config.description),
        meta_name("keywords", &config.keywords),
        meta_name("author", &config.author),
        meta_name("robots", &config.robots),
        meta_name("language", &config.language),
    ];
    if !config.canonical.is_empty() {
        tags.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            escape_attr(&config.canonical)
        ));
    }

    tags.extend([
        meta_property("og:title", or(&config.og_title, &config.title)),
        meta_property(
            "og:description",
            or(&config.og_description, &config.description),
        ),
        meta_property("og:image", &config.og_image),
        meta_property("og:url", or(&config.og_url, &config.canonical)),
        meta_property("og:type", &config.og_type),
        meta_property("og:site_name", &config.og_site_name),
        meta_name("twitter:card", &config.twitter_card),
        meta_name("twitter:title", or(&config.twitter_title, &config.title)),
        meta_name(
            "twitter:description",
            or(&config.twitter_description, &config.description),
        ),
        meta_name(
            "twitter:image",
            or(&config.twitter_image, &config.og_image),
        ),
    ]);
    if !config.twitter_creator.is_empty() {
        tags.push(meta_name("twitter:creator", &config.twitter_creator));
    }
    if !config.twitter_site.is_empty() {
        tags.push(meta_name("twitter:site", &config.twitter_site));
    }

    tags.join("\n")
}

/// Render a minimal HTML document around the generated tags
pub fn render_document(config: &MetaTagConfig) -> String {
    let head = render_meta_tags(config)
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n{}\n</head>\n<body>\n  <!-- Your content here -->\n</body>\n</html>",
        escape_attr(&config.language),
        head
    )
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn meta_name(name: &str, content: &str) -> String {
    format!(r#"<meta name="{name}" content="{}">"#, escape_attr(content))
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{property}" content="{}">"#,
        escape_attr(content)
    )
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
