//! Command line front end for tagsnippet
//!
//! `tagsnippet analyze` fetches (or reads) a page and prints its score,
//! per-tag results, preview cards and recommendations. `tagsnippet meta-tags`
//! renders a tag block from a JSON config and flag overrides.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use url::Url;

use tagsnippet_core::export::{PreviewCard, preview_data, share_link, text_report, to_json_pretty};
use tagsnippet_core::generator::{MetaTagConfig, render_document, render_meta_tags};
use tagsnippet_core::url_utils::normalize_target_url;
use tagsnippet_core::{Analysis, FetchOptions, TagStatus, USER_AGENT, analyze, analyze_url};

const DIVIDER: &str = "─────────────────────────────────────────────────────────────";
const LABEL_WIDTH: usize = 20;
const CONTENT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Parser)]
#[command(
    name = "tagsnippet",
    version,
    about = "tagsnippet: score a page's SEO meta tags and generate better ones",
    after_help = "Set RUST_LOG=debug to see extraction and scoring details."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score the meta tags of a page and list what to fix
    Analyze(AnalyzeArgs),
    /// Generate a meta tag block from a config file and flags
    MetaTags(MetaTagArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Page to fetch; `https://` is assumed when no scheme is given
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub url: Option<String>,

    /// Analyze a local HTML file instead of fetching
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// URL to report for a local file
    #[arg(long = "url", value_name = "URL", requires = "file")]
    pub page_url: Option<String>,

    /// Print the full analysis as JSON
    #[arg(long, conflicts_with = "text")]
    pub json: bool,

    /// Print the short plain-text summary
    #[arg(long)]
    pub text: bool,

    /// Print a share link for the web app at this origin
    #[arg(long, value_name = "ORIGIN")]
    pub share: Option<String>,

    /// Also write the output to this file, or into this directory
    #[arg(short, long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// User-Agent header sent with the request
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Report,
    Json,
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Report | OutputFormat::Text => "txt",
        }
    }
}

impl AnalyzeArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.text {
            OutputFormat::Text
        } else {
            OutputFormat::Report
        }
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| USER_AGENT.to_string()),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[derive(Debug, Args)]
pub struct MetaTagArgs {
    /// JSON file with generator settings (camelCase keys, all optional)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Meta description
    #[arg(long)]
    pub description: Option<String>,

    /// Canonical URL, also used for og:url when that is unset
    #[arg(long, value_name = "URL")]
    pub canonical: Option<String>,

    #[arg(long)]
    pub keywords: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    /// Social preview image, used for og:image and twitter:image
    #[arg(long, value_name = "URL")]
    pub image: Option<String>,

    /// Twitter handle of the author, e.g. @tagsnippet
    #[arg(long, value_name = "HANDLE")]
    pub twitter_creator: Option<String>,

    /// Wrap the tags in a minimal HTML document
    #[arg(long)]
    pub document: bool,

    /// Also write the output to this file
    #[arg(short, long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

pub async fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let analysis = match (&args.file, &args.url) {
        (Some(path), _) => analyze_file(path, args.page_url.as_deref())?,
        (None, Some(target)) => analyze_url(target, &args.fetch_options())
            .await
            .with_context(|| format!("failed to analyze {target}"))?,
        (None, None) => anyhow::bail!("either a URL or --file is required"),
    };

    let format = args.format();
    let mut output = render_output(&analysis, format)?;
    if let Some(origin) = &args.share {
        let link = share_link(origin, &analysis).context("failed to encode share link")?;
        append_share_link(&mut output, format, &link);
    }

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    if let Some(base) = &args.save {
        let path = build_output_path(base, &analysis.url, format.extension());
        write_output(&path, &output)?;
        eprintln!("Saved analysis to {}", path.display());
    }

    Ok(())
}

/// JSON output stays parseable: the link goes to stderr instead.
fn append_share_link(output: &mut String, format: OutputFormat, link: &str) {
    if format == OutputFormat::Json {
        eprintln!("Share link: {link}");
        return;
    }
    if !output.ends_with('\n') {
        output.push('\n');
    }
    let _ = writeln!(output, "\nShare link: {link}");
}

pub fn run_meta_tags(args: MetaTagArgs) -> Result<()> {
    let config = load_meta_tag_config(&args)?;
    let output = if args.document {
        render_document(&config)
    } else {
        render_meta_tags(&config)
    };

    println!("{output}");

    if let Some(path) = &args.save {
        write_output(path, &format!("{output}\n"))?;
        eprintln!("Saved meta tags to {}", path.display());
    }

    Ok(())
}

/// Read the config file (if any) and apply flag overrides on top
pub fn load_meta_tag_config(args: &MetaTagArgs) -> Result<MetaTagConfig> {
    let mut config: MetaTagConfig = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid meta tag config {}", path.display()))?
        }
        None => MetaTagConfig::default(),
    };

    let overrides = [
        (&args.title, &mut config.title),
        (&args.description, &mut config.description),
        (&args.canonical, &mut config.canonical),
        (&args.keywords, &mut config.keywords),
        (&args.author, &mut config.author),
        (&args.image, &mut config.og_image),
        (&args.twitter_creator, &mut config.twitter_creator),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            *field = value.clone();
        }
    }

    Ok(config)
}

fn analyze_file(path: &Path, page_url: Option<&str>) -> Result<Analysis> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let label = match page_url {
        Some(url) => normalize_target_url(url)
            .with_context(|| format!("invalid URL: {url}"))?
            .to_string(),
        None => file_label(path),
    };

    log::info!("analyzing {} as {label}", path.display());
    Ok(analyze(&label, &html))
}

fn file_label(path: &Path) -> String {
    fs::canonicalize(path)
        .ok()
        .and_then(|absolute| Url::from_file_path(absolute).ok())
        .map(|url| url.to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn render_output(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Report => render_report(analysis),
        OutputFormat::Json => to_json_pretty(analysis).context("failed to serialize analysis")?,
        OutputFormat::Text => text_report(analysis),
    })
}

/// Terminal report: score buckets, per-tag table, previews, recommendations
pub fn render_report(analysis: &Analysis) -> String {
    let mut buf = String::new();
    let score = &analysis.score;

    push_section_header(&mut buf, "🔎", &format!("SEO Analysis: {}", analysis.url));
    push_key_value(
        &mut buf,
        "Score",
        &format!("{}/100 ({})", score.total, score.rating()),
    );
    push_key_value(
        &mut buf,
        "Search Optimization",
        &format!("{}/50", score.search_optimization),
    );
    push_key_value(
        &mut buf,
        "Social Preview",
        &format!("{}/30", score.social_preview),
    );
    push_key_value(
        &mut buf,
        "Technical Structure",
        &format!("{}/20", score.technical_structure),
    );
    buf.push('\n');

    push_section_header(&mut buf, "🏷️", "Meta Tags");
    for tag in &analysis.meta_tags {
        let marker = match tag.status {
            TagStatus::Present => "✅",
            TagStatus::Missing => "❌",
            TagStatus::Invalid => "⚠️",
        };
        let _ = writeln!(
            buf,
            "{marker} {:<width$} {:>2}/{:<2}  {}",
            tag.name.label(),
            tag.score,
            tag.max_score,
            tag.feedback,
            width = LABEL_WIDTH
        );
        if !tag.content.is_empty() {
            let _ = writeln!(buf, "   {}", truncate(&tag.content, CONTENT_PREVIEW_CHARS));
        }
    }
    buf.push('\n');

    push_section_header(&mut buf, "👀", "Previews");
    let preview = preview_data(analysis);
    push_preview(&mut buf, "Google", &preview.google);
    push_preview(&mut buf, "Facebook", &preview.facebook);
    push_preview(&mut buf, "Twitter", &preview.twitter);

    push_section_header(&mut buf, "💡", "Recommendations");
    if analysis.recommendations.is_empty() {
        let _ = writeln!(buf, "Nothing to fix. Every tag follows best practice.");
    }
    for (index, rec) in analysis.recommendations.iter().enumerate() {
        let _ = writeln!(buf, "{}. [{}] {}", index + 1, rec.category, rec.action);
    }

    buf
}

fn push_preview(buf: &mut String, name: &str, card: &PreviewCard) {
    let _ = writeln!(buf, "{name}");
    push_key_value(buf, "Title", &card.title);
    push_key_value(buf, "Description", &truncate(&card.description, CONTENT_PREVIEW_CHARS));
    push_key_value(buf, "URL", &card.url);
    if let Some(image) = &card.image {
        push_key_value(buf, "Image", image);
    }
    buf.push('\n');
}

fn push_section_header(buf: &mut String, icon: &str, title: &str) {
    let _ = writeln!(buf, "{DIVIDER}");
    let _ = writeln!(buf, "{icon} {title}");
    let _ = writeln!(buf, "{DIVIDER}");
}

fn push_key_value(buf: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(buf, "• {:<width$} : {}", label, value, width = LABEL_WIDTH);
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// A `base` with an extension is used as is; otherwise it is treated as a
/// directory and the file is named after the analyzed URL.
pub fn build_output_path(base: &Path, page_url: &str, extension: &str) -> PathBuf {
    if base.extension().is_some() {
        return base.to_path_buf();
    }

    let filename = match Url::parse(page_url) {
        Ok(url) => derive_output_filename(&url, extension),
        Err(_) => format!("page.{extension}"),
    };
    base.join(filename)
}

pub fn derive_output_filename(url: &Url, extension: &str) -> String {
    let mut parts = Vec::new();

    if url.scheme() == "file" {
        let stem = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .and_then(|name| name.split('.').next())
            .filter(|stem| !stem.is_empty())
            .unwrap_or("page");
        parts.push(sanitize_for_filename(stem));
    } else {
        parts.push(sanitize_for_filename(url.host_str().unwrap_or("page")));

        let path_component = url.path().trim_matches('/').replace('/', "_");
        if path_component.is_empty() {
            parts.push("index".to_string());
        } else {
            parts.push(sanitize_for_filename(&path_component));
        }

        if let Some(query) = url.query().filter(|query| !query.is_empty()) {
            parts.push(sanitize_for_filename(query));
        }
    }

    format!("{}.{extension}", parts.join("__"))
}

fn sanitize_for_filename(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
