//! Read-only views of an [`Analysis`]: JSON export, plain-text summary,
//! share links and social preview cards.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;
use thiserror::Error;

use crate::types::{Analysis, Recommendation, ScoreBreakdown, TagCategory, TagStatus};
use crate::url_utils::normalize_origin;

const NO_TITLE: &str = "No title available";
const NO_DESCRIPTION: &str = "No description available";
const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// Pretty-printed JSON export of a full analysis
pub fn to_json_pretty(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}

/// Short plain-text summary suitable for pasting into a chat or ticket
pub fn text_report(analysis: &Analysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SEO Analysis Report for {}", analysis.url);
    let _ = writeln!(out);
    let _ = writeln!(out, "Score: {}/100", analysis.score.total);
    let _ = writeln!(out);
    let _ = writeln!(out, "Meta Tags:");
    let _ = writeln!(out, "- Title: {}", or_missing(&analysis.title));
    let _ = writeln!(out, "- Description: {}", or_missing(&analysis.description));
    let _ = writeln!(out);
    let _ = write!(out, "Recommendations:");
    for rec in &analysis.recommendations {
        let _ = write!(
            out,
            "\n- {} ({} priority)",
            rec.action,
            rec.display_priority()
        );
    }
    out
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() { "Missing" } else { value }
}

/// Per-tag fields carried in a share link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareTag {
    pub name: TagCategory,
    pub score: u32,
    pub max_score: u32,
    pub status: TagStatus,
    pub feedback: String,
}

/// Compact subset of an analysis encoded into share links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub url: String,
    pub score: ScoreBreakdown,
    pub title: String,
    pub description: String,
    pub meta_tags: Vec<ShareTag>,
    pub recommendations: Vec<Recommendation>,
}

impl From<&Analysis> for SharePayload {
    fn from(analysis: &Analysis) -> Self {
        Self {
            url: analysis.url.clone(),
            score: analysis.score,
            title: analysis.title.clone(),
            description: analysis.description.clone(),
            meta_tags: analysis
                .meta_tags
                .iter()
                .map(|tag| ShareTag {
                    name: tag.name,
                    score: tag.score,
                    max_score: tag.max_score,
                    status: tag.status,
                    feedback: tag.feedback.clone(),
                })
                .collect(),
            recommendations: analysis.recommendations.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("share data is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share data is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("share data is not a valid analysis: {0}")]
    Json(#[from] serde_json::Error),
}

/// Base64 encoding of the payload's JSON form
pub fn encode_share_payload(payload: &SharePayload) -> serde_json::Result<String> {
    let json = serde_json::to_string(payload)?;
    Ok(STANDARD.encode(json.as_bytes()))
}

/// Decode the `share` query parameter produced by [`share_link`]
pub fn decode_share_param(param: &str) -> Result<SharePayload, ShareError> {
    let bytes = STANDARD.decode(param.trim())?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

/// Link back to the web app that reopens this analysis.
///
/// `origin` may be any URL of the app; only its origin is kept.
pub fn share_link(origin: &str, analysis: &Analysis) -> serde_json::Result<String> {
    let encoded = encode_share_payload(&SharePayload::from(analysis))?;
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("share", &encoded)
        .finish();
    Ok(format!("{}/?{}", normalize_origin(origin), query))
}

/// Text shown on one search or social preview card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewCard {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// How the page renders on Google, Facebook and Twitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewData {
    pub google: PreviewCard,
    pub facebook: PreviewCard,
    pub twitter: PreviewCard,
}

/// Build preview cards, falling back from social tags to page tags to
/// placeholder text.
pub fn preview_data(analysis: &Analysis) -> PreviewData {
    let og = &analysis.open_graph;
    let twitter = &analysis.twitter;

    PreviewData {
        google: PreviewCard {
            title: first_set(&[analysis.title.as_str()], NO_TITLE),
            description: first_set(&[analysis.description.as_str()], NO_DESCRIPTION),
            url: analysis.url.clone(),
            image: None,
        },
        facebook: PreviewCard {
            title: first_set(&[opt(&og.title), analysis.title.as_str()], NO_TITLE),
            description: first_set(
                &[opt(&og.description), analysis.description.as_str()],
                NO_DESCRIPTION,
            ),
            url: first_set(&[opt(&og.url)], &analysis.url),
            image: Some(first_set(&[opt(&og.image)], PLACEHOLDER_IMAGE)),
        },
        twitter: PreviewCard {
            title: first_set(&[opt(&twitter.title), analysis.title.as_str()], NO_TITLE),
            description: first_set(
                &[opt(&twitter.description), analysis.description.as_str()],
                NO_DESCRIPTION,
            ),
            url: analysis.url.clone(),
            image: Some(first_set(&[opt(&twitter.image)], PLACEHOLDER_IMAGE)),
        },
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn first_set(candidates: &[&str], fallback: &str) -> String {
    candidates
        .iter()
        .find(|value| !value.is_empty())
        .copied()
        .unwrap_or(fallback)
        .to_string()
}
