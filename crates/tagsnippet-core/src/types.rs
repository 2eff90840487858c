//! Common types used across tagsnippet

use serde::{Deserialize, Serialize};
use std::fmt;

/// Open Graph fields read from `og:*` meta properties.
///
/// `None` means the tag is absent; `Some("")` means it exists with empty content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl OpenGraph {
    /// Field values in declaration order
    pub fn values(&self) -> [&Option<String>; 5] {
        [
            &self.title,
            &self.description,
            &self.image,
            &self.url,
            &self.kind,
        ]
    }
}

/// Twitter Card fields read from `twitter:*` meta names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

impl TwitterCard {
    /// Field values in declaration order
    pub fn values(&self) -> [&Option<String>; 5] {
        [
            &self.card,
            &self.title,
            &self.description,
            &self.image,
            &self.creator,
        ]
    }
}

/// SEO-relevant facts pulled out of a single HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFacts {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub robots: String,
    pub h1_tags: Vec<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

/// The seven scored tag categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagCategory {
    #[serde(rename = "Title")]
    Title,
    #[serde(rename = "Meta Description")]
    MetaDescription,
    #[serde(rename = "Canonical URL")]
    CanonicalUrl,
    #[serde(rename = "Robots Meta")]
    RobotsMeta,
    #[serde(rename = "H1 Tags")]
    H1Tags,
    #[serde(rename = "Open Graph Tags")]
    OpenGraphTags,
    #[serde(rename = "Twitter Card Tags")]
    TwitterCardTags,
}

impl TagCategory {
    pub const ALL: [TagCategory; 7] = [
        TagCategory::Title,
        TagCategory::MetaDescription,
        TagCategory::CanonicalUrl,
        TagCategory::RobotsMeta,
        TagCategory::H1Tags,
        TagCategory::OpenGraphTags,
        TagCategory::TwitterCardTags,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TagCategory::Title => "Title",
            TagCategory::MetaDescription => "Meta Description",
            TagCategory::CanonicalUrl => "Canonical URL",
            TagCategory::RobotsMeta => "Robots Meta",
            TagCategory::H1Tags => "H1 Tags",
            TagCategory::OpenGraphTags => "Open Graph Tags",
            TagCategory::TwitterCardTags => "Twitter Card Tags",
        }
    }

    pub fn max_score(self) -> u32 {
        match self {
            TagCategory::Title
            | TagCategory::MetaDescription
            | TagCategory::OpenGraphTags
            | TagCategory::TwitterCardTags => 10,
            TagCategory::CanonicalUrl | TagCategory::RobotsMeta | TagCategory::H1Tags => 5,
        }
    }

    pub fn best_practice(self) -> &'static str {
        match self {
            TagCategory::Title => {
                "Keep title between 50-60 characters for optimal display in search results"
            }
            TagCategory::MetaDescription => "Keep description between 150-160 characters",
            TagCategory::CanonicalUrl => "Set canonical URL to prevent duplicate content issues",
            TagCategory::RobotsMeta => "Use robots meta tag to control search engine crawling",
            TagCategory::H1Tags => "Use exactly one H1 tag per page for optimal SEO",
            TagCategory::OpenGraphTags => {
                "Include og:title, og:description, og:image, and og:url for social sharing"
            }
            TagCategory::TwitterCardTags => {
                "Include twitter:card, twitter:title, twitter:description, and twitter:image"
            }
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStatus {
    Present,
    Missing,
    /// Reserved for malformed values; the current rules never produce it.
    Invalid,
}

/// Score and feedback for one tag category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagResult {
    pub name: TagCategory,
    pub content: String,
    pub status: TagStatus,
    pub score: u32,
    pub max_score: u32,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_practice: Option<String>,
}

/// Weighted score buckets. `total` is always within 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub total: u32,
    pub search_optimization: u32,
    pub social_preview: u32,
    pub technical_structure: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreRating {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            ScoreRating::Excellent
        } else if percentage >= 60 {
            ScoreRating::Good
        } else if percentage >= 40 {
            ScoreRating::Fair
        } else {
            ScoreRating::Poor
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::Poor => "Poor",
        };
        f.write_str(label)
    }
}

impl ScoreBreakdown {
    pub const SEARCH_OPTIMIZATION_MAX: u32 = 50;
    pub const SOCIAL_PREVIEW_MAX: u32 = 30;
    pub const TECHNICAL_STRUCTURE_MAX: u32 = 20;

    /// Qualitative label for the total score
    pub fn rating(&self) -> ScoreRating {
        ScoreRating::from_percentage(self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(label)
    }
}

/// An actionable suggestion for improving the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub category: TagCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Recommendation {
    pub fn new(category: TagCategory, action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            category,
            priority: None,
        }
    }

    /// Priority used for display; unset priorities render as `Low`.
    pub fn display_priority(&self) -> Priority {
        self.priority.unwrap_or(Priority::Low)
    }
}

/// Complete result of analyzing one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub url: String,
    pub title: String,
    pub description: String,
    pub meta_tags: Vec<MetaTagResult>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub canonical: String,
    pub h1_tags: Vec<String>,
    pub robots: String,
    pub score: ScoreBreakdown,
    pub recommendations: Vec<Recommendation>,
}

/// Length as search engines and browsers count it: UTF-16 code units, so an
/// emoji outside the BMP counts as two.
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// True when an optional tag value is present and non-empty
pub(crate) fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
