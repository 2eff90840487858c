//! # tagsnippet-core
//!
//! Core library for scoring the SEO meta-tag hygiene of HTML pages.
//!
//! This library provides:
//! - Tolerant extraction of title, description, canonical, robots, H1, Open Graph
//!   and Twitter Card data
//! - Per-tag scoring and weighted score buckets (search /50, social /30,
//!   technical /20)
//! - Ordered, actionable recommendations
//! - JSON API boundary types, share links and a meta tag generator
//!
//! ## Features
//!
//! - `default`: Analysis of HTML you already have (no network access)
//! - `fetch`: Fetch pages over HTTP before analyzing them
//!
//! ## Example
//!
//! ```
//! use tagsnippet_core::analyze;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Example Domain</title></head>
//!         <body><h1>Example</h1></body>
//!     </html>
//! "#;
//!
//! let analysis = analyze("https://example.com/", html);
//! assert_eq!(analysis.meta_tags.len(), 7);
//! assert!(analysis.score.total <= 100);
//! ```

pub mod analyzer;
pub mod api;
pub mod export;
pub mod generator;
pub mod parser;
pub mod recommendations;
pub mod score;
pub mod scoring;
pub mod types;
pub mod url_utils;

#[cfg(feature = "fetch")]
pub mod fetch;

// Re-export commonly used types
pub use types::{
    Analysis, ExtractedFacts, MetaTagResult, OpenGraph, Priority, Recommendation,
    ScoreBreakdown, ScoreRating, TagCategory, TagStatus, TwitterCard,
};

pub use analyzer::analyze;
pub use api::{ApiError, USER_AGENT};
pub use parser::extract_facts;
pub use recommendations::recommend;
pub use score::aggregate;
pub use scoring::score_meta_tags;

#[cfg(feature = "fetch")]
pub use fetch::{FetchError, FetchOptions, analyze_url, fetch_html};
