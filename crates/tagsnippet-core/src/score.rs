//! Weighted score buckets
//!
//! The buckets are recomputed straight from the extracted facts rather than
//! summed from the per-tag results, so the two paths can be checked against
//! each other.

use crate::scoring::{
    score_description, score_h1_tags, score_open_graph, score_title, score_twitter,
};
use crate::types::{ExtractedFacts, MetaTagResult, ScoreBreakdown};

/// Combine the facts into the search (/50), social (/30) and technical (/20)
/// buckets. Each bucket is clamped to its ceiling before the total is summed.
pub fn aggregate(facts: &ExtractedFacts, meta_tags: &[MetaTagResult]) -> ScoreBreakdown {
    let search_raw = score_title(&facts.title) * 2
        + score_description(&facts.description) * 2
        + flag(&facts.canonical, 10)
        + flag(&facts.robots, 10)
        + score_h1_tags(&facts.h1_tags) * 2;

    let social_raw = score_open_graph(&facts.open_graph) * 2 + score_twitter(&facts.twitter) * 2;

    let technical_raw = flag(&facts.title, 5)
        + flag(&facts.description, 5)
        + flag(&facts.canonical, 5)
        + flag(&facts.robots, 5);

    let per_tag_total: u32 = meta_tags.iter().map(|tag| tag.score).sum();
    let per_tag_max: u32 = meta_tags.iter().map(|tag| tag.max_score).sum();
    log::debug!(
        "raw points search={search_raw} social={social_raw} technical={technical_raw}, per-tag {per_tag_total}/{per_tag_max}"
    );

    let search_optimization = search_raw.min(ScoreBreakdown::SEARCH_OPTIMIZATION_MAX);
    let social_preview = social_raw.min(ScoreBreakdown::SOCIAL_PREVIEW_MAX);
    let technical_structure = technical_raw.min(ScoreBreakdown::TECHNICAL_STRUCTURE_MAX);

    ScoreBreakdown {
        total: search_optimization + social_preview + technical_structure,
        search_optimization,
        social_preview,
        technical_structure,
    }
}

fn flag(value: &str, points: u32) -> u32 {
    if value.is_empty() { 0 } else { points }
}
