//! Per-category meta tag scoring
//!
//! Each of the seven tag categories gets a score between 0 and its maximum,
//! a presence status and a fixed feedback sentence.

use crate::types::{
    ExtractedFacts, MetaTagResult, OpenGraph, TagCategory, TagStatus, TwitterCard, is_set,
    text_length,
};

/// Score every tag category for the extracted facts.
///
/// Always returns exactly seven results in [`TagCategory::ALL`] order.
pub fn score_meta_tags(facts: &ExtractedFacts) -> Vec<MetaTagResult> {
    let og_score = score_open_graph(&facts.open_graph);
    let twitter_score = score_twitter(&facts.twitter);
    let h1_count = facts.h1_tags.len();

    vec![
        scalar_result(
            TagCategory::Title,
            &facts.title,
            score_title(&facts.title),
            "Title is present and optimized",
            "Missing title tag",
        ),
        scalar_result(
            TagCategory::MetaDescription,
            &facts.description,
            score_description(&facts.description),
            "Description is present",
            "Missing meta description",
        ),
        scalar_result(
            TagCategory::CanonicalUrl,
            &facts.canonical,
            presence_score(&facts.canonical, 5),
            "Canonical URL is set",
            "Missing canonical URL",
        ),
        scalar_result(
            TagCategory::RobotsMeta,
            &facts.robots,
            presence_score(&facts.robots, 5),
            "Robots meta tag is present",
            "Missing robots meta tag",
        ),
        build_result(
            TagCategory::H1Tags,
            facts.h1_tags.join(", "),
            h1_count > 0,
            score_h1_tags(&facts.h1_tags),
            if h1_count > 0 {
                format!("{h1_count} H1 tag(s) found")
            } else {
                "No H1 tags found".to_string()
            },
        ),
        build_result(
            TagCategory::OpenGraphTags,
            join_present(&facts.open_graph.values()),
            og_score > 0,
            og_score,
            if og_score > 0 {
                "Open Graph tags are present"
            } else {
                "Missing Open Graph tags"
            }
            .to_string(),
        ),
        build_result(
            TagCategory::TwitterCardTags,
            join_present(&facts.twitter.values()),
            twitter_score > 0,
            twitter_score,
            if twitter_score > 0 {
                "Twitter Card tags are present"
            } else {
                "Missing Twitter Card tags"
            }
            .to_string(),
        ),
    ]
}

/// Title: best between 30 and 60 characters
pub fn score_title(title: &str) -> u32 {
    if title.is_empty() {
        return 0;
    }
    match text_length(title) {
        0..30 => 5,
        30..=60 => 10,
        61..=70 => 8,
        _ => 6,
    }
}

/// Description: best between 120 and 160 characters
pub fn score_description(description: &str) -> u32 {
    if description.is_empty() {
        return 0;
    }
    match text_length(description) {
        0..120 => 5,
        120..=160 => 10,
        161..=200 => 8,
        _ => 6,
    }
}

pub fn score_h1_tags(h1_tags: &[String]) -> u32 {
    match h1_tags.len() {
        0 => 0,
        1 => 5,
        2 | 3 => 3,
        _ => 1,
    }
}

/// Sum of presence weights: title 2, description 2, image 3, url 2, type 1
pub fn score_open_graph(og: &OpenGraph) -> u32 {
    weighted_presence(&[
        (&og.title, 2),
        (&og.description, 2),
        (&og.image, 3),
        (&og.url, 2),
        (&og.kind, 1),
    ])
}

/// Sum of presence weights: card 2, title 2, description 2, image 3, creator 1
pub fn score_twitter(twitter: &TwitterCard) -> u32 {
    weighted_presence(&[
        (&twitter.card, 2),
        (&twitter.title, 2),
        (&twitter.description, 2),
        (&twitter.image, 3),
        (&twitter.creator, 1),
    ])
}

fn weighted_presence(fields: &[(&Option<String>, u32)]) -> u32 {
    fields
        .iter()
        .filter(|(value, _)| is_set(value))
        .map(|(_, weight)| weight)
        .sum()
}

fn presence_score(value: &str, points: u32) -> u32 {
    if value.is_empty() { 0 } else { points }
}

fn join_present(values: &[&Option<String>]) -> String {
    values
        .iter()
        .filter_map(|value| value.as_deref())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn scalar_result(
    category: TagCategory,
    value: &str,
    score: u32,
    present_feedback: &str,
    missing_feedback: &str,
) -> MetaTagResult {
    let present = !value.is_empty();
    let feedback = if present {
        present_feedback
    } else {
        missing_feedback
    };
    build_result(
        category,
        value.to_string(),
        present,
        score,
        feedback.to_string(),
    )
}

fn build_result(
    category: TagCategory,
    content: String,
    present: bool,
    score: u32,
    feedback: String,
) -> MetaTagResult {
    let max_score = category.max_score();
    MetaTagResult {
        name: category,
        content,
        status: if present {
            TagStatus::Present
        } else {
            TagStatus::Missing
        },
        score: score.min(max_score),
        max_score,
        feedback,
        best_practice: Some(category.best_practice().to_string()),
    }
}
