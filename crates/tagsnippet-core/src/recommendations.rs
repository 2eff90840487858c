//! Actionable recommendations derived from the extracted facts

use crate::types::{
    ExtractedFacts, Recommendation, ScoreBreakdown, TagCategory, is_set, text_length,
};

const TITLE_MAX_LEN: usize = 60;
const DESCRIPTION_MAX_LEN: usize = 160;

/// Build the ordered recommendation list.
///
/// Every rule is checked independently and in a fixed order; an empty list
/// means the page passed all checks. Priorities are left unset.
pub fn recommend(facts: &ExtractedFacts, score: &ScoreBreakdown) -> Vec<Recommendation> {
    let title_len = text_length(&facts.title);
    let description_len = text_length(&facts.description);
    let og = &facts.open_graph;
    let twitter = &facts.twitter;

    let rules = [
        (
            facts.title.is_empty(),
            TagCategory::Title,
            "Add a title tag to your page.",
        ),
        (
            title_len > TITLE_MAX_LEN,
            TagCategory::Title,
            "Consider shortening your title to under 60 characters.",
        ),
        (
            facts.description.is_empty(),
            TagCategory::MetaDescription,
            "Add a meta description to improve click-through rates.",
        ),
        (
            description_len > DESCRIPTION_MAX_LEN,
            TagCategory::MetaDescription,
            "Consider shortening your meta description to under 160 characters.",
        ),
        (
            facts.canonical.is_empty(),
            TagCategory::CanonicalUrl,
            "Add a canonical URL to prevent duplicate content issues.",
        ),
        (
            facts.h1_tags.is_empty(),
            TagCategory::H1Tags,
            "Add an H1 tag to your page for better SEO structure.",
        ),
        (
            facts.h1_tags.len() > 1,
            TagCategory::H1Tags,
            "Consider using only one H1 tag per page.",
        ),
        (
            !is_set(&og.title) || !is_set(&og.description),
            TagCategory::OpenGraphTags,
            "Add Open Graph tags for better social media sharing.",
        ),
        (
            !is_set(&twitter.card) || !is_set(&twitter.title),
            TagCategory::TwitterCardTags,
            "Add Twitter Card tags for better Twitter sharing.",
        ),
    ];

    let recommendations: Vec<Recommendation> = rules
        .into_iter()
        .filter(|(fires, _, _)| *fires)
        .map(|(_, category, action)| Recommendation::new(category, action))
        .collect();

    log::debug!(
        "{} recommendation(s) for a page scoring {}/100",
        recommendations.len(),
        score.total
    );

    recommendations
}
