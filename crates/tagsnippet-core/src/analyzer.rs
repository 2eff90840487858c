//! Single entry point tying extraction, scoring and recommendations together

use crate::parser::extract_facts;
use crate::recommendations::recommend;
use crate::score::aggregate;
use crate::scoring::score_meta_tags;
use crate::types::Analysis;

/// Analyze an HTML document fetched from `url`.
///
/// Pure and deterministic: the same inputs always produce an equal
/// [`Analysis`]. Any string is accepted, including an empty one.
pub fn analyze(url: &str, html: &str) -> Analysis {
    let facts = extract_facts(html);
    let meta_tags = score_meta_tags(&facts);
    let score = aggregate(&facts, &meta_tags);
    let recommendations = recommend(&facts, &score);

    log::info!(
        "analyzed {url}: score {}/100 ({}), {} recommendation(s)",
        score.total,
        score.rating(),
        recommendations.len()
    );

    Analysis {
        url: url.to_string(),
        title: facts.title,
        description: facts.description,
        meta_tags,
        open_graph: facts.open_graph,
        twitter: facts.twitter,
        canonical: facts.canonical,
        h1_tags: facts.h1_tags,
        robots: facts.robots,
        score,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScoreRating, TagCategory, TagStatus};
    use proptest::prelude::*;

    const URL: &str = "https://example.com/";

    #[test]
    fn test_analyze_empty_html() {
        let analysis = analyze(URL, "");

        assert_eq!(analysis.url, URL);
        assert_eq!(analysis.title, "");
        assert_eq!(analysis.description, "");
        assert_eq!(analysis.meta_tags.len(), 7);
        assert!(
            analysis
                .meta_tags
                .iter()
                .all(|tag| tag.status == TagStatus::Missing)
        );
        assert_eq!(analysis.score.total, 0);
        assert_eq!(analysis.score.rating(), ScoreRating::Poor);

        let actions: Vec<_> = analysis
            .recommendations
            .iter()
            .map(|r| r.action.as_str())
            .collect();
        assert!(actions.iter().any(|a| a.starts_with("Add a title tag")));
        assert!(actions.iter().any(|a| a.starts_with("Add a meta description")));
        assert!(actions.iter().any(|a| a.starts_with("Add a canonical URL")));
        assert!(actions.iter().any(|a| a.starts_with("Add an H1 tag")));
    }

    #[test]
    fn test_optimal_title_and_description_lengths() {
        let html = format!(
            r#"<html><head><title>{}</title><meta name="description" content="{}"></head></html>"#,
            "T".repeat(55),
            "D".repeat(155)
        );

        let analysis = analyze(URL, &html);
        assert_eq!(analysis.meta_tags[0].name, TagCategory::Title);
        assert_eq!(analysis.meta_tags[0].score, 10);
        assert_eq!(analysis.meta_tags[1].name, TagCategory::MetaDescription);
        assert_eq!(analysis.meta_tags[1].score, 10);
    }

    #[test]
    fn test_two_h1_tags() {
        let analysis = analyze(URL, "<body><h1>First</h1><h1>Second</h1></body>");

        let h1 = &analysis.meta_tags[4];
        assert_eq!(h1.name, TagCategory::H1Tags);
        assert_eq!(h1.score, 3);
        assert!(
            analysis
                .recommendations
                .iter()
                .any(|r| r.action.starts_with("Consider using only one H1 tag per page"))
        );
    }

    #[test]
    fn test_partial_open_graph() {
        let html = r#"
            <head>
                <meta property="og:title" content="Shared title">
                <meta property="og:image" content="https://example.com/card.png">
            </head>
        "#;

        let analysis = analyze(URL, html);
        let og = &analysis.meta_tags[5];
        assert_eq!(og.name, TagCategory::OpenGraphTags);
        assert_eq!(og.score, 5);
        assert_eq!(og.status, TagStatus::Present);
        assert_eq!(og.content, "Shared title, https://example.com/card.png");
        assert!(
            analysis
                .recommendations
                .iter()
                .any(|r| r.category == TagCategory::OpenGraphTags)
        );
    }

    #[test]
    fn test_well_optimized_page() {
        let html = r#"
            <!DOCTYPE html>
            <html lang="en">
            <head>
                <title>TagSnippet - Free SEO tools for every web page</title>
                <meta name="description" content="Analyze meta tags, preview how your page looks in search results and on social media, and get concrete recommendations to improve rankings.">
                <meta name="robots" content="index, follow">
                <link rel="canonical" href="https://tagsnippet.com/">
                <meta property="og:title" content="TagSnippet">
                <meta property="og:description" content="Free SEO tools">
                <meta property="og:image" content="https://tagsnippet.com/og.png">
                <meta property="og:url" content="https://tagsnippet.com/">
                <meta property="og:type" content="website">
                <meta name="twitter:card" content="summary_large_image">
                <meta name="twitter:title" content="TagSnippet">
            </head>
            <body><h1>SEO Toolbox</h1></body>
            </html>
        "#;

        let analysis = analyze(URL, html);
        assert!(analysis.recommendations.is_empty());
        assert_eq!(analysis.score.search_optimization, 50);
        assert_eq!(analysis.score.technical_structure, 20);
        // og 10*2 + twitter 4*2 = 28
        assert_eq!(analysis.score.social_preview, 28);
        assert_eq!(analysis.score.total, 98);
        assert_eq!(analysis.score.rating(), ScoreRating::Excellent);
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let analysis = analyze(URL, r#"<meta property="og:type" content="article">"#);
        let json = serde_json::to_value(&analysis).unwrap();

        assert!(json.get("metaTags").is_some());
        assert!(json.get("h1Tags").is_some());
        assert_eq!(json["metaTags"][0]["name"], "Title");
        assert_eq!(json["metaTags"][0]["maxScore"], 10);
        assert_eq!(json["metaTags"][0]["status"], "missing");
        assert_eq!(json["openGraph"]["type"], "article");
        assert!(json["openGraph"].get("title").is_none());
        assert!(json["score"].get("searchOptimization").is_some());
        assert_eq!(json["recommendations"][0]["category"], "Title");
        assert!(json["recommendations"][0].get("priority").is_none());

        let back: Analysis = serde_json::from_value(json).unwrap();
        assert_eq!(back, analysis);
    }

    fn html_page(title: &str, description: &str, h1_count: usize, og: [bool; 5]) -> String {
        let og_names = ["title", "description", "image", "url", "type"];
        let og_tags: String = og_names
            .iter()
            .zip(og)
            .filter(|(_, present)| *present)
            .map(|(name, _)| format!(r#"<meta property="og:{name}" content="value">"#))
            .collect();
        let h1_tags: String = (0..h1_count).map(|i| format!("<h1>Heading {i}</h1>")).collect();
        format!(
            r#"<html><head><title>{title}</title><meta name="description" content="{description}">{og_tags}</head><body>{h1_tags}</body></html>"#
        )
    }

    proptest! {
        #[test]
        fn prop_scores_stay_within_buckets(
            title in "[a-zA-Z0-9 ]{0,120}",
            description in "[a-zA-Z0-9 ]{0,260}",
            h1_count in 0usize..6,
            og in proptest::array::uniform5(any::<bool>()),
        ) {
            let analysis = analyze(URL, &html_page(&title, &description, h1_count, og));
            let score = analysis.score;

            prop_assert!(score.total <= 100);
            prop_assert!(score.search_optimization <= 50);
            prop_assert!(score.social_preview <= 30);
            prop_assert!(score.technical_structure <= 20);
            prop_assert_eq!(
                score.total,
                score.search_optimization + score.social_preview + score.technical_structure
            );

            prop_assert_eq!(analysis.meta_tags.len(), 7);
            for tag in &analysis.meta_tags {
                prop_assert!(tag.score <= tag.max_score);
            }
        }

        #[test]
        fn prop_arbitrary_input_never_panics(html in ".{0,400}") {
            let analysis = analyze(URL, &html);
            prop_assert!(analysis.score.total <= 100);
            prop_assert_eq!(analysis.meta_tags.len(), 7);
        }

        #[test]
        fn prop_analyze_is_deterministic(html in "[<>a-z =\"/]{0,200}") {
            prop_assert_eq!(analyze(URL, &html), analyze(URL, &html));
        }
    }
}
