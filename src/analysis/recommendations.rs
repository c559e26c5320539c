use super::rules;
use crate::models::{
    EvaluatedTag, MetaTagName, OgTag, Priority, Recommendation, RecommendationKind, TwitterTag,
};

/// Build the recommendation list for a page.
///
/// Order is fixed: tag findings first (in tag order), then Open Graph, then
/// Twitter Card, then the structured-data suggestion, which is always
/// present. The list is never empty and never truncated.
pub fn generate(
    meta_tags: &[EvaluatedTag],
    og_tags: &[OgTag],
    twitter_tags: &[TwitterTag],
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> =
        meta_tags.iter().filter_map(from_evaluated_tag).collect();

    recommendations.extend(open_graph_recommendation(og_tags));
    recommendations.extend(twitter_recommendations(twitter_tags));
    recommendations.push(structured_data_recommendation());

    recommendations
}

fn from_evaluated_tag(tag: &EvaluatedTag) -> Option<Recommendation> {
    let text = tag.recommendation.as_deref().filter(|t| !t.is_empty())?;

    Some(Recommendation {
        priority: Priority::from(tag.status),
        kind: RecommendationKind::from(tag.status),
        title: format!("Improve your {}", tag.name),
        description: text.to_string(),
        code: snippet_for(tag.name).map(str::to_string),
    })
}

fn snippet_for(name: MetaTagName) -> Option<&'static str> {
    match name {
        MetaTagName::Title => Some(rules::TITLE_SNIPPET),
        MetaTagName::Description => Some(rules::DESCRIPTION_SNIPPET),
        MetaTagName::CanonicalUrl => Some(rules::CANONICAL_SNIPPET),
        MetaTagName::Robots | MetaTagName::Viewport | MetaTagName::Language => None,
    }
}

fn open_graph_recommendation(og_tags: &[OgTag]) -> Option<Recommendation> {
    if og_tags.is_empty() {
        return Some(social_warning(
            "Add Open Graph tags",
            "Open Graph tags improve how your content appears when shared on social media platforms like Facebook.",
            rules::OG_STARTER_SNIPPET,
        ));
    }

    let has_image = og_tags.iter().any(|tag| tag.property == "og:image");
    (!has_image).then(|| {
        social_warning(
            "Add Open Graph image",
            "Adding an og:image tag will make your content more visually appealing when shared on social media.",
            rules::OG_IMAGE_SNIPPET,
        )
    })
}

fn twitter_recommendations(twitter_tags: &[TwitterTag]) -> Vec<Recommendation> {
    if twitter_tags.is_empty() {
        return vec![social_warning(
            "Add Twitter Card tags",
            "Twitter Card tags improve how your content appears when shared on Twitter.",
            rules::TWITTER_STARTER_SNIPPET,
        )];
    }

    let has = |name: &str| twitter_tags.iter().any(|tag| tag.name == name);

    if !has("twitter:image") {
        return vec![social_warning(
            "Add Twitter image",
            "Adding a twitter:image tag will make your content more visually appealing when shared on Twitter.",
            rules::TWITTER_IMAGE_SNIPPET,
        )];
    }

    if !has("twitter:image:alt") {
        return vec![Recommendation {
            priority: Priority::Low,
            kind: RecommendationKind::Info,
            title: "Add Twitter image alt text".into(),
            description: "Adding alt text to your Twitter card image improves accessibility and may help with SEO.".into(),
            code: Some(rules::TWITTER_IMAGE_ALT_SNIPPET.into()),
        }];
    }

    Vec::new()
}

// Structured data is not detected yet, so this is emitted for every page.
fn structured_data_recommendation() -> Recommendation {
    Recommendation {
        priority: Priority::Low,
        kind: RecommendationKind::Info,
        title: "Consider adding structured data".into(),
        description: "Schema.org markup can enhance your search results with rich snippets.".into(),
        code: Some(rules::STRUCTURED_DATA_SNIPPET.into()),
    }
}

fn social_warning(title: &str, description: &str, code: &str) -> Recommendation {
    Recommendation {
        priority: Priority::Medium,
        kind: RecommendationKind::Warning,
        title: title.to_string(),
        description: description.to_string(),
        code: Some(code.to_string()),
    }
}
