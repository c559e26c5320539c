use strum::IntoEnumIterator;

use super::rules::{self, WEIGHTS};
use crate::models::{EvaluatedTag, MetaTagName, TagBag, TagStatus};

/// Score every core tag in `bag`.
///
/// Always returns one entry per [`MetaTagName`], in declaration order, no
/// matter which fields of the bag are set.
pub fn evaluate(bag: &TagBag) -> Vec<EvaluatedTag> {
    MetaTagName::iter()
        .map(|name| evaluate_tag(name, bag))
        .collect()
}

pub fn evaluate_tag(name: MetaTagName, bag: &TagBag) -> EvaluatedTag {
    match name {
        MetaTagName::Title => evaluate_title(bag.title.as_deref()),
        MetaTagName::Description => evaluate_description(bag.description.as_deref()),
        MetaTagName::CanonicalUrl => evaluate_canonical(bag.canonical.as_deref()),
        MetaTagName::Robots => evaluate_robots(bag.robots.as_deref()),
        MetaTagName::Viewport => evaluate_viewport(bag.viewport.as_deref()),
        MetaTagName::Language => evaluate_language(bag.language.as_deref()),
    }
}

fn evaluate_title(title: Option<&str>) -> EvaluatedTag {
    let name = MetaTagName::Title;
    let Some(title) = title else {
        return EvaluatedTag::flagged(name, "", 0, TagStatus::Error, rules::TITLE_MISSING);
    };

    let len = title.chars().count();
    if len < rules::TITLE_MIN_CHARS {
        EvaluatedTag::flagged(
            name,
            title,
            rules::TITLE_TOO_SHORT_SCORE,
            TagStatus::Warning,
            rules::TITLE_TOO_SHORT,
        )
    } else if len > rules::TITLE_MAX_CHARS {
        EvaluatedTag::flagged(
            name,
            title,
            rules::TITLE_TOO_LONG_SCORE,
            TagStatus::Warning,
            rules::TITLE_TOO_LONG,
        )
    } else {
        EvaluatedTag::good(name, title)
    }
}

fn evaluate_description(description: Option<&str>) -> EvaluatedTag {
    let name = MetaTagName::Description;
    let Some(description) = description else {
        return EvaluatedTag::flagged(name, "", 0, TagStatus::Error, rules::DESCRIPTION_MISSING);
    };

    let len = description.chars().count();
    if len < rules::DESCRIPTION_MIN_CHARS {
        EvaluatedTag::flagged(
            name,
            description,
            rules::DESCRIPTION_TOO_SHORT_SCORE,
            TagStatus::Warning,
            rules::DESCRIPTION_TOO_SHORT,
        )
    } else if len > rules::DESCRIPTION_MAX_CHARS {
        EvaluatedTag::flagged(
            name,
            description,
            rules::DESCRIPTION_TOO_LONG_SCORE,
            TagStatus::Warning,
            rules::DESCRIPTION_TOO_LONG,
        )
    } else {
        EvaluatedTag::good(name, description)
    }
}

fn evaluate_canonical(canonical: Option<&str>) -> EvaluatedTag {
    match canonical {
        Some(href) if !href.is_empty() => EvaluatedTag::good(MetaTagName::CanonicalUrl, href),
        _ => EvaluatedTag::flagged(
            MetaTagName::CanonicalUrl,
            "",
            0,
            TagStatus::Error,
            rules::CANONICAL_MISSING,
        ),
    }
}

fn evaluate_robots(robots: Option<&str>) -> EvaluatedTag {
    let name = MetaTagName::Robots;
    let Some(robots) = robots else {
        // Crawlers fall back to "index, follow" when no directive is given.
        return EvaluatedTag::flagged(
            name,
            rules::ROBOTS_DEFAULT_CONTENT,
            rules::ROBOTS_DEFAULT_SCORE,
            TagStatus::Info,
            rules::ROBOTS_MISSING,
        );
    };

    let lowered = robots.to_lowercase();
    if rules::ROBOTS_BLOCKING_DIRECTIVES
        .iter()
        .any(|directive| lowered.contains(directive))
    {
        EvaluatedTag::flagged(
            name,
            robots,
            rules::ROBOTS_BLOCKING_SCORE,
            TagStatus::Warning,
            rules::ROBOTS_BLOCKING,
        )
    } else {
        EvaluatedTag::good(name, robots)
    }
}

/// An empty `content` attribute counts as missing.
fn evaluate_viewport(viewport: Option<&str>) -> EvaluatedTag {
    match viewport.filter(|content| !content.is_empty()) {
        Some(content) => EvaluatedTag::good(MetaTagName::Viewport, content),
        None => EvaluatedTag::flagged(
            MetaTagName::Viewport,
            "",
            rules::VIEWPORT_MISSING_SCORE,
            TagStatus::Warning,
            rules::VIEWPORT_MISSING,
        ),
    }
}

/// `<html lang="">` counts as missing.
fn evaluate_language(language: Option<&str>) -> EvaluatedTag {
    match language.filter(|lang| !lang.is_empty()) {
        Some(lang) => EvaluatedTag::good(MetaTagName::Language, lang),
        None => EvaluatedTag::flagged(
            MetaTagName::Language,
            "",
            rules::LANGUAGE_MISSING_SCORE,
            TagStatus::Warning,
            rules::LANGUAGE_MISSING,
        ),
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Social component score for `count` tags: 20 points each, capped at 100.
pub fn social_score(count: usize) -> u8 {
    let points = u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(rules::SOCIAL_POINTS_PER_TAG);
    points.min(rules::SOCIAL_SCORE_CAP) as u8
}

/// Score of the named tag, or 0 if it is not in the list.
pub fn tag_score(tags: &[EvaluatedTag], name: MetaTagName) -> u8 {
    tags.iter()
        .find(|tag| tag.name == name)
        .map_or(0, |tag| tag.score)
}

/// The eight weighted components behind the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub title: u8,
    pub description: u8,
    pub canonical: u8,
    pub robots: u8,
    pub viewport: u8,
    pub language: u8,
    pub open_graph: u8,
    pub twitter: u8,
}

impl ScoreBreakdown {
    pub fn compute(meta_tags: &[EvaluatedTag], og_count: usize, twitter_count: usize) -> Self {
        Self {
            title: tag_score(meta_tags, MetaTagName::Title),
            description: tag_score(meta_tags, MetaTagName::Description),
            canonical: tag_score(meta_tags, MetaTagName::CanonicalUrl),
            robots: tag_score(meta_tags, MetaTagName::Robots),
            viewport: tag_score(meta_tags, MetaTagName::Viewport),
            language: tag_score(meta_tags, MetaTagName::Language),
            open_graph: social_score(og_count),
            twitter: social_score(twitter_count),
        }
    }

    /// Weighted sum of all components, rounded to the nearest integer.
    pub fn overall(&self) -> u8 {
        let sum = f64::from(self.title) * WEIGHTS.title
            + f64::from(self.description) * WEIGHTS.description
            + f64::from(self.canonical) * WEIGHTS.canonical
            + f64::from(self.robots) * WEIGHTS.robots
            + f64::from(self.viewport) * WEIGHTS.viewport
            + f64::from(self.language) * WEIGHTS.language
            + f64::from(self.open_graph) * WEIGHTS.open_graph
            + f64::from(self.twitter) * WEIGHTS.twitter;

        sum.round() as u8
    }
}
