use chrono::{SecondsFormat, Utc};
use url::Url;

use super::scoring::ScoreBreakdown;
use crate::models::{AnalysisResult, EvaluatedTag, Recommendation, TagBag};

/// Canonical form of a user-supplied URL, used as the cache key and as the
/// report's `url`.
///
/// Adds `https://` when no http(s) scheme is given, then rebuilds the URL as
/// origin + path (one trailing slash removed) + query. The fragment is
/// dropped. If the result does not parse, the prefixed input is returned
/// unchanged.
pub fn normalize_url(raw: &str) -> String {
    let prefixed = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let Ok(parsed) = Url::parse(&prefixed) else {
        return prefixed;
    };

    let path = parsed.path();
    let path = path.strip_suffix('/').unwrap_or(path);
    let query = match parsed.query() {
        Some(q) if !q.is_empty() => format!("?{q}"),
        _ => String::new(),
    };

    format!("{}{}{}", parsed.origin().ascii_serialization(), path, query)
}

/// Combine extracted values, evaluated tags and recommendations into the
/// final report, stamped with the current time.
pub fn assemble(
    url: &str,
    bag: TagBag,
    meta_tags: Vec<EvaluatedTag>,
    recommendations: Vec<Recommendation>,
) -> AnalysisResult {
    let score =
        ScoreBreakdown::compute(&meta_tags, bag.og_tags.len(), bag.twitter_tags.len()).overall();

    AnalysisResult {
        url: normalize_url(url),
        title: bag.title,
        description: bag.description,
        canonical: bag.canonical,
        robots: bag.robots,
        viewport: bag.viewport,
        charset: bag.charset,
        language: bag.language,
        og_tags: bag.og_tags,
        twitter_tags: bag.twitter_tags,
        meta_tags,
        score,
        recommendations,
        analysis_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
