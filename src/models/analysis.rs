use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use strum::Display;
use validator::{Validate, ValidationError};

use super::{EvaluatedTag, MetaTagName, OgTag, TagStatus, TwitterTag};
use crate::analysis::grade::ScoreGrade;

// ============================================================================
// Recommendations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl From<TagStatus> for Priority {
    fn from(status: TagStatus) -> Self {
        match status {
            TagStatus::Error => Priority::High,
            TagStatus::Warning => Priority::Medium,
            TagStatus::Good | TagStatus::Info => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecommendationKind {
    Error,
    Warning,
    Info,
}

/// A good tag never carries a recommendation, so it folds into `Info`.
impl From<TagStatus> for RecommendationKind {
    fn from(status: TagStatus) -> Self {
        match status {
            TagStatus::Error => RecommendationKind::Error,
            TagStatus::Warning => RecommendationKind::Warning,
            TagStatus::Good | TagStatus::Info => RecommendationKind::Info,
        }
    }
}

/// One actionable suggestion, optionally with a markup snippet to paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

// ============================================================================
// Analysis result
// ============================================================================

/// The full report for one page. Built once by the report assembler and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub og_tags: Vec<OgTag>,
    pub twitter_tags: Vec<TwitterTag>,
    pub meta_tags: Vec<EvaluatedTag>,
    pub score: u8,
    pub recommendations: Vec<Recommendation>,
    pub analysis_date: String,
}

impl AnalysisResult {
    pub fn meta_tag(&self, name: MetaTagName) -> Option<&EvaluatedTag> {
        self.meta_tags.iter().find(|tag| tag.name == name)
    }

    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.score)
    }
}

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub url: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("URL is required")));
    }
    Ok(())
}

/// Query string for the recent-analyses listing. A `limit` that is not a
/// non-negative integer is treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct RecentQuery {
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: Option<usize>,
}

fn lenient_limit<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_follows_tag_status() {
        assert_eq!(Priority::from(TagStatus::Error), Priority::High);
        assert_eq!(Priority::from(TagStatus::Warning), Priority::Medium);
        assert_eq!(Priority::from(TagStatus::Info), Priority::Low);
    }

    #[test]
    fn recommendation_kind_serializes_as_type() {
        let rec = Recommendation {
            priority: Priority::Medium,
            kind: RecommendationKind::Warning,
            title: "Add Twitter image".into(),
            description: "d".into(),
            code: None,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["priority"], "medium");
        assert!(json.get("code").is_none());
    }

    #[test]
    fn blank_url_fails_validation() {
        let req = AnalyzeRequest { url: "   ".into() };
        let errors = req.validate().unwrap_err();
        let field = errors.field_errors();
        let url_errors = field.get("url").expect("url field error");
        assert_eq!(url_errors[0].message.as_deref(), Some("URL is required"));
    }

    #[test]
    fn recent_query_ignores_unparsable_limit() {
        let query: RecentQuery = serde_json::from_value(serde_json::json!({ "limit": "lots" })).unwrap();
        assert_eq!(query.limit, None);

        let query: RecentQuery = serde_json::from_value(serde_json::json!({ "limit": "-3" })).unwrap();
        assert_eq!(query.limit, None);

        let query: RecentQuery = serde_json::from_value(serde_json::json!({ "limit": " 7 " })).unwrap();
        assert_eq!(query.limit, Some(7));

        let query: RecentQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(query.limit, None);
    }

    #[test]
    fn non_blank_url_passes_validation() {
        let req = AnalyzeRequest {
            url: "example.com".into(),
        };
        assert!(req.validate().is_ok());
    }
}
