use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

mod analysis;

pub use analysis::{
    AnalysisResult, AnalyzeRequest, Priority, Recommendation, RecommendationKind, RecentQuery,
};

// ============================================================================
// Extracted tags
// ============================================================================

/// An Open Graph `property`/`content` pair, e.g. `og:image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgTag {
    pub property: String,
    pub content: String,
}

impl OgTag {
    pub fn new(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            content: content.into(),
        }
    }
}

/// A Twitter Card `name`/`content` pair, e.g. `twitter:card`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterTag {
    pub name: String,
    pub content: String,
}

impl TwitterTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Flat set of values pulled out of a page's markup.
///
/// `None` means the tag was not found at all; `Some("")` means it was found
/// but empty. The scoring rules treat the two differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBag {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub robots: Option<String>,
    pub viewport: Option<String>,
    pub charset: Option<String>,
    pub language: Option<String>,
    pub og_tags: Vec<OgTag>,
    pub twitter_tags: Vec<TwitterTag>,
}

// ============================================================================
// Evaluated tags
// ============================================================================

/// The six core tags every report scores, in report order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
pub enum MetaTagName {
    Title,
    Description,
    #[serde(rename = "Canonical URL")]
    #[strum(serialize = "Canonical URL")]
    CanonicalUrl,
    Robots,
    Viewport,
    Language,
}

impl MetaTagName {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TagStatus {
    Good,
    Warning,
    Error,
    Info,
}

/// Score and verdict for one core tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedTag {
    pub name: MetaTagName,
    pub content: String,
    pub score: u8,
    pub status: TagStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl EvaluatedTag {
    pub fn good(name: MetaTagName, content: impl Into<String>) -> Self {
        Self {
            name,
            content: content.into(),
            score: 100,
            status: TagStatus::Good,
            recommendation: None,
        }
    }

    pub fn flagged(
        name: MetaTagName,
        content: impl Into<String>,
        score: u8,
        status: TagStatus,
        recommendation: &str,
    ) -> Self {
        Self {
            name,
            content: content.into(),
            score,
            status,
            recommendation: Some(recommendation.to_string()),
        }
    }
}
