//! The SEO rule engine.
//!
//! Everything under this module is pure: it takes already-extracted tag
//! values and returns fresh report structures, with no I/O and no shared
//! state. Fetching and HTML parsing live in [`crate::fetch`] and
//! [`crate::extract`].

pub mod grade;
pub mod recommendations;
pub mod report;
pub mod rules;
pub mod scoring;

pub use grade::ScoreGrade;
pub use recommendations::generate;
pub use report::{assemble, normalize_url};
pub use scoring::{evaluate, ScoreBreakdown};

use crate::models::{AnalysisResult, TagBag};

/// Run the whole pipeline over one page's tags: evaluate, recommend, assemble.
pub fn analyze(url: &str, bag: TagBag) -> AnalysisResult {
    let meta_tags = evaluate(&bag);
    let recommendations = generate(&meta_tags, &bag.og_tags, &bag.twitter_tags);
    assemble(url, bag, meta_tags, recommendations)
}
