use serde::Serialize;
use strum::Display;

/// Qualitative band for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScoreGrade {
    Excellent,
    Good,
    Adequate,
    Poor,
    Critical,
}

impl ScoreGrade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreGrade::Excellent,
            80..=89 => ScoreGrade::Good,
            60..=79 => ScoreGrade::Adequate,
            40..=59 => ScoreGrade::Poor,
            _ => ScoreGrade::Critical,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellent implementation with minor improvements possible",
            ScoreGrade::Good => "Good implementation with some room for improvement",
            ScoreGrade::Adequate => "Adequate implementation but needs improvement",
            ScoreGrade::Poor => "Poor implementation requiring significant improvements",
            ScoreGrade::Critical => "Critical issues found that need immediate attention",
        }
    }
}
