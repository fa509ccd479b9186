//! Analysis modes, submissions and results.
//!
//! [`AnalysisMode`] selects between keyword matching against a catalog job
//! role and semantic matching against a pasted job description. A validated
//! request is an [`AnalysisSubmission`], whose [`AnalysisTarget`] makes it
//! impossible to send both a role and a description. Completed requests
//! produce an [`AnalysisResult`] tagged by the mode that was actually used.

use crate::domain::UploadedFile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison method used for an analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisMode {
    /// TF-IDF keyword comparison against a selected job role.
    #[default]
    #[serde(rename = "tfidf")]
    KeywordMatch,

    /// Semantic comparison against a pasted job description.
    #[serde(rename = "semantic")]
    SemanticMatch,
}

impl AnalysisMode {
    /// Both modes in display order.
    pub const ALL: [Self; 2] = [Self::KeywordMatch, Self::SemanticMatch];

    /// Identifier sent in the `method` form field.
    #[must_use]
    pub const fn wire_id(self) -> &'static str {
        match self {
            Self::KeywordMatch => "tfidf",
            Self::SemanticMatch => "semantic",
        }
    }

    /// Human-readable method label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::KeywordMatch => "TF-IDF",
            Self::SemanticMatch => "Semantic",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_id())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tfidf" | "tf-idf" | "keyword" | "keywords" => Ok(Self::KeywordMatch),
            "semantic" => Ok(Self::SemanticMatch),
            other => Err(format!(
                "Invalid analysis method: {other}. Supported: tfidf, semantic"
            )),
        }
    }
}

/// The secondary input sent with a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisTarget {
    /// Catalog role identifier (keyword matching).
    JobRole(String),
    /// Free-text job description (semantic matching).
    JobDescription(String),
}

/// A validated analysis request, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSubmission {
    /// Resume to analyse.
    pub file: UploadedFile,
    /// Role or description to compare against.
    pub target: AnalysisTarget,
}

impl AnalysisSubmission {
    /// Mode implied by the target.
    #[must_use]
    pub const fn mode(&self) -> AnalysisMode {
        match self.target {
            AnalysisTarget::JobRole(_) => AnalysisMode::KeywordMatch,
            AnalysisTarget::JobDescription(_) => AnalysisMode::SemanticMatch,
        }
    }
}

/// Outcome of a keyword (TF-IDF) comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Match score, 0 to 100.
    pub score: f64,
    /// Narrative summary.
    pub remark: String,
    /// Role keywords found in the resume, in server order.
    pub matched_keywords: Vec<String>,
    /// Role keywords absent from the resume, in server order.
    pub missing_keywords: Vec<String>,
}

/// Outcome of a semantic comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticMatch {
    /// Match score, 0 to 100.
    pub score: f64,
    /// Narrative summary.
    pub remark: String,
}

/// Result of a completed analysis, tagged by the mode the request used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum AnalysisResult {
    /// Keyword comparison result.
    #[serde(rename = "tfidf")]
    KeywordMatch(KeywordMatch),
    /// Semantic comparison result.
    #[serde(rename = "semantic")]
    SemanticMatch(SemanticMatch),
}

impl AnalysisResult {
    /// Mode of the request that produced this result.
    #[must_use]
    pub const fn mode(&self) -> AnalysisMode {
        match self {
            Self::KeywordMatch(_) => AnalysisMode::KeywordMatch,
            Self::SemanticMatch(_) => AnalysisMode::SemanticMatch,
        }
    }

    /// Match score, 0 to 100.
    #[must_use]
    pub fn score(&self) -> f64 {
        match self {
            Self::KeywordMatch(m) => m.score,
            Self::SemanticMatch(m) => m.score,
        }
    }

    /// Narrative summary.
    #[must_use]
    pub fn remark(&self) -> &str {
        match self {
            Self::KeywordMatch(m) => &m.remark,
            Self::SemanticMatch(m) => &m.remark,
        }
    }
}
