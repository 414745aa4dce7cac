use crate::identity::Identity;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Why a document was not ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The reader returned no text.
    DocumentUnreadable,
    /// Text was present but contained no vocabulary token.
    NoSkillsMatched,
    /// The catalog yielded an empty vocabulary; nothing can be ranked this run.
    NoSkillsAvailable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SkipReason::DocumentUnreadable => "no text extracted",
            SkipReason::NoSkillsMatched => "no skills matched",
            SkipReason::NoSkillsAvailable => "no skills available",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleScore {
    pub role: String,
    pub score: f64,
}

/// Ranking of one candidate against the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub extracted_skills: BTreeSet<String>,
    /// Catalog order.
    pub scores: Vec<RoleScore>,
    pub predicted_role: String,
    /// Every role at `max_score`, in catalog order; `predicted_role` is the first.
    pub tied_roles: Vec<String>,
    pub max_score: f64,
}

impl SimilarityReport {
    pub fn is_tied(&self) -> bool {
        self.tied_roles.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ranked(SimilarityReport),
    Skipped { reason: SkipReason },
}

/// Everything produced for one candidate document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateReport {
    /// Position of the document in the batch, starting at 0.
    pub index: usize,
    pub source: String,
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl CandidateReport {
    pub fn ranked(&self) -> Option<&SimilarityReport> {
        match &self.outcome {
            Outcome::Ranked(report) => Some(report),
            Outcome::Skipped { .. } => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self.outcome {
            Outcome::Skipped { reason } => Some(reason),
            Outcome::Ranked(_) => None,
        }
    }
}
