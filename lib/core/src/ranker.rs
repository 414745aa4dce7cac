//! Similarity Ranker
//!
//! Scores a candidate vector against every job vector with cosine similarity
//! and picks the best role. Ties are reported in full: `tie_set` lists every
//! role at the maximum score, and the predicted role is the first of them in
//! catalog order.

use crate::{PresenceVector, Result};
use serde::{Deserialize, Serialize};

/// Scores closer than this are treated as equal when collecting the tie set.
pub const SCORE_EPSILON: f64 = 1e-12;

/// Best-scoring role(s) for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMatch {
    /// First index of `tie_set`.
    pub predicted: usize,
    pub max_score: f64,
    /// Every index achieving `max_score`, ascending. Never empty.
    pub tie_set: Vec<usize>,
}

impl BestMatch {
    #[inline]
    pub fn is_tied(&self) -> bool {
        self.tie_set.len() > 1
    }
}

/// Cosine similarity between two presence vectors built over the same vocabulary.
#[inline]
pub fn cosine_similarity(a: &PresenceVector, b: &PresenceVector) -> Result<f64> {
    a.cosine_similarity(b)
}

/// One score per job vector, in the order given.
pub fn rank_scores(candidate: &PresenceVector, job_vectors: &[PresenceVector]) -> Result<Vec<f64>> {
    job_vectors
        .iter()
        .map(|job| candidate.cosine_similarity(job))
        .collect()
}

/// Maximum score and every index reaching it. `None` for an empty score list.
pub fn best_matches(scores: &[f64]) -> Option<BestMatch> {
    let max_score = scores.iter().copied().fold(None, |acc: Option<f64>, s| match acc {
        Some(m) if m >= s => Some(m),
        _ => Some(s),
    })?;

    let tie_set: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|(_, &s)| (max_score - s).abs() <= SCORE_EPSILON)
        .map(|(i, _)| i)
        .collect();

    let predicted = *tie_set.first()?;
    Some(BestMatch {
        predicted,
        max_score,
        tie_set,
    })
}
