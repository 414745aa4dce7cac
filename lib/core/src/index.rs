use crate::ranker::{best_matches, rank_scores, BestMatch};
use crate::{vectorize, Catalog, JobRole, PresenceVector, Result, Vocabulary};
use serde::{Deserialize, Serialize};

/// Scores of one candidate against every role, plus the best match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Catalog order.
    pub scores: Vec<f64>,
    pub best: BestMatch,
}

/// Result of ranking one candidate vector.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome {
    Ranked(Ranking),
    /// Candidate vector is all zero: every role would score 0 and the
    /// "best" role would be meaningless.
    NoSkillsMatched,
    /// Empty vocabulary (empty catalog, or only blank skill lists).
    NoSkillsAvailable,
}

/// The job matrix: catalog, its frozen vocabulary and one presence vector per
/// role. Built once per run and only read afterwards, so it can be shared
/// across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct JobIndex {
    catalog: Catalog,
    vocabulary: Vocabulary,
    job_vectors: Vec<PresenceVector>,
}

impl JobIndex {
    pub fn build(catalog: Catalog) -> Self {
        let vocabulary = Vocabulary::build(catalog.skill_lists());
        let job_vectors = catalog
            .roles()
            .iter()
            .map(|role| vectorize(role.skill_tokens(), &vocabulary))
            .collect();

        Self {
            catalog,
            vocabulary,
            job_vectors,
        }
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn roles(&self) -> &[JobRole] {
        self.catalog.roles()
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn job_vectors(&self) -> &[PresenceVector] {
        &self.job_vectors
    }

    /// False when the vocabulary is empty and no ranking is possible.
    #[inline]
    pub fn can_rank(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    /// Candidate vector over this index's vocabulary.
    pub fn vectorize_skills<I, S>(&self, skills: I) -> PresenceVector
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        vectorize(skills, &self.vocabulary)
    }

    /// Ranks a candidate against every role.
    ///
    /// Errors only when `candidate` was built over another vocabulary, which is
    /// a programming error rather than a property of the document.
    pub fn rank(&self, candidate: &PresenceVector) -> Result<RankOutcome> {
        if !self.can_rank() {
            return Ok(RankOutcome::NoSkillsAvailable);
        }

        let scores = rank_scores(candidate, &self.job_vectors)?;
        if candidate.is_zero() {
            return Ok(RankOutcome::NoSkillsMatched);
        }

        match best_matches(&scores) {
            Some(best) => Ok(RankOutcome::Ranked(Ranking { scores, best })),
            None => Ok(RankOutcome::NoSkillsAvailable),
        }
    }
}
