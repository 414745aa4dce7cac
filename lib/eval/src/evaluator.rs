//! Evaluation Orchestrator
//!
//! Drives extraction, vectorization and ranking for each candidate document.
//! The job index is built once and shared read-only; every document gets its
//! own skill set, vector and report, so one document's outcome never affects
//! another's. Only a vocabulary mismatch, which is a programming error,
//! aborts a batch.

use crate::identity::IdentityExtractor;
use crate::report::{CandidateReport, Outcome, RoleScore, SimilarityReport, SkipReason};
use crate::Result;
use rayon::prelude::*;
use skillmatch_core::{Catalog, JobIndex, RankOutcome, Ranking, SkillExtractor};
use skillmatch_ingest::DocumentReader;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a batch of documents is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchMode {
    /// One document at a time, in order.
    #[default]
    Sequential,
    /// Documents processed on the rayon pool; reports still come back in document order.
    Parallel,
}

#[derive(Debug)]
pub struct Evaluator {
    index: Arc<JobIndex>,
    skills: SkillExtractor,
    identity: IdentityExtractor,
}

impl Evaluator {
    pub fn new(index: Arc<JobIndex>) -> Result<Self> {
        Ok(Self {
            index,
            skills: SkillExtractor::new()?,
            identity: IdentityExtractor::new()?,
        })
    }

    /// Builds and freezes the job index for `catalog`.
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        let index = JobIndex::build(catalog);
        if index.can_rank() {
            info!(
                roles = index.roles().len(),
                vocabulary = index.vocabulary().len(),
                "Job index built"
            );
        } else {
            warn!(roles = index.roles().len(), "No skills were extracted from the job catalog; ranking disabled");
        }
        Self::new(Arc::new(index))
    }

    #[inline]
    pub fn index(&self) -> &JobIndex {
        &self.index
    }

    /// Evaluates one document's raw text. `index` is the document's position
    /// in its batch and `source` names it in reports and logs.
    pub fn evaluate_text(&self, index: usize, source: &str, text: &str) -> Result<CandidateReport> {
        let identity = self.identity.extract(text);
        debug!(
            document = index + 1,
            name = identity.name_or_sentinel(),
            email = identity.email_or_sentinel(),
            "Processing document"
        );

        let skipped = |reason: SkipReason| CandidateReport {
            index,
            source: source.to_string(),
            identity: identity.clone(),
            outcome: Outcome::Skipped { reason },
        };

        if !self.index.can_rank() {
            warn!(document = index + 1, source, "No skills available to rank against");
            return Ok(skipped(SkipReason::NoSkillsAvailable));
        }
        if text.trim().is_empty() {
            warn!(document = index + 1, source, "No text extracted");
            return Ok(skipped(SkipReason::DocumentUnreadable));
        }

        let skills = self.skills.extract(text, self.index.vocabulary());
        if skills.is_empty() {
            warn!(document = index + 1, source, "No skills matched");
            return Ok(skipped(SkipReason::NoSkillsMatched));
        }

        let candidate = self.index.vectorize_skills(&skills);
        let outcome = match self.index.rank(&candidate)? {
            RankOutcome::Ranked(ranking) => {
                let report = self.similarity_report(skills, &ranking);
                debug!(
                    document = index + 1,
                    predicted = %report.predicted_role,
                    score = report.max_score,
                    tied = report.is_tied(),
                    "Ranked document"
                );
                Outcome::Ranked(report)
            }
            RankOutcome::NoSkillsMatched => Outcome::Skipped {
                reason: SkipReason::NoSkillsMatched,
            },
            RankOutcome::NoSkillsAvailable => Outcome::Skipped {
                reason: SkipReason::NoSkillsAvailable,
            },
        };

        Ok(CandidateReport {
            index,
            source: source.to_string(),
            identity,
            outcome,
        })
    }

    /// Reads and evaluates one document.
    pub fn evaluate_document<R>(&self, reader: &R, index: usize, path: &Path) -> Result<CandidateReport>
    where
        R: DocumentReader + ?Sized,
    {
        let text = reader.read_text(path);
        self.evaluate_text(index, &path.display().to_string(), &text)
    }

    /// Evaluates every document, returning reports in document order.
    pub fn evaluate_batch<R>(&self, reader: &R, paths: &[PathBuf], mode: BatchMode) -> Result<Vec<CandidateReport>>
    where
        R: DocumentReader + ?Sized,
    {
        info!(documents = paths.len(), ?mode, "Evaluating documents");
        match mode {
            BatchMode::Sequential => paths
                .iter()
                .enumerate()
                .map(|(i, path)| self.evaluate_document(reader, i, path))
                .collect(),
            BatchMode::Parallel => paths
                .par_iter()
                .enumerate()
                .map(|(i, path)| self.evaluate_document(reader, i, path))
                .collect(),
        }
    }

    fn similarity_report(&self, extracted_skills: BTreeSet<String>, ranking: &Ranking) -> SimilarityReport {
        let roles = self.index.roles();
        let title = |i: usize| roles.get(i).map(|r| r.title.clone()).unwrap_or_default();

        SimilarityReport {
            extracted_skills,
            scores: roles
                .iter()
                .zip(ranking.scores.iter())
                .map(|(role, &score)| RoleScore {
                    role: role.title.clone(),
                    score,
                })
                .collect(),
            predicted_role: title(ranking.best.predicted),
            tied_roles: ranking.best.tie_set.iter().map(|&i| title(i)).collect(),
            max_score: ranking.best.max_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapReader(HashMap<PathBuf, String>);

    impl DocumentReader for MapReader {
        fn read_text(&self, path: &Path) -> String {
            self.0.get(path).cloned().unwrap_or_default()
        }
    }

    fn evaluator() -> Evaluator {
        let catalog: Catalog = [
            ("Data Analyst", "python sql excel"),
            ("ML Engineer", "python machine learning statistics"),
        ]
        .into_iter()
        .collect();
        Evaluator::from_catalog(catalog).unwrap()
    }

    #[test]
    fn test_ranked_candidate() {
        let report = evaluator()
            .evaluate_text(0, "cv.txt", "Name: Jane Doe\njane@doe.io\nI use Python and SQL every day.")
            .unwrap();
        assert_eq!(report.identity.name.as_deref(), Some("Jane Doe"));
        assert_eq!(report.identity.email.as_deref(), Some("jane@doe.io"));

        let ranked = report.ranked().unwrap();
        assert_eq!(ranked.predicted_role, "Data Analyst");
        assert_eq!(ranked.tied_roles, vec!["Data Analyst"]);
        assert_eq!(
            ranked.extracted_skills.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["python", "sql"]
        );
        assert!((ranked.scores[0].score - 2.0 / 6.0_f64.sqrt()).abs() < 1e-9);
        assert_eq!(ranked.scores[1].role, "ML Engineer");
    }

    #[test]
    fn test_no_vocabulary_tokens_is_no_skills_matched() {
        let report = evaluator()
            .evaluate_text(0, "cv.txt", "Name: John Smith. I enjoy gardening.")
            .unwrap();
        assert_eq!(report.skip_reason(), Some(SkipReason::NoSkillsMatched));
        assert_eq!(report.identity.name.as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_empty_text_is_unreadable() {
        let report = evaluator().evaluate_text(3, "gone.docx", "").unwrap();
        assert_eq!(report.skip_reason(), Some(SkipReason::DocumentUnreadable));
        assert_eq!(report.index, 3);
    }

    #[test]
    fn test_empty_catalog_reports_no_skills_available() {
        let evaluator = Evaluator::from_catalog(Catalog::default()).unwrap();
        let report = evaluator
            .evaluate_text(0, "cv.txt", "Name: Jane Doe\nPython SQL")
            .unwrap();
        assert_eq!(report.skip_reason(), Some(SkipReason::NoSkillsAvailable));
        assert_eq!(report.identity.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_empty_catalog_takes_precedence_over_unreadable_text() {
        let evaluator = Evaluator::from_catalog(Catalog::default()).unwrap();
        let report = evaluator.evaluate_text(0, "gone.docx", "").unwrap();
        assert_eq!(report.skip_reason(), Some(SkipReason::NoSkillsAvailable));
        assert!(report.identity.name.is_none());
    }

    #[test]
    fn test_tie_is_explicit() {
        let catalog: Catalog = [("Backend", "rust sql"), ("Platform", "sql rust"), ("Design", "figma")]
            .into_iter()
            .collect();
        let evaluator = Evaluator::from_catalog(catalog).unwrap();
        let report = evaluator.evaluate_text(0, "cv.txt", "Rust and SQL").unwrap();
        let ranked = report.ranked().unwrap();
        assert!(ranked.is_tied());
        assert_eq!(ranked.predicted_role, "Backend");
        assert_eq!(ranked.tied_roles, vec!["Backend", "Platform"]);
    }

    #[test]
    fn test_batch_continues_past_bad_documents_and_keeps_order() {
        let docs: HashMap<PathBuf, String> = [
            ("a.txt", "python sql excel"),
            ("b.txt", ""),
            ("c.txt", "nothing relevant here"),
            ("d.txt", "machine learning statistics"),
        ]
        .into_iter()
        .map(|(p, t)| (PathBuf::from(p), t.to_string()))
        .collect();
        let reader = MapReader(docs);
        let paths: Vec<PathBuf> = ["a.txt", "b.txt", "c.txt", "d.txt", "missing.txt"]
            .into_iter()
            .map(PathBuf::from)
            .collect();

        let evaluator = evaluator();
        for mode in [BatchMode::Sequential, BatchMode::Parallel] {
            let reports = evaluator.evaluate_batch(&reader, &paths, mode).unwrap();
            assert_eq!(reports.len(), 5);
            assert!(reports.iter().enumerate().all(|(i, r)| r.index == i));
            assert_eq!(reports[0].ranked().unwrap().predicted_role, "Data Analyst");
            assert_eq!(reports[1].skip_reason(), Some(SkipReason::DocumentUnreadable));
            assert_eq!(reports[2].skip_reason(), Some(SkipReason::NoSkillsMatched));
            assert_eq!(reports[3].ranked().unwrap().predicted_role, "ML Engineer");
            assert_eq!(reports[4].skip_reason(), Some(SkipReason::DocumentUnreadable));
        }
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let docs: HashMap<PathBuf, String> = (0..32)
            .map(|i| {
                let text = if i % 3 == 0 { "python excel" } else { "statistics python" };
                (PathBuf::from(format!("{i}.txt")), text.to_string())
            })
            .collect();
        let paths: Vec<PathBuf> = (0..32).map(|i| PathBuf::from(format!("{i}.txt"))).collect();
        let reader = MapReader(docs);
        let evaluator = evaluator();
        assert_eq!(
            evaluator.evaluate_batch(&reader, &paths, BatchMode::Sequential).unwrap(),
            evaluator.evaluate_batch(&reader, &paths, BatchMode::Parallel).unwrap()
        );
    }
}
