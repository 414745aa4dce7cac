//! # skillmatch
//!
//! Ranks a fixed catalog of job roles against free-text candidate documents
//! by the skills they share.
//!
//! The catalog's skill lists form a vocabulary; every role and every
//! candidate becomes a binary presence vector over that vocabulary, and roles
//! are ranked by cosine similarity to the candidate.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! skillmatch --catalog Resume_Data/jobs.csv Resume_Data/resumes/
//! skillmatch --catalog jobs.json --format json --parallel cv1.docx cv2.txt
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use skillmatch::prelude::*;
//!
//! let catalog: Catalog = [
//!     ("Data Analyst", "python sql excel"),
//!     ("ML Engineer", "python machine learning statistics"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let evaluator = Evaluator::from_catalog(catalog).unwrap();
//! let report = evaluator
//!     .evaluate_text(0, "cv.txt", "Name: Jane Doe\nSkills: Python, SQL")
//!     .unwrap();
//!
//! let ranked = report.ranked().unwrap();
//! assert_eq!(ranked.predicted_role, "Data Analyst");
//! ```
//!
//! ## Crate Structure
//!
//! - `skillmatch-core` - Vocabulary, skill extraction, presence vectors, cosine ranking
//! - `skillmatch-ingest` - Catalog (CSV/JSON) and document (text/docx/pdf) readers
//! - `skillmatch-eval` - Per-candidate evaluation, identity fields, rendering

// Re-export core types
pub use skillmatch_core::{
    best_matches, build_vocabulary, cosine_similarity, extract_skills, rank_scores, vectorize,
    BestMatch, Catalog, Error, JobIndex, JobRole, PresenceVector, RankOutcome, Ranking, Result,
    SkillExtractor, Vocabulary, SCORE_EPSILON,
};

// Re-export ingest
pub use skillmatch_ingest::{
    expand_inputs, read_catalog, DocumentKind, DocumentReader, FileDocumentReader, IngestError,
};

// Re-export evaluation
pub use skillmatch_eval::{
    render_batch_text, render_chart, render_json, render_text, BatchMode, BatchOutput,
    CandidateReport, EvalError, Evaluator, Identity, Outcome, RoleScore, SimilarityReport,
    SkipReason, TextOptions,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        expand_inputs, read_catalog, render_batch_text, render_json, BatchMode, BatchOutput,
        CandidateReport, Catalog, DocumentReader, Evaluator, FileDocumentReader, JobIndex,
        JobRole, Outcome, RankOutcome, SimilarityReport, SkillExtractor, SkipReason,
        TextOptions, Vocabulary,
    };
}
