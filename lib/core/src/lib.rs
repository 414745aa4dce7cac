//! # skillmatch Core
//!
//! Core library for matching candidate documents against a catalog of job roles.
//!
//! This crate provides the matching pipeline:
//!
//! - [`Vocabulary`] - Deduplicated, order-fixed skill tokens of a [`Catalog`]
//! - [`SkillExtractor`] - Whole-word detection of vocabulary tokens in free text
//! - [`PresenceVector`] - Binary vector over a vocabulary, built by [`vectorize`]
//! - [`JobIndex`] - Frozen vocabulary plus one vector per role, ranked with cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use skillmatch_core::{Catalog, JobIndex, RankOutcome, SkillExtractor};
//!
//! let catalog: Catalog = [
//!     ("Data Analyst", "python sql excel"),
//!     ("ML Engineer", "python machine learning statistics"),
//! ]
//! .into_iter()
//! .collect();
//! let index = JobIndex::build(catalog);
//!
//! let extractor = SkillExtractor::new().unwrap();
//! let skills = extractor.extract("Five years of Python and SQL.", index.vocabulary());
//! let candidate = index.vectorize_skills(&skills);
//!
//! if let RankOutcome::Ranked(ranking) = index.rank(&candidate).unwrap() {
//!     assert_eq!(index.roles()[ranking.best.predicted].title, "Data Analyst");
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod extractor;
pub mod index;
pub mod ranker;
pub mod vector;
pub mod vocabulary;

pub use catalog::{Catalog, JobRole};
pub use error::{Error, Result};
pub use extractor::{extract_skills, SkillExtractor};
pub use index::{JobIndex, RankOutcome, Ranking};
pub use ranker::{best_matches, cosine_similarity, rank_scores, BestMatch, SCORE_EPSILON};
pub use vector::{vectorize, PresenceVector};
pub use vocabulary::{build_vocabulary, Vocabulary};
