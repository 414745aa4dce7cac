//! # skillmatch Eval
//!
//! Evaluation layer on top of `skillmatch-core`: turns candidate documents
//! into per-candidate reports.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Document   │────>│  Evaluator  │────>│  Candidate  │
//! │   Reader    │     │ (per doc)   │     │   Report    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │  JobIndex   │     │   Render    │
//!                     │ (frozen)    │     │ text/chart/ │
//!                     └─────────────┘     │    json     │
//!                                         └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use skillmatch_core::Catalog;
//! use skillmatch_eval::{Evaluator, SkipReason};
//!
//! let catalog: Catalog = [("Data Analyst", "python sql excel")].into_iter().collect();
//! let evaluator = Evaluator::from_catalog(catalog).unwrap();
//!
//! let report = evaluator.evaluate_text(0, "cv.txt", "Name: Jane Doe\nPython, SQL").unwrap();
//! assert_eq!(report.ranked().unwrap().predicted_role, "Data Analyst");
//!
//! let report = evaluator.evaluate_text(1, "cv2.txt", "Gardening").unwrap();
//! assert_eq!(report.skip_reason(), Some(SkipReason::NoSkillsMatched));
//! ```

pub mod error;
pub mod evaluator;
pub mod identity;
pub mod render;
pub mod report;

pub use error::{EvalError, Result};
pub use evaluator::{BatchMode, Evaluator};
pub use identity::{Identity, IdentityExtractor, EMAIL_NOT_FOUND, NAME_NOT_FOUND};
pub use render::{render_batch_text, render_chart, render_json, render_text, BatchOutput, TextOptions};
pub use report::{CandidateReport, Outcome, RoleScore, SimilarityReport, SkipReason};
