//! # skillmatch Ingest
//!
//! Readers feeding the matching pipeline:
//!
//! - [`read_catalog`] - Job catalog from a CSV (`role`, `skills` columns) or JSON file
//! - [`FileDocumentReader`] - Candidate documents as plain text, `.docx` (feature `docx`,
//!   on by default) or `.pdf` (feature `pdf`)
//! - [`expand_inputs`] - Directory arguments expanded into sorted file lists

pub mod catalog;
pub mod document;
pub mod error;

pub use catalog::{read_catalog, read_catalog_csv, read_catalog_json, ROLE_COLUMN, SKILLS_COLUMN};
pub use document::{expand_inputs, DocumentKind, DocumentReader, FileDocumentReader};
pub use error::{IngestError, Result};
