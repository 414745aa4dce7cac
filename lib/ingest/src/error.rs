use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Catalog {path} is missing required column '{column}'")]
    MissingColumn { path: String, column: &'static str },

    #[error("Unsupported document type: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[cfg(feature = "docx")]
    #[error("DOCX container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[cfg(feature = "docx")]
    #[error("DOCX markup error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("PDF error: {0}")]
    Pdf(String),
}
