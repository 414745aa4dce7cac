use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Candidate and job vectors were built over vocabularies of different size.
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Same size, different vocabulary snapshot.
    #[error("Vector built from a different vocabulary: expected fingerprint {expected:#018x}, got {actual:#018x}")]
    VocabularyMismatch { expected: u64, actual: u64 },

    #[error("Invalid token pattern: {0}")]
    Pattern(String),
}
