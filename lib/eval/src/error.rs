use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Error, Debug)]
pub enum EvalError {
    /// Vectors from different vocabulary snapshots met in the ranker. Aborts the batch.
    #[error("Matching core error: {0}")]
    Core(#[from] skillmatch_core::Error),

    #[error("Invalid identity pattern: {0}")]
    Pattern(String),

    #[error("Render error: {0}")]
    Render(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
