use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Ledger index out of range: index {index}, size {size}")]
    LedgerIndex { index: usize, size: usize },

    #[error("Invalid tier rules: {0}")]
    InvalidRules(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
