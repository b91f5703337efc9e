use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] clinisearch_core::Error),
    #[error("home directory not found")]
    NoHome,
}

pub type Result<T> = std::result::Result<T, StoreError>;
