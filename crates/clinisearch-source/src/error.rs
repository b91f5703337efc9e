use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("source {source_name} unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },
    #[error("source {source_name} returned malformed data: {reason}")]
    Malformed { source_name: String, reason: String },
    #[error("source {source_name} holds results for {recorded:?}, not {requested:?}")]
    QueryMismatch {
        source_name: String,
        recorded: Option<String>,
        requested: String,
    },
    #[error(transparent)]
    Engine(#[from] clinisearch_core::Error),
}

pub type Result<T> = std::result::Result<T, SourceError>;
