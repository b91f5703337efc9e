use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid filter configuration: {0}")]
    InvalidFilterConfig(String),
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
    #[error("duplicate record id: {0}")]
    DuplicateId(String),
    #[error("record {0} has an empty body")]
    EmptyBody(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
