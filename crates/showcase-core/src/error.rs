use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("invalid size key: {0} (expected 1-9)")]
    InvalidSize(i64),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
