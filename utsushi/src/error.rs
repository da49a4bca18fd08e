use thiserror::Error;

/// Errors raised by [`WireFormat`](crate::WireFormat) while writing or
/// reading a wire record.
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("unknown wire format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
