use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read response body: {0}")]
    Io(#[from] io::Error),

    #[error("response body exceeds the {limit} byte limit")]
    BodyTooLarge { limit: usize },

    #[error("failed to serialize response: {0}")]
    Serialization(#[source] utsushi::Error),

    #[error("failed to deserialize response: {0}")]
    Deserialization(#[source] utsushi::Error),

    #[error(transparent)]
    Tls(#[from] utsushi_tls::Error),
}

impl Error {
    /// Returns the public key error behind this error, if any.
    pub fn key_error(&self) -> Option<&utsushi_keys::Error> {
        match self {
            Error::Tls(e) => e.key_error(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
