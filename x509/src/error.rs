use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    PublicKey(#[from] utsushi_keys::Error),

    #[error("invalid object identifier: {0}")]
    InvalidObjectIdentifier(String),
}

impl Error {
    /// Returns the public key error behind this error, if any.
    pub fn key_error(&self) -> Option<&utsushi_keys::Error> {
        match self {
            Error::PublicKey(e) => Some(e),
            Error::InvalidObjectIdentifier(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
