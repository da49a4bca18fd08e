use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Certificate(#[from] utsushi_x509::Error),
}

impl Error {
    /// Returns the public key error behind this error, if any.
    pub fn key_error(&self) -> Option<&utsushi_keys::Error> {
        match self {
            Error::Certificate(e) => e.key_error(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
