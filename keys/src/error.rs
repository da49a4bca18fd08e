use thiserror::Error;

use crate::public_key::KeyAlgorithm;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported public key type: {0:?}")]
    UnsupportedKeyType(String),

    #[error("unknown elliptic curve: {0:?}")]
    UnknownCurve(String),

    #[error("malformed {algorithm} key payload: {reason}")]
    MalformedKeyPayload {
        algorithm: KeyAlgorithm,
        reason: String,
    },

    #[error("failed to encode {algorithm} key payload: {source}")]
    PayloadEncoding {
        algorithm: KeyAlgorithm,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
