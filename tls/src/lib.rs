//! TLS connection state and its serializable mirror.
//!
//! [`ConnectionState`] holds what a TLS client knows about an established
//! connection: negotiated parameters, the peer's certificate chain and the
//! chains that verification built from it. [`encode_state`] and
//! [`decode_state`] translate it to and from [`SerializableTlsState`].
//! A plaintext response has no state at all, and that absence survives the
//! round trip as `None` rather than as a zeroed record.

#![forbid(unsafe_code)]

pub mod error;
pub mod mirror;
pub mod state;

pub use error::{Error, Result};
pub use mirror::{SerializableTlsState, decode_state, encode_state};
pub use state::ConnectionState;
