//! # utsushi
//!
//! Core pieces shared by the utsushi mirror crates.
//!
//! utsushi freezes a live HTTP response, including its TLS connection
//! state and certificate chains, into a flat record that serde can write
//! to JSON or YAML, and thaws such a record back into a live value.
//! Each layer is a pure translation between a native type and its
//! serializable twin:
//!
//! ```text
//! Response ─ ConnectionState ─ Certificate ─ PublicKey      (native)
//!    │              │               │             │
//! SerializableResponse ─ ... ─ SerializablePublicKey         (wire)
//! ```
//!
//! This crate holds the conversion traits every layer implements
//! ([`encoder::Encoder`] and [`decoder::Decoder`]), the serde field
//! helpers used by the wire records ([`fields`]) and the outer wire
//! encoding ([`format::WireFormat`]).
//!
//! ## Example
//!
//! ```ignore
//! use utsushi::decoder::Decoder;
//! use utsushi::encoder::Encoder;
//! use utsushi_keys::{PublicKey, SerializablePublicKey};
//!
//! let record: SerializablePublicKey = key.encode()?;
//! let thawed: PublicKey = record.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod fields;
pub mod format;

pub use error::{Error, Result};
pub use format::WireFormat;
