//! Public keys and their tagged wire encoding.
//!
//! A certificate's public key is one of a closed set of algorithms. On the
//! wire it becomes a [`SerializablePublicKey`]: a string tag naming the
//! algorithm plus an opaque payload whose layout the tag determines.
//!
//! | tag       | native type            | payload fields                   |
//! |-----------|------------------------|----------------------------------|
//! | `rsa`     | [`RsaPublicKey`]       | `n`, `e`                         |
//! | `ecdsa`   | [`EcdsaPublicKey`]     | `curve { name, oid, bit_size }`, `x`, `y` |
//! | `dsa`     | [`DsaPublicKey`]       | `parameters { p, q, g }`, `y`    |
//! | `ed25519` | [`Ed25519PublicKey`]   | 32 raw bytes (base64)            |
//!
//! Decoding is driven by the tag alone. An unknown tag, an ECDSA curve
//! outside [`NamedCurve`], or a payload that does not fit its tag is an
//! error, never a default.
//!
//! ```
//! use num_bigint::BigUint;
//! use utsushi::decoder::Decoder;
//! use utsushi::encoder::Encoder;
//! use utsushi_keys::{PublicKey, RsaPublicKey, SerializablePublicKey};
//!
//! let key = PublicKey::Rsa(RsaPublicKey::new(BigUint::from(3233u32), BigUint::from(17u32)));
//! let record: SerializablePublicKey = key.encode()?;
//! assert_eq!(record.key_type(), "rsa");
//!
//! let thawed: PublicKey = record.decode()?;
//! assert_eq!(thawed, key);
//! # Ok::<(), utsushi_keys::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod codec;
pub mod dsa;
pub mod ec;
pub mod ed25519;
pub mod error;
pub mod public_key;
pub mod rsa;

pub use codec::SerializablePublicKey;
pub use dsa::{DsaParameters, DsaPublicKey};
pub use ec::{CurveParams, EcdsaPublicKey, NamedCurve};
pub use ed25519::Ed25519PublicKey;
pub use error::{Error, Result};
pub use public_key::{KeyAlgorithm, PublicKey};
pub use rsa::RsaPublicKey;
