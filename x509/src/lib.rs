//! X.509 certificates and their serializable mirror.
//!
//! [`Certificate`] is the live, fully typed view of a certificate as a TLS
//! stack hands it out: the raw DER pieces together with every field parsed
//! from them. [`SerializableCertificate`] is its wire twin. The raw DER is
//! the source of truth; the structured fields are a parsed cache of it and
//! are carried verbatim in both directions, never re-derived.
//!
//! Chains ([`CertificateChain`]) and chains-of-chains (the verified chains
//! of a TLS connection) are mirrored element-wise by [`encode_sequence`],
//! [`decode_sequence`], [`encode_chains`] and [`decode_chains`]. An absent
//! chain stays absent and an empty chain stays empty.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod certificate;
pub mod chain;
pub mod error;
pub mod extension;
pub mod mirror;
pub mod name;
pub mod oid;

pub use algorithm::{PublicKeyAlgorithm, SignatureAlgorithm};
pub use certificate::Certificate;
pub use chain::CertificateChain;
pub use error::{Error, Result};
pub use extension::{ExtKeyUsage, Extension, KeyUsage};
pub use mirror::{
    SerializableCertificate, decode_chains, decode_sequence, encode_chains, encode_sequence,
};
pub use name::{AttributeTypeAndValue, Name};
pub use oid::ObjectIdentifier;
