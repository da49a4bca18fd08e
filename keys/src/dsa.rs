//! DSA public keys.
//!
//! [RFC 3279 Section 2.3.2](https://datatracker.ietf.org/doc/html/rfc3279#section-2.3.2):
//! ```asn1
//! DSAPublicKey ::= INTEGER -- public key, Y
//!
//! Dss-Parms ::= SEQUENCE {
//!     p   INTEGER,
//!     q   INTEGER,
//!     g   INTEGER
//! }
//! ```

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Domain parameters shared by a group of DSA keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DsaParameters {
    /// Prime modulus p
    #[serde(with = "utsushi::fields::decimal")]
    pub p: BigUint,
    /// Prime divisor q (q divides p-1)
    #[serde(with = "utsushi::fields::decimal")]
    pub q: BigUint,
    /// Generator g
    #[serde(with = "utsushi::fields::decimal")]
    pub g: BigUint,
}

impl DsaParameters {
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Self {
        Self { p, q, g }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DsaPublicKey {
    pub parameters: DsaParameters,
    #[serde(with = "utsushi::fields::decimal")]
    pub y: BigUint,
}

impl DsaPublicKey {
    pub fn new(parameters: DsaParameters, y: BigUint) -> Self {
        Self { parameters, y }
    }

    /// Length of the prime modulus in bits.
    pub fn key_size(&self) -> u32 {
        u32::try_from(self.parameters.p.bits()).unwrap_or(u32::MAX)
    }
}
