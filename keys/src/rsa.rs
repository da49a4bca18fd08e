//! RSA public keys.
//!
//! [RFC 8017 Appendix A.1.1](https://datatracker.ietf.org/doc/html/rfc8017#appendix-A.1.1):
//! ```asn1
//! RSAPublicKey ::= SEQUENCE {
//!     modulus           INTEGER,  -- n
//!     publicExponent    INTEGER   -- e
//! }
//! ```

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RsaPublicKey {
    /// Modulus
    #[serde(with = "utsushi::fields::decimal")]
    pub n: BigUint,
    /// Public exponent
    #[serde(with = "utsushi::fields::decimal")]
    pub e: BigUint,
}

impl RsaPublicKey {
    pub fn new(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }

    /// Modulus length in bits.
    pub fn key_size(&self) -> u32 {
        u32::try_from(self.n.bits()).unwrap_or(u32::MAX)
    }
}
