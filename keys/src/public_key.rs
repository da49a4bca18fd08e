//! Native public key types.

use std::fmt;
use std::str::FromStr;

use crate::dsa::DsaPublicKey;
use crate::ec::EcdsaPublicKey;
use crate::ed25519::Ed25519PublicKey;
use crate::error::{Error, Result};
use crate::rsa::RsaPublicKey;

/// The closed set of key algorithms with a wire encoding.
///
/// The tag written on the wire is the lowercase algorithm name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    Rsa,
    Ecdsa,
    Dsa,
    Ed25519,
}

impl KeyAlgorithm {
    pub const fn tag(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => "rsa",
            KeyAlgorithm::Ecdsa => "ecdsa",
            KeyAlgorithm::Dsa => "dsa",
            KeyAlgorithm::Ed25519 => "ed25519",
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for KeyAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rsa" => Ok(KeyAlgorithm::Rsa),
            "ecdsa" => Ok(KeyAlgorithm::Ecdsa),
            "dsa" => Ok(KeyAlgorithm::Dsa),
            "ed25519" => Ok(KeyAlgorithm::Ed25519),
            other => Err(Error::UnsupportedKeyType(other.to_string())),
        }
    }
}

/// A public key as held by a live certificate.
///
/// `Other` keeps keys of algorithms that have no wire encoding (Ed448,
/// X25519, GOST, ...) so that a certificate carrying one can still be
/// represented. Encoding such a key fails with
/// [`Error::UnsupportedKeyType`]; the caller decides whether that is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    Rsa(RsaPublicKey),
    Ecdsa(EcdsaPublicKey),
    Dsa(DsaPublicKey),
    Ed25519(Ed25519PublicKey),
    Other {
        /// Algorithm name or OID, used in error messages
        algorithm: String,
        /// Raw subject public key bits
        key: Vec<u8>,
    },
}

impl PublicKey {
    /// Returns the wire algorithm of this key, or `None` for
    /// [`PublicKey::Other`].
    pub fn algorithm(&self) -> Option<KeyAlgorithm> {
        match self {
            PublicKey::Rsa(_) => Some(KeyAlgorithm::Rsa),
            PublicKey::Ecdsa(_) => Some(KeyAlgorithm::Ecdsa),
            PublicKey::Dsa(_) => Some(KeyAlgorithm::Dsa),
            PublicKey::Ed25519(_) => Some(KeyAlgorithm::Ed25519),
            PublicKey::Other { .. } => None,
        }
    }

    /// Human-readable algorithm name.
    pub fn algorithm_name(&self) -> &str {
        match self {
            PublicKey::Other { algorithm, .. } => algorithm,
            supported => supported.algorithm().map_or("unknown", |alg| alg.tag()),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.algorithm().is_some()
    }

    /// Returns the key size in bits.
    ///
    /// For RSA and DSA keys this is the modulus length, for ECDSA the
    /// curve's field size and for Ed25519 256. Returns 0 for
    /// [`PublicKey::Other`].
    pub fn key_size(&self) -> u32 {
        match self {
            PublicKey::Rsa(key) => key.key_size(),
            PublicKey::Ecdsa(key) => key.key_size(),
            PublicKey::Dsa(key) => key.key_size(),
            PublicKey::Ed25519(_) => 256,
            PublicKey::Other { .. } => 0,
        }
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        PublicKey::Rsa(key)
    }
}

impl From<EcdsaPublicKey> for PublicKey {
    fn from(key: EcdsaPublicKey) -> Self {
        PublicKey::Ecdsa(key)
    }
}

impl From<DsaPublicKey> for PublicKey {
    fn from(key: DsaPublicKey) -> Self {
        PublicKey::Dsa(key)
    }
}

impl From<Ed25519PublicKey> for PublicKey {
    fn from(key: Ed25519PublicKey) -> Self {
        PublicKey::Ed25519(key)
    }
}
