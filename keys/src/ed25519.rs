//! Ed25519 public keys.
//!
//! [RFC 8410 Section 3](https://datatracker.ietf.org/doc/html/rfc8410#section-3):
//! the subject public key is the 32-byte encoded point, carried as-is.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::public_key::KeyAlgorithm;

pub const PUBLIC_KEY_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl Ed25519PublicKey {
    pub const fn new(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Builds a key from a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; PUBLIC_KEY_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| Error::MalformedKeyPayload {
                    algorithm: KeyAlgorithm::Ed25519,
                    reason: format!(
                        "expected {} key bytes, got {}",
                        PUBLIC_KEY_LENGTH,
                        bytes.len()
                    ),
                })?;
        Ok(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for Ed25519PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Ed25519PublicKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        utsushi::fields::b64::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Ed25519PublicKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = utsushi::fields::b64::deserialize(deserializer)?;
        Self::from_slice(&bytes).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(31)]
    #[case(33)]
    #[case(64)]
    fn test_from_slice_wrong_length(#[case] len: usize) {
        let err = Ed25519PublicKey::from_slice(&vec![7u8; len]).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedKeyPayload {
                algorithm: KeyAlgorithm::Ed25519,
                ..
            }
        ));
    }

    #[test]
    fn test_serialize_as_base64() {
        let key = Ed25519PublicKey::new([0u8; PUBLIC_KEY_LENGTH]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#""AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=""#);

        let back: Ed25519PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_deserialize_short_key_fails() {
        assert!(serde_json::from_str::<Ed25519PublicKey>(r#""AAEC""#).is_err());
    }
}
