//! Tagged wire encoding of public keys.

use num_bigint::BigUint;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::trace;
use utsushi::decoder::{DecodableFrom, Decoder};
use utsushi::encoder::{EncodableTo, Encoder};

use crate::ec::{EcdsaPublicKey, NamedCurve};
use crate::error::{Error, Result};
use crate::public_key::{KeyAlgorithm, PublicKey};

/// Wire form of a public key: an algorithm tag and an opaque payload.
///
/// The payload is the JSON encoding of the algorithm's fields, whatever
/// format the surrounding record is written in. The tag is kept as a plain
/// string so that a record written by a newer producer still
/// deserializes; the unknown tag is only rejected when decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializablePublicKey {
    #[serde(rename = "type")]
    key_type: String,
    #[serde(with = "utsushi::fields::b64")]
    payload: Vec<u8>,
}

impl SerializablePublicKey {
    pub fn new(key_type: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            key_type: key_type.into(),
            payload,
        }
    }

    pub fn key_type(&self) -> &str {
        &self.key_type
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// A record with an empty tag stands for "no key".
    pub fn is_empty(&self) -> bool {
        self.key_type.is_empty()
    }

    fn payload_as<T: DeserializeOwned>(&self, algorithm: KeyAlgorithm) -> Result<T> {
        serde_json::from_slice(&self.payload).map_err(|e| Error::MalformedKeyPayload {
            algorithm,
            reason: e.to_string(),
        })
    }
}

#[derive(Serialize)]
struct CurveDescriptor {
    name: &'static str,
    oid: &'static str,
    bit_size: u32,
}

#[derive(Serialize)]
struct EcdsaPayload<'a> {
    curve: CurveDescriptor,
    #[serde(with = "utsushi::fields::decimal")]
    x: &'a BigUint,
    #[serde(with = "utsushi::fields::decimal")]
    y: &'a BigUint,
}

impl<'a> From<&'a EcdsaPublicKey> for EcdsaPayload<'a> {
    fn from(key: &'a EcdsaPublicKey) -> Self {
        let params = key.curve().params();
        Self {
            curve: CurveDescriptor {
                name: params.name,
                oid: params.oid,
                bit_size: params.bit_size,
            },
            x: key.x(),
            y: key.y(),
        }
    }
}

// Only the curve name is trusted on decode; the other descriptor fields are
// informational and ignored.
#[derive(Deserialize)]
struct CurveName {
    name: String,
}

#[derive(Deserialize)]
struct EcdsaWire {
    curve: CurveName,
    #[serde(with = "utsushi::fields::decimal")]
    x: BigUint,
    #[serde(with = "utsushi::fields::decimal")]
    y: BigUint,
}

impl EncodableTo<PublicKey> for SerializablePublicKey {}

impl Encoder<PublicKey, SerializablePublicKey> for PublicKey {
    type Error = Error;

    fn encode(&self) -> Result<SerializablePublicKey> {
        let (algorithm, payload) = match self {
            PublicKey::Rsa(key) => (KeyAlgorithm::Rsa, serde_json::to_vec(key)),
            PublicKey::Ecdsa(key) => (
                KeyAlgorithm::Ecdsa,
                serde_json::to_vec(&EcdsaPayload::from(key)),
            ),
            PublicKey::Dsa(key) => (KeyAlgorithm::Dsa, serde_json::to_vec(key)),
            PublicKey::Ed25519(key) => (KeyAlgorithm::Ed25519, serde_json::to_vec(key)),
            PublicKey::Other { algorithm, .. } => {
                return Err(Error::UnsupportedKeyType(algorithm.clone()));
            }
        };
        let payload =
            payload.map_err(|source| Error::PayloadEncoding { algorithm, source })?;

        trace!(key_type = %algorithm, payload_len = payload.len(), "public key encoded");
        Ok(SerializablePublicKey::new(algorithm.tag(), payload))
    }
}

impl DecodableFrom<SerializablePublicKey> for PublicKey {}

impl Decoder<SerializablePublicKey, PublicKey> for SerializablePublicKey {
    type Error = Error;

    fn decode(&self) -> Result<PublicKey> {
        let algorithm: KeyAlgorithm = self.key_type.parse()?;
        let key = match algorithm {
            KeyAlgorithm::Rsa => PublicKey::Rsa(self.payload_as(algorithm)?),
            KeyAlgorithm::Dsa => PublicKey::Dsa(self.payload_as(algorithm)?),
            KeyAlgorithm::Ed25519 => PublicKey::Ed25519(self.payload_as(algorithm)?),
            KeyAlgorithm::Ecdsa => {
                let wire: EcdsaWire = self.payload_as(algorithm)?;
                let curve = NamedCurve::from_name(&wire.curve.name)?;
                PublicKey::Ecdsa(EcdsaPublicKey::new(curve, wire.x, wire.y)?)
            }
        };

        trace!(key_type = %algorithm, "public key decoded");
        Ok(key)
    }
}
