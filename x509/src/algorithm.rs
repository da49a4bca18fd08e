//! Algorithm identifiers declared by a certificate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Signature algorithm the issuer used to sign the certificate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureAlgorithm {
    #[default]
    Unknown,
    Md2WithRsa,
    Md5WithRsa,
    Sha1WithRsa,
    Sha256WithRsa,
    Sha384WithRsa,
    Sha512WithRsa,
    DsaWithSha1,
    DsaWithSha256,
    EcdsaWithSha1,
    EcdsaWithSha256,
    EcdsaWithSha384,
    EcdsaWithSha512,
    Sha256WithRsaPss,
    Sha384WithRsaPss,
    Sha512WithRsaPss,
    PureEd25519,
}

impl SignatureAlgorithm {
    pub const fn name(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Unknown => "Unknown",
            SignatureAlgorithm::Md2WithRsa => "MD2-RSA",
            SignatureAlgorithm::Md5WithRsa => "MD5-RSA",
            SignatureAlgorithm::Sha1WithRsa => "SHA1-RSA",
            SignatureAlgorithm::Sha256WithRsa => "SHA256-RSA",
            SignatureAlgorithm::Sha384WithRsa => "SHA384-RSA",
            SignatureAlgorithm::Sha512WithRsa => "SHA512-RSA",
            SignatureAlgorithm::DsaWithSha1 => "DSA-SHA1",
            SignatureAlgorithm::DsaWithSha256 => "DSA-SHA256",
            SignatureAlgorithm::EcdsaWithSha1 => "ECDSA-SHA1",
            SignatureAlgorithm::EcdsaWithSha256 => "ECDSA-SHA256",
            SignatureAlgorithm::EcdsaWithSha384 => "ECDSA-SHA384",
            SignatureAlgorithm::EcdsaWithSha512 => "ECDSA-SHA512",
            SignatureAlgorithm::Sha256WithRsaPss => "SHA256-RSAPSS",
            SignatureAlgorithm::Sha384WithRsaPss => "SHA384-RSAPSS",
            SignatureAlgorithm::Sha512WithRsaPss => "SHA512-RSAPSS",
            SignatureAlgorithm::PureEd25519 => "Ed25519",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Algorithm of the subject public key as declared in the certificate.
///
/// This is what the certificate says, independent of whether the key
/// itself could be parsed into one of the supported key types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicKeyAlgorithm {
    #[default]
    Unknown,
    Rsa,
    Dsa,
    Ecdsa,
    Ed25519,
}

impl fmt::Display for PublicKeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublicKeyAlgorithm::Unknown => "Unknown",
            PublicKeyAlgorithm::Rsa => "RSA",
            PublicKeyAlgorithm::Dsa => "DSA",
            PublicKeyAlgorithm::Ecdsa => "ECDSA",
            PublicKeyAlgorithm::Ed25519 => "Ed25519",
        };
        f.write_str(name)
    }
}
