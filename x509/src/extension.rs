//! Certificate extensions, key usage and extended key usage.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::oid::ObjectIdentifier;

/// A single X.509 extension as carried in the certificate.
///
/// RFC 5280 Section 4.1.2.9:
/// ```asn1
/// Extension  ::=  SEQUENCE  {
///     extnID      OBJECT IDENTIFIER,
///     critical    BOOLEAN DEFAULT FALSE,
///     extnValue   OCTET STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub id: ObjectIdentifier,
    pub critical: bool,
    /// DER encoding of the extension value
    #[serde(with = "utsushi::fields::b64")]
    pub value: Vec<u8>,
}

impl Extension {
    pub fn new(id: ObjectIdentifier, critical: bool, value: Vec<u8>) -> Self {
        Self {
            id,
            critical,
            value,
        }
    }
}

/*
RFC 5280 Section 4.2.1.3
KeyUsage ::= BIT STRING {
    digitalSignature        (0),
    nonRepudiation          (1), -- renamed to contentCommitment
    keyEncipherment         (2),
    dataEncipherment        (3),
    keyAgreement            (4),
    keyCertSign             (5),
    cRLSign                 (6),
    encipherOnly            (7),
    decipherOnly            (8)
}
*/

/// Key usage bitmask; bit `n` is the RFC 5280 bit `n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyUsage(u16);

impl KeyUsage {
    pub const DIGITAL_SIGNATURE: KeyUsage = KeyUsage(1 << 0);
    pub const CONTENT_COMMITMENT: KeyUsage = KeyUsage(1 << 1);
    pub const KEY_ENCIPHERMENT: KeyUsage = KeyUsage(1 << 2);
    pub const DATA_ENCIPHERMENT: KeyUsage = KeyUsage(1 << 3);
    pub const KEY_AGREEMENT: KeyUsage = KeyUsage(1 << 4);
    pub const KEY_CERT_SIGN: KeyUsage = KeyUsage(1 << 5);
    pub const CRL_SIGN: KeyUsage = KeyUsage(1 << 6);
    pub const ENCIPHER_ONLY: KeyUsage = KeyUsage(1 << 7);
    pub const DECIPHER_ONLY: KeyUsage = KeyUsage(1 << 8);

    const NAMES: [(KeyUsage, &'static str); 9] = [
        (Self::DIGITAL_SIGNATURE, "Digital Signature"),
        (Self::CONTENT_COMMITMENT, "Content Commitment"),
        (Self::KEY_ENCIPHERMENT, "Key Encipherment"),
        (Self::DATA_ENCIPHERMENT, "Data Encipherment"),
        (Self::KEY_AGREEMENT, "Key Agreement"),
        (Self::KEY_CERT_SIGN, "Certificate Sign"),
        (Self::CRL_SIGN, "CRL Sign"),
        (Self::ENCIPHER_ONLY, "Encipher Only"),
        (Self::DECIPHER_ONLY, "Decipher Only"),
    ];

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn contains(&self, other: KeyUsage) -> bool {
        self.0 & other.0 == other.0
    }

    /// Names of the usages set in this mask, in bit order.
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(usage, _)| self.contains(*usage))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for KeyUsage {
    type Output = KeyUsage;

    fn bitor(self, rhs: KeyUsage) -> KeyUsage {
        KeyUsage(self.0 | rhs.0)
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(", "))
    }
}

/// Well-known extended key usage purposes.
///
/// Purposes outside this list are kept as raw OIDs in
/// [`Certificate::unknown_ext_key_usage`](crate::Certificate::unknown_ext_key_usage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtKeyUsage {
    Any,
    ServerAuth,
    ClientAuth,
    CodeSigning,
    EmailProtection,
    IpsecEndSystem,
    IpsecTunnel,
    IpsecUser,
    TimeStamping,
    OcspSigning,
    MicrosoftServerGatedCrypto,
    NetscapeServerGatedCrypto,
    MicrosoftCommercialCodeSigning,
    MicrosoftKernelCodeSigning,
}

impl ExtKeyUsage {
    const ALL: [ExtKeyUsage; 14] = [
        ExtKeyUsage::Any,
        ExtKeyUsage::ServerAuth,
        ExtKeyUsage::ClientAuth,
        ExtKeyUsage::CodeSigning,
        ExtKeyUsage::EmailProtection,
        ExtKeyUsage::IpsecEndSystem,
        ExtKeyUsage::IpsecTunnel,
        ExtKeyUsage::IpsecUser,
        ExtKeyUsage::TimeStamping,
        ExtKeyUsage::OcspSigning,
        ExtKeyUsage::MicrosoftServerGatedCrypto,
        ExtKeyUsage::NetscapeServerGatedCrypto,
        ExtKeyUsage::MicrosoftCommercialCodeSigning,
        ExtKeyUsage::MicrosoftKernelCodeSigning,
    ];

    /// Dotted-decimal OID of the purpose.
    pub const fn oid_str(&self) -> &'static str {
        match self {
            ExtKeyUsage::Any => "2.5.29.37.0",
            ExtKeyUsage::ServerAuth => "1.3.6.1.5.5.7.3.1",
            ExtKeyUsage::ClientAuth => "1.3.6.1.5.5.7.3.2",
            ExtKeyUsage::CodeSigning => "1.3.6.1.5.5.7.3.3",
            ExtKeyUsage::EmailProtection => "1.3.6.1.5.5.7.3.4",
            ExtKeyUsage::IpsecEndSystem => "1.3.6.1.5.5.7.3.5",
            ExtKeyUsage::IpsecTunnel => "1.3.6.1.5.5.7.3.6",
            ExtKeyUsage::IpsecUser => "1.3.6.1.5.5.7.3.7",
            ExtKeyUsage::TimeStamping => "1.3.6.1.5.5.7.3.8",
            ExtKeyUsage::OcspSigning => "1.3.6.1.5.5.7.3.9",
            ExtKeyUsage::MicrosoftServerGatedCrypto => "1.3.6.1.4.1.311.10.3.3",
            ExtKeyUsage::NetscapeServerGatedCrypto => "2.16.840.1.113730.4.1",
            ExtKeyUsage::MicrosoftCommercialCodeSigning => "1.3.6.1.4.1.311.2.1.22",
            ExtKeyUsage::MicrosoftKernelCodeSigning => "1.3.6.1.4.1.311.61.1.1",
        }
    }

    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        let oid = oid.to_string();
        Self::ALL.into_iter().find(|usage| usage.oid_str() == oid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyUsage::default(), vec![])]
    #[case(KeyUsage::DIGITAL_SIGNATURE, vec!["Digital Signature"])]
    #[case(
        KeyUsage::DIGITAL_SIGNATURE | KeyUsage::KEY_ENCIPHERMENT,
        vec!["Digital Signature", "Key Encipherment"]
    )]
    #[case(
        KeyUsage::KEY_CERT_SIGN | KeyUsage::CRL_SIGN | KeyUsage::DECIPHER_ONLY,
        vec!["Certificate Sign", "CRL Sign", "Decipher Only"]
    )]
    fn test_key_usage_names(#[case] usage: KeyUsage, #[case] expected: Vec<&str>) {
        assert_eq!(usage.names(), expected);
        assert_eq!(usage.to_string(), expected.join(", "));
    }

    #[test]
    fn test_key_usage_bits() {
        let usage = KeyUsage::KEY_CERT_SIGN | KeyUsage::CRL_SIGN;
        assert_eq!(usage.bits(), 0b110_0000);
        assert!(usage.contains(KeyUsage::CRL_SIGN));
        assert!(!usage.contains(KeyUsage::DIGITAL_SIGNATURE));
        assert_eq!(KeyUsage::from_bits(usage.bits()), usage);
        assert_eq!(serde_json::to_string(&usage).unwrap(), "96");
    }

    #[test]
    fn test_ext_key_usage_oid_mapping() {
        for usage in ExtKeyUsage::ALL {
            let oid: ObjectIdentifier = usage.oid_str().parse().unwrap();
            assert_eq!(ExtKeyUsage::from_oid(&oid), Some(usage));
        }
        let unknown: ObjectIdentifier = "1.3.6.1.5.5.7.3.99".parse().unwrap();
        assert_eq!(ExtKeyUsage::from_oid(&unknown), None);
    }
}
