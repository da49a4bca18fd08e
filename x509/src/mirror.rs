//! Serializable mirror of certificates and chains.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use ipnet::IpNet;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use url::Url;
use utsushi::decoder::{DecodableFrom, Decoder};
use utsushi::encoder::{EncodableTo, Encoder};
use utsushi_keys::{PublicKey, SerializablePublicKey};

use crate::algorithm::{PublicKeyAlgorithm, SignatureAlgorithm};
use crate::certificate::Certificate;
use crate::chain::CertificateChain;
use crate::error::{Error, Result};
use crate::extension::{ExtKeyUsage, Extension, KeyUsage};
use crate::name::Name;
use crate::oid::ObjectIdentifier;

/// Wire twin of [`Certificate`].
///
/// Byte fields are base64 and the serial number is a decimal string so the
/// record survives text formats unchanged. `public_key` is `null` when the
/// certificate had no key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableCertificate {
    #[serde(with = "utsushi::fields::b64")]
    pub raw: Vec<u8>,
    #[serde(with = "utsushi::fields::b64")]
    pub raw_tbs_certificate: Vec<u8>,
    #[serde(with = "utsushi::fields::b64")]
    pub raw_subject_public_key_info: Vec<u8>,
    #[serde(with = "utsushi::fields::b64")]
    pub raw_subject: Vec<u8>,
    #[serde(with = "utsushi::fields::b64")]
    pub raw_issuer: Vec<u8>,

    #[serde(with = "utsushi::fields::b64")]
    pub signature: Vec<u8>,
    pub signature_algorithm: SignatureAlgorithm,

    pub public_key_algorithm: PublicKeyAlgorithm,
    pub public_key: Option<SerializablePublicKey>,

    pub version: i32,
    #[serde(with = "utsushi::fields::decimal")]
    pub serial_number: BigInt,
    pub issuer: Name,
    pub subject: Name,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub key_usage: KeyUsage,

    pub extensions: Vec<Extension>,
    pub extra_extensions: Vec<Extension>,
    pub unhandled_critical_extensions: Vec<ObjectIdentifier>,

    pub ext_key_usage: Vec<ExtKeyUsage>,
    pub unknown_ext_key_usage: Vec<ObjectIdentifier>,

    pub basic_constraints_valid: bool,
    pub is_ca: bool,
    pub max_path_len: i32,
    pub max_path_len_zero: bool,

    #[serde(with = "utsushi::fields::b64")]
    pub subject_key_id: Vec<u8>,
    #[serde(with = "utsushi::fields::b64")]
    pub authority_key_id: Vec<u8>,

    pub ocsp_server: Vec<String>,
    pub issuing_certificate_url: Vec<String>,

    pub dns_names: Vec<String>,
    pub email_addresses: Vec<String>,
    pub ip_addresses: Vec<IpAddr>,
    pub uris: Vec<Url>,

    pub permitted_dns_domains_critical: bool,
    pub permitted_dns_domains: Vec<String>,
    pub excluded_dns_domains: Vec<String>,
    pub permitted_ip_ranges: Vec<IpNet>,
    pub excluded_ip_ranges: Vec<IpNet>,
    pub permitted_email_addresses: Vec<String>,
    pub excluded_email_addresses: Vec<String>,
    pub permitted_uri_domains: Vec<String>,
    pub excluded_uri_domains: Vec<String>,

    pub crl_distribution_points: Vec<String>,
    pub policy_identifiers: Vec<ObjectIdentifier>,
}

impl EncodableTo<Certificate> for SerializableCertificate {}

impl Encoder<Certificate, SerializableCertificate> for Certificate {
    type Error = Error;

    fn encode(&self) -> Result<SerializableCertificate> {
        let Certificate {
            raw,
            raw_tbs_certificate,
            raw_subject_public_key_info,
            raw_subject,
            raw_issuer,
            signature,
            signature_algorithm,
            public_key_algorithm,
            public_key,
            version,
            serial_number,
            issuer,
            subject,
            not_before,
            not_after,
            key_usage,
            extensions,
            extra_extensions,
            unhandled_critical_extensions,
            ext_key_usage,
            unknown_ext_key_usage,
            basic_constraints_valid,
            is_ca,
            max_path_len,
            max_path_len_zero,
            subject_key_id,
            authority_key_id,
            ocsp_server,
            issuing_certificate_url,
            dns_names,
            email_addresses,
            ip_addresses,
            uris,
            permitted_dns_domains_critical,
            permitted_dns_domains,
            excluded_dns_domains,
            permitted_ip_ranges,
            excluded_ip_ranges,
            permitted_email_addresses,
            excluded_email_addresses,
            permitted_uri_domains,
            excluded_uri_domains,
            crl_distribution_points,
            policy_identifiers,
        } = self;

        let public_key = public_key
            .as_ref()
            .map(|key| {
                key.encode().inspect_err(|e| {
                    warn!(
                        subject = %subject,
                        algorithm = key.algorithm_name(),
                        error = %e,
                        "certificate public key has no wire encoding"
                    )
                })
            })
            .transpose()?;

        trace!(subject = %subject, serial = %serial_number, "certificate encoded");

        Ok(SerializableCertificate {
            raw: raw.clone(),
            raw_tbs_certificate: raw_tbs_certificate.clone(),
            raw_subject_public_key_info: raw_subject_public_key_info.clone(),
            raw_subject: raw_subject.clone(),
            raw_issuer: raw_issuer.clone(),
            signature: signature.clone(),
            signature_algorithm: *signature_algorithm,
            public_key_algorithm: *public_key_algorithm,
            public_key,
            version: *version,
            serial_number: serial_number.clone(),
            issuer: issuer.clone(),
            subject: subject.clone(),
            not_before: *not_before,
            not_after: *not_after,
            key_usage: *key_usage,
            extensions: extensions.clone(),
            extra_extensions: extra_extensions.clone(),
            unhandled_critical_extensions: unhandled_critical_extensions.clone(),
            ext_key_usage: ext_key_usage.clone(),
            unknown_ext_key_usage: unknown_ext_key_usage.clone(),
            basic_constraints_valid: *basic_constraints_valid,
            is_ca: *is_ca,
            max_path_len: *max_path_len,
            max_path_len_zero: *max_path_len_zero,
            subject_key_id: subject_key_id.clone(),
            authority_key_id: authority_key_id.clone(),
            ocsp_server: ocsp_server.clone(),
            issuing_certificate_url: issuing_certificate_url.clone(),
            dns_names: dns_names.clone(),
            email_addresses: email_addresses.clone(),
            ip_addresses: ip_addresses.clone(),
            uris: uris.clone(),
            permitted_dns_domains_critical: *permitted_dns_domains_critical,
            permitted_dns_domains: permitted_dns_domains.clone(),
            excluded_dns_domains: excluded_dns_domains.clone(),
            permitted_ip_ranges: permitted_ip_ranges.clone(),
            excluded_ip_ranges: excluded_ip_ranges.clone(),
            permitted_email_addresses: permitted_email_addresses.clone(),
            excluded_email_addresses: excluded_email_addresses.clone(),
            permitted_uri_domains: permitted_uri_domains.clone(),
            excluded_uri_domains: excluded_uri_domains.clone(),
            crl_distribution_points: crl_distribution_points.clone(),
            policy_identifiers: policy_identifiers.clone(),
        })
    }
}

impl DecodableFrom<SerializableCertificate> for Certificate {}

impl Decoder<SerializableCertificate, Certificate> for SerializableCertificate {
    type Error = Error;

    fn decode(&self) -> Result<Certificate> {
        let SerializableCertificate {
            raw,
            raw_tbs_certificate,
            raw_subject_public_key_info,
            raw_subject,
            raw_issuer,
            signature,
            signature_algorithm,
            public_key_algorithm,
            public_key,
            version,
            serial_number,
            issuer,
            subject,
            not_before,
            not_after,
            key_usage,
            extensions,
            extra_extensions,
            unhandled_critical_extensions,
            ext_key_usage,
            unknown_ext_key_usage,
            basic_constraints_valid,
            is_ca,
            max_path_len,
            max_path_len_zero,
            subject_key_id,
            authority_key_id,
            ocsp_server,
            issuing_certificate_url,
            dns_names,
            email_addresses,
            ip_addresses,
            uris,
            permitted_dns_domains_critical,
            permitted_dns_domains,
            excluded_dns_domains,
            permitted_ip_ranges,
            excluded_ip_ranges,
            permitted_email_addresses,
            excluded_email_addresses,
            permitted_uri_domains,
            excluded_uri_domains,
            crl_distribution_points,
            policy_identifiers,
        } = self;

        // An empty tag means the key was omitted, not that it is malformed.
        let public_key = public_key
            .as_ref()
            .filter(|record| !record.is_empty())
            .map(|record| -> Result<PublicKey> { Ok(record.decode()?) })
            .transpose()?;

        trace!(subject = %subject, serial = %serial_number, "certificate decoded");

        Ok(Certificate {
            raw: raw.clone(),
            raw_tbs_certificate: raw_tbs_certificate.clone(),
            raw_subject_public_key_info: raw_subject_public_key_info.clone(),
            raw_subject: raw_subject.clone(),
            raw_issuer: raw_issuer.clone(),
            signature: signature.clone(),
            signature_algorithm: *signature_algorithm,
            public_key_algorithm: *public_key_algorithm,
            public_key,
            version: *version,
            serial_number: serial_number.clone(),
            issuer: issuer.clone(),
            subject: subject.clone(),
            not_before: *not_before,
            not_after: *not_after,
            key_usage: *key_usage,
            extensions: extensions.clone(),
            extra_extensions: extra_extensions.clone(),
            unhandled_critical_extensions: unhandled_critical_extensions.clone(),
            ext_key_usage: ext_key_usage.clone(),
            unknown_ext_key_usage: unknown_ext_key_usage.clone(),
            basic_constraints_valid: *basic_constraints_valid,
            is_ca: *is_ca,
            max_path_len: *max_path_len,
            max_path_len_zero: *max_path_len_zero,
            subject_key_id: subject_key_id.clone(),
            authority_key_id: authority_key_id.clone(),
            ocsp_server: ocsp_server.clone(),
            issuing_certificate_url: issuing_certificate_url.clone(),
            dns_names: dns_names.clone(),
            email_addresses: email_addresses.clone(),
            ip_addresses: ip_addresses.clone(),
            uris: uris.clone(),
            permitted_dns_domains_critical: *permitted_dns_domains_critical,
            permitted_dns_domains: permitted_dns_domains.clone(),
            excluded_dns_domains: excluded_dns_domains.clone(),
            permitted_ip_ranges: permitted_ip_ranges.clone(),
            excluded_ip_ranges: excluded_ip_ranges.clone(),
            permitted_email_addresses: permitted_email_addresses.clone(),
            excluded_email_addresses: excluded_email_addresses.clone(),
            permitted_uri_domains: permitted_uri_domains.clone(),
            excluded_uri_domains: excluded_uri_domains.clone(),
            crl_distribution_points: crl_distribution_points.clone(),
            policy_identifiers: policy_identifiers.clone(),
        })
    }
}

impl EncodableTo<CertificateChain> for Vec<SerializableCertificate> {}

impl Encoder<CertificateChain, Vec<SerializableCertificate>> for CertificateChain {
    type Error = Error;

    fn encode(&self) -> Result<Vec<SerializableCertificate>> {
        self.iter().map(Encoder::encode).collect()
    }
}

impl DecodableFrom<Vec<SerializableCertificate>> for CertificateChain {}

impl Decoder<Vec<SerializableCertificate>, CertificateChain> for Vec<SerializableCertificate> {
    type Error = Error;

    fn decode(&self) -> Result<CertificateChain> {
        self.iter().map(Decoder::decode).collect()
    }
}

/// Encodes a chain element-wise. `None` stays `None`; an empty chain
/// becomes an empty sequence.
pub fn encode_sequence(
    chain: Option<&CertificateChain>,
) -> Result<Option<Vec<SerializableCertificate>>> {
    chain.map(|chain| chain.encode()).transpose()
}

/// Inverse of [`encode_sequence`].
pub fn decode_sequence(
    records: Option<&[SerializableCertificate]>,
) -> Result<Option<CertificateChain>> {
    records
        .map(|records| {
            records
                .iter()
                .map(Decoder::decode)
                .collect::<Result<CertificateChain>>()
        })
        .transpose()
}

/// Encodes a list of chains, such as the verified chains of a TLS
/// connection. The first failing certificate aborts the whole call.
pub fn encode_chains(
    chains: Option<&[CertificateChain]>,
) -> Result<Option<Vec<Vec<SerializableCertificate>>>> {
    chains
        .map(|chains| {
            chains
                .iter()
                .map(|chain| chain.encode())
                .collect::<Result<Vec<Vec<SerializableCertificate>>>>()
        })
        .transpose()
}

/// Inverse of [`encode_chains`].
pub fn decode_chains(
    records: Option<&[Vec<SerializableCertificate>]>,
) -> Result<Option<Vec<CertificateChain>>> {
    records
        .map(|records| {
            records
                .iter()
                .map(|chain| chain.decode())
                .collect::<Result<Vec<CertificateChain>>>()
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use num_bigint::BigUint;
    use rstest::rstest;
    use utsushi_keys::{EcdsaPublicKey, Ed25519PublicKey, NamedCurve, RsaPublicKey};

    fn rsa_key() -> PublicKey {
        PublicKey::Rsa(RsaPublicKey::new(
            BigUint::parse_bytes(b"c4a1f3e9b07d22", 16).unwrap(),
            BigUint::from(65537u32),
        ))
    }

    fn ec_key() -> PublicKey {
        let x = BigUint::parse_bytes(
            b"6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            16,
        )
        .unwrap();
        let y = BigUint::parse_bytes(
            b"4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
            16,
        )
        .unwrap();
        PublicKey::Ecdsa(EcdsaPublicKey::new(NamedCurve::P256, x, y).unwrap())
    }

    fn certificate(cn: &str, key: Option<PublicKey>) -> Certificate {
        Certificate {
            raw: format!("der:{cn}").into_bytes(),
            raw_tbs_certificate: format!("tbs:{cn}").into_bytes(),
            raw_subject_public_key_info: vec![0x30, 0x59, 0x30, 0x13],
            raw_subject: cn.as_bytes().to_vec(),
            raw_issuer: b"Example CA".to_vec(),
            signature: vec![0xde, 0xad, 0xbe, 0xef],
            signature_algorithm: SignatureAlgorithm::Sha256WithRsa,
            public_key_algorithm: PublicKeyAlgorithm::Rsa,
            public_key: key,
            version: 3,
            serial_number: BigInt::parse_bytes(b"-123456789012345678901234567890", 10).unwrap(),
            issuer: Name::with_common_name("Example CA"),
            subject: Name::with_common_name(cn),
            not_before: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            not_after: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            key_usage: KeyUsage::DIGITAL_SIGNATURE | KeyUsage::KEY_ENCIPHERMENT,
            extensions: vec![Extension::new(
                "2.5.29.19".parse().unwrap(),
                true,
                vec![0x30, 0x00],
            )],
            ext_key_usage: vec![ExtKeyUsage::ServerAuth, ExtKeyUsage::ClientAuth],
            unknown_ext_key_usage: vec!["1.3.6.1.4.1.99999.1".parse().unwrap()],
            basic_constraints_valid: true,
            max_path_len: -1,
            subject_key_id: vec![1, 2, 3],
            authority_key_id: vec![4, 5, 6],
            ocsp_server: vec!["http://ocsp.example.com".into()],
            dns_names: vec![cn.into(), format!("www.{cn}")],
            ip_addresses: vec!["192.0.2.1".parse().unwrap(), "2001:db8::1".parse().unwrap()],
            uris: vec![Url::parse("spiffe://example.com/service").unwrap()],
            permitted_ip_ranges: vec!["10.0.0.0/8".parse().unwrap()],
            crl_distribution_points: vec!["http://crl.example.com/ca.crl".into()],
            policy_identifiers: vec!["2.23.140.1.2.1".parse().unwrap()],
            ..Default::default()
        }
    }

    #[rstest]
    #[case(Some(rsa_key()))]
    #[case(Some(ec_key()))]
    #[case(Some(PublicKey::Ed25519(Ed25519PublicKey::new([7u8; 32]))))]
    #[case(None)]
    fn test_certificate_roundtrip(#[case] key: Option<PublicKey>) {
        let cert = certificate("example.com", key);
        let record: SerializableCertificate = cert.encode().unwrap();
        assert_eq!(record.public_key.is_some(), cert.public_key.is_some());

        let decoded: Certificate = record.decode().unwrap();
        assert_eq!(decoded, cert);
    }

    #[test]
    fn test_certificate_roundtrip_through_json() {
        let cert = certificate("example.com", Some(ec_key()));
        let record: SerializableCertificate = cert.encode().unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["serial_number"], "-123456789012345678901234567890");
        assert_eq!(json["raw_issuer"], "RXhhbXBsZSBDQQ==");
        assert_eq!(json["public_key"]["type"], "ecdsa");
        assert_eq!(json["ip_addresses"][1], "2001:db8::1");

        let back: SerializableCertificate = serde_json::from_value(json).unwrap();
        let decoded: Certificate = back.decode().unwrap();
        assert_eq!(decoded, cert);
    }

    #[test]
    fn test_absent_key_serializes_as_null() {
        let record: SerializableCertificate = certificate("a", None).encode().unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["public_key"].is_null());
    }

    #[test]
    fn test_empty_tag_decodes_to_unset_key() {
        let mut record: SerializableCertificate = certificate("a", Some(rsa_key())).encode().unwrap();
        record.public_key = Some(SerializablePublicKey::new("", Vec::new()));
        let decoded: Certificate = record.decode().unwrap();
        assert!(decoded.public_key.is_none());
    }

    #[test]
    fn test_unsupported_key_fails_encode() {
        let cert = certificate(
            "a",
            Some(PublicKey::Other {
                algorithm: "Ed448".into(),
                key: vec![0; 57],
            }),
        );
        let err = Encoder::<Certificate, SerializableCertificate>::encode(&cert).unwrap_err();
        assert!(matches!(
            err.key_error(),
            Some(utsushi_keys::Error::UnsupportedKeyType(_))
        ));
    }

    #[rstest]
    #[case("rsa2048.PublicKey")]
    #[case("x25519")]
    fn test_unknown_tag_fails_decode(#[case] tag: &str) {
        let mut record: SerializableCertificate = certificate("a", Some(rsa_key())).encode().unwrap();
        record.public_key = Some(SerializablePublicKey::new(tag, b"{}".to_vec()));
        let err = Decoder::<SerializableCertificate, Certificate>::decode(&record).unwrap_err();
        assert!(matches!(
            err.key_error(),
            Some(utsushi_keys::Error::UnsupportedKeyType(t)) if t == tag
        ));
    }

    #[test]
    fn test_unknown_curve_fails_decode() {
        let mut record: SerializableCertificate = certificate("a", Some(ec_key())).encode().unwrap();
        let payload = br#"{"curve":{"name":"P-999"},"x":"1","y":"2"}"#.to_vec();
        record.public_key = Some(SerializablePublicKey::new("ecdsa", payload));
        let err = Decoder::<SerializableCertificate, Certificate>::decode(&record).unwrap_err();
        assert!(matches!(
            err.key_error(),
            Some(utsushi_keys::Error::UnknownCurve(name)) if name == "P-999"
        ));
    }

    #[test]
    fn test_sequence_absence_and_emptiness() {
        assert_eq!(encode_sequence(None).unwrap(), None);
        assert_eq!(decode_sequence(None).unwrap(), None);

        let empty = CertificateChain::empty();
        let encoded = encode_sequence(Some(&empty)).unwrap();
        assert_eq!(encoded, Some(vec![]));
        let decoded = decode_sequence(encoded.as_deref()).unwrap();
        assert_eq!(decoded, Some(CertificateChain::empty()));
    }

    #[test]
    fn test_sequence_preserves_order() {
        let chain = CertificateChain::new(vec![
            certificate("leaf.example.com", Some(ec_key())),
            certificate("intermediate", Some(rsa_key())),
            certificate("root", None),
        ]);
        let encoded = encode_sequence(Some(&chain)).unwrap().unwrap();
        let subjects: Vec<_> = encoded.iter().map(|c| c.subject.common_name.as_str()).collect();
        assert_eq!(subjects, vec!["leaf.example.com", "intermediate", "root"]);

        let decoded = decode_sequence(Some(&encoded)).unwrap();
        assert_eq!(decoded, Some(chain));
    }

    #[test]
    fn test_chains_of_lengths_three_and_one() {
        let chains = vec![
            CertificateChain::new(vec![
                certificate("leaf", Some(ec_key())),
                certificate("intermediate", Some(rsa_key())),
                certificate("root", Some(rsa_key())),
            ]),
            CertificateChain::from(certificate("self-signed", Some(ec_key()))),
        ];
        let encoded = encode_chains(Some(&chains)).unwrap().unwrap();
        let lengths: Vec<_> = encoded.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![3, 1]);

        let decoded = decode_chains(Some(&encoded)).unwrap().unwrap();
        assert_eq!(decoded, chains);
        assert_eq!(decoded[1].end_entity().unwrap().public_key, Some(ec_key()));
    }

    #[test]
    fn test_chains_fail_fast() {
        let chains = vec![
            CertificateChain::from(certificate("ok", Some(rsa_key()))),
            CertificateChain::from(certificate(
                "bad",
                Some(PublicKey::Other {
                    algorithm: "GOST".into(),
                    key: vec![],
                }),
            )),
        ];
        assert!(encode_chains(Some(&chains)).is_err());
        assert_eq!(encode_chains(None).unwrap(), None);
        assert_eq!(encode_chains(Some(&[])).unwrap(), Some(vec![]));
    }
}
