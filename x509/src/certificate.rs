//! Native X.509 certificate.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use ipnet::IpNet;
use num_bigint::BigInt;
use url::Url;
use utsushi_keys::PublicKey;

use crate::algorithm::{PublicKeyAlgorithm, SignatureAlgorithm};
use crate::extension::{ExtKeyUsage, Extension, KeyUsage};
use crate::name::Name;
use crate::oid::ObjectIdentifier;

/// An X.509 certificate as handed out by a TLS stack.
///
/// `raw` is the complete DER encoding and the `raw_*` fields are slices of
/// it. Every other field is the parsed view of that DER. Nothing in this
/// crate re-parses `raw`; the structured fields are carried as given.
///
/// ```text
/// Certificate  ::=  SEQUENCE  {
///      tbsCertificate       TBSCertificate,
///      signatureAlgorithm   AlgorithmIdentifier,
///      signatureValue       BIT STRING  }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Certificate {
    pub raw: Vec<u8>,
    pub raw_tbs_certificate: Vec<u8>,
    pub raw_subject_public_key_info: Vec<u8>,
    pub raw_subject: Vec<u8>,
    pub raw_issuer: Vec<u8>,

    pub signature: Vec<u8>,
    pub signature_algorithm: SignatureAlgorithm,

    pub public_key_algorithm: PublicKeyAlgorithm,
    /// `None` when the TLS stack did not expose the key.
    pub public_key: Option<PublicKey>,

    pub version: i32,
    pub serial_number: BigInt,
    pub issuer: Name,
    pub subject: Name,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub key_usage: KeyUsage,

    pub extensions: Vec<Extension>,
    /// Extensions to add when the certificate is re-marshalled
    pub extra_extensions: Vec<Extension>,
    pub unhandled_critical_extensions: Vec<ObjectIdentifier>,

    pub ext_key_usage: Vec<ExtKeyUsage>,
    pub unknown_ext_key_usage: Vec<ObjectIdentifier>,

    pub basic_constraints_valid: bool,
    pub is_ca: bool,
    /// -1 means unset; 0 together with `max_path_len_zero` means an
    /// explicit zero.
    pub max_path_len: i32,
    pub max_path_len_zero: bool,

    pub subject_key_id: Vec<u8>,
    pub authority_key_id: Vec<u8>,

    pub ocsp_server: Vec<String>,
    pub issuing_certificate_url: Vec<String>,

    // Subject alternative names
    pub dns_names: Vec<String>,
    pub email_addresses: Vec<String>,
    pub ip_addresses: Vec<IpAddr>,
    pub uris: Vec<Url>,

    // Name constraints
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

impl Certificate {
    /// Subject and issuer are byte-identical.
    pub fn is_self_signed(&self) -> bool {
        !self.raw_subject.is_empty() && self.raw_subject == self.raw_issuer
    }

    /// The certificate carries valid basic constraints with `cA` set.
    pub fn is_ca(&self) -> bool {
        self.basic_constraints_valid && self.is_ca
    }

    /// The validity window contains `at`.
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        self.not_before <= at && at <= self.not_after
    }

    pub fn has_public_key(&self) -> bool {
        self.public_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(b"CN=a".to_vec(), b"CN=a".to_vec(), true)]
    #[case(b"CN=a".to_vec(), b"CN=b".to_vec(), false)]
    #[case(vec![], vec![], false)]
    fn test_is_self_signed(
        #[case] subject: Vec<u8>,
        #[case] issuer: Vec<u8>,
        #[case] expected: bool,
    ) {
        let cert = Certificate {
            raw_subject: subject,
            raw_issuer: issuer,
            ..Default::default()
        };
        assert_eq!(cert.is_self_signed(), expected);
    }

    #[rstest]
    #[case(true, true, true)]
    #[case(false, true, false)]
    #[case(true, false, false)]
    fn test_is_ca(#[case] valid: bool, #[case] ca: bool, #[case] expected: bool) {
        let cert = Certificate {
            basic_constraints_valid: valid,
            is_ca: ca,
            ..Default::default()
        };
        assert_eq!(cert.is_ca(), expected);
    }

    #[test]
    fn test_is_valid_at() {
        let cert = Certificate {
            not_before: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            not_after: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            ..Default::default()
        };
        assert!(cert.is_valid_at(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()));
        assert!(!cert.is_valid_at(Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap()));
    }
}
