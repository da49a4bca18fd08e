//! Native TLS connection state.

use utsushi_x509::CertificateChain;

/// State of an established TLS connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
    /// Negotiated protocol version, one of the `VERSION_*` constants
    pub version: u16,
    pub handshake_complete: bool,
    pub did_resume: bool,
    /// IANA cipher suite identifier
    pub cipher_suite: u16,
    /// ALPN protocol, empty when none was negotiated
    pub negotiated_protocol: String,
    pub negotiated_protocol_is_mutual: bool,
    /// SNI sent by the client
    pub server_name: String,
    /// Certificates sent by the peer, leaf first. `None` when the peer
    /// sent nothing (for example on resumption).
    pub peer_certificates: Option<CertificateChain>,
    /// Chains built during verification. `None` when verification was not
    /// performed.
    pub verified_chains: Option<Vec<CertificateChain>>,
    pub signed_certificate_timestamps: Vec<Vec<u8>>,
    pub ocsp_response: Vec<u8>,
    /// RFC 5929 tls-unique channel binding
    pub tls_unique: Vec<u8>,
}

impl ConnectionState {
    pub const VERSION_SSL30: u16 = 0x0300;
    pub const VERSION_TLS10: u16 = 0x0301;
    pub const VERSION_TLS11: u16 = 0x0302;
    pub const VERSION_TLS12: u16 = 0x0303;
    pub const VERSION_TLS13: u16 = 0x0304;

    /// Human readable protocol version.
    pub fn version_name(&self) -> String {
        match self.version {
            Self::VERSION_SSL30 => "SSLv3".to_string(),
            Self::VERSION_TLS10 => "TLS 1.0".to_string(),
            Self::VERSION_TLS11 => "TLS 1.1".to_string(),
            Self::VERSION_TLS12 => "TLS 1.2".to_string(),
            Self::VERSION_TLS13 => "TLS 1.3".to_string(),
            other => format!("0x{other:04X}"),
        }
    }

    /// The peer's leaf certificate, if it sent one.
    pub fn peer_certificate(&self) -> Option<&utsushi_x509::Certificate> {
        self.peer_certificates.as_ref()?.end_entity()
    }

    pub fn is_verified(&self) -> bool {
        self.verified_chains
            .as_ref()
            .is_some_and(|chains| !chains.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utsushi_x509::{Certificate, Name};

    #[rstest]
    #[case(ConnectionState::VERSION_SSL30, "SSLv3")]
    #[case(ConnectionState::VERSION_TLS10, "TLS 1.0")]
    #[case(ConnectionState::VERSION_TLS12, "TLS 1.2")]
    #[case(ConnectionState::VERSION_TLS13, "TLS 1.3")]
    #[case(0x7f1c, "0x7F1C")]
    fn test_version_name(#[case] version: u16, #[case] expected: &str) {
        let state = ConnectionState {
            version,
            ..Default::default()
        };
        assert_eq!(state.version_name(), expected);
    }

    #[test]
    fn test_peer_certificate_and_verification() {
        let mut state = ConnectionState::default();
        assert!(state.peer_certificate().is_none());
        assert!(!state.is_verified());

        let leaf = Certificate {
            subject: Name::with_common_name("example.com"),
            ..Default::default()
        };
        state.peer_certificates = Some(CertificateChain::from(leaf.clone()));
        state.verified_chains = Some(vec![]);
        assert_eq!(state.peer_certificate(), Some(&leaf));
        assert!(!state.is_verified());

        state.verified_chains = Some(vec![CertificateChain::from(leaf)]);
        assert!(state.is_verified());
    }
}
