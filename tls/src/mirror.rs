//! Serializable mirror of TLS connection state.

use serde::{Deserialize, Serialize};
use tracing::trace;
use utsushi::decoder::{DecodableFrom, Decoder};
use utsushi::encoder::{EncodableTo, Encoder};
use utsushi_x509::{
    SerializableCertificate, decode_chains, decode_sequence, encode_chains, encode_sequence,
};

use crate::error::{Error, Result};
use crate::state::ConnectionState;

/// Wire twin of [`ConnectionState`].
///
/// `peer_certificates` and `verified_chains` are `null` when absent and
/// `[]` when present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableTlsState {
    pub version: u16,
    pub handshake_complete: bool,
    pub did_resume: bool,
    pub cipher_suite: u16,
    pub negotiated_protocol: String,
    pub negotiated_protocol_is_mutual: bool,
    pub server_name: String,
    pub peer_certificates: Option<Vec<SerializableCertificate>>,
    pub verified_chains: Option<Vec<Vec<SerializableCertificate>>>,
    #[serde(with = "utsushi::fields::b64_seq")]
    pub signed_certificate_timestamps: Vec<Vec<u8>>,
    #[serde(with = "utsushi::fields::b64")]
    pub ocsp_response: Vec<u8>,
    #[serde(with = "utsushi::fields::b64")]
    pub tls_unique: Vec<u8>,
}

impl EncodableTo<ConnectionState> for SerializableTlsState {}

impl Encoder<ConnectionState, SerializableTlsState> for ConnectionState {
    type Error = Error;

    fn encode(&self) -> Result<SerializableTlsState> {
        let peer_certificates = encode_sequence(self.peer_certificates.as_ref())?;
        let verified_chains = encode_chains(self.verified_chains.as_deref())?;

        trace!(
            version = %self.version_name(),
            cipher_suite = self.cipher_suite,
            server_name = %self.server_name,
            peer_certificates = peer_certificates.as_ref().map(Vec::len),
            verified_chains = verified_chains.as_ref().map(Vec::len),
            "tls state encoded"
        );

        Ok(SerializableTlsState {
            version: self.version,
            handshake_complete: self.handshake_complete,
            did_resume: self.did_resume,
            cipher_suite: self.cipher_suite,
            negotiated_protocol: self.negotiated_protocol.clone(),
            negotiated_protocol_is_mutual: self.negotiated_protocol_is_mutual,
            server_name: self.server_name.clone(),
            peer_certificates,
            verified_chains,
            signed_certificate_timestamps: self.signed_certificate_timestamps.clone(),
            ocsp_response: self.ocsp_response.clone(),
            tls_unique: self.tls_unique.clone(),
        })
    }
}

impl DecodableFrom<SerializableTlsState> for ConnectionState {}

impl Decoder<SerializableTlsState, ConnectionState> for SerializableTlsState {
    type Error = Error;

    fn decode(&self) -> Result<ConnectionState> {
        let state = ConnectionState {
            version: self.version,
            handshake_complete: self.handshake_complete,
            did_resume: self.did_resume,
            cipher_suite: self.cipher_suite,
            negotiated_protocol: self.negotiated_protocol.clone(),
            negotiated_protocol_is_mutual: self.negotiated_protocol_is_mutual,
            server_name: self.server_name.clone(),
            peer_certificates: decode_sequence(self.peer_certificates.as_deref())?,
            verified_chains: decode_chains(self.verified_chains.as_deref())?,
            signed_certificate_timestamps: self.signed_certificate_timestamps.clone(),
            ocsp_response: self.ocsp_response.clone(),
            tls_unique: self.tls_unique.clone(),
        };
        trace!(version = %state.version_name(), server_name = %state.server_name, "tls state decoded");
        Ok(state)
    }
}

/// Encodes optional connection state; `None` (a plaintext response) stays
/// `None`.
pub fn encode_state(state: Option<&ConnectionState>) -> Result<Option<SerializableTlsState>> {
    state.map(|state| state.encode()).transpose()
}

/// Inverse of [`encode_state`].
pub fn decode_state(record: Option<&SerializableTlsState>) -> Result<Option<ConnectionState>> {
    record.map(|record| record.decode()).transpose()
}
