//! Freezing and thawing responses.

use serde::{Deserialize, Serialize};
use tracing::debug;
use utsushi::decoder::{DecodableFrom, Decoder};
use utsushi_tls::{SerializableTlsState, decode_state, encode_state};

use crate::body::Body;
use crate::config::MirrorConfig;
use crate::error::{Error, Result};
use crate::response::{Headers, Response};

/// Wire twin of [`Response`].
///
/// `body` holds every byte of the body; `content_length` is only what the
/// server declared. `request` is always `null`. `tls` is `null` for
/// plaintext responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableResponse {
    pub status: String,
    pub status_code: u16,
    pub proto: String,
    pub proto_major: u8,
    pub proto_minor: u8,
    pub header: Headers,
    #[serde(with = "utsushi::fields::b64")]
    pub body: Vec<u8>,
    pub content_length: i64,
    pub transfer_encoding: Vec<String>,
    pub close: bool,
    pub uncompressed: bool,
    pub trailer: Headers,
    #[serde(default)]
    pub request: Option<String>,
    pub tls: Option<SerializableTlsState>,
}

impl SerializableResponse {
    /// Captures `response`, replacing its body with a replayable copy.
    ///
    /// A body larger than `max_body_size` fails with
    /// [`Error::BodyTooLarge`]. Whatever happens, the body of `response`
    /// can still be read from its start afterwards.
    pub fn freeze(response: &mut Response, max_body_size: Option<usize>) -> Result<Self> {
        let body = response.body.capture(max_body_size)?;
        let tls = encode_state(response.tls.as_ref())?;

        Ok(Self {
            status: response.status.clone(),
            status_code: response.status_code,
            proto: response.proto.clone(),
            proto_major: response.proto_major,
            proto_minor: response.proto_minor,
            header: response.header.clone(),
            body,
            content_length: response.content_length,
            transfer_encoding: response.transfer_encoding.clone(),
            close: response.close,
            uncompressed: response.uncompressed,
            trailer: response.trailer.clone(),
            request: None,
            tls,
        })
    }

    /// Like [`Decoder::decode`], but moves the captured body into the
    /// response instead of copying it.
    pub fn into_response(self) -> Result<Response> {
        let tls = decode_state(self.tls.as_ref())?;
        Ok(Response {
            status: self.status,
            status_code: self.status_code,
            proto: self.proto,
            proto_major: self.proto_major,
            proto_minor: self.proto_minor,
            header: self.header,
            body: Body::from(self.body),
            content_length: self.content_length,
            transfer_encoding: self.transfer_encoding,
            close: self.close,
            uncompressed: self.uncompressed,
            trailer: self.trailer,
            request: None,
            tls,
        })
    }
}

impl DecodableFrom<SerializableResponse> for Response {}

impl Decoder<SerializableResponse, Response> for SerializableResponse {
    type Error = Error;

    fn decode(&self) -> Result<Response> {
        self.clone().into_response()
    }
}

/// Freezes and thaws responses according to a [`MirrorConfig`].
#[derive(Debug, Clone, Default)]
pub struct Mirror {
    config: MirrorConfig,
}

impl Mirror {
    pub fn new(config: MirrorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Converts `response` into its wire record. The body of `response` is
    /// replaced by an identical, unread copy.
    pub fn freeze(&self, response: &mut Response) -> Result<SerializableResponse> {
        let record = SerializableResponse::freeze(response, self.config.max_body_size)
            .inspect_err(|e| {
                debug!(status_code = response.status_code, error = %e, "freeze failed")
            })?;
        debug!(
            status_code = record.status_code,
            body_len = record.body.len(),
            tls = record.tls.is_some(),
            "response frozen"
        );
        Ok(record)
    }

    /// Rebuilds a response from its wire record. The result has no request.
    pub fn thaw(&self, record: &SerializableResponse) -> Result<Response> {
        let response = record.decode()?;
        debug!(
            status_code = response.status_code,
            body_len = record.body.len(),
            tls = response.tls.is_some(),
            "response thawed"
        );
        Ok(response)
    }

    /// Freezes `response` and writes it in the configured format.
    pub fn marshal(&self, response: &mut Response) -> Result<Vec<u8>> {
        let record = self.freeze(response)?;
        let bytes = self
            .config
            .format
            .serialize(&record, self.config.pretty)
            .map_err(Error::Serialization)?;
        debug!(format = %self.config.format, len = bytes.len(), "response marshalled");
        Ok(bytes)
    }

    /// Reads a record in the configured format and thaws it.
    pub fn unmarshal(&self, bytes: &[u8]) -> Result<Response> {
        let record: SerializableResponse = self
            .config
            .format
            .deserialize(bytes)
            .map_err(Error::Deserialization)?;
        debug!(format = %self.config.format, len = bytes.len(), "response unmarshalled");

        let body_len = record.body.len();
        let response = record.into_response()?;
        debug!(
            status_code = response.status_code,
            body_len,
            tls = response.tls.is_some(),
            "response thawed"
        );
        Ok(response)
    }
}

/// [`Mirror::freeze`] with the default configuration.
pub fn freeze(response: &mut Response) -> Result<SerializableResponse> {
    Mirror::default().freeze(response)
}

/// [`Mirror::thaw`] with the default configuration.
pub fn thaw(record: &SerializableResponse) -> Result<Response> {
    Mirror::default().thaw(record)
}

/// [`Mirror::marshal`] with the default configuration (compact JSON).
pub fn marshal(response: &mut Response) -> Result<Vec<u8>> {
    Mirror::default().marshal(response)
}

/// [`Mirror::unmarshal`] with the default configuration (JSON).
pub fn unmarshal(bytes: &[u8]) -> Result<Response> {
    Mirror::default().unmarshal(bytes)
}
