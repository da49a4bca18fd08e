//! Native HTTP response.

use std::collections::BTreeMap;

use url::Url;
use utsushi_tls::ConnectionState;

use crate::body::Body;

/// Header map. Keys are kept exactly as given; each key maps to every value
/// received for it, in order.
pub type Headers = BTreeMap<String, Vec<String>>;

/// The request that produced a response.
///
/// It is carried on the live value only. Freezing drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub url: Url,
    pub header: Headers,
}

impl Request {
    pub fn new(method: impl Into<String>, url: Url) -> Self {
        Self {
            method: method.into(),
            url,
            header: Headers::new(),
        }
    }
}

/// A received HTTP response.
#[derive(Debug)]
pub struct Response {
    /// Status line text, e.g. `"200 OK"`
    pub status: String,
    pub status_code: u16,
    /// e.g. `"HTTP/1.1"`
    pub proto: String,
    pub proto_major: u8,
    pub proto_minor: u8,
    pub header: Headers,
    pub body: Body,
    /// Declared length; -1 when unknown. The body bytes are authoritative.
    pub content_length: i64,
    pub transfer_encoding: Vec<String>,
    pub close: bool,
    /// The body was transparently decompressed by the client.
    pub uncompressed: bool,
    pub trailer: Headers,
    pub request: Option<Request>,
    /// `None` for plaintext responses.
    pub tls: Option<ConnectionState>,
}

impl Response {
    /// An HTTP/1.1 response with an empty body and unknown length.
    pub fn new(status_code: u16, reason: &str) -> Self {
        Self {
            status: format!("{status_code} {reason}"),
            status_code,
            ..Default::default()
        }
    }

    /// First value of header `name`, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.header
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    pub fn is_tls(&self) -> bool {
        self.tls.is_some()
    }
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: String::new(),
            status_code: 0,
            proto: "HTTP/1.1".to_string(),
            proto_major: 1,
            proto_minor: 1,
            header: Headers::new(),
            body: Body::empty(),
            content_length: -1,
            transfer_encoding: Vec::new(),
            close: false,
            uncompressed: false,
            trailer: Headers::new(),
            request: None,
            tls: None,
        }
    }
}
