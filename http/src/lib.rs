//! Freeze HTTP responses into a cacheable wire form and thaw them back.
//!
//! Freezing drains the response body into memory, reinstalls a replayable
//! copy on the response, and mirrors every field, TLS state included, into
//! a [`SerializableResponse`]. Thawing rebuilds an equivalent [`Response`]
//! whose body reads the captured bytes. The associated request is never
//! mirrored.
//!
//! Freezing holds the whole body in memory twice: the captured bytes and
//! the copy handed back to the caller. [`MirrorConfig::max_body_size`]
//! bounds that cost.
//!
//! ```
//! use std::io::Read;
//! use utsushi_http::{Body, Response, marshal, unmarshal};
//!
//! let mut response = Response::new(200, "OK");
//! response.header.insert("Content-Type".into(), vec!["text/plain".into()]);
//! response.body = Body::from("hello");
//!
//! let wire = marshal(&mut response)?;
//! let mut thawed = unmarshal(&wire)?;
//!
//! let mut body = String::new();
//! thawed.body.read_to_string(&mut body)?;
//! assert_eq!(body, "hello");
//! assert!(thawed.request.is_none());
//!
//! // The original is still readable.
//! let mut original = String::new();
//! response.body.read_to_string(&mut original)?;
//! assert_eq!(original, "hello");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub mod body;
pub mod config;
pub mod error;
pub mod mirror;
pub mod response;

pub use body::Body;
pub use config::MirrorConfig;
pub use error::{Error, Result};
pub use mirror::{Mirror, SerializableResponse, freeze, marshal, thaw, unmarshal};
pub use response::{Headers, Request, Response};
