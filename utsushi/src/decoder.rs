//! Decoder trait for wire-to-native conversions.
//!
//! A wire record decodes into the native value it mirrors. The marker
//! trait [`DecodableFrom`] pins down which pairs are valid, so a
//! certificate record cannot be decoded into, say, a TLS state.
//!
//! ```no_run
//! use utsushi::decoder::{DecodableFrom, Decoder};
//!
//! struct Wire(String);
//! struct Native(u16);
//!
//! #[derive(Debug)]
//! struct ParseError;
//!
//! impl DecodableFrom<Wire> for Native {}
//!
//! impl Decoder<Wire, Native> for Wire {
//!     type Error = ParseError;
//!
//!     fn decode(&self) -> Result<Native, Self::Error> {
//!         self.0.parse().map(Native).map_err(|_| ParseError)
//!     }
//! }
//! ```

/// Converts `self` (a wire record of type `T`) into the native type `D`.
///
/// Decoding never consumes the record: thawing the same record twice
/// yields two independent values.
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error when the record is structurally valid for serde but
    /// does not describe a value of type `D` (an unknown key tag, an
    /// unknown curve, a malformed key payload).
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait stating that `D` can be decoded from `T`.
pub trait DecodableFrom<T> {}
