//! Encoder trait for native-to-wire conversions.

/// Converts `self` (a native value of type `T`) into its wire record `E`.
///
/// Encoding copies: the record owns every byte it carries and holds no
/// reference back to the native value.
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    ///
    /// # Errors
    ///
    /// Returns an error when part of the value has no wire representation,
    /// for example a public key of an unsupported algorithm.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait stating that `E` is the wire form of `T`.
pub trait EncodableTo<T> {}
