//! ECDSA public keys over NIST named curves.
//!
//! A curve is a named parameter set, not data: the wire form carries the
//! curve's name and the decoder maps it back through the fixed table
//! below. Supporting another curve means adding a row here; arbitrary
//! explicit curve parameters are never accepted.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::public_key::KeyAlgorithm;

/// Named curves an [`EcdsaPublicKey`] can live on.
///
/// [RFC 5480 Section 2.1.1.1](https://datatracker.ietf.org/doc/html/rfc5480#section-2.1.1.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedCurve {
    /// secp256r1 (prime256v1)
    P256,
    /// secp384r1
    P384,
    /// secp521r1
    P521,
}

/// Constant parameters of a named curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    pub curve: NamedCurve,
    /// NIST name, as written on the wire
    pub name: &'static str,
    /// Dotted-decimal OID of the curve
    pub oid: &'static str,
    /// Size of the underlying field in bits
    pub bit_size: u32,
}

static NAMED_CURVES: [CurveParams; 3] = [
    CurveParams {
        curve: NamedCurve::P256,
        name: "P-256",
        oid: NamedCurve::OID_SECP256R1,
        bit_size: 256,
    },
    CurveParams {
        curve: NamedCurve::P384,
        name: "P-384",
        oid: NamedCurve::OID_SECP384R1,
        bit_size: 384,
    },
    CurveParams {
        curve: NamedCurve::P521,
        name: "P-521",
        oid: NamedCurve::OID_SECP521R1,
        bit_size: 521,
    },
];

impl NamedCurve {
    pub const OID_SECP256R1: &'static str = "1.2.840.10045.3.1.7";
    pub const OID_SECP384R1: &'static str = "1.3.132.0.34";
    pub const OID_SECP521R1: &'static str = "1.3.132.0.35";

    /// All supported curves, in table order.
    pub fn all() -> impl Iterator<Item = NamedCurve> {
        NAMED_CURVES.iter().map(|params| params.curve)
    }

    pub fn params(&self) -> &'static CurveParams {
        match self {
            NamedCurve::P256 => &NAMED_CURVES[0],
            NamedCurve::P384 => &NAMED_CURVES[1],
            NamedCurve::P521 => &NAMED_CURVES[2],
        }
    }

    /// Looks a curve up by its NIST name (`"P-256"`, `"P-384"`, `"P-521"`).
    ///
    /// The match is exact: `"p-256"` or `"secp256r1"` are unknown curves.
    pub fn from_name(name: &str) -> Result<Self> {
        NAMED_CURVES
            .iter()
            .find(|params| params.name == name)
            .map(|params| params.curve)
            .ok_or_else(|| Error::UnknownCurve(name.to_string()))
    }

    /// Looks a curve up by its dotted-decimal OID.
    pub fn from_oid(oid: &str) -> Result<Self> {
        NAMED_CURVES
            .iter()
            .find(|params| params.oid == oid)
            .map(|params| params.curve)
            .ok_or_else(|| Error::UnknownCurve(oid.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.params().name
    }

    pub fn oid_str(&self) -> &'static str {
        self.params().oid
    }

    pub fn bit_size(&self) -> u32 {
        self.params().bit_size
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedCurve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// An ECDSA public key: a point `(x, y)` on a named curve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EcdsaPublicKey {
    curve: NamedCurve,
    x: BigUint,
    y: BigUint,
}

impl EcdsaPublicKey {
    /// Builds a key, checking that both coordinates fit in the curve's
    /// field size.
    pub fn new(curve: NamedCurve, x: BigUint, y: BigUint) -> Result<Self> {
        let bit_size = u64::from(curve.bit_size());
        for (axis, value) in [("x", &x), ("y", &y)] {
            if value.bits() > bit_size {
                return Err(Error::MalformedKeyPayload {
                    algorithm: KeyAlgorithm::Ecdsa,
                    reason: format!(
                        "{} coordinate is {} bits wide, {} allows at most {}",
                        axis,
                        value.bits(),
                        curve,
                        bit_size
                    ),
                });
            }
        }
        Ok(Self { curve, x, y })
    }

    pub fn curve(&self) -> NamedCurve {
        self.curve
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Field size of the curve in bits.
    pub fn key_size(&self) -> u32 {
        self.curve.bit_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("P-256", NamedCurve::P256, "1.2.840.10045.3.1.7", 256)]
    #[case("P-384", NamedCurve::P384, "1.3.132.0.34", 384)]
    #[case("P-521", NamedCurve::P521, "1.3.132.0.35", 521)]
    fn test_curve_table(
        #[case] name: &str,
        #[case] curve: NamedCurve,
        #[case] oid: &str,
        #[case] bit_size: u32,
    ) {
        assert_eq!(NamedCurve::from_name(name).unwrap(), curve);
        assert_eq!(NamedCurve::from_oid(oid).unwrap(), curve);
        assert_eq!(curve.name(), name);
        assert_eq!(curve.oid_str(), oid);
        assert_eq!(curve.bit_size(), bit_size);
        assert_eq!(curve.to_string(), name);
        assert_eq!(curve.params().curve, curve);
    }

    #[rstest]
    #[case("P-999")]
    #[case("P-224")]
    #[case("p-256")]
    #[case("secp256r1")]
    #[case("")]
    fn test_unknown_curve_name(#[case] name: &str) {
        let err = name.parse::<NamedCurve>().unwrap_err();
        assert!(matches!(err, Error::UnknownCurve(ref n) if n == name));
    }

    #[test]
    fn test_all_curves() {
        let curves: Vec<_> = NamedCurve::all().collect();
        assert_eq!(
            curves,
            vec![NamedCurve::P256, NamedCurve::P384, NamedCurve::P521]
        );
    }

    #[rstest]
    #[case(NamedCurve::P256, 256, true)]
    #[case(NamedCurve::P256, 257, false)]
    #[case(NamedCurve::P521, 521, true)]
    #[case(NamedCurve::P521, 522, false)]
    fn test_coordinate_width(
        #[case] curve: NamedCurve,
        #[case] bits: u32,
        #[case] valid: bool,
    ) {
        let wide = (BigUint::from(1u8) << bits) - BigUint::from(1u8);
        let result = EcdsaPublicKey::new(curve, wide, BigUint::from(2u8));
        assert_eq!(result.is_ok(), valid);
        if !valid {
            assert!(matches!(
                result,
                Err(Error::MalformedKeyPayload {
                    algorithm: KeyAlgorithm::Ecdsa,
                    ..
                })
            ));
        }
    }
}
