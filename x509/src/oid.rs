//! Object identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// An OBJECT IDENTIFIER, written on the wire in dotted-decimal form
/// (`"2.5.29.19"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectIdentifier {
    arcs: Vec<u64>,
}

impl ObjectIdentifier {
    /// Builds an OID from its arcs. At least two arcs are required and the
    /// first must be 0, 1 or 2.
    pub fn new(arcs: &[u64]) -> Result<Self> {
        match arcs {
            [first, _, ..] if *first <= 2 => Ok(Self {
                arcs: arcs.to_vec(),
            }),
            [_, _, ..] => Err(Error::InvalidObjectIdentifier(format!(
                "first arc must be 0, 1 or 2, got {}",
                arcs[0]
            ))),
            _ => Err(Error::InvalidObjectIdentifier(
                "at least two arcs are required".to_string(),
            )),
        }
    }

    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arcs = self.arcs.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{}", first)?;
        }
        for arc in arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidObjectIdentifier("empty string".to_string()));
        }
        let arcs = s
            .split('.')
            .map(|arc| {
                arc.parse::<u64>().map_err(|_| {
                    Error::InvalidObjectIdentifier(format!("invalid arc {:?} in {:?}", arc, s))
                })
            })
            .collect::<Result<Vec<u64>>>()?;
        Self::new(&arcs)
    }
}

impl Serialize for ObjectIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
