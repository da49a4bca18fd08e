//! Outer wire encodings for frozen records.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Self-describing encoding used to persist a frozen record.
///
/// Both encodings carry bytes as base64 strings and absent values as
/// `null`, so a record written in one can be re-encoded in the other
/// without loss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    #[default]
    Json,
    Yaml,
}

impl WireFormat {
    /// Returns the lowercase name of the format.
    pub const fn name(&self) -> &'static str {
        match self {
            WireFormat::Json => "json",
            WireFormat::Yaml => "yaml",
        }
    }

    /// Serializes `value` into this format. `pretty` only affects JSON;
    /// YAML is always block-formatted.
    pub fn serialize<T: Serialize>(&self, value: &T, pretty: bool) -> Result<Vec<u8>> {
        match self {
            WireFormat::Json if pretty => Ok(serde_json::to_vec_pretty(value)?),
            WireFormat::Json => Ok(serde_json::to_vec(value)?),
            WireFormat::Yaml => Ok(serde_yml::to_string(value)?.into_bytes()),
        }
    }

    /// Deserializes a value previously written in this format.
    pub fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        match self {
            WireFormat::Json => Ok(serde_json::from_slice(bytes)?),
            WireFormat::Yaml => Ok(serde_yml::from_slice(bytes)?),
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WireFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(WireFormat::Json),
            "yaml" | "yml" => Ok(WireFormat::Yaml),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}
