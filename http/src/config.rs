//! Mirror configuration.

use serde::{Deserialize, Serialize};
use utsushi::WireFormat;

/// Settings for [`Mirror`](crate::Mirror).
///
/// Every field has a default, so the config can be embedded in a host
/// application's config file with only the keys it cares about:
///
/// ```
/// use utsushi::WireFormat;
/// use utsushi_http::MirrorConfig;
///
/// let config: MirrorConfig = serde_json::from_str(r#"{"format":"yaml"}"#)?;
/// assert_eq!(config.format, WireFormat::Yaml);
/// assert_eq!(config.max_body_size, None);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    /// Outer encoding used by marshal and unmarshal
    pub format: WireFormat,
    /// Indent JSON output
    pub pretty: bool,
    /// Largest body freeze will buffer, in bytes. `None` is unbounded.
    pub max_body_size: Option<usize>,
}

impl MirrorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: WireFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_max_body_size(mut self, limit: usize) -> Self {
        self.max_body_size = Some(limit);
        self
    }
}
