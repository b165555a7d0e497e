//! Long-line highlighting configuration
//!
//! `LongLinesConfig` is the process-wide setting shared by every view. It is
//! passed to the highlighter explicitly and only changes through the global
//! toggle or an external assignment (`set_config` / `set_margin`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default width of the warning band, in display columns
pub const DEFAULT_MARGIN: usize = 10;

/// Global configuration for long-line highlighting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LongLinesConfig {
    /// Whether long-line highlighting is enabled globally
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Number of display columns past the width limit highlighted as a warning
    /// before escalating to an error
    #[serde(default = "default_margin")]
    pub margin: usize,

    /// Log every refresh decision at debug level
    #[serde(default)]
    pub debug: bool,
}

fn default_true() -> bool {
    true
}

fn default_margin() -> usize {
    DEFAULT_MARGIN
}

impl Default for LongLinesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            margin: DEFAULT_MARGIN,
            debug: false,
        }
    }
}

impl LongLinesConfig {
    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
