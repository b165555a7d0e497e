//! Partial configuration layers
//!
//! Every field is optional so a layer only carries the settings it actually
//! sets. Layers are merged with the higher-precedence layer winning, then
//! resolved onto `LongLinesConfig::default()`:
//!
//! ```ignore
//! let config = cli_layer.merge(file_layer).resolve();
//! ```

use crate::config::LongLinesConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PartialLongLinesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

impl PartialLongLinesConfig {
    /// Combine two layers; values set in `self` take precedence over `lower`.
    pub fn merge(self, lower: PartialLongLinesConfig) -> Self {
        Self {
            enabled: self.enabled.or(lower.enabled),
            margin: self.margin.or(lower.margin),
            debug: self.debug.or(lower.debug),
        }
    }

    /// Apply this layer on top of an existing config.
    pub fn merge_onto(&self, base: &LongLinesConfig) -> LongLinesConfig {
        LongLinesConfig {
            enabled: self.enabled.unwrap_or(base.enabled),
            margin: self.margin.unwrap_or(base.margin),
            debug: self.debug.unwrap_or(base.debug),
        }
    }

    /// Resolve onto the built-in defaults.
    pub fn resolve(&self) -> LongLinesConfig {
        self.merge_onto(&LongLinesConfig::default())
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.margin.is_none() && self.debug.is_none()
    }
}

impl From<&LongLinesConfig> for PartialLongLinesConfig {
    fn from(config: &LongLinesConfig) -> Self {
        Self {
            enabled: Some(config.enabled),
            margin: Some(config.margin),
            debug: Some(config.debug),
        }
    }
}
