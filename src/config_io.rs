//! Config file loading (runtime-only)
//!
//! The long-lines settings live in a small JSON file next to the rest of the
//! Fresh configuration (`<config dir>/fresh/long_lines.json`). A missing file
//! is not an error: it is an empty layer.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::partial_config::PartialLongLinesConfig;

pub const CONFIG_FILE_NAME: &str = "long_lines.json";

/// Location of the user config file, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fresh").join(CONFIG_FILE_NAME))
}

/// Load a config layer from a JSON file
pub fn load_layer_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<PartialLongLinesConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let layer: PartialLongLinesConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    tracing::debug!("Loaded long-lines config from {}: {:?}", path.display(), layer);
    Ok(layer)
}

/// Load the layer at `path`, treating a missing file as an empty layer
pub fn load_layer_if_exists<P: AsRef<Path>>(path: P) -> anyhow::Result<PartialLongLinesConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No long-lines config at {}", path.display());
        return Ok(PartialLongLinesConfig::default());
    }
    load_layer_from_file(path)
}

/// Load the user config layer from the default location
pub fn load_user_layer() -> anyhow::Result<PartialLongLinesConfig> {
    match user_config_path() {
        Some(path) => load_layer_if_exists(path),
        None => Ok(PartialLongLinesConfig::default()),
    }
}

/// Write a config layer as pretty JSON, creating parent directories
pub fn save_layer<P: AsRef<Path>>(path: P, layer: &PartialLongLinesConfig) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(layer).context("Failed to serialize config")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}
