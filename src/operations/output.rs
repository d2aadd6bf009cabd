//! Serialization and writing of the patched distribution config

use core::str::FromStr;

use crate::error::PatchError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// JSON layout of the written config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Single line, no insignificant whitespace
    #[default]
    Compact,
    /// Two-space indented
    Pretty,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(format!("Invalid format: {s}. Use 'compact' or 'pretty'")),
        }
    }
}

/// Serialize a distribution config in the requested format
///
/// # Errors
///
/// Returns an error if the config cannot be serialized
#[inline]
pub fn render_config(config: &Map<String, Value>, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Compact => serde_json::to_string(config),
        OutputFormat::Pretty => serde_json::to_string_pretty(config),
    };
    rendered.context("Failed to serialize distribution config")
}

/// Serialize a distribution config and write it to `path`
///
/// # Errors
///
/// Returns an error if:
/// - The config cannot be serialized
/// - The file cannot be written ([`PatchError::FileAccess`])
#[inline]
pub fn write_config(
    system: &dyn System,
    path: &str,
    config: &Map<String, Value>,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render_config(config, format)?;
    write_text(system, path, &rendered)?;
    debug!("Wrote {} bytes to {}", rendered.len(), path);
    Ok(())
}

/// Write a string to `path`, reporting failures as file access errors
pub(crate) fn write_text(system: &dyn System, path: &str, contents: &str) -> Result<()> {
    system
        .write(Path::new(path), contents.as_bytes())
        .map_err(|e| PatchError::file_access(format!("Failed to write {path}: {e}")).into())
}
