//! Distribution config document loading and parsing

use crate::document::DistributionDocument;
use crate::error::PatchError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Load, parse and check a distribution config document
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist, is not a file or cannot be read
///   ([`PatchError::FileAccess`])
/// - The content is not valid JSON ([`PatchError::MalformedDocument`])
/// - `ETag`, `DistributionConfig`, `DistributionConfig.DefaultCacheBehavior`
///   or `DistributionConfig.DefaultCacheBehavior.ForwardedValues` is missing
///   or of the wrong type ([`PatchError::Schema`])
pub fn load_document(system: &dyn System, path: &str) -> Result<DistributionDocument> {
    let path_obj = Path::new(path);

    if !system.exists(path_obj) {
        return Err(PatchError::file_access(format!(
            "Input file not found: {path}\n\
            Fetch it with `aws cloudfront get-distribution-config --id <ID> > {path}` \
            or specify a different path with --input"
        ))
        .into());
    }

    if !system.is_file(path_obj) {
        return Err(PatchError::file_access(format!("Input path is not a file: {path}")).into());
    }

    let content = system.read_to_string(path_obj).map_err(|e| {
        PatchError::file_access(format!("Failed to read input file {path}: {e}"))
    })?;
    debug!("Read {} bytes from {}", content.len(), path);

    let value: Value = serde_json::from_str(&content).map_err(|e| {
        PatchError::malformed(format!("Failed to parse JSON in file {path}: {e}"))
    })?;

    super::schema::validate_against_schema(&value)
        .with_context(|| format!("Invalid distribution config document: {path}"))?;

    let document: DistributionDocument = serde_json::from_value(value).map_err(|e| {
        PatchError::schema(format!("Unexpected document structure in {path}: {e}"))
    })?;
    debug!(
        "Loaded distribution config with {} top-level keys, ETag {}",
        document.distribution_config.len(),
        document.etag
    );

    Ok(document)
}
