//! JSON Schema check for the keys the patch relies on

use crate::error::PatchError;
use anyhow::{Result, anyhow};
use jsonschema::Validator;
use serde_json::Value;

/// Get the embedded JSON schema for distribution config documents
pub fn get_schema() -> Result<Validator> {
    let schema_str = include_str!("../../schema/distribution_document.json");
    let schema: Value = serde_json::from_str(schema_str)
        .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {e}"))?;

    jsonschema::draft7::new(&schema).map_err(|e| anyhow!("Failed to compile JSON schema: {e}"))
}

/// Validate a parsed document against the schema
///
/// # Errors
///
/// Returns a [`PatchError::Schema`] listing every violation, each prefixed
/// with the dotted path of the offending value.
pub fn validate_against_schema(document: &Value) -> Result<()> {
    let schema = get_schema()?;

    let error_messages: Vec<String> = schema
        .iter_errors(document)
        .map(|e| format!("  - {}: {}", dotted_path(&e.instance_path.to_string()), e))
        .collect();

    if !error_messages.is_empty() {
        return Err(PatchError::schema(format!(
            "Distribution config document is missing required keys:\n{}",
            error_messages.join("\n")
        ))
        .into());
    }

    Ok(())
}

/// Render a JSON pointer (`/DistributionConfig/DefaultCacheBehavior`) as a
/// dotted key path, `(document)` for the root
fn dotted_path(pointer: &str) -> String {
    let trimmed = pointer.trim_start_matches('/');
    if trimmed.is_empty() {
        return "(document)".to_owned();
    }
    trimmed
        .split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}
