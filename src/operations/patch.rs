//! Forwarding of the `Origin` header on the default cache behavior

use crate::cli::Args;
use crate::document::{
    DEFAULT_CACHE_BEHAVIOR_KEY, DISTRIBUTION_CONFIG_KEY, DistributionDocument,
    FORWARDED_VALUES_KEY, ForwardedHeaders, HEADERS_KEY,
};
use crate::error::PatchError;
use crate::operations::output::{OutputFormat, render_config, write_text};
use crate::system::System;
use anyhow::Result;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Replace `DefaultCacheBehavior.ForwardedValues.Headers` with a list that
/// forwards only `Origin`
///
/// The previous header list is discarded, not merged. `CacheBehaviors` and
/// every other key of the config are left as they are.
///
/// # Errors
///
/// Returns a [`PatchError::Schema`] if `DefaultCacheBehavior` or its
/// `ForwardedValues` is missing or is not an object.
pub fn forward_origin_header(config: &mut Map<String, Value>) -> Result<()> {
    let forwarded_values =
        object_at_mut(config, &[DEFAULT_CACHE_BEHAVIOR_KEY, FORWARDED_VALUES_KEY])?;

    let previous = forwarded_values.insert(
        HEADERS_KEY.to_owned(),
        ForwardedHeaders::origin_only().to_value(),
    );
    match previous {
        Some(headers) => debug!("Replaced forwarded headers {}", headers),
        None => debug!("Added forwarded headers to default cache behavior"),
    }

    Ok(())
}

/// Walk nested objects below `DistributionConfig`
fn object_at_mut<'doc>(
    root: &'doc mut Map<String, Value>,
    keys: &[&str],
) -> Result<&'doc mut Map<String, Value>> {
    let mut current = root;
    let mut walked = DISTRIBUTION_CONFIG_KEY.to_owned();

    for key in keys {
        walked.push('.');
        walked.push_str(key);

        current = match current.get_mut(*key) {
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(PatchError::schema(format!(
                    "{walked} must be an object, found {}",
                    json_type(other)
                ))
                .into());
            }
            None => {
                return Err(PatchError::schema(format!("Missing key: {walked}")).into());
            }
        };
    }

    Ok(current)
}

const fn json_type(value: &Value) -> &'static str {
    match *value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coordinates the read-modify-write of a distribution config
#[non_exhaustive]
#[expect(clippy::module_name_repetitions, reason = "PatchOperation")]
pub struct PatchOperation<'src> {
    input: String,
    output: String,
    format: OutputFormat,
    etag_file: Option<String>,
    dry_run: bool,
    system: &'src dyn System,
}

impl<'src> PatchOperation<'src> {
    /// Patch `input` into `output` as compact JSON
    #[must_use]
    #[inline]
    pub fn new(system: &'src dyn System, input: &str, output: &str) -> Self {
        PatchOperation {
            input: input.to_owned(),
            output: output.to_owned(),
            format: OutputFormat::Compact,
            etag_file: None,
            dry_run: false,
            system,
        }
    }

    /// Create a patch operation from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the output format is not recognised
    #[inline]
    pub fn from_args(args: &Args, system: &'src dyn System) -> Result<Self> {
        let format = args
            .format
            .parse::<OutputFormat>()
            .map_err(anyhow::Error::msg)?;

        Ok(Self::new(system, &args.input, &args.output)
            .with_format(format)
            .with_etag_file(args.etag_file.clone())
            .with_dry_run(args.dry_run))
    }

    /// Set the layout of the written config
    #[must_use]
    #[inline]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Also write the bare ETag to this file
    #[must_use]
    #[inline]
    pub fn with_etag_file(mut self, etag_file: Option<String>) -> Self {
        self.etag_file = etag_file;
        self
    }

    /// Run every check but write nothing
    #[must_use]
    #[inline]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Execute the patch and return the document's ETag
    ///
    /// Nothing is written unless loading, checking and patching all
    /// succeeded, so a failed run leaves no output file behind.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input cannot be read or the output cannot be written
    /// - The input is not valid JSON
    /// - A key the patch needs is missing
    #[inline]
    pub fn execute(&self) -> Result<String> {
        info!("Patching distribution config from {}", self.input);

        let DistributionDocument {
            etag,
            mut distribution_config,
        } = DistributionDocument::load_from_file(self.system, &self.input)?;

        forward_origin_header(&mut distribution_config)?;
        let rendered = render_config(&distribution_config, self.format)?;

        if self.dry_run {
            self.preview(&rendered);
            return Ok(etag);
        }

        write_text(self.system, &self.output, &rendered)?;
        info!(
            "\u{2713} Wrote patched config to {} ({} bytes)",
            self.output,
            rendered.len()
        );

        if let Some(etag_file) = self.etag_file.as_ref() {
            write_text(self.system, etag_file, &etag)?;
            info!("\u{2713} Wrote ETag to {}", etag_file);
        }

        Ok(etag)
    }

    /// Describe the writes a real run would perform
    fn preview(&self, rendered: &str) {
        info!("Dry run preview - no files will be modified:");
        info!(
            "  Would write {} bytes of {:?} JSON to {}",
            rendered.len(),
            self.format,
            self.output
        );
        if let Some(etag_file) = self.etag_file.as_ref() {
            info!("  Would write ETag to {}", etag_file);
        }
        debug!("Patched config: {}", rendered);
    }
}

/// Patch `input` into `output` with default settings and return the ETag
///
/// # Errors
///
/// See [`PatchOperation::execute`].
#[inline]
pub fn patch(system: &dyn System, input: &str, output: &str) -> Result<String> {
    PatchOperation::new(system, input, output).execute()
}
