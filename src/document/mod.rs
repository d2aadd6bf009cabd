//! Distribution document module
//!
//! Models the JSON returned by `aws cloudfront get-distribution-config`,
//! loads it from disk and checks the keys the patch relies on.

pub mod loader;
pub mod schema;

use crate::system::System;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level key holding the distribution settings
pub const DISTRIBUTION_CONFIG_KEY: &str = "DistributionConfig";
/// Key of the default cache behavior inside `DistributionConfig`
pub const DEFAULT_CACHE_BEHAVIOR_KEY: &str = "DefaultCacheBehavior";
/// Key of the forwarded values inside a cache behavior
pub const FORWARDED_VALUES_KEY: &str = "ForwardedValues";
/// Key of the forwarded header list inside `ForwardedValues`
pub const HEADERS_KEY: &str = "Headers";

/// Parsed distribution config document
///
/// Only the two keys the patch needs are kept. `distribution_config` stays
/// an untyped JSON object so every field the patch does not touch is
/// written back exactly as read, key order included.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistributionDocument {
    /// Opaque version token passed to `update-distribution --if-match`
    #[serde(rename = "ETag")]
    pub etag: String,

    /// Mutable configuration body of the distribution
    #[serde(rename = "DistributionConfig")]
    pub distribution_config: Map<String, Value>,
}

impl DistributionDocument {
    /// Load a document from file
    pub fn load_from_file(system: &dyn System, path: &str) -> anyhow::Result<Self> {
        loader::load_document(system, path)
    }
}

/// Header names a cache behavior forwards to the origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForwardedHeaders {
    pub quantity: u32,
    pub items: Vec<String>,
}

impl ForwardedHeaders {
    /// Forward exactly the `Origin` header
    #[must_use]
    pub fn origin_only() -> Self {
        Self::from_names(["Origin"])
    }

    /// Build a header list whose `Quantity` matches its `Items`
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = names.into_iter().map(Into::into).collect();
        Self {
            quantity: u32::try_from(items.len()).unwrap_or(u32::MAX),
            items,
        }
    }

    /// Convert to the JSON value stored under `Headers`
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "Quantity": self.quantity,
            "Items": self.items,
        })
    }
}
