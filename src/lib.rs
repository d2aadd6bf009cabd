//! `cfpatch` - A CLI tool that patches a CloudFront distribution config
//!
//! This library reads the document produced by
//! `aws cloudfront get-distribution-config`, makes the default cache
//! behavior forward the `Origin` header, writes the resulting
//! `DistributionConfig` and hands back the ETag needed to apply it.

pub mod cli;
pub mod document;
pub mod error;
pub mod operations;
pub mod system;

use anyhow::Result;
use cli::Args;
use operations::patch::PatchOperation;
use system::System;

/// Main entry point for the cfpatch library
///
/// Prints the ETag to stdout on success.
pub fn run(args: &Args, system: &dyn System) -> Result<()> {
    let patch_operation = PatchOperation::from_args(args, system)?;
    let etag = patch_operation.execute()?;

    // Output to stdout (not using logging)
    println!("{etag}");

    Ok(())
}
