//! # `cfpatch`
//!
//! `cfpatch` prepares a CloudFront distribution update that forwards the
//! `Origin` header to the origin on the default cache behavior.
//!
//! ## Usage
//!
//! ```sh
//! aws cloudfront get-distribution-config --id EDFDVBD6EXAMPLE > cf_config.json
//! ETAG=$(cfpatch)
//! aws cloudfront update-distribution --id EDFDVBD6EXAMPLE \
//!     --distribution-config file://updated_config.json --if-match "$ETAG"
//! ```
//!
//! Only the ETag is printed to stdout; logs and diagnostics go to stderr.

use anyhow::Result;
use cfpatch::cli::Args;
use cfpatch::error::PatchError;
use cfpatch::system::RealSystem;
use clap::Parser as _;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Keep stdout for the ETag; RUST_LOG overrides the flag
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    match cfpatch::run(&args, &system) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<PatchError>()
                    .map_or(1, PatchError::exit_code),
            );
        }
    }
}
