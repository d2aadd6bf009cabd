use clap::Parser;

/// Input file written by `aws cloudfront get-distribution-config`
pub const DEFAULT_INPUT: &str = "cf_config.json";
/// Output file consumed by `aws cloudfront update-distribution`
pub const DEFAULT_OUTPUT: &str = "updated_config.json";

/// Command-line arguments for cfpatch
#[derive(Parser, Debug, Clone)]
#[command(name = "cfpatch")]
#[command(
    about = "A CLI tool that patches a CloudFront distribution config to forward the Origin header"
)]
#[command(long_about = "Reads the output of `aws cloudfront get-distribution-config`, makes the \
default cache behavior forward only the Origin header, writes the DistributionConfig to a new \
file and prints the ETag for use with `aws cloudfront update-distribution --if-match`.")]
#[command(version)]
pub struct Args {
    /// Distribution config document to read
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Where to write the patched DistributionConfig
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format: compact or pretty
    #[arg(long, value_name = "FORMAT", default_value = "compact")]
    pub format: String,

    /// Also write the bare ETag to this file
    #[arg(long = "etag-file", value_name = "PATH")]
    pub etag_file: Option<String>,

    /// Run every check without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}
