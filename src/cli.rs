use std::path::PathBuf;

use clap::Parser;

use crate::commands::DEFAULT_PRECISION;

/// Usage line printed when no input document is given
pub const USAGE: &str = "Usage: shamir-recover <path-to-json>";

/// Validates that the approximation precision stays within a sane range
fn validate_precision(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value > 10_000 {
        return Err(format!("precision must be at most 10000 (got {value})"));
    }
    Ok(value)
}

#[derive(Debug, Parser)]
#[command(name = "shamir-recover")]
#[command(about = "Reconstruct a Shamir secret exactly from threshold shares in a JSON document")]
pub struct Cli {
    /// Path to the JSON share document (`-` reads it from stdin)
    pub input: Option<PathBuf>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Fractional digits of the approximate value shown for non-integer secrets
    #[arg(short, long, default_value_t = DEFAULT_PRECISION, value_parser = validate_precision)]
    pub precision: usize,
}
