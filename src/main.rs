use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use shamir_recover::cli::{Cli, USAGE};
use shamir_recover::reconstruct_json;
use shamir_recover::report::StderrReporter;

fn install_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(false);
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

/// Read the share document from a file, or from stdin when the path is `-`
fn read_document(path: &Path) -> Result<Zeroizing<String>> {
    let mut document = Zeroizing::new(String::new());

    if path.as_os_str() == "-" {
        io::stdin()
            .lock()
            .read_to_string(&mut document)
            .context("Failed to read share document from stdin")?;
    } else {
        *document = fs::read_to_string(path)
            .with_context(|| format!("Failed to read share document {}", path.display()))?;
    }

    Ok(document)
}

fn main() -> Result<()> {
    install_tracing();
    let cli = Cli::parse();

    // Missing input is a usage error with exit code 1, not clap's code 2
    let Some(input) = cli.input else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    let document = read_document(&input)?;
    let reconstruction = reconstruct_json(&document, &mut StderrReporter)
        .with_context(|| format!("Failed to reconstruct secret from {}", input.display()))?;

    // Warnings already went to stderr; stdout carries only the result
    if cli.json {
        let report = Zeroizing::new(
            serde_json::to_string_pretty(&reconstruction.report(cli.precision))
                .context("Failed to serialize report")?,
        );
        println!("{}", *report);
    } else {
        println!("{reconstruction:.precision$}", precision = cli.precision);
    }

    Ok(())
}
