// Copyright 2026 NLRB Memos Contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use nlrb_memos::config::{DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECS, DEFAULT_URL};
use nlrb_memos::output::Console;
use nlrb_memos::{pipeline, report, ScrapeConfig};

#[derive(Parser)]
#[command(
    name = "nlrb-memos",
    about = "Snapshot the NLRB General Counsel memo listing to JSON",
    version
)]
struct Cli {
    /// Listing page to fetch
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Snapshot file to overwrite
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Suppress progress output
    #[arg(long, short)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("nlrb_memos={level}").parse()?),
        )
        .init();
    Ok(())
}

async fn run(cli: &Cli, console: &Console) -> Result<()> {
    let config = ScrapeConfig::new(&cli.url, cli.output.clone(), Duration::from_secs(cli.timeout))
        .context("invalid configuration")?;

    console.status(format!(
        "Starting NLRB memo scrape at {}",
        report::now().format("%Y-%m-%d %H:%M:%S%.6f")
    ));
    pipeline::run(&config, console).await?;
    console.status("Scrape completed successfully");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let console = Console::new(cli.quiet);
    init_tracing(cli.verbose)?;

    let result = run(&cli, &console).await;

    // 0 = snapshot written, 1 = aborted
    if let Err(e) = &result {
        console.error(e);
        std::process::exit(1);
    }

    result
}
