//! uzip - CLI unzip utility
//!
//! Extracts ZIP, RAR, 7z and tar archives with a progress bar.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uzip::archive::Dispatch;
use uzip::config::{ConfigError, ExtractConfig};
use uzip::runner;

#[derive(Parser)]
#[command(name = "uzip")]
#[command(version)]
#[command(about = "CLI Unzip Utility")]
struct Cli {
    /// Path to the compressed file
    file: PathBuf,

    /// Destination folder for extraction
    dest: PathBuf,

    /// Enable verbose logging (use RUST_LOG=debug for more detail)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only initialize logging if verbose or RUST_LOG is set
    if cli.verbose || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive(if cli.verbose { "uzip=debug".parse()? } else { "uzip=warn".parse()? }),
            )
            .init();
    }

    let config = ExtractConfig::new(&cli.file, &cli.dest);

    if let Err(ConfigError::ArchiveNotFound(path)) = config.validate() {
        tracing::debug!("Archive does not exist: {}", path.display());
        println!("Error: File not found");
        return Ok(());
    }

    match runner::run_on_worker(config).await? {
        Dispatch::Extracted(_) => println!("Extraction complete: {}", cli.dest.display()),
        Dispatch::Unsupported => println!("Unsupported file format."),
    }

    Ok(())
}
