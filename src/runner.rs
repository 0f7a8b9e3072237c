//! Runs an extraction on a blocking worker task.
//!
//! Exactly one worker is spawned per run and awaited straight away, so the
//! observable behaviour is the same as a direct call. Batch extraction would
//! spawn several workers here and join them together.

use crate::archive::{self, Dispatch};
use crate::config::ExtractConfig;
use crate::progress::{ProgressSink, TerminalProgress};
use anyhow::{Context, Result};
use tracing::debug;

/// Extract `config` on a worker with a terminal progress bar.
pub async fn run_on_worker(config: ExtractConfig) -> Result<Dispatch> {
    run_with_progress(config, TerminalProgress::new()).await
}

/// Extract `config` on a worker, reporting to `progress`.
pub async fn run_with_progress<P>(config: ExtractConfig, mut progress: P) -> Result<Dispatch>
where
    P: ProgressSink + Send + 'static,
{
    debug!("Spawning extraction worker for {}", config.archive_path.display());

    let worker = tokio::task::spawn_blocking(move || {
        archive::extract_archive(&config.archive_path, &config.dest_dir, &mut progress)
            .with_context(|| format!("Failed to extract {}", config.archive_path.display()))
    });

    worker.await.context("Extraction worker panicked")?
}
