//! Extraction configuration
//!
//! Built from the command line; validated before any worker is spawned.

use std::path::PathBuf;

/// Configuration for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Path to the archive to extract
    pub archive_path: PathBuf,

    /// Destination directory (created if missing)
    pub dest_dir: PathBuf,
}

impl ExtractConfig {
    pub fn new(archive_path: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            archive_path: archive_path.into(),
            dest_dir: dest_dir.into(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.archive_path.exists() {
            return Err(ConfigError::ArchiveNotFound(self.archive_path.clone()));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Archive not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),
}
