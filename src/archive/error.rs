//! Extraction errors.

use std::io;
use std::path::{Path, PathBuf};

/// Failure of a single extraction call.
///
/// Nothing is rolled back: files written before the failure stay on disk.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("RAR error: {0}")]
    Rar(#[from] unrar::error::UnrarError),

    #[error("7z error: {0}")]
    SevenZip(#[from] sevenz_rust2::Error),

    #[error("Refusing to extract entry outside the destination: {0}")]
    UnsafeEntryPath(String),
}

impl ExtractError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        ExtractError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
