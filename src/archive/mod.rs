//! Archive extraction.
//!
//! Uses native Rust crates for ZIP (zip), 7z (sevenz-rust2) and tar (tar,
//! flate2, bzip2), and the bundled unrar library for RAR. Each format sits
//! behind the [`Extractor`] trait; [`extract_archive`] picks one from the file
//! name and runs it.

mod copy;
mod error;
mod format;
pub mod rar;
pub mod sevenzip;
pub mod tarball;
pub mod zipfile;

pub use copy::{copy_chunked, CHUNK_SIZE};
pub use error::{ExtractError, Result};
pub use format::ArchiveFormat;

use crate::progress::ProgressSink;
use std::path::Path;
use tracing::{info, warn};

/// Information about an entry in an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path within the archive, as stored
    pub path: String,
    /// Declared uncompressed size in bytes
    pub size: u64,
    /// Whether this is a directory
    pub is_dir: bool,
}

/// What one extraction wrote to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files: usize,
    pub bytes: u64,
}

/// Sum of declared sizes of the file entries, used as the progress total.
pub fn total_file_size(entries: &[ArchiveEntry]) -> u64 {
    entries.iter().filter(|e| !e.is_dir).map(|e| e.size).sum()
}

/// A format-specific extraction routine.
pub trait Extractor {
    /// Format handled by this extractor.
    fn format(&self) -> ArchiveFormat;

    /// Extract every entry of `archive` below `dest`, reporting bytes to
    /// `progress`.
    fn extract(
        &self,
        archive: &Path,
        dest: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<ExtractSummary>;
}

/// Extractor for a detected format, or `None` when unsupported.
pub fn extractor_for(format: ArchiveFormat) -> Option<Box<dyn Extractor + Send>> {
    match format {
        ArchiveFormat::Zip => Some(Box::new(zipfile::ZipExtractor)),
        ArchiveFormat::Rar => Some(Box::new(rar::RarExtractor)),
        ArchiveFormat::SevenZip => Some(Box::new(sevenzip::SevenZipExtractor)),
        ArchiveFormat::Tar => Some(Box::new(tarball::TarExtractor)),
        ArchiveFormat::Unsupported => None,
    }
}

/// Result of dispatching an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Extracted(ExtractSummary),
    /// The file name matched no known format; nothing was touched.
    Unsupported,
}

/// Detect the format of `archive` from its name and extract it into `dest`.
pub fn extract_archive(
    archive: &Path,
    dest: &Path,
    progress: &mut dyn ProgressSink,
) -> Result<Dispatch> {
    let format = ArchiveFormat::from_path(archive);
    let Some(extractor) = extractor_for(format) else {
        warn!("No extractor for {}", archive.display());
        return Ok(Dispatch::Unsupported);
    };

    info!(
        "Extracting {} archive {} -> {}",
        format,
        archive.display(),
        dest.display()
    );
    let summary = extractor.extract(archive, dest, progress)?;
    info!(
        "Extracted {} files ({} bytes) from {}",
        summary.files,
        summary.bytes,
        archive.display()
    );

    Ok(Dispatch::Extracted(summary))
}
