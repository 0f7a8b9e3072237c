//! 7z extraction via sevenz-rust2.
//!
//! The archive is unpacked in one `decompress_file` call, so there is no
//! per-chunk progress. The bar's total is the compressed archive size and a
//! single corrective update is issued afterwards from the on-disk sizes of the
//! extracted files. The bar can therefore finish above or below 100%.

use super::{ArchiveEntry, ArchiveFormat, ExtractError, ExtractSummary, Extractor, Result};
use crate::paths;
use crate::progress::{ProgressScope, ProgressSink};
use sevenz_rust2::{ArchiveReader, Password};
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct SevenZipExtractor;

/// List all entries of a 7z archive.
pub fn list_entries(archive_path: &Path) -> Result<Vec<ArchiveEntry>> {
    let reader = ArchiveReader::open(archive_path, Password::empty())?;

    Ok(reader
        .archive()
        .files
        .iter()
        .map(|entry| ArchiveEntry {
            path: entry.name().to_string(),
            size: entry.size(),
            is_dir: entry.is_directory(),
        })
        .collect())
}

/// Sum of on-disk sizes of the file entries that exist below `dest`.
fn measure_extracted(dest: &Path, entries: &[ArchiveEntry]) -> Result<ExtractSummary> {
    let mut summary = ExtractSummary::default();

    for entry in entries.iter().filter(|e| !e.is_dir) {
        let out_path = paths::entry_destination(dest, &entry.path)?;
        if let Ok(metadata) = fs::metadata(&out_path) {
            if metadata.is_file() {
                summary.files += 1;
                summary.bytes += metadata.len();
            }
        }
    }

    Ok(summary)
}

impl Extractor for SevenZipExtractor {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::SevenZip
    }

    fn extract(
        &self,
        archive_path: &Path,
        dest: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<ExtractSummary> {
        paths::ensure_dir(dest)?;

        let entries = list_entries(archive_path)?;
        for entry in &entries {
            paths::entry_destination(dest, &entry.path)?;
        }

        let archive_size = fs::metadata(archive_path)
            .map_err(|e| ExtractError::io(archive_path, e))?
            .len();
        let mut scope = ProgressScope::begin(progress, self.format().label(), archive_size);

        sevenz_rust2::decompress_file(archive_path, dest)?;

        let summary = measure_extracted(dest, &entries)?;
        debug!(
            "7z extracted {} bytes, archive is {} bytes",
            summary.bytes, archive_size
        );
        scope.update(summary.bytes.saturating_sub(scope.position()));

        Ok(summary)
    }
}
