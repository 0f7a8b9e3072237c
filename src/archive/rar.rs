//! RAR extraction via the unrar crate (FFI to the bundled unrar library).
//!
//! unrar hands out whole entries rather than a reader, so each file entry is
//! read into memory and then pushed through the chunked copier.

use super::{
    copy_chunked, total_file_size, ArchiveEntry, ArchiveFormat,
    ExtractSummary, Extractor, Result,
};
use crate::paths;
use crate::progress::{ProgressScope, ProgressSink};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

pub struct RarExtractor;

/// List all entries of a RAR archive.
pub fn list_entries(archive_path: &Path) -> Result<Vec<ArchiveEntry>> {
    let archive = unrar::Archive::new(archive_path).open_for_listing()?;

    let mut entries = Vec::new();
    for header in archive {
        let header = header?;
        entries.push(ArchiveEntry {
            path: header.filename.to_string_lossy().to_string(),
            size: header.unpacked_size,
            is_dir: header.is_directory(),
        });
    }

    Ok(entries)
}

impl Extractor for RarExtractor {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::Rar
    }

    fn extract(
        &self,
        archive_path: &Path,
        dest: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<ExtractSummary> {
        paths::ensure_dir(dest)?;

        let entries = list_entries(archive_path)?;
        let total = total_file_size(&entries);
        let mut scope = ProgressScope::begin(progress, self.format().label(), total);
        let mut summary = ExtractSummary::default();

        let mut archive = unrar::Archive::new(archive_path).open_for_processing()?;

        while let Some(header) = archive.read_header()? {
            let entry = header.entry();
            let name = entry.filename.to_string_lossy().to_string();
            let out_path = paths::entry_destination(dest, &name)?;

            archive = if entry.is_directory() {
                paths::ensure_dir(&out_path)?;
                header.skip()?
            } else if entry.is_file() {
                debug!("RAR entry {} -> {}", name, out_path.display());
                let (data, next) = header.read()?;
                summary.bytes +=
                    copy_chunked(&mut Cursor::new(data), &out_path, |n| scope.update(n))?;
                summary.files += 1;
                next
            } else {
                header.skip()?
            };
        }

        Ok(summary)
    }
}
