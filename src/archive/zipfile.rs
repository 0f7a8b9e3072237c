//! ZIP extraction via the zip crate.

use super::{
    copy_chunked, total_file_size, ArchiveEntry, ArchiveFormat,
    ExtractError, ExtractSummary, Extractor, Result,
};
use crate::paths;
use crate::progress::{ProgressScope, ProgressSink};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

pub struct ZipExtractor;

/// List every entry of an open ZIP archive without decompressing anything.
pub fn list_entries<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let file = archive.by_index_raw(i)?;
        entries.push(ArchiveEntry {
            path: file.name().to_string(),
            size: file.size(),
            is_dir: file.is_dir(),
        });
    }
    Ok(entries)
}

impl Extractor for ZipExtractor {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::Zip
    }

    fn extract(
        &self,
        archive_path: &Path,
        dest: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<ExtractSummary> {
        paths::ensure_dir(dest)?;

        let file = File::open(archive_path).map_err(|e| ExtractError::io(archive_path, e))?;
        let mut archive = ZipArchive::new(BufReader::new(file))?;

        let entries = list_entries(&mut archive)?;
        let total = total_file_size(&entries);
        let mut scope = ProgressScope::begin(progress, self.format().label(), total);
        let mut summary = ExtractSummary::default();

        for (index, entry) in entries.iter().enumerate() {
            let out_path = paths::entry_destination(dest, &entry.path)?;

            if entry.is_dir {
                paths::ensure_dir(&out_path)?;
                continue;
            }

            debug!("ZIP entry {} -> {}", entry.path, out_path.display());
            let mut reader = archive.by_index(index)?;
            summary.bytes += copy_chunked(&mut reader, &out_path, |n| scope.update(n))?;
            summary.files += 1;
        }

        Ok(summary)
    }
}
