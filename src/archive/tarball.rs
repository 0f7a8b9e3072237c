//! Tar extraction via the tar crate, with gzip (flate2) and bzip2 streams.
//!
//! The compression is sniffed from the file's leading bytes, so a `.tar`
//! that is really gzipped still extracts. Tar streams are forward-only: sizes
//! are summed in a first pass and contents copied in a second pass over a
//! freshly opened stream.

use super::{
    copy_chunked, total_file_size, ArchiveEntry, ArchiveFormat,
    ExtractError, ExtractSummary, Extractor, Result,
};
use crate::paths;
use crate::progress::{ProgressScope, ProgressSink};
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Gzip magic bytes (RFC 1952)
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Bzip2 stream header: 'B' 'Z' 'h'
const BZIP2_MAGIC: [u8; 3] = [0x42, 0x5a, 0x68];

/// Compression wrapped around a tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TarCompression {
    None,
    Gzip,
    Bzip2,
}

impl TarCompression {
    /// Detect compression from the first bytes of a file.
    pub fn from_magic(magic: &[u8]) -> Self {
        if magic.starts_with(&GZIP_MAGIC) {
            TarCompression::Gzip
        } else if magic.starts_with(&BZIP2_MAGIC) {
            TarCompression::Bzip2
        } else {
            TarCompression::None
        }
    }

    /// Read the leading bytes of `path` and detect its compression.
    pub fn sniff(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
        let mut magic = Vec::with_capacity(BZIP2_MAGIC.len());
        file.take(BZIP2_MAGIC.len() as u64)
            .read_to_end(&mut magic)
            .map_err(|e| ExtractError::io(path, e))?;
        Ok(Self::from_magic(&magic))
    }
}

fn open_archive(path: &Path, compression: TarCompression) -> Result<tar::Archive<Box<dyn Read>>> {
    let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
    let reader = BufReader::new(file);

    let stream: Box<dyn Read> = match compression {
        TarCompression::None => Box::new(reader),
        TarCompression::Gzip => Box::new(GzDecoder::new(reader)),
        TarCompression::Bzip2 => Box::new(BzDecoder::new(reader)),
    };

    Ok(tar::Archive::new(stream))
}

/// List the regular file and directory entries of a tar archive.
///
/// Links, devices and other special entries are left out.
pub fn list_entries(
    archive_path: &Path,
    compression: TarCompression,
) -> Result<Vec<ArchiveEntry>> {
    let mut archive = open_archive(archive_path, compression)?;
    let io_err = |e| ExtractError::io(archive_path, e);

    let mut entries = Vec::new();
    for entry in archive.entries().map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let entry_type = entry.header().entry_type();
        if !entry_type.is_file() && !entry_type.is_dir() {
            continue;
        }

        entries.push(ArchiveEntry {
            path: entry.path().map_err(io_err)?.to_string_lossy().to_string(),
            size: entry.size(),
            is_dir: entry_type.is_dir(),
        });
    }

    Ok(entries)
}

pub struct TarExtractor;

impl Extractor for TarExtractor {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::Tar
    }

    fn extract(
        &self,
        archive_path: &Path,
        dest: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<ExtractSummary> {
        paths::ensure_dir(dest)?;

        let compression = TarCompression::sniff(archive_path)?;
        debug!("{} compression: {:?}", archive_path.display(), compression);

        let entries = list_entries(archive_path, compression)?;
        let total = total_file_size(&entries);
        let mut scope = ProgressScope::begin(progress, self.format().label(), total);
        let mut summary = ExtractSummary::default();

        let mut archive = open_archive(archive_path, compression)?;
        let io_err = |e| ExtractError::io(archive_path, e);

        for entry in archive.entries().map_err(io_err)? {
            let mut entry = entry.map_err(io_err)?;
            let entry_type = entry.header().entry_type();
            let name = entry.path().map_err(io_err)?.to_string_lossy().to_string();

            if entry_type.is_dir() {
                paths::ensure_dir(&paths::entry_destination(dest, &name)?)?;
            } else if entry_type.is_file() {
                let out_path = paths::entry_destination(dest, &name)?;
                debug!("TAR entry {} -> {}", name, out_path.display());
                summary.bytes += copy_chunked(&mut entry, &out_path, |n| scope.update(n))?;
                summary.files += 1;
            } else {
                debug!("Skipping {:?} entry {}", entry_type, name);
            }
        }

        Ok(summary)
    }
}
