//! Chunked stream-to-file copy with per-chunk progress callbacks.

use super::error::{ExtractError, Result};
use crate::paths;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

/// Bytes moved per read/write cycle (1 MiB).
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Copy `reader` into a freshly created file at `dest`.
///
/// Missing parent directories are created and an existing file is
/// truncated. `on_chunk` receives each chunk's length right after the chunk
/// is written. Returns the number of bytes copied.
pub fn copy_chunked<R, F>(reader: &mut R, dest: &Path, mut on_chunk: F) -> Result<u64>
where
    R: Read + ?Sized,
    F: FnMut(u64),
{
    paths::ensure_parent_dirs(dest).map_err(|e| ExtractError::io(dest, e))?;
    let mut file = File::create(dest).map_err(|e| ExtractError::io(dest, e))?;

    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut copied = 0u64;

    loop {
        let bytes_read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ExtractError::io(dest, e)),
        };

        file.write_all(&buf[..bytes_read])
            .map_err(|e| ExtractError::io(dest, e))?;
        copied += bytes_read as u64;
        on_chunk(bytes_read as u64);
    }

    file.flush().map_err(|e| ExtractError::io(dest, e))?;
    Ok(copied)
}
