//! Archive format detection by file name suffix.

use std::fmt;
use std::path::Path;

/// Suffixes handled by the tar extractor. Compression is sniffed from the
/// stream itself, so every suffix here maps to the same variant.
const TAR_SUFFIXES: [&str; 4] = [".tar", ".tar.gz", ".tgz", ".tar.bz2"];

/// Archive type detected from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// `.zip`
    Zip,
    /// `.rar`
    Rar,
    /// `.7z`
    SevenZip,
    /// `.tar`, `.tar.gz`, `.tgz`, `.tar.bz2`
    Tar,
    /// Anything else
    Unsupported,
}

impl ArchiveFormat {
    /// Classify a path by its suffix.
    ///
    /// Matching is case-sensitive and the first match wins, so `a.tar.zip`
    /// is a ZIP archive.
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy();

        if name.ends_with(".zip") {
            ArchiveFormat::Zip
        } else if name.ends_with(".rar") {
            ArchiveFormat::Rar
        } else if name.ends_with(".7z") {
            ArchiveFormat::SevenZip
        } else if TAR_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            ArchiveFormat::Tar
        } else {
            ArchiveFormat::Unsupported
        }
    }

    /// Progress bar label for this format.
    pub fn label(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => "Extracting ZIP",
            ArchiveFormat::Rar => "Extracting RAR",
            ArchiveFormat::SevenZip => "Extracting 7Z",
            ArchiveFormat::Tar => "Extracting TAR",
            ArchiveFormat::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArchiveFormat::Zip => "zip",
            ArchiveFormat::Rar => "rar",
            ArchiveFormat::SevenZip => "7z",
            ArchiveFormat::Tar => "tar",
            ArchiveFormat::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(name: &str) -> ArchiveFormat {
        ArchiveFormat::from_path(Path::new(name))
    }

    #[test]
    fn test_supported_suffixes() {
        assert_eq!(detect("a.zip"), ArchiveFormat::Zip);
        assert_eq!(detect("a.rar"), ArchiveFormat::Rar);
        assert_eq!(detect("a.7z"), ArchiveFormat::SevenZip);
        assert_eq!(detect("a.tar"), ArchiveFormat::Tar);
        assert_eq!(detect("a.tar.gz"), ArchiveFormat::Tar);
        assert_eq!(detect("a.tgz"), ArchiveFormat::Tar);
        assert_eq!(detect("a.tar.bz2"), ArchiveFormat::Tar);
        assert_eq!(detect("dir/nested/a.zip"), ArchiveFormat::Zip);
    }

    #[test]
    fn test_unsupported_suffixes() {
        assert_eq!(detect("a.txt"), ArchiveFormat::Unsupported);
        assert_eq!(detect("a.gz"), ArchiveFormat::Unsupported);
        assert_eq!(detect("a.bz2"), ArchiveFormat::Unsupported);
        assert_eq!(detect("a.tar.xz"), ArchiveFormat::Unsupported);
        assert_eq!(detect("zip"), ArchiveFormat::Unsupported);
        assert_eq!(detect(""), ArchiveFormat::Unsupported);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(detect("A.ZIP"), ArchiveFormat::Unsupported);
        assert_eq!(detect("a.Tar.Gz"), ArchiveFormat::Unsupported);
        assert_eq!(detect("a.7Z"), ArchiveFormat::Unsupported);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(detect("backup.tar.zip"), ArchiveFormat::Zip);
        assert_eq!(detect("backup.zip.rar"), ArchiveFormat::Rar);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ArchiveFormat::Zip.label(), "Extracting ZIP");
        assert_eq!(ArchiveFormat::SevenZip.label(), "Extracting 7Z");
        assert_eq!(ArchiveFormat::Tar.to_string(), "tar");
    }
}
