//! Mapping archive entry names onto the destination directory.
//!
//! Entry names come from the archive, not the user. They may use Windows
//! separators and may try to climb out of the destination with `..` or an
//! absolute prefix; such names are rejected rather than silently rewritten.

use crate::archive::ExtractError;
use std::path::{Component, Path, PathBuf};

/// Convert Windows path separators to forward slashes.
/// `Data\Textures\armor.dds` -> `Data/Textures/armor.dds`
pub fn to_linux_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Resolve an entry name to its location under `dest`.
///
/// `.` components and empty segments are dropped, so a root entry such as
/// `./` or `""` resolves to `dest` itself. Parent references, roots and drive
/// prefixes fail with [`ExtractError::UnsafeEntryPath`].
pub fn entry_destination(dest: &Path, entry_name: &str) -> Result<PathBuf, ExtractError> {
    let normalized = to_linux_path(entry_name);
    let mut relative = PathBuf::new();

    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ExtractError::UnsafeEntryPath(entry_name.to_string()));
            }
        }
    }

    Ok(dest.join(relative))
}

/// Create parent directories for a path if they don't exist
pub fn ensure_parent_dirs(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Create `dir` and all of its ancestors. Existing directories are fine.
pub fn ensure_dir(dir: &Path) -> Result<(), ExtractError> {
    std::fs::create_dir_all(dir).map_err(|e| ExtractError::io(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_to_linux_path() {
        assert_eq!(to_linux_path("dir\\sub\\file.bin"), "dir/sub/file.bin");
        assert_eq!(to_linux_path("already/linux/path"), "already/linux/path");
        assert_eq!(to_linux_path("mixed\\path/style"), "mixed/path/style");
    }

    #[test]
    fn test_entry_destination_joins_relative_names() {
        let dest = Path::new("out");
        assert_eq!(
            entry_destination(dest, "dir/sub/file.bin").unwrap(),
            PathBuf::from("out/dir/sub/file.bin")
        );
        assert_eq!(
            entry_destination(dest, "dir\\sub\\file.bin").unwrap(),
            PathBuf::from("out/dir/sub/file.bin")
        );
        assert_eq!(
            entry_destination(dest, "./a.txt").unwrap(),
            PathBuf::from("out/a.txt")
        );
        assert_eq!(
            entry_destination(dest, "b/").unwrap(),
            PathBuf::from("out/b")
        );
    }

    #[test]
    fn test_entry_destination_rejects_escapes() {
        let dest = Path::new("out");
        for name in ["../evil.txt", "a/../../evil.txt", "/etc/passwd", "..\\evil", "./../x"] {
            let result = entry_destination(dest, name);
            assert!(
                matches!(result, Err(ExtractError::UnsafeEntryPath(_))),
                "expected {:?} to be rejected",
                name
            );
        }
    }

    #[test]
    fn test_root_entries_resolve_to_dest() {
        let dest = Path::new("out");
        for name in ["", ".", "./", ".\\"] {
            assert_eq!(entry_destination(dest, name).unwrap(), PathBuf::from("out"));
        }
    }

    #[test]
    fn test_ensure_dirs_are_idempotent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        let file = dir.path().join("x/y/file.txt");
        ensure_parent_dirs(&file).unwrap();
        ensure_parent_dirs(&file).unwrap();
        assert!(dir.path().join("x/y").is_dir());
    }
}
