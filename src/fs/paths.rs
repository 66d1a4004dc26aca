//! Directory management and listing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::SetupError;
use crate::fs::naming::{extension_of, strip_extension};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<(), SetupError> {
    std::fs::create_dir_all(path).map_err(|source| SetupError::DirectoryCreateFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// List the regular files of `dir`, keyed by filename without extension.
pub fn existing_stems(dir: &Path) -> Result<HashMap<String, PathBuf>, SetupError> {
    let unreadable = |source| SetupError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut stems = HashMap::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if entry.file_type().map_err(unreadable)?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            stems.insert(strip_extension(name).to_string(), entry.path());
        }
    }

    Ok(stems)
}

/// Extension of the first regular file in `dir` (by name), if any.
pub fn first_file_extension(dir: &Path) -> Result<Option<String>, SetupError> {
    let unreadable = |source| SetupError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if entry.file_type().map_err(unreadable)?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names
        .first()
        .map(|name| extension_of(name).to_string())
        .filter(|ext| !ext.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Existing directory is fine
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_existing_stems_skips_directories() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("segment_0000.ts"), b"x").unwrap();
        std::fs::write(tmp.path().join("segment_0002.mp4"), b"x").unwrap();
        std::fs::create_dir(tmp.path().join("segment_0001")).unwrap();

        let stems = existing_stems(tmp.path()).unwrap();
        assert_eq!(stems.len(), 2);
        assert!(stems.contains_key("segment_0000"));
        assert!(stems.contains_key("segment_0002"));
        assert!(!stems.contains_key("segment_0001"));
    }

    #[test]
    fn test_existing_stems_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let result = existing_stems(&tmp.path().join("nope"));
        assert!(matches!(result, Err(SetupError::DirectoryUnreadable { .. })));
    }

    #[test]
    fn test_first_file_extension() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(first_file_extension(tmp.path()).unwrap(), None);

        std::fs::write(tmp.path().join("segment_0003.m4s"), b"x").unwrap();
        std::fs::write(tmp.path().join("segment_0001.ts"), b"x").unwrap();
        assert_eq!(
            first_file_extension(tmp.path()).unwrap(),
            Some(".ts".to_string())
        );
    }
}
