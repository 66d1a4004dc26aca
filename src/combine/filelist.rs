//! ffmpeg concat filelist.

use std::path::{Path, PathBuf};

use crate::error::CombineError;
use crate::fs::naming::embedded_ordinal;

/// Sort segment paths by the ordinal embedded in their basename.
///
/// Paths without an ordinal go last, in their original order.
pub fn sort_by_ordinal(paths: &mut [PathBuf]) {
    paths.sort_by_key(|path| embedded_ordinal(path).unwrap_or(u64::MAX));
}

/// Format one filelist entry, escaping single quotes the way ffmpeg expects.
fn entry(path: &Path) -> String {
    let quoted = path.display().to_string().replace('\'', r"'\''");
    format!("file '{}'\n", quoted)
}

/// Write the concat filelist for `segments`.
///
/// ffmpeg resolves relative entries against the filelist's own directory, so
/// relative segment paths are made absolute first.
pub async fn write_filelist(filelist: &Path, segments: &[PathBuf]) -> Result<(), CombineError> {
    let write_failed = |source| CombineError::FilelistWriteFailed {
        path: filelist.to_path_buf(),
        source,
    };

    let cwd = std::env::current_dir().map_err(write_failed)?;
    let content: String = segments
        .iter()
        .map(|segment| {
            if segment.is_absolute() {
                entry(segment)
            } else {
                entry(&cwd.join(segment))
            }
        })
        .collect();

    tokio::fs::write(filelist, content)
        .await
        .map_err(write_failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_ordinal_is_numeric() {
        let mut paths = vec![
            PathBuf::from("s/segment_10000.ts"),
            PathBuf::from("s/segment_0002.ts"),
            PathBuf::from("s/cover.jpg"),
            PathBuf::from("s/segment_0010.ts"),
        ];
        sort_by_ordinal(&mut paths);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("s/segment_0002.ts"),
                PathBuf::from("s/segment_0010.ts"),
                PathBuf::from("s/segment_10000.ts"),
                PathBuf::from("s/cover.jpg"),
            ]
        );
    }

    #[test]
    fn test_entry_escapes_quotes() {
        assert_eq!(
            entry(Path::new("/tmp/it's/segment_0000.ts")),
            "file '/tmp/it'\\''s/segment_0000.ts'\n"
        );
    }

    #[tokio::test]
    async fn test_write_filelist() {
        let tmp = tempfile::tempdir().unwrap();
        let filelist = tmp.path().join("filelist.txt");
        let segments = vec![
            tmp.path().join("segment_0000.ts"),
            PathBuf::from("segments/segment_0001.ts"),
        ];

        write_filelist(&filelist, &segments).await.unwrap();

        let content = std::fs::read_to_string(&filelist).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!("file '{}'", tmp.path().join("segment_0000.ts").display())
        );
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            lines[1],
            format!("file '{}'", cwd.join("segments/segment_0001.ts").display())
        );
    }

    #[tokio::test]
    async fn test_write_filelist_bad_location() {
        let tmp = tempfile::tempdir().unwrap();
        let result = write_filelist(&tmp.path().join("missing/filelist.txt"), &[]).await;
        assert!(matches!(
            result,
            Err(CombineError::FilelistWriteFailed { .. })
        ));
    }
}
