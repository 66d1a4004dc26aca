//! Segment filename generation and manipulation.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// Build the output basename for the segment at `ordinal`.
///
/// `ext` includes its leading dot (".ts") or is empty.
pub fn segment_filename(ordinal: usize, ext: &str) -> String {
    format!("segment_{:04}{}", ordinal, ext)
}

/// Extension of the last path element of a segment reference, with the dot.
///
/// Query strings and fragments are ignored. A reference without a dot in its
/// last element has no extension and yields an empty string.
pub fn extension_of(reference: &str) -> &str {
    let path = reference
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(reference);
    let name = path.rsplit('/').next().unwrap_or(path);

    match name.rfind('.') {
        Some(dot) => &name[dot..],
        None => "",
    }
}

/// Strip the extension from a filename.
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) => &filename[..dot],
        None => filename,
    }
}

fn ordinal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)").expect("ordinal pattern is valid"))
}

/// Numeric ordinal embedded in a segment file's basename.
///
/// "segments/segment_0042.ts" yields 42.
pub fn embedded_ordinal(path: &Path) -> Option<u64> {
    let name = path.file_name()?.to_str()?;
    ordinal_pattern()
        .find(name)
        .and_then(|m| m.as_str().parse().ok())
}
