//! Line-based M3U8 media playlist parsing.

use url::Url;

use crate::error::ParseError;
use crate::fs::naming::{extension_of, segment_filename};
use crate::playlist::segment::Segment;

/// Policies applied while turning playlist lines into segments.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Base URL joined with every segment reference. Empty keeps lines verbatim.
    pub force_url_prefix: String,

    /// Extension (with dot) used instead of the one found in the reference.
    pub force_ext: String,

    /// Number of leading content lines to skip.
    pub skip: usize,

    /// Maximum number of segments to emit. Zero means unbounded.
    pub limit: usize,
}

/// Parse playlist text into an ordered list of segments.
///
/// Only content lines (non-blank, not starting with `#`) count towards the
/// ordinal embedded in each filename, so filenames stay stable regardless of
/// `skip` and `limit`.
pub fn parse_playlist(text: &str, options: &ParseOptions) -> Result<Vec<Segment>, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // Only reported once a line actually needs joining.
    let base = (!options.force_url_prefix.is_empty())
        .then(|| parse_prefix(&options.force_url_prefix));

    let mut segments = Vec::new();
    let mut ordinal = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if ordinal < options.skip {
            ordinal += 1;
            continue;
        }

        if options.limit > 0 && ordinal - options.skip >= options.limit {
            break;
        }

        let url = match &base {
            None => line.to_string(),
            Some(Ok(base)) => join_path(base, line),
            Some(Err(e)) => return Err(e.clone()),
        };

        let ext = if options.force_ext.is_empty() {
            extension_of(line)
        } else {
            options.force_ext.as_str()
        };

        segments.push(Segment::new(url, segment_filename(ordinal, ext)));
        ordinal += 1;
    }

    if segments.is_empty() {
        return Err(ParseError::NoSegmentsFound);
    }

    Ok(segments)
}

fn parse_prefix(prefix: &str) -> Result<Url, ParseError> {
    let invalid = |reason: String| ParseError::InvalidUrlPrefix {
        prefix: prefix.to_string(),
        reason,
    };

    let url = Url::parse(prefix).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("cannot be used as a base URL".to_string()));
    }
    Ok(url)
}

/// Append `reference` to the path of `base`.
///
/// A trailing slash on the base path is irrelevant. A query on the reference
/// replaces the query of the base; fragments are dropped.
fn join_path(base: &Url, reference: &str) -> String {
    let reference = reference.split('#').next().unwrap_or(reference);
    let (path, query) = match reference.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (reference, None),
    };

    let mut url = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    if query.is_some() {
        url.set_query(query);
    }
    url.set_fragment(None);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const PLAYLIST: &str = "#EXTM3U\nseg0.ts\n#EXTINF:10\nseg1.ts\nseg2.ts\n";

    fn options(prefix: &str, skip: usize, limit: usize) -> ParseOptions {
        ParseOptions {
            force_url_prefix: prefix.to_string(),
            force_ext: String::new(),
            skip,
            limit,
        }
    }

    fn ordinals(segments: &[Segment]) -> Vec<usize> {
        segments
            .iter()
            .map(|s| s.filename[8..12].parse().unwrap())
            .collect()
    }

    #[test]
    fn test_end_to_end_example() {
        let segments = parse_playlist(PLAYLIST, &options("http://h/", 0, 0)).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::new("http://h/seg0.ts", "segment_0000.ts"),
                Segment::new("http://h/seg1.ts", "segment_0001.ts"),
                Segment::new("http://h/seg2.ts", "segment_0002.ts"),
            ]
        );
    }

    #[test]
    fn test_skip_and_limit_example() {
        let segments = parse_playlist(PLAYLIST, &options("http://h/", 1, 1)).unwrap();
        assert_eq!(
            segments,
            vec![Segment::new("http://h/seg1.ts", "segment_0001.ts")]
        );
    }

    #[test]
    fn test_skip_limit_window() {
        let text: String = (0..10).map(|i| format!("#EXTINF:4\ns{}.ts\n\n", i)).collect();

        for skip in 0..12 {
            for limit in 0..12 {
                let result = parse_playlist(&text, &options("", skip, limit));
                let end = if limit == 0 { 10 } else { (skip + limit).min(10) };
                let expected: Vec<usize> = (skip..end).collect();

                if expected.is_empty() {
                    assert_eq!(result, Err(ParseError::NoSegmentsFound));
                } else {
                    let segments = result.unwrap();
                    assert_eq!(ordinals(&segments), expected, "skip={skip} limit={limit}");
                    for (segment, ordinal) in segments.iter().zip(&expected) {
                        assert_eq!(segment.url, format!("s{}.ts", ordinal));
                    }
                }
            }
        }
    }

    #[test]
    fn test_huge_limit_covers_rest() {
        let segments = parse_playlist("a.ts\nb.ts\nc.ts\n", &options("", 1, usize::MAX)).unwrap();
        assert_eq!(ordinals(&segments), vec![1, 2]);
    }

    #[test]
    fn test_comments_and_blanks_do_not_advance_ordinal() {
        let text = "#EXTM3U\n\n   \n#EXT-X-VERSION:3\na.ts\n# note\n\n  b.ts  \n#EXTINF:2\nc.ts";
        let segments = parse_playlist(text, &options("", 0, 0)).unwrap();
        assert_eq!(ordinals(&segments), vec![0, 1, 2]);
        assert_eq!(segments[1].url, "b.ts");
    }

    #[test]
    fn test_filenames_unique() {
        let text: String = (0..200).map(|_| "same.ts\n").collect();
        let segments = parse_playlist(&text, &options("", 0, 0)).unwrap();
        let names: HashSet<_> = segments.iter().map(|s| s.filename.as_str()).collect();
        assert_eq!(names.len(), 200);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse_playlist("", &options("", 0, 0)),
            Err(ParseError::EmptyInput)
        );
    }

    #[test]
    fn test_only_comments() {
        assert_eq!(
            parse_playlist("#EXTM3U\n\n#EXT-X-ENDLIST\n", &options("", 0, 0)),
            Err(ParseError::NoSegmentsFound)
        );
    }

    #[test]
    fn test_prefix_trailing_slash_is_irrelevant() {
        let with = parse_playlist("seg.ts", &options("http://h/a/", 0, 0)).unwrap();
        let without = parse_playlist("seg.ts", &options("http://h/a", 0, 0)).unwrap();
        assert_eq!(with[0].url, "http://h/a/seg.ts");
        assert_eq!(with, without);
    }

    #[test]
    fn test_prefix_keeps_reference_query() {
        let segments = parse_playlist("/x/seg.ts?token=abc", &options("https://cdn/v", 0, 0))
            .unwrap();
        assert_eq!(segments[0].url, "https://cdn/v/x/seg.ts?token=abc");
        assert_eq!(segments[0].filename, "segment_0000.ts");
    }

    #[test]
    fn test_invalid_prefix() {
        let result = parse_playlist("seg.ts", &options("not a url", 0, 0));
        assert!(matches!(result, Err(ParseError::InvalidUrlPrefix { .. })));

        let result = parse_playlist("seg.ts", &options("mailto:someone", 0, 0));
        assert!(matches!(result, Err(ParseError::InvalidUrlPrefix { .. })));
    }

    #[test]
    fn test_force_ext() {
        let mut opts = options("", 0, 0);
        opts.force_ext = ".mp4".to_string();
        let segments = parse_playlist("http://h/seg0\nhttp://h/seg1.ts\n", &opts).unwrap();
        assert_eq!(segments[0].filename, "segment_0000.mp4");
        assert_eq!(segments[1].filename, "segment_0001.mp4");
    }

    #[test]
    fn test_missing_extension() {
        let segments = parse_playlist("http://h/chunk?id=3\n", &options("", 0, 0)).unwrap();
        assert_eq!(segments[0].filename, "segment_0000");
        assert_eq!(segments[0].url, "http://h/chunk?id=3");
    }

    #[test]
    fn test_crlf_lines() {
        let segments = parse_playlist("#EXTM3U\r\na.ts\r\nb.ts\r\n", &options("", 0, 0)).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].url, "a.ts");
    }
}
