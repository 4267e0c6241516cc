// Messager - core/parser.rs
//
// Line-oriented parsing of message catalog sources.
// Core layer: accepts raw bytes or lines, never touches the filesystem directly.
//
// Format:
//   # comment (after trimming)
//   key: template
//
// Only the first ':' on a line separates key from template. Lines without a
// ':' are ignored. Later duplicates replace earlier ones. Lines end at `\n`,
// `\r\n`, or a lone `\r`.
//
// Trimming strips characters up to and including U+0020 (space and the C0
// controls) from both ends. Other Unicode whitespace such as NBSP is content.

use crate::core::model::LoadWarning;
use crate::util::constants;
use std::collections::HashMap;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of parsing one catalog source.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Key to template mapping, last occurrence wins.
    pub entries: HashMap<String, String>,
    /// Per-line problems, in source order.
    pub warnings: Vec<LoadWarning>,
    /// Total lines seen, including comments and blanks.
    pub lines_processed: u64,
}

/// Parse catalog lines into a key/template mapping.
///
/// Each item is one line without its terminator. Lines are taken as bytes so
/// that a line with invalid UTF-8 can be reported and skipped without losing
/// the rest of the file.
///
/// `source` is used for log context only.
pub fn parse_lines<I, L>(lines: I, source: &Path) -> ParseResult
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let mut result = ParseResult::default();

    for (line_idx, raw) in lines.into_iter().enumerate() {
        result.lines_processed += 1;
        let line_number = (line_idx as u64) + 1;

        let mut bytes = raw.as_ref();
        if line_idx == 0 {
            bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        }

        if !bytes.contains(&(constants::KEY_SEPARATOR as u8)) {
            continue;
        }
        let first = bytes.iter().find(|&&b| b > b' ');
        if first == Some(&(constants::COMMENT_PREFIX as u8)) {
            continue;
        }

        match split_line(bytes) {
            Ok((key, value)) => {
                if let Some(previous) = result.entries.insert(key.to_string(), value.to_string())
                {
                    tracing::trace!(
                        key,
                        line = line_number,
                        previous = %previous,
                        "Duplicate message key, later value wins"
                    );
                }
            }
            Err(reason) => {
                tracing::debug!(
                    file = %source.display(),
                    line = line_number,
                    reason = %reason,
                    "Skipping malformed message line"
                );
                result.warnings.push(LoadWarning::MalformedLine {
                    line_number,
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        file = %source.display(),
        entries = result.entries.len(),
        warnings = result.warnings.len(),
        lines = result.lines_processed,
        "Parsing complete"
    );

    result
}

/// Parse a whole catalog source held in memory as bytes.
pub fn parse_bytes(content: &[u8], source: &Path) -> ParseResult {
    parse_lines(split_lines(content), source)
}

/// Parse an in-memory catalog source.
pub fn parse_str(content: &str, source: &Path) -> ParseResult {
    parse_bytes(content.as_bytes(), source)
}

/// Split raw content into lines at `\n`, `\r\n`, or a lone `\r`.
///
/// A terminator at the very end does not produce a trailing empty line.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < content.len() {
        match content[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                if content.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Strip characters up to and including U+0020 from both ends.
pub fn trim_line(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Split one colon-bearing, non-comment line into trimmed `(key, template)`.
fn split_line(bytes: &[u8]) -> Result<(&str, &str), String> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| format!("invalid UTF-8 ({e}) in \"{}\"", preview(bytes)))?;
    let line = trim_line(text);

    let (key, value) = line.split_once(constants::KEY_SEPARATOR).ok_or_else(|| {
        format!(
            "no '{}' separator in \"{}\"",
            constants::KEY_SEPARATOR,
            preview(bytes)
        )
    })?;

    Ok((trim_line(key), trim_line(value)))
}

/// Lossy, length-limited rendering of a line for diagnostics.
fn preview(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let text = trim_line(&text);
    match text.char_indices().nth(constants::MAX_LINE_PREVIEW) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> ParseResult {
        parse_str(content, Path::new("test.txt"))
    }

    #[test]
    fn test_key_and_value_are_trimmed() {
        let result = parse("  greeting :   Hello there  \n");
        assert_eq!(result.entries.get("greeting").map(String::as_str), Some("Hello there"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_no_space_around_separator() {
        let result = parse("another.key:value, spaces trimmed");
        assert_eq!(
            result.entries.get("another.key").map(String::as_str),
            Some("value, spaces trimmed")
        );
    }

    #[test]
    fn test_comment_lines_never_loaded() {
        let result = parse("# note: not a message\n   #indented: comment\nkey: v");
        assert_eq!(result.entries.len(), 1);
        assert!(!result.entries.contains_key("# note"));
        assert!(!result.entries.contains_key("#indented"));
    }

    #[test]
    fn test_lines_without_separator_ignored() {
        let result = parse("just some words\n\n   \nkey: v\n");
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.lines_processed, 4);
    }

    #[test]
    fn test_split_on_first_separator_only() {
        let result = parse("a:b:c\nurl: http://example.com:8080/x");
        assert_eq!(result.entries.get("a").map(String::as_str), Some("b:c"));
        assert_eq!(
            result.entries.get("url").map(String::as_str),
            Some("http://example.com:8080/x")
        );
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let result = parse("k:1\nother: x\nk:2\n");
        assert_eq!(result.entries.get("k").map(String::as_str), Some("2"));
        assert_eq!(result.entries.len(), 2);
    }

    #[test]
    fn test_empty_key_and_empty_value_are_entries() {
        let result = parse(": orphan value\nblank:\n");
        assert_eq!(result.entries.get("").map(String::as_str), Some("orphan value"));
        assert_eq!(result.entries.get("blank").map(String::as_str), Some(""));
    }

    #[test]
    fn test_crlf_line_endings() {
        let result = parse("k1: one\r\nk2: two\r\n");
        assert_eq!(result.entries.get("k1").map(String::as_str), Some("one"));
        assert_eq!(result.entries.get("k2").map(String::as_str), Some("two"));
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        let result = parse("a: 1\rb: 2");
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries.get("a").map(String::as_str), Some("1"));
        assert_eq!(result.entries.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_mixed_line_endings_keep_every_key() {
        let result = parse("k: abc\rb: 2\nc: 3\r\nd: 4\n");
        assert_eq!(result.entries.get("k").map(String::as_str), Some("abc"));
        assert_eq!(result.entries.len(), 4);
        assert_eq!(result.lines_processed, 4);
    }

    #[test]
    fn test_split_lines_terminators() {
        let lines = split_lines(b"a\r\n\rb\n\nc\r");
        assert_eq!(lines, vec![&b"a"[..], &b""[..], &b"b"[..], &b""[..], &b"c"[..]]);
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn test_non_breaking_space_is_content() {
        let result = parse("nbsp: \u{00A0}\n\u{00A0}key\u{00A0}: value\n");
        assert_eq!(result.entries.get("nbsp").map(String::as_str), Some("\u{00A0}"));
        assert_eq!(
            result.entries.get("\u{00A0}key\u{00A0}").map(String::as_str),
            Some("value")
        );
    }

    #[test]
    fn test_control_characters_trimmed() {
        let result = parse("\u{0B}\0key:\tvalue\u{1F}\n");
        assert_eq!(result.entries.get("key").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_bom_stripped_from_first_line() {
        let result = parse("\u{FEFF}first: value\n");
        assert_eq!(result.entries.get("first").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_invalid_utf8_colon_line_is_malformed_and_skipped() {
        let lines: Vec<&[u8]> = vec![&b"good: yes"[..], &b"bad: \xFF\xFE here"[..], &b"also: fine"[..]];
        let result = parse_lines(lines, Path::new("bytes.txt"));

        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.warnings.len(), 1);
        match &result.warnings[0] {
            LoadWarning::MalformedLine { line_number, reason } => {
                assert_eq!(*line_number, 2);
                assert!(reason.contains("invalid UTF-8"), "got: {reason}");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_without_separator_is_silent() {
        let lines: Vec<&[u8]> = vec![&b"\xFF\xFF no separator"[..], &b"k: v"[..]];
        let result = parse_lines(lines, Path::new("bytes.txt"));
        assert!(result.warnings.is_empty());
        assert_eq!(result.entries.len(), 1);
    }

    #[test]
    fn test_escape_markers_are_stored_raw() {
        let result = parse("greeting: Hello&&World, &User&");
        assert_eq!(
            result.entries.get("greeting").map(String::as_str),
            Some("Hello&&World, &User&")
        );
    }

    #[test]
    fn test_preview_truncates_long_lines() {
        let long = "x".repeat(constants::MAX_LINE_PREVIEW + 20);
        let p = preview(long.as_bytes());
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), constants::MAX_LINE_PREVIEW + 3);
    }
}
