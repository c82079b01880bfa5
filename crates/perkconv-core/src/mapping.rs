//! Mapping file loader
//!
//! The mapping file is plain text, one entry per line. Two forms are
//! accepted:
//! - `NN_name`: the whole line is the target name; the needle is the line
//!   with its numeric prefix dropped, lowercased.
//! - `target;NN_name`: the target name comes from the first segment, the
//!   needle from the second segment's suffix.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Width of the discarded numeric prefix on a needle source (e.g. `01_`).
pub const PREFIX_LEN: usize = 3;

/// One line of the mapping file: a desired output name and the substring
/// used to locate its source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Destination base name, without extension
    pub target: String,
    /// Lowercased substring searched for within candidate file paths
    pub needle: String,
    /// The line as it appeared in the mapping file
    pub raw: String,
}

impl MappingEntry {
    /// The raw line split on `;`, for reporting unmatched entries the way
    /// they were written
    pub fn segments(&self) -> Vec<&str> {
        self.raw.split(';').collect()
    }
}

/// Load mapping entries from a file
pub fn load_mapping<P: AsRef<Path>>(path: P) -> Result<Vec<MappingEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::MappingRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_mapping_str(&content, path)
}

/// Parse mapping entries from a string (useful for testing)
pub fn parse_mapping_str<P: AsRef<Path>>(content: &str, source_name: P) -> Result<Vec<MappingEntry>> {
    let source_name = source_name.as_ref();
    let content = content.replace('\r', "");

    let mut entries = Vec::new();
    for (idx, line) in content.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let line_no = idx + 1;
        let entry = parse_line(line).map_err(|message| Error::MappingLine {
            path: source_name.to_path_buf(),
            line: line_no,
            message,
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Parse a single non-empty line into an entry, or a diagnostic message
fn parse_line(line: &str) -> std::result::Result<MappingEntry, String> {
    let (target, needle_source) = if line.contains(';') {
        let segments: Vec<&str> = line.split(';').collect();
        if segments.len() != 2 {
            return Err(format!(
                "expected 'target;source' with exactly two segments, found {}",
                segments.len()
            ));
        }
        (segments[0], segments[1])
    } else {
        (line, line)
    };

    let needle = strip_prefix(needle_source)?;
    Ok(MappingEntry {
        target: target.to_string(),
        needle,
        raw: line.to_string(),
    })
}

/// Drop the fixed-width prefix and lowercase the remainder
fn strip_prefix(source: &str) -> std::result::Result<String, String> {
    match source.get(PREFIX_LEN..) {
        Some(rest) if !rest.is_empty() => Ok(rest.to_lowercase()),
        Some(_) => Err(format!(
            "nothing left after the {}-character prefix in '{}'",
            PREFIX_LEN, source
        )),
        None => Err(format!(
            "'{}' is shorter than the {}-character prefix",
            source, PREFIX_LEN
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_line() {
        let entries = parse_mapping_str("01_Fireball\n", "map.txt").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].target, "01_Fireball");
        assert_eq!(entries[0].needle, "fireball");
        assert_eq!(entries[0].raw, "01_Fireball");
    }

    #[test]
    fn test_parse_renamed_line() {
        let entries = parse_mapping_str("icebolt;02_Ice_Bolt\n", "map.txt").unwrap();
        assert_eq!(entries[0].target, "icebolt");
        assert_eq!(entries[0].needle, "ice_bolt");
        assert_eq!(entries[0].segments(), vec!["icebolt", "02_Ice_Bolt"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let entries = parse_mapping_str("01_one\n\n  \n02_two\n", "map.txt").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].needle, "two");
    }

    #[test]
    fn test_parse_normalizes_crlf() {
        let entries = parse_mapping_str("01_one\r\n02_two\r\n", "map.txt").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].needle, "one");
    }

    #[test]
    fn test_parse_rejects_short_line() {
        let err = parse_mapping_str("01\n", "map.txt").unwrap_err();
        match err {
            Error::MappingLine { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_needle() {
        // Exactly the prefix and nothing else would leave an empty needle,
        // which matches every file
        assert!(parse_mapping_str("01_\n", "map.txt").is_err());
    }

    #[test]
    fn test_parse_rejects_extra_segments() {
        let err = parse_mapping_str("a;01_b;01_c\n", "map.txt").unwrap_err();
        match err {
            Error::MappingLine { line, message, .. } => {
                assert_eq!(line, 1);
                assert!(message.contains("two segments"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_carries_line_number() {
        let err = parse_mapping_str("01_ok\n02_also_ok\nxx\n", "map.txt").unwrap_err();
        match err {
            Error::MappingLine { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_needle_is_lowercased() {
        let entries = parse_mapping_str("07_IconShield\n", "map.txt").unwrap();
        assert_eq!(entries[0].needle, "iconshield");
        assert_eq!(entries[0].target, "07_IconShield");
    }
}
