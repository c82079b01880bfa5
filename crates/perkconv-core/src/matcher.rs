//! Substring matching of mapping entries against the input file list

use crate::mapping::MappingEntry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A planned copy: matched source file and its destination path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    /// Matched input file
    pub source: PathBuf,
    /// `<output_dir>/<target>.png`
    pub dest: PathBuf,
    /// Destination base name the pair was planned for
    pub target: String,
}

/// Result of matching all mapping entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Entries with a matched source, in mapping-file order
    pub matched: Vec<MatchPair>,
    /// Entries with no matching file
    pub missing: Vec<MappingEntry>,
}

impl MatchOutcome {
    pub fn all_matched(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Find the first file whose lowercased path contains the entry's needle.
/// Later matches are ignored, so the result is stable for a fixed listing
/// order.
pub fn find_match<'a>(entry: &MappingEntry, files: &'a [PathBuf]) -> Option<&'a PathBuf> {
    files.iter().find(|f| {
        let haystack = f.to_string_lossy().to_lowercase();
        haystack.contains(&entry.needle)
    })
}

/// Plan copies for every mapping entry against the listed files.
///
/// No copying happens here; callers must refuse to copy anything when
/// `missing` is non-empty so a bad mapping never partially populates the
/// output directory.
pub fn plan_copies<P: AsRef<Path>>(
    entries: &[MappingEntry],
    files: &[PathBuf],
    output_dir: P,
) -> MatchOutcome {
    let output_dir = output_dir.as_ref();
    let mut outcome = MatchOutcome::default();

    for entry in entries {
        match find_match(entry, files) {
            Some(source) => outcome.matched.push(MatchPair {
                source: source.clone(),
                dest: output_dir.join(format!("{}.png", entry.target)),
                target: entry.target.clone(),
            }),
            None => outcome.missing.push(entry.clone()),
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::parse_mapping_str;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let entries = parse_mapping_str("01_fireball\n", "map.txt").unwrap();
        let files = paths(&["assets/Weapon_FIREBALL_icon.png"]);

        let outcome = plan_copies(&entries, &files, "out");
        assert!(outcome.all_matched());
        assert_eq!(outcome.matched[0].source, files[0]);
    }

    #[test]
    fn test_first_match_wins() {
        let entries = parse_mapping_str("01_bolt\n", "map.txt").unwrap();
        let files = paths(&["a/bolt_old.png", "b/bolt_new.png"]);

        let outcome = plan_copies(&entries, &files, "out");
        assert_eq!(outcome.matched[0].source, PathBuf::from("a/bolt_old.png"));
    }

    #[test]
    fn test_destination_path_shape() {
        let entries = parse_mapping_str("renamed;02_orig\n", "map.txt").unwrap();
        let files = paths(&["icons/orig_v2.png"]);

        let outcome = plan_copies(&entries, &files, "out");
        assert_eq!(outcome.matched[0].dest, PathBuf::from("out/renamed.png"));
        assert_eq!(outcome.matched[0].target, "renamed");
    }

    #[test]
    fn test_unmatched_entries_are_collected() {
        let entries = parse_mapping_str("01_hit\n02_nothing_like_this\n", "map.txt").unwrap();
        let files = paths(&["icons/hit.png"]);

        let outcome = plan_copies(&entries, &files, "out");
        assert_eq!(outcome.matched.len(), 1);
        assert_eq!(outcome.missing.len(), 1);
        assert_eq!(outcome.missing[0].needle, "nothing_like_this");
    }

    #[test]
    fn test_needle_matches_directory_components() {
        // The needle is searched in the whole path, not just the file name
        let entries = parse_mapping_str("01_fire\n", "map.txt").unwrap();
        let files = paths(&["fire/icon_a.png"]);

        let outcome = plan_copies(&entries, &files, "out");
        assert!(outcome.all_matched());
    }

    #[test]
    fn test_empty_file_list_leaves_all_missing() {
        let entries = parse_mapping_str("01_a\n02_b\n", "map.txt").unwrap();
        let outcome = plan_copies(&entries, &[], "out");
        assert!(outcome.matched.is_empty());
        assert_eq!(outcome.missing.len(), 2);
    }
}
