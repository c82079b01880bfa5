//! perkconv-core: Core library for relabeling perk icons by name mapping
//!
//! This library provides functionality to:
//! - Load a text mapping file of `NN_name` / `target;NN_name` entries
//! - Recursively list candidate files under an input directory
//! - Match each entry to the first file whose path contains its needle
//! - Copy matched files to `<output>/<target>.png`, batching failures
//! - Persist a JSON report of a run

pub mod copier;
pub mod error;
pub mod mapping;
pub mod matcher;
pub mod report;
pub mod scanner;

pub use copier::{copy_all, copy_file, copy_matched, CopyFailure, CopyReport};
pub use error::{Error, Result};
pub use mapping::{load_mapping, parse_mapping_str, MappingEntry, PREFIX_LEN};
pub use matcher::{find_match, plan_copies, MatchOutcome, MatchPair};
pub use report::RunReport;
pub use scanner::list_files;
