//! Machine-readable record of a single run

use crate::copier::{CopyFailure, CopyReport};
use crate::error::{Error, Result};
use crate::mapping::MappingEntry;
use crate::matcher::{MatchOutcome, MatchPair};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything that happened in one run, serializable as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Input directory that was scanned
    pub input_dir: PathBuf,
    /// Output directory the copies were planned into
    pub output_dir: PathBuf,
    /// Mapping file that drove the run
    pub mapping_file: PathBuf,
    /// Number of paths found under the input directory
    pub files_scanned: usize,
    /// Planned copies, in mapping-file order
    pub matched: Vec<MatchPair>,
    /// Entries with no matching input file
    pub missing: Vec<MappingEntry>,
    /// Number of files copied successfully
    pub copied: usize,
    /// Copies that failed
    pub copy_failures: Vec<CopyFailure>,
}

impl RunReport {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        mapping_file: impl Into<PathBuf>,
        files_scanned: usize,
        outcome: MatchOutcome,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            mapping_file: mapping_file.into(),
            files_scanned,
            matched: outcome.matched,
            missing: outcome.missing,
            copied: 0,
            copy_failures: Vec::new(),
        }
    }

    /// Fold the copy stage's outcome into the report
    pub fn record_copies(&mut self, report: CopyReport) {
        self.copied = report.copied;
        self.copy_failures = report.failures;
    }

    /// Save the report as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load a previously saved report
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(Error::Io)?;
        serde_json::from_str(&content).map_err(Error::Json)
    }
}
