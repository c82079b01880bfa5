//! File copying with batched, non-fatal per-file failures

use crate::error::{Error, Result};
use crate::matcher::{MatchOutcome, MatchPair};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// A copy that failed, kept for the end-of-run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub message: String,
}

/// Outcome of a copy batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopyReport {
    /// Number of files copied successfully
    pub copied: usize,
    /// Pairs that could not be copied
    pub failures: Vec<CopyFailure>,
}

/// Copy one file's bytes to `dst`, creating or truncating it.
///
/// The source must be a regular file. Both handles are scope-bound and
/// closed whether the copy succeeds or not.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<u64> {
    let src = src.as_ref();
    let meta = fs::metadata(src).map_err(|e| Error::Copy {
        source_path: src.to_path_buf(),
        source: e,
    })?;
    if !meta.is_file() {
        return Err(Error::NotRegularFile(src.to_path_buf()));
    }

    let mut reader = File::open(src).map_err(|e| Error::Copy {
        source_path: src.to_path_buf(),
        source: e,
    })?;
    let mut writer = File::create(dst)?;
    let bytes = io::copy(&mut reader, &mut writer)?;
    Ok(bytes)
}

/// Run every planned copy, collecting failures instead of aborting.
///
/// `on_copied` fires after each attempt, success or not, so callers can
/// drive a progress display.
pub fn copy_all<F>(pairs: &[MatchPair], mut on_copied: F) -> CopyReport
where
    F: FnMut(&MatchPair),
{
    let mut report = CopyReport::default();

    for pair in pairs {
        match copy_file(&pair.source, &pair.dest) {
            Ok(_) => report.copied += 1,
            Err(e) => report.failures.push(CopyFailure {
                source: pair.source.clone(),
                dest: pair.dest.clone(),
                message: e.to_string(),
            }),
        }
        on_copied(pair);
    }

    report
}

/// Run the copy stage for a match outcome.
///
/// Refuses outright while any entry is unmatched: a bad mapping must never
/// partially populate the output directory. Returns `None` without touching
/// the filesystem in that case.
pub fn copy_matched<F>(outcome: &MatchOutcome, on_copied: F) -> Option<CopyReport>
where
    F: FnMut(&MatchPair),
{
    if !outcome.all_matched() {
        return None;
    }
    Some(copy_all(&outcome.matched, on_copied))
}
