use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stale record flagged during a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// 0-based position of the record in the input sequence.
    pub index: usize,
    /// The record's raw timestamp value, as text.
    pub timestamp: String,
    /// Computed age in days, rounded to one decimal place.
    pub age_days: f64,
    /// Computed confidence, rounded to three decimal places.
    pub confidence: f64,
    pub reason: String,
}

/// Aggregate outcome of a dataset scan.
///
/// Fully self-contained and serializable: exporting a report and re-reading
/// it reproduces identical counts and the alert list in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub total_entries: usize,
    pub stale_entries: usize,
    pub fresh_entries: usize,
    pub unparseable_entries: usize,

    /// Statistics over successfully scored records only.
    /// With zero scored records these hold 0.0 / 1.0 / 0.0.
    pub average_confidence: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,

    /// One alert per stale record, in encounter order.
    pub alerts: Vec<Alert>,

    /// Display name of the decay policy the scan resolved.
    pub policy: String,
    /// Human-readable multi-line digest of the counts above.
    pub summary: String,
}

impl ScanReport {
    /// Write the report to `path` as a single pretty-printed JSON document.
    pub fn export(&self, path: &Path) -> Result<(), ScanError> {
        let f = fs::File::create(path)?;
        serde_json::to_writer_pretty(&f, self)?;
        f.sync_all()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Dataset not found: {0}")]
    FileNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Dataset is not valid JSON or JSON lines: {0}")]
    Decode(#[from] serde_json::Error),
}
