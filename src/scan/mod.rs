pub mod batch;
pub mod source;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::decay::{age_in_days, decayed_confidence, parse_instant};
use crate::policy::{self, DecayPolicy};
use crate::types::{Alert, Record, ScanError, ScanReport};

pub use batch::{evaluate, evaluate_now, BatchSummary};
pub use source::decode_records;

/// Default candidate timestamp fields, checked in order; first present wins.
pub const DEFAULT_TIMESTAMP_FIELDS: [&str; 5] =
    ["timestamp", "created_at", "date", "captured_at", "updated_at"];

/// Default field holding a record's initial confidence.
pub const DEFAULT_CONFIDENCE_FIELD: &str = "confidence";

/// Parameters governing one dataset scan.
///
/// One policy applies uniformly to every record in a scan; mixing policies
/// within a scan is not supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Topic label resolved against the policy registry.
    pub topic: String,
    /// Stale/fresh cutoff in [0, 1]. Confidence strictly below is stale.
    pub threshold: f64,
    /// Candidate timestamp fields, checked in order.
    pub timestamp_fields: Vec<String>,
    /// Field holding the initial confidence. A missing value reads as 1.0.
    pub confidence_field: String,
}

impl ScanConfig {
    /// Config with the documented default field names.
    pub fn new(topic: impl Into<String>, threshold: f64) -> Self {
        Self {
            topic: topic.into(),
            threshold,
            timestamp_fields: DEFAULT_TIMESTAMP_FIELDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            confidence_field: DEFAULT_CONFIDENCE_FIELD.to_string(),
        }
    }
}

/// Scans record collections for entries that have decayed below threshold.
///
/// Records are processed strictly sequentially in encounter order. A record
/// that cannot be scored (no candidate timestamp field, unusable timestamp
/// value, or invalid confidence) degrades to unparseable and never aborts
/// the scan.
pub struct DatasetScanner {
    config: ScanConfig,
}

impl DatasetScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan a JSON or JSON-lines dataset file at the current wall-clock
    /// instant.
    pub fn scan_path(&self, path: &Path) -> Result<ScanReport, ScanError> {
        self.scan_path_at(path, Utc::now())
    }

    /// Scan a dataset file with an explicit evaluation instant.
    ///
    /// A missing file reports [`ScanError::FileNotFound`]; input that is
    /// neither a JSON document nor JSON lines reports [`ScanError::Decode`].
    pub fn scan_path_at(&self, path: &Path, now: DateTime<Utc>) -> Result<ScanReport, ScanError> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ScanError::FileNotFound(path.to_path_buf())
            } else {
                ScanError::Io(e)
            }
        })?;
        let records = source::decode_records(&text)?;
        Ok(self.scan_records(&records, now))
    }

    /// Scan already-decoded records with an explicit evaluation instant.
    pub fn scan_records(&self, records: &[Record], now: DateTime<Utc>) -> ScanReport {
        let policy = policy::resolve(&self.config.topic);
        let threshold = self.config.threshold;

        let mut stale = 0usize;
        let mut fresh = 0usize;
        let mut unparseable = 0usize;
        let mut alerts = Vec::new();

        let mut min_confidence = 1.0f64;
        let mut max_confidence = 0.0f64;
        let mut confidence_sum = 0.0f64;
        let mut scored = 0usize;

        for (index, record) in records.iter().enumerate() {
            let Some((raw, age_days, confidence)) =
                self.score_record(record, policy, now)
            else {
                unparseable += 1;
                trace!(index, "record degraded to unparseable");
                continue;
            };

            min_confidence = min_confidence.min(confidence);
            max_confidence = max_confidence.max(confidence);
            confidence_sum += confidence;
            scored += 1;

            if confidence < threshold {
                stale += 1;
                alerts.push(Alert {
                    index,
                    timestamp: raw,
                    age_days: round1(age_days),
                    confidence: round3(confidence),
                    reason: format!(
                        "Confidence {:.0}% below threshold {:.0}%",
                        confidence * 100.0,
                        threshold * 100.0
                    ),
                });
            } else {
                fresh += 1;
            }
        }

        let average_confidence = if scored == 0 {
            0.0
        } else {
            confidence_sum / scored as f64
        };

        debug!(
            total = records.len(),
            stale,
            fresh,
            unparseable,
            policy = policy.name,
            "dataset scan complete"
        );

        let mut report = ScanReport {
            total_entries: records.len(),
            stale_entries: stale,
            fresh_entries: fresh,
            unparseable_entries: unparseable,
            average_confidence,
            min_confidence,
            max_confidence,
            alerts,
            policy: policy.name.to_string(),
            summary: String::new(),
        };
        report.summary = render_summary(&report, threshold);
        report
    }

    /// Extract and score one record: raw timestamp text, age in days, and
    /// current confidence. `None` means the record is unparseable.
    fn score_record(
        &self,
        record: &Record,
        policy: DecayPolicy,
        now: DateTime<Utc>,
    ) -> Option<(String, f64, f64)> {
        let raw = match record.timestamp_value(&self.config.timestamp_fields)? {
            Value::String(s) if !s.is_empty() => s.clone(),
            _ => return None,
        };
        let initial = record.initial_confidence(&self.config.confidence_field)?;
        let instant = parse_instant(&raw).ok()?;
        let age_days = age_in_days(instant, now);
        let confidence =
            decayed_confidence(initial, age_days, policy.rate_per_day, policy.floor).ok()?;
        Some((raw, age_days, confidence))
    }
}

fn render_summary(report: &ScanReport, threshold: f64) -> String {
    format!(
        "Dataset Analysis Results\n\
         {}\n\
         Total entries: {}\n\
         Fresh entries: {} ({:.1}%)\n\
         Stale entries: {} ({:.1}%)\n\
         Unparseable entries: {} ({:.1}%)\n\
         Average confidence: {:.1}%\n\
         Confidence range: {:.1}% - {:.1}%\n\
         Decay policy: {}\n\
         Threshold: {:.0}%\n\
         Alerts: {} entries need review",
        "=".repeat(50),
        report.total_entries,
        report.fresh_entries,
        pct(report.fresh_entries, report.total_entries),
        report.stale_entries,
        pct(report.stale_entries, report.total_entries),
        report.unparseable_entries,
        pct(report.unparseable_entries, report.total_entries),
        report.average_confidence * 100.0,
        report.min_confidence * 100.0,
        report.max_confidence * 100.0,
        report.policy,
        threshold * 100.0,
        report.alerts.len(),
    )
}

/// Aggregate ratio as a percentage; 0 when the denominator is 0.
fn pct(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
