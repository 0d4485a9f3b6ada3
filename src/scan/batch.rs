use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decay::{age_in_days, decayed_confidence, parse_instant};
use crate::policy;
use crate::types::Record;

/// Candidate timestamp fields consulted by [`evaluate`], in order.
const BATCH_TIMESTAMP_FIELDS: &[&str] = &["timestamp", "created_at", "date"];

/// Reduced staleness summary for an already-materialized collection.
///
/// Counts cover evaluated records only: an entry without a usable timestamp,
/// or one that fails scoring, is skipped from every count, so
/// `total_entries == stale_entries + fresh_entries` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_entries: usize,
    pub stale_entries: usize,
    pub fresh_entries: usize,
    /// Positions of stale records in the input collection.
    pub stale_indices: Vec<usize>,
    /// Computed confidences of evaluated records, in encounter order.
    pub confidences: Vec<f64>,
}

/// Classify an in-memory collection against `threshold`.
///
/// Same decay computation and exclusive threshold comparison as
/// [`DatasetScanner`](crate::scan::DatasetScanner), with a lighter result
/// shape suited for embedding in a larger pipeline.
pub fn evaluate(
    records: &[Record],
    topic: &str,
    threshold: f64,
    now: DateTime<Utc>,
) -> BatchSummary {
    let policy = policy::resolve(topic);

    let mut summary = BatchSummary {
        total_entries: 0,
        stale_entries: 0,
        fresh_entries: 0,
        stale_indices: Vec::new(),
        confidences: Vec::new(),
    };

    for (index, record) in records.iter().enumerate() {
        let raw = match record.timestamp_value(BATCH_TIMESTAMP_FIELDS) {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => continue,
        };
        let Some(initial) = record.initial_confidence("confidence") else {
            continue;
        };
        let Ok(instant) = parse_instant(raw) else {
            continue;
        };
        let Ok(confidence) = decayed_confidence(
            initial,
            age_in_days(instant, now),
            policy.rate_per_day,
            policy.floor,
        ) else {
            continue;
        };

        summary.total_entries += 1;
        summary.confidences.push(confidence);
        if confidence < threshold {
            summary.stale_entries += 1;
            summary.stale_indices.push(index);
        } else {
            summary.fresh_entries += 1;
        }
    }

    summary
}

/// [`evaluate`] at the current wall-clock instant.
pub fn evaluate_now(records: &[Record], topic: &str, threshold: f64) -> BatchSummary {
    evaluate(records, topic, threshold, Utc::now())
}
