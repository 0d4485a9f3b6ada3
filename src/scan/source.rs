use crate::types::{Record, ScanError};

/// Decode dataset text into records, detecting the framing by trial.
///
/// A whole-document parse is attempted first: a JSON array of record
/// objects, or one bare object treated as a single-element collection. When
/// neither applies, the text is read as newline-delimited JSON where every
/// non-blank line must decode as an independent object; a single bad line
/// fails the whole decode.
pub fn decode_records(text: &str) -> Result<Vec<Record>, ScanError> {
    if let Ok(records) = serde_json::from_str::<Vec<Record>>(text) {
        return Ok(records);
    }
    if let Ok(record) = serde_json::from_str::<Record>(text) {
        return Ok(vec![record]);
    }
    decode_lines(text)
}

fn decode_lines(text: &str) -> Result<Vec<Record>, ScanError> {
    let mut records = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records.push(serde_json::from_str::<Record>(line)?);
    }
    Ok(records)
}
