use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One dataset entry: an opaque mapping of field name to value.
///
/// The core does not own a record schema. It reads at most two logical
/// fields from the mapping: a timestamp, located by checking an ordered
/// list of candidate field names, and an initial confidence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    inner: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Record { inner: Map::new() }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Value of the first candidate field present on the record.
    ///
    /// First match wins even when its value turns out to be unusable;
    /// later candidates are never consulted once a field is found.
    pub fn timestamp_value<S: AsRef<str>>(&self, candidates: &[S]) -> Option<&Value> {
        candidates
            .iter()
            .find_map(|field| self.inner.get(field.as_ref()))
    }

    /// Initial confidence carried by the record.
    ///
    /// A missing field defaults to 1.0. A present but non-numeric value
    /// yields `None`; range validation is left to the decay engine.
    pub fn initial_confidence(&self, field: &str) -> Option<f64> {
        match self.inner.get(field) {
            None => Some(1.0),
            Some(Value::Number(n)) => n.as_f64(),
            Some(_) => None,
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(inner: Map<String, Value>) -> Self {
        Record { inner }
    }
}
