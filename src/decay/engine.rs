use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::decay::age::{age_in_days, Timestamp, TimestampError};
use crate::policy;

#[derive(Debug, Error)]
pub enum DecayError {
    #[error("Initial confidence must be within [0.0, 1.0], got {0}")]
    InvalidConfidence(f64),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// Explicit decay parameters, taking precedence over the policy registry.
///
/// Carries both parameters by construction: there is no partial-override
/// mode. Expected ranges are `rate_per_day >= 0` and `floor` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayOverride {
    pub rate_per_day: f64,
    pub floor: f64,
}

/// Apply bounded exponential decay to an initial confidence.
///
/// `result = clamp(initial × e^(−rate × age), floor, 1.0)`. The floor is a
/// hard lower bound modeling irreducible residual trust; 1.0 is a hard
/// upper bound so decay never increases confidence. A rate of exactly 0
/// reduces to `clamp(initial, floor, 1.0)` at every age.
pub fn decayed_confidence(
    initial_confidence: f64,
    age_days: f64,
    rate_per_day: f64,
    floor: f64,
) -> Result<f64, DecayError> {
    if !(0.0..=1.0).contains(&initial_confidence) {
        return Err(DecayError::InvalidConfidence(initial_confidence));
    }

    let decayed = initial_confidence * (-rate_per_day * age_days).exp();
    let result = decayed.max(floor).min(1.0);
    debug_assert!(
        (0.0..=1.0).contains(&result),
        "confidence {result} out of range [0.0, 1.0]"
    );
    Ok(result)
}

/// Current confidence of a claim captured at `timestamp`, evaluated at `now`.
///
/// When `overrides` is present its parameters replace the policy registry
/// entirely; otherwise the policy is resolved from `topic` (unknown labels
/// fall back to the default policy). Pure given valid inputs: identical
/// arguments always yield the identical numeric result.
pub fn current_confidence(
    initial_confidence: f64,
    timestamp: &Timestamp,
    topic: &str,
    overrides: Option<DecayOverride>,
    now: DateTime<Utc>,
) -> Result<f64, DecayError> {
    if !(0.0..=1.0).contains(&initial_confidence) {
        return Err(DecayError::InvalidConfidence(initial_confidence));
    }

    let (rate_per_day, floor) = match overrides {
        Some(o) => (o.rate_per_day, o.floor),
        None => {
            let p = policy::resolve(topic);
            (p.rate_per_day, p.floor)
        }
    };

    let instant = timestamp.instant()?;
    let age = age_in_days(instant, now);
    decayed_confidence(initial_confidence, age, rate_per_day, floor)
}

/// [`current_confidence`] evaluated at the current wall-clock instant.
pub fn current_confidence_now(
    initial_confidence: f64,
    timestamp: &Timestamp,
    topic: &str,
    overrides: Option<DecayOverride>,
) -> Result<f64, DecayError> {
    current_confidence(initial_confidence, timestamp, topic, overrides, Utc::now())
}
