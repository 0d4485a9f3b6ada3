pub mod age;
pub mod engine;

pub use age::{age_in_days, parse_instant, Timestamp, TimestampError};
pub use engine::{
    current_confidence, current_confidence_now, decayed_confidence, DecayError, DecayOverride,
};
