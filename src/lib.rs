//! Temporal decay engine for flagging stale records in timestamped datasets.
//!
//! `freshness-core` models how the confidence in a piece of information
//! erodes as it ages: a topic-specific decay policy, a bounded exponential
//! decay formula, and scanners that classify whole collections of records as
//! fresh, stale, or unparseable. All scoring is deterministic given an
//! explicit evaluation instant — identical inputs always produce identical
//! results.
//!
//! The crate is a pure core: it never prints, parses arguments, or decides
//! process exit codes. Those concerns belong to the surrounding tooling.

pub mod decay;
pub mod policy;
pub mod scan;
pub mod types;
