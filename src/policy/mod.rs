pub mod registry;

pub use registry::{policy_keys, resolve, DecayPolicy};
