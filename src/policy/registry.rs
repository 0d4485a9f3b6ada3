/// Decay parameters for one topic class.
///
/// Immutable value: `resolve` hands out copies of a read-only static table
/// and nothing ever writes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayPolicy {
    /// Exponential decay constant, per 86 400-second day. Always >= 0.
    pub rate_per_day: f64,
    /// Minimum attainable confidence, in [0, 1].
    pub floor: f64,
    /// Display name.
    pub name: &'static str,
    pub description: &'static str,
}

/// Built-in policies, in canonical listing order.
const BUILTIN: [(&str, DecayPolicy); 9] = [
    (
        "news",
        DecayPolicy {
            rate_per_day: 0.10,
            floor: 0.05,
            name: "Fast decay (news)",
            description: "News and current events become stale quickly",
        },
    ),
    (
        "science",
        DecayPolicy {
            rate_per_day: 0.002,
            floor: 0.30,
            name: "Slow decay (science)",
            description: "Scientific facts change slowly",
        },
    ),
    (
        "code",
        DecayPolicy {
            rate_per_day: 0.005,
            floor: 0.20,
            name: "Medium decay (code)",
            description: "Code examples and APIs evolve moderately",
        },
    ),
    (
        "legal",
        DecayPolicy {
            rate_per_day: 0.001,
            floor: 0.40,
            name: "Very slow decay (legal)",
            description: "Legal precedents are highly stable",
        },
    ),
    (
        "history",
        DecayPolicy {
            rate_per_day: 0.0,
            floor: 1.00,
            name: "No decay (history)",
            description: "Historical facts don't change",
        },
    ),
    (
        "medical",
        DecayPolicy {
            rate_per_day: 0.015,
            floor: 0.25,
            name: "Medical guidelines",
            description: "Medical knowledge updates regularly",
        },
    ),
    (
        "ai_training",
        DecayPolicy {
            rate_per_day: 0.02,
            floor: 0.15,
            name: "AI training data",
            description: "AI/ML best practices evolve rapidly",
        },
    ),
    (
        "social_media",
        DecayPolicy {
            rate_per_day: 0.15,
            floor: 0.02,
            name: "Social media content",
            description: "Social media trends change extremely fast",
        },
    ),
    (
        "financial",
        DecayPolicy {
            rate_per_day: 0.08,
            floor: 0.10,
            name: "Financial data",
            description: "Market data and financial info changes quickly",
        },
    ),
];

const DEFAULT_POLICY: DecayPolicy = DecayPolicy {
    rate_per_day: 0.01,
    floor: 0.20,
    name: "Default decay",
    description: "General purpose decay rate",
};

/// Look up the decay policy for a topic label, case-insensitively.
///
/// Unrecognized labels are not an error: they resolve to the fixed default
/// policy (rate 0.01/day, floor 0.20).
pub fn resolve(topic: &str) -> DecayPolicy {
    BUILTIN
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(topic))
        .map(|(_, policy)| *policy)
        .unwrap_or(DEFAULT_POLICY)
}

/// The nine canonical policy keys, in fixed listing order.
pub fn policy_keys() -> [&'static str; 9] {
    BUILTIN.map(|(key, _)| key)
}
