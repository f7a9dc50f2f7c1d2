//! Scheduling enums shared between callers and the dispatch layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Network condition a recurring job waits for before firing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkConstraint {
    /// Any connected network is acceptable.
    #[default]
    Any,
    /// Only unmetered networks, typically Wi-Fi.
    UnmeteredOnly,
}

impl NetworkConstraint {
    /// Stable caller-facing name for [`NetworkConstraint::Any`].
    pub const ANY_NAME: &'static str = "ANY";
    /// Stable caller-facing name for [`NetworkConstraint::UnmeteredOnly`].
    pub const UNMETERED_NAME: &'static str = "UNMETERED";

    /// Every constraint, in the order they are surfaced to callers.
    pub const ALL: [NetworkConstraint; 2] =
        [NetworkConstraint::UnmeteredOnly, NetworkConstraint::Any];

    /// The stable name for this constraint. These names are part of the
    /// caller contract and never change with enum reordering.
    pub fn name(&self) -> &'static str {
        match self {
            NetworkConstraint::Any => Self::ANY_NAME,
            NetworkConstraint::UnmeteredOnly => Self::UNMETERED_NAME,
        }
    }

    /// Look up a constraint by its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::ANY_NAME => Some(NetworkConstraint::Any),
            Self::UNMETERED_NAME => Some(NetworkConstraint::UnmeteredOnly),
            _ => None,
        }
    }
}

impl fmt::Display for NetworkConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How long a registration survives in the dispatch engine.
///
/// Derived from a spec's `persist` flag, never set directly by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// The registration is dropped at the next device boot.
    UntilNextBoot,
    /// The registration survives reboots; the engine re-arms it.
    Forever,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lifetime::UntilNextBoot => "until_next_boot",
            Lifetime::Forever => "forever",
        };
        write!(f, "{}", s)
    }
}

/// Backoff shape the dispatch engine applies after a failed run.
///
/// The core never retries anything itself. The policy is stamped onto each
/// registration and the engine owns the backoff entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Linearly growing delay between attempts.
    #[default]
    Linear,
    /// Exponentially growing delay between attempts.
    Exponential,
}

impl fmt::Display for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RetryPolicy::Linear => "linear",
            RetryPolicy::Exponential => "exponential",
        };
        write!(f, "{}", s)
    }
}
