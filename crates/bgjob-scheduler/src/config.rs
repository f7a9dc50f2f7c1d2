//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use bgjob_types::RetryPolicy;

/// Construction-time configuration for a [`crate::JobScheduler`].
///
/// Deliberately small: trigger cadence, constraints, and persistence are
/// per-job decisions carried by each spec, not scheduler state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Backoff shape stamped onto every recurring registration. The engine
    /// owns all retry behavior; the core only declares the policy.
    #[serde(default)]
    pub retry_policy: RetryPolicy,

    /// Debug-log assembled requests, payload included, on submission. Off
    /// by default: payloads carry user-visible notification text.
    #[serde(default)]
    pub log_payloads: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            retry_policy: RetryPolicy::Linear,
            log_payloads: false,
        }
    }
}
