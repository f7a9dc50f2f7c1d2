//! Engine-facing vocabulary and the collaborator contracts.
//!
//! The scheduling core talks to two injected collaborators: a dispatch
//! engine owning trigger delivery, persistence, and retry for recurring
//! jobs, and a foreground service running the single always-running job.
//! Both contracts are synchronous. Every call settles promptly with a
//! status the core folds into its own result; neither side blocks on job
//! execution.

use std::fmt;

use serde::{Deserialize, Serialize};

use bgjob_types::{JobSpec, Lifetime, NetworkConstraint, RetryPolicy};

/// Time window, in seconds from registration, within which each recurrence
/// is eligible to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerWindow {
    /// Earliest second at which the trigger may fire.
    pub earliest_secs: u64,
    /// Latest second by which the trigger should fire.
    pub latest_secs: u64,
}

impl TriggerWindow {
    /// Window spanning `[earliest, latest]`.
    pub fn execution_window(earliest_secs: u64, latest_secs: u64) -> Self {
        Self {
            earliest_secs,
            latest_secs,
        }
    }
}

/// One constraint atom the engine ANDs onto a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Any connected network.
    OnAnyNetwork,
    /// Unmetered network only.
    OnUnmeteredNetwork,
    /// Device is on a charger.
    DeviceCharging,
    /// Device is idle. The recurring path never emits this atom; the
    /// device-idle hint travels inside the job payload instead.
    DeviceIdle,
}

impl From<NetworkConstraint> for Constraint {
    fn from(network: NetworkConstraint) -> Self {
        match network {
            NetworkConstraint::Any => Constraint::OnAnyNetwork,
            NetworkConstraint::UnmeteredOnly => Constraint::OnUnmeteredNetwork,
        }
    }
}

/// A fully assembled recurring registration, ready for the engine.
///
/// The payload carries the complete caller spec for the executing side,
/// including fields the engine itself never interprets: the timeout, the
/// device-idle hint, and the notification content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Registration tag; always the job key.
    pub tag: String,
    /// Eligibility window for each recurrence.
    pub trigger: TriggerWindow,
    /// How long the registration survives.
    pub lifetime: Lifetime,
    /// Constraint atoms ANDed onto the trigger.
    pub constraints: Vec<Constraint>,
    /// Whether the trigger re-arms after each run.
    pub recurring: bool,
    /// Whether an existing registration under the same tag is replaced.
    pub replace_current: bool,
    /// Backoff shape the engine applies to failed runs.
    pub retry: RetryPolicy,
    /// The full caller spec, passed through for the executing side.
    pub payload: JobSpec,
}

/// Outcome of an engine call.
///
/// Failure reasons are kept distinct for logging; the outward scheduling
/// surface folds every non-success into a plain `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStatus {
    /// The engine accepted the request.
    Success,
    /// The request was malformed or unsupported.
    BadRequest,
    /// The engine or its platform driver is temporarily unavailable.
    Unavailable,
    /// The engine refused the registration on quota grounds.
    QuotaExceeded,
}

impl DispatchStatus {
    /// True only for [`DispatchStatus::Success`].
    pub fn is_success(self) -> bool {
        matches!(self, DispatchStatus::Success)
    }
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DispatchStatus::Success => "success",
            DispatchStatus::BadRequest => "bad_request",
            DispatchStatus::Unavailable => "unavailable",
            DispatchStatus::QuotaExceeded => "quota_exceeded",
        };
        write!(f, "{}", s)
    }
}

/// External engine owning trigger delivery, persistence, and retry for
/// recurring jobs.
///
/// The engine is the source of truth for what is registered. The core keeps
/// no key cache of its own, so persisted registrations that outlive a
/// process restart can never drift from a stale local view.
pub trait DispatchEngine: Send + Sync {
    /// Register a recurring job, or re-register it when the request has
    /// `replace_current` set.
    fn schedule(&self, request: &DispatchRequest) -> DispatchStatus;

    /// Cancel the registration under `key`.
    fn cancel(&self, key: &str) -> DispatchStatus;

    /// Cancel every registration owned by this scheduler.
    fn cancel_all(&self) -> DispatchStatus;
}

/// External service running the single always-running foreground job.
///
/// `schedule` is a full stop-and-restart: the service tears down whatever
/// it was running and starts the new job. It is never a diff or an in-place
/// update.
pub trait ForegroundService: Send + Sync {
    /// Start, or replace, the foreground job described by `spec`.
    fn schedule(&self, spec: &JobSpec) -> bool;

    /// Stop the running foreground job, if any.
    fn stop(&self) -> bool;

    /// Whether a foreground job is currently running.
    fn is_running(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_constraint_maps_to_atom() {
        assert_eq!(
            Constraint::from(NetworkConstraint::Any),
            Constraint::OnAnyNetwork
        );
        assert_eq!(
            Constraint::from(NetworkConstraint::UnmeteredOnly),
            Constraint::OnUnmeteredNetwork
        );
    }

    #[test]
    fn test_only_success_is_success() {
        assert!(DispatchStatus::Success.is_success());
        assert!(!DispatchStatus::BadRequest.is_success());
        assert!(!DispatchStatus::Unavailable.is_success());
        assert!(!DispatchStatus::QuotaExceeded.is_success());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(DispatchStatus::Success.to_string(), "success");
        assert_eq!(DispatchStatus::QuotaExceeded.to_string(), "quota_exceeded");
    }

    #[test]
    fn test_execution_window_spans_given_bounds() {
        let window = TriggerWindow::execution_window(900, 900);
        assert_eq!(window.earliest_secs, 900);
        assert_eq!(window.latest_secs, 900);
    }
}
