//! Recurring job registry: a stateless facade over the dispatch engine.
//!
//! The registry assembles each validated spec into a [`DispatchRequest`]
//! and delegates. It keeps no cache of registered keys: persisted
//! registrations in the engine survive process restarts, and a local cache
//! that does not would drift from them. Schedule, cancel, and cancel-all
//! each forward to the engine exactly once, with no retries on top of the
//! engine's own policy.

use std::sync::Arc;

use tracing::{debug, info, warn};

use bgjob_types::{JobSpec, RetryPolicy};

use crate::dispatch::{Constraint, DispatchEngine, DispatchRequest, DispatchStatus, TriggerWindow};
use crate::error::SchedulerError;

/// Facade over the engine for recurring background jobs.
pub struct BackgroundRegistry {
    engine: Arc<dyn DispatchEngine>,
    retry_policy: RetryPolicy,
    log_payloads: bool,
}

impl BackgroundRegistry {
    /// Create a registry delegating to `engine`.
    pub fn new(
        engine: Arc<dyn DispatchEngine>,
        retry_policy: RetryPolicy,
        log_payloads: bool,
    ) -> Self {
        Self {
            engine,
            retry_policy,
            log_payloads,
        }
    }

    /// Assemble the engine registration for `spec`.
    ///
    /// The execution window collapses to the period boundary on both ends,
    /// so each recurrence becomes eligible exactly at the period mark
    /// instead of inside a sliding window before it. The constraint set is
    /// the network atom plus charging when required; the device-idle hint
    /// stays in the payload. The caller's override flag passes through as
    /// `replace_current` untouched, leaving same-key conflict handling to
    /// the engine.
    fn build_request(&self, spec: &JobSpec) -> DispatchRequest {
        let mut constraints = vec![Constraint::from(spec.network())];
        if spec.requires_charging() {
            constraints.push(Constraint::DeviceCharging);
        }

        DispatchRequest {
            tag: spec.key().to_string(),
            trigger: TriggerWindow::execution_window(spec.period_secs(), spec.period_secs()),
            lifetime: spec.lifetime(),
            constraints,
            recurring: true,
            replace_current: spec.override_existing(),
            retry: self.retry_policy,
            payload: spec.clone(),
        }
    }

    /// Register `spec` as a recurring job with the engine.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Engine`] when the engine declines. The
    /// request is not resubmitted; retry belongs to the engine.
    pub fn schedule_recurring(&self, spec: &JobSpec) -> Result<(), SchedulerError> {
        let request = self.build_request(spec);
        if self.log_payloads {
            debug!(key = %spec.key(), ?request, "submitting recurring registration");
        }

        match self.engine.schedule(&request) {
            DispatchStatus::Success => {
                info!(
                    key = %spec.key(),
                    period_secs = spec.period_secs(),
                    replace = spec.override_existing(),
                    "scheduled recurring job"
                );
                Ok(())
            }
            status => {
                warn!(key = %spec.key(), %status, "engine declined recurring job");
                Err(SchedulerError::Engine(status))
            }
        }
    }

    /// Cancel the registration under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Engine`] when the engine declines.
    pub fn cancel(&self, key: &str) -> Result<(), SchedulerError> {
        match self.engine.cancel(key) {
            DispatchStatus::Success => {
                info!(key = %key, "cancelled recurring job");
                Ok(())
            }
            status => {
                warn!(key = %key, %status, "engine declined cancellation");
                Err(SchedulerError::Engine(status))
            }
        }
    }

    /// Cancel every registration owned by this scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Engine`] when the engine declines.
    pub fn cancel_all(&self) -> Result<(), SchedulerError> {
        match self.engine.cancel_all() {
            DispatchStatus::Success => {
                info!("cancelled all recurring jobs");
                Ok(())
            }
            status => {
                warn!(%status, "engine declined cancel-all");
                Err(SchedulerError::Engine(status))
            }
        }
    }
}
