//! The scheduler facade: schedule, cancel, cancel-all.
//!
//! Routes each spec to the foreground slot or the recurring registry and
//! reconciles cancellation across both. Results on this surface are bare
//! booleans: any failure, validation or engine-side, collapses to `false`
//! and the reason goes to the log.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use bgjob_types::{JobSpec, JobSpecBuilder, NetworkConstraint};

use crate::config::SchedulerConfig;
use crate::dispatch::{DispatchEngine, ForegroundService};
use crate::foreground::ForegroundSlot;
use crate::registry::BackgroundRegistry;

/// Entry point for scheduling and cancelling jobs.
///
/// Owns the recurring registry and the single foreground slot. Both
/// collaborators are injected at construction and the scheduler itself
/// holds no other state, so it is cheap to share behind an `Arc`.
pub struct JobScheduler {
    registry: BackgroundRegistry,
    foreground: ForegroundSlot,
}

impl JobScheduler {
    /// Create a scheduler over the given collaborators.
    pub fn new(
        config: SchedulerConfig,
        engine: Arc<dyn DispatchEngine>,
        service: Arc<dyn ForegroundService>,
    ) -> Self {
        Self {
            registry: BackgroundRegistry::new(engine, config.retry_policy, config.log_payloads),
            foreground: ForegroundSlot::new(service),
        }
    }

    /// Schedule `spec`, routing on its always-running flag.
    ///
    /// Always-running specs are promoted into the foreground slot; all
    /// others are registered as recurring jobs with the engine. A key lives
    /// in at most one of the two places.
    pub fn schedule(&self, spec: JobSpec) -> bool {
        if spec.always_running() {
            return self.foreground.promote(spec);
        }

        match self.registry.schedule_recurring(&spec) {
            Ok(()) => true,
            Err(err) => {
                warn!(key = %spec.key(), error = %err, "schedule failed");
                false
            }
        }
    }

    /// Build and schedule in one step.
    ///
    /// Parameter validation failures are reported the same way engine
    /// failures are: a logged `false`, never a panic.
    pub fn schedule_params(&self, params: JobSpecBuilder) -> bool {
        match params.build() {
            Ok(spec) => self.schedule(spec),
            Err(err) => {
                warn!(error = %err, "rejected job parameters");
                false
            }
        }
    }

    /// Cancel the job registered under `key`, wherever it lives.
    ///
    /// The foreground slot is consulted first: when it holds `key` the job
    /// is demoted and the stop result returned, and the registry is not
    /// touched. Otherwise the cancellation goes to the recurring registry.
    pub fn cancel(&self, key: &str) -> bool {
        info!(key = %key, "cancel requested");

        if let Some(stopped) = self.foreground.cancel_if_key_matches(key) {
            return stopped;
        }

        match self.registry.cancel(key) {
            Ok(()) => true,
            Err(err) => {
                warn!(key = %key, error = %err, "cancel failed");
                false
            }
        }
    }

    /// Cancel the foreground job, if any, and every recurring registration.
    ///
    /// Reports success when either side comes up clear: an already-empty
    /// slot counts as a cleared foreground, and one side succeeding is
    /// enough even when the other fails. Callers that must tell the sides
    /// apart can ask [`JobScheduler::foreground`] and the engine directly.
    pub fn cancel_all(&self) -> bool {
        info!("cancel-all requested");

        // Short-circuit: an empty slot never triggers a service stop.
        let foreground_cleared = !self.foreground.is_occupied() || self.foreground.demote();

        let background_cleared = match self.registry.cancel_all() {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "background cancel-all failed");
                false
            }
        };

        foreground_cleared || background_cleared
    }

    /// The scheduling constants surfaced to callers: stable
    /// network-constraint names mapped to their values.
    pub fn constants() -> HashMap<&'static str, NetworkConstraint> {
        NetworkConstraint::ALL
            .iter()
            .map(|constraint| (constraint.name(), *constraint))
            .collect()
    }

    /// Whether the foreground service reports a job running. Probes the
    /// collaborator; see [`ForegroundSlot::service_running`] for why this
    /// can disagree with slot occupancy.
    pub fn foreground_running(&self) -> bool {
        self.foreground.service_running()
    }

    /// The foreground slot, for occupancy and liveness queries.
    pub fn foreground(&self) -> &ForegroundSlot {
        &self.foreground
    }

    /// The recurring registry, for callers that want reasoned errors
    /// instead of collapsed booleans.
    pub fn registry(&self) -> &BackgroundRegistry {
        &self.registry
    }
}
