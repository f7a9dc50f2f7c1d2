//! Single-slot manager for the always-running foreground job.
//!
//! One slot per scheduler. Promotion replaces whatever the slot holds via a
//! full stop-and-restart at the service; there is no in-place update. The
//! slot is bookkeeping, not ground truth: the service's non-persistent
//! state can vanish at a reboot without the slot hearing about it, which is
//! why [`ForegroundSlot::service_running`] probes the collaborator instead
//! of the slot.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use bgjob_types::JobSpec;

use crate::dispatch::ForegroundService;

/// Holder of the single always-running job.
///
/// Every operation takes one exclusive lock across its whole
/// read-modify-write, so concurrent promote, demote, and cancel
/// interleavings never observe a half-updated slot.
pub struct ForegroundSlot {
    service: Arc<dyn ForegroundService>,
    slot: Mutex<Option<JobSpec>>,
}

impl ForegroundSlot {
    /// Create an empty slot backed by `service`.
    pub fn new(service: Arc<dyn ForegroundService>) -> Self {
        Self {
            service,
            slot: Mutex::new(None),
        }
    }

    /// Start, or replace, the foreground job.
    ///
    /// The slot is overwritten only when the service accepts the new job.
    /// The return value reports slot occupancy after the attempt, not the
    /// fate of this particular request: when the service declines but a
    /// previously promoted job still holds the slot, some foreground job is
    /// live and the result is still `true`.
    pub fn promote(&self, spec: JobSpec) -> bool {
        let mut slot = self.slot.lock().unwrap();

        if self.service.schedule(&spec) {
            info!(key = %spec.key(), replaced = slot.is_some(), "promoted foreground job");
            *slot = Some(spec);
        } else {
            warn!(
                key = %spec.key(),
                occupied = slot.is_some(),
                "foreground service declined job"
            );
        }

        slot.is_some()
    }

    /// Stop the foreground job and empty the slot.
    ///
    /// The slot is cleared before the service is asked to stop and stays
    /// cleared even when the stop call fails; a failed stop leaves the
    /// service to reconcile itself rather than resurrecting slot state.
    /// Returns the service's stop result.
    pub fn demote(&self) -> bool {
        let mut slot = self.slot.lock().unwrap();
        self.demote_locked(&mut slot)
    }

    /// Demote only when the slot holds `key`.
    ///
    /// Returns `None` when the slot is empty or holds a different key, so
    /// the caller can route the cancellation to the recurring registry
    /// instead. The key check and the demotion happen under one lock; a
    /// matching job cannot be swapped out between them.
    pub fn cancel_if_key_matches(&self, key: &str) -> Option<bool> {
        let mut slot = self.slot.lock().unwrap();
        let matches = slot.as_ref().map(|spec| spec.key() == key).unwrap_or(false);

        if matches {
            Some(self.demote_locked(&mut slot))
        } else {
            None
        }
    }

    fn demote_locked(&self, slot: &mut Option<JobSpec>) -> bool {
        if let Some(spec) = slot.take() {
            info!(key = %spec.key(), "demoting foreground job");
        }

        let stopped = self.service.stop();
        if !stopped {
            warn!("foreground service reported stop failure");
        }
        stopped
    }

    /// Whether the slot holds a job with `key`.
    pub fn is_occupied_by_key(&self, key: &str) -> bool {
        self.slot
            .lock()
            .unwrap()
            .as_ref()
            .map(|spec| spec.key() == key)
            .unwrap_or(false)
    }

    /// Whether the slot holds any job.
    pub fn is_occupied(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }

    /// Key of the job currently holding the slot.
    pub fn current_key(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap()
            .as_ref()
            .map(|spec| spec.key().to_string())
    }

    /// Whether the service reports a foreground job running. This probes
    /// the collaborator, not the slot; the two can disagree after a failed
    /// stop or a reboot that wiped non-persistent service state.
    pub fn service_running(&self) -> bool {
        self.service.is_running()
    }
}
