//! Scripted collaborators for testing.
//!
//! Deterministic stand-ins for the dispatch engine and the foreground
//! service. Outcomes are scripted per call, with a standing default once
//! the script runs dry; every call is recorded in order for assertions;
//! and an optional latency simulates a slow collaborator. Useful for
//! exercising the scheduler without a real platform backend.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use bgjob_types::JobSpec;

use crate::dispatch::{DispatchEngine, DispatchRequest, DispatchStatus, ForegroundService};

/// A recorded engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    /// `schedule`, with the fully assembled request.
    Schedule(DispatchRequest),
    /// `cancel`, with the key.
    Cancel(String),
    /// `cancel_all`.
    CancelAll,
}

/// Scripted [`DispatchEngine`].
///
/// Scripted statuses answer calls front to back; when the script is empty
/// the standing default answers instead.
pub struct ScriptedEngine {
    responses: Mutex<VecDeque<DispatchStatus>>,
    default: DispatchStatus,
    latency: Option<Duration>,
    calls: Mutex<Vec<EngineCall>>,
}

impl ScriptedEngine {
    /// Engine that answers `Success` to everything.
    pub fn new() -> Self {
        Self::with_default(DispatchStatus::Success)
    }

    /// Engine whose unscripted answer is `default`.
    pub fn with_default(default: DispatchStatus) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            default,
            latency: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Sleep this long inside every call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Queue `status` as the answer to the next call.
    pub fn script(&self, status: DispatchStatus) {
        self.responses.lock().unwrap().push_back(status);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The schedule requests received so far, in order.
    pub fn scheduled_requests(&self) -> Vec<DispatchRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                EngineCall::Schedule(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }

    fn answer(&self) -> DispatchStatus {
        if let Some(latency) = self.latency {
            std::thread::sleep(latency);
        }
        self.responses.lock().unwrap().pop_front().unwrap_or(self.default)
    }
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchEngine for ScriptedEngine {
    fn schedule(&self, request: &DispatchRequest) -> DispatchStatus {
        self.calls
            .lock()
            .unwrap()
            .push(EngineCall::Schedule(request.clone()));
        self.answer()
    }

    fn cancel(&self, key: &str) -> DispatchStatus {
        self.calls
            .lock()
            .unwrap()
            .push(EngineCall::Cancel(key.to_string()));
        self.answer()
    }

    fn cancel_all(&self) -> DispatchStatus {
        self.calls.lock().unwrap().push(EngineCall::CancelAll);
        self.answer()
    }
}

/// A recorded foreground service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForegroundCall {
    /// `schedule`, with the promoted spec.
    Schedule(JobSpec),
    /// `stop`.
    Stop,
}

/// Scripted [`ForegroundService`].
///
/// Answers from its scripts (default accept) and tracks the running flag
/// the way a real service would: running after an accepted schedule, down
/// after a successful stop, unchanged by declined calls.
pub struct ScriptedForeground {
    schedule_responses: Mutex<VecDeque<bool>>,
    stop_responses: Mutex<VecDeque<bool>>,
    running: AtomicBool,
    latency: Option<Duration>,
    calls: Mutex<Vec<ForegroundCall>>,
}

impl ScriptedForeground {
    /// Service that accepts every schedule and stop.
    pub fn new() -> Self {
        Self {
            schedule_responses: Mutex::new(VecDeque::new()),
            stop_responses: Mutex::new(VecDeque::new()),
            running: AtomicBool::new(false),
            latency: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Sleep this long inside every call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Queue the answer to the next `schedule` call.
    pub fn script_schedule(&self, accept: bool) {
        self.schedule_responses.lock().unwrap().push_back(accept);
    }

    /// Queue the answer to the next `stop` call.
    pub fn script_stop(&self, success: bool) {
        self.stop_responses.lock().unwrap().push_back(success);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<ForegroundCall> {
        self.calls.lock().unwrap().clone()
    }

    fn delay(&self) {
        if let Some(latency) = self.latency {
            std::thread::sleep(latency);
        }
    }
}

impl Default for ScriptedForeground {
    fn default() -> Self {
        Self::new()
    }
}

impl ForegroundService for ScriptedForeground {
    fn schedule(&self, spec: &JobSpec) -> bool {
        self.delay();
        self.calls
            .lock()
            .unwrap()
            .push(ForegroundCall::Schedule(spec.clone()));

        let accepted = self
            .schedule_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(true);
        if accepted {
            self.running.store(true, Ordering::SeqCst);
        }
        accepted
    }

    fn stop(&self) -> bool {
        self.delay();
        self.calls.lock().unwrap().push(ForegroundCall::Stop);

        let stopped = self
            .stop_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(true);
        if stopped {
            self.running.store(false, Ordering::SeqCst);
        }
        stopped
    }

    fn is_running(&self) -> bool {
        self.delay();
        self.running.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn request(tag: &str) -> DispatchRequest {
        let spec = JobSpec::builder(tag).build().unwrap();
        DispatchRequest {
            tag: tag.to_string(),
            trigger: crate::dispatch::TriggerWindow::execution_window(0, 0),
            lifetime: spec.lifetime(),
            constraints: vec![],
            recurring: true,
            replace_current: false,
            retry: Default::default(),
            payload: spec,
        }
    }

    #[test]
    fn test_engine_scripts_answer_in_order_then_default() {
        let engine = ScriptedEngine::new();
        engine.script(DispatchStatus::BadRequest);
        engine.script(DispatchStatus::Unavailable);

        assert_eq!(engine.schedule(&request("a")), DispatchStatus::BadRequest);
        assert_eq!(engine.cancel("a"), DispatchStatus::Unavailable);
        // Script exhausted; the default takes over.
        assert_eq!(engine.cancel_all(), DispatchStatus::Success);
    }

    #[test]
    fn test_engine_with_default_failure() {
        let engine = ScriptedEngine::with_default(DispatchStatus::Unavailable);
        assert_eq!(engine.schedule(&request("a")), DispatchStatus::Unavailable);
    }

    #[test]
    fn test_engine_records_calls_in_order() {
        let engine = ScriptedEngine::new();
        engine.schedule(&request("a"));
        engine.cancel("b");
        engine.cancel_all();

        assert_eq!(
            engine.calls(),
            vec![
                EngineCall::Schedule(request("a")),
                EngineCall::Cancel("b".to_string()),
                EngineCall::CancelAll,
            ]
        );
    }

    #[test]
    fn test_engine_latency_delays_answers() {
        let engine = ScriptedEngine::new().with_latency(Duration::from_millis(20));

        let start = Instant::now();
        engine.cancel_all();

        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_foreground_latency_delays_answers() {
        let service = ScriptedForeground::new().with_latency(Duration::from_millis(20));

        let start = Instant::now();
        service.stop();

        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_foreground_running_flag_tracks_lifecycle() {
        let service = ScriptedForeground::new();
        let spec = JobSpec::builder("fg").build().unwrap();

        assert!(!service.is_running());
        assert!(service.schedule(&spec));
        assert!(service.is_running());
        assert!(service.stop());
        assert!(!service.is_running());
    }

    #[test]
    fn test_foreground_declined_schedule_leaves_flag_down() {
        let service = ScriptedForeground::new();
        service.script_schedule(false);
        let spec = JobSpec::builder("fg").build().unwrap();

        assert!(!service.schedule(&spec));
        assert!(!service.is_running());
    }

    #[test]
    fn test_foreground_failed_stop_keeps_flag_up() {
        let service = ScriptedForeground::new();
        let spec = JobSpec::builder("fg").build().unwrap();
        service.schedule(&spec);

        service.script_stop(false);
        assert!(!service.stop());
        assert!(service.is_running());
    }
}
