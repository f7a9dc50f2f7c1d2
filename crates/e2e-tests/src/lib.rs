//! End-to-end test infrastructure for the bgjob scheduling core.
//!
//! Provides a shared TestHarness wiring a `JobScheduler` to scripted
//! collaborators, plus spec constructors shared by the scenario tests.

use std::sync::Arc;

use bgjob_scheduler::mock::{ScriptedEngine, ScriptedForeground};
use bgjob_scheduler::{JobScheduler, SchedulerConfig};
use bgjob_types::JobSpec;

/// Shared test harness for E2E tests.
///
/// Wires a scheduler to scripted collaborators and keeps the collaborators
/// reachable so tests can script failures and inspect recorded calls.
pub struct TestHarness {
    /// Scripted dispatch engine behind the scheduler.
    pub engine: Arc<ScriptedEngine>,
    /// Scripted foreground service behind the scheduler.
    pub foreground: Arc<ScriptedForeground>,
    /// The scheduler under test.
    pub scheduler: JobScheduler,
}

impl TestHarness {
    /// Create a harness with default config and all-success collaborators.
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    /// Create a harness with explicit scheduler config.
    pub fn with_config(config: SchedulerConfig) -> Self {
        init_test_logging();

        let engine = Arc::new(ScriptedEngine::new());
        let foreground = Arc::new(ScriptedForeground::new());
        let scheduler = JobScheduler::new(config, engine.clone(), foreground.clone());

        Self {
            engine,
            foreground,
            scheduler,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a fmt subscriber honoring `RUST_LOG`, once per process.
///
/// Later calls are no-ops, so every test can go through the harness without
/// caring which one ran first.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Recurring background spec with realistic defaults.
pub fn recurring_spec(key: &str) -> JobSpec {
    JobSpec::builder(key)
        .with_period_secs(900)
        .with_timeout_secs(30)
        .build()
        .expect("valid recurring spec")
}

/// Always-running spec destined for the foreground slot.
pub fn foreground_spec(key: &str) -> JobSpec {
    JobSpec::builder(key)
        .with_always_running(true)
        .with_title("Job active")
        .with_icon("ic_notification")
        .with_text("Running in foreground")
        .build()
        .expect("valid foreground spec")
}
