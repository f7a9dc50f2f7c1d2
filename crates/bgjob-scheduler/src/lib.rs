//! # bgjob-scheduler
//!
//! Scheduling core for named background jobs with a single always-running
//! foreground slot.
//!
//! The core owns no trigger delivery, persistence, or retry logic. Recurring
//! registrations are delegated to an injected [`DispatchEngine`] and the
//! always-running job to an injected [`ForegroundService`]. What the core
//! does own:
//!
//! - **Request assembly**: a validated `JobSpec` becomes a
//!   [`DispatchRequest`] carrying its execution window, lifetime, and
//!   constraint set.
//! - **Routing**: always-running specs go to the foreground slot, all others
//!   to the recurring registry, and cancellation reconciles across both.
//! - **The foreground slot**: at most one always-running job per scheduler,
//!   replaced atomically on promotion.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use bgjob_scheduler::mock::{ScriptedEngine, ScriptedForeground};
//! use bgjob_scheduler::{JobScheduler, SchedulerConfig};
//! use bgjob_types::JobSpec;
//!
//! let engine = Arc::new(ScriptedEngine::new());
//! let foreground = Arc::new(ScriptedForeground::new());
//! let scheduler = JobScheduler::new(SchedulerConfig::default(), engine, foreground);
//!
//! let spec = JobSpec::builder("sync").with_period_secs(900).build().unwrap();
//! assert!(scheduler.schedule(spec));
//! assert!(scheduler.cancel("sync"));
//! ```

mod config;
mod dispatch;
mod error;
mod foreground;
pub mod mock;
mod registry;
mod scheduler;

pub use config::SchedulerConfig;
pub use dispatch::{
    Constraint, DispatchEngine, DispatchRequest, DispatchStatus, ForegroundService, TriggerWindow,
};
pub use error::SchedulerError;
pub use foreground::ForegroundSlot;
pub use registry::BackgroundRegistry;
pub use scheduler::JobScheduler;
