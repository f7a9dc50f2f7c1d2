//! # bgjob-types
//!
//! Shared vocabulary for the bgjob scheduling core.
//!
//! This crate defines the caller-facing data model:
//! - `JobSpec`: a validated, immutable description of a schedulable job
//! - `JobSpecBuilder`: the boundary where raw caller input is checked
//! - `NetworkConstraint`, `Lifetime`, `RetryPolicy`: scheduling enums
//! - `ValidationError`: rejection reasons for malformed parameters
//!
//! # Example
//!
//! ```
//! use bgjob_types::{JobSpec, NetworkConstraint};
//!
//! let spec = JobSpec::builder("nightly-sync")
//!     .with_period_secs(3600)
//!     .with_network(NetworkConstraint::UnmeteredOnly)
//!     .with_persist(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(spec.key(), "nightly-sync");
//! assert_eq!(spec.period_secs(), 3600);
//! assert_eq!(spec.network(), NetworkConstraint::UnmeteredOnly);
//! ```

mod constraint;
mod error;
mod job;

pub use constraint::{Lifetime, NetworkConstraint, RetryPolicy};
pub use error::ValidationError;
pub use job::{JobSpec, JobSpecBuilder, Notification};
