//! Validation errors for raw job parameters.

use thiserror::Error;

/// Why a set of raw job parameters was rejected.
///
/// Validation happens once, in `JobSpecBuilder::build`. A `JobSpec` that
/// exists has passed every check here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The job key is empty. Keys address jobs for cancellation and
    /// override checks, so a keyless job is never schedulable.
    #[error("job key must not be empty")]
    EmptyKey,

    /// A duration field is negative. The field name is carried so callers
    /// can report which parameter was bad.
    #[error("{field} must be non-negative, got {value}")]
    NegativeDuration {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
}
