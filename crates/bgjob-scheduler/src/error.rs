//! Error types for the scheduling core.

use thiserror::Error;

use bgjob_types::ValidationError;

use crate::dispatch::DispatchStatus;

/// Why a scheduling operation failed.
///
/// The outward-facing facade folds every variant into a bare `false` and
/// logs the reason; the richer type exists for the log line and for callers
/// driving the registry directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The raw parameters never made it past validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The dispatch engine declined the request.
    #[error("dispatch engine declined: {0}")]
    Engine(DispatchStatus),
}
