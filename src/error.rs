//! Error types for grouping runs.

use thiserror::Error;

use crate::partition::Partition;

/// Errors surfaced by dataset construction, configuration and search.
#[derive(Debug, Error)]
pub enum GroupingError {
    /// A configuration parameter failed its type or positivity constraint.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Every slot was tabu, so the step had no candidate move.
    ///
    /// Carries the best partition found before the search stalled out.
    #[error("Tabu memory exhausted the neighborhood at step {step} (best score {best_score})")]
    ExhaustedNeighborhood {
        /// Step at which the empty neighborhood was generated (1-based).
        step: usize,
        /// Best partition observed before the failure.
        best: Partition,
        /// Score of `best`.
        best_score: f64,
    },

    /// The caller supplied inputs that break a documented precondition.
    #[error("Precondition violation: {0}")]
    PreconditionViolation(String),
}

/// Result type alias for grouping operations.
pub type Result<T> = std::result::Result<T, GroupingError>;
