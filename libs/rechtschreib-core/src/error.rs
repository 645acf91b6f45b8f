//! Error types for rechtschreib-core.

use thiserror::Error;

/// Result type alias using PlanError.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors that can occur while assembling a practice plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Planning was requested without a single classified error. Selecting a
    /// dominant bucket over an empty list is undefined, so the caller must
    /// collect observations first.
    #[error("no error data available for this learner")]
    NoErrorData,
}
