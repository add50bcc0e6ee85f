//! Error types for the projection crate.

use thiserror::Error;

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors that can occur while resolving or applying a projection.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// The hemisphere sign was neither 1 nor -1.
    #[error("hemisphere sign must be 1 or -1, got {0}")]
    InvalidSign(i32),

    /// Only one of the central-meridian/standard-parallel pair was given.
    #[error("central_meridian and standard_parallel must be overridden together")]
    IncompleteOverride,

    /// Paired coordinate slices had different lengths.
    #[error("coordinate arrays must have equal length ({0} vs {1})")]
    ShapeMismatch(usize, usize),
}
