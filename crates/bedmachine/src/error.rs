//! Error types for raster sampling.

use thiserror::Error;

/// Result type for sampling operations.
pub type Result<T> = std::result::Result<T, SampleError>;

/// Errors that can occur while sampling a raster dataset.
#[derive(Error, Debug)]
pub enum SampleError {
    /// The variable name is not in the fixed enumerated set.
    #[error("unknown variable '{name}', must be one of: {valid}")]
    UnknownVariable { name: String, valid: String },

    /// Point-mode coordinate slices did not pair up.
    #[error("point mode requires equal coordinate lengths (x has {x_len}, y has {y_len})")]
    ShapeMismatch { x_len: usize, y_len: usize },

    /// A provider handed back a raster with unusable axes or shape.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Missing required variable in the dataset.
    #[error("missing required data: {0}")]
    MissingData(String),

    /// Dataset open/read failure, propagated unchanged from the provider.
    #[error("dataset error: {0}")]
    Dataset(#[from] netcdf::Error),
}
