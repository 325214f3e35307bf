//! Error types for the inference pipeline

use thiserror::Error;

/// Errors raised by feature extraction and model evaluation
///
/// All of these are synchronous failures raised at the point of detection.
/// None are transient: a failing call will fail identically when repeated, so
/// callers must handle or propagate, never retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    /// Empty or mismatched-length input signal
    #[error("invalid input signal: {0}")]
    InvalidInput(String),
    /// Design vector and covariance matrix dimensions disagree
    ///
    /// Indicates a malformed model specification: the covariance must be
    /// square with one row/column per design-vector entry.
    #[error("covariance dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    /// Malformed model specification (non-positive critical value, empty
    /// coefficient set)
    #[error("invalid model: {0}")]
    InvalidModel(String),
}
