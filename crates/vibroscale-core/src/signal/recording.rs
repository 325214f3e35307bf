//! Biaxial recording container
//!
//! A validated pair of equal-length x/z axis signals and the feature pair
//! derived from them.

use serde::{Deserialize, Serialize};

use super::features::extract_maa;
use crate::error::EstimationError;

/// One accelerometer recording: x-axis and z-axis samples of equal length
///
/// Owned by the caller and immutable once constructed. The nominal capture is
/// 100 Hz for 10 seconds (1000 samples per axis), but any equal, non-zero
/// length is accepted; the inference core never assumes a window size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiaxialRecording {
    x: Vec<f64>,
    z: Vec<f64>,
}

impl BiaxialRecording {
    /// Create a recording from raw axis samples
    ///
    /// # Errors
    /// `InvalidInput` if either axis is empty or the lengths differ.
    pub fn new(x: Vec<f64>, z: Vec<f64>) -> Result<Self, EstimationError> {
        if x.is_empty() || z.is_empty() {
            return Err(EstimationError::InvalidInput("empty axis signal".into()));
        }
        if x.len() != z.len() {
            return Err(EstimationError::InvalidInput(format!(
                "axis lengths differ: x has {}, z has {}",
                x.len(),
                z.len()
            )));
        }
        Ok(Self { x, z })
    }

    /// Number of samples per axis
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed recording; kept for API completeness
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// x-axis samples
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// z-axis samples
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Extract the feature pair consumed by the fitted models
    pub fn features(&self) -> Result<FeaturePair, EstimationError> {
        Ok(FeaturePair {
            x_maa: extract_maa(&self.x)?,
            z_maa: extract_maa(&self.z)?,
        })
    }
}

/// Mean absolute amplitudes of the two axes
///
/// Derived from a recording per inference call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeaturePair {
    /// MAA of the mean-centered x-axis signal
    pub x_maa: f64,
    /// MAA of the mean-centered z-axis signal
    pub z_maa: f64,
}

impl FeaturePair {
    pub fn new(x_maa: f64, z_maa: f64) -> Self {
        Self { x_maa, z_maa }
    }
}
