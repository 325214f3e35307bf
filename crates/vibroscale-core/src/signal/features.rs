//! Mean absolute amplitude (MAA)
//!
//! MAA of a signal s with mean m is mean(|sᵢ - m|): center the signal on its
//! own mean, then average the absolute deviations. A heavier object damps the
//! surface vibration, so MAA decreases with weight.

use crate::error::EstimationError;

/// Arithmetic mean of a non-empty sample slice
fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Mean absolute amplitude of one axis signal
///
/// Subtracts the signal's own mean from every sample, then averages the
/// absolute values of the centered samples. Because the per-signal mean
/// absorbs any constant offset, shifting the whole signal by a constant
/// leaves the result unchanged.
///
/// Pure and deterministic: the same samples always yield the same value.
///
/// # Errors
/// `InvalidInput` if the signal is empty (the mean would be undefined).
pub fn extract_maa(samples: &[f64]) -> Result<f64, EstimationError> {
    if samples.is_empty() {
        return Err(EstimationError::InvalidInput("empty axis signal".into()));
    }

    let center = mean(samples);
    let abs_sum: f64 = samples.iter().map(|s| (s - center).abs()).sum();
    Ok(abs_sum / samples.len() as f64)
}
