//! Capture configuration

use serde::{Deserialize, Serialize};

/// Nominal capture parameters
///
/// The standard capture is 100 Hz for 10 seconds, 1000 samples per axis.
/// The window length lives here and only here; the inference core accepts
/// any length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Sample rate [Hz]
    pub sample_rate_hz: f64,
    /// Capture window duration [s]
    pub duration_s: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 100.0,
            duration_s: 10.0,
        }
    }
}

impl CaptureConfig {
    /// Samples per axis in one capture window
    pub fn window_samples(&self) -> usize {
        (self.sample_rate_hz * self.duration_s).round() as usize
    }

    /// Seconds between consecutive samples
    pub fn sample_period_s(&self) -> f64 {
        1.0 / self.sample_rate_hz
    }
}
