//! Synthetic signal sources
//!
//! Stand-ins for live sensor capture: seeded Gaussian noise per axis, plus an
//! optional sinusoidal drive tone modeling the vibration motor that excites
//! the weighing surface. Deterministic for a fixed seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use vibroscale_core::signal::BiaxialRecording;

use crate::config::CaptureConfig;
use crate::source::{CaptureError, SignalSource};

/// Parameters for the synthetic source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Gaussian noise standard deviation per axis [g-force]
    pub noise_std: f64,
    /// Constant offset on the x axis [g-force]
    pub x_bias: f64,
    /// Constant offset on the z axis [g-force]
    pub z_bias: f64,
    /// Drive tone amplitude [g-force]; 0 disables the tone
    pub drive_amplitude: f64,
    /// Drive tone frequency [Hz]
    pub drive_frequency_hz: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            noise_std: 2.5e-3,
            x_bias: 0.0,
            // A resting accelerometer reads -1 g on the vertical axis.
            z_bias: -1.0,
            drive_amplitude: 1.0e-3,
            // Nominal haptic drive motor rate on the capture rig.
            drive_frequency_hz: 10.0,
        }
    }
}

/// Seeded synthetic biaxial source
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    config: SyntheticConfig,
    sample_rate_hz: f64,
    rng: StdRng,
}

impl SyntheticSource {
    /// Create a source producing windows at the capture config's sample rate
    ///
    /// # Errors
    /// `InvalidConfig` for a negative or non-finite noise level, or a
    /// non-positive sample rate.
    pub fn new(
        config: SyntheticConfig,
        capture: &CaptureConfig,
        seed: u64,
    ) -> Result<Self, CaptureError> {
        if !config.noise_std.is_finite() || config.noise_std < 0.0 {
            return Err(CaptureError::InvalidConfig(format!(
                "noise_std must be finite and non-negative, got {}",
                config.noise_std
            )));
        }
        if !(capture.sample_rate_hz > 0.0) {
            return Err(CaptureError::InvalidConfig(format!(
                "sample rate must be positive, got {}",
                capture.sample_rate_hz
            )));
        }
        Ok(Self {
            config,
            sample_rate_hz: capture.sample_rate_hz,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn axis(&mut self, samples: usize, bias: f64) -> Result<Vec<f64>, CaptureError> {
        let noise = Normal::new(0.0, self.config.noise_std)
            .map_err(|e| CaptureError::InvalidConfig(format!("noise distribution: {e}")))?;
        let amplitude = self.config.drive_amplitude;
        let omega = 2.0 * std::f64::consts::PI * self.config.drive_frequency_hz;
        let dt = 1.0 / self.sample_rate_hz;
        let rng = &mut self.rng;

        Ok((0..samples)
            .map(|k| bias + amplitude * (omega * k as f64 * dt).sin() + noise.sample(rng))
            .collect())
    }
}

impl SignalSource for SyntheticSource {
    fn capture(&mut self, samples: usize) -> Result<BiaxialRecording, CaptureError> {
        let x = self.axis(samples, self.config.x_bias)?;
        let z = self.axis(samples, self.config.z_bias)?;
        Ok(BiaxialRecording::new(x, z)?)
    }
}
