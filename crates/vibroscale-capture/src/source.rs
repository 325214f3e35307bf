//! Signal source abstraction
//!
//! The inference core is agnostic to where samples come from; anything that
//! can fill a biaxial window is a signal source - live capture, file replay,
//! or synthetic generation.

use thiserror::Error;

use vibroscale_core::signal::BiaxialRecording;
use vibroscale_core::EstimationError;

/// Capture-layer errors
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed recording: {0}")]
    MalformedRecording(String),
    #[error("invalid capture configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Estimation(#[from] EstimationError),
}

/// A producer of biaxial accelerometer recordings
pub trait SignalSource {
    /// Produce one recording of `samples` samples per axis
    fn capture(&mut self, samples: usize) -> Result<BiaxialRecording, CaptureError>;
}
