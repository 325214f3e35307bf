//! # Vibroscale Capture
//!
//! Signal acquisition layer around the vibroscale inference core.
//!
//! The core estimates weight from any pair of equal-length axis signals; this
//! crate supplies those signals and presents the results:
//!
//! - [`synthetic`]: deterministic synthetic sources (seeded Gaussian noise
//!   with an optional vibration drive tone)
//! - [`replay`]: CSV save/replay in the mobile recorder's row-per-axis
//!   format
//! - [`session`]: ring-buffered live recording session
//! - [`report`]: plain-text presentation of prediction results
//!
//! Capture runs at a nominal 100 Hz for 10 seconds (see [`CaptureConfig`]);
//! the core itself never assumes that window length.

pub mod config;
pub mod replay;
pub mod report;
pub mod session;
pub mod source;
pub mod synthetic;

pub use config::CaptureConfig;
pub use replay::{read_recording, write_recording, ReplaySource};
pub use session::RecordingSession;
pub use source::{CaptureError, SignalSource};
pub use synthetic::{SyntheticConfig, SyntheticSource};
