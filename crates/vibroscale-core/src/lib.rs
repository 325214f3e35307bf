//! # Vibroscale Core
//!
//! Weight estimation from surface-vibration accelerometer recordings - Core library
//!
//! An object resting on a vibrating surface damps the surface's motion in
//! proportion to its mass. This library turns a short biaxial accelerometer
//! recording of that motion (x-axis and z-axis, nominally 100 Hz for 10 s)
//! into a weight estimate in grams with a 95% confidence interval, evaluated
//! by three pre-fitted regression models.
//!
//! ## Modules
//!
//! - [`signal`]: Feature extraction (mean absolute amplitude of the
//!   mean-centered signal)
//! - [`model`]: The fitted model registry (coefficients, covariances,
//!   critical values, output transforms)
//! - [`estimation`]: The prediction engine (delta-method confidence
//!   intervals)
//! - [`error`]: Error types
//!
//! Everything here is pure, synchronous, in-memory computation: no I/O, no
//! shared mutable state, no randomness.

pub mod error;
pub mod estimation;
pub mod model;
pub mod signal;

pub use error::EstimationError;
pub use estimation::{estimate_all, predict, predict_point, ModelPrediction, PredictionResult};
pub use model::{FeatureTerm, ModelKind, ModelSpec, ModelTable, OutputTransform};
pub use signal::{extract_maa, BiaxialRecording, FeaturePair};
