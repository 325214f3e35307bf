//! Prediction engine
//!
//! Evaluates fitted models against an extracted feature pair: design vector,
//! native-scale estimate, delta-method variance propagation, transform back
//! to grams.

pub mod engine;

pub use engine::*;
