//! Model specification types
//!
//! A `ModelSpec` is an immutable value describing one fitted regression
//! model: its coefficients, the MSE-scaled coefficient covariance matrix, the
//! Student-t critical value for its 95% interval, and the transform from its
//! native scale back to grams.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::EstimationError;
use crate::signal::FeaturePair;

/// A named feature term in a model's linear combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureTerm {
    /// x-axis mean absolute amplitude
    X,
    /// z-axis mean absolute amplitude
    Z,
    /// Interaction term: the product x_maa * z_maa
    XZ,
}

impl FeatureTerm {
    /// Evaluate the term against an extracted feature pair
    ///
    /// `XZ` is computed here from the pair, not extracted as an independent
    /// feature.
    pub fn evaluate(&self, features: &FeaturePair) -> f64 {
        match self {
            FeatureTerm::X => features.x_maa,
            FeatureTerm::Z => features.z_maa,
            FeatureTerm::XZ => features.x_maa * features.z_maa,
        }
    }
}

/// Transform from a model's native scale to grams
///
/// Applied independently to the point estimate and to each interval bound
/// after they are computed on the native scale. Both supported transforms are
/// monotonic increasing, which is what lets native-scale interval endpoints
/// map to interval endpoints in grams; any future transform kind must uphold
/// the same property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputTransform {
    /// Native scale is already grams
    Identity,
    /// Native scale is log-grams; apply the natural exponential
    Exponential,
}

impl OutputTransform {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            OutputTransform::Identity => value,
            OutputTransform::Exponential => value.exp(),
        }
    }
}

/// Identifier for one of the three fitted models, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Model 1: simple linear regression on [x_maa, z_maa]
    Linear,
    /// Model 2: linear regression with an x·z interaction term
    LinearWithInteraction,
    /// Model 3: linear regression fitted on log-transformed weight
    LogLinear,
}

impl ModelKind {
    /// Stable name used in reports and serialized output
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::LinearWithInteraction => "linear-with-interaction",
            ModelKind::LogLinear => "log-linear",
        }
    }
}

/// One fitted regression model
///
/// Invariant: `coefficients` order matches the covariance row/column order
/// exactly - term i corresponds to row/column i + 1, with index 0 reserved
/// for the intercept. A silent mismatch produces a wrong variance, so
/// [`validate`](Self::validate) checks every structural property it can;
/// the ordering itself is fixed by construction in [`table`](super::table).
///
/// The covariance is the fitted coefficient covariance already scaled by the
/// fit's residual mean squared error. It is only ever right-multiplied by a
/// design vector, never inverted or decomposed.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    /// Which model this is
    pub kind: ModelKind,
    /// Intercept of the linear combination (native scale)
    pub intercept: f64,
    /// Feature terms and their coefficients, in covariance order
    pub coefficients: Vec<(FeatureTerm, f64)>,
    /// MSE-scaled coefficient covariance, square of dimension
    /// `1 + coefficients.len()`
    pub covariance: DMatrix<f64>,
    /// Student-t critical value for the 95% interval (always positive)
    pub critical_value: f64,
    /// Transform from native scale to grams
    pub transform: OutputTransform,
}

impl ModelSpec {
    /// Dimension of the design vector this model expects (intercept included)
    pub fn design_dim(&self) -> usize {
        1 + self.coefficients.len()
    }

    /// Check the model's structural invariants
    ///
    /// # Errors
    /// `InvalidModel` for an empty coefficient set or a non-positive critical
    /// value; `DimensionMismatch` if the covariance is not square with
    /// dimension `1 + coefficients.len()`.
    pub fn validate(&self) -> Result<(), EstimationError> {
        if self.coefficients.is_empty() {
            return Err(EstimationError::InvalidModel(format!(
                "model '{}' has no coefficients",
                self.kind.name()
            )));
        }
        if self.critical_value <= 0.0 {
            return Err(EstimationError::InvalidModel(format!(
                "model '{}' has non-positive critical value {}",
                self.kind.name(),
                self.critical_value
            )));
        }

        let expected = self.design_dim();
        if self.covariance.nrows() != expected {
            return Err(EstimationError::DimensionMismatch {
                expected,
                got: self.covariance.nrows(),
            });
        }
        if self.covariance.ncols() != expected {
            return Err(EstimationError::DimensionMismatch {
                expected,
                got: self.covariance.ncols(),
            });
        }

        Ok(())
    }
}
