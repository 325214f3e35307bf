//! Delta-method prediction engine
//!
//! Stateless and synchronous: each call builds the model's design vector,
//! evaluates the linear combination on the model's native scale, propagates
//! the coefficient covariance through that same vector (the delta method),
//! and maps the estimate and both interval bounds back to grams. Calls are
//! independent and order-free across models and repetitions.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::EstimationError;
use crate::model::{ModelKind, ModelSpec, ModelTable};
use crate::signal::{BiaxialRecording, FeaturePair};

/// A point estimate with its 95% confidence interval, in grams
///
/// Always on the physical scale, whatever the model's native scale was.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Point estimate [g]
    pub estimate: f64,
    /// Lower 95% confidence bound [g]
    pub lower: f64,
    /// Upper 95% confidence bound [g]
    pub upper: f64,
}

/// The outcome of evaluating one model from the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    /// Which model produced this result
    pub kind: ModelKind,
    /// The estimate and its interval, in grams
    pub result: PredictionResult,
}

/// Design vector [1, f₁, f₂, ...] in the model's declared term order
///
/// Entry i + 1 lines up with covariance row/column i + 1; index 0 is the
/// intercept.
fn design_vector(features: &FeaturePair, spec: &ModelSpec) -> DVector<f64> {
    let mut v = DVector::zeros(spec.design_dim());
    v[0] = 1.0;
    for (i, (term, _)) in spec.coefficients.iter().enumerate() {
        v[i + 1] = term.evaluate(features);
    }
    v
}

/// Native-scale linear combination: intercept + Σ coeffᵢ · vᵢ₊₁
fn native_estimate(v: &DVector<f64>, spec: &ModelSpec) -> f64 {
    let mut acc = spec.intercept;
    for (i, (_, coeff)) in spec.coefficients.iter().enumerate() {
        acc += coeff * v[i + 1];
    }
    acc
}

/// Evaluate one model with its 95% confidence interval
///
/// The propagated variance is `vᵀ C v`, where `C` is the model's MSE-scaled
/// coefficient covariance and `v` the design vector; its square root is the
/// standard error of the native-scale prediction. The output transform is
/// applied to the estimate and to each bound independently, on the native
/// scale, before anything leaves this function.
///
/// # Errors
/// `InvalidModel` or `DimensionMismatch` for a malformed spec.
pub fn predict(
    features: &FeaturePair,
    spec: &ModelSpec,
) -> Result<PredictionResult, EstimationError> {
    spec.validate()?;

    let v = design_vector(features, spec);
    let estimate = native_estimate(&v, spec);

    let variance = (&spec.covariance * &v).dot(&v);
    let std_error = variance.sqrt();
    let half_width = spec.critical_value * std_error;

    Ok(PredictionResult {
        estimate: spec.transform.apply(estimate),
        lower: spec.transform.apply(estimate - half_width),
        upper: spec.transform.apply(estimate + half_width),
    })
}

/// Evaluate one model, point estimate only
///
/// The without-uncertainty mode of the same engine: identical arithmetic up
/// to the native estimate, no variance propagation, transform applied to the
/// single value.
///
/// # Errors
/// `InvalidModel` or `DimensionMismatch` for a malformed spec.
pub fn predict_point(features: &FeaturePair, spec: &ModelSpec) -> Result<f64, EstimationError> {
    spec.validate()?;

    let v = design_vector(features, spec);
    Ok(spec.transform.apply(native_estimate(&v, spec)))
}

/// Run a recording through every model in the table
///
/// Features are extracted once and reused; models are evaluated in table
/// order. Evaluations are mutually independent, so the order carries no
/// meaning beyond stable output.
///
/// # Errors
/// Propagates the first extraction or evaluation error.
pub fn estimate_all(
    recording: &BiaxialRecording,
    table: &ModelTable,
) -> Result<Vec<ModelPrediction>, EstimationError> {
    let features = recording.features()?;
    table
        .specs()
        .iter()
        .map(|spec| {
            predict(&features, spec).map(|result| ModelPrediction {
                kind: spec.kind,
                result,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;

    fn table() -> ModelTable {
        ModelTable::standard()
    }

    #[test]
    fn test_model_one_hand_computed_estimate() {
        let features = FeaturePair::new(0.8, 0.75);
        let spec = table();
        let spec = spec.get(ModelKind::Linear).unwrap();

        let result = predict(&features, spec).unwrap();
        let expected = 129.785961 - 367805.903315 * 0.8 + 406062.220123 * 0.75;
        assert_relative_eq!(result.estimate, expected, max_relative = 1e-6);
    }

    #[test]
    fn test_model_two_includes_interaction() {
        let (x, z) = (8.0e-4, 7.5e-4);
        let features = FeaturePair::new(x, z);
        let spec = table();
        let spec = spec.get(ModelKind::LinearWithInteraction).unwrap();

        let point = predict_point(&features, spec).unwrap();
        let expected =
            -418.4162 + 433976.1456 * x + 1367812.5280 * z + (-1409073178.496) * (x * z);
        assert_relative_eq!(point, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_bounds_bracket_estimate_for_every_model() {
        let cases = [
            FeaturePair::new(4.0e-4, 5.0e-4),
            FeaturePair::new(8.0e-4, 7.5e-4),
            FeaturePair::new(1.2e-3, 9.0e-4),
        ];
        let table = table();
        for features in &cases {
            for spec in table.specs() {
                let r = predict(features, spec).unwrap();
                assert!(
                    r.lower <= r.estimate && r.estimate <= r.upper,
                    "bounds out of order for {:?}: {:?}",
                    spec.kind,
                    r
                );
            }
        }
    }

    #[test]
    fn test_log_linear_transforms_bounds_independently() {
        let features = FeaturePair::new(6.0e-4, 6.5e-4);
        let table = table();
        let spec = table.get(ModelKind::LogLinear).unwrap();

        // Recompute the native-scale quantities from the ModelSpec's fields.
        let v = DVector::from_vec(vec![1.0, features.x_maa, features.z_maa]);
        let native = spec.intercept
            + spec.coefficients[0].1 * features.x_maa
            + spec.coefficients[1].1 * features.z_maa;
        let std_error = (&spec.covariance * &v).dot(&v).sqrt();
        let half_width = spec.critical_value * std_error;

        let r = predict(&features, spec).unwrap();
        assert_relative_eq!(r.estimate, native.exp(), max_relative = 1e-12);
        assert_relative_eq!(r.lower, (native - half_width).exp(), max_relative = 1e-12);
        assert_relative_eq!(r.upper, (native + half_width).exp(), max_relative = 1e-12);

        // Exponentiating the bounds is not the same as offsetting the
        // exponentiated estimate.
        let wrong_upper = native.exp() + half_width.exp();
        assert!((r.upper - wrong_upper).abs() > f64::EPSILON);
    }

    #[test]
    fn test_point_mode_matches_full_mode() {
        let features = FeaturePair::new(5.5e-4, 6.0e-4);
        let table = table();
        for spec in table.specs() {
            let full = predict(&features, spec).unwrap();
            let point = predict_point(&features, spec).unwrap();
            assert_eq!(point.to_bits(), full.estimate.to_bits());
        }
    }

    #[test]
    fn test_deterministic_bitwise() {
        let features = FeaturePair::new(7.0e-4, 8.0e-4);
        let table = table();
        for spec in table.specs() {
            let a = predict(&features, spec).unwrap();
            let b = predict(&features, spec).unwrap();
            assert_eq!(a.estimate.to_bits(), b.estimate.to_bits());
            assert_eq!(a.lower.to_bits(), b.lower.to_bits());
            assert_eq!(a.upper.to_bits(), b.upper.to_bits());
        }
    }

    #[test]
    fn test_dimension_mismatch_detected() {
        let features = FeaturePair::new(5.0e-4, 5.0e-4);
        let table = table();
        let mut spec = table.get(ModelKind::LinearWithInteraction).unwrap().clone();
        spec.covariance = DMatrix::identity(3, 3);

        let err = predict(&features, &spec).unwrap_err();
        assert_eq!(
            err,
            EstimationError::DimensionMismatch {
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn test_invalid_critical_value_detected() {
        let features = FeaturePair::new(5.0e-4, 5.0e-4);
        let table = table();
        let mut spec = table.get(ModelKind::Linear).unwrap().clone();
        spec.critical_value = 0.0;

        let err = predict(&features, &spec).unwrap_err();
        assert!(matches!(err, EstimationError::InvalidModel(_)));
    }

    #[test]
    fn test_estimate_all_covers_table_in_order() {
        let x: Vec<f64> = (0..1000).map(|k| (k as f64 * 0.1).sin() * 1.0e-3).collect();
        let z: Vec<f64> = (0..1000).map(|k| (k as f64 * 0.07).cos() * 1.2e-3 - 1.0).collect();
        let recording = BiaxialRecording::new(x, z).unwrap();

        let predictions = estimate_all(&recording, &table()).unwrap();
        let kinds: Vec<ModelKind> = predictions.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ModelKind::Linear,
                ModelKind::LinearWithInteraction,
                ModelKind::LogLinear
            ]
        );
    }
}
