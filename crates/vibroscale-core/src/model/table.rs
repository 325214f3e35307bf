//! The three fitted models
//!
//! Numeric constants below are reproduced verbatim from the fitted models.
//! They are data, not configuration: do not round, reorder, or expose them as
//! tunable parameters. Each covariance is the raw fitted coefficient
//! covariance; the fit's residual mean squared error is kept as its own
//! constant and folded in once when the table is built, so the engine only
//! ever sees the scaled matrix.

use nalgebra::DMatrix;

use super::spec::{FeatureTerm, ModelKind, ModelSpec, OutputTransform};

// Model 1: simple linear regression on [x_maa, z_maa]
const M1_INTERCEPT: f64 = 129.785961;
const M1_X: f64 = -367805.903315;
const M1_Z: f64 = 406062.220123;
const M1_MSE: f64 = 3260.2169;
const M1_T: f64 = 1.677;
#[rustfmt::skip]
const M1_COV: [f64; 9] = [
     5.04065961e-01, -3.99255966e+02, -3.21324068e+02,
    -3.99255966e+02,  5.31714904e+05,  3.02921752e+04,
    -3.21324068e+02,  3.02921752e+04,  4.84490253e+05,
];

// Model 2: adds the x·z interaction term
const M2_INTERCEPT: f64 = -418.4162;
const M2_X: f64 = 433976.1456;
const M2_Z: f64 = 1367812.5280;
const M2_XZ: f64 = -1409073178.496;
const M2_MSE: f64 = 2370.297301720971;
const M2_T: f64 = 1.678;
#[rustfmt::skip]
const M2_COV: [f64; 16] = [
     7.16960988e+00, -1.01480558e+04, -1.20151644e+04,  1.71328012e+07,
    -1.01480558e+04,  1.47899810e+07,  1.71333089e+07, -2.50578575e+10,
    -1.20151644e+04,  1.71333089e+07,  2.09998306e+07, -3.00572982e+10,
     1.71328012e+07, -2.50578575e+10, -3.00572982e+10,  4.40373477e+13,
];

// Model 3: fitted on log(weight); predictions come back in log-grams
const M3_INTERCEPT: f64 = 6.626590;
const M3_X: f64 = -5705.442683;
const M3_Z: f64 = 2525.894158;
const M3_MSE: f64 = 0.2096351825845287;
const M3_T: f64 = 1.679;
#[rustfmt::skip]
const M3_COV: [f64; 9] = [
     5.28150219e-01, -4.44846842e+02, -3.16976527e+02,
    -4.44846842e+02,  6.18116534e+05,  2.19748690e+04,
    -3.16976527e+02,  2.19748690e+04,  4.85361130e+05,
];

/// MSE-scaled coefficient covariance from the raw fitted entries
fn scaled_covariance(dim: usize, raw: &[f64], mse: f64) -> DMatrix<f64> {
    DMatrix::from_row_slice(dim, dim, raw) * mse
}

fn model_one() -> ModelSpec {
    ModelSpec {
        kind: ModelKind::Linear,
        intercept: M1_INTERCEPT,
        coefficients: vec![(FeatureTerm::X, M1_X), (FeatureTerm::Z, M1_Z)],
        covariance: scaled_covariance(3, &M1_COV, M1_MSE),
        critical_value: M1_T,
        transform: OutputTransform::Identity,
    }
}

fn model_two() -> ModelSpec {
    ModelSpec {
        kind: ModelKind::LinearWithInteraction,
        intercept: M2_INTERCEPT,
        coefficients: vec![
            (FeatureTerm::X, M2_X),
            (FeatureTerm::Z, M2_Z),
            (FeatureTerm::XZ, M2_XZ),
        ],
        covariance: scaled_covariance(4, &M2_COV, M2_MSE),
        critical_value: M2_T,
        transform: OutputTransform::Identity,
    }
}

fn model_three() -> ModelSpec {
    ModelSpec {
        kind: ModelKind::LogLinear,
        intercept: M3_INTERCEPT,
        coefficients: vec![(FeatureTerm::X, M3_X), (FeatureTerm::Z, M3_Z)],
        covariance: scaled_covariance(3, &M3_COV, M3_MSE),
        critical_value: M3_T,
        transform: OutputTransform::Exponential,
    }
}

/// The immutable registry of the three fitted models
///
/// Built once (typically at startup) and passed by reference into the
/// prediction engine. It owns plain `f64` data only, so it is `Send + Sync`
/// and safe to share across concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct ModelTable {
    specs: Vec<ModelSpec>,
}

impl ModelTable {
    /// Build the standard table: models 1, 2, 3 in fixed order
    pub fn standard() -> Self {
        Self {
            specs: vec![model_one(), model_two(), model_three()],
        }
    }

    /// All models, in table order
    pub fn specs(&self) -> &[ModelSpec] {
        &self.specs
    }

    /// Look up a model by kind
    pub fn get(&self, kind: ModelKind) -> Option<&ModelSpec> {
        self.specs.iter().find(|s| s.kind == kind)
    }
}

impl Default for ModelTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_three_models_in_order() {
        let table = ModelTable::standard();
        let kinds: Vec<ModelKind> = table.specs().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ModelKind::Linear,
                ModelKind::LinearWithInteraction,
                ModelKind::LogLinear
            ]
        );
    }

    #[test]
    fn test_all_specs_validate() {
        let table = ModelTable::standard();
        for spec in table.specs() {
            spec.validate().unwrap();
        }
    }

    #[test]
    fn test_design_dimensions() {
        let table = ModelTable::standard();
        assert_eq!(table.get(ModelKind::Linear).unwrap().design_dim(), 3);
        assert_eq!(
            table.get(ModelKind::LinearWithInteraction).unwrap().design_dim(),
            4
        );
        assert_eq!(table.get(ModelKind::LogLinear).unwrap().design_dim(), 3);
    }

    #[test]
    fn test_covariances_symmetric() {
        let table = ModelTable::standard();
        for spec in table.specs() {
            let c = &spec.covariance;
            for i in 0..c.nrows() {
                for j in 0..c.ncols() {
                    // symmetric by construction, bit-for-bit
                    assert_eq!(c[(i, j)].to_bits(), c[(j, i)].to_bits());
                }
            }
        }
    }

    #[test]
    fn test_only_log_linear_transforms() {
        let table = ModelTable::standard();
        assert_eq!(
            table.get(ModelKind::Linear).unwrap().transform,
            OutputTransform::Identity
        );
        assert_eq!(
            table.get(ModelKind::LinearWithInteraction).unwrap().transform,
            OutputTransform::Identity
        );
        assert_eq!(
            table.get(ModelKind::LogLinear).unwrap().transform,
            OutputTransform::Exponential
        );
    }

    #[test]
    fn test_interaction_term_declared_last() {
        let table = ModelTable::standard();
        let spec = table.get(ModelKind::LinearWithInteraction).unwrap();
        let terms: Vec<FeatureTerm> = spec.coefficients.iter().map(|(t, _)| *t).collect();
        assert_eq!(terms, vec![FeatureTerm::X, FeatureTerm::Z, FeatureTerm::XZ]);
    }
}
