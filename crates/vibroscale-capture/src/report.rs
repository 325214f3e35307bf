//! Plain-text presentation of prediction results
//!
//! The inference core imposes no output format; this produces the familiar
//! three-block weight report, one block per model, so results stay
//! comparable across tools.

use vibroscale_core::estimation::ModelPrediction;
use vibroscale_core::model::ModelKind;

/// Human-readable model label ("Model 1" .. "Model 3")
fn model_label(kind: ModelKind) -> &'static str {
    match kind {
        ModelKind::Linear => "Model 1",
        ModelKind::LinearWithInteraction => "Model 2",
        ModelKind::LogLinear => "Model 3",
    }
}

/// Format one model's prediction as a report block
pub fn format_prediction(prediction: &ModelPrediction) -> String {
    let r = &prediction.result;
    format!(
        "{} ({}):\n\
         Estimated weight: {:.3}g\n\
         95% Confidence Interval for estimated weight: [{:.3}g, {:.3}g]\n",
        model_label(prediction.kind),
        prediction.kind.name(),
        r.estimate,
        r.lower,
        r.upper
    )
}

/// Format the full three-model report, one block per model
pub fn format_report(predictions: &[ModelPrediction]) -> String {
    predictions
        .iter()
        .map(format_prediction)
        .collect::<Vec<_>>()
        .join("\n")
}
