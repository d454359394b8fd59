use crate::model::Diagnosis;
use crate::model::artifacts::{ModelBundle, ModelError};
use crate::model::vector::FeatureVector;
use crate::schema::FEATURE_COUNT;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub diagnosis: Diagnosis,
    pub p_benign: f64,
    pub p_malignant: f64,
}

pub fn predict(input: &FeatureVector, bundle: &ModelBundle) -> Result<PredictionResult, ModelError> {
    if bundle.scaler.center.len() != FEATURE_COUNT
        || bundle.scaler.scale.len() != FEATURE_COUNT
        || bundle.classifier.coefficients.len() != FEATURE_COUNT
    {
        return Err(ModelError::SchemaMismatch(format!(
            "model bundle does not cover the {FEATURE_COUNT}-feature input vector"
        )));
    }

    // The artifact feature order is validated against the schema at load
    // time, so the input vector can be consumed positionally.
    let mut score = bundle.classifier.intercept;
    for idx in 0..FEATURE_COUNT {
        let standardized = (input.get(idx) - bundle.scaler.center[idx]) / bundle.scaler.scale[idx];
        score += bundle.classifier.coefficients[idx] * standardized;
    }

    let p_malignant = sigmoid(score);
    let p_benign = 1.0 - p_malignant;
    let diagnosis = if p_malignant >= p_benign {
        Diagnosis::Malignant
    } else {
        Diagnosis::Benign
    };

    Ok(PredictionResult {
        diagnosis,
        p_benign,
        p_malignant,
    })
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/predict.rs"]
mod tests;
