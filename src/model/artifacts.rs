use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::cache::PathCache;
use crate::schema::{self, FEATURE_COUNT};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("invalid artifact: {0}")]
    InvalidArtifact(String),
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
}

// Standardization parameters fit during the offline training step:
// transformed = (value - center) / scale, per feature, in training order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub feature_names: Vec<String>,
    pub center: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub scaler: Arc<ScalerArtifact>,
    pub classifier: Arc<ClassifierArtifact>,
}

fn read_json_artifact<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ModelError> {
    let file = File::open(path)
        .map_err(|e| ModelError::ModelUnavailable(format!("{}: {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ModelError::ModelUnavailable(format!("{}: {e}", path.display())))
}

fn check_feature_names(kind: &str, names: &[String]) -> Result<(), ModelError> {
    if names.len() != FEATURE_COUNT {
        return Err(ModelError::SchemaMismatch(format!(
            "{kind} artifact lists {} features, expected {}",
            names.len(),
            FEATURE_COUNT
        )));
    }
    for (idx, name) in names.iter().enumerate() {
        let expected = schema::feature_key(idx);
        if name != expected {
            return Err(ModelError::SchemaMismatch(format!(
                "{kind} artifact feature {idx} is {name:?}, expected {expected:?} (training column order is pinned)"
            )));
        }
    }
    Ok(())
}

impl ScalerArtifact {
    fn validate(&self) -> Result<(), ModelError> {
        check_feature_names("scaler", &self.feature_names)?;
        if self.center.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ModelError::InvalidArtifact(format!(
                "scaler artifact has {} centers and {} scales, expected {}",
                self.center.len(),
                self.scale.len(),
                FEATURE_COUNT
            )));
        }
        for (idx, (&c, &s)) in self.center.iter().zip(&self.scale).enumerate() {
            if !c.is_finite() || !s.is_finite() || s == 0.0 {
                return Err(ModelError::InvalidArtifact(format!(
                    "scaler artifact entry {:?} is unusable (center={c}, scale={s})",
                    schema::feature_key(idx)
                )));
            }
        }
        Ok(())
    }
}

impl ClassifierArtifact {
    fn validate(&self) -> Result<(), ModelError> {
        check_feature_names("classifier", &self.feature_names)?;
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(ModelError::InvalidArtifact(format!(
                "classifier artifact has {} coefficients, expected {}",
                self.coefficients.len(),
                FEATURE_COUNT
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::InvalidArtifact(
                "classifier artifact has non-finite parameters".to_string(),
            ));
        }
        Ok(())
    }
}

static SCALER_CACHE: PathCache<ScalerArtifact> = PathCache::new();
static CLASSIFIER_CACHE: PathCache<ClassifierArtifact> = PathCache::new();

impl ModelBundle {
    pub fn load(scaler_path: &Path, model_path: &Path) -> Result<Self, ModelError> {
        let scaler = SCALER_CACHE.get_or_load(scaler_path, |p| {
            let artifact: ScalerArtifact = read_json_artifact(p)?;
            artifact.validate()?;
            Ok::<_, ModelError>(artifact)
        })?;
        let classifier = CLASSIFIER_CACHE.get_or_load(model_path, |p| {
            let artifact: ClassifierArtifact = read_json_artifact(p)?;
            artifact.validate()?;
            Ok::<_, ModelError>(artifact)
        })?;
        Ok(Self { scaler, classifier })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/artifacts.rs"]
mod tests;
