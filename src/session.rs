use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::input::{InputError, ReferenceDataset, load_reference_dataset_cached};
use crate::model::artifacts::ModelBundle;
use crate::model::bounds::{BoundsTable, scale};
use crate::model::predict::{PredictionResult, predict};
use crate::model::radar::{RadarOptions, RadarSeries, project};
use crate::model::vector::{FeatureVector, ScaledFeatureVector};
use crate::schema::FEATURE_COUNT;

#[derive(Debug)]
pub struct Session {
    pub dataset_path: PathBuf,
    pub dataset: Arc<ReferenceDataset>,
    pub bounds: BoundsTable,
    pub bundle: Option<ModelBundle>,
    pub model_note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub input: FeatureVector,
    pub scaled: ScaledFeatureVector,
    pub radar: RadarSeries,
    pub prediction: Option<PredictionResult>,
    pub prediction_error: Option<String>,
}

impl Session {
    // The reference dataset is required; the model bundle is not. A missing
    // or corrupt bundle disables the prediction path and leaves the scaled
    // view and radar projection available.
    pub fn open(
        dataset_path: &Path,
        scaler_path: &Path,
        model_path: &Path,
    ) -> Result<Self, InputError> {
        let dataset = load_reference_dataset_cached(dataset_path)?;
        let bounds = BoundsTable::from_dataset(&dataset);

        let (bundle, model_note) = match ModelBundle::load(scaler_path, model_path) {
            Ok(bundle) => (Some(bundle), None),
            Err(e) => {
                tracing::warn!("prediction disabled: {e}");
                (None, Some(e.to_string()))
            }
        };

        Ok(Self {
            dataset_path: dataset_path.to_path_buf(),
            dataset,
            bounds,
            bundle,
            model_note,
        })
    }

    pub fn default_input(&self) -> FeatureVector {
        let mut values = [0f64; FEATURE_COUNT];
        for (idx, value) in values.iter_mut().enumerate() {
            *value = self.bounds.get(idx).mean;
        }
        FeatureVector::new(values)
    }

    pub fn evaluate(&self, overrides: &[(usize, f64)], radar_opts: &RadarOptions) -> Evaluation {
        let mut input = self.default_input();
        for &(idx, value) in overrides {
            input.set(idx, value);
        }

        let scaled = scale(&input, &self.bounds);
        let radar = project(&scaled, radar_opts);

        let (prediction, prediction_error) = match &self.bundle {
            Some(bundle) => match predict(&input, bundle) {
                Ok(result) => (Some(result), None),
                Err(e) => {
                    tracing::error!("prediction failed: {e}");
                    (None, Some(e.to_string()))
                }
            },
            None => (None, None),
        };

        Evaluation {
            input,
            scaled,
            radar,
            prediction,
            prediction_error,
        }
    }

    pub fn prediction_note(&self, eval: &Evaluation) -> Option<String> {
        eval.prediction_error
            .clone()
            .or_else(|| self.model_note.clone())
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/session.rs"]
mod tests;
