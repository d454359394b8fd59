use crate::input::ReferenceDataset;
use crate::model::vector::{FeatureVector, ScaledFeatureVector};
use crate::schema::{self, FEATURE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureBounds {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub degenerate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundsTable {
    entries: [FeatureBounds; FEATURE_COUNT],
}

impl BoundsTable {
    pub fn from_dataset(data: &ReferenceDataset) -> Self {
        let zero = FeatureBounds {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            degenerate: true,
        };
        let mut entries = [zero; FEATURE_COUNT];
        if data.rows.is_empty() {
            return Self { entries };
        }

        let mut min = [f64::INFINITY; FEATURE_COUNT];
        let mut max = [f64::NEG_INFINITY; FEATURE_COUNT];
        let mut sum = [0f64; FEATURE_COUNT];
        for row in &data.rows {
            for (idx, &value) in row.values().iter().enumerate() {
                if value < min[idx] {
                    min[idx] = value;
                }
                if value > max[idx] {
                    max[idx] = value;
                }
                sum[idx] += value;
            }
        }

        let n = data.rows.len() as f64;
        let mut degenerate_keys = Vec::new();
        for idx in 0..FEATURE_COUNT {
            let degenerate = min[idx] == max[idx];
            if degenerate {
                degenerate_keys.push(schema::feature_key(idx));
            }
            entries[idx] = FeatureBounds {
                min: min[idx],
                max: max[idx],
                mean: sum[idx] / n,
                degenerate,
            };
        }
        if !degenerate_keys.is_empty() {
            tracing::warn!(
                "constant feature columns in reference dataset, scaling them to 0.0: {}",
                degenerate_keys.join(", ")
            );
        }

        Self { entries }
    }

    pub fn get(&self, index: usize) -> &FeatureBounds {
        &self.entries[index]
    }
}

// Min-max scaling against the reference bounds. No clamping: raw values
// outside the reference range produce scaled values outside [0, 1].
// A degenerate range (min == max) scales to 0.0.
pub fn scale(input: &FeatureVector, bounds: &BoundsTable) -> ScaledFeatureVector {
    let mut values = [0f64; FEATURE_COUNT];
    for (idx, value) in values.iter_mut().enumerate() {
        let b = bounds.get(idx);
        if b.degenerate {
            *value = 0.0;
        } else {
            *value = (input.get(idx) - b.min) / (b.max - b.min);
        }
    }
    ScaledFeatureVector::new(values)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bounds.rs"]
mod tests;
