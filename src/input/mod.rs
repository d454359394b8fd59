use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

pub mod cache;
pub mod table;

use cache::PathCache;
use table::read_table;

use crate::model::Diagnosis;
use crate::model::vector::FeatureVector;
use crate::schema::{self, FEATURE_COUNT};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("data unavailable: {0}")]
    DataUnavailable(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    pub rows: Vec<FeatureVector>,
    pub labels: Vec<u8>,
}

impl ReferenceDataset {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn label_counts(&self) -> (usize, usize) {
        let malignant = self.labels.iter().filter(|&&l| l == 1).count();
        (self.labels.len() - malignant, malignant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnRole {
    Feature(usize),
    Label,
    Ignore,
}

fn resolve_columns(header: &[String]) -> Result<Vec<ColumnRole>, InputError> {
    let mut roles = Vec::with_capacity(header.len());
    let mut seen = [false; FEATURE_COUNT];
    let mut label_seen = false;

    for name in header {
        if name.is_empty() || name == "id" || name.starts_with("Unnamed:") {
            roles.push(ColumnRole::Ignore);
            continue;
        }
        if name == "diagnosis" {
            if label_seen {
                return Err(InputError::DataUnavailable(
                    "duplicate diagnosis column".to_string(),
                ));
            }
            label_seen = true;
            roles.push(ColumnRole::Label);
            continue;
        }
        match schema::feature_index(name) {
            Some(idx) => {
                if seen[idx] {
                    return Err(InputError::DataUnavailable(format!(
                        "duplicate feature column {name:?}"
                    )));
                }
                seen[idx] = true;
                roles.push(ColumnRole::Feature(idx));
            }
            None => {
                return Err(InputError::DataUnavailable(format!(
                    "unknown column {name:?}"
                )));
            }
        }
    }

    if !label_seen {
        return Err(InputError::DataUnavailable(
            "missing diagnosis column".to_string(),
        ));
    }
    let missing: Vec<&str> = schema::features()
        .iter()
        .enumerate()
        .filter(|(idx, _)| !seen[*idx])
        .map(|(_, def)| def.key)
        .collect();
    if !missing.is_empty() {
        return Err(InputError::DataUnavailable(format!(
            "missing feature columns: {}",
            missing.join(", ")
        )));
    }

    Ok(roles)
}

pub fn load_reference_dataset(path: &Path) -> Result<ReferenceDataset, InputError> {
    if !path.exists() {
        return Err(InputError::DataUnavailable(format!(
            "reference dataset not found: {}",
            path.display()
        )));
    }

    let table = read_table(path)?;
    let roles = resolve_columns(&table.header)?;

    let mut rows = Vec::with_capacity(table.rows.len());
    let mut labels = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        let mut values = [0f64; FEATURE_COUNT];
        let mut label = None;
        for (role, field) in roles.iter().zip(&row.fields) {
            match role {
                ColumnRole::Feature(idx) => {
                    let value: f64 = field.parse().map_err(|_| {
                        InputError::Parse(format!(
                            "line {}: column {:?}: invalid number {:?}",
                            row.line,
                            schema::feature_key(*idx),
                            field
                        ))
                    })?;
                    if !value.is_finite() {
                        return Err(InputError::Parse(format!(
                            "line {}: column {:?}: non-finite value {:?}",
                            row.line,
                            schema::feature_key(*idx),
                            field
                        )));
                    }
                    values[*idx] = value;
                }
                ColumnRole::Label => {
                    label = Some(Diagnosis::from_symbol(field).ok_or_else(|| {
                        InputError::InvalidInput(format!(
                            "line {}: unknown diagnosis value {:?} (expected M or B)",
                            row.line, field
                        ))
                    })?);
                }
                ColumnRole::Ignore => {}
            }
        }
        let label = label.ok_or_else(|| {
            InputError::Parse(format!("line {}: missing diagnosis value", row.line))
        })?;
        rows.push(FeatureVector::new(values));
        labels.push(label.code());
    }

    if rows.is_empty() {
        return Err(InputError::DataUnavailable(format!(
            "{}: no data rows",
            path.display()
        )));
    }

    let dataset = ReferenceDataset { rows, labels };
    let (benign, malignant) = dataset.label_counts();
    tracing::info!(
        rows = dataset.n_rows(),
        benign,
        malignant,
        "loaded reference dataset"
    );
    Ok(dataset)
}

static DATASET_CACHE: PathCache<ReferenceDataset> = PathCache::new();

pub fn load_reference_dataset_cached(path: &Path) -> Result<Arc<ReferenceDataset>, InputError> {
    DATASET_CACHE.get_or_load(path, load_reference_dataset)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
