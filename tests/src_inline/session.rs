use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

use crate::model::Diagnosis;
use crate::model::artifacts::{ClassifierArtifact, ScalerArtifact};
use crate::report;
use crate::schema;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("cytodx_session_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_dataset(path: &Path) {
    let mut contents = String::new();
    contents.push_str("id,diagnosis,");
    contents.push_str(
        &schema::features()
            .iter()
            .map(|d| d.key)
            .collect::<Vec<_>>()
            .join(","),
    );
    contents.push('\n');
    for (id, diagnosis, value) in [(1, "M", 10.0), (2, "B", 20.0)] {
        contents.push_str(&format!("{id},{diagnosis}"));
        for _ in schema::features() {
            contents.push_str(&format!(",{value}"));
        }
        contents.push('\n');
    }
    fs::write(path, contents).unwrap();
}

fn write_artifacts(dir: &Path) -> (PathBuf, PathBuf) {
    let names: Vec<String> = schema::features().iter().map(|d| d.key.to_string()).collect();
    let scaler = ScalerArtifact {
        feature_names: names.clone(),
        center: vec![15.0; schema::FEATURE_COUNT],
        scale: vec![5.0; schema::FEATURE_COUNT],
    };
    let classifier = ClassifierArtifact {
        feature_names: names,
        coefficients: vec![0.1; schema::FEATURE_COUNT],
        intercept: 0.0,
    };
    let scaler_path = dir.join("scaler.json");
    let model_path = dir.join("model.json");
    fs::write(&scaler_path, serde_json::to_string(&scaler).unwrap()).unwrap();
    fs::write(&model_path, serde_json::to_string(&classifier).unwrap()).unwrap();
    (scaler_path, model_path)
}

fn open_session(dir: &Path) -> Session {
    let data_path = dir.join("data.csv");
    write_dataset(&data_path);
    let (scaler_path, model_path) = write_artifacts(dir);
    Session::open(&data_path, &scaler_path, &model_path).unwrap()
}

#[test]
fn test_default_input_is_reference_mean() {
    let dir = make_temp_dir();
    let session = open_session(&dir);

    let input = session.default_input();
    for idx in 0..schema::FEATURE_COUNT {
        assert_eq!(input.get(idx), 15.0);
    }
}

#[test]
fn test_evaluate_applies_overrides_and_scales() {
    let dir = make_temp_dir();
    let session = open_session(&dir);

    let idx = schema::feature_index("radius_mean").unwrap();
    let eval = session.evaluate(&[(idx, 12.5)], &RadarOptions::default());

    assert_eq!(eval.input.get(idx), 12.5);
    // (12.5 - 10) / (20 - 10)
    assert_eq!(eval.scaled.get(idx), 0.25);
    assert_eq!(eval.radar.mean[0], 0.25);
    assert!(eval.prediction.is_some());
    assert!(eval.prediction_error.is_none());
}

#[test]
fn test_later_override_wins() {
    let dir = make_temp_dir();
    let session = open_session(&dir);

    let idx = schema::feature_index("texture_mean").unwrap();
    let eval = session.evaluate(&[(idx, 11.0), (idx, 13.0)], &RadarOptions::default());
    assert_eq!(eval.input.get(idx), 13.0);
}

#[test]
fn test_prediction_label_matches_probabilities() {
    let dir = make_temp_dir();
    let session = open_session(&dir);

    let eval = session.evaluate(&[], &RadarOptions::default());
    let p = eval.prediction.unwrap();
    assert!((p.p_benign + p.p_malignant - 1.0).abs() < 1e-12);
    let expected = if p.p_malignant >= p.p_benign {
        Diagnosis::Malignant
    } else {
        Diagnosis::Benign
    };
    assert_eq!(p.diagnosis, expected);
}

#[test]
fn test_missing_model_degrades_to_radar_only() {
    let dir = make_temp_dir();
    let data_path = dir.join("data.csv");
    write_dataset(&data_path);

    let session = Session::open(
        &data_path,
        &dir.join("absent_scaler.json"),
        &dir.join("absent_model.json"),
    )
    .unwrap();
    assert!(session.bundle.is_none());
    assert!(session.model_note.is_some());

    let eval = session.evaluate(&[], &RadarOptions::default());
    assert!(eval.prediction.is_none());
    assert_eq!(eval.radar.mean.len(), schema::CATEGORY_COUNT);
    assert!(session.prediction_note(&eval).is_some());
}

#[test]
fn test_missing_dataset_is_fatal() {
    let dir = make_temp_dir();
    let err = Session::open(
        &dir.join("absent.csv"),
        &dir.join("scaler.json"),
        &dir.join("model.json"),
    )
    .unwrap_err();
    assert!(matches!(err, InputError::DataUnavailable(_)));
}

#[test]
fn test_write_reports_bundle() {
    let dir = make_temp_dir();
    let session = open_session(&dir);
    let eval = session.evaluate(&[], &RadarOptions::default());

    let out_dir = dir.join("out");
    report::write_reports(&session, &eval, &out_dir).unwrap();

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["tool"]["name"], "cytodx");
    assert_eq!(summary["dataset"]["n_rows"], 2);
    assert_eq!(summary["input"].as_array().unwrap().len(), 30);
    assert!(summary["prediction"]["p_malignant"].is_number());

    let report_txt = fs::read_to_string(out_dir.join("report.txt")).unwrap();
    assert!(report_txt.contains("Cell cluster prediction"));
    assert!(report_txt.contains("The cell cluster is:"));

    let radar_tsv = fs::read_to_string(out_dir.join("radar.tsv")).unwrap();
    let lines: Vec<&str> = radar_tsv.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "category\tmean\tse\tworst");
    assert!(lines[1].starts_with("Radius\t"));
    assert!(lines[10].starts_with("Fractal Dimension\t"));
}
