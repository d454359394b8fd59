use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

pub mod json;
pub mod text;

use crate::schema::{self, CATEGORY_COUNT};
use crate::session::{Evaluation, Session};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub path: String,
    pub n_rows: usize,
    pub n_benign: usize,
    pub n_malignant: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoundsEntry {
    pub key: &'static str,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub degenerate: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub raw: f64,
    pub scaled: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarSummary {
    pub categories: Vec<&'static str>,
    pub mean: Vec<f64>,
    pub se: Vec<f64>,
    pub worst: Vec<f64>,
    pub clamped: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionSummary {
    pub diagnosis: &'static str,
    pub code: u8,
    pub p_benign: f64,
    pub p_malignant: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub dataset: DatasetSummary,
    pub bounds: Vec<BoundsEntry>,
    pub input: Vec<InputEntry>,
    pub radar: RadarSummary,
    pub prediction: Option<PredictionSummary>,
    pub prediction_note: Option<String>,
}

pub fn build_summary(session: &Session, eval: &Evaluation) -> SummaryData {
    let (n_benign, n_malignant) = session.dataset.label_counts();

    let mut bounds = Vec::with_capacity(schema::features().len());
    let mut input = Vec::with_capacity(schema::features().len());
    for (idx, def) in schema::features().iter().enumerate() {
        let b = session.bounds.get(idx);
        bounds.push(BoundsEntry {
            key: def.key,
            min: b.min,
            max: b.max,
            mean: b.mean,
            degenerate: b.degenerate,
        });
        input.push(InputEntry {
            key: def.key,
            label: def.label,
            raw: eval.input.get(idx),
            scaled: eval.scaled.get(idx),
        });
    }

    SummaryData {
        tool: ToolMeta {
            name: "cytodx",
            version: env!("CARGO_PKG_VERSION"),
        },
        dataset: DatasetSummary {
            path: session.dataset_path.display().to_string(),
            n_rows: session.dataset.n_rows(),
            n_benign,
            n_malignant,
        },
        bounds,
        input,
        radar: RadarSummary {
            categories: eval.radar.categories.to_vec(),
            mean: eval.radar.mean.to_vec(),
            se: eval.radar.se.to_vec(),
            worst: eval.radar.worst.to_vec(),
            clamped: eval.radar.clamped,
        },
        prediction: eval.prediction.map(|p| PredictionSummary {
            diagnosis: p.diagnosis.label(),
            code: p.diagnosis.code(),
            p_benign: p.p_benign,
            p_malignant: p.p_malignant,
        }),
        prediction_note: session.prediction_note(eval),
    }
}

pub fn write_reports(session: &Session, eval: &Evaluation, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let summary = build_summary(session, eval);

    let json = json::render_summary_json(&summary).map_err(std::io::Error::other)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = text::render_report_text(&summary);
    write_text(&out_dir.join("report.txt"), &report)?;

    write_radar_tsv(&summary, &out_dir.join("radar.tsv"))?;

    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    Ok(())
}

fn write_radar_tsv(summary: &SummaryData, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "category\tmean\tse\tworst")?;
    for i in 0..CATEGORY_COUNT {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            summary.radar.categories[i],
            format_f64_6(summary.radar.mean[i]),
            format_f64_6(summary.radar.se[i]),
            format_f64_6(summary.radar.worst[i])
        )?;
    }
    Ok(())
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}
