mod input;
mod model;
mod report;
mod schema;
mod session;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::model::radar::RadarOptions;
use crate::report::write_reports;
use crate::session::Session;

#[derive(Debug, Parser)]
#[command(
    name = "cytodx",
    version,
    about = "Breast-mass diagnosis support from cell-nucleus measurement panels"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one measurement set and write the report bundle
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Reference dataset (.csv or .csv.gz)
    #[arg(long)]
    data: PathBuf,

    /// Fitted scaler artifact
    #[arg(long, default_value = "model/scaler.json")]
    scaler: PathBuf,

    /// Fitted classifier artifact
    #[arg(long, default_value = "model/model.json")]
    model: PathBuf,

    /// Output directory for the report bundle
    #[arg(long)]
    out: PathBuf,

    /// Override one measurement as KEY=VALUE (repeatable); unset features
    /// stay at the reference mean
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Keep radar values outside [0, 1] instead of clipping them
    #[arg(long)]
    no_clamp: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run_evaluation(&args),
    }
}

fn run_evaluation(args: &RunArgs) -> Result<(), String> {
    let overrides = parse_overrides(&args.set)?;

    let session =
        Session::open(&args.data, &args.scaler, &args.model).map_err(|e| e.to_string())?;

    let radar_opts = RadarOptions {
        clamp_unit_range: !args.no_clamp,
    };
    let eval = session.evaluate(&overrides, &radar_opts);

    if let Some(p) = &eval.prediction {
        tracing::info!(
            diagnosis = p.diagnosis.label(),
            p_benign = p.p_benign,
            p_malignant = p.p_malignant,
            "cell cluster prediction"
        );
    }

    write_reports(&session, &eval, &args.out).map_err(|e| e.to_string())?;
    tracing::info!("report bundle written to {}", args.out.display());

    Ok(())
}

fn parse_overrides(set: &[String]) -> Result<Vec<(usize, f64)>, String> {
    let mut out = Vec::with_capacity(set.len());
    for raw in set {
        out.push(parse_override(raw)?);
    }
    Ok(out)
}

fn parse_override(raw: &str) -> Result<(usize, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid --set {raw:?} (use KEY=VALUE)"))?;
    let key = key.trim();
    let idx =
        schema::feature_index(key).ok_or_else(|| format!("unknown feature {key:?} in --set"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid value in --set {raw:?}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("value for {key:?} must be finite and non-negative"));
    }
    Ok((idx, value))
}
