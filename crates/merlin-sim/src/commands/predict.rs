use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use merlin_pheno::{predict, PredictOpts, PredictionHeadline};
use merlin_prop::{propagator_report, PropOpts};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{load_yaml_or_default, print_json, write_json};

/// Combined run file: propagator analysis plus phenomenology.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub propagator: PropOpts,
    #[serde(default)]
    pub phenomenology: PredictOpts,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// YAML run config with `propagator` and `phenomenology` sections.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output directory for the report artefacts.
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Serialize)]
struct PredictSummary {
    propagator_hash: String,
    prediction_hash: String,
    lee_wick_convergence: f64,
    residue_rel_error: f64,
    headline: PredictionHeadline,
}

pub fn run(args: &PredictArgs) -> Result<(), Box<dyn Error>> {
    let config: RunConfig = load_yaml_or_default(args.config.as_ref())?;
    let propagator = propagator_report(&config.propagator)?;
    let prediction = predict(&config.phenomenology)?;

    fs::create_dir_all(&args.out)?;
    write_json(&args.out.join("propagator_report.json"), &propagator)?;
    write_json(&args.out.join("prediction_report.json"), &prediction)?;
    info!(
        propagator = %propagator.report_hash,
        prediction = %prediction.report_hash,
        "reports written"
    );

    print_json(&PredictSummary {
        propagator_hash: propagator.report_hash,
        prediction_hash: prediction.report_hash,
        lee_wick_convergence: propagator.lee_wick_convergence,
        residue_rel_error: propagator.residue.rel_error,
        headline: prediction.headline,
    })
}
