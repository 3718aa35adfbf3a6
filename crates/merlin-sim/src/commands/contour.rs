use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use merlin_prop::{
    contour_report, convergence_change, residue_check, ContourMethod, ContourReport, LeeWickPath,
    RealAxisPath, ResidueCheck, Spin2Propagator,
};
use serde::Serialize;
use tracing::info;

use super::{load_propagator_config, print_json};

fn parse_method(value: &str) -> Result<ContourMethod, Box<dyn Error>> {
    match value {
        "real" => Ok(ContourMethod::Real),
        "lee-wick" => Ok(ContourMethod::LeeWick),
        other => Err(format!("unknown contour method '{other}'").into()),
    }
}

#[derive(Args, Debug)]
pub struct ContourArgs {
    /// Preset path: "real" or "lee-wick".
    #[arg(long, default_value = "lee-wick")]
    pub method: String,
    /// Sub-intervals in the path parameter; the preset default when omitted.
    #[arg(long)]
    pub samples: Option<usize>,
    /// YAML propagator config; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Also integrate the ghost term around the closed loop.
    #[arg(long)]
    pub residue: bool,
}

#[derive(Debug, Serialize)]
struct ContourOutput {
    contour: ContourReport,
    /// Relative change when the sample count is doubled.
    refinement_change: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    residue: Option<ResidueCheck>,
}

pub fn run(args: &ContourArgs) -> Result<(), Box<dyn Error>> {
    let method = parse_method(&args.method)?;
    let samples = args.samples.unwrap_or_else(|| method.default_samples());
    if samples == 0 {
        return Err("--samples must be at least one".into());
    }
    let refined = samples
        .checked_mul(2)
        .ok_or("--samples is too large to refine")?;
    let config = load_propagator_config(args.config.as_ref())?;
    let propagator = Spin2Propagator::new(config);

    let contour = contour_report(&propagator, method, samples);
    let refinement_change = match method {
        ContourMethod::Real => {
            convergence_change(&propagator, &RealAxisPath::default(), samples, refined)
        }
        ContourMethod::LeeWick => {
            convergence_change(&propagator, &LeeWickPath::default(), samples, refined)
        }
    };
    info!(
        method = method.label(),
        samples,
        magnitude = contour.magnitude,
        refinement_change,
        "contour integrated"
    );
    let residue = args.residue.then(|| residue_check(&propagator, samples));
    print_json(&ContourOutput {
        contour,
        refinement_change,
        residue,
    })
}
