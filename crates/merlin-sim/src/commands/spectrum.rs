use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use merlin_prop::{resonance_spectrum, SpectralOpts, Spin2Propagator};
use serde::Serialize;
use tracing::info;

use super::{load_propagator_config, print_json, write_json};

#[derive(Args, Debug)]
pub struct SpectrumArgs {
    /// Lower end of the frequency grid.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub omega_min: f64,
    /// Upper end of the frequency grid.
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    pub omega_max: f64,
    /// Number of grid points, endpoints included.
    #[arg(long, default_value_t = 500)]
    pub points: usize,
    /// Retarded shift applied to each frequency.
    #[arg(long, default_value_t = 1e-6)]
    pub eps: f64,
    /// YAML propagator config; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output directory for `spectrum.json`.
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Serialize)]
struct SpectrumSummary {
    points: usize,
    peak_omega: Option<f64>,
    peak_density: Option<f64>,
    artefact: String,
}

pub fn run(args: &SpectrumArgs) -> Result<(), Box<dyn Error>> {
    let config = load_propagator_config(args.config.as_ref())?;
    let opts = SpectralOpts {
        points: args.points,
        retarded_eps: args.eps,
        ..SpectralOpts::over(args.omega_min, args.omega_max)
    };
    opts.validate()?;

    let density = resonance_spectrum(&Spin2Propagator::new(config), &opts);
    let peak = density.peak();
    info!(points = density.omegas.len(), ?peak, "spectral scan complete");

    fs::create_dir_all(&args.out)?;
    let path = args.out.join("spectrum.json");
    write_json(&path, &density)?;
    print_json(&SpectrumSummary {
        points: density.omegas.len(),
        peak_omega: peak.map(|(omega, _)| omega),
        peak_density: peak.map(|(_, rho)| rho),
        artefact: path.display().to_string(),
    })
}
