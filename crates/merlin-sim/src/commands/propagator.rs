use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use merlin_prop::{Complex64, Spin2Propagator};
use serde::Serialize;
use tracing::debug;

use super::{load_propagator_config, print_json};

#[derive(Args, Debug)]
pub struct PropagatorArgs {
    /// Real part of the squared momentum.
    #[arg(long, allow_hyphen_values = true)]
    pub re: f64,
    /// Imaginary part of the squared momentum.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub im: f64,
    /// YAML propagator config; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Evaluation {
    p_sq: Complex64,
    massless: Complex64,
    ghost: Complex64,
    value: Complex64,
    ghost_pole: Complex64,
}

pub fn run(args: &PropagatorArgs) -> Result<(), Box<dyn Error>> {
    let config = load_propagator_config(args.config.as_ref())?;
    let propagator = Spin2Propagator::new(config);
    let p_sq = Complex64::new(args.re, args.im);
    let evaluation = Evaluation {
        p_sq,
        massless: propagator.massless_term(p_sq),
        ghost: propagator.ghost_term(p_sq),
        value: propagator.evaluate(p_sq),
        ghost_pole: propagator.ghost_pole(),
    };
    debug!(re = args.re, im = args.im, "propagator evaluated");
    print_json(&evaluation)
}
