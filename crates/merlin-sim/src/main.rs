use std::error::Error;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    contour::{self, ContourArgs},
    predict::{self, PredictArgs},
    propagator::{self, PropagatorArgs},
    spectrum::{self, SpectrumArgs},
    version::{self, VersionArgs},
};
use tracing::Level;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "merlin-sim", about = "Quadratic-gravity ghost propagator toolkit")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the propagator at a single squared momentum.
    Propagator(PropagatorArgs),
    /// Integrate the propagator along a preset contour.
    Contour(ContourArgs),
    /// Scan the retarded spectral density and write it to disk.
    Spectrum(SpectrumArgs),
    /// Produce the propagator and phenomenology reports.
    Predict(PredictArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Propagator(args) => propagator::run(&args),
        Command::Contour(args) => contour::run(&args),
        Command::Spectrum(args) => spectrum::run(&args),
        Command::Predict(args) => predict::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
