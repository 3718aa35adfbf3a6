#![deny(missing_docs)]
#![doc = "Spin-2 ghost propagator evaluation, midpoint contour integration along real-axis and Lee-Wick paths, and retarded spectral densities."]

/// Propagator parameter sets.
pub mod config;
/// Midpoint contour integration and preset paths.
pub mod contour;
/// The two-pole spin-2 propagator.
pub mod propagator;
/// Aggregated propagator report assembly.
pub mod report;
/// Retarded spectral density scans.
pub mod spectral;

pub use config::PropagatorConfig;
pub use contour::{
    contour_integral, contour_report, convergence_change, integrate, integrate_with,
    residue_check, ContourMethod, ContourPath, ContourReport, LeeWickPath, RealAxisPath,
    ResidueCheck, LEE_WICK_SAMPLES, REAL_AXIS_SAMPLES,
};
pub use num_complex::Complex64;
pub use propagator::Spin2Propagator;
pub use report::{propagator_report, PropOpts, PropagatorReport};
pub use spectral::{resonance_spectrum, SpectralDensity, SpectralOpts};
