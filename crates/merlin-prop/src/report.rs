use merlin_core::errors::{ErrorInfo, MerlinError};
use merlin_core::hash::{round_f64, stable_hash_string};
use merlin_core::provenance::Provenance;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PropagatorConfig;
use crate::contour::{
    contour_report, convergence_change, residue_check, ContourMethod, ContourReport, LeeWickPath,
    ResidueCheck, LEE_WICK_SAMPLES, REAL_AXIS_SAMPLES,
};
use crate::propagator::Spin2Propagator;
use crate::spectral::{resonance_spectrum, SpectralDensity, SpectralOpts};

fn report_error(code: &str, message: impl Into<String>) -> MerlinError {
    MerlinError::Config(ErrorInfo::new(code, message))
}

fn default_real_samples() -> usize {
    REAL_AXIS_SAMPLES
}

fn default_lee_wick_samples() -> usize {
    LEE_WICK_SAMPLES
}

fn default_residue_samples() -> usize {
    1000
}

/// Aggregated configuration for a propagator analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropOpts {
    /// Propagator parameters.
    #[serde(default)]
    pub propagator: PropagatorConfig,
    /// Sub-intervals for the real-axis preset.
    #[serde(default = "default_real_samples")]
    pub real_samples: usize,
    /// Sub-intervals for the Lee-Wick preset. The convergence probe compares
    /// this count against twice its value.
    #[serde(default = "default_lee_wick_samples")]
    pub lee_wick_samples: usize,
    /// Sub-intervals per leg of the residue loop.
    #[serde(default = "default_residue_samples")]
    pub residue_samples: usize,
    /// Spectral scan configuration.
    #[serde(default)]
    pub spectrum: SpectralOpts,
}

impl Default for PropOpts {
    fn default() -> Self {
        Self {
            propagator: PropagatorConfig::default(),
            real_samples: default_real_samples(),
            lee_wick_samples: default_lee_wick_samples(),
            residue_samples: default_residue_samples(),
            spectrum: SpectralOpts::default(),
        }
    }
}

impl PropOpts {
    /// Validates every nested section.
    pub fn validate(&self) -> Result<(), MerlinError> {
        self.propagator.validate()?;
        self.spectrum.validate()?;
        for (name, samples) in [
            ("real_samples", self.real_samples),
            ("lee_wick_samples", self.lee_wick_samples),
            ("residue_samples", self.residue_samples),
        ] {
            if samples == 0 {
                return Err(report_error(
                    "zero-samples",
                    format!("{name} must be at least one"),
                ));
            }
        }
        if self.lee_wick_samples.checked_mul(2).is_none() {
            return Err(MerlinError::Config(
                ErrorInfo::new(
                    "too-many-samples",
                    "lee_wick_samples cannot be doubled for the convergence probe",
                )
                .with_context("lee_wick_samples", self.lee_wick_samples.to_string()),
            ));
        }
        Ok(())
    }
}

/// Deterministic propagator analysis bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropagatorReport {
    /// Content addressed hash of the report body.
    pub report_hash: String,
    /// Provenance of the run.
    pub provenance: Provenance,
    /// Parameters the propagator was built from.
    pub config: PropagatorConfig,
    /// Complex mass-squared of the ghost.
    pub complex_mass_sq: Complex64,
    /// Upper half-plane ghost pole in the momentum plane.
    pub ghost_pole: Complex64,
    /// Residue of the ghost term at the pole.
    pub ghost_residue: Complex64,
    /// Real-axis and Lee-Wick preset integrals.
    pub contours: Vec<ContourReport>,
    /// Closed-loop residue comparison.
    pub residue: ResidueCheck,
    /// Relative change of the Lee-Wick integral when doubling samples.
    pub lee_wick_convergence: f64,
    /// Retarded spectral density.
    pub spectrum: SpectralDensity,
}

fn rounded(value: Complex64) -> Complex64 {
    Complex64::new(round_f64(value.re), round_f64(value.im))
}

/// Runs every propagator diagnostic and emits a [`PropagatorReport`].
pub fn propagator_report(opts: &PropOpts) -> Result<PropagatorReport, MerlinError> {
    opts.validate()?;
    let propagator = Spin2Propagator::new(opts.propagator);

    let contours = vec![
        contour_report(&propagator, ContourMethod::Real, opts.real_samples),
        contour_report(&propagator, ContourMethod::LeeWick, opts.lee_wick_samples),
    ];
    for contour in &contours {
        debug!(
            method = contour.method.label(),
            samples = contour.samples,
            magnitude = contour.magnitude,
            finite = contour.finite,
            "contour integrated"
        );
    }

    let mut residue = residue_check(&propagator, opts.residue_samples);
    residue.closed_integral = rounded(residue.closed_integral);
    residue.expected = rounded(residue.expected);
    debug!(
        rel_error = residue.rel_error,
        encloses = residue.encloses_ghost_pole,
        "residue loop closed"
    );

    let lee_wick_convergence = round_f64(convergence_change(
        &propagator,
        &LeeWickPath::default(),
        opts.lee_wick_samples,
        opts.lee_wick_samples.saturating_mul(2),
    ));
    let spectrum = resonance_spectrum(&propagator, &opts.spectrum);

    let mut report = PropagatorReport {
        report_hash: String::new(),
        provenance: Provenance::for_config(env!("CARGO_PKG_VERSION"), opts)?,
        config: opts.propagator,
        complex_mass_sq: rounded(propagator.complex_mass_sq()),
        ghost_pole: rounded(propagator.ghost_pole()),
        ghost_residue: rounded(propagator.ghost_residue()),
        contours,
        residue,
        lee_wick_convergence,
        spectrum,
    };
    report.report_hash = stable_hash_string(&(
        &report.provenance.config_hash,
        &report.complex_mass_sq,
        &report.contours,
        &report.residue,
        report.lee_wick_convergence,
        &report.spectrum,
    ))?;
    Ok(report)
}
