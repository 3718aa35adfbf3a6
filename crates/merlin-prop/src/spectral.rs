use merlin_core::errors::{require_finite, require_positive, ErrorInfo, MerlinError};
use merlin_core::hash::round_f64;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::propagator::Spin2Propagator;

fn spectral_error(code: &str, message: impl Into<String>) -> MerlinError {
    MerlinError::Config(ErrorInfo::new(code, message))
}

fn default_omega_min() -> f64 {
    0.0
}

fn default_omega_max() -> f64 {
    5.0
}

fn default_points() -> usize {
    500
}

fn default_retarded_eps() -> f64 {
    1e-6
}

/// Frequency grid and retarded prescription for a spectral scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpectralOpts {
    /// Lower end of the frequency grid (inclusive).
    #[serde(default = "default_omega_min")]
    pub omega_min: f64,
    /// Upper end of the frequency grid (inclusive).
    #[serde(default = "default_omega_max")]
    pub omega_max: f64,
    /// Number of grid points.
    #[serde(default = "default_points")]
    pub points: usize,
    /// Retarded shift `ω → ω + iε`.
    #[serde(default = "default_retarded_eps")]
    pub retarded_eps: f64,
}

impl Default for SpectralOpts {
    fn default() -> Self {
        Self {
            omega_min: default_omega_min(),
            omega_max: default_omega_max(),
            points: default_points(),
            retarded_eps: default_retarded_eps(),
        }
    }
}

impl SpectralOpts {
    /// Grid over `[omega_min, omega_max]` with the default prescription.
    pub fn over(omega_min: f64, omega_max: f64) -> Self {
        Self {
            omega_min,
            omega_max,
            ..Self::default()
        }
    }

    /// Rejects empty or inverted grids.
    pub fn validate(&self) -> Result<(), MerlinError> {
        require_finite("omega_min", self.omega_min)?;
        require_finite("omega_max", self.omega_max)?;
        require_positive("retarded_eps", self.retarded_eps)?;
        if self.points == 0 {
            return Err(spectral_error(
                "empty-grid",
                "spectral scans require at least one frequency point",
            ));
        }
        if self.omega_max < self.omega_min {
            return Err(spectral_error(
                "inverted-range",
                format!(
                    "omega_max {} is below omega_min {}",
                    self.omega_max, self.omega_min
                ),
            ));
        }
        Ok(())
    }

    fn grid(&self) -> Vec<f64> {
        match self.points {
            0 => Vec::new(),
            1 => vec![self.omega_min],
            n => {
                let step = (self.omega_max - self.omega_min) / (n - 1) as f64;
                (0..n)
                    .map(|idx| {
                        if idx == n - 1 {
                            self.omega_max
                        } else {
                            self.omega_min + step * idx as f64
                        }
                    })
                    .collect()
            }
        }
    }
}

/// Spectral density `ρ(ω) = −2·Im D((ω + iε)²)` sampled on a grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpectralDensity {
    /// Frequency grid.
    pub omegas: Vec<f64>,
    /// Density at each grid point.
    pub density: Vec<f64>,
    /// Retarded shift used for the evaluation.
    pub retarded_eps: f64,
}

impl SpectralDensity {
    /// Grid point with the largest density, if any.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.omegas
            .iter()
            .copied()
            .zip(self.density.iter().copied())
            .filter(|(_, rho)| rho.is_finite())
            .fold(None, |best, (omega, rho)| match best {
                Some((_, best_rho)) if best_rho >= rho => best,
                _ => Some((omega, rho)),
            })
    }
}

/// Evaluates the retarded spectral density of the propagator.
pub fn resonance_spectrum(propagator: &Spin2Propagator, opts: &SpectralOpts) -> SpectralDensity {
    let omegas = opts.grid();
    let density = omegas
        .iter()
        .map(|&omega| {
            let shifted = Complex64::new(omega, opts.retarded_eps);
            -2.0 * propagator.evaluate(shifted * shifted).im
        })
        .collect();
    SpectralDensity {
        omegas: omegas.into_iter().map(round_f64).collect(),
        density,
        retarded_eps: opts.retarded_eps,
    }
}
