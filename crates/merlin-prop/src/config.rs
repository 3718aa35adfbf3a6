use merlin_core::errors::{require_finite, require_positive, ErrorInfo, MerlinError};
use merlin_core::units::REFERENCE_F2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

fn default_f_2() -> f64 {
    REFERENCE_F2
}

fn default_m_p() -> f64 {
    1.0
}

fn default_gamma() -> f64 {
    1.0
}

fn default_spin2_factor() -> f64 {
    5.0
}

fn default_regulator() -> f64 {
    1e-10
}

/// Physical parameters of the quadratic-gravity propagator.
///
/// The values are in natural units with the Planck mass normalised to
/// `m_p`. `spin2_factor` is the scalar trace of the transverse-traceless
/// projector (five polarisations of a massive spin-2 field).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PropagatorConfig {
    /// Stelle coupling, the ratio `m_g / m_p`.
    #[serde(default = "default_f_2")]
    pub f_2: f64,
    /// Planck mass scale.
    #[serde(default = "default_m_p")]
    pub m_p: f64,
    /// Decay width of the ghost resonance.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Multiplicity applied to both pole terms.
    #[serde(default = "default_spin2_factor")]
    pub spin2_factor: f64,
    /// Imaginary offset `δ` added to the massless denominator.
    #[serde(default = "default_regulator")]
    pub regulator: f64,
}

impl Default for PropagatorConfig {
    fn default() -> Self {
        Self {
            f_2: default_f_2(),
            m_p: default_m_p(),
            gamma: default_gamma(),
            spin2_factor: default_spin2_factor(),
            regulator: default_regulator(),
        }
    }
}

impl PropagatorConfig {
    /// Ghost mass `m_g = f_2 · m_p`.
    pub fn m_g(&self) -> f64 {
        self.f_2 * self.m_p
    }

    /// Complex pole `m_p² + i·Γ·m_g` of the ghost term.
    pub fn complex_mass_sq(&self) -> Complex64 {
        Complex64::new(self.m_p * self.m_p, self.gamma * self.m_g())
    }

    /// Checks that every parameter is usable. The propagator itself never
    /// validates its inputs; this is for configs read from disk.
    pub fn validate(&self) -> Result<(), MerlinError> {
        require_positive("f_2", self.f_2)?;
        require_positive("m_p", self.m_p)?;
        require_finite("gamma", self.gamma)?;
        require_finite("spin2_factor", self.spin2_factor)?;
        require_finite("regulator", self.regulator)?;
        if self.regulator < 0.0 {
            return Err(MerlinError::Config(
                ErrorInfo::new("negative-regulator", "regulator must not be negative")
                    .with_context("value", self.regulator.to_string())
                    .with_hint("a negative offset moves the massless pole across the real axis"),
            ));
        }
        Ok(())
    }
}
