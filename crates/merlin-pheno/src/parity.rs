use merlin_core::errors::{require_positive, MerlinError};
use merlin_core::units::REFERENCE_F2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

fn default_m_g() -> f64 {
    REFERENCE_F2
}

fn default_m_p() -> f64 {
    1.0
}

/// Links the Lee-Wick contour rotation to a parity-alternating modulation of
/// echo reflectivity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParityContourConnection {
    /// Ghost mass in Planck units.
    #[serde(default = "default_m_g")]
    pub m_g: f64,
    /// Planck mass scale.
    #[serde(default = "default_m_p")]
    pub m_p: f64,
}

impl Default for ParityContourConnection {
    fn default() -> Self {
        Self {
            m_g: default_m_g(),
            m_p: default_m_p(),
        }
    }
}

impl ParityContourConnection {
    /// Rejects non-positive masses.
    pub fn validate(&self) -> Result<(), MerlinError> {
        require_positive("parity.m_g", self.m_g)?;
        require_positive("parity.m_p", self.m_p)
    }

    /// Contour rotation angle `arg(m_p² + i·m_g) / 2`.
    pub fn contour_angle(&self) -> f64 {
        Complex64::new(self.m_p * self.m_p, self.m_g).arg() / 2.0
    }

    /// Parity modulation `ε(ω)`.
    ///
    /// Linear in `ω` well below `m_g`, saturating above it, with a
    /// Lorentzian-like enhancement centred at `ω = m_g`. Vanishes at `ω = 0`.
    pub fn epsilon_omega(&self, omega: f64) -> f64 {
        let theta = self.contour_angle();
        let omega_tilde = omega / self.m_g;
        let epsilon = -theta.sin() * omega_tilde.tanh();
        let resonance = 1.0 + 0.5 / ((omega_tilde - 1.0).powi(2) + 0.1);
        epsilon * resonance
    }

    /// Reflectivity modulation `1 + ε(ω)·(−1)^n` of the `n`-th echo.
    pub fn zigzag_damping(&self, n: i64, omega: f64) -> f64 {
        let sign = if n.rem_euclid(2) == 0 { 1.0 } else { -1.0 };
        1.0 + self.epsilon_omega(omega) * sign
    }

    /// Modulation for echoes `0..steps`.
    pub fn zigzag_sequence(&self, omega: f64, steps: usize) -> Vec<f64> {
        (0..steps as i64)
            .map(|n| self.zigzag_damping(n, omega))
            .collect()
    }
}
