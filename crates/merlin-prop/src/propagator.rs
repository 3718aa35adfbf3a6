use num_complex::Complex64;

use crate::config::PropagatorConfig;

/// Spin-2 propagator with a massless graviton pole and a complex-mass ghost.
///
/// ```text
/// D(p²) = s · [ 1/(p² − m_p² + iδ) − 1/(p² − m²) ],   m² = m_p² + iΓm_g
/// ```
///
/// The second term enters with a relative minus sign: it is the negative
/// residue (ghost) mode. Evaluation never fails; near either pole the output
/// can be arbitrarily large and callers must tolerate that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin2Propagator {
    config: PropagatorConfig,
    m_p_sq: f64,
    complex_mass_sq: Complex64,
}

impl Default for Spin2Propagator {
    fn default() -> Self {
        Self::new(PropagatorConfig::default())
    }
}

impl Spin2Propagator {
    /// Builds a propagator and caches the derived pole locations.
    pub fn new(config: PropagatorConfig) -> Self {
        Self {
            config,
            m_p_sq: config.m_p * config.m_p,
            complex_mass_sq: config.complex_mass_sq(),
        }
    }

    /// Configuration the propagator was built from.
    pub fn config(&self) -> &PropagatorConfig {
        &self.config
    }

    /// Complex mass-squared of the ghost pole.
    pub fn complex_mass_sq(&self) -> Complex64 {
        self.complex_mass_sq
    }

    /// Massless graviton contribution, positive residue.
    pub fn massless_term(&self, p_sq: Complex64) -> Complex64 {
        let denom = p_sq - self.m_p_sq + Complex64::new(0.0, self.config.regulator);
        self.config.spin2_factor * denom.inv()
    }

    /// Ghost contribution including its minus sign.
    pub fn ghost_term(&self, p_sq: Complex64) -> Complex64 {
        let denom = p_sq - self.complex_mass_sq;
        -self.config.spin2_factor * denom.inv()
    }

    /// Full propagator at a complex squared momentum.
    pub fn evaluate(&self, p_sq: Complex64) -> Complex64 {
        self.massless_term(p_sq) + self.ghost_term(p_sq)
    }

    /// Full propagator at a real squared momentum.
    pub fn evaluate_real(&self, p_sq: f64) -> Complex64 {
        self.evaluate(Complex64::new(p_sq, 0.0))
    }

    /// Root of `p² = m²` in the upper half of the complex momentum plane.
    pub fn ghost_pole(&self) -> Complex64 {
        let root = self.complex_mass_sq.sqrt();
        if root.im < 0.0 {
            -root
        } else {
            root
        }
    }

    /// Residue of `p ↦ ghost_term(p²)` at [`Self::ghost_pole`].
    pub fn ghost_residue(&self) -> Complex64 {
        -self.config.spin2_factor / (2.0 * self.ghost_pole())
    }
}
