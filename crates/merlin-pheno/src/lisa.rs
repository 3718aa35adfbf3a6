//! Mass-scaled ghost observables in the LISA band.
//!
//! Inputs are in solar masses and Hz while the ghost mass scaling works in
//! Planck units; the cross-unit constants live in [`merlin_core::units`].

use std::f64::consts::PI;

use merlin_core::errors::{require_positive, MerlinError};
use merlin_core::units::{
    CHARACTERISTIC_FREQUENCY_HZ, PLANCK_MASS_SOLAR, PLANCK_TIME_S, REFERENCE_F2,
    SOLAR_LIGHT_CROSSING_S,
};
use serde::{Deserialize, Serialize};

/// Effective SNR above which an echo counts as detectable.
pub const SNR_THRESHOLD: f64 = 5.0;

/// Conservative echo reflectivity `R²`.
pub const REFLECTIVITY_SQ: f64 = 0.3;

/// Strain of a supermassive merger at `z ~ 0.1`.
pub const REFERENCE_STRAIN: f64 = 1e-20;

/// Channel count assumed for supermassive black holes.
pub const SUPERMASSIVE_N_EFF: f64 = 10.0;

/// Default detector noise floor.
pub const DEFAULT_NOISE_FLOOR: f64 = 1e-20;

/// Lead time of a pre-echo, in Planck times.
pub const PRE_ECHO_LEAD: f64 = 10.0;

/// Pre-echo amplitude above which the signature counts as observable.
pub const PRE_ECHO_THRESHOLD: f64 = 1e-5;

fn default_mass_solar() -> f64 {
    1e6
}

fn default_f_lisa() -> f64 {
    1e-3
}

/// Strict comparison against [`SNR_THRESHOLD`]; exactly 5.0 is not detectable.
pub fn is_detectable(effective_snr: f64) -> bool {
    effective_snr > SNR_THRESHOLD
}

/// Black hole and detector band for the LISA estimates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LisaGhostObservables {
    /// Black hole mass in solar masses.
    #[serde(default = "default_mass_solar")]
    pub mass_solar: f64,
    /// Probe frequency in Hz.
    #[serde(default = "default_f_lisa")]
    pub f_lisa: f64,
}

impl Default for LisaGhostObservables {
    fn default() -> Self {
        Self {
            mass_solar: default_mass_solar(),
            f_lisa: default_f_lisa(),
        }
    }
}

/// Contour deformation parameters at LISA frequencies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LisaContourParameters {
    /// Contour angle `atan(m_g_eff)`.
    pub theta_rad: f64,
    /// Parity parameter in the LISA band.
    pub epsilon: f64,
    /// Predicted channel count `θ / (π/5.6)`.
    pub n_eff_pred: f64,
    /// Echo delay `M · 4.92e-6 · ln(M/M_Pl)` in seconds.
    pub echo_delay_s: f64,
    /// Mass-scaled ghost mass `2.15 · (M/M_Pl)^{1/3}`.
    pub m_g_eff: f64,
    /// Characteristic frequency `0.03 / (M/M_Pl)` in Hz.
    pub f0_hz: f64,
}

/// Signal-to-noise estimate for an echo search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Detectability {
    /// Echo strain amplitude.
    pub h_echo: f64,
    /// `|ε|` in the LISA band.
    pub modulation_depth: f64,
    /// Effective SNR with `N_eff` channels.
    pub effective_snr: f64,
    /// `effective_snr > 5`.
    pub detectable: bool,
}

/// Pre-merger echo from acausal ghost propagation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RetrocausalSignature {
    /// Acausal advance `1/m_g_eff` converted with the Planck time.
    pub acausal_time_s: f64,
    /// `exp(−m_g_eff · 10)`.
    pub pre_echo_amplitude: f64,
    /// `pre_echo_amplitude > 1e-5`.
    pub observable: bool,
}

impl LisaGhostObservables {
    /// Rejects non-positive masses and frequencies.
    pub fn validate(&self) -> Result<(), MerlinError> {
        require_positive("lisa.mass_solar", self.mass_solar)?;
        require_positive("lisa.f_lisa", self.f_lisa)
    }

    /// Black hole mass over the Planck mass.
    pub fn mass_ratio(&self) -> f64 {
        self.mass_solar / PLANCK_MASS_SOLAR
    }

    /// Holdom-Ren style scaling `m_g ∝ (M/M_Pl)^{1/3}`.
    pub fn m_g_eff(&self) -> f64 {
        REFERENCE_F2 * self.mass_ratio().powf(1.0 / 3.0)
    }

    /// Contour angle, parity parameter, channel count and echo delay.
    pub fn contour_parameters(&self) -> LisaContourParameters {
        let ratio = self.mass_ratio();
        let m_g_eff = self.m_g_eff();
        let theta = m_g_eff.atan();
        let omega = 2.0 * PI * self.f_lisa;
        let epsilon = -theta.sin() * (omega / m_g_eff).tanh();
        LisaContourParameters {
            theta_rad: theta,
            epsilon,
            n_eff_pred: theta / (PI / 5.6),
            echo_delay_s: self.mass_solar * SOLAR_LIGHT_CROSSING_S * ratio.ln(),
            m_g_eff,
            f0_hz: CHARACTERISTIC_FREQUENCY_HZ / ratio,
        }
    }

    /// Effective SNR of the zig-zag modulation against `noise_floor`.
    pub fn detectability_estimate(&self, noise_floor: f64) -> Detectability {
        let h_echo = REFERENCE_STRAIN * REFLECTIVITY_SQ.sqrt();
        let modulation_depth = self.contour_parameters().epsilon.abs();
        let effective_snr = h_echo * modulation_depth * SUPERMASSIVE_N_EFF.sqrt() / noise_floor;
        Detectability {
            h_echo,
            modulation_depth,
            effective_snr,
            detectable: is_detectable(effective_snr),
        }
    }

    /// Acausal pre-echo estimate.
    pub fn retrocausal_signature(&self) -> RetrocausalSignature {
        let m_g_eff = self.m_g_eff();
        let dt_acausal = 1.0 / m_g_eff;
        let pre_echo_amplitude = (-m_g_eff * PRE_ECHO_LEAD).exp();
        RetrocausalSignature {
            acausal_time_s: dt_acausal * PLANCK_TIME_S,
            pre_echo_amplitude,
            observable: pre_echo_amplitude > PRE_ECHO_THRESHOLD,
        }
    }
}
