use merlin_core::errors::{require_finite, require_positive, MerlinError};
use merlin_core::hash::{round_f64, stable_hash_string};
use merlin_core::provenance::Provenance;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::lisa::{
    Detectability, LisaContourParameters, LisaGhostObservables, RetrocausalSignature,
    DEFAULT_NOISE_FLOOR,
};
use crate::mapping::{
    DonoghueMenezesMapping, ResonancePrescriptions, UnitarityVerdict, DEFAULT_ECHOES,
};
use crate::parity::ParityContourConnection;

fn default_probe_omega() -> f64 {
    1.0
}

fn default_zigzag_steps() -> usize {
    6
}

fn default_n_echoes() -> usize {
    DEFAULT_ECHOES
}

fn default_noise_floor() -> f64 {
    DEFAULT_NOISE_FLOOR
}

/// Parameters for a full phenomenology prediction run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictOpts {
    /// Parity/contour connection parameters.
    #[serde(default)]
    pub parity: ParityContourConnection,
    /// Donoghue-Menezes mapping parameters.
    #[serde(default)]
    pub mapping: DonoghueMenezesMapping,
    /// LISA source and band.
    #[serde(default)]
    pub lisa: LisaGhostObservables,
    /// Frequency (Planck units) at which `ε` and the echo train are probed.
    #[serde(default = "default_probe_omega")]
    pub probe_omega: f64,
    /// Number of zig-zag steps to tabulate.
    #[serde(default = "default_zigzag_steps")]
    pub zigzag_steps: usize,
    /// Number of echoes in the transfer function.
    #[serde(default = "default_n_echoes")]
    pub n_echoes: usize,
    /// Detector noise floor for the SNR estimate.
    #[serde(default = "default_noise_floor")]
    pub noise_floor: f64,
}

impl Default for PredictOpts {
    fn default() -> Self {
        Self {
            parity: ParityContourConnection::default(),
            mapping: DonoghueMenezesMapping::default(),
            lisa: LisaGhostObservables::default(),
            probe_omega: default_probe_omega(),
            zigzag_steps: default_zigzag_steps(),
            n_echoes: default_n_echoes(),
            noise_floor: default_noise_floor(),
        }
    }
}

impl PredictOpts {
    /// Validates every nested section.
    pub fn validate(&self) -> Result<(), MerlinError> {
        self.parity.validate()?;
        self.mapping.validate()?;
        self.lisa.validate()?;
        require_finite("probe_omega", self.probe_omega)?;
        require_positive("noise_floor", self.noise_floor)
    }
}

/// Headline numbers of a prediction run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PredictionHeadline {
    /// LISA-band contour angle.
    pub theta_rad: f64,
    /// Zig-zag modulation depth `|ε|`.
    pub modulation_depth: f64,
    /// Predicted channel count.
    pub n_eff_pred: f64,
    /// Echo delay in seconds.
    pub echo_delay_s: f64,
    /// Effective SNR.
    pub effective_snr: f64,
    /// Whether the SNR clears the threshold.
    pub detectable: bool,
}

/// Deterministic prediction bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionReport {
    /// Content addressed hash of the report body.
    pub report_hash: String,
    /// Provenance of the run.
    pub provenance: Provenance,
    /// Summary fields.
    pub headline: PredictionHeadline,
    /// Planck-unit contour rotation angle `arg(m_p² + i·m_g)/2`.
    pub contour_angle: f64,
    /// `ε` at the probe frequency.
    pub epsilon_probe: f64,
    /// Zig-zag damping for echoes `0..zigzag_steps` at the probe frequency.
    pub zigzag: Vec<f64>,
    /// Ghost decay width.
    pub decay_width: f64,
    /// Resonance prescriptions.
    pub prescriptions: ResonancePrescriptions,
    /// Echo phase factors at the probe frequency.
    pub echo_train: Vec<Complex64>,
    /// Loop unitarity verdict.
    pub unitarity: UnitarityVerdict,
    /// LISA contour parameters.
    pub lisa: LisaContourParameters,
    /// Detectability estimate.
    pub detectability: Detectability,
    /// Pre-echo signature.
    pub retrocausal: RetrocausalSignature,
}

/// Evaluates every phenomenology formula and emits a [`PredictionReport`].
pub fn predict(opts: &PredictOpts) -> Result<PredictionReport, MerlinError> {
    opts.validate()?;

    let contour_angle = opts.parity.contour_angle();
    let epsilon_probe = opts.parity.epsilon_omega(opts.probe_omega);
    let zigzag = opts
        .parity
        .zigzag_sequence(opts.probe_omega, opts.zigzag_steps)
        .into_iter()
        .map(round_f64)
        .collect();
    debug!(contour_angle, epsilon_probe, "parity modulation evaluated");

    let echo_train = opts
        .mapping
        .echo_transfer_function(opts.probe_omega, opts.n_echoes)
        .into_iter()
        .map(|t| Complex64::new(round_f64(t.re), round_f64(t.im)))
        .collect();

    let lisa = opts.lisa.contour_parameters();
    let detectability = opts.lisa.detectability_estimate(opts.noise_floor);
    let retrocausal = opts.lisa.retrocausal_signature();
    info!(
        n_eff = lisa.n_eff_pred,
        snr = detectability.effective_snr,
        detectable = detectability.detectable,
        "lisa estimate"
    );

    let headline = PredictionHeadline {
        theta_rad: lisa.theta_rad,
        modulation_depth: detectability.modulation_depth,
        n_eff_pred: lisa.n_eff_pred,
        echo_delay_s: lisa.echo_delay_s,
        effective_snr: detectability.effective_snr,
        detectable: detectability.detectable,
    };

    let mut report = PredictionReport {
        report_hash: String::new(),
        provenance: Provenance::for_config(env!("CARGO_PKG_VERSION"), opts)?,
        headline,
        contour_angle,
        epsilon_probe,
        zigzag,
        decay_width: opts.mapping.decay_width(),
        prescriptions: opts.mapping.unstable_resonance_prescription(),
        echo_train,
        unitarity: opts.mapping.loop_unitarity_check(),
        lisa,
        detectability,
        retrocausal,
    };
    report.report_hash = stable_hash_string(&(
        &report.provenance.config_hash,
        &report.headline,
        &report.zigzag,
        &report.echo_train,
        report.decay_width,
        &report.retrocausal,
    ))?;
    Ok(report)
}
