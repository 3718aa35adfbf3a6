#![deny(missing_docs)]
#![doc = "Heuristic mappings from the Merlin ghost resonance onto gravitational-wave echo observables: parity-alternating modulation, Donoghue-Menezes echo trains and LISA-band estimates."]

pub mod lisa;
/// Donoghue-Menezes unstable resonance mapping.
pub mod mapping;
/// Contour angle and parity modulation.
pub mod parity;
/// Prediction report assembly.
pub mod report;

pub use lisa::{
    is_detectable, Detectability, LisaContourParameters, LisaGhostObservables,
    RetrocausalSignature, DEFAULT_NOISE_FLOOR, SNR_THRESHOLD,
};
pub use mapping::{
    AnalyticContinuation, BranchCutPolicy, ContourPrescription, DonoghueMenezesMapping,
    ResonancePrescriptions, UnitaritySubspace, UnitarityVerdict, DEFAULT_ECHOES,
};
pub use num_complex::Complex64;
pub use parity::ParityContourConnection;
pub use report::{predict, PredictOpts, PredictionHeadline, PredictionReport};
