use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::MerlinError;
use crate::serde::to_canonical_json_bytes;

/// Computes a stable hexadecimal hash for the provided serialisable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, MerlinError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

/// Rounds a floating point value to the 1e-9 granularity used in report hashes.
///
/// Non-finite values pass through untouched so that blown-up integrals remain
/// visible in the artefacts.
pub fn round_f64(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * 1e9).round() / 1e9
}
