//! Provenance and schema descriptors stamped into every Merlin artefact.

use serde::{Deserialize, Serialize};

use crate::errors::MerlinError;
use crate::hash::stable_hash_string;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance information attached to every serialized report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Provenance {
    /// Schema version of the enclosing report.
    pub schema_version: SchemaVersion,
    /// Version of the crate that produced the report.
    pub crate_version: String,
    /// Source commit if known at build time, otherwise the crate version.
    pub commit: String,
    /// Canonical hash of the configuration the report was computed from.
    pub config_hash: String,
}

impl Provenance {
    /// Builds provenance for a report computed from `config`.
    pub fn for_config<T: Serialize>(
        crate_version: &str,
        config: &T,
    ) -> Result<Self, MerlinError> {
        Ok(Self {
            schema_version: SchemaVersion::default(),
            crate_version: crate_version.to_string(),
            commit: commit_string(crate_version),
            config_hash: stable_hash_string(config)?,
        })
    }
}

fn commit_string(fallback: &str) -> String {
    option_env!("GIT_COMMIT_HASH")
        .or_else(|| option_env!("VERGEN_GIT_SHA"))
        .map(|value| value.to_string())
        .unwrap_or_else(|| fallback.to_string())
}
