#![deny(missing_docs)]
#![doc = "Shared errors, provenance, canonical serialization and unit constants for the Merlin quadratic-gravity toolkit."]

pub mod errors;
/// Canonical hashing helpers.
pub mod hash;
pub mod provenance;
/// Canonical JSON and YAML serde helpers.
pub mod serde;
pub mod units;

pub use errors::{require_finite, require_positive, ErrorInfo, MerlinError};
pub use hash::{round_f64, stable_hash_string};
pub use provenance::{Provenance, SchemaVersion};
pub use crate::serde::{
    from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_canonical_json_pretty,
};
