pub mod contour;
pub mod predict;
pub mod propagator;
pub mod spectrum;
pub mod version;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use merlin_core::{from_yaml_slice, to_canonical_json_bytes, to_canonical_json_pretty};
use merlin_prop::PropagatorConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

/// Reads a YAML config, falling back to defaults when no path is given.
pub fn load_yaml_or_default<T>(path: Option<&PathBuf>) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned + Default,
{
    match path {
        Some(path) => {
            let bytes = fs::read(path)?;
            info!(path = %path.display(), "loaded config");
            Ok(from_yaml_slice(&bytes)?)
        }
        None => Ok(T::default()),
    }
}

/// Loads and validates a propagator config.
pub fn load_propagator_config(path: Option<&PathBuf>) -> Result<PropagatorConfig, Box<dyn Error>> {
    let config: PropagatorConfig = load_yaml_or_default(path)?;
    config.validate()?;
    Ok(config)
}

/// Prints a value as a single line of canonical JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let json = to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}

/// Writes a value as pretty canonical JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    fs::write(path, to_canonical_json_pretty(value)?)?;
    info!(path = %path.display(), "wrote artefact");
    Ok(())
}
