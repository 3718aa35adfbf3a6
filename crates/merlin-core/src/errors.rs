//! Structured error types shared across Merlin crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`MerlinError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (parameter names, offending values, paths).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the Merlin toolkit.
///
/// The numeric kernels never return this type; it only surfaces when loading
/// or validating configuration and when encoding artefacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum MerlinError {
    /// Invalid or inconsistent configuration parameters.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem errors raised while reading configs or writing artefacts.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl MerlinError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            MerlinError::Config(info) | MerlinError::Serde(info) | MerlinError::Io(info) => info,
        }
    }
}

impl From<std::io::Error> for MerlinError {
    fn from(err: std::io::Error) -> Self {
        MerlinError::Io(
            ErrorInfo::new("io", err.to_string()).with_context("kind", format!("{:?}", err.kind())),
        )
    }
}

/// Rejects a parameter that is not a finite number.
pub fn require_finite(name: &str, value: f64) -> Result<(), MerlinError> {
    if value.is_finite() {
        return Ok(());
    }
    Err(MerlinError::Config(
        ErrorInfo::new("non-finite-parameter", format!("{name} must be finite"))
            .with_context("parameter", name)
            .with_context("value", value.to_string()),
    ))
}

/// Rejects a parameter that is not a finite, strictly positive number.
pub fn require_positive(name: &str, value: f64) -> Result<(), MerlinError> {
    require_finite(name, value)?;
    if value > 0.0 {
        return Ok(());
    }
    Err(MerlinError::Config(
        ErrorInfo::new("non-positive-parameter", format!("{name} must be positive"))
            .with_context("parameter", name)
            .with_context("value", value.to_string()),
    ))
}
