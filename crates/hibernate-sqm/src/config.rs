//! Engine configuration

use crate::DialectName;
use hibernate_sqm_diagnostics::{ErrorBuilder, Result, SQM0401, SQM0406};
use hibernate_sqm_function::DuplicatePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings read once at bootstrap
///
/// Missing JSON fields take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub dialect: DialectName,
    pub duplicate_function_policy: DuplicatePolicy,
    /// Register spatial functions for dialects that provide them
    pub spatial_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dialect: DialectName::Generic,
            duplicate_function_policy: DuplicatePolicy::Reject,
            spatial_enabled: true,
        }
    }
}

impl EngineConfig {
    pub fn for_dialect(dialect: DialectName) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ErrorBuilder::new(SQM0406, "Invalid engine configuration")
                .context(e.to_string())
                .system()
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ErrorBuilder::new(SQM0401, format!("Failed to read configuration file {}", path.display()))
                .context(e.to_string())
                .system()
        })?;
        Self::from_json(&json)
    }
}
