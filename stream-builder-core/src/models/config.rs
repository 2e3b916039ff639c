use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::policy::{Disposition, PolicyAxis};

/// Hard default for the general fast-path policy.
pub const DEFAULT_MMAP_POLICY: Disposition = Disposition::Never;

/// Hard default for the exclusive fast-path policy.
pub const DEFAULT_MMAP_EXCLUSIVE_POLICY: Disposition = Disposition::Never;

/// Process-level configuration for a `StreamBuilder`.
///
/// Owned by the composition root and handed to the builder at construction.
/// Overrides left `Unspecified` defer to the system policy info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Explicit override for the general fast-path policy.
    pub mmap_policy: Disposition,

    /// Explicit override for the exclusive fast-path policy.
    pub mmap_exclusive_policy: Disposition,

    /// Dump request parameters at info level at the start of each build.
    pub log_parameters: bool,
}

impl BuilderConfig {
    /// Override configured for `axis`.
    pub fn policy_override(&self, axis: PolicyAxis) -> Disposition {
        match axis {
            PolicyAxis::Default => self.mmap_policy,
            PolicyAxis::Exclusive => self.mmap_exclusive_policy,
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            mmap_policy: Disposition::Unspecified,
            mmap_exclusive_policy: Disposition::Unspecified,
            log_parameters: true,
        }
    }
}
