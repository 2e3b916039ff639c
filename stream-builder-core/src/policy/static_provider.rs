use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::error::{ConfigError, ProviderError};
use crate::models::policy::{PolicyAxis, PolicyInfo};
use crate::traits::policy_provider::PolicyInfoProvider;

/// Policy provider backed by fixed per-axis lists.
///
/// JSON form:
/// ```text
/// { "default": [{ "device": "speaker", "disposition": "auto" }],
///   "exclusive": [{ "disposition": "never" }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticPolicyProvider {
    pub default: Vec<PolicyInfo>,
    pub exclusive: Vec<PolicyInfo>,
}

impl StaticPolicyProvider {
    pub fn new(default: Vec<PolicyInfo>, exclusive: Vec<PolicyInfo>) -> Self {
        Self { default, exclusive }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl PolicyInfoProvider for StaticPolicyProvider {
    fn query(&self, axis: PolicyAxis) -> Result<Vec<PolicyInfo>, ProviderError> {
        Ok(match axis {
            PolicyAxis::Default => self.default.clone(),
            PolicyAxis::Exclusive => self.exclusive.clone(),
        })
    }
}
