use serde::{Deserialize, Serialize};

/// Whether a policy permits the memory-mapped fast path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Never,
    Auto,
    Always,
    #[default]
    Unspecified,
}

impl Disposition {
    pub fn is_specified(self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

/// Policy axis queried from the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAxis {
    /// General fast-path policy.
    Default,
    /// Fast-path policy for exclusive streams.
    Exclusive,
}

/// One device's entry in the system policy info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyInfo {
    #[serde(default)]
    pub device: Option<String>,
    pub disposition: Disposition,
}

impl PolicyInfo {
    pub fn new(disposition: Disposition) -> Self {
        Self {
            device: None,
            disposition,
        }
    }
}

/// Resolved dispositions for both axes. Never `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectivePolicy {
    pub general: Disposition,
    pub exclusive: Disposition,
}
