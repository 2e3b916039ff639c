use crate::models::error::ProviderError;
use crate::models::policy::{PolicyAxis, PolicyInfo};

/// Source of system-wide fast-path policy.
///
/// Implemented by:
/// - `StaticPolicyProvider` (fixed lists, from config or tests)
/// - Platform bindings to the audio policy service
pub trait PolicyInfoProvider: Send + Sync {
    /// Per-device policy entries for `axis`, in device order.
    ///
    /// May block on a call into the audio service. A failure is treated by
    /// the builder as "no information".
    fn query(&self, axis: PolicyAxis) -> Result<Vec<PolicyInfo>, ProviderError>;
}
