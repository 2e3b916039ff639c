//! # stream-builder-core
//!
//! Audio stream acquisition core.
//!
//! Decides between the memory-mapped fast path and the service-mixed compat
//! path, resolves process- and system-level policy, opens the stream with a
//! single compat fallback, and hands the opened stream to callers that can
//! only hold a plain handle. Transports and the system policy source plug in
//! through the traits in `traits/`.
//!
//! ## Architecture
//!
//! ```text
//! stream-builder-core (this crate)
//! ├── traits/    ← PolicyInfoProvider, BackendStream, BackendConstructors, StreamDelegate
//! ├── models/    ← StreamRequest, Disposition, BuilderConfig, BuildError, BuildState, StreamSnapshot
//! ├── policy/    ← policy reduction/resolution, decision engine, privacy inference
//! ├── builder/   ← validator, stream factory, StreamBuilder, checkout/checkin
//! └── stream/    ← AudioStream, ActiveStreamRegistry
//! ```

pub mod builder;
pub mod models;
pub mod policy;
pub mod stream;
pub mod traits;

#[cfg(test)]
mod testing;

// Re-export key types at crate root for convenience.
pub use builder::handoff::{checkin, checkout, OpaqueHandle};
pub use builder::orchestrator::StreamBuilder;
pub use models::config::BuilderConfig;
pub use models::error::{BuildError, ConfigError, OpenError, ProviderError};
pub use models::policy::{Disposition, EffectivePolicy, PolicyAxis, PolicyInfo};
pub use models::request::{
    Direction, InputPreset, PerformanceMode, PrivacySensitiveRequest, SessionId, SharingMode,
    StreamRequest,
};
pub use models::snapshot::StreamSnapshot;
pub use models::state::{BuildState, PathChoice};
pub use policy::decision::Decision;
pub use policy::static_provider::StaticPolicyProvider;
pub use stream::audio_stream::{AudioStream, StreamVariant};
pub use stream::registry::ActiveStreamRegistry;
pub use traits::backend::{BackendConstructors, BackendStream};
pub use traits::policy_provider::PolicyInfoProvider;
pub use traits::stream_delegate::StreamDelegate;
