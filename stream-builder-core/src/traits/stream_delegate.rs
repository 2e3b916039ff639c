use std::sync::Arc;

use crate::models::state::BuildState;
use crate::stream::audio_stream::AudioStream;

/// Accounting and logging hooks for a `StreamBuilder`.
///
/// All methods are best-effort; the builder observes no result.
/// Called on the thread running `build`.
pub trait StreamDelegate: Send + Sync {
    /// Called once per opened stream, before it is handed to the caller.
    ///
    /// Implementations may keep a clone or a `Weak` of the stream.
    fn register_active(&self, stream: &Arc<AudioStream>);

    /// Called once per opened stream to record its actual configuration.
    fn log_actual_configuration(&self, stream: &AudioStream);

    /// Called on every build state transition.
    fn on_state_changed(&self, _state: &BuildState) {}
}
