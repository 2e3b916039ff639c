use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use uuid::Uuid;

use crate::stream::audio_stream::AudioStream;
use crate::traits::stream_delegate::StreamDelegate;

/// Tracks opened streams without keeping them alive.
///
/// Entries are held as `Weak` references, so a stream disappears from the
/// registry once its last owner releases it.
#[derive(Default)]
pub struct ActiveStreamRegistry {
    streams: Mutex<Vec<Weak<AudioStream>>>,
}

impl ActiveStreamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered streams that are still alive.
    pub fn active_count(&self) -> usize {
        let mut streams = self.streams.lock();
        streams.retain(|weak| weak.strong_count() > 0);
        streams.len()
    }

    /// Ids of registered streams that are still alive, in registration order.
    pub fn active_ids(&self) -> Vec<Uuid> {
        self.streams
            .lock()
            .iter()
            .filter_map(Weak::upgrade)
            .map(|stream| stream.id())
            .collect()
    }
}

impl StreamDelegate for ActiveStreamRegistry {
    fn register_active(&self, stream: &Arc<AudioStream>) {
        let mut streams = self.streams.lock();
        streams.retain(|weak| weak.strong_count() > 0);
        streams.push(Arc::downgrade(stream));
    }

    fn log_actual_configuration(&self, stream: &AudioStream) {
        let Some(snapshot) = stream.snapshot() else {
            log::warn!("stream {} has no actual configuration: not open", stream.id());
            return;
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => log::info!("open actual: {}", json),
            Err(e) => log::warn!("failed to serialize stream snapshot: {}", e),
        }
    }
}
