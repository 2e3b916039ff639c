use std::fmt;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::models::error::OpenError;
use crate::models::request::{Direction, StreamRequest};
use crate::models::snapshot::StreamSnapshot;
use crate::models::state::PathChoice;
use crate::traits::backend::BackendStream;

/// Direction × transport of a backend stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamVariant {
    CaptureFastPath,
    CaptureCompat,
    PlaybackFastPath,
    PlaybackCompat,
}

impl StreamVariant {
    pub fn direction(self) -> Direction {
        match self {
            Self::CaptureFastPath | Self::CaptureCompat => Direction::Input,
            Self::PlaybackFastPath | Self::PlaybackCompat => Direction::Output,
        }
    }

    pub fn path(self) -> PathChoice {
        match self {
            Self::CaptureFastPath | Self::PlaybackFastPath => PathChoice::FastPath,
            Self::CaptureCompat | Self::PlaybackCompat => PathChoice::Compat,
        }
    }
}

impl fmt::Display for StreamVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CaptureFastPath => "capture-fastpath",
            Self::CaptureCompat => "capture-compat",
            Self::PlaybackFastPath => "playback-fastpath",
            Self::PlaybackCompat => "playback-compat",
        };
        f.write_str(name)
    }
}

/// A backend stream shared between the builder and the caller.
///
/// Always held in an `Arc`; the strong count is the stream's reference count
/// and the stream is dropped when it reaches zero, whichever holder releases
/// last.
pub struct AudioStream {
    id: Uuid,
    variant: StreamVariant,
    created_at: DateTime<Utc>,
    backend: Box<dyn BackendStream>,
    /// Request the stream was successfully opened with.
    opened_with: Mutex<Option<StreamRequest>>,
}

impl AudioStream {
    pub fn new(variant: StreamVariant, backend: Box<dyn BackendStream>) -> Self {
        Self {
            id: Uuid::new_v4(),
            variant,
            created_at: Utc::now(),
            backend,
            opened_with: Mutex::new(None),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn variant(&self) -> StreamVariant {
        self.variant
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the backend reports the memory-mapped fast path.
    pub fn is_fast_path(&self) -> bool {
        self.backend.is_fast_path()
    }

    pub fn is_open(&self) -> bool {
        self.opened_with.lock().is_some()
    }

    pub fn backend(&self) -> &dyn BackendStream {
        self.backend.as_ref()
    }

    /// Open the backend and remember the parameters it accepted.
    pub fn open(&self, request: &StreamRequest) -> Result<(), OpenError> {
        self.backend.open(request)?;
        *self.opened_with.lock() = Some(request.clone());
        Ok(())
    }

    /// Actual configuration, or None if the stream never opened.
    pub fn snapshot(&self) -> Option<StreamSnapshot> {
        let guard = self.opened_with.lock();
        let request = guard.as_ref()?;
        Some(StreamSnapshot {
            id: self.id,
            variant: self.variant.to_string(),
            fast_path: self.is_fast_path(),
            direction: request.direction,
            sharing_mode: request.sharing_mode,
            performance_mode: request.performance_mode,
            session_id: request.session_id,
            input_preset: request.input_preset,
            privacy_sensitive: request.privacy_sensitive,
            sample_rate: request.sample_rate,
            channel_count: request.channel_count,
            frames_per_data_callback: request.frames_per_data_callback,
            created_at: self.created_at,
        })
    }
}

impl fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioStream")
            .field("id", &self.id)
            .field("variant", &self.variant)
            .field("fast_path", &self.is_fast_path())
            .field("open", &self.is_open())
            .finish()
    }
}
