use crate::models::error::OpenError;
use crate::models::request::StreamRequest;

/// A transport-specific stream implementation.
///
/// Construction must not touch hardware; `open` does.
pub trait BackendStream: Send + Sync {
    /// Open the stream using the (corrected) request parameters.
    ///
    /// On failure the object must be safe to drop: the builder performs no
    /// teardown beyond releasing its reference.
    fn open(&self, request: &StreamRequest) -> Result<(), OpenError>;

    /// Whether this stream uses the memory-mapped fast path.
    fn is_fast_path(&self) -> bool;
}

/// Constructors for the four backend variants.
///
/// Each call returns a fresh, unopened stream.
pub trait BackendConstructors: Send + Sync {
    fn capture_fast_path(&self) -> Box<dyn BackendStream>;

    fn capture_compat(&self) -> Box<dyn BackendStream>;

    fn playback_fast_path(&self) -> Box<dyn BackendStream>;

    fn playback_compat(&self) -> Box<dyn BackendStream>;
}
