use std::sync::Arc;

use crate::models::error::BuildError;
use crate::models::request::Direction;
use crate::models::state::PathChoice;
use crate::stream::audio_stream::{AudioStream, StreamVariant};
use crate::traits::backend::BackendConstructors;

/// Variant for a direction and path. Unknown directions are illegal.
pub fn select_variant(direction: Direction, path: PathChoice) -> Result<StreamVariant, BuildError> {
    match (direction, path) {
        (Direction::Input, PathChoice::FastPath) => Ok(StreamVariant::CaptureFastPath),
        (Direction::Input, PathChoice::Compat) => Ok(StreamVariant::CaptureCompat),
        (Direction::Output, PathChoice::FastPath) => Ok(StreamVariant::PlaybackFastPath),
        (Direction::Output, PathChoice::Compat) => Ok(StreamVariant::PlaybackCompat),
        (Direction::Unknown(code), _) => {
            log::error!("bad direction = {}", code);
            Err(BuildError::IllegalArgument(format!("direction {}", code)))
        }
    }
}

/// Construct an unopened stream for `direction` over `path`.
///
/// The returned `Arc` is the only reference.
pub fn create_stream(
    constructors: &dyn BackendConstructors,
    direction: Direction,
    path: PathChoice,
) -> Result<Arc<AudioStream>, BuildError> {
    let variant = select_variant(direction, path)?;
    let backend = match variant {
        StreamVariant::CaptureFastPath => constructors.capture_fast_path(),
        StreamVariant::CaptureCompat => constructors.capture_compat(),
        StreamVariant::PlaybackFastPath => constructors.playback_fast_path(),
        StreamVariant::PlaybackCompat => constructors.playback_compat(),
    };
    Ok(Arc::new(AudioStream::new(variant, backend)))
}
