//! Pre-flight range checks.
//!
//! Only rejects values far enough out of range to risk arithmetic overflow
//! further down. The audio service performs the authoritative validation.

use crate::models::error::BuildError;
use crate::models::request::{PerformanceMode, StreamRequest};

pub const SAMPLES_PER_FRAME_MIN: i32 = 1;
pub const SAMPLES_PER_FRAME_MAX: i32 = 28;
pub const SAMPLE_RATE_HZ_MIN: i32 = 8000;
// HDMI supports up to 32 channels at 1536000 Hz.
pub const SAMPLE_RATE_HZ_MAX: i32 = 1_600_000;
pub const FRAMES_PER_DATA_CALLBACK_MIN: i32 = 1;
pub const FRAMES_PER_DATA_CALLBACK_MAX: i32 = 1024 * 1024;

pub fn validate(request: &StreamRequest) -> Result<(), BuildError> {
    check_range(
        "sample rate",
        request.sample_rate,
        SAMPLE_RATE_HZ_MIN,
        SAMPLE_RATE_HZ_MAX,
    )?;
    check_range(
        "channel count",
        request.channel_count,
        SAMPLES_PER_FRAME_MIN,
        SAMPLES_PER_FRAME_MAX,
    )?;

    if let PerformanceMode::Unknown(code) = request.performance_mode {
        log::error!("illegal performanceMode = {}", code);
        return Err(BuildError::IllegalArgument(format!(
            "performance mode {}",
            code
        )));
    }

    check_range(
        "framesPerDataCallback",
        request.frames_per_data_callback,
        FRAMES_PER_DATA_CALLBACK_MIN,
        FRAMES_PER_DATA_CALLBACK_MAX,
    )
}

fn check_range(name: &str, value: Option<i32>, min: i32, max: i32) -> Result<(), BuildError> {
    match value {
        Some(v) if !(min..=max).contains(&v) => {
            log::error!("{} out of range = {}", name, v);
            Err(BuildError::OutOfRange(format!("{} = {}", name, v)))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_valid() {
        assert_eq!(validate(&StreamRequest::default()), Ok(()));
    }

    #[test]
    fn unknown_performance_mode_is_illegal() {
        let request = StreamRequest {
            performance_mode: PerformanceMode::from(13),
            ..Default::default()
        };
        assert!(matches!(validate(&request), Err(BuildError::IllegalArgument(_))));
    }

    #[test]
    fn frames_per_callback_bounds() {
        for frames in [1, 256, FRAMES_PER_DATA_CALLBACK_MAX] {
            let request = StreamRequest {
                frames_per_data_callback: Some(frames),
                ..Default::default()
            };
            assert_eq!(validate(&request), Ok(()), "frames = {}", frames);
        }
        for frames in [0, -1, FRAMES_PER_DATA_CALLBACK_MAX + 1, i32::MAX] {
            let request = StreamRequest {
                frames_per_data_callback: Some(frames),
                ..Default::default()
            };
            assert!(
                matches!(validate(&request), Err(BuildError::OutOfRange(_))),
                "frames = {}",
                frames
            );
        }
    }

    #[test]
    fn sample_rate_and_channels_bounds() {
        let request = StreamRequest {
            sample_rate: Some(SAMPLE_RATE_HZ_MIN - 1),
            ..Default::default()
        };
        assert!(matches!(validate(&request), Err(BuildError::OutOfRange(_))));

        let request = StreamRequest {
            channel_count: Some(SAMPLES_PER_FRAME_MAX + 1),
            ..Default::default()
        };
        assert!(matches!(validate(&request), Err(BuildError::OutOfRange(_))));

        let request = StreamRequest {
            sample_rate: Some(48000),
            channel_count: Some(2),
            ..Default::default()
        };
        assert_eq!(validate(&request), Ok(()));
    }
}
