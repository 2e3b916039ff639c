use std::fmt;

use serde::{Deserialize, Serialize};

/// Stream direction. `Unknown` carries a raw code that matched no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Playback.
    Output,
    /// Capture.
    Input,
    Unknown(i32),
}

impl Direction {
    pub const OUTPUT_CODE: i32 = 0;
    pub const INPUT_CODE: i32 = 1;

    pub fn code(self) -> i32 {
        match self {
            Self::Output => Self::OUTPUT_CODE,
            Self::Input => Self::INPUT_CODE,
            Self::Unknown(code) => code,
        }
    }
}

impl From<i32> for Direction {
    fn from(code: i32) -> Self {
        match code {
            Self::OUTPUT_CODE => Self::Output,
            Self::INPUT_CODE => Self::Input,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output => f.write_str("OUTPUT"),
            Self::Input => f.write_str("INPUT"),
            Self::Unknown(_) => f.write_str("?!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharingMode {
    Exclusive,
    Shared,
}

impl fmt::Display for SharingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclusive => f.write_str("EX"),
            Self::Shared => f.write_str("SH"),
        }
    }
}

/// Requested performance tier. `Unknown` carries a raw code that matched no tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceMode {
    None,
    PowerSaving,
    LowLatency,
    Unknown(i32),
}

impl PerformanceMode {
    pub const NONE_CODE: i32 = 10;
    pub const POWER_SAVING_CODE: i32 = 11;
    pub const LOW_LATENCY_CODE: i32 = 12;

    pub fn code(self) -> i32 {
        match self {
            Self::None => Self::NONE_CODE,
            Self::PowerSaving => Self::POWER_SAVING_CODE,
            Self::LowLatency => Self::LOW_LATENCY_CODE,
            Self::Unknown(code) => code,
        }
    }
}

impl From<i32> for PerformanceMode {
    fn from(code: i32) -> Self {
        match code {
            Self::NONE_CODE => Self::None,
            Self::POWER_SAVING_CODE => Self::PowerSaving,
            Self::LOW_LATENCY_CODE => Self::LowLatency,
            other => Self::Unknown(other),
        }
    }
}

/// Audio session used to attach effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionId {
    #[default]
    None,
    /// Ask the service to allocate a new session.
    Allocate,
    Id(i32),
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Allocate => f.write_str("allocate"),
            Self::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Capture use case. Only meaningful for input streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPreset {
    #[default]
    Unspecified,
    Generic,
    Camcorder,
    VoiceRecognition,
    VoiceCommunication,
    Unprocessed,
    VoicePerformance,
}

/// Caller's explicit privacy-sensitivity request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacySensitiveRequest {
    /// Not specified; inferred from the input preset.
    #[default]
    Default,
    Enabled,
    Disabled,
}

/// Parameters for a stream to be built.
///
/// Read by the builder, which writes back two corrections: `sharing_mode`
/// and `privacy_sensitive` hold the effective values once a build has passed
/// the decision step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRequest {
    pub direction: Direction,
    pub sharing_mode: SharingMode,
    pub performance_mode: PerformanceMode,
    pub session_id: SessionId,
    pub input_preset: InputPreset,
    pub privacy_sensitive_request: PrivacySensitiveRequest,

    /// Effective privacy flag, written by the builder.
    pub privacy_sensitive: bool,

    /// Frames per data callback (None = let the backend choose).
    pub frames_per_data_callback: Option<i32>,

    /// Sample rate in Hz (None = device default).
    pub sample_rate: Option<i32>,

    /// Samples per frame (None = device default).
    pub channel_count: Option<i32>,

    /// Specific device, or None for the routing default.
    pub device_id: Option<i32>,

    pub package_name: Option<String>,
    pub attribution_tag: Option<String>,
}

impl StreamRequest {
    pub fn is_input(&self) -> bool {
        matches!(self.direction, Direction::Input)
    }

    /// Dump the requested parameters at info level.
    pub fn log_parameters(&self) {
        log::info!(
            "rate = {:?}, channels = {:?}, sharing = {}, dir = {}",
            self.sample_rate,
            self.channel_count,
            self.sharing_mode,
            self.direction
        );
        log::info!(
            "device = {:?}, sessionId = {}, perfMode = {:?}, frames per callback = {:?}",
            self.device_id,
            self.session_id,
            self.performance_mode,
            self.frames_per_data_callback
        );
        log::info!(
            "inputPreset = {:?}, privacy sensitive = {} ({:?})",
            self.input_preset,
            self.privacy_sensitive,
            self.privacy_sensitive_request
        );
        log::info!(
            "packageName = {}, attributionTag = {}",
            self.package_name.as_deref().unwrap_or("(null)"),
            self.attribution_tag.as_deref().unwrap_or("(null)")
        );
    }
}

impl Default for StreamRequest {
    fn default() -> Self {
        Self {
            direction: Direction::Output,
            sharing_mode: SharingMode::Shared,
            performance_mode: PerformanceMode::None,
            session_id: SessionId::None,
            input_preset: InputPreset::Unspecified,
            privacy_sensitive_request: PrivacySensitiveRequest::Default,
            privacy_sensitive: false,
            frames_per_data_callback: None,
            sample_rate: None,
            channel_count: None,
            device_id: None,
            package_name: None,
            attribution_tag: None,
        }
    }
}
