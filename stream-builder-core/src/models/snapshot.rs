use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::request::{Direction, InputPreset, PerformanceMode, SessionId, SharingMode};

/// Actual configuration of an opened stream.
///
/// Serializable for the open-actual log line and for export to diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSnapshot {
    pub id: Uuid,
    pub variant: String,
    pub fast_path: bool,
    pub direction: Direction,
    pub sharing_mode: SharingMode,
    pub performance_mode: PerformanceMode,
    pub session_id: SessionId,
    pub input_preset: InputPreset,
    pub privacy_sensitive: bool,
    pub sample_rate: Option<i32>,
    pub channel_count: Option<i32>,
    pub frames_per_data_callback: Option<i32>,
    pub created_at: DateTime<Utc>,
}
