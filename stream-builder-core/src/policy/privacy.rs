use crate::models::request::{Direction, InputPreset, PrivacySensitiveRequest, StreamRequest};

/// Effective privacy-sensitivity for `request`.
///
/// An explicit request wins. Otherwise communication and camcorder captures
/// are privacy sensitive by default.
pub fn infer_privacy(request: &StreamRequest) -> bool {
    match request.privacy_sensitive_request {
        PrivacySensitiveRequest::Enabled => true,
        PrivacySensitiveRequest::Disabled => false,
        PrivacySensitiveRequest::Default => {
            request.direction == Direction::Input
                && matches!(
                    request.input_preset,
                    InputPreset::Camcorder | InputPreset::VoiceCommunication
                )
        }
    }
}
