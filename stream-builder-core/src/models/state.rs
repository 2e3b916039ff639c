use super::error::BuildError;

/// Transport chosen for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathChoice {
    /// Direct memory-mapped transport.
    FastPath,
    /// Transport through the shared mixing service.
    Compat,
}

/// Build state machine.
///
/// State transitions:
/// ```text
/// init → validated → policy_resolved → stream_created(path) → opened
///                                              ↓
///                                     open_failed(fast_path) → retrying → stream_created(compat) → opened
///                                              ↓                                    ↓
///                                            failed  ←───────────────────────── failed
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildState {
    Init,
    Validated,
    PolicyResolved {
        allow_fast_path: bool,
        allow_compat_path: bool,
    },
    StreamCreated(PathChoice),
    OpenFailed(PathChoice),
    Retrying,
    Opened(PathChoice),
    Failed(BuildError),
}

impl BuildState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Opened(_) | Self::Failed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
