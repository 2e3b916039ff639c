use crate::models::error::BuildError;
use crate::models::policy::{Disposition, EffectivePolicy};
use crate::models::request::{PerformanceMode, SessionId, SharingMode, StreamRequest};
use crate::models::state::PathChoice;

/// Which transports a build may try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub allow_fast_path: bool,
    pub allow_compat_path: bool,
    pub effective_sharing_mode: SharingMode,
    /// The requested sharing mode was downgraded.
    pub sharing_mode_corrected: bool,
}

impl Decision {
    /// Fails with `NoBackendAvailable` when neither path is allowed.
    pub fn ensure_backend(&self) -> Result<(), BuildError> {
        if !self.allow_fast_path && !self.allow_compat_path {
            log::error!("no backend available: neither fast path nor compat path is allowed");
            return Err(BuildError::NoBackendAvailable);
        }
        Ok(())
    }

    /// Path to try first.
    pub fn first_path(&self) -> PathChoice {
        if self.allow_fast_path {
            PathChoice::FastPath
        } else {
            PathChoice::Compat
        }
    }
}

/// Decide which transports are allowed for `request`.
///
/// Steps run in order and only ever narrow: the sharing-mode downgrade comes
/// first so later steps see the effective mode.
pub fn decide(policy: &EffectivePolicy, request: &StreamRequest) -> Decision {
    let mut effective_sharing_mode = request.sharing_mode;
    let mut sharing_mode_corrected = false;
    if effective_sharing_mode == SharingMode::Exclusive && policy.exclusive == Disposition::Never {
        log::debug!("EXCLUSIVE sharing mode not supported. Use SHARED.");
        effective_sharing_mode = SharingMode::Shared;
        sharing_mode_corrected = true;
    }

    let mut allow_fast_path = policy.general != Disposition::Never;
    let allow_compat_path = policy.general != Disposition::Always;

    if request.performance_mode != PerformanceMode::LowLatency {
        if allow_fast_path {
            log::debug!("fast path not used because low latency was not requested");
        }
        allow_fast_path = false;
    }

    // Session effects only exist on the compat path.
    if request.session_id != SessionId::None {
        if allow_fast_path {
            log::debug!("fast path not used because session id {} was specified", request.session_id);
        }
        allow_fast_path = false;
    }

    Decision {
        allow_fast_path,
        allow_compat_path,
        effective_sharing_mode,
        sharing_mode_corrected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Disposition::*;

    fn policy(general: Disposition, exclusive: Disposition) -> EffectivePolicy {
        EffectivePolicy { general, exclusive }
    }

    fn low_latency() -> StreamRequest {
        StreamRequest {
            performance_mode: PerformanceMode::LowLatency,
            ..Default::default()
        }
    }

    #[test]
    fn exclusive_downgraded_when_exclusive_policy_never() {
        let request = StreamRequest {
            sharing_mode: SharingMode::Exclusive,
            ..low_latency()
        };
        let decision = decide(&policy(Auto, Never), &request);
        assert_eq!(decision.effective_sharing_mode, SharingMode::Shared);
        assert!(decision.sharing_mode_corrected);
    }

    #[test]
    fn exclusive_kept_when_exclusive_policy_allows() {
        let request = StreamRequest {
            sharing_mode: SharingMode::Exclusive,
            ..low_latency()
        };
        for exclusive in [Auto, Always] {
            let decision = decide(&policy(Auto, exclusive), &request);
            assert_eq!(decision.effective_sharing_mode, SharingMode::Exclusive);
            assert!(!decision.sharing_mode_corrected);
        }
    }

    #[test]
    fn general_policy_sets_both_paths() {
        let request = low_latency();

        let never = decide(&policy(Never, Never), &request);
        assert!(!never.allow_fast_path);
        assert!(never.allow_compat_path);

        let auto = decide(&policy(Auto, Never), &request);
        assert!(auto.allow_fast_path);
        assert!(auto.allow_compat_path);
        assert_eq!(auto.first_path(), PathChoice::FastPath);

        let always = decide(&policy(Always, Never), &request);
        assert!(always.allow_fast_path);
        assert!(!always.allow_compat_path);
    }

    #[test]
    fn fast_path_requires_low_latency() {
        for mode in [PerformanceMode::None, PerformanceMode::PowerSaving] {
            let request = StreamRequest {
                performance_mode: mode,
                ..Default::default()
            };
            let decision = decide(&policy(Auto, Auto), &request);
            assert!(!decision.allow_fast_path);
            assert_eq!(decision.first_path(), PathChoice::Compat);
        }
    }

    #[test]
    fn fast_path_requires_no_session() {
        for session_id in [SessionId::Allocate, SessionId::Id(42)] {
            let request = StreamRequest {
                session_id,
                ..low_latency()
            };
            let decision = decide(&policy(Always, Always), &request);
            assert!(!decision.allow_fast_path);
        }
    }

    #[test]
    fn always_policy_without_low_latency_has_no_backend() {
        let decision = decide(&policy(Always, Never), &StreamRequest::default());
        assert!(!decision.allow_fast_path);
        assert!(!decision.allow_compat_path);
        assert_eq!(decision.ensure_backend(), Err(BuildError::NoBackendAvailable));
    }

    #[test]
    fn never_policy_still_leaves_compat() {
        let request = StreamRequest {
            sharing_mode: SharingMode::Exclusive,
            ..low_latency()
        };
        let decision = decide(&policy(Never, Never), &request);
        assert_eq!(decision.effective_sharing_mode, SharingMode::Shared);
        assert!(!decision.allow_fast_path);
        assert!(decision.ensure_backend().is_ok());
    }
}
