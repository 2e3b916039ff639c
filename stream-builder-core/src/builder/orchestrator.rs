use std::sync::Arc;

use crate::builder::factory;
use crate::builder::handoff::{checkout, OpaqueHandle};
use crate::builder::validator;
use crate::models::config::BuilderConfig;
use crate::models::error::BuildError;
use crate::models::request::{Direction, StreamRequest};
use crate::models::state::{BuildState, PathChoice};
use crate::policy::decision::{decide, Decision};
use crate::policy::privacy::infer_privacy;
use crate::policy::resolver::resolve_policies;
use crate::stream::audio_stream::AudioStream;
use crate::traits::backend::BackendConstructors;
use crate::traits::policy_provider::PolicyInfoProvider;
use crate::traits::stream_delegate::StreamDelegate;

/// Builds streams: picks a transport, opens it, falls back once, and hands
/// the opened stream to the caller as an `OpaqueHandle`.
///
/// Generic over the system policy source and the backend constructors.
///
/// ```text
/// validate → resolve policy → decide → infer privacy → create(fast or compat) → open
///                                                            ↑                    │ fast path failed,
///                                                            └── create(compat) ←─┘ compat allowed
/// ```
///
/// Each `build` call is synchronous and independent of any other; it may
/// block inside the policy query and the backend `open`.
pub struct StreamBuilder<P: PolicyInfoProvider, B: BackendConstructors> {
    config: BuilderConfig,
    policy_provider: P,
    constructors: B,
    delegate: Option<Arc<dyn StreamDelegate>>,
}

impl<P: PolicyInfoProvider, B: BackendConstructors> StreamBuilder<P, B> {
    pub fn new(config: BuilderConfig, policy_provider: P, constructors: B) -> Self {
        Self {
            config,
            policy_provider,
            constructors,
            delegate: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn StreamDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn policy_provider(&self) -> &P {
        &self.policy_provider
    }

    pub fn constructors(&self) -> &B {
        &self.constructors
    }

    /// Build and open a stream for `request`.
    ///
    /// On return `request.sharing_mode` and `request.privacy_sensitive` hold
    /// the effective values for every build that got past validation.
    /// The returned handle owns one reference; release it with `checkin`.
    pub fn build(&self, request: &mut StreamRequest) -> Result<OpaqueHandle, BuildError> {
        self.set_state(BuildState::Init);
        let result = self.build_inner(request);
        if let Err(ref e) = result {
            self.set_state(BuildState::Failed(e.clone()));
        }
        result
    }

    /// Output-slot form of [`StreamBuilder::build`].
    ///
    /// The slot is cleared before any work and only filled on success.
    /// A missing slot fails with `NullRequest`.
    pub fn build_into(
        &self,
        request: &mut StreamRequest,
        out: Option<&mut Option<OpaqueHandle>>,
    ) -> Result<(), BuildError> {
        let Some(slot) = out else {
            log::error!("stream output slot is null");
            return Err(BuildError::NullRequest);
        };
        *slot = None;
        *slot = Some(self.build(request)?);
        Ok(())
    }

    fn build_inner(&self, request: &mut StreamRequest) -> Result<OpaqueHandle, BuildError> {
        if self.config.log_parameters {
            request.log_parameters();
        }

        validator::validate(request)?;
        self.set_state(BuildState::Validated);

        let policy = resolve_policies(&self.config, &self.policy_provider);
        let decision = decide(&policy, request);
        request.sharing_mode = decision.effective_sharing_mode;
        decision.ensure_backend()?;
        request.privacy_sensitive = infer_privacy(request);
        self.set_state(BuildState::PolicyResolved {
            allow_fast_path: decision.allow_fast_path,
            allow_compat_path: decision.allow_compat_path,
        });

        let stream = self.open_with_fallback(request, &decision)?;

        if let Some(ref delegate) = self.delegate {
            delegate.register_active(&stream);
            delegate.log_actual_configuration(&stream);
        }

        // The builder's own reference drops on return; the handle's remains.
        Ok(checkout(&stream))
    }

    /// Open over the decided path, retrying once on compat if a fast-path
    /// stream fails and compat is allowed.
    fn open_with_fallback(
        &self,
        request: &StreamRequest,
        decision: &Decision,
    ) -> Result<Arc<AudioStream>, BuildError> {
        let path = decision.first_path();
        let stream = self.create(request.direction, path)?;
        let error = match stream.open(request) {
            Ok(()) => {
                self.set_state(BuildState::Opened(path));
                return Ok(stream);
            }
            Err(e) => e,
        };
        self.set_state(BuildState::OpenFailed(path));

        // Only a fast-path variant the builder chose may fall back.
        let retry = path == PathChoice::FastPath
            && stream.is_fast_path()
            && decision.allow_compat_path;
        if !retry {
            log::error!("{} stream failed to open: {}", stream.variant(), error);
            return Err(BuildError::OpenFailed(error));
        }

        log::debug!(
            "{} stream did not open ({}), so try compat path",
            stream.variant(),
            error
        );
        drop(stream);
        self.set_state(BuildState::Retrying);

        let stream = self.create(request.direction, PathChoice::Compat)?;
        match stream.open(request) {
            Ok(()) => {
                self.set_state(BuildState::Opened(PathChoice::Compat));
                Ok(stream)
            }
            Err(e) => {
                log::error!("{} stream failed to open: {}", stream.variant(), e);
                self.set_state(BuildState::OpenFailed(PathChoice::Compat));
                Err(BuildError::OpenFailed(e))
            }
        }
    }

    fn create(&self, direction: Direction, path: PathChoice) -> Result<Arc<AudioStream>, BuildError> {
        let stream = factory::create_stream(&self.constructors, direction, path)?;
        self.set_state(BuildState::StreamCreated(path));
        Ok(stream)
    }

    fn set_state(&self, state: BuildState) {
        log::trace!("build state -> {:?}", state);
        if let Some(ref delegate) = self.delegate {
            delegate.on_state_changed(&state);
        }
    }
}
