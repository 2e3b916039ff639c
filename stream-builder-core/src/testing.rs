//! Fakes shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::models::error::{OpenError, ProviderError};
use crate::models::policy::{PolicyAxis, PolicyInfo};
use crate::models::request::StreamRequest;
use crate::models::state::{BuildState, PathChoice};
use crate::stream::audio_stream::{AudioStream, StreamVariant};
use crate::traits::backend::{BackendConstructors, BackendStream};
use crate::traits::policy_provider::PolicyInfoProvider;
use crate::traits::stream_delegate::StreamDelegate;

#[derive(Default)]
struct ProbeInner {
    open_calls: AtomicUsize,
    dropped: AtomicBool,
}

/// Observes a `FakeBackend` after it has been moved into a stream.
#[derive(Clone, Default)]
pub struct BackendProbe(Arc<ProbeInner>);

impl BackendProbe {
    pub fn open_calls(&self) -> usize {
        self.0.open_calls.load(Ordering::SeqCst)
    }

    pub fn is_dropped(&self) -> bool {
        self.0.dropped.load(Ordering::SeqCst)
    }
}

pub struct FakeBackend {
    fast_path: bool,
    result: Result<(), OpenError>,
    probe: BackendProbe,
}

impl FakeBackend {
    pub fn new(fast_path: bool, result: Result<(), OpenError>) -> (Self, BackendProbe) {
        let probe = BackendProbe::default();
        let backend = Self {
            fast_path,
            result,
            probe: probe.clone(),
        };
        (backend, probe)
    }
}

impl BackendStream for FakeBackend {
    fn open(&self, _request: &StreamRequest) -> Result<(), OpenError> {
        self.probe.0.open_calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn is_fast_path(&self) -> bool {
        self.fast_path
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.probe.0.dropped.store(true, Ordering::SeqCst);
    }
}

/// Backend constructors that record every stream they create.
#[derive(Default)]
pub struct FakeConstructors {
    failures: HashMap<StreamVariant, OpenError>,
    all_report_fast_path: bool,
    created: Mutex<Vec<(StreamVariant, BackendProbe)>>,
}

impl FakeConstructors {
    /// Make every stream of `variant` fail to open with `error`.
    pub fn failing(mut self, variant: StreamVariant, error: OpenError) -> Self {
        self.failures.insert(variant, error);
        self
    }

    /// Make every backend report the fast path, whatever variant it backs.
    pub fn reporting_fast_path(mut self) -> Self {
        self.all_report_fast_path = true;
        self
    }

    pub fn created(&self) -> Vec<StreamVariant> {
        self.created.lock().iter().map(|(v, _)| *v).collect()
    }

    pub fn probes(&self) -> Vec<BackendProbe> {
        self.created.lock().iter().map(|(_, p)| p.clone()).collect()
    }

    fn make(&self, variant: StreamVariant) -> Box<dyn BackendStream> {
        let result = match self.failures.get(&variant) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        };
        let (backend, probe) = FakeBackend::new(
            self.all_report_fast_path || variant.path() == PathChoice::FastPath,
            result,
        );
        self.created.lock().push((variant, probe));
        Box::new(backend)
    }
}

impl BackendConstructors for FakeConstructors {
    fn capture_fast_path(&self) -> Box<dyn BackendStream> {
        self.make(StreamVariant::CaptureFastPath)
    }

    fn capture_compat(&self) -> Box<dyn BackendStream> {
        self.make(StreamVariant::CaptureCompat)
    }

    fn playback_fast_path(&self) -> Box<dyn BackendStream> {
        self.make(StreamVariant::PlaybackFastPath)
    }

    fn playback_compat(&self) -> Box<dyn BackendStream> {
        self.make(StreamVariant::PlaybackCompat)
    }
}

/// Provider whose every query fails.
pub struct FailingPolicyProvider {
    error: ProviderError,
    queries: AtomicUsize,
}

impl FailingPolicyProvider {
    pub fn new(error: ProviderError) -> Self {
        Self {
            error,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Default for FailingPolicyProvider {
    fn default() -> Self {
        Self::new(ProviderError::Unavailable)
    }
}

impl PolicyInfoProvider for FailingPolicyProvider {
    fn query(&self, _axis: PolicyAxis) -> Result<Vec<PolicyInfo>, ProviderError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}

/// Delegate that records everything it is told.
#[derive(Default)]
pub struct RecordingDelegate {
    states: Mutex<Vec<BuildState>>,
    registered: Mutex<Vec<Weak<AudioStream>>>,
    logged: AtomicUsize,
}

impl RecordingDelegate {
    pub fn states(&self) -> Vec<BuildState> {
        self.states.lock().clone()
    }

    pub fn registered_count(&self) -> usize {
        self.registered.lock().len()
    }

    pub fn registered_alive(&self) -> usize {
        self.registered.lock().iter().filter(|w| w.strong_count() > 0).count()
    }

    pub fn logged_count(&self) -> usize {
        self.logged.load(Ordering::SeqCst)
    }
}

impl StreamDelegate for RecordingDelegate {
    fn register_active(&self, stream: &Arc<AudioStream>) {
        self.registered.lock().push(Arc::downgrade(stream));
    }

    fn log_actual_configuration(&self, _stream: &AudioStream) {
        self.logged.fetch_add(1, Ordering::SeqCst);
    }

    fn on_state_changed(&self, state: &BuildState) {
        self.states.lock().push(state.clone());
    }
}
