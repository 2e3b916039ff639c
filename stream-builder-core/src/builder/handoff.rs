//! Ownership transfer between the `Arc`-managed stream and callers that can
//! only hold a plain address.
//!
//! `checkout` and `checkin` are the only sanctioned crossings: each checkout
//! adds one strong reference owned by the handle, each checkin releases it.

use std::ffi::c_void;
use std::ptr::NonNull;
use std::sync::Arc;

use crate::stream::audio_stream::AudioStream;

/// Caller-owned reference to an `AudioStream`, as a plain address.
///
/// Not `Clone`: each handle stands for exactly one checked-out reference.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct OpaqueHandle(NonNull<AudioStream>);

// SAFETY: the handle is an address of an `AudioStream` kept alive by the
// strong reference it owns. `AudioStream` is Send + Sync.
unsafe impl Send for OpaqueHandle {}
unsafe impl Sync for OpaqueHandle {}

impl OpaqueHandle {
    pub fn as_raw(&self) -> *mut c_void {
        self.0.as_ptr().cast()
    }

    /// Rebuild a handle from an address produced by `as_raw`. Null yields None.
    pub fn from_raw(raw: *mut c_void) -> Option<Self> {
        NonNull::new(raw.cast::<AudioStream>()).map(Self)
    }

    /// Borrow the stream behind the handle.
    ///
    /// # Safety
    /// The handle must come from `checkout` and not yet have been checked in.
    pub unsafe fn stream(&self) -> &AudioStream {
        // SAFETY: the caller guarantees the handle's reference is still held.
        unsafe { self.0.as_ref() }
    }

    /// Take an additional `Arc` reference, leaving the handle's own reference
    /// in place.
    ///
    /// # Safety
    /// Same as [`OpaqueHandle::stream`].
    pub unsafe fn to_arc(&self) -> Arc<AudioStream> {
        let ptr = self.0.as_ptr().cast_const();
        // SAFETY: `ptr` came from `Arc::into_raw` and its reference is live.
        unsafe {
            Arc::increment_strong_count(ptr);
            Arc::from_raw(ptr)
        }
    }
}

/// Hand out one strong reference to `stream` as an opaque handle.
pub fn checkout(stream: &Arc<AudioStream>) -> OpaqueHandle {
    let ptr = Arc::into_raw(Arc::clone(stream)).cast_mut();
    // SAFETY: `Arc::into_raw` never returns null.
    OpaqueHandle(unsafe { NonNull::new_unchecked(ptr) })
}

/// Release the reference owned by `handle`.
///
/// The stream is dropped here if this was its last reference.
///
/// # Safety
/// `handle` must come from `checkout` and be checked in at most once.
/// Checking in more often than checking out is undefined behavior.
pub unsafe fn checkin(handle: OpaqueHandle) {
    let ptr = handle.0.as_ptr().cast_const();
    // SAFETY: the caller guarantees this balances exactly one `checkout`.
    unsafe { Arc::decrement_strong_count(ptr) };
}
