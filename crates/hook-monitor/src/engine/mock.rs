//! Mock hook API for unit and integration testing.
//!
//! Lets tests drive the [`HookManager`](super::HookManager) lifecycle and
//! script per-hook registration failures without a Windows message loop or
//! real OS hooks.  All state is behind `Arc`, so a clone held by the test
//! observes everything the manager did.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{HookApi, HookError, HookKind};

#[derive(Default)]
struct MockState {
    /// Kinds for which the next `register` call should fail, with the OS
    /// error code to report.
    fail_register: Mutex<Vec<(HookKind, i32)>>,
    /// Every successful registration in call order.
    registered: Mutex<Vec<(HookKind, usize)>>,
    /// Every unregistered handle in call order.
    unregistered: Mutex<Vec<usize>>,
}

/// A scriptable implementation of [`HookApi`].
#[derive(Clone, Default)]
pub struct MockHookApi {
    state: Arc<MockState>,
    next_handle: Arc<AtomicUsize>,
}

impl MockHookApi {
    /// Creates a mock where every registration succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the next `register` call for `kind` to fail with the given
    /// OS error code.
    pub fn fail_next_register(&self, kind: HookKind, code: i32) {
        self.state
            .fail_register
            .lock()
            .expect("lock poisoned")
            .push((kind, code));
    }

    /// Kinds successfully registered, in call order.
    pub fn registered_kinds(&self) -> Vec<HookKind> {
        self.state
            .registered
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(|&(kind, _)| kind)
            .collect()
    }

    /// `true` if `handle` was registered and has not been unregistered.
    pub fn is_live(&self, handle: usize) -> bool {
        let registered = self.state.registered.lock().expect("lock poisoned");
        let unregistered = self.state.unregistered.lock().expect("lock poisoned");
        registered.iter().any(|&(_, h)| h == handle) && !unregistered.contains(&handle)
    }

    /// Number of `unregister` calls made so far.
    pub fn unregister_count(&self) -> usize {
        self.state.unregistered.lock().expect("lock poisoned").len()
    }
}

impl HookApi for MockHookApi {
    type Handle = usize;

    fn register(&self, kind: HookKind) -> Result<usize, HookError> {
        let mut failures = self.state.fail_register.lock().expect("lock poisoned");
        if let Some(pos) = failures.iter().position(|&(k, _)| k == kind) {
            let (_, code) = failures.remove(pos);
            return Err(HookError::RegistrationFailed { kind, code });
        }
        drop(failures);

        // Handles start at 1; zero stands for "null handle" in the real API.
        let handle = self.next_handle.fetch_add(1, Ordering::Relaxed) + 1;
        self.state
            .registered
            .lock()
            .expect("lock poisoned")
            .push((kind, handle));
        Ok(handle)
    }

    fn unregister(&self, handle: usize) -> bool {
        let known = self
            .state
            .registered
            .lock()
            .expect("lock poisoned")
            .iter()
            .any(|&(_, h)| h == handle);
        self.state
            .unregistered
            .lock()
            .expect("lock poisoned")
            .push(handle);
        known
    }
}
