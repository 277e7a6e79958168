//! The global input-hook engine.
//!
//! The engine owns the lifecycle of two system-wide interception points
//! (keyboard and mouse) and the dispatch path each hook callback runs:
//!
//! ```text
//! OS input subsystem
//!   └─ hook callback (keyboard or pointer)
//!        └─ Dispatcher::run_*_hook
//!             ├─ relay-code gate (negative ⇒ forward untouched, no decode)
//!             ├─ hook_core::decode_*      -- raw record → SemanticInputEvent
//!             ├─ subscriber channel send  -- non-blocking hand-off
//!             └─ SuppressionPolicy        -- Forward (chain) or Consume
//! ```
//!
//! # Sub-modules
//!
//! - **`manager`** – [`HookManager`] arms and disarms both registrations
//!   through the [`HookApi`] seam.  Install is all-or-surfaced: a hook that
//!   fails to arm is reported while any hook that did arm stays operable.
//!
//! - **`dispatcher`** – the per-event path described above, generic over
//!   the chain continuation so chaining fidelity is testable off-Windows.
//!
//! - **`mock`** – a scriptable [`HookApi`] for tests; no OS required.
//!
//! - **`windows`** – the real adapter: `SetWindowsHookExW` registrations on
//!   a dedicated message-loop thread.
//!
//! # Concurrency model
//!
//! Both callbacks execute strictly sequentially on the thread that owns the
//! hook message loop.  Nothing on that path may block or wait on another
//! thread — a stalled callback stalls all system input delivery.  Work that
//! needs asynchronous completion is handed off through the subscriber
//! channel and the callback returns immediately.

use hook_core::records::{WH_KEYBOARD_LL, WH_MOUSE_LL};

pub mod dispatcher;
pub mod manager;
pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

pub use dispatcher::Dispatcher;
pub use manager::{HookManager, HookRegistration};

/// Which of the two interception points a registration covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    Keyboard,
    Pointer,
}

impl HookKind {
    /// The Win32 hook type identifier (`WH_KEYBOARD_LL` / `WH_MOUSE_LL`).
    pub fn hook_id(self) -> i32 {
        match self {
            HookKind::Keyboard => WH_KEYBOARD_LL,
            HookKind::Pointer => WH_MOUSE_LL,
        }
    }
}

/// The OS hook-registration collaborator, at its interface.
///
/// The production implementation wraps `SetWindowsHookExW` /
/// `UnhookWindowsHookEx`; tests use [`mock::MockHookApi`].  Chaining to the
/// next interceptor is not part of this trait: it happens inside the
/// callback itself, as the continuation argument of
/// [`Dispatcher::run_key_hook`] / [`Dispatcher::run_pointer_hook`].
pub trait HookApi {
    /// Opaque registration handle; valid from `register` until `unregister`.
    type Handle: Copy + Eq + std::fmt::Debug;

    /// Arms one interception point.  The callback entry point is fixed per
    /// kind by the implementation and must remain valid (non-relocated) for
    /// the entire armed lifetime of the returned handle.
    fn register(&self, kind: HookKind) -> Result<Self::Handle, HookError>;

    /// Disarms a registration.  Returns `false` if the OS rejected the
    /// handle (already unregistered or invalid).
    fn unregister(&self, handle: Self::Handle) -> bool;
}

/// Error type for hook registration and engine lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// The OS refused to arm a registration (insufficient privilege,
    /// invalid module handle).  Not retried automatically.
    #[error("failed to arm the {kind:?} hook (OS error {code})")]
    RegistrationFailed { kind: HookKind, code: i32 },
    /// `install()` was called while registrations are already armed.
    /// Rejected instead of silently leaking an armed handle.
    #[error("hook registrations are already armed")]
    AlreadyArmed,
    /// The dedicated message-loop thread could not be spawned or died
    /// before acknowledging installation.
    #[error("hook message-loop thread failed: {0}")]
    LoopThread(String),
}
