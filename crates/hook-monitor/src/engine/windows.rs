//! Windows adapter: low-level keyboard and mouse hooks on a dedicated
//! message-loop thread.
//!
//! This module installs `WH_KEYBOARD_LL` and `WH_MOUSE_LL` hooks using the
//! Windows API.  Both hooks share one Win32 message-loop thread; the OS
//! invokes the two callback entry points on that thread, strictly
//! sequentially, for every input event in the system.
//!
//! # Callback-pointer stability
//!
//! The OS stores a raw pointer to each callback for the entire armed
//! lifetime of its registration.  The entry points here are
//! `extern "system"` functions — static code, never relocated — and the
//! state they reach (the [`Dispatcher`]) lives in a `'static` [`OnceLock`],
//! so the pointer-stability requirement is satisfied structurally.  The
//! consequence is that one process hosts at most one engine: a second
//! [`GlobalInputHook::start`] is rejected.
//!
//! # Safety
//!
//! `unsafe` is used exclusively for Windows API FFI calls and for
//! reinterpreting the `LPARAM` the OS documents as a pointer to the
//! corresponding hook record.  Each block carries a `// SAFETY:` note.

#![cfg(target_os = "windows")]

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::OnceLock;
use std::thread;

use tracing::info;

use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, PostThreadMessageW, SetWindowsHookExW,
    UnhookWindowsHookEx, HHOOK, HOOKPROC, MSG, WINDOWS_HOOK_ID, WM_QUIT,
};

use hook_core::records::HC_ACTION;
use hook_core::{RawKeyRecord, RawPointerRecord, SemanticInputEvent, SuppressionPolicy};

use super::{Dispatcher, HookApi, HookError, HookKind, HookManager};

/// Fixed-address storage for the dispatcher reached from the callback
/// entry points.  Initialized once by [`GlobalInputHook::start`]; never
/// torn down, so no callback can ever observe freed state.
static DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

/// The production [`HookApi`]: real `SetWindowsHookExW` registrations.
pub struct WindowsHookApi;

impl HookApi for WindowsHookApi {
    type Handle = HHOOK;

    fn register(&self, kind: HookKind) -> Result<HHOOK, HookError> {
        let callback: HOOKPROC = Some(match kind {
            HookKind::Keyboard => keyboard_hook_proc,
            HookKind::Pointer => pointer_hook_proc,
        });
        // SAFETY: the callback entry points are static functions matching
        // the HOOKPROC signature; a null module handle is valid for
        // low-level hooks, which run in the registering process.
        unsafe { SetWindowsHookExW(WINDOWS_HOOK_ID(kind.hook_id()), callback, None, 0) }
            .map_err(|e| HookError::RegistrationFailed {
                kind,
                code: e.code().0,
            })
    }

    fn unregister(&self, handle: HHOOK) -> bool {
        // SAFETY: the handle came from a successful SetWindowsHookExW call
        // and is unregistered at most once (the manager takes it out of the
        // registration before calling here).
        unsafe { UnhookWindowsHookEx(handle) }.is_ok()
    }
}

/// Low-level keyboard hook entry point.
///
/// # Safety
///
/// Called by Windows on the hook message-loop thread.  Must return quickly
/// (the OS silently removes hooks whose callbacks exceed its timeout) and
/// must return a decision on every path.
unsafe extern "system" fn keyboard_hook_proc(
    n_code: i32,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    let Some(dispatcher) = DISPATCHER.get() else {
        // SAFETY: mandatory pass-through while the engine is not armed.
        return CallNextHookEx(None, n_code, w_param, l_param);
    };
    if n_code != HC_ACTION {
        // SAFETY: negative relay codes must be forwarded untouched, before
        // any decoding; l_param is not guaranteed to be a record here.
        return CallNextHookEx(None, n_code, w_param, l_param);
    }

    // SAFETY: for HC_ACTION, l_param points to a KBDLLHOOKSTRUCT; the
    // RawKeyRecord layout reproduces it field-for-field.
    let record = &*(l_param.0 as *const RawKeyRecord);

    dispatcher.run_key_hook(
        n_code,
        w_param.0 as u32,
        record,
        // SAFETY: `rec` is the same pointer the OS delivered, so the next
        // interceptor receives the original, unmodified record and codes.
        |code, message, rec| unsafe {
            CallNextHookEx(
                None,
                code,
                WPARAM(message as usize),
                LPARAM(rec as *const RawKeyRecord as isize),
            )
        },
        // Non-zero return stops all further propagation of the event.
        || LRESULT(1),
    )
}

/// Low-level mouse hook entry point.
///
/// # Safety
///
/// Same contract as [`keyboard_hook_proc`].
unsafe extern "system" fn pointer_hook_proc(
    n_code: i32,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    let Some(dispatcher) = DISPATCHER.get() else {
        // SAFETY: mandatory pass-through while the engine is not armed.
        return CallNextHookEx(None, n_code, w_param, l_param);
    };
    if n_code != HC_ACTION {
        // SAFETY: forwarded untouched; no decode for non-action relay codes.
        return CallNextHookEx(None, n_code, w_param, l_param);
    }

    // SAFETY: for HC_ACTION, l_param points to an MSLLHOOKSTRUCT; the
    // RawPointerRecord layout reproduces it field-for-field.
    let record = &*(l_param.0 as *const RawPointerRecord);

    dispatcher.run_pointer_hook(
        n_code,
        w_param.0 as u32,
        record,
        // SAFETY: forwards the original pointer-identical record.
        |code, message, rec| unsafe {
            CallNextHookEx(
                None,
                code,
                WPARAM(message as usize),
                LPARAM(rec as *const RawPointerRecord as isize),
            )
        },
        || LRESULT(1),
    )
}

/// What the message-loop thread reports back after attempting installation.
enum InstallOutcome {
    /// At least one hook armed; `partial` carries the failure of the other,
    /// if any.
    Armed { partial: Option<HookError> },
    /// Neither hook armed; the loop thread has exited.
    Failed(HookError),
}

/// The live event stream handed to the subscriber.
pub struct HookSubscription {
    /// Decoded events in arrival order.  Consuming this receiver must never
    /// block the hook thread — it doesn't: the channel send side never
    /// waits.
    pub events: Receiver<SemanticInputEvent>,
    /// Set when exactly one of the two hooks failed to arm.  The surviving
    /// hook is operable and its events flow normally.
    pub partial_failure: Option<HookError>,
}

/// Owning handle for the running engine.
///
/// Dropping (or calling [`stop`](Self::stop)) posts `WM_QUIT` to the loop
/// thread, which uninstalls both hooks before exiting; any callback already
/// in flight completes first because uninstall runs on the same thread that
/// delivers callbacks.
pub struct GlobalInputHook {
    thread_id: u32,
    join: Option<thread::JoinHandle<()>>,
}

impl GlobalInputHook {
    /// Arms both hooks on a dedicated message-loop thread and returns the
    /// engine handle plus the event subscription.
    ///
    /// Returns an error if the engine was already started in this process,
    /// if the loop thread cannot be spawned, or if *neither* hook could be
    /// armed.  A single-hook failure is not fatal: see
    /// [`HookSubscription::partial_failure`].
    pub fn start(
        policy: Box<dyn SuppressionPolicy>,
    ) -> Result<(GlobalInputHook, HookSubscription), HookError> {
        let (dispatcher, events) = Dispatcher::new(policy);
        DISPATCHER
            .set(dispatcher)
            .map_err(|_| HookError::AlreadyArmed)?;

        let (ack_tx, ack_rx) = mpsc::channel();
        let join = thread::Builder::new()
            .name("input-hook-loop".to_string())
            .spawn(move || run_hook_message_loop(ack_tx))
            .map_err(|e| HookError::LoopThread(e.to_string()))?;

        let (thread_id, outcome) = ack_rx.recv().map_err(|_| {
            HookError::LoopThread("message-loop thread exited before installing".to_string())
        })?;

        match outcome {
            InstallOutcome::Armed { partial } => Ok((
                GlobalInputHook {
                    thread_id,
                    join: Some(join),
                },
                HookSubscription {
                    events,
                    partial_failure: partial,
                },
            )),
            InstallOutcome::Failed(e) => {
                let _ = join.join();
                Err(e)
            }
        }
    }

    /// Stops the engine: both hooks are uninstalled and the loop thread is
    /// joined.  After this returns, the OS delivers no further callbacks.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(join) = self.join.take() {
            info!("stopping input hook engine");
            // SAFETY: posts WM_QUIT to the loop thread; an error means the
            // thread is already gone, which join() absorbs.
            let _ = unsafe { PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) };
            let _ = join.join();
        }
    }
}

impl Drop for GlobalInputHook {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Entry point for the dedicated message-loop thread.  Owns the
/// [`HookManager`]: install, pump, uninstall all happen here, serialized by
/// construction.
fn run_hook_message_loop(ack: Sender<(u32, InstallOutcome)>) {
    // SAFETY: plain thread-id query, no preconditions.
    let thread_id = unsafe { GetCurrentThreadId() };

    let mut manager = HookManager::new(WindowsHookApi);
    let outcome = match manager.install() {
        Ok(()) => InstallOutcome::Armed { partial: None },
        Err(e) if manager.any_armed() => InstallOutcome::Armed { partial: Some(e) },
        Err(e) => InstallOutcome::Failed(e),
    };
    let armed = matches!(outcome, InstallOutcome::Armed { .. });
    let _ = ack.send((thread_id, outcome));
    if !armed {
        return;
    }

    info!("input hook message loop running");
    let mut msg = MSG::default();
    // SAFETY: standard GetMessage/DispatchMessage loop on the thread that
    // owns the hooks; blocks until stop() posts WM_QUIT.
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            DispatchMessageW(&msg);
        }
    }

    // The loop has exited, so no callback is in flight (callbacks are
    // delivered during message retrieval on this same thread) and none can
    // start after the handles are gone.
    manager.uninstall();
}
