//! Hook registration lifecycle: arming and disarming both interception
//! points.
//!
//! A [`HookRegistration`] is either *unarmed* (no handle, no events can
//! arrive) or *armed* (handle valid, the OS may invoke the callback).  The
//! [`HookManager`] owns one registration per [`HookKind`] and brackets the
//! engine's lifetime: nothing reaches the dispatcher before `install`, and
//! after `uninstall` returns the OS guarantees no further invocation.
//!
//! Install and uninstall must be serialized to one owning thread (the
//! message-loop thread in the production adapter); that precondition is
//! stated rather than enforced here, which is why no locking appears around
//! the handles.

use tracing::{info, warn};

use super::{HookApi, HookError, HookKind};

/// One interception point and its current armed state.
#[derive(Debug)]
pub struct HookRegistration<H> {
    kind: HookKind,
    handle: Option<H>,
}

impl<H: Copy> HookRegistration<H> {
    fn unarmed(kind: HookKind) -> Self {
        Self { kind, handle: None }
    }

    /// Which interception point this registration covers.
    pub fn kind(&self) -> HookKind {
        self.kind
    }

    /// `true` while the OS holds a valid handle and may invoke the callback.
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

/// Owns the lifetime of both hook registrations.
pub struct HookManager<A: HookApi> {
    api: A,
    keyboard: HookRegistration<A::Handle>,
    pointer: HookRegistration<A::Handle>,
}

impl<A: HookApi> HookManager<A> {
    /// Creates a manager with both registrations unarmed.
    pub fn new(api: A) -> Self {
        Self {
            api,
            keyboard: HookRegistration::unarmed(HookKind::Keyboard),
            pointer: HookRegistration::unarmed(HookKind::Pointer),
        }
    }

    /// Arms both registrations.
    ///
    /// The two registrations fail independently: if one arms and the other
    /// does not, the survivor is left armed and operable while the failure
    /// is returned.  There is no automatic rollback — partial arming is a
    /// valid end state, and the caller decides whether to `uninstall`.
    ///
    /// Calling `install` while any registration is armed returns
    /// [`HookError::AlreadyArmed`] without touching the OS; arming twice
    /// would leak the first handle.
    pub fn install(&mut self) -> Result<(), HookError> {
        if self.keyboard.is_armed() || self.pointer.is_armed() {
            return Err(HookError::AlreadyArmed);
        }

        let mut first_failure = None;
        for reg in [&mut self.keyboard, &mut self.pointer] {
            match self.api.register(reg.kind) {
                Ok(handle) => {
                    info!(kind = ?reg.kind, "hook armed");
                    reg.handle = Some(handle);
                }
                Err(e) => {
                    warn!(kind = ?reg.kind, error = %e, "hook failed to arm");
                    first_failure.get_or_insert(e);
                }
            }
        }

        match first_failure {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }

    /// Disarms any armed registration.  Idempotent: re-running after a
    /// successful uninstall makes no further OS calls.
    pub fn uninstall(&mut self) {
        for reg in [&mut self.keyboard, &mut self.pointer] {
            if let Some(handle) = reg.handle.take() {
                if self.api.unregister(handle) {
                    info!(kind = ?reg.kind, "hook disarmed");
                } else {
                    warn!(kind = ?reg.kind, "OS rejected unregister");
                }
            }
        }
    }

    /// `true` if the given interception point is currently armed.
    pub fn is_armed(&self, kind: HookKind) -> bool {
        match kind {
            HookKind::Keyboard => self.keyboard.is_armed(),
            HookKind::Pointer => self.pointer.is_armed(),
        }
    }

    /// `true` if at least one interception point is armed.
    pub fn any_armed(&self) -> bool {
        self.keyboard.is_armed() || self.pointer.is_armed()
    }
}

impl<A: HookApi> Drop for HookManager<A> {
    fn drop(&mut self) {
        // The OS must never hold a handle to a callback whose owning state
        // is gone; uninstall is idempotent so this is safe after an
        // explicit uninstall too.
        self.uninstall();
    }
}
