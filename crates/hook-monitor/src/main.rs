//! hook-monitor entry point: a console observer for the global input-hook
//! engine.
//!
//! Arms both low-level hooks with the pass-through policy and logs every
//! decoded event, in arrival order, until the process is terminated.
//!
//! ```text
//! main()
//!  └─ GlobalInputHook::start(PassThrough)
//!       ├─ message-loop thread (hooks armed, callbacks dispatched)
//!       └─ HookSubscription      -- consumed here, off the hook thread
//! ```
//!
//! Set `RUST_LOG=debug` to include pointer-move events, which are logged at
//! debug level to keep the default output readable.

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run()
}

#[cfg(target_os = "windows")]
fn run() -> anyhow::Result<()> {
    use hook_core::{PassThrough, SemanticInputEvent};
    use hook_monitor::engine::windows::GlobalInputHook;
    use tracing::{debug, info, warn};

    info!("hook-monitor starting");

    let (hook, subscription) = GlobalInputHook::start(Box::new(PassThrough))?;
    if let Some(e) = &subscription.partial_failure {
        warn!(error = %e, "running with a single armed hook");
    }

    info!("hooks armed; press Ctrl-C to exit");

    // The receiver ends when the engine stops; consuming it here keeps the
    // hook thread free of any observer work.
    for event in subscription.events.iter() {
        match event {
            SemanticInputEvent::Key(transition) => {
                info!(
                    key = ?transition.key,
                    pressed = transition.pressed,
                    injected = transition.injected,
                    "key"
                );
            }
            SemanticInputEvent::PointerMove { x, y, injected } => {
                debug!(x, y, injected, "pointer move");
            }
            SemanticInputEvent::WheelScroll { direction, injected } => {
                info!(?direction, injected, "wheel");
            }
            SemanticInputEvent::ButtonTransition {
                button,
                pressed,
                injected,
            } => {
                info!(?button, pressed, injected, "button");
            }
            SemanticInputEvent::Unrecognized {
                message_code,
                injected,
            } => {
                warn!(message_code, injected, "unrecognized event");
            }
        }
    }

    hook.stop();
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn run() -> anyhow::Result<()> {
    anyhow::bail!("global input hooks require Windows (WH_KEYBOARD_LL / WH_MOUSE_LL)")
}
