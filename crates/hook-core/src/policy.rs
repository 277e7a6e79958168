//! Suppression policy: the single pluggable decision point of the engine.
//!
//! After the dispatcher decodes an event it asks the policy whether the
//! event should continue down the interceptor chain or be consumed.  The
//! default policy forwards everything, which turns the engine into a pure
//! observer.  Policies are injected at engine construction and evaluated
//! synchronously on the hook thread, so [`SuppressionPolicy::evaluate`] must
//! stay O(1) and never block.

use crate::event::SemanticInputEvent;

/// What the hook callback does with the current event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptDecision {
    /// Pass the unmodified event to the next interceptor in the chain
    /// (and ultimately to the target application).
    Forward,
    /// Stop all further propagation; no other interceptor nor the target
    /// application observes the event.
    Consume,
}

/// Per-event consume-or-forward decision, evaluated inside the hook callback.
pub trait SuppressionPolicy: Send + Sync {
    /// Decides the fate of a single decoded event.
    ///
    /// Runs on the hook thread under its latency budget: no blocking, no
    /// I/O, no unbounded work.
    fn evaluate(&self, event: &SemanticInputEvent) -> InterceptDecision;
}

/// Default policy: observe everything, suppress nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl SuppressionPolicy for PassThrough {
    fn evaluate(&self, _event: &SemanticInputEvent) -> InterceptDecision {
        InterceptDecision::Forward
    }
}

/// Consumes software-synthesized events and forwards hardware ones.
///
/// Useful as a guard against injection-based input spoofing while leaving
/// the physical keyboard and mouse untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuppressInjected;

impl SuppressionPolicy for SuppressInjected {
    fn evaluate(&self, event: &SemanticInputEvent) -> InterceptDecision {
        if event.injected() {
            InterceptDecision::Consume
        } else {
            InterceptDecision::Forward
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyTransition, SemanticInputEvent};
    use crate::keys::KeyIdentity;

    fn key_event(injected: bool) -> SemanticInputEvent {
        SemanticInputEvent::Key(KeyTransition {
            key: KeyIdentity::KeyA,
            pressed: true,
            injected,
        })
    }

    #[test]
    fn test_pass_through_forwards_everything() {
        let policy = PassThrough;
        assert_eq!(policy.evaluate(&key_event(false)), InterceptDecision::Forward);
        assert_eq!(policy.evaluate(&key_event(true)), InterceptDecision::Forward);
        assert_eq!(
            policy.evaluate(&SemanticInputEvent::Unrecognized {
                message_code: 0x20E,
                injected: false
            }),
            InterceptDecision::Forward
        );
    }

    #[test]
    fn test_suppress_injected_consumes_only_synthetic_events() {
        let policy = SuppressInjected;
        assert_eq!(policy.evaluate(&key_event(true)), InterceptDecision::Consume);
        assert_eq!(policy.evaluate(&key_event(false)), InterceptDecision::Forward);
        assert_eq!(
            policy.evaluate(&SemanticInputEvent::PointerMove {
                x: 5,
                y: 5,
                injected: true
            }),
            InterceptDecision::Consume
        );
    }
}
