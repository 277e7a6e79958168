//! The per-event callback path: relay gate, decode, policy, chain-or-consume.
//!
//! Each OS hook callback hands its arguments to [`Dispatcher::run_key_hook`]
//! or [`Dispatcher::run_pointer_hook`].  Both are generic over the chain
//! continuation and the consume sentinel so the exact values a callback
//! forwards down the chain — relay code, message code, record — can be
//! asserted in tests without a Windows hook chain behind them.
//!
//! # Latency
//!
//! Everything here runs on the thread that owns the OS message pump and
//! blocks system-wide input delivery for its duration.  The path is O(1):
//! decode is a table lookup plus bit tests, the subscriber hand-off is a
//! non-blocking unbounded-channel send, and policies are required to be
//! constant-time.  There is no fallible branch; every input produces a
//! decision.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{trace, warn};

use hook_core::records::{
    HC_ACTION, WM_KEY_DOWN, WM_KEY_UP, WM_SYS_KEY_DOWN, WM_SYS_KEY_UP,
};
use hook_core::{
    decode_key, decode_pointer, InterceptDecision, RawKeyRecord, RawPointerRecord,
    SemanticInputEvent, SuppressionPolicy,
};

/// The callback dispatcher: decodes, publishes, and applies the policy.
///
/// Holds no mutable state across invocations — only the injected policy and
/// the subscriber channel sender.
pub struct Dispatcher {
    policy: Box<dyn SuppressionPolicy>,
    events: Sender<SemanticInputEvent>,
}

impl Dispatcher {
    /// Creates a dispatcher and the subscription receiver it feeds.
    ///
    /// Decoded events are delivered in arrival order.  The consumer must
    /// never block the hook thread; the channel is unbounded and the send
    /// side never waits.
    pub fn new(policy: Box<dyn SuppressionPolicy>) -> (Self, Receiver<SemanticInputEvent>) {
        let (events, rx) = mpsc::channel();
        (Self { policy, events }, rx)
    }

    /// Runs the keyboard callback path.
    ///
    /// `chain` is the next-in-chain continuation; on a `Forward` decision it
    /// receives the original, unmodified relay code, message code, and
    /// record, and its result is returned upward unchanged.  `consume`
    /// produces the sentinel that stops all further propagation.
    ///
    /// A negative relay code means the event is not intended for processing:
    /// the OS contract requires forwarding immediately, before any decode.
    /// Keyboard messages outside the four key-transition codes are likewise
    /// forwarded undecoded, upholding the decoder's caller contract.
    pub fn run_key_hook<R>(
        &self,
        relay_code: i32,
        message_code: u32,
        record: &RawKeyRecord,
        chain: impl FnOnce(i32, u32, &RawKeyRecord) -> R,
        consume: impl FnOnce() -> R,
    ) -> R {
        if relay_code != HC_ACTION {
            return chain(relay_code, message_code, record);
        }
        if !matches!(
            message_code,
            WM_KEY_DOWN | WM_KEY_UP | WM_SYS_KEY_DOWN | WM_SYS_KEY_UP
        ) {
            return chain(relay_code, message_code, record);
        }

        let event = SemanticInputEvent::from(decode_key(record, message_code));
        self.publish(event);

        match self.policy.evaluate(&event) {
            InterceptDecision::Forward => chain(relay_code, message_code, record),
            InterceptDecision::Consume => consume(),
        }
    }

    /// Runs the pointer callback path.
    ///
    /// Same contract as [`run_key_hook`](Self::run_key_hook).  Pointer
    /// message codes outside the enumerated set still decode (to
    /// [`SemanticInputEvent::Unrecognized`]) and still reach the policy —
    /// forward compatibility with hook messages this engine predates.
    pub fn run_pointer_hook<R>(
        &self,
        relay_code: i32,
        message_code: u32,
        record: &RawPointerRecord,
        chain: impl FnOnce(i32, u32, &RawPointerRecord) -> R,
        consume: impl FnOnce() -> R,
    ) -> R {
        if relay_code != HC_ACTION {
            return chain(relay_code, message_code, record);
        }

        let event = decode_pointer(record, message_code);
        if let SemanticInputEvent::Unrecognized { message_code, .. } = event {
            warn!(message_code, "unrecognized pointer hook message");
        }
        self.publish(event);

        match self.policy.evaluate(&event) {
            InterceptDecision::Forward => chain(relay_code, message_code, record),
            InterceptDecision::Consume => consume(),
        }
    }

    fn publish(&self, event: SemanticInputEvent) {
        trace!(?event, "decoded input event");
        // Send errors mean the subscriber is gone (shutdown in progress);
        // the hook must keep returning decisions regardless.
        let _ = self.events.send(event);
    }
}
