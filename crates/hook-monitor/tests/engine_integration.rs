//! Integration tests for the input-hook engine.
//!
//! # Purpose
//!
//! These tests exercise the engine through its *public* API — the
//! [`HookManager`] lifecycle over a mock OS hook API, and the
//! [`Dispatcher`] callback path — the same way the Windows adapter drives
//! them.  They verify:
//!
//! - The decode matrix: press/release for all four key-transition messages,
//!   wheel direction including the zero-delta boundary, and the X-button
//!   sub-field in the auxiliary data word.
//! - The injected-bit asymmetry: bit 4 on the keyboard path, bit 0 on the
//!   pointer path, extracted independently.
//! - Registration lifecycle: double-install rejection, idempotent
//!   uninstall, and partial failure leaving the surviving hook operable.
//! - Chaining fidelity: a forwarded event reaches the continuation with the
//!   byte-identical record and codes the dispatcher received.
//!
//! No Windows message loop is involved; the mock API stands in for the OS
//! registration calls and closures stand in for `CallNextHookEx`.

use std::cell::Cell;

use hook_core::records::{
    HC_ACTION, KEY_FLAG_INJECTED, WM_KEY_DOWN, WM_KEY_UP, WM_MOUSE_MOVE, WM_SYS_KEY_DOWN,
    WM_SYS_KEY_UP, WM_WHEEL, WM_XBUTTON_DOWN,
};
use hook_core::{
    ButtonIdentity, InterceptDecision, KeyIdentity, KeyTransition, PassThrough, RawKeyRecord,
    RawPointerRecord, SemanticInputEvent, SuppressionPolicy, WheelDirection,
};
use hook_monitor::engine::mock::MockHookApi;
use hook_monitor::engine::{Dispatcher, HookError, HookKind, HookManager};

/// Stand-in for the OS callback return value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    Chained,
    Consumed,
}

fn observer() -> (Dispatcher, std::sync::mpsc::Receiver<SemanticInputEvent>) {
    Dispatcher::new(Box::new(PassThrough))
}

// ── Decode matrix through the dispatcher ─────────────────────────────────────

/// For all four key-transition messages, `pressed` decodes to exactly
/// {down: true, up: false, sys-down: true, sys-up: false}.
#[test]
fn test_key_transition_matrix_end_to_end() {
    let (dispatcher, rx) = observer();
    let record = RawKeyRecord::new(0x41, 0x1E, 0);

    for (message, expected_pressed) in [
        (WM_KEY_DOWN, true),
        (WM_KEY_UP, false),
        (WM_SYS_KEY_DOWN, true),
        (WM_SYS_KEY_UP, false),
    ] {
        let outcome = dispatcher.run_key_hook(
            HC_ACTION,
            message,
            &record,
            |_, _, _| Outcome::Chained,
            || Outcome::Consumed,
        );
        assert_eq!(outcome, Outcome::Chained);

        let event = rx.try_recv().expect("event must be published");
        assert_eq!(
            event,
            SemanticInputEvent::Key(KeyTransition {
                key: KeyIdentity::KeyA,
                pressed: expected_pressed,
                injected: false,
            }),
            "message 0x{message:X}"
        );
    }
}

/// End-to-end fixture from the raw record for 'A' pressed on hardware.
#[test]
fn test_plain_key_down_decodes_to_key_a_pressed() {
    let (dispatcher, rx) = observer();

    dispatcher.run_key_hook(
        HC_ACTION,
        WM_KEY_DOWN,
        &RawKeyRecord::new(0x41, 0x1E, 0),
        |_, _, _| Outcome::Chained,
        || Outcome::Consumed,
    );

    assert_eq!(
        rx.try_recv().unwrap(),
        SemanticInputEvent::Key(KeyTransition {
            key: KeyIdentity::KeyA,
            pressed: true,
            injected: false,
        })
    );
}

/// The same flag value means different things on the two paths: 0x10 is the
/// keyboard injected bit but an irrelevant bit for pointer records.
#[test]
fn test_injected_bit_extraction_is_independent_per_path() {
    let (dispatcher, rx) = observer();

    dispatcher.run_key_hook(
        HC_ACTION,
        WM_KEY_DOWN,
        &RawKeyRecord::new(0x41, 0, KEY_FLAG_INJECTED),
        |_, _, _| Outcome::Chained,
        || Outcome::Consumed,
    );
    dispatcher.run_pointer_hook(
        HC_ACTION,
        WM_MOUSE_MOVE,
        &RawPointerRecord::new(1, 2, 0, 0x10),
        |_, _, _| Outcome::Chained,
        || Outcome::Consumed,
    );

    assert!(rx.try_recv().unwrap().injected(), "keyboard flags=0x10");
    assert!(
        !rx.try_recv().unwrap().injected(),
        "pointer flags=0x10 has the injected bit (bit 0) clear"
    );
}

/// Wheel direction comes from the sign of the aux-data high word; an exact
/// zero decodes as Down.
#[test]
fn test_wheel_direction_sign_and_zero_boundary() {
    let (dispatcher, rx) = observer();

    for (aux, expected) in [
        (0x0078_0000u32, WheelDirection::Up),
        (0xFF88_0000, WheelDirection::Down),
        (0x0000_0000, WheelDirection::Down),
    ] {
        dispatcher.run_pointer_hook(
            HC_ACTION,
            WM_WHEEL,
            &RawPointerRecord::new(0, 0, aux, 0),
            |_, _, _| Outcome::Chained,
            || Outcome::Consumed,
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            SemanticInputEvent::WheelScroll {
                direction: expected,
                injected: false,
            },
            "aux_data 0x{aux:08X}"
        );
    }
}

/// X-button identity comes from the aux-data high word, not from the
/// message code: 1 is the first extended button, anything else the second.
#[test]
fn test_xbutton_sub_field_selects_extended_button() {
    let (dispatcher, rx) = observer();

    for (high_word, expected_button) in [(1u32, ButtonIdentity::X1), (2, ButtonIdentity::X2)] {
        dispatcher.run_pointer_hook(
            HC_ACTION,
            WM_XBUTTON_DOWN,
            &RawPointerRecord::new(0, 0, high_word << 16, 0),
            |_, _, _| Outcome::Chained,
            || Outcome::Consumed,
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            SemanticInputEvent::ButtonTransition {
                button: expected_button,
                pressed: true,
                injected: false,
            }
        );
    }
}

// ── Registration lifecycle ───────────────────────────────────────────────────

#[test]
fn test_uninstall_twice_makes_no_second_os_call() {
    // Arrange
    let api = MockHookApi::new();
    let mut manager = HookManager::new(api.clone());
    manager.install().expect("install should succeed");
    assert_eq!(api.unregister_count(), 0);

    // Act
    manager.uninstall();
    let calls_after_first = api.unregister_count();
    manager.uninstall();

    // Assert – the second uninstall is a no-op.
    assert_eq!(calls_after_first, 2);
    assert_eq!(api.unregister_count(), 2);
}

#[test]
fn test_double_install_is_rejected_without_leaking_handles() {
    let api = MockHookApi::new();
    let mut manager = HookManager::new(api.clone());
    manager.install().expect("install should succeed");

    let second = manager.install();

    assert!(matches!(second, Err(HookError::AlreadyArmed)));
    assert_eq!(api.registered_kinds().len(), 2, "no duplicate registrations");
}

/// Keyboard registration succeeds, pointer registration fails: the install
/// reports the pointer failure while keyboard events still decode and flow.
#[test]
fn test_partial_failure_keeps_keyboard_path_operable() {
    // Arrange – the OS will refuse the pointer hook.
    let api = MockHookApi::new();
    api.fail_next_register(HookKind::Pointer, 1400);
    let mut manager = HookManager::new(api.clone());

    // Act
    let result = manager.install();

    // Assert – the failure names the pointer hook.
    match result {
        Err(HookError::RegistrationFailed { kind, code }) => {
            assert_eq!(kind, HookKind::Pointer);
            assert_eq!(code, 1400);
        }
        other => panic!("expected pointer registration failure, got {other:?}"),
    }
    assert!(manager.is_armed(HookKind::Keyboard));
    assert!(!manager.is_armed(HookKind::Pointer));

    // Keyboard events decode correctly after the partial failure: the
    // dispatcher is independent of the failed registration.
    let (dispatcher, rx) = observer();
    dispatcher.run_key_hook(
        HC_ACTION,
        WM_KEY_DOWN,
        &RawKeyRecord::new(0x42, 0x30, 0),
        |_, _, _| Outcome::Chained,
        || Outcome::Consumed,
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        SemanticInputEvent::Key(KeyTransition {
            key: KeyIdentity::KeyB,
            pressed: true,
            injected: false,
        })
    );

    // Cleanup disarms only the surviving hook.
    manager.uninstall();
    assert_eq!(api.unregister_count(), 1);
}

// ── Chaining ─────────────────────────────────────────────────────────────────

/// When the policy forwards, the continuation observes the byte-identical
/// raw record and the exact relay/message codes the dispatcher received,
/// and its result is returned upward unchanged.
#[test]
fn test_forward_chain_receives_identical_record_and_codes() {
    let (dispatcher, _rx) = observer();
    let record = RawPointerRecord {
        x: -77,
        y: 4091,
        aux_data: 0xFF88_0001,
        flags: 0x01,
        time: 987_654,
        extra_info: 0xBEEF,
    };

    let seen = dispatcher.run_pointer_hook(
        HC_ACTION,
        WM_WHEEL,
        &record,
        |code, message, rec| (code, message, *rec),
        || panic!("pass-through policy must not consume"),
    );

    assert_eq!(seen, (HC_ACTION, WM_WHEEL, record));
}

/// A consuming policy suppresses exactly the events it names; everything
/// else still chains.
#[test]
fn test_policy_consume_is_scoped_to_matching_events() {
    /// Consumes wheel scrolls, forwards the rest.
    struct BlockWheel;
    impl SuppressionPolicy for BlockWheel {
        fn evaluate(&self, event: &SemanticInputEvent) -> InterceptDecision {
            match event {
                SemanticInputEvent::WheelScroll { .. } => InterceptDecision::Consume,
                _ => InterceptDecision::Forward,
            }
        }
    }

    let (dispatcher, rx) = Dispatcher::new(Box::new(BlockWheel));
    let chained = Cell::new(0u32);

    let wheel = dispatcher.run_pointer_hook(
        HC_ACTION,
        WM_WHEEL,
        &RawPointerRecord::new(0, 0, 0x0078_0000, 0),
        |_, _, _| {
            chained.set(chained.get() + 1);
            Outcome::Chained
        },
        || Outcome::Consumed,
    );
    let moved = dispatcher.run_pointer_hook(
        HC_ACTION,
        WM_MOUSE_MOVE,
        &RawPointerRecord::new(3, 4, 0, 0),
        |_, _, _| {
            chained.set(chained.get() + 1);
            Outcome::Chained
        },
        || Outcome::Consumed,
    );

    // The wheel was suppressed before reaching the chain; the move chained.
    assert_eq!(wheel, Outcome::Consumed);
    assert_eq!(moved, Outcome::Chained);
    assert_eq!(chained.get(), 1);

    // Both events were observable regardless of their policy outcome.
    assert!(matches!(
        rx.try_recv().unwrap(),
        SemanticInputEvent::WheelScroll { .. }
    ));
    assert!(matches!(
        rx.try_recv().unwrap(),
        SemanticInputEvent::PointerMove { x: 3, y: 4, .. }
    ));
}
