//! Pure decoders from raw hook records to [`SemanticInputEvent`]s.
//!
//! These functions run inside the hook callback path, which blocks all
//! system-wide input delivery for its duration.  Everything here is O(1):
//! a table lookup, a few bit tests, and a match on the message code.  No
//! allocation, no I/O, no fallible paths — a hook callback that fails to
//! return a decision would stall the entire input pipeline.

use crate::event::{ButtonIdentity, KeyTransition, SemanticInputEvent, WheelDirection};
use crate::keys::identify_vk;
use crate::records::{
    RawKeyRecord, RawPointerRecord, KEY_FLAG_INJECTED, POINTER_FLAG_INJECTED, WM_KEY_DOWN,
    WM_KEY_UP, WM_LEFT_DOWN, WM_LEFT_UP, WM_MIDDLE_DOWN, WM_MIDDLE_UP, WM_MOUSE_MOVE,
    WM_RIGHT_DOWN, WM_RIGHT_UP, WM_SYS_KEY_DOWN, WM_SYS_KEY_UP, WM_WHEEL, WM_XBUTTON_DOWN,
    WM_XBUTTON_UP,
};

/// `mouseData` high word value identifying the first extended button.
const XBUTTON1: i16 = 1;

/// Decodes a keyboard hook record into a [`KeyTransition`].
///
/// `message_code` must be one of [`WM_KEY_DOWN`], [`WM_KEY_UP`],
/// [`WM_SYS_KEY_DOWN`], [`WM_SYS_KEY_UP`]; the dispatcher forwards any other
/// keyboard message without decoding, so other codes reaching this function
/// are a caller bug.
pub fn decode_key(record: &RawKeyRecord, message_code: u32) -> KeyTransition {
    debug_assert!(
        matches!(
            message_code,
            WM_KEY_DOWN | WM_KEY_UP | WM_SYS_KEY_DOWN | WM_SYS_KEY_UP
        ),
        "decode_key called with non key-transition message 0x{message_code:X}"
    );

    KeyTransition {
        key: identify_vk(record.virtual_key),
        pressed: matches!(message_code, WM_KEY_DOWN | WM_SYS_KEY_DOWN),
        injected: record.flags & KEY_FLAG_INJECTED != 0,
    }
}

/// Decodes a mouse hook record into a [`SemanticInputEvent`], dispatched on
/// `message_code`.
///
/// Message codes outside the enumerated set decode to
/// [`SemanticInputEvent::Unrecognized`] rather than erroring — the hook API
/// may deliver codes beyond this list and the callback must still return a
/// decision for them.
///
/// The wheel direction for a high word of exactly zero is `Down`, matching
/// the strict `delta > 0` comparison of the platform's sign convention.
/// Real devices do not produce zero deltas; the boundary is pinned by test.
pub fn decode_pointer(record: &RawPointerRecord, message_code: u32) -> SemanticInputEvent {
    let injected = record.flags & POINTER_FLAG_INJECTED != 0;

    match message_code {
        WM_MOUSE_MOVE => SemanticInputEvent::PointerMove {
            x: record.x,
            y: record.y,
            injected,
        },
        WM_WHEEL => SemanticInputEvent::WheelScroll {
            direction: if record.aux_high_word() > 0 {
                WheelDirection::Up
            } else {
                WheelDirection::Down
            },
            injected,
        },
        WM_LEFT_DOWN | WM_LEFT_UP => button(ButtonIdentity::Left, message_code == WM_LEFT_DOWN, injected),
        WM_RIGHT_DOWN | WM_RIGHT_UP => {
            button(ButtonIdentity::Right, message_code == WM_RIGHT_DOWN, injected)
        }
        WM_MIDDLE_DOWN | WM_MIDDLE_UP => {
            button(ButtonIdentity::Middle, message_code == WM_MIDDLE_DOWN, injected)
        }
        WM_XBUTTON_DOWN | WM_XBUTTON_UP => {
            // The specific extended button lives in the aux data high word,
            // not the message code.
            let which = if record.aux_high_word() == XBUTTON1 {
                ButtonIdentity::X1
            } else {
                ButtonIdentity::X2
            };
            button(which, message_code == WM_XBUTTON_DOWN, injected)
        }
        other => SemanticInputEvent::Unrecognized {
            message_code: other,
            injected,
        },
    }
}

fn button(button: ButtonIdentity, pressed: bool, injected: bool) -> SemanticInputEvent {
    SemanticInputEvent::ButtonTransition {
        button,
        pressed,
        injected,
    }
}
