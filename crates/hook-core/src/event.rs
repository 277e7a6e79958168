//! Decoded, consumer-facing input event types.
//!
//! A [`SemanticInputEvent`] is what subscribers observe: the raw hook record
//! reduced to key/button identity, transition direction, pointer coordinates,
//! or wheel direction, plus whether the event was synthesized by software.
//! Events own no OS resources and are trivially copyable.

use serde::{Deserialize, Serialize};

use crate::keys::KeyIdentity;

/// A keyboard key transition (press or release).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTransition {
    /// Which key changed state.
    pub key: KeyIdentity,
    /// `true` for key-down, `false` for key-up.
    pub pressed: bool,
    /// `true` if the event was produced by software rather than hardware.
    pub injected: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonIdentity {
    Left,
    Right,
    Middle,
    /// First extended (side) button.
    X1,
    /// Second extended (side) button.
    X2,
}

/// Vertical wheel scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDirection {
    /// Wheel rotated away from the user.
    Up,
    /// Wheel rotated toward the user.
    Down,
}

/// A decoded input event as delivered to subscribers.
///
/// [`SemanticInputEvent::Unrecognized`] keeps the engine forward-compatible:
/// the OS hook APIs may deliver message codes beyond the enumerated set, and
/// those must flow through (and remain suppressible) rather than fail the
/// callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemanticInputEvent {
    /// A key was pressed or released.
    Key(KeyTransition),
    /// The pointer moved to an absolute screen position.
    ///
    /// Coordinates are passed through verbatim; clamping to a display area
    /// is downstream policy.
    PointerMove { x: i32, y: i32, injected: bool },
    /// The vertical wheel was scrolled.
    WheelScroll {
        direction: WheelDirection,
        injected: bool,
    },
    /// A mouse button was pressed or released.
    ButtonTransition {
        button: ButtonIdentity,
        pressed: bool,
        injected: bool,
    },
    /// A pointer message code outside the enumerated set.
    Unrecognized { message_code: u32, injected: bool },
}

impl SemanticInputEvent {
    /// `true` if the event was synthesized by software.
    pub fn injected(&self) -> bool {
        match *self {
            SemanticInputEvent::Key(KeyTransition { injected, .. })
            | SemanticInputEvent::PointerMove { injected, .. }
            | SemanticInputEvent::WheelScroll { injected, .. }
            | SemanticInputEvent::ButtonTransition { injected, .. }
            | SemanticInputEvent::Unrecognized { injected, .. } => injected,
        }
    }
}

impl From<KeyTransition> for SemanticInputEvent {
    fn from(transition: KeyTransition) -> Self {
        SemanticInputEvent::Key(transition)
    }
}
