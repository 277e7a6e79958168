//! Windows Virtual Key (VK) code to [`KeyIdentity`] translation table.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).  VK codes range from
//! 0x00 to 0xFF.
//!
//! # What is a Virtual Key code? (for beginners)
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code",
//! defined in `<winuser.h>` and named `VK_*` (e.g., `VK_RETURN = 0x0D`).
//! They are "virtual" because they represent *logical* keys rather than
//! physical scan codes: pressing the letter A always produces `VK_A = 0x41`
//! regardless of keyboard layout.
//!
//! # How this table works
//!
//! `VK_TABLE` is a compile-time constant array of 256 `Option<KeyIdentity>`
//! values, indexed by VK code.  Position 0x41 holds `Some(KeyA)` because
//! VK_A is 0x41.  VK codes without a named identity store `None`, and
//! [`identify_vk`] turns those into [`KeyIdentity::Unknown`] carrying the
//! raw code, so no input is ever lost to an incomplete enumeration.
//!
//! Indexing into this array is an O(1) lookup.  This matters because every
//! intercepted key event goes through this table on the hook callback path,
//! which runs under a hard latency budget.

use serde::{Deserialize, Serialize};

/// Semantic identity of a keyboard key, decoded from a Virtual Key code.
///
/// [`KeyIdentity::Unknown`] carries any VK code that has no named variant;
/// decoding is total over all possible inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyIdentity {
    // Letters
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL,
    KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX,
    KeyY, KeyZ,
    // Digit row
    Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8,
    Digit9,
    // Control keys
    Enter, Escape, Backspace, Tab, Space, CapsLock, ScrollLock, NumLock,
    Pause, Insert, Home, PageUp, Delete, End, PageDown, PrintScreen,
    ContextMenu,
    // Arrows
    ArrowLeft, ArrowUp, ArrowRight, ArrowDown,
    // Function keys
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    // Numpad
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4, Numpad5, Numpad6, Numpad7,
    Numpad8, Numpad9, NumpadMultiply, NumpadAdd, NumpadSubtract,
    NumpadDecimal, NumpadDivide,
    // Punctuation / symbols (US layout names)
    Minus, Equal, BracketLeft, BracketRight, Backslash, Semicolon, Quote,
    Backquote, Comma, Period, Slash,
    // Modifiers.  The low-level hook reports side-specific codes
    // (VK_LSHIFT/VK_RSHIFT etc.); the generic VK_SHIFT/VK_CONTROL/VK_MENU
    // codes can still arrive from synthetic senders, so both forms exist.
    Shift, ShiftLeft, ShiftRight, Control, ControlLeft, ControlRight, Alt,
    AltLeft, AltRight, MetaLeft, MetaRight,
    /// A VK code with no named variant; carries the raw code unchanged.
    Unknown(u32),
}

/// Translates a Windows Virtual Key code to a [`KeyIdentity`].
///
/// Total over all `u32` inputs: codes above 0xFF and unmapped table entries
/// both produce [`KeyIdentity::Unknown`] carrying the original code.
pub fn identify_vk(vk: u32) -> KeyIdentity {
    if vk < 256 {
        if let Some(key) = VK_TABLE[vk as usize] {
            return key;
        }
    }
    KeyIdentity::Unknown(vk)
}

/// VK → identity mapping table indexed by VK code (0x00–0xFF).
///
/// Entries are `None` when the VK code has no named identity.
/// Reference: https://learn.microsoft.com/windows/win32/inputdev/virtual-key-codes
const VK_TABLE: [Option<KeyIdentity>; 256] = {
    use KeyIdentity::*;
    let mut t: [Option<KeyIdentity>; 256] = [None; 256];

    // ── Alphabet keys (VK_A=0x41 … VK_Z=0x5A) ────────────────────────────────
    t[0x41] = Some(KeyA);
    t[0x42] = Some(KeyB);
    t[0x43] = Some(KeyC);
    t[0x44] = Some(KeyD);
    t[0x45] = Some(KeyE);
    t[0x46] = Some(KeyF);
    t[0x47] = Some(KeyG);
    t[0x48] = Some(KeyH);
    t[0x49] = Some(KeyI);
    t[0x4A] = Some(KeyJ);
    t[0x4B] = Some(KeyK);
    t[0x4C] = Some(KeyL);
    t[0x4D] = Some(KeyM);
    t[0x4E] = Some(KeyN);
    t[0x4F] = Some(KeyO);
    t[0x50] = Some(KeyP);
    t[0x51] = Some(KeyQ);
    t[0x52] = Some(KeyR);
    t[0x53] = Some(KeyS);
    t[0x54] = Some(KeyT);
    t[0x55] = Some(KeyU);
    t[0x56] = Some(KeyV);
    t[0x57] = Some(KeyW);
    t[0x58] = Some(KeyX);
    t[0x59] = Some(KeyY);
    t[0x5A] = Some(KeyZ);

    // ── Digit row (VK_0=0x30 … VK_9=0x39) ───────────────────────────────────
    t[0x30] = Some(Digit0);
    t[0x31] = Some(Digit1);
    t[0x32] = Some(Digit2);
    t[0x33] = Some(Digit3);
    t[0x34] = Some(Digit4);
    t[0x35] = Some(Digit5);
    t[0x36] = Some(Digit6);
    t[0x37] = Some(Digit7);
    t[0x38] = Some(Digit8);
    t[0x39] = Some(Digit9);

    // ── Control keys ─────────────────────────────────────────────────────────
    t[0x0D] = Some(Enter);          // VK_RETURN
    t[0x1B] = Some(Escape);         // VK_ESCAPE
    t[0x08] = Some(Backspace);      // VK_BACK
    t[0x09] = Some(Tab);            // VK_TAB
    t[0x20] = Some(Space);          // VK_SPACE
    t[0x14] = Some(CapsLock);       // VK_CAPITAL
    t[0x91] = Some(ScrollLock);     // VK_SCROLL
    t[0x90] = Some(NumLock);        // VK_NUMLOCK
    t[0x13] = Some(Pause);          // VK_PAUSE
    t[0x2D] = Some(Insert);         // VK_INSERT
    t[0x24] = Some(Home);           // VK_HOME
    t[0x21] = Some(PageUp);         // VK_PRIOR
    t[0x2E] = Some(Delete);         // VK_DELETE
    t[0x23] = Some(End);            // VK_END
    t[0x22] = Some(PageDown);       // VK_NEXT
    t[0x2C] = Some(PrintScreen);    // VK_SNAPSHOT
    t[0x5D] = Some(ContextMenu);    // VK_APPS

    // ── Arrow keys ───────────────────────────────────────────────────────────
    t[0x25] = Some(ArrowLeft);
    t[0x26] = Some(ArrowUp);
    t[0x27] = Some(ArrowRight);
    t[0x28] = Some(ArrowDown);

    // ── Function keys (VK_F1=0x70 … VK_F12=0x7B) ─────────────────────────────
    t[0x70] = Some(F1);
    t[0x71] = Some(F2);
    t[0x72] = Some(F3);
    t[0x73] = Some(F4);
    t[0x74] = Some(F5);
    t[0x75] = Some(F6);
    t[0x76] = Some(F7);
    t[0x77] = Some(F8);
    t[0x78] = Some(F9);
    t[0x79] = Some(F10);
    t[0x7A] = Some(F11);
    t[0x7B] = Some(F12);

    // ── Numpad (VK_NUMPAD0=0x60 … VK_NUMPAD9=0x69) ───────────────────────────
    t[0x60] = Some(Numpad0);
    t[0x61] = Some(Numpad1);
    t[0x62] = Some(Numpad2);
    t[0x63] = Some(Numpad3);
    t[0x64] = Some(Numpad4);
    t[0x65] = Some(Numpad5);
    t[0x66] = Some(Numpad6);
    t[0x67] = Some(Numpad7);
    t[0x68] = Some(Numpad8);
    t[0x69] = Some(Numpad9);
    t[0x6A] = Some(NumpadMultiply); // VK_MULTIPLY
    t[0x6B] = Some(NumpadAdd);      // VK_ADD
    t[0x6D] = Some(NumpadSubtract); // VK_SUBTRACT
    t[0x6E] = Some(NumpadDecimal);  // VK_DECIMAL
    t[0x6F] = Some(NumpadDivide);   // VK_DIVIDE

    // ── Punctuation / symbols ────────────────────────────────────────────────
    t[0xBD] = Some(Minus);          // VK_OEM_MINUS  (- _)
    t[0xBB] = Some(Equal);          // VK_OEM_PLUS   (= +)
    t[0xDB] = Some(BracketLeft);    // VK_OEM_4      ([ {)
    t[0xDD] = Some(BracketRight);   // VK_OEM_6      (] })
    t[0xDC] = Some(Backslash);      // VK_OEM_5      (\ |)
    t[0xBA] = Some(Semicolon);      // VK_OEM_1      (; :)
    t[0xDE] = Some(Quote);          // VK_OEM_7      (' ")
    t[0xC0] = Some(Backquote);      // VK_OEM_3      (` ~)
    t[0xBC] = Some(Comma);          // VK_OEM_COMMA  (, <)
    t[0xBE] = Some(Period);         // VK_OEM_PERIOD (. >)
    t[0xBF] = Some(Slash);          // VK_OEM_2      (/ ?)

    // ── Modifier keys ────────────────────────────────────────────────────────
    t[0x10] = Some(Shift);          // VK_SHIFT (generic)
    t[0x11] = Some(Control);        // VK_CONTROL (generic)
    t[0x12] = Some(Alt);            // VK_MENU (generic)
    t[0xA0] = Some(ShiftLeft);      // VK_LSHIFT
    t[0xA1] = Some(ShiftRight);     // VK_RSHIFT
    t[0xA2] = Some(ControlLeft);    // VK_LCONTROL
    t[0xA3] = Some(ControlRight);   // VK_RCONTROL
    t[0xA4] = Some(AltLeft);        // VK_LMENU
    t[0xA5] = Some(AltRight);       // VK_RMENU
    t[0x5B] = Some(MetaLeft);       // VK_LWIN
    t[0x5C] = Some(MetaRight);      // VK_RWIN

    t
};
