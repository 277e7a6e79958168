//! Raw low-level hook record layouts and Win32 message constants.
//!
//! The OS delivers each intercepted event as a pointer to a fixed-layout
//! struct (`KBDLLHOOKSTRUCT` for keyboard, `MSLLHOOKSTRUCT` for mouse).
//! The structs here reproduce those layouts field-for-field so a hook
//! callback can reinterpret the OS pointer directly, and so tests can build
//! records byte-identical to what the OS would deliver.
//!
//! # Why own these definitions? (for beginners)
//!
//! The `windows` crate ships bindings for both structs, but this crate must
//! stay free of OS dependencies so the decoder can be unit-tested and
//! benchmarked on any platform.  The layouts are stable ABI: sequential
//! 32-bit fields followed by a pointer-sized `extra_info`, exactly as
//! `winuser.h` declares them.
//!
//! Reference:
//! <https://learn.microsoft.com/windows/win32/api/winuser/ns-winuser-kbdllhookstruct>
//! <https://learn.microsoft.com/windows/win32/api/winuser/ns-winuser-msllhookstruct>

// ── Hook type identifiers ─────────────────────────────────────────────────────

/// `WH_KEYBOARD_LL`: system-wide low-level keyboard hook.
pub const WH_KEYBOARD_LL: i32 = 13;
/// `WH_MOUSE_LL`: system-wide low-level mouse hook.
pub const WH_MOUSE_LL: i32 = 14;

// ── Keyboard message codes ────────────────────────────────────────────────────

pub const WM_KEY_DOWN: u32 = 0x100;
pub const WM_KEY_UP: u32 = 0x101;
/// Key-down delivered while Alt is held (or for the Alt key itself).
pub const WM_SYS_KEY_DOWN: u32 = 0x104;
pub const WM_SYS_KEY_UP: u32 = 0x105;

// ── Mouse message codes ───────────────────────────────────────────────────────

pub const WM_MOUSE_MOVE: u32 = 512;
pub const WM_LEFT_DOWN: u32 = 0x201;
pub const WM_LEFT_UP: u32 = 0x202;
pub const WM_RIGHT_DOWN: u32 = 0x204;
pub const WM_RIGHT_UP: u32 = 0x205;
pub const WM_MIDDLE_DOWN: u32 = 0x207;
pub const WM_MIDDLE_UP: u32 = 0x208;
pub const WM_XBUTTON_DOWN: u32 = 0x20B;
pub const WM_XBUTTON_UP: u32 = 0x20C;
pub const WM_WHEEL: u32 = 522;

// ── Flag bits ─────────────────────────────────────────────────────────────────

/// `LLKHF_INJECTED`: set in [`RawKeyRecord::flags`] when the key event was
/// produced by software (`SendInput`) rather than hardware.
pub const KEY_FLAG_INJECTED: u32 = 0x10;
/// `LLKHF_EXTENDED`: set for extended keys (right-side modifiers, numpad Enter).
pub const KEY_FLAG_EXTENDED: u32 = 0x01;
/// `LLKHF_ALTDOWN`: set while Alt is held.
pub const KEY_FLAG_ALT_DOWN: u32 = 0x20;
/// `LLMHF_INJECTED`: set in [`RawPointerRecord::flags`] for synthetic mouse
/// events.  Note this is bit 0, *not* the keyboard's bit 4 — the two hook
/// structs define their injected flags at different positions.
pub const POINTER_FLAG_INJECTED: u32 = 0x01;

/// `HC_ACTION`: relay code value meaning "this invocation carries an event to
/// process".  Negative relay codes must be forwarded without processing.
pub const HC_ACTION: i32 = 0;

// ── Record layouts ────────────────────────────────────────────────────────────

/// Raw keyboard hook record, layout-compatible with Win32 `KBDLLHOOKSTRUCT`.
///
/// Produced once per physical or synthetic key transition; immutable after
/// the OS hands it to the hook chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct RawKeyRecord {
    /// Windows Virtual Key code of the key.
    pub virtual_key: u32,
    /// Hardware scan code.
    pub scan_code: u32,
    /// Flag bitset: [`KEY_FLAG_EXTENDED`], [`KEY_FLAG_INJECTED`],
    /// [`KEY_FLAG_ALT_DOWN`].
    pub flags: u32,
    /// Milliseconds since system start.
    pub time: u32,
    /// Opaque value attached by the producer of the event.
    pub extra_info: usize,
}

impl RawKeyRecord {
    /// Builds a record with only the identity fields set, for tests and
    /// synthetic injection.
    pub fn new(virtual_key: u32, scan_code: u32, flags: u32) -> Self {
        Self {
            virtual_key,
            scan_code,
            flags,
            time: 0,
            extra_info: 0,
        }
    }
}

/// Raw mouse hook record, layout-compatible with Win32 `MSLLHOOKSTRUCT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct RawPointerRecord {
    /// Absolute X in virtual screen coordinates (multi-monitor aware).
    pub x: i32,
    /// Absolute Y in virtual screen coordinates.
    pub y: i32,
    /// Auxiliary data word.  The signed high 16 bits carry the wheel delta
    /// for [`WM_WHEEL`] and the X-button index (1 or 2) for
    /// [`WM_XBUTTON_DOWN`]/[`WM_XBUTTON_UP`]; otherwise unused.
    pub aux_data: u32,
    /// Flag bitset: [`POINTER_FLAG_INJECTED`].
    pub flags: u32,
    /// Milliseconds since system start.
    pub time: u32,
    /// Opaque value attached by the producer of the event.
    pub extra_info: usize,
}

impl RawPointerRecord {
    /// Builds a record at the given coordinates, for tests and synthetic
    /// injection.
    pub fn new(x: i32, y: i32, aux_data: u32, flags: u32) -> Self {
        Self {
            x,
            y,
            aux_data,
            flags,
            time: 0,
            extra_info: 0,
        }
    }

    /// The signed high 16 bits of [`aux_data`](Self::aux_data) — wheel delta
    /// or X-button index depending on the message code.
    pub fn aux_high_word(&self) -> i16 {
        (self.aux_data >> 16) as u16 as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_key_record_layout_matches_kbdllhookstruct() {
        // KBDLLHOOKSTRUCT: four DWORDs followed by a ULONG_PTR.
        // 64-bit: 16 bytes of DWORDs + 8 (pointer, 8-aligned) = 24.
        // 32-bit: 16 + 4 = 20.
        let expected = if size_of::<usize>() == 8 { 24 } else { 20 };
        assert_eq!(size_of::<RawKeyRecord>(), expected);
        assert_eq!(align_of::<RawKeyRecord>(), align_of::<usize>());
    }

    #[test]
    fn test_pointer_record_layout_matches_msllhookstruct() {
        // MSLLHOOKSTRUCT: POINT (two LONGs), three DWORDs, then a ULONG_PTR.
        // 64-bit: 20 bytes + 4 padding + 8 = 32.  32-bit: 20 + 4 = 24.
        let expected = if size_of::<usize>() == 8 { 32 } else { 24 };
        assert_eq!(size_of::<RawPointerRecord>(), expected);
        assert_eq!(align_of::<RawPointerRecord>(), align_of::<usize>());
    }

    #[test]
    fn test_aux_high_word_is_signed() {
        let positive = RawPointerRecord::new(0, 0, 0x0078_0000, 0);
        let negative = RawPointerRecord::new(0, 0, 0xFF88_0000, 0);
        let zero = RawPointerRecord::new(0, 0, 0x0000_FFFF, 0);

        assert_eq!(positive.aux_high_word(), 120);
        assert_eq!(negative.aux_high_word(), -120);
        assert_eq!(zero.aux_high_word(), 0);
    }

    #[test]
    fn test_injected_flag_bits_are_distinct_positions() {
        assert_eq!(KEY_FLAG_INJECTED, 0x10);
        assert_eq!(POINTER_FLAG_INJECTED, 0x01);
        assert_ne!(KEY_FLAG_INJECTED, POINTER_FLAG_INJECTED);
    }
}
