//! # hook-core
//!
//! Platform-independent core of the global input-hook engine: raw record
//! layouts, event decoding, key identity tables, and suppression policy
//! types.
//!
//! This crate is consumed by the `hook-monitor` application, which owns the
//! OS-facing hook registrations.  It has zero dependencies on OS APIs, so
//! every decoding rule can be unit-tested and benchmarked on any platform.
//!
//! # Pipeline overview
//!
//! The operating system delivers every keyboard and mouse event to a
//! registered low-level hook *before* any application window sees it.  Each
//! delivery carries an opaque fixed-layout record; this crate turns those
//! records into typed [`SemanticInputEvent`]s:
//!
//! - **`records`** – `#[repr(C)]` mirrors of the OS hook structs
//!   (`KBDLLHOOKSTRUCT`, `MSLLHOOKSTRUCT`) plus every message and flag
//!   constant, reproduced bit-for-bit.
//!
//! - **`keys`** – the Virtual Key code → [`KeyIdentity`] lookup table.
//!   Unmapped codes pass through as `Unknown(code)` so decoding is total.
//!
//! - **`decode`** – pure O(1) decoders from raw records to semantic events,
//!   safe to run inside the latency-bounded hook callback.
//!
//! - **`event`** – the decoded, trivially-copyable event types subscribers
//!   observe.
//!
//! - **`policy`** – the [`SuppressionPolicy`] capability deciding, per
//!   event, whether to forward it down the interceptor chain or consume it.

pub mod decode;
pub mod event;
pub mod keys;
pub mod policy;
pub mod records;

// Re-export the most-used types at the crate root so callers can write
// `hook_core::SemanticInputEvent` instead of spelling out the module path.
pub use decode::{decode_key, decode_pointer};
pub use event::{ButtonIdentity, KeyTransition, SemanticInputEvent, WheelDirection};
pub use keys::{identify_vk, KeyIdentity};
pub use policy::{InterceptDecision, PassThrough, SuppressInjected, SuppressionPolicy};
pub use records::{RawKeyRecord, RawPointerRecord};
