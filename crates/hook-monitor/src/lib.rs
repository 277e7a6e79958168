//! hook-monitor library entry point.
//!
//! Re-exports the engine module so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.

pub mod engine;
