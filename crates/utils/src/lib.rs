//! Shared runtime utilities for fnx consumers
//!
//! The core crate only emits `tracing` events. This crate installs the
//! subscriber that turns them into output, for binaries and for tests.

pub mod tracing;

pub use self::tracing::*;
