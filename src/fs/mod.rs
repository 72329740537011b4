//! Filesystem utilities for promptgen.
//!
//! Persisted prompt documents and the event log are the crate's durable
//! output, so writes go through an atomic path that never leaves a partially
//! written file behind.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
