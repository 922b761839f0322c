//! Common types shared across the cache simulator.
//!
//! This module provides the fundamental building blocks used by the cache
//! engine and its surrounding I/O glue. It includes:
//! 1. **Access Classification:** Read/write access kinds and per-level
//!    hit/miss outcomes with their numeric wire encoding.
//! 2. **Error Handling:** Typed errors for configuration and trace parsing.

/// Access kind and outcome definitions.
pub mod access;

/// Error types for configuration and trace handling.
pub mod error;

pub use access::{AccessKind, AccessOutcome};
pub use error::{ConfigError, SimError, TraceError};
