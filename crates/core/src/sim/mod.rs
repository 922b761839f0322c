//! Trace-driven simulation driver.
//!
//! This module feeds memory access traces through the cache hierarchy. It
//! provides:
//! 1. **Trace Parsing:** A lazy reader turning text lines into access
//!    records, with fatal errors for unsupported access types.
//! 2. **Driver:** The per-record access cycle (dispatch, outcome
//!    collection, output formatting, statistics).

/// The per-record simulation driver.
pub mod simulator;

/// Trace record parsing.
pub mod trace;

pub use simulator::Simulator;
pub use trace::{TraceReader, TraceRecord};
