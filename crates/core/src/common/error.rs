//! Error definitions for the cache simulator.
//!
//! This module defines the error taxonomy of the simulator:
//! 1. **Configuration Errors:** Malformed cache geometry or an unreadable
//!    config source; always fatal before any access is processed.
//! 2. **Trace Errors:** Malformed trace records; fatal for the whole run.
//! 3. **Top-Level Errors:** A unifying type for the driver and CLI.
//!
//! Hits, misses, evictions, and invalidations are ordinary control flow and
//! never appear here; once inputs are parsed the simulation step itself is
//! infallible.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while constructing a cache configuration or geometry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Block size must be a non-zero power of two so the offset field has an
    /// integral bit width.
    #[error("block size {0} is not a non-zero power of two")]
    BadBlockSize(usize),

    /// The derived set count must be a power of two so the index field has
    /// an integral bit width.
    #[error("derived set count {0} is not a non-zero power of two")]
    BadSetCount(usize),

    /// Total cache size must divide evenly into `block_bytes * ways` lines.
    #[error("cache size {size_kib} KiB is not divisible into {ways}-way sets of {block_bytes}-byte blocks")]
    IndivisibleSize {
        /// Total cache size in KiB.
        size_kib: usize,
        /// Block size in bytes.
        block_bytes: usize,
        /// Associativity.
        ways: usize,
    },

    /// Offset and index fields together exceed the 32-bit address width.
    #[error("offset ({offset_bits}) + index ({index_bits}) bits exceed the 32-bit address")]
    FieldOverflow {
        /// Bits consumed by the block offset field.
        offset_bits: u32,
        /// Bits consumed by the set index field.
        index_bits: u32,
    },

    /// A token expected by the text config reader was missing.
    #[error("config source ended early: expected {0}")]
    MissingField(&'static str),

    /// A numeric token in the text config could not be parsed.
    #[error("config field {field}: bad integer `{token}`")]
    BadInteger {
        /// Name of the field being parsed.
        field: &'static str,
        /// The offending token.
        token: String,
    },
}

/// Errors raised while parsing a memory access trace.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    /// The access type token was neither `R` nor `W`.
    ///
    /// This aborts the run; unknown access types are never skipped or
    /// defaulted.
    #[error("line {line}: unsupported access type `{token}`")]
    UnsupportedAccessType {
        /// 1-based line number in the trace source.
        line: u64,
        /// The offending token.
        token: String,
    },

    /// A record was missing its address field.
    #[error("line {line}: missing address field")]
    MissingAddress {
        /// 1-based line number in the trace source.
        line: u64,
    },

    /// The address token was not a valid 32-bit hexadecimal value.
    #[error("line {line}: bad hex address `{token}`")]
    BadAddress {
        /// 1-based line number in the trace source.
        line: u64,
        /// The offending token.
        token: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Top-level simulator error, unifying configuration, trace, and I/O
/// failures for the driver and CLI.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid cache configuration or geometry.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed trace record.
    #[error("trace error: {0}")]
    Trace(#[from] TraceError),

    /// Unreadable config/trace source or unwritable result sink.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
