//! Configuration system for the cache simulator.
//!
//! This module defines the configuration structures that parameterize the
//! cache hierarchy. It provides:
//! 1. **Defaults:** Baseline geometry constants for both levels.
//! 2. **Structures:** Per-level cache parameters and the two-level hierarchy
//!    record, immutable for the run.
//! 3. **Loaders:** The canonical whitespace-token text format (label plus
//!    three integers per level) and serde deserialization for JSON sources.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::common::{ConfigError, SimError};

/// Default configuration constants.
///
/// These values define the baseline cache geometry when not explicitly
/// overridden by a config source.
mod defaults {
    /// Default block (line) size in bytes for both levels.
    pub const BLOCK_BYTES: usize = 16;

    /// Default associativity (1 way = direct-mapped).
    pub const WAYS: usize = 1;

    /// Default L1 total size in KiB.
    pub const L1_SIZE_KIB: usize = 1;

    /// Default L2 total size in KiB.
    pub const L2_SIZE_KIB: usize = 8;
}

/// Parameters of a single cache level.
///
/// An associativity of `0` denotes a fully associative cache, `1` a
/// direct-mapped cache, and `N` an N-way set-associative cache. Geometry
/// validation (power-of-two checks, field-width accounting) happens when a
/// [`crate::cache::CacheGeometry`] is derived from this record, before any
/// access is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Block (line) size in bytes.
    #[serde(default = "CacheConfig::default_block_bytes")]
    pub block_bytes: usize,

    /// Associativity: 0 = fully associative, 1 = direct-mapped, N = N-way.
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Total cache size in KiB.
    pub size_kib: usize,
}

impl CacheConfig {
    /// Returns the default block size in bytes.
    fn default_block_bytes() -> usize {
        defaults::BLOCK_BYTES
    }

    /// Returns the default associativity.
    fn default_ways() -> usize {
        defaults::WAYS
    }
}

/// Two-level hierarchy configuration, supplied once at construction.
///
/// # Examples
///
/// Reading the canonical text format:
///
/// ```
/// use memsim_core::config::HierarchyConfig;
///
/// let text = "L1: 16 1 1\nL2: 16 1 8\n";
/// let config = HierarchyConfig::from_reader(text.as_bytes()).unwrap();
/// assert_eq!(config.l1.block_bytes, 16);
/// assert_eq!(config.l2.size_kib, 8);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use memsim_core::config::HierarchyConfig;
///
/// let json = r#"{
///     "l1": { "block_bytes": 16, "ways": 2, "size_kib": 1 },
///     "l2": { "block_bytes": 16, "ways": 4, "size_kib": 16 }
/// }"#;
///
/// let config: HierarchyConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.l1.ways, 2);
/// assert_eq!(config.l2.size_kib, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HierarchyConfig {
    /// L1 cache parameters.
    pub l1: CacheConfig,
    /// L2 cache parameters.
    pub l2: CacheConfig,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            l1: CacheConfig {
                block_bytes: defaults::BLOCK_BYTES,
                ways: defaults::WAYS,
                size_kib: defaults::L1_SIZE_KIB,
            },
            l2: CacheConfig {
                block_bytes: defaults::BLOCK_BYTES,
                ways: defaults::WAYS,
                size_kib: defaults::L2_SIZE_KIB,
            },
        }
    }
}

impl HierarchyConfig {
    /// Reads the canonical text config format from any byte source.
    ///
    /// The format is, in order: a label token and three integers for L1
    /// (block size in bytes, associativity, total size in KiB), then the
    /// same for L2. Labels are accepted and discarded beyond their ordering
    /// role. Whitespace of any shape separates tokens.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the source cannot be read, or
    /// [`SimError::Config`] if a token is missing or not an integer.
    pub fn from_reader<R: Read>(mut source: R) -> Result<Self, SimError> {
        let mut text = String::new();
        let _ = source.read_to_string(&mut text)?;

        let mut tokens = text.split_whitespace();
        let l1 = parse_level(
            &mut tokens,
            ["L1 label", "L1 block size", "L1 associativity", "L1 size"],
        )?;
        let l2 = parse_level(
            &mut tokens,
            ["L2 label", "L2 block size", "L2 associativity", "L2 size"],
        )?;
        Ok(Self { l1, l2 })
    }

    /// Reads the canonical text config format from a file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be opened or read, or
    /// [`SimError::Config`] if the contents are malformed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }
}

/// Parses one level (a label token and three integer tokens) of the text
/// config format. `fields` names the tokens for error reports, in order.
fn parse_level<'a, I>(tokens: &mut I, fields: [&'static str; 4]) -> Result<CacheConfig, ConfigError>
where
    I: Iterator<Item = &'a str>,
{
    let [label, block, ways, size] = fields;
    let mut next = |field| tokens.next().ok_or(ConfigError::MissingField(field));

    let _ = next(label)?;
    Ok(CacheConfig {
        block_bytes: parse_field(block, next(block)?)?,
        ways: parse_field(ways, next(ways)?)?,
        size_kib: parse_field(size, next(size)?)?,
    })
}

/// Parses one integer field of the text config format.
fn parse_field(field: &'static str, token: &str) -> Result<usize, ConfigError> {
    token.parse().map_err(|_| ConfigError::BadInteger {
        field,
        token: token.to_string(),
    })
}
