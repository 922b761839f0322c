//! Two-level cache hierarchy simulator library.
//!
//! This crate simulates an L1/L2 set-associative cache hierarchy driven by a
//! trace of read/write memory accesses, classifying each access as a hit or
//! miss at each level. It provides:
//! 1. **Engine:** Address decoding, set-associative tag storage with global
//!    round-robin replacement, write-no-allocate writes, and L1
//!    back-invalidation on L2 eviction.
//! 2. **Configuration:** Per-level geometry from text or JSON sources,
//!    validated before any access is processed.
//! 3. **Simulation:** A lazy trace reader and a driver producing one
//!    `"<L1> <L2>"` outcome line per access.
//! 4. **Statistics:** Per-level hit/miss tallies with derived rates.
//!
//! No timing is modeled: an access either hits or misses, deterministically.

/// Cache engine (geometry, store, levels, hierarchy).
pub mod cache;
/// Common types (access kinds, outcomes, errors).
pub mod common;
/// Simulator configuration (defaults, loaders, per-level parameters).
pub mod config;
/// Trace parsing and the simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// The two-level hierarchy; construct with [`CacheHierarchy::new`].
pub use crate::cache::CacheHierarchy;
/// Top-level error type returned by loaders and the driver.
pub use crate::common::SimError;
/// Root configuration type; load with `HierarchyConfig::from_path` or
/// deserialize from JSON.
pub use crate::config::HierarchyConfig;
/// Trace-driven simulation driver.
pub use crate::sim::Simulator;
