//! Cache hierarchy engine.
//!
//! This module implements the simulated cache hardware. It provides:
//! 1. **Geometry:** Bit-field derivation and address decoding.
//! 2. **Store:** Per-set tag/valid slots with global round-robin replacement.
//! 3. **Level:** One cache level combining a geometry and a store, with
//!    access classification, fill, and back-invalidation.
//! 4. **Hierarchy:** The two-level read and write protocols, including
//!    inclusion-maintenance back-invalidation of L1 on L2 eviction.

/// Address decoding and bit-field geometry.
pub mod geometry;

/// Two-level hierarchy protocols.
pub mod hierarchy;

/// Set-associative tag/valid storage.
pub mod store;

pub use geometry::{CacheGeometry, DecodedAddr};
pub use hierarchy::{CacheHierarchy, LevelOutcomes};
pub use store::SetStore;

use tracing::debug;

use crate::common::{AccessKind, AccessOutcome, ConfigError};
use crate::config::CacheConfig;

/// Result of classifying one access at one cache level.
///
/// Carries the decoded address fields alongside the hit/miss outcome so the
/// hierarchy can thread them explicitly into [`CacheLevel::update`] and
/// [`CacheLevel::back_invalidate`] within the same access cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessResult {
    /// Hit/miss classification of the access.
    pub outcome: AccessOutcome,
    /// Decoded tag, set index, and block offset of the accessed address.
    pub decoded: DecodedAddr,
}

/// One level of the simulated cache hierarchy.
///
/// Owns a derived [`CacheGeometry`] and a [`SetStore`]. Classification
/// ([`CacheLevel::access`]) does not mutate the store; fills and
/// invalidations are separate operations driven by the hierarchy protocols.
#[derive(Clone, Debug)]
pub struct CacheLevel {
    name: &'static str,
    geometry: CacheGeometry,
    store: SetStore,
}

impl CacheLevel {
    /// Builds a cache level from its configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the geometry cannot be derived (see
    /// [`CacheGeometry::new`]).
    pub fn new(name: &'static str, config: &CacheConfig) -> Result<Self, ConfigError> {
        let geometry = CacheGeometry::new(config)?;
        debug!(
            level = name,
            sets = geometry.sets,
            ways = geometry.ways,
            tag_bits = geometry.tag_bits,
            index_bits = geometry.index_bits,
            offset_bits = geometry.offset_bits,
            "cache level constructed"
        );
        Ok(Self {
            name,
            geometry,
            store: SetStore::new(geometry.sets, geometry.ways),
        })
    }

    /// Classifies one access without changing cache state.
    ///
    /// The outcome starts pessimistic (the miss variant for `kind`) and is
    /// upgraded to the corresponding hit when the set holds a valid matching
    /// tag. The decoded fields are returned for the caller to thread into
    /// [`CacheLevel::update`] or [`CacheLevel::back_invalidate`].
    pub fn access(&self, addr: u32, kind: AccessKind) -> AccessResult {
        let decoded = self.geometry.decode(addr);
        let outcome = if self.store.lookup(decoded.set, decoded.tag) {
            AccessOutcome::hit_for(kind)
        } else {
            AccessOutcome::miss_for(kind)
        };
        debug!(
            level = self.name,
            addr = %format_args!("{addr:#010x}"),
            tag = decoded.tag,
            set = decoded.set,
            ?outcome,
            "access"
        );
        AccessResult { outcome, decoded }
    }

    /// Fills the line for a just-missed access into this level.
    ///
    /// `decoded` must come from the [`CacheLevel::access`] call of the same
    /// access cycle, and the access must have missed.
    pub fn update(&mut self, decoded: &DecodedAddr) {
        self.store.fill(decoded.set, decoded.tag);
    }

    /// Invalidates this level's copy of a line evicted one level down.
    ///
    /// When `evicted_tag` equals the tag of `just_filled` — the line that
    /// caused this very access and was just written into this level — the
    /// fresh copy is authoritative and nothing is invalidated. Otherwise the
    /// first valid slot holding `evicted_tag` is cleared.
    pub fn back_invalidate(&mut self, evicted_tag: u32, just_filled: &DecodedAddr) {
        if evicted_tag == just_filled.tag {
            debug!(
                level = self.name,
                tag = evicted_tag,
                "back-invalidation skipped: line was just filled here"
            );
            return;
        }
        let _ = self.store.invalidate_by_tag(evicted_tag);
    }

    /// This level's derived geometry.
    pub fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// This level's tag store.
    pub fn store(&self) -> &SetStore {
        &self.store
    }
}
