//! Set-Associative Tag Store.
//!
//! This module implements the tag/valid storage of one cache level: a flat
//! vector of slots indexed `set * ways + way`, with a single replacement
//! cursor shared across all sets. It provides:
//! 1. **Lookup:** Valid-tag search within one set.
//! 2. **Fill:** Insertion into the lowest invalid way, or round-robin
//!    replacement when the set is full.
//! 3. **Invalidation:** Targeted clearing of the first valid slot holding a
//!    given tag, used for back-invalidation from the level below.

use tracing::trace;

/// One cache line slot: tag and validity only. No data values are modeled.
#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    tag: u32,
    valid: bool,
}

/// Tag store of one cache level.
///
/// The replacement cursor is a single integer shared by every set, advanced
/// modulo `ways` each time an eviction (not a fill into an invalid slot)
/// occurs. This global round-robin is the modeled policy; it is not a
/// per-set FIFO or LRU and must not be upgraded to one.
#[derive(Clone, Debug)]
pub struct SetStore {
    slots: Vec<Slot>,
    sets: usize,
    ways: usize,
    /// Way index the next eviction (in any set) will overwrite.
    cursor: usize,
}

impl SetStore {
    /// Creates a store of `sets * ways` invalid slots.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            slots: vec![Slot::default(); sets * ways],
            sets,
            ways,
            cursor: 0,
        }
    }

    /// Returns true iff some slot in `set` is valid and holds `tag`.
    pub fn lookup(&self, set: u32, tag: u32) -> bool {
        self.set_slots(set).iter().any(|s| s.valid && s.tag == tag)
    }

    /// Inserts `tag` into `set`.
    ///
    /// If the set has an invalid slot, the lowest-index one is filled and
    /// marked valid; this is a pure insertion and does not advance the
    /// replacement cursor. If the set is full, the slot at the global cursor
    /// position is overwritten (staying valid) and the cursor advances
    /// modulo the way count.
    pub fn fill(&mut self, set: u32, tag: u32) {
        let base = set as usize * self.ways;

        if let Some(way) = self.set_slots(set).iter().position(|s| !s.valid) {
            self.slots[base + way] = Slot { tag, valid: true };
            trace!(set, way, tag, "fill into invalid way");
            return;
        }

        let way = self.cursor;
        let evicted = self.slots[base + way].tag;
        self.slots[base + way].tag = tag;
        self.cursor = (self.cursor + 1) % self.ways;
        trace!(set, way, tag, evicted, "set full, round-robin eviction");
    }

    /// Clears the valid bit of the first valid slot holding `tag`.
    ///
    /// Sets are scanned in order, ways within a set in order, and the scan
    /// stops at the first match. Tags are cache-line addresses unique within
    /// a level, so at most one slot is expected to hold a given tag; the
    /// early stop guards the expectation rather than relying on it.
    ///
    /// Returns true if a slot was invalidated.
    pub fn invalidate_by_tag(&mut self, tag: u32) -> bool {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.valid && slot.tag == tag {
                slot.valid = false;
                trace!(
                    set = idx / self.ways,
                    way = idx % self.ways,
                    tag,
                    "back-invalidated"
                );
                return true;
            }
        }
        trace!(tag, "back-invalidation target not resident");
        false
    }

    /// Number of sets.
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// Number of ways per set.
    pub fn ways(&self) -> usize {
        self.ways
    }

    /// Snapshot of the valid bits, set-major. Used by tests to assert that
    /// write misses leave cache state untouched.
    pub fn valid_bits(&self) -> Vec<bool> {
        self.slots.iter().map(|s| s.valid).collect()
    }

    /// Slots of one set.
    fn set_slots(&self, set: u32) -> &[Slot] {
        let base = set as usize * self.ways;
        &self.slots[base..base + self.ways]
    }
}
