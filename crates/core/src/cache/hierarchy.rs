//! Two-Level Hierarchy Protocols.
//!
//! This module orchestrates the L1/L2 read and write protocols over two
//! [`CacheLevel`]s:
//! 1. **Read:** L1 lookup, L2 lookup on miss, allocation into both levels on
//!    a double miss, and L1 back-invalidation to maintain inclusion.
//! 2. **Write:** Write-no-allocate at every level; a double miss forwards to
//!    main memory with no cache state change.
//! 3. **Outcome Tracking:** The per-level outcome pair of the current access
//!    cycle, reset to neutral between cycles.

use tracing::debug;

use super::{AccessResult, CacheLevel};
use crate::common::{AccessKind, AccessOutcome, ConfigError};
use crate::config::HierarchyConfig;

/// Per-level outcome pair of one access cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelOutcomes {
    /// L1 outcome (`NoAction` if L1 was never consulted — never the case in
    /// practice, since every access starts at L1).
    pub l1: AccessOutcome,
    /// L2 outcome (`NoAction` when the access was satisfied by L1).
    pub l2: AccessOutcome,
}

/// The two-level cache hierarchy.
///
/// Exclusively owned and sequentially driven: one access cycle runs to
/// completion before the next begins, and the simulation is a deterministic
/// function of the initial state and the access sequence.
///
/// # Examples
///
/// ```
/// use memsim_core::cache::CacheHierarchy;
/// use memsim_core::common::AccessOutcome;
/// use memsim_core::config::HierarchyConfig;
///
/// let mut cache = CacheHierarchy::new(&HierarchyConfig::default()).unwrap();
///
/// let cold = cache.read(0x0000_0000);
/// assert_eq!(cold.l1, AccessOutcome::ReadMiss);
/// assert_eq!(cold.l2, AccessOutcome::ReadMiss);
/// cache.reset_outcomes();
///
/// let warm = cache.read(0x0000_0000);
/// assert_eq!(warm.l1, AccessOutcome::ReadHit);
/// assert_eq!(warm.l2, AccessOutcome::NoAction);
/// ```
#[derive(Clone, Debug)]
pub struct CacheHierarchy {
    l1: CacheLevel,
    l2: CacheLevel,
    outcomes: LevelOutcomes,
}

impl CacheHierarchy {
    /// Builds both levels from a hierarchy configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered while deriving either
    /// level's geometry. Construction failure precedes all access
    /// processing.
    pub fn new(config: &HierarchyConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            l1: CacheLevel::new("L1", &config.l1)?,
            l2: CacheLevel::new("L2", &config.l2)?,
            outcomes: LevelOutcomes::default(),
        })
    }

    /// Performs one read access cycle for `addr`.
    ///
    /// An L1 hit leaves L2 untouched. An L1 miss consults L2: on an L2 hit
    /// the line is brought into L1 only; on an L2 miss both levels allocate
    /// and L1 is back-invalidated with L2's just-filled tag to purge a stale
    /// copy of whatever L2's fill displaced.
    ///
    /// The tag passed to back-invalidation is the one L2 just inserted, not
    /// the tag its fill actually overwrote; the store never exposes the
    /// evicted tag. This replicates the modeled hardware's observed behavior
    /// and is intentionally left uncorrected.
    pub fn read(&mut self, addr: u32) -> LevelOutcomes {
        let r1 = self.l1.access(addr, AccessKind::Read);
        if r1.outcome.is_hit() {
            debug!("L1 read hit, L2 not consulted");
            return self.record(r1, None);
        }

        let r2 = self.l2.access(addr, AccessKind::Read);
        self.l1.update(&r1.decoded);
        if r2.outcome.is_hit() {
            debug!("L1 read miss, L2 read hit, line brought into L1");
            return self.record(r1, Some(r2));
        }

        debug!("read miss at both levels, allocating in L1 and L2");
        self.l2.update(&r2.decoded);
        self.l1.back_invalidate(r2.decoded.tag, &r1.decoded);
        self.record(r1, Some(r2))
    }

    /// Performs one write access cycle for `addr`.
    ///
    /// Write-no-allocate at every level: a hit conceptually updates the line
    /// in place (no data array is modeled), a miss forwards to the next
    /// level, and a double miss forwards to main memory leaving both levels'
    /// state completely unchanged.
    pub fn write(&mut self, addr: u32) -> LevelOutcomes {
        let r1 = self.l1.access(addr, AccessKind::Write);
        if r1.outcome.is_hit() {
            debug!("L1 write hit, L2 not consulted");
            return self.record(r1, None);
        }

        let r2 = self.l2.access(addr, AccessKind::Write);
        if r2.outcome.is_hit() {
            debug!("L1 write miss forwarded, L2 write hit");
        } else {
            debug!("write miss at both levels, forwarded to main memory");
        }
        self.record(r1, Some(r2))
    }

    /// Dispatches one access cycle by kind.
    pub fn access(&mut self, addr: u32, kind: AccessKind) -> LevelOutcomes {
        match kind {
            AccessKind::Read => self.read(addr),
            AccessKind::Write => self.write(addr),
        }
    }

    /// The outcome pair of the most recent access cycle.
    pub fn outcomes(&self) -> LevelOutcomes {
        self.outcomes
    }

    /// Resets both levels' outcomes to [`AccessOutcome::NoAction`].
    ///
    /// Called by the driver between access cycles. Store contents are
    /// untouched.
    pub fn reset_outcomes(&mut self) {
        self.outcomes = LevelOutcomes::default();
    }

    /// The L1 level.
    pub fn l1(&self) -> &CacheLevel {
        &self.l1
    }

    /// The L2 level.
    pub fn l2(&self) -> &CacheLevel {
        &self.l2
    }

    /// Records and returns the outcome pair for the current cycle.
    fn record(&mut self, r1: AccessResult, r2: Option<AccessResult>) -> LevelOutcomes {
        self.outcomes = LevelOutcomes {
            l1: r1.outcome,
            l2: r2.map_or(AccessOutcome::NoAction, |r| r.outcome),
        };
        self.outcomes
    }
}
