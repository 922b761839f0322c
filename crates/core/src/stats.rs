//! Simulation statistics collection and reporting.
//!
//! This module tallies the outcomes of a simulation run:
//! 1. **Access mix:** Total, read, and write access counts.
//! 2. **Cache hierarchy:** Per-level hit and miss counts with derived hit
//!    rates.
//! 3. **Wall clock:** Elapsed host time for the run.
//!
//! Statistics are observability only; nothing in the engine reads them back.

use std::fmt;
use std::time::Instant;

use crate::cache::LevelOutcomes;
use crate::common::AccessOutcome;

/// Running tallies for one simulation.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total accesses processed.
    pub accesses: u64,
    /// Read accesses processed.
    pub reads: u64,
    /// Write accesses processed.
    pub writes: u64,
    /// L1 read hit count.
    pub l1_read_hits: u64,
    /// L1 read miss count.
    pub l1_read_misses: u64,
    /// L1 write hit count.
    pub l1_write_hits: u64,
    /// L1 write miss count.
    pub l1_write_misses: u64,
    /// L2 read hit count.
    pub l2_read_hits: u64,
    /// L2 read miss count.
    pub l2_read_misses: u64,
    /// L2 write hit count.
    pub l2_write_hits: u64,
    /// L2 write miss count.
    pub l2_write_misses: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            accesses: 0,
            reads: 0,
            writes: 0,
            l1_read_hits: 0,
            l1_read_misses: 0,
            l1_write_hits: 0,
            l1_write_misses: 0,
            l2_read_hits: 0,
            l2_read_misses: 0,
            l2_write_hits: 0,
            l2_write_misses: 0,
        }
    }
}

impl SimStats {
    /// Creates a fresh tally with the clock started now.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one access cycle's outcome pair into the tallies.
    pub fn record(&mut self, outcomes: LevelOutcomes) {
        self.accesses += 1;
        match outcomes.l1 {
            AccessOutcome::ReadHit | AccessOutcome::ReadMiss => self.reads += 1,
            AccessOutcome::WriteHit | AccessOutcome::WriteMiss => self.writes += 1,
            AccessOutcome::NoAction => {}
        }
        Self::tally(
            outcomes.l1,
            &mut self.l1_read_hits,
            &mut self.l1_read_misses,
            &mut self.l1_write_hits,
            &mut self.l1_write_misses,
        );
        Self::tally(
            outcomes.l2,
            &mut self.l2_read_hits,
            &mut self.l2_read_misses,
            &mut self.l2_write_hits,
            &mut self.l2_write_misses,
        );
    }

    /// L1 hit rate over all L1 lookups, or 0 when no access was made.
    pub fn l1_hit_rate(&self) -> f64 {
        let hits = self.l1_read_hits + self.l1_write_hits;
        let total = hits + self.l1_read_misses + self.l1_write_misses;
        ratio(hits, total)
    }

    /// L2 hit rate over all L2 lookups (L1 misses), or 0 when L2 was never
    /// consulted.
    pub fn l2_hit_rate(&self) -> f64 {
        let hits = self.l2_read_hits + self.l2_write_hits;
        let total = hits + self.l2_read_misses + self.l2_write_misses;
        ratio(hits, total)
    }

    /// Prints the report to stderr.
    pub fn print(&self) {
        eprintln!("{self}");
    }

    fn tally(
        outcome: AccessOutcome,
        read_hits: &mut u64,
        read_misses: &mut u64,
        write_hits: &mut u64,
        write_misses: &mut u64,
    ) {
        match outcome {
            AccessOutcome::ReadHit => *read_hits += 1,
            AccessOutcome::ReadMiss => *read_misses += 1,
            AccessOutcome::WriteHit => *write_hits += 1,
            AccessOutcome::WriteMiss => *write_misses += 1,
            AccessOutcome::NoAction => {}
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elapsed = self.start_time.elapsed();
        writeln!(f, "=== Simulation Statistics ===")?;
        writeln!(
            f,
            "Accesses: {} ({} reads, {} writes)",
            self.accesses, self.reads, self.writes
        )?;
        writeln!(
            f,
            "L1: {} read hits, {} read misses, {} write hits, {} write misses ({:.2}% hit)",
            self.l1_read_hits,
            self.l1_read_misses,
            self.l1_write_hits,
            self.l1_write_misses,
            self.l1_hit_rate() * 100.0
        )?;
        writeln!(
            f,
            "L2: {} read hits, {} read misses, {} write hits, {} write misses ({:.2}% hit)",
            self.l2_read_hits,
            self.l2_read_misses,
            self.l2_write_hits,
            self.l2_write_misses,
            self.l2_hit_rate() * 100.0
        )?;
        write!(f, "Elapsed: {:.3}s", elapsed.as_secs_f64())
    }
}

/// `num / den` as a float, 0 when the denominator is zero.
#[allow(clippy::cast_precision_loss)]
fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
