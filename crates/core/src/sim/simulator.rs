//! Simulator: drives the cache hierarchy from a trace.
//!
//! The driver owns the hierarchy and the statistics tally side-by-side and
//! runs one access cycle per trace record: dispatch the access, read the
//! per-level outcomes back out, emit one output line, then reset the
//! outcomes before the next cycle.

use std::io::Write;

use crate::cache::{CacheHierarchy, LevelOutcomes};
use crate::common::{ConfigError, SimError};
use crate::config::HierarchyConfig;
use crate::sim::trace::TraceRecord;
use crate::stats::SimStats;

/// Trace-driven simulation driver.
///
/// # Examples
///
/// ```
/// use memsim_core::config::HierarchyConfig;
/// use memsim_core::sim::Simulator;
/// use memsim_core::sim::trace::TraceReader;
///
/// let trace = "R 00000000\nR 00000000\n";
/// let mut sim = Simulator::new(&HierarchyConfig::default()).unwrap();
/// let mut out = Vec::new();
///
/// let n = sim.run(TraceReader::new(trace.as_bytes()), &mut out).unwrap();
/// assert_eq!(n, 2);
/// assert_eq!(String::from_utf8(out).unwrap(), "2 2\n1 0\n");
/// ```
#[derive(Debug)]
pub struct Simulator {
    hierarchy: CacheHierarchy,
    /// Running tallies; read them after (or between) runs.
    pub stats: SimStats,
}

impl Simulator {
    /// Builds the hierarchy from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed geometry; nothing is
    /// simulated on failure.
    pub fn new(config: &HierarchyConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            hierarchy: CacheHierarchy::new(config)?,
            stats: SimStats::new(),
        })
    }

    /// Runs one access cycle and returns its outcome pair.
    ///
    /// The outcomes are recorded into [`Simulator::stats`] and then reset on
    /// the hierarchy, leaving it neutral for the next cycle.
    pub fn step(&mut self, record: TraceRecord) -> LevelOutcomes {
        let outcomes = self.hierarchy.access(record.addr, record.kind);
        self.stats.record(outcomes);
        self.hierarchy.reset_outcomes();
        outcomes
    }

    /// Drives the hierarchy with every record of a trace, writing one
    /// output line `"<L1> <L2>"` per record in input order.
    ///
    /// Returns the number of records processed.
    ///
    /// # Errors
    ///
    /// Returns the first trace or I/O error encountered; processing stops
    /// there, matching the fatal-error contract for malformed records.
    pub fn run<I, W>(&mut self, records: I, out: &mut W) -> Result<u64, SimError>
    where
        I: IntoIterator<Item = Result<TraceRecord, SimError>>,
        W: Write,
    {
        let mut processed = 0;
        for record in records {
            let outcomes = self.step(record?);
            writeln!(out, "{} {}", outcomes.l1, outcomes.l2)?;
            processed += 1;
        }
        Ok(processed)
    }

    /// The driven hierarchy, for inspection.
    pub fn hierarchy(&self) -> &CacheHierarchy {
        &self.hierarchy
    }
}
