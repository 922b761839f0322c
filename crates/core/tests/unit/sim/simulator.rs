//! End-to-End Driver Unit Tests.
//!
//! Runs whole traces through the simulator and compares the emitted
//! `"<L1> <L2>"` lines against the expected outcome encoding (NA=0, RH=1,
//! RM=2, WH=3, WM=4). Covers the in-memory path and the file-backed path
//! used by the CLI.

use std::io::Write;

use memsim_core::config::HierarchyConfig;
use memsim_core::sim::trace::{TraceReader, TraceRecord};
use memsim_core::sim::Simulator;
use memsim_core::SimError;
use pretty_assertions::assert_eq;

/// Runs a trace string against the default reference config
/// (`L1 16 1 1 / L2 16 1 8`) and returns the output text.
fn run_trace(trace: &str) -> (Simulator, String) {
    let mut sim = Simulator::new(&HierarchyConfig::default()).unwrap();
    let mut out = Vec::new();
    let n = sim
        .run(TraceReader::new(trace.as_bytes()), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(n as usize, text.lines().count());
    (sim, text)
}

/// Two cold reads to different sets: both double-miss.
#[test]
fn cold_reads_different_sets() {
    let (_, out) = run_trace("R 00000000\nR 00000020\n");
    assert_eq!(out, "2 2\n2 2\n");
}

/// Re-reading the same address: double miss, then L1 hit with L2 idle.
#[test]
fn reread_hits_l1_only() {
    let (_, out) = run_trace("R 00000000\nR 00000000\n");
    assert_eq!(out, "2 2\n1 0\n");
}

/// Writes never allocate: the same write double-misses forever.
#[test]
fn repeated_write_misses() {
    let (_, out) = run_trace("W 00000000\nW 00000000\nR 00000000\n");
    assert_eq!(out, "4 4\n4 4\n2 2\n");
}

/// A mixed trace exercising every outcome code except NA-at-L1.
#[test]
fn mixed_trace_outcomes() {
    let trace = "\
R 00000000
W 00000000
R 00000400
W 00000000
R 00000000
";
    // R 0x0      → 2 2 (cold)
    // W 0x0      → 3 0 (L1 write hit)
    // R 0x400    → 2 2 (cold; evicts 0x0 from direct-mapped L1 set 0)
    // W 0x0      → 4 3 (L1 miss, L2 write hit, no refill)
    // R 0x0      → 2 1 (L1 miss, L2 read hit, refills L1)
    let (sim, out) = run_trace(trace);
    assert_eq!(out, "2 2\n3 0\n2 2\n4 3\n2 1\n");

    assert_eq!(sim.stats.accesses, 5);
    assert_eq!(sim.stats.reads, 3);
    assert_eq!(sim.stats.writes, 2);
    assert_eq!(sim.stats.l1_read_misses, 3);
    assert_eq!(sim.stats.l1_write_hits, 1);
    assert_eq!(sim.stats.l1_write_misses, 1);
    assert_eq!(sim.stats.l2_read_hits, 1);
    assert_eq!(sim.stats.l2_write_hits, 1);
}

/// Outcomes are reset between cycles: stepping a record leaves the
/// hierarchy neutral for the next.
#[test]
fn step_resets_hierarchy_outcomes() {
    let mut sim = Simulator::new(&HierarchyConfig::default()).unwrap();
    let record = TraceRecord::parse("R 00000000", 1).unwrap().unwrap();

    let outcomes = sim.step(record);
    assert_eq!(outcomes.l1.code(), 2);
    assert_eq!(sim.hierarchy().outcomes().l1.code(), 0);
    assert_eq!(sim.hierarchy().outcomes().l2.code(), 0);
}

/// A malformed record aborts the run with the trace error, mid-stream.
#[test]
fn malformed_record_aborts_run() {
    let mut sim = Simulator::new(&HierarchyConfig::default()).unwrap();
    let mut out = Vec::new();
    let err = sim
        .run(TraceReader::new("R 00000000\nX 00000020\n".as_bytes()), &mut out)
        .unwrap_err();
    assert!(matches!(err, SimError::Trace(_)));
    // The first record was still processed and emitted.
    assert_eq!(String::from_utf8(out).unwrap(), "2 2\n");
}

/// The file-backed path the CLI uses: config and trace from disk, one
/// output line per trace line.
#[test]
fn file_backed_run() {
    let dir = tempfile::tempdir().unwrap();

    let config_path = dir.path().join("cacheconfig.txt");
    std::fs::write(&config_path, "L1: 16 1 1\nL2: 16 1 8\n").unwrap();

    let trace_path = dir.path().join("trace.txt");
    let mut trace = std::fs::File::create(&trace_path).unwrap();
    writeln!(trace, "R 00000000").unwrap();
    writeln!(trace, "R 00000000").unwrap();
    writeln!(trace, "W 00000020").unwrap();
    drop(trace);

    let config = HierarchyConfig::from_path(&config_path).unwrap();
    let mut sim = Simulator::new(&config).unwrap();
    let mut out = Vec::new();
    let n = sim
        .run(TraceReader::open(&trace_path).unwrap(), &mut out)
        .unwrap();

    assert_eq!(n, 3);
    assert_eq!(String::from_utf8(out).unwrap(), "2 2\n1 0\n4 4\n");
}
