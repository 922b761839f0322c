//! Trace Parsing Unit Tests.
//!
//! Verifies record parsing (access type tokens, hex addresses, optional
//! `0x` prefix), blank-line skipping, and the fatal-error contract for
//! unsupported access types.

use memsim_core::common::{AccessKind, SimError, TraceError};
use memsim_core::sim::trace::{TraceReader, TraceRecord};

#[test]
fn parses_read_and_write_records() {
    let r = TraceRecord::parse("R 0000ABCD", 1).unwrap().unwrap();
    assert_eq!(r.kind, AccessKind::Read);
    assert_eq!(r.addr, 0xABCD);

    let w = TraceRecord::parse("W fffF0000", 2).unwrap().unwrap();
    assert_eq!(w.kind, AccessKind::Write);
    assert_eq!(w.addr, 0xFFFF_0000);
}

#[test]
fn accepts_hex_prefix() {
    let r = TraceRecord::parse("R 0x2010", 1).unwrap().unwrap();
    assert_eq!(r.addr, 0x2010);
    let r = TraceRecord::parse("R 0X2010", 1).unwrap().unwrap();
    assert_eq!(r.addr, 0x2010);
}

#[test]
fn blank_line_yields_no_record() {
    assert_eq!(TraceRecord::parse("", 1).unwrap(), None);
    assert_eq!(TraceRecord::parse("   \t ", 1).unwrap(), None);
}

/// Unknown access types abort the run; they are never skipped or defaulted.
#[test]
fn unsupported_access_type_is_fatal() {
    let err = TraceRecord::parse("X 00000000", 7).unwrap_err();
    assert_eq!(
        err,
        TraceError::UnsupportedAccessType {
            line: 7,
            token: "X".to_string(),
        }
    );
}

#[test]
fn missing_address_is_rejected() {
    let err = TraceRecord::parse("R", 3).unwrap_err();
    assert_eq!(err, TraceError::MissingAddress { line: 3 });
}

#[test]
fn bad_hex_address_is_rejected() {
    let err = TraceRecord::parse("W nothex", 4).unwrap_err();
    assert!(matches!(
        err,
        TraceError::BadAddress { line: 4, .. }
    ));
}

/// The reader yields records lazily in input order, counting lines so
/// errors report their position, and stops at the first error.
#[test]
fn reader_yields_records_in_order() {
    let source = "R 00000000\n\nW 00000020\nQ 00000040\nR 00000060\n";
    let mut reader = TraceReader::new(source.as_bytes());

    let first = reader.next().unwrap().unwrap();
    assert_eq!((first.kind, first.addr), (AccessKind::Read, 0x0));

    // The blank line is skipped, not yielded.
    let second = reader.next().unwrap().unwrap();
    assert_eq!((second.kind, second.addr), (AccessKind::Write, 0x20));

    let err = reader.next().unwrap().unwrap_err();
    match err {
        SimError::Trace(TraceError::UnsupportedAccessType { line, token }) => {
            assert_eq!(line, 4);
            assert_eq!(token, "Q");
        }
        other => panic!("expected UnsupportedAccessType, got {other:?}"),
    }
}
