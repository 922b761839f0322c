//! Memory Access Trace Parsing.
//!
//! This module turns a text trace source into a lazy sequence of access
//! records. Each line carries an access type token (`R` or `W`) and a
//! hexadecimal 32-bit address. An unrecognized access type is a fatal error
//! for the whole run; it is never skipped or defaulted. Blank lines are
//! skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::common::{AccessKind, SimError, TraceError};

/// One parsed trace record: an access kind and a 32-bit address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Read or write.
    pub kind: AccessKind,
    /// The accessed 32-bit physical address.
    pub addr: u32,
}

impl TraceRecord {
    /// Parses one trace line.
    ///
    /// `line_no` is the 1-based line number used in error reports. Returns
    /// `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns a [`TraceError`] if the access type token is neither `R` nor
    /// `W`, the address field is missing, or the address is not valid
    /// 32-bit hexadecimal (an optional `0x` prefix is accepted).
    pub fn parse(line: &str, line_no: u64) -> Result<Option<Self>, TraceError> {
        let mut fields = line.split_whitespace();
        let Some(kind_token) = fields.next() else {
            return Ok(None);
        };

        let kind = match kind_token {
            "R" => AccessKind::Read,
            "W" => AccessKind::Write,
            other => {
                return Err(TraceError::UnsupportedAccessType {
                    line: line_no,
                    token: other.to_string(),
                });
            }
        };

        let addr_token = fields
            .next()
            .ok_or(TraceError::MissingAddress { line: line_no })?;
        let digits = addr_token
            .strip_prefix("0x")
            .or_else(|| addr_token.strip_prefix("0X"))
            .unwrap_or(addr_token);
        let addr =
            u32::from_str_radix(digits, 16).map_err(|source| TraceError::BadAddress {
                line: line_no,
                token: addr_token.to_string(),
                source,
            })?;

        Ok(Some(Self { kind, addr }))
    }
}

/// Lazy trace reader over any buffered source.
///
/// Yields one [`TraceRecord`] per non-blank line, in input order, stopping
/// at the first error. Restartable only by re-reading the source from the
/// start.
#[derive(Debug)]
pub struct TraceReader<R> {
    lines: Lines<R>,
    line_no: u64,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered source.
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            line_no: 0,
        }
    }
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file for lazy reading.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, SimError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(SimError::Io(e))),
            };
            self.line_no += 1;

            match TraceRecord::parse(&line, self.line_no) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {} // blank line
                Err(e) => return Some(Err(SimError::Trace(e))),
            }
        }
    }
}
