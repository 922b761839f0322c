//! Memory Access Classification.
//!
//! This module defines the two vocabularies of the simulator's result model:
//! 1. **Access Kinds:** Whether a trace record is a read or a write.
//! 2. **Access Outcomes:** The per-level hit/miss classification of one
//!    access cycle, including the `NoAction` state for a level that was
//!    never consulted.

use std::fmt;

/// Kind of memory access operation.
///
/// Distinguishes read accesses (loads) from write accesses (stores). The
/// hierarchy applies different protocols to each: reads allocate on miss,
/// writes are write-no-allocate at every level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKind {
    /// Data read access (trace token `R`).
    Read,
    /// Data write access (trace token `W`).
    Write,
}

/// Outcome of one access cycle at one cache level.
///
/// Transient state: recomputed on every access, read back by the driver
/// immediately after, then reset to [`AccessOutcome::NoAction`] before the
/// next cycle. The discriminants match the simulator's output encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AccessOutcome {
    /// The level was not consulted during this cycle.
    #[default]
    NoAction = 0,
    /// Read access found a valid matching line.
    ReadHit = 1,
    /// Read access found no valid matching line.
    ReadMiss = 2,
    /// Write access found a valid matching line.
    WriteHit = 3,
    /// Write access found no valid matching line.
    WriteMiss = 4,
}

impl AccessOutcome {
    /// Returns the pessimistic (miss) outcome for an access kind.
    ///
    /// Classification starts from this value and is upgraded to the
    /// corresponding hit variant when the lookup succeeds.
    pub fn miss_for(kind: AccessKind) -> Self {
        match kind {
            AccessKind::Read => Self::ReadMiss,
            AccessKind::Write => Self::WriteMiss,
        }
    }

    /// Returns the hit outcome for an access kind.
    pub fn hit_for(kind: AccessKind) -> Self {
        match kind {
            AccessKind::Read => Self::ReadHit,
            AccessKind::Write => Self::WriteHit,
        }
    }

    /// Returns true for the two hit variants.
    pub fn is_hit(self) -> bool {
        matches!(self, Self::ReadHit | Self::WriteHit)
    }

    /// Returns the numeric output encoding (NA=0, RH=1, RM=2, WH=3, WM=4).
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
