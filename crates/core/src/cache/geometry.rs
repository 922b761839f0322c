//! Cache Geometry and Address Decoding.
//!
//! This module derives the bit-field layout of a cache level from its
//! configuration and decodes 32-bit addresses against it. It provides:
//! 1. **Geometry Derivation:** Offset/index/tag widths and set/way counts,
//!    validated once at construction.
//! 2. **Address Decoding:** Partitioning an address MSB-first into tag, set
//!    index, and block offset fields.

use crate::common::ConfigError;
use crate::config::CacheConfig;

/// Address width of the simulated machine in bits.
pub const ADDR_BITS: u32 = 32;

/// The three decoded fields of one 32-bit address.
///
/// Produced by [`CacheGeometry::decode`] and threaded explicitly by the
/// hierarchy into fill and back-invalidation calls, so the data flow of one
/// access cycle is visible at the call site rather than hidden in cache
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedAddr {
    /// High-order bits identifying the line within its set.
    pub tag: u32,
    /// Middle bits selecting the set.
    pub set: u32,
    /// Low-order bits selecting the byte within the block; unused by
    /// hit/miss logic.
    pub offset: u32,
}

/// Bit-field layout and dimensions of one cache level.
///
/// Widths are derived once at construction and fixed for the run:
///
/// - `offset_bits = log2(block_bytes)`
/// - `sets = size_kib * 1024 / (block_bytes * ways)`, or 1 when fully
///   associative (`ways == 0` in the config, in which case the store is
///   sized with one way per line)
/// - `index_bits = log2(sets)`
/// - `tag_bits = 32 - index_bits - offset_bits`
///
/// The three widths always sum to exactly 32.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheGeometry {
    /// Number of sets.
    pub sets: usize,
    /// Number of ways per set (store-sizing value; never zero).
    pub ways: usize,
    /// Bits consumed by the block offset field.
    pub offset_bits: u32,
    /// Bits consumed by the set index field.
    pub index_bits: u32,
    /// Bits consumed by the tag field.
    pub tag_bits: u32,
}

impl CacheGeometry {
    /// Derives a geometry from a cache configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the block size or derived set count is
    /// not a non-zero power of two, if the total size does not divide into
    /// whole sets, or if the offset and index fields together exceed the
    /// 32-bit address width. Construction failure is fatal for the run;
    /// nothing is silently truncated.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        if !config.block_bytes.is_power_of_two() {
            return Err(ConfigError::BadBlockSize(config.block_bytes));
        }

        let total_bytes = config.size_kib * 1024;
        let lines = total_bytes / config.block_bytes;
        if lines == 0 {
            return Err(ConfigError::IndivisibleSize {
                size_kib: config.size_kib,
                block_bytes: config.block_bytes,
                ways: config.ways,
            });
        }

        // ways == 0 selects a fully associative cache: a single set spanning
        // every line the capacity holds.
        let (sets, ways) = if config.ways == 0 {
            (1, lines)
        } else {
            if total_bytes % (config.block_bytes * config.ways) != 0 {
                return Err(ConfigError::IndivisibleSize {
                    size_kib: config.size_kib,
                    block_bytes: config.block_bytes,
                    ways: config.ways,
                });
            }
            (lines / config.ways, config.ways)
        };

        if !sets.is_power_of_two() {
            return Err(ConfigError::BadSetCount(sets));
        }

        let offset_bits = config.block_bytes.trailing_zeros();
        let index_bits = sets.trailing_zeros();
        if offset_bits + index_bits > ADDR_BITS {
            return Err(ConfigError::FieldOverflow {
                offset_bits,
                index_bits,
            });
        }
        let tag_bits = ADDR_BITS - index_bits - offset_bits;

        Ok(Self {
            sets,
            ways,
            offset_bits,
            index_bits,
            tag_bits,
        })
    }

    /// Splits an address into its tag, set index, and block offset fields.
    ///
    /// The 32 address bits are partitioned MSB-first into three contiguous
    /// fields of widths `tag_bits`, `index_bits`, `offset_bits`. A fully
    /// associative geometry (`index_bits == 0`) decodes every address to
    /// set 0.
    pub fn decode(&self, addr: u32) -> DecodedAddr {
        let tag_shift = self.index_bits + self.offset_bits;
        DecodedAddr {
            // tag_bits may be zero when index + offset consume the whole
            // address; a full shift on u32 would wrap, so mask instead.
            tag: if tag_shift == ADDR_BITS {
                0
            } else {
                addr >> tag_shift
            },
            set: (addr >> self.offset_bits) & mask(self.index_bits),
            offset: addr & mask(self.offset_bits),
        }
    }
}

/// Low-order bit mask of the given width; `bits` is at most 32.
fn mask(bits: u32) -> u32 {
    if bits == 0 {
        0
    } else {
        u32::MAX >> (ADDR_BITS - bits)
    }
}
