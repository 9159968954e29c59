//! Hash-chain types, window constants, and the 4-byte prefix hash.
//!
//! Shared by [`super::window`], [`super::chain`] and [`super::search`]:
//!   - [`Match`]: one back-reference candidate (length, offset)
//!   - [`MINMATCH`] / [`MAX_DISTANCE`]: the LZ4 match-shape limits
//!   - [`WINDOW_SIZE`] / [`WINDOW_MASK`]: ring size of the per-position link arrays
//!   - [`HASH_LOG`] / [`hash4`]: bucket addressing for 4-byte prefixes

// ─────────────────────────────────────────────────────────────────────────────
// Match shape
// ─────────────────────────────────────────────────────────────────────────────

/// Shortest match LZ4 can encode.
pub const MINMATCH: usize = 4;

/// Largest back-reference distance representable by the 16-bit offset field.
pub const MAX_DISTANCE: u64 = 65_535;

// ─────────────────────────────────────────────────────────────────────────────
// Window / table sizing
// ─────────────────────────────────────────────────────────────────────────────

pub const WINDOW_LOG: u32 = 16;
/// History kept behind the current block, and the length of each link ring.
pub const WINDOW_SIZE: usize = 1 << WINDOW_LOG; // 65536
pub const WINDOW_MASK: usize = WINDOW_SIZE - 1;

/// Hash buckets: 2^20 heads, so collisions are rare and the exact-prefix
/// link of a new position is usually found in one step.
pub const HASH_LOG: u32 = 20;
pub const HASH_SIZE: usize = 1 << HASH_LOG;

/// Sentinel stored in an empty hash bucket.
pub const NO_POSITION: u64 = u64::MAX;

// ─────────────────────────────────────────────────────────────────────────────
// Match
// ─────────────────────────────────────────────────────────────────────────────

/// A back-reference: copy `length` bytes starting `offset` bytes before the
/// current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub length: u32,
    pub offset: u16,
}

impl Match {
    #[inline]
    pub fn new(length: u32, offset: u16) -> Self {
        debug_assert!(length as usize >= MINMATCH);
        debug_assert!(offset >= 1);
        Match { length, offset }
    }

    /// The same match, `n` bytes shorter (used when a long match continues
    /// at the next position).
    #[inline]
    pub fn shortened(self, n: u32) -> Self {
        Match {
            length: self.length - n,
            offset: self.offset,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hash
// ─────────────────────────────────────────────────────────────────────────────

/// Knuth multiplicative hash of a little-endian 4-byte prefix, reduced to
/// [`HASH_LOG`] bits.
#[inline(always)]
pub fn hash4(sequence: u32) -> usize {
    (sequence.wrapping_mul(2_654_435_761u32) >> (32 - HASH_LOG)) as usize
}
