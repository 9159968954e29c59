//! Hash-chain index over the window.
//!
//! Every position whose 4-byte prefix is visible is registered once, in
//! increasing order.  Two link rings of 16-bit backward distances are kept,
//! one slot per position modulo [`WINDOW_SIZE`]:
//!
//! - `prev_hash` : previous position in the same hash bucket;
//! - `prev_exact`: previous position whose first four bytes are identical.
//!
//! Candidate enumeration walks `prev_exact` only, so every candidate is a
//! genuine 4-byte match.  A link of `0` terminates a chain; distances above
//! [`MAX_DISTANCE`] are never stored, so old positions drop out on their own.
//!
//! Finding the exact link walks `prev_hash` past colliding prefixes.  That
//! walk examines at most [`MAX_COLLISION_WALK`] positions; when it gives up,
//! the new position starts a fresh exact chain.

use super::types::{hash4, HASH_SIZE, MAX_DISTANCE, NO_POSITION, WINDOW_MASK, WINDOW_SIZE};
use super::window::Window;

/// Bucket entries examined while looking for the previous exact prefix.
pub const MAX_COLLISION_WALK: usize = 32;

pub struct HashChain {
    /// Most recent position per hash bucket.
    head: Vec<u64>,
    prev_hash: Vec<u16>,
    prev_exact: Vec<u16>,
    /// First position not yet registered.
    next_to_update: u64,
}

impl Default for HashChain {
    fn default() -> Self {
        Self::new()
    }
}

#[inline(always)]
fn link(from: u64, to: u64) -> u16 {
    if to == NO_POSITION || from - to > MAX_DISTANCE {
        0
    } else {
        (from - to) as u16
    }
}

impl HashChain {
    pub fn new() -> Self {
        HashChain {
            head: vec![NO_POSITION; HASH_SIZE],
            prev_hash: vec![0; WINDOW_SIZE],
            prev_exact: vec![0; WINDOW_SIZE],
            next_to_update: 0,
        }
    }

    /// Forget every registered position; registration resumes at `start`.
    pub fn reset(&mut self, start: u64) {
        self.head.fill(NO_POSITION);
        self.next_to_update = start;
    }

    #[inline]
    pub fn next_to_update(&self) -> u64 {
        self.next_to_update
    }

    /// Register the prefix at `pos`.  Returns `false` (and registers nothing)
    /// when fewer than four bytes are visible at `pos`.
    ///
    /// Positions must be registered in increasing order.
    pub fn insert(&mut self, window: &Window, pos: u64) -> bool {
        debug_assert!(pos >= self.next_to_update);
        let Some(prefix) = window.prefix(pos) else {
            return false;
        };

        let h = hash4(prefix);
        let last = self.head[h];
        let slot = pos as usize & WINDOW_MASK;
        self.prev_hash[slot] = link(pos, last);

        // Nearest older position with the same four bytes, skipping collisions.
        let mut exact = 0u16;
        let mut candidate = last;
        let mut budget = MAX_COLLISION_WALK;
        while budget > 0
            && candidate != NO_POSITION
            && pos - candidate <= MAX_DISTANCE
            && candidate >= window.base()
        {
            if window.prefix(candidate) == Some(prefix) {
                exact = (pos - candidate) as u16;
                break;
            }
            budget -= 1;
            let step = self.prev_hash[candidate as usize & WINDOW_MASK];
            if step == 0 {
                break;
            }
            candidate -= step as u64;
        }
        self.prev_exact[slot] = exact;

        self.head[h] = pos;
        self.next_to_update = pos + 1;
        true
    }

    /// Register every position in `[next_to_update, target)` that has four
    /// visible bytes; stops early at the first one that does not.
    pub fn insert_up_to(&mut self, window: &Window, target: u64) {
        while self.next_to_update < target {
            let pos = self.next_to_update;
            if !self.insert(window, pos) {
                break;
            }
        }
    }

    /// Prior positions sharing the 4-byte prefix at `pos`, newest first, at
    /// most `limit` of them, none further back than [`MAX_DISTANCE`].
    ///
    /// `pos` must already be registered; otherwise the sequence is empty.
    pub fn candidates(&self, pos: u64, limit: u16) -> Candidates<'_> {
        let remaining = if pos < self.next_to_update { limit } else { 0 };
        Candidates {
            links: &self.prev_exact,
            pos,
            current: pos,
            remaining,
        }
    }
}

/// Lazy newest-first walk along the exact-prefix chain.
pub struct Candidates<'a> {
    links: &'a [u16],
    pos: u64,
    current: u64,
    remaining: u16,
}

impl Iterator for Candidates<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let step = self.links[self.current as usize & WINDOW_MASK];
        if step == 0 {
            self.remaining = 0;
            return None;
        }
        let next = self.current - step as u64;
        if self.pos - next > MAX_DISTANCE {
            self.remaining = 0;
            return None;
        }
        self.current = next;
        self.remaining -= 1;
        Some(next)
    }
}
