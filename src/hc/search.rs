//! Match finder.
//!
//! [`longest_match`] walks the exact-prefix chain of a position, newest
//! first, and extends each candidate byte by byte.  The longest match of at
//! least [`MINMATCH`] bytes wins, ties going to the smallest offset; the walk
//! stops early once no longer match is possible.
//!
//! A `max_chain` of `0` disables matching entirely.

use super::chain::HashChain;
use super::types::{Match, MINMATCH};
use super::window::Window;

/// Longest match at `pos` ending at or before `limit`, if any.
pub fn longest_match(
    window: &Window,
    chain: &HashChain,
    pos: u64,
    limit: u64,
    max_chain: u16,
) -> Option<Match> {
    if limit < pos + MINMATCH as u64 {
        return None;
    }
    let reach = (limit - pos) as usize;
    let mut best: Option<Match> = None;

    for candidate in chain.candidates(pos, max_chain) {
        if candidate < window.base() {
            break;
        }
        let best_len = best.map_or(0, |m| m.length as usize);
        // The byte just past the current best must agree, or this candidate
        // cannot beat it.
        if best_len >= MINMATCH
            && window.byte(candidate + best_len as u64) != window.byte(pos + best_len as u64)
        {
            continue;
        }
        let length = window.common_length(candidate, pos, limit);
        if length > best_len && length >= MINMATCH {
            best = Some(Match::new(length as u32, (pos - candidate) as u16));
            if length == reach {
                break;
            }
        }
    }
    best
}
