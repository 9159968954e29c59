//! Optimal parse: backward cost propagation over per-position matches.
//!
//! 1. [`collect_matches`] walks the block forward, registering every position
//!    and recording the longest match found there.
//! 2. [`choose`] walks it backward.  `cost[i]` is the number of bytes needed
//!    to encode `block[i..]`; for each position the single-literal option and
//!    every length of the recorded match are priced against the already final
//!    suffix costs, and the cheapest one is kept (ties go to the match, then
//!    to the longer length).
//! 3. [`materialize`] follows the kept choices from the block start.
//!
//! `cost[end] = 0`; the control byte of the final literal-only token is a
//! constant and is left out.

use super::Margins;
use crate::block::{length_extra_bytes, match_cost, Token};
use crate::hc::{longest_match, HashChain, Match, Window, MINMATCH};

/// A match at least this long continues at the next position, one byte
/// shorter and at the same offset, without walking the chain again.
const LONG_MATCH: u32 = 64;

/// Every length up to this one is priced individually (all lengths needing at
/// most one length-extension byte); a longer match is priced at these lengths
/// and at its full length only.
const MAX_TRUNCATED_LENGTH: usize = MINMATCH + 15 + 254;

pub(super) fn collect_matches(
    window: &Window,
    chain: &mut HashChain,
    start: u64,
    margins: Margins,
    max_chain: u16,
    lazy: bool,
    matches: &mut Vec<Option<Match>>,
) {
    let n = (margins.end - start) as usize;
    matches.clear();
    matches.resize(n, None);

    let mut previous: Option<Match> = None;
    // Lazy search: after a match at i, search i + 1 and skip to i + length.
    let mut lazy_follow = usize::MAX;
    let mut skip_until = 0usize;

    for (i, slot) in matches.iter_mut().enumerate() {
        let pos = start + i as u64;
        if !margins.may_start_match(pos) {
            break;
        }
        chain.insert_up_to(window, pos + 1);

        if lazy && i < skip_until && i != lazy_follow {
            previous = None;
            continue;
        }

        let found = match previous {
            Some(m) if m.length >= LONG_MATCH => Some(m.shortened(1)),
            _ => longest_match(window, chain, pos, margins.match_limit, max_chain),
        };
        *slot = found;
        previous = found;

        if lazy && i >= skip_until {
            if let Some(m) = found {
                lazy_follow = i + 1;
                skip_until = i + m.length as usize;
            }
        }
    }

    chain.insert_up_to(window, margins.end);
}

pub(super) fn choose(matches: &mut [Option<Match>], cost: &mut Vec<u32>) {
    let n = matches.len();
    cost.clear();
    cost.resize(n + 1, 0);

    // Length of the literal run starting at i + 1 on the chosen path.
    let mut run = 0usize;

    for i in (0..n).rev() {
        let literal_run = run + 1;
        let literal_extra = length_extra_bytes(literal_run) - length_extra_bytes(run);
        let mut best = cost[i + 1] + 1 + literal_extra as u32;
        let mut choice: Option<Match> = None;

        if let Some(m) = matches[i] {
            let longest = m.length as usize;
            debug_assert!(i + longest <= n);
            let exhaustive = longest.min(MAX_TRUNCATED_LENGTH);
            let full = (longest > exhaustive).then_some(longest);
            for length in (MINMATCH..=exhaustive).chain(full) {
                let total = cost[i + length] + match_cost(length) as u32;
                if total <= best {
                    best = total;
                    choice = Some(Match::new(length as u32, m.offset));
                }
            }
        }

        cost[i] = best;
        matches[i] = choice;
        run = if choice.is_some() { 0 } else { literal_run };
    }
}

pub(super) fn materialize(matches: &[Option<Match>], tokens: &mut Vec<Token>) {
    let n = matches.len();
    let mut anchor = 0usize;
    let mut i = 0usize;
    while i < n {
        match matches[i] {
            Some(m) => {
                tokens.push(Token::with_match((i - anchor) as u32, m));
                i += m.length as usize;
                anchor = i;
            }
            None => i += 1,
        }
    }
    tokens.push(Token::literals((n - anchor) as u32));
}
