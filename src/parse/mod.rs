//! Block parser: turns one block of the window into a token sequence.
//!
//! The compression level selects the chain-walk limit and the strategy:
//!
//! | Level | Chain limit | Strategy |
//! |-------|-------------|----------|
//! | 0     | 0           | [`Strategy::Store`]: every byte is a literal |
//! | 1–3   | level       | [`Strategy::Greedy`]: take the longest match and jump past it |
//! | 4–6   | level       | [`Strategy::Lazy`]: cost pass over matches found at a match start and the byte after it |
//! | 7–8   | level       | [`Strategy::Optimal`]: cost pass over the longest match of every position |
//! | 9     | 65535       | [`Strategy::Optimal`] |
//!
//! Every strategy honours the block-end margins: no match starts within the
//! last [`MFLIMIT`] bytes and the last [`LASTLITERALS`] bytes are literals.
//!
//! Scratch arrays for the cost pass are owned by [`Parser`] and reused across
//! blocks.

mod greedy;
mod optimal;

use crate::block::{Token, LASTLITERALS, MFLIMIT};
use crate::config::{CLEVEL_MAX, MAX_CHAIN_LENGTH, SHORT_CHAINS_GREEDY, SHORT_CHAINS_LAZY};
use crate::hc::{HashChain, Match, Window};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Store,
    Greedy,
    Lazy,
    Optimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseParams {
    pub strategy: Strategy,
    pub max_chain: u16,
}

impl ParseParams {
    /// Parameters for a compression level; levels above 9 are treated as 9.
    pub fn for_level(level: u8) -> Self {
        let level = level.min(CLEVEL_MAX);
        let (strategy, max_chain) = match level {
            0 => (Strategy::Store, 0),
            l if l <= SHORT_CHAINS_GREEDY => (Strategy::Greedy, l as u16),
            l if l <= SHORT_CHAINS_LAZY => (Strategy::Lazy, l as u16),
            l if l < CLEVEL_MAX => (Strategy::Optimal, l as u16),
            _ => (Strategy::Optimal, MAX_CHAIN_LENGTH),
        };
        ParseParams { strategy, max_chain }
    }
}

/// Absolute positions bounding where matches may start and end in a block.
#[derive(Clone, Copy, Debug)]
struct Margins {
    /// A match may start at `p` only if `p + MFLIMIT <= end`.
    end: u64,
    /// A match must finish at or before this position.
    match_limit: u64,
}

impl Margins {
    fn new(end: u64) -> Self {
        Margins {
            end,
            match_limit: end.saturating_sub(LASTLITERALS as u64),
        }
    }

    #[inline]
    fn may_start_match(&self, pos: u64) -> bool {
        pos + MFLIMIT as u64 <= self.end
    }
}

pub struct Parser {
    params: ParseParams,
    /// Per block-relative position: longest match found, then the chosen match.
    matches: Vec<Option<Match>>,
    /// Per block-relative position: bytes needed to encode the rest of the block.
    cost: Vec<u32>,
}

impl Parser {
    pub fn new(params: ParseParams) -> Self {
        Parser {
            params,
            matches: Vec::new(),
            cost: Vec::new(),
        }
    }

    pub fn for_level(level: u8) -> Self {
        Self::new(ParseParams::for_level(level))
    }

    #[inline]
    pub fn params(&self) -> ParseParams {
        self.params
    }

    /// Parse the window bytes `[start, end)` into `tokens` (cleared first).
    ///
    /// The block must already be appended to `window`; `chain` is brought up
    /// to date as the parser advances and ends registered up to the block end.
    pub fn parse_block(
        &mut self,
        window: &Window,
        chain: &mut HashChain,
        start: u64,
        end: u64,
        tokens: &mut Vec<Token>,
    ) {
        debug_assert!(start <= end && end <= window.end());
        tokens.clear();
        let margins = Margins::new(end);
        let max_chain = self.params.max_chain;

        match self.params.strategy {
            Strategy::Store => tokens.push(Token::literals((end - start) as u32)),
            Strategy::Greedy => {
                greedy::parse(window, chain, start, margins, max_chain, tokens);
            }
            Strategy::Lazy | Strategy::Optimal => {
                let lazy = self.params.strategy == Strategy::Lazy;
                optimal::collect_matches(
                    window,
                    chain,
                    start,
                    margins,
                    max_chain,
                    lazy,
                    &mut self.matches,
                );
                optimal::choose(&mut self.matches, &mut self.cost);
                optimal::materialize(&self.matches, tokens);
            }
        }
    }
}
