//! Greedy parse: take the longest match at each position and jump past it.

use super::Margins;
use crate::block::Token;
use crate::hc::{longest_match, HashChain, Window};

pub(super) fn parse(
    window: &Window,
    chain: &mut HashChain,
    start: u64,
    margins: Margins,
    max_chain: u16,
    tokens: &mut Vec<Token>,
) {
    let mut anchor = start;
    let mut pos = start;

    while margins.may_start_match(pos) {
        // Positions skipped inside the previous match still get registered.
        chain.insert_up_to(window, pos + 1);
        match longest_match(window, chain, pos, margins.match_limit, max_chain) {
            Some(m) => {
                tokens.push(Token::with_match((pos - anchor) as u32, m));
                pos += m.length as u64;
                anchor = pos;
            }
            None => pos += 1,
        }
    }

    chain.insert_up_to(window, margins.end);
    tokens.push(Token::literals((margins.end - anchor) as u32));
}
