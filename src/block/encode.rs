//! Token encoder and token byte costs.
//!
//! [`encode_token`] serialises one token (control byte, literal-length
//! extension, literals, 16-bit offset field, match-length extension) in the
//! layout shared by every output format.  Only the offset field differs
//! between formats, selected by [`OffsetField`].
//!
//! [`match_cost`] and [`length_extra_bytes`] give the exact byte count the
//! encoder will produce; the optimal parser prices its choices with them.

use super::types::{Token, LASTLITERALS, ML_BITS, ML_MASK, RUN_MASK};
use crate::hc::{Match, MAX_DISTANCE, MINMATCH};

/// How the 2-byte offset field of a token is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetField {
    /// Little-endian offset after the literals; a token without a match has
    /// no offset field at all.
    Lz4,
    /// Little-endian two's-complement negation of the offset; a token without
    /// a match carries `0x0000`, marking it literal-only.
    NegatedEndMark,
}

// ─────────────────────────────────────────────────────────────────────────────
// Costs
// ─────────────────────────────────────────────────────────────────────────────

/// Extension bytes needed for a nibble-coded length `value`.
#[inline]
pub fn length_extra_bytes(value: usize) -> usize {
    if value >= RUN_MASK as usize {
        1 + (value - RUN_MASK as usize) / 255
    } else {
        0
    }
}

/// Bytes needed for a match of `length`: control byte, offset, and the
/// match-length extension.  Literals preceding the match share the control
/// byte and are priced separately.
#[inline]
pub fn match_cost(length: usize) -> usize {
    debug_assert!(length >= MINMATCH);
    1 + 2 + length_extra_bytes(length - MINMATCH)
}

/// Exact encoded size of `tokens` in the standard layout.
pub fn encoded_size(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .map(|t| {
            let literals = t.literals as usize;
            1 + length_extra_bytes(literals)
                + literals
                + t.matched.map_or(0, |m| 2 + length_extra_bytes(m.length as usize - MINMATCH))
        })
        .sum()
}

// ─────────────────────────────────────────────────────────────────────────────
// Encoder
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
fn push_length_extension(out: &mut Vec<u8>, mut remaining: usize) {
    while remaining >= 255 {
        out.push(255);
        remaining -= 255;
    }
    out.push(remaining as u8);
}

/// Append one token to `out`.
pub fn encode_token(out: &mut Vec<u8>, literals: &[u8], matched: Option<Match>, field: OffsetField) {
    let literal_length = literals.len();

    // ── Literal-length nibble ─────────────────────────────────────────────
    let mut token = if literal_length >= RUN_MASK as usize {
        (RUN_MASK << ML_BITS) as u8
    } else {
        (literal_length << ML_BITS) as u8
    };

    // ── Match-length nibble ───────────────────────────────────────────────
    let ml_remaining = matched.map(|m| {
        debug_assert!(m.length as usize >= MINMATCH);
        m.length as usize - MINMATCH
    });
    if let Some(ml) = ml_remaining {
        token |= ml.min(ML_MASK as usize) as u8;
    }
    out.push(token);

    if literal_length >= RUN_MASK as usize {
        push_length_extension(out, literal_length - RUN_MASK as usize);
    }
    out.extend_from_slice(literals);

    // ── Offset field ──────────────────────────────────────────────────────
    match (matched, field) {
        (Some(m), OffsetField::Lz4) => {
            debug_assert!(m.offset >= 1 && m.offset as u64 <= MAX_DISTANCE);
            out.extend_from_slice(&m.offset.to_le_bytes());
        }
        (Some(m), OffsetField::NegatedEndMark) => {
            debug_assert!(m.offset >= 1);
            out.extend_from_slice(&m.offset.wrapping_neg().to_le_bytes());
        }
        (None, OffsetField::Lz4) => {}
        (None, OffsetField::NegatedEndMark) => out.extend_from_slice(&[0, 0]),
    }

    // ── Match-length extension ────────────────────────────────────────────
    if let Some(ml) = ml_remaining {
        if ml >= ML_MASK as usize {
            push_length_extension(out, ml - ML_MASK as usize);
        }
    }
}

/// Append a whole block of `tokens` covering `block` in the standard layout.
///
/// The token sequence must cover the block exactly and end with a token that
/// carries no match.
pub fn encode_block(out: &mut Vec<u8>, block: &[u8], tokens: &[Token]) {
    debug_assert_eq!(tokens.iter().map(Token::span).sum::<usize>(), block.len());
    debug_assert!(tokens.last().map_or(true, |t| t.matched.is_none()));

    let mut cursor = 0usize;
    for (i, t) in tokens.iter().enumerate() {
        let literals = &block[cursor..cursor + t.literals as usize];
        cursor += t.literals as usize;
        if let Some(m) = t.matched {
            debug_assert!(
                i + 1 < tokens.len() && cursor + m.length as usize + LASTLITERALS <= block.len(),
                "match crosses the final-literals margin"
            );
            cursor += m.length as usize;
        }
        encode_token(out, literals, t.matched, OffsetField::Lz4);
    }
}
