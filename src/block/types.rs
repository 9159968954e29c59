//! Token shape and the LZ4 block-format constants.

use crate::hc::Match;

// ─────────────────────────────────────────────────────────────────────────────
// Control-byte layout
// ─────────────────────────────────────────────────────────────────────────────

pub const ML_BITS: u32 = 4;
pub const ML_MASK: u32 = (1u32 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: u32 = (1u32 << RUN_BITS) - 1;

// ─────────────────────────────────────────────────────────────────────────────
// End-of-block margins
// ─────────────────────────────────────────────────────────────────────────────

/// The last bytes of every block are literals.
pub const LASTLITERALS: usize = 5;

/// The last match must start at least this many bytes before the block end.
pub const MFLIMIT: usize = 12;

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// One encoded unit: a run of `literals` bytes copied verbatim, then an
/// optional back-reference.  The literal bytes themselves are not stored;
/// they are the next `literals` bytes of the block being serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub literals: u32,
    pub matched: Option<Match>,
}

impl Token {
    #[inline]
    pub fn literals(literals: u32) -> Self {
        Token { literals, matched: None }
    }

    #[inline]
    pub fn with_match(literals: u32, matched: Match) -> Self {
        Token {
            literals,
            matched: Some(matched),
        }
    }

    /// Bytes of the block this token covers.
    #[inline]
    pub fn span(&self) -> usize {
        self.literals as usize + self.matched.map_or(0, |m| m.length as usize)
    }
}
