//! Game Boy stream writer.
//!
//! A headerless, unframed token stream aimed at a tiny 8-bit decoder:
//!
//! ```text
//! token   := control  [literal-length ext]  literals  offset16  [match-length ext]
//! control := (literal length nibble << 4) | match length nibble   (as in LZ4)
//! offset16 = little-endian 0x10000 - offset   (so the decoder adds it to its pointer)
//! ```
//!
//! A token with offset field `0x0000` carries literals only.  Its match
//! nibble says what follows: `0` ends the stream, `1` ([`LITERAL_FLUSH`])
//! means more tokens follow.
//!
//! There is no per-block framing: literals left at the end of a block are held
//! back and open the first token of the next block.  When more than
//! [`MAX_CARRIED_LITERALS`] are pending as the next block starts, they are
//! written first as a literal-only token, so the buffered literals never
//! exceed one block plus that short carry.  Not readable by standard LZ4 decoders.

use super::types::{BlockEncoding, FrameWriter};
use crate::block::{encode_token, OffsetField, Token};
use crate::config::BLOCK_SIZE;

/// Match nibble of a literal-only token that does not end the stream.
pub const LITERAL_FLUSH: u8 = 0x01;

/// Literals carried into the next block without a flush token.
pub const MAX_CARRIED_LITERALS: usize = 64;

#[derive(Debug, Default)]
pub struct GameBoyWriter {
    /// Literals not yet followed by a match.
    pending: Vec<u8>,
}

impl GameBoyWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the pending literals as a non-terminal literal-only token.
    fn flush_pending(&mut self, out: &mut Vec<u8>) {
        let control = out.len();
        encode_token(out, &self.pending, None, OffsetField::NegatedEndMark);
        out[control] |= LITERAL_FLUSH;
        self.pending.clear();
    }
}

impl FrameWriter for GameBoyWriter {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn begin(&mut self, _out: &mut Vec<u8>) {
        self.pending.clear();
    }

    fn block(&mut self, block: &[u8], tokens: &[Token], out: &mut Vec<u8>) -> BlockEncoding {
        if self.pending.len() > MAX_CARRIED_LITERALS {
            self.flush_pending(out);
        }
        let mut cursor = 0usize;
        for t in tokens {
            let literals = t.literals as usize;
            self.pending.extend_from_slice(&block[cursor..cursor + literals]);
            cursor += literals;
            if let Some(m) = t.matched {
                encode_token(out, &self.pending, Some(m), OffsetField::NegatedEndMark);
                self.pending.clear();
                cursor += m.length as usize;
            }
        }
        debug_assert_eq!(cursor, block.len());
        BlockEncoding::Streamed
    }

    fn end(&mut self, out: &mut Vec<u8>) {
        encode_token(out, &self.pending, None, OffsetField::NegatedEndMark);
        self.pending.clear();
    }
}
