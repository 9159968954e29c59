//! Legacy LZ4 writer.
//!
//! A legacy archive is the 4-byte magic `0x184C2102` followed by blocks of up
//! to 8 MiB, each a 4-byte LE compressed size and the token stream.  There is
//! no descriptor, no stored-block flag and no end mark: decoders stop at end
//! of input.  Blocks are decoded independently, so the driver resets the
//! window between blocks.

use super::header::push_le32;
use super::types::{BlockEncoding, FrameWriter, LEGACY_MAGIC_NUMBER};
use crate::block::{encode_block, Token};
use crate::config::LEGACY_BLOCK_SIZE;

#[derive(Debug, Default)]
pub struct LegacyWriter {
    scratch: Vec<u8>,
}

impl LegacyWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameWriter for LegacyWriter {
    fn block_size(&self) -> usize {
        LEGACY_BLOCK_SIZE
    }

    fn independent_blocks(&self) -> bool {
        true
    }

    fn begin(&mut self, out: &mut Vec<u8>) {
        push_le32(out, LEGACY_MAGIC_NUMBER);
    }

    fn block(&mut self, block: &[u8], tokens: &[Token], out: &mut Vec<u8>) -> BlockEncoding {
        debug_assert!(block.len() <= LEGACY_BLOCK_SIZE);
        self.scratch.clear();
        encode_block(&mut self.scratch, block, tokens);
        push_le32(out, self.scratch.len() as u32);
        out.extend_from_slice(&self.scratch);
        BlockEncoding::Compressed
    }

    fn end(&mut self, _out: &mut Vec<u8>) {}
}
