//! Modern LZ4 frame writer.
//!
//! Linked blocks of up to 4 MiB, no checksums.  A block whose token stream is
//! not smaller than its raw bytes is stored instead.

use super::header::{push_le32, write_frame_header};
use super::types::{BlockEncoding, FrameWriter, BLOCK_UNCOMPRESSED_FLAG};
use crate::block::{encode_block, Token};
use crate::config::BLOCK_SIZE;

#[derive(Debug, Default)]
pub struct ModernWriter {
    /// Reused encoding buffer; the size prefix is only known afterwards.
    scratch: Vec<u8>,
}

impl ModernWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameWriter for ModernWriter {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn begin(&mut self, out: &mut Vec<u8>) {
        write_frame_header(out);
    }

    fn block(&mut self, block: &[u8], tokens: &[Token], out: &mut Vec<u8>) -> BlockEncoding {
        debug_assert!(!block.is_empty() && block.len() <= BLOCK_SIZE);
        self.scratch.clear();
        encode_block(&mut self.scratch, block, tokens);

        if self.scratch.len() < block.len() {
            push_le32(out, self.scratch.len() as u32);
            out.extend_from_slice(&self.scratch);
            BlockEncoding::Compressed
        } else {
            push_le32(out, block.len() as u32 | BLOCK_UNCOMPRESSED_FLAG);
            out.extend_from_slice(block);
            BlockEncoding::Stored
        }
    }

    fn end(&mut self, out: &mut Vec<u8>) {
        push_le32(out, 0);
    }
}
