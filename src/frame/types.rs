//! Output-format constants and the [`FrameWriter`] strategy trait.
//!
//! | Format   | Opening bytes          | Block framing                         | Closing bytes |
//! |----------|------------------------|---------------------------------------|---------------|
//! | Modern   | magic, FLG, BD, HC     | 4-byte LE size, high bit = stored     | `00 00 00 00` |
//! | Legacy   | magic                  | 4-byte LE size                        | none          |
//! | Game Boy | none                   | none (one continuous token stream)    | offset `0000` |

use crate::block::Token;

// ─────────────────────────────────────────────────────────────────────────────
// Magic numbers and frame descriptor
// ─────────────────────────────────────────────────────────────────────────────

/// Modern LZ4 frame magic number, written little-endian.
pub const LZ4_MAGIC_NUMBER: u32 = 0x184D_2204;

/// Legacy LZ4 magic number, written little-endian.
pub const LEGACY_MAGIC_NUMBER: u32 = 0x184C_2102;

pub const MAGIC_NUMBER_SIZE: usize = 4;

/// FLG: version 01, linked blocks, no checksums, no content size, no dictionary id.
pub const FRAME_FLG: u8 = 1 << 6;

/// BD: maximum block size id 7 (4 MiB).
pub const FRAME_BD: u8 = (crate::config::BLOCK_SIZE_ID & 7) << 4;

/// Size of magic + FLG + BD + header checksum.
pub const FRAME_HEADER_SIZE: usize = MAGIC_NUMBER_SIZE + 3;

/// High bit of a modern block size prefix: block data is stored raw.
pub const BLOCK_UNCOMPRESSED_FLAG: u32 = 0x8000_0000;

// ─────────────────────────────────────────────────────────────────────────────
// Serializer strategy
// ─────────────────────────────────────────────────────────────────────────────

/// How a block ended up on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockEncoding {
    /// Token stream behind a size prefix.
    Compressed,
    /// Raw bytes behind a size prefix with [`BLOCK_UNCOMPRESSED_FLAG`] set.
    Stored,
    /// Tokens appended to a continuous stream; trailing literals may be
    /// held back until the next block or the end of the stream.
    Streamed,
}

/// A wire format: consumes the token sequence of each block and appends the
/// resulting bytes to `out`.
///
/// The driver calls [`begin`](FrameWriter::begin) once, then
/// [`block`](FrameWriter::block) once per block in input order, then
/// [`end`](FrameWriter::end) once.  `tokens` always covers `block` exactly and
/// its final token carries no match.
pub trait FrameWriter {
    /// Maximum number of input bytes per block.
    fn block_size(&self) -> usize;

    /// Blocks are decoded without history: matches must not reach into
    /// earlier blocks or a dictionary.
    fn independent_blocks(&self) -> bool {
        false
    }

    fn begin(&mut self, out: &mut Vec<u8>);

    fn block(&mut self, block: &[u8], tokens: &[Token], out: &mut Vec<u8>) -> BlockEncoding;

    fn end(&mut self, out: &mut Vec<u8>);
}
