//! Modern frame header and the little-endian helpers shared by the writers.

use super::types::{FRAME_BD, FRAME_FLG, FRAME_HEADER_SIZE, LZ4_MAGIC_NUMBER};
use crate::xxhash::xxh32_oneshot;

#[inline]
pub fn push_le32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Header checksum: second byte of XXH32 (seed 0) over the descriptor bytes
/// between the magic number and the checksum itself.
pub fn header_checksum(descriptor: &[u8]) -> u8 {
    let xxh = xxh32_oneshot(descriptor, 0);
    ((xxh >> 8) & 0xFF) as u8
}

/// Append magic, FLG, BD and the header checksum.  Returns the bytes written.
pub fn write_frame_header(out: &mut Vec<u8>) -> usize {
    let start = out.len();
    push_le32(out, LZ4_MAGIC_NUMBER);
    let descriptor = [FRAME_FLG, FRAME_BD];
    out.extend_from_slice(&descriptor);
    out.push(header_checksum(&descriptor));
    debug_assert_eq!(out.len() - start, FRAME_HEADER_SIZE);
    out.len() - start
}
