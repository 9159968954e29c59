//! Thin wrapper around the `xxhash-rust` crate.
//!
//! The compressor never writes content or block checksums; XXH32 is only
//! needed for the one-byte frame-descriptor checksum of the modern format.

/// One-shot XXH32 hash.
///
/// # Parity vectors
/// * `xxh32_oneshot(b"", 0)` == `0x02CC5D05`
#[inline]
pub fn xxh32_oneshot(data: &[u8], seed: u32) -> u32 {
    xxhash_rust::xxh32::xxh32(data, seed)
}
