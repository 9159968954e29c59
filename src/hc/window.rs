//! Sliding history buffer addressed by absolute stream position.
//!
//! The window holds an optional preloaded dictionary followed by the input
//! consumed so far, trimmed to the last [`WINDOW_SIZE`] bytes before each new
//! block is appended.  Positions are absolute (`u64`) and never reused, so the
//! hash chain can keep its links across slides.

use super::types::{MINMATCH, WINDOW_SIZE};

#[derive(Debug, Default)]
pub struct Window {
    data: Vec<u8>,
    /// Absolute position of `data[0]`.
    base: u64,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a window whose history is `dictionary` (only its last
    /// [`WINDOW_SIZE`] bytes are kept).  The first input byte lands at the
    /// absolute position equal to the kept dictionary length.
    pub fn with_dictionary(dictionary: &[u8]) -> Self {
        let keep = dictionary.len().min(WINDOW_SIZE);
        Window {
            data: dictionary[dictionary.len() - keep..].to_vec(),
            base: 0,
        }
    }

    /// Absolute position of the oldest byte still held.
    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// One past the absolute position of the newest byte.
    #[inline]
    pub fn end(&self) -> u64 {
        self.base + self.data.len() as u64
    }

    #[inline]
    fn index(&self, pos: u64) -> usize {
        debug_assert!(pos >= self.base && pos <= self.end());
        (pos - self.base) as usize
    }

    /// Append a block of fresh input and return its absolute start position.
    pub fn append(&mut self, bytes: &[u8]) -> u64 {
        let start = self.end();
        self.data.extend_from_slice(bytes);
        start
    }

    /// Drop everything but the last [`WINDOW_SIZE`] bytes.
    pub fn slide(&mut self) {
        if self.data.len() > WINDOW_SIZE {
            let drop = self.data.len() - WINDOW_SIZE;
            self.data.drain(..drop);
            self.base += drop as u64;
        }
    }

    /// Forget all history; the next appended byte keeps counting from `end()`.
    pub fn reset(&mut self) {
        self.base = self.end();
        self.data.clear();
    }

    #[inline]
    pub fn byte(&self, pos: u64) -> u8 {
        self.data[self.index(pos)]
    }

    /// Bytes in `[from, to)`.
    #[inline]
    pub fn slice(&self, from: u64, to: u64) -> &[u8] {
        &self.data[self.index(from)..self.index(to)]
    }

    /// Little-endian 4-byte prefix at `pos`, or `None` when fewer than
    /// [`MINMATCH`] bytes are available.
    #[inline]
    pub fn prefix(&self, pos: u64) -> Option<u32> {
        let i = self.index(pos);
        let bytes = self.data.get(i..i + MINMATCH)?;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Number of equal bytes between `window[candidate..]` and `window[pos..]`,
    /// not reading at or beyond `limit`.  The regions may overlap.
    #[inline]
    pub fn common_length(&self, candidate: u64, pos: u64, limit: u64) -> usize {
        debug_assert!(candidate < pos);
        if limit <= pos {
            return 0;
        }
        let a = &self.data[self.index(candidate)..];
        let b = &self.data[self.index(pos)..self.index(limit)];
        a.iter().zip(b).take_while(|(x, y)| x == y).count()
    }
}
