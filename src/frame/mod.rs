//! Output formats: modern LZ4 frame, legacy LZ4, and the Game Boy stream.
//!
//! Each format is a [`FrameWriter`] consuming the parser's token sequence
//! block by block.

pub mod gameboy;
pub mod header;
pub mod legacy;
pub mod modern;
pub mod types;

pub use gameboy::GameBoyWriter;
pub use header::{header_checksum, write_frame_header};
pub use legacy::LegacyWriter;
pub use modern::ModernWriter;
pub use types::{
    BlockEncoding, FrameWriter, BLOCK_UNCOMPRESSED_FLAG, LEGACY_MAGIC_NUMBER, LZ4_MAGIC_NUMBER,
};
