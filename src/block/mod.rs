//! LZ4 token representation and the shared token encoder.

pub mod encode;
pub mod types;

pub use encode::{encode_block, encode_token, encoded_size, length_extra_bytes, match_cost, OffsetField};
pub use types::{Token, LASTLITERALS, MFLIMIT};
