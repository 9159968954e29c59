// smallz4 — LZ4 compressor with optimal parsing

pub mod config;
pub mod xxhash;
pub mod hc;
pub mod block;
pub mod parse;
pub mod frame;
pub mod io;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const SMALLZ4_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use io::{compress, compress_to_vec, CompressError, CompressResult, ConfigError, Format, Prefs};
