//! Stream-level API: preferences, the compression driver, and the file glue
//! used by the binary.

pub mod compress;
pub mod file_io;
pub mod prefs;

// ── Core type re-exports ─────────────────────────────────────────────────────
pub use prefs::{ConfigError, Format, Prefs};

// ── Special I/O sentinels ────────────────────────────────────────────────────
pub use file_io::{STDIN_MARK, STDOUT_MARK};

// ── Notification level (global) ──────────────────────────────────────────────
pub use prefs::{display_level, set_notification_level};

// ── Compression ──────────────────────────────────────────────────────────────
/// Compress a byte stream. See [`compress::compress`].
pub use compress::{compress, compress_to_vec, CompressError, CompressResult};

// ── File glue ────────────────────────────────────────────────────────────────
pub use file_io::{load_dictionary, open_dst_file, open_src_file};
