// config.rs — Compile-time configuration constants.
//
// Compression levels select both the hash-chain walk limit and the parsing
// strategy (see `parse::ParseParams::for_level`).  Block sizes are fixed per
// output format; nothing here can be changed at runtime except through the
// level passed in `io::Prefs`.

// Default compression level: optimal parsing over every reachable match.
pub const CLEVEL_DEFAULT: u8 = 9;

// Highest accepted compression level.
pub const CLEVEL_MAX: u8 = 9;

// Levels 1..=SHORT_CHAINS_GREEDY parse greedily.
pub const SHORT_CHAINS_GREEDY: u8 = 3;

// Levels above SHORT_CHAINS_GREEDY and up to SHORT_CHAINS_LAZY search lazily
// (the position after a match, then skip to its end) before the cost pass.
pub const SHORT_CHAINS_LAZY: u8 = 6;

// Chain-walk limit used at level 9. The window only holds 2^16 positions, so
// this is effectively unlimited.
pub const MAX_CHAIN_LENGTH: u16 = 65_535;

pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

// Block size of the modern frame (block-size id 7) and of the Game Boy stream.
pub const BLOCK_SIZE: usize = 4 * MB;
pub const BLOCK_SIZE_ID: u8 = 7;

// Block size of the legacy format.
pub const LEGACY_BLOCK_SIZE: usize = 8 * MB;

// Only the last 64 KiB of a dictionary can ever be referenced.
pub const MAX_DICT_SIZE: usize = 64 * KB;
