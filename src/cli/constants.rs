// cli/constants.rs — program identity and the CLI's default notification level.

// ── String / identity constants ──────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "smallz4";
pub const SMALLZ4_VERSION: &str = crate::SMALLZ4_VERSION_STRING;

/// Welcome banner, printed at notification level 3.
pub fn welcome_message() -> String {
    format!(
        "*** {} v{} {}-bit, optimal LZ4 compressor ***\n",
        COMPRESSOR_NAME,
        SMALLZ4_VERSION,
        std::mem::size_of::<*const ()>() * 8
    )
}

// ── Display level ────────────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = results (lowered to 1 when the
// compressed stream goes to stdout); 3 = configuration; 4 = per-block detail.
pub const DISPLAY_LEVEL_DEFAULT: i32 = 2;
