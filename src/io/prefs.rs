// prefs.rs — compression preferences, configuration errors, and the display
// level shared by the driver and the CLI.
//
// Design notes:
// - The notification level is a process-wide `AtomicI32` so both the engine
//   and the binary can gate stderr output without threading a logger through.
//   The library default is 0 (silent); the binary raises it to 2.
// - `Prefs` is a plain value type; setters take `&mut self` and return the
//   value actually stored.
// - Validation is a separate step (`Prefs::validate`) run by the driver before
//   any byte is read or written.

use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};

use crate::config::{CLEVEL_DEFAULT, CLEVEL_MAX};

// ---------------------------------------------------------------------------
// Display / notification level
// ---------------------------------------------------------------------------

/// Global notification level. 0 = silent, 1 = errors only, 2 = results,
/// 3 = configuration and progress, 4+ = per-block detail.
pub static DISPLAY_LEVEL: AtomicI32 = AtomicI32::new(0);

#[inline]
pub fn display_level() -> i32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the global notification level. Returns the value stored.
pub fn set_notification_level(level: i32) -> i32 {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
    level
}

/// Print to stderr when the notification level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::io::prefs::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

// ---------------------------------------------------------------------------
// Output format
// ---------------------------------------------------------------------------

/// Wire format of the compressed stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    /// Modern LZ4 frame (magic `0x184D2204`), linked 4 MiB blocks.
    #[default]
    Frame,
    /// Legacy LZ4 (magic `0x184C2102`), independent 8 MiB blocks.
    Legacy,
    /// Headerless token stream for the Game Boy decoder.
    GameBoy,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Frame => "LZ4 frame",
            Format::Legacy => "legacy LZ4",
            Format::GameBoy => "Game Boy",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Preference combinations rejected before compression starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    LevelOutOfRange(u8),
    /// Legacy blocks are decoded without history, so no dictionary.
    LegacyWithDictionary,
    /// Legacy format has no stored blocks, so no level 0.
    LegacyUncompressed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LevelOutOfRange(level) => {
                write!(f, "compression level {} out of range (0-{})", level, CLEVEL_MAX)
            }
            ConfigError::LegacyWithDictionary => {
                f.write_str("legacy format does not support dictionaries")
            }
            ConfigError::LegacyUncompressed => {
                f.write_str("legacy format does not support uncompressed mode (level 0)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefs {
    /// Compression level 0-9. Default: 9.
    pub level: u8,
    /// Output format. Default: modern frame.
    pub format: Format,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            level: CLEVEL_DEFAULT,
            format: Format::Frame,
        }
    }
}

impl Prefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level, clamped to 9. Returns the value stored.
    pub fn set_compression_level(&mut self, level: u8) -> u8 {
        self.level = level.min(CLEVEL_MAX);
        self.level
    }

    pub fn set_format(&mut self, format: Format) -> Format {
        self.format = format;
        format
    }

    /// Check the preferences against each other and against the presence of
    /// a dictionary.
    pub fn validate(&self, has_dictionary: bool) -> Result<(), ConfigError> {
        if self.level > CLEVEL_MAX {
            return Err(ConfigError::LevelOutOfRange(self.level));
        }
        if self.format == Format::Legacy {
            if has_dictionary {
                return Err(ConfigError::LegacyWithDictionary);
            }
            if self.level == 0 {
                return Err(ConfigError::LegacyUncompressed);
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
