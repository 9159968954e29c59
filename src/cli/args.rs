//! Command-line argument parsing for the `smallz4` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value capturing every option and filename.
//!
//! Short options may be aggregated (e.g. `-f7`, `-gv`).  `-D` takes the next
//! argument as the dictionary path.  A lone `-` stands for stdin (first
//! positional) or stdout (second positional).
//!
//! Bad or unrecognised options return an `Err` whose message begins with
//! `"bad usage: "`.

use anyhow::{anyhow, bail};

use crate::cli::constants::DISPLAY_LEVEL_DEFAULT;
use crate::config::CLEVEL_MAX;
use crate::io::file_io::{STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::{Format, Prefs};

// ── Public output type ─────────────────────────────────────────────────────────

/// Complete set of options and filenames produced by the argument parser.
#[derive(Debug)]
pub struct ParsedArgs {
    /// Compression level and output format.
    pub prefs: Prefs,
    /// Replace an existing output file (`-f`).
    pub force_overwrite: bool,
    /// Dictionary file path (`-D FILE`).
    pub dictionary_filename: Option<String>,
    /// Input path, or [`STDIN_MARK`].
    pub input_filename: String,
    /// Output path, or [`STDOUT_MARK`].
    pub output_filename: String,
    /// Notification level after `-v` / `-q`.
    pub display_level: i32,
    /// `-h` was given: print help and exit 0 without any I/O.
    pub show_help: bool,
    /// Program name (argv[0]), used by the help text.
    pub exe_name: String,
}

// ── Public API ─────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` (skipping argv[0]).
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let exe_name = std::env::args().next().unwrap_or_else(|| "smallz4".to_owned());
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&exe_name, &argv)
}

/// Parse an explicit argument list.  `argv` is argv[1..].
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let mut prefs = Prefs::default();
    let mut force_overwrite = false;
    let mut dictionary_filename: Option<String> = None;
    let mut positionals: Vec<String> = Vec::new();
    let mut display_level = DISPLAY_LEVEL_DEFAULT;
    let mut show_help = false;

    // ── Main argument loop ──────────────────────────────────────────────────
    let mut arg_idx = 0usize;
    while arg_idx < argv.len() {
        let argument = &argv[arg_idx];
        arg_idx += 1;

        if argument.is_empty() {
            continue;
        }

        let bytes = argument.as_bytes();

        // ── Non-option path, or a lone `-` ───────────────────────────────────
        if bytes[0] != b'-' || bytes.len() == 1 {
            positionals.push(argument.clone());
            continue;
        }

        // ── Aggregated short options ─────────────────────────────────────────
        let mut pos = 1usize;
        while pos < bytes.len() {
            let c = bytes[pos];
            pos += 1;
            match c {
                b'h' => show_help = true,
                b'f' => force_overwrite = true,
                b'g' => {
                    prefs.set_format(Format::GameBoy);
                }
                b'l' => {
                    prefs.set_format(Format::Legacy);
                }
                b'v' => display_level += 1,
                b'q' => display_level = (display_level - 1).max(0),
                b'D' => {
                    let path = argv
                        .get(arg_idx)
                        .ok_or_else(|| anyhow!("bad usage: no dictionary filename after -D"))?;
                    dictionary_filename = Some(path.clone());
                    arg_idx += 1;
                }
                b'0'..=b'9' => {
                    // Consume the whole digit run so "-12" is not read as "-1 -2".
                    let mut level = u32::from(c - b'0');
                    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                        level = level.saturating_mul(10).saturating_add(u32::from(bytes[pos] - b'0'));
                        pos += 1;
                    }
                    if level > u32::from(CLEVEL_MAX) {
                        bail!(
                            "bad usage: compression level {} out of range (0-{})",
                            level,
                            CLEVEL_MAX
                        );
                    }
                    prefs.set_compression_level(level as u8);
                }
                other => bail!("bad usage: unknown flag '-{}'", other as char),
            }
        }
    }

    // ── Positionals: [input] [output] ───────────────────────────────────────
    if positionals.len() > 2 {
        bail!("bad usage: too many arguments ({} won't be used)", positionals[2]);
    }
    let mut positionals = positionals.into_iter();
    let input_filename = match positionals.next() {
        Some(p) if p != "-" => p,
        _ => STDIN_MARK.to_owned(),
    };
    let output_filename = match positionals.next() {
        Some(p) if p != "-" => p,
        _ => STDOUT_MARK.to_owned(),
    };

    Ok(ParsedArgs {
        prefs,
        force_overwrite,
        dictionary_filename,
        input_filename,
        output_filename,
        display_level,
        show_help,
        exe_name: exe_name.to_owned(),
    })
}
