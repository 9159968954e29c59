//! Command-line interface for the `smallz4` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings and the default notification level. |
//! | [`help`]      | Usage screen. |
//! | [`args`]      | `ParsedArgs`: flags, dictionary path, input/output names. |
//!
//! Typical call sequence: `parse_args` → validate → open files → `io::compress`.

pub mod args;
pub mod constants;
pub mod help;
