//! Binary entry point for the `smallz4` command-line tool.
//!
//! # Control flow
//!
//! 1. With no arguments and a terminal on stdin, print help and exit.
//! 2. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//! 3. [`run`] validates the preferences, loads the dictionary, opens the
//!    files and compresses.  Any error ends the process with exit code 1.

use std::io::IsTerminal;

use anyhow::Context;

use smallz4::cli::args::{parse_args, ParsedArgs};
use smallz4::cli::constants::{welcome_message, DISPLAY_LEVEL_DEFAULT};
use smallz4::cli::help::print_help;
use smallz4::displaylevel;
use smallz4::io::{
    compress, display_level, load_dictionary, open_dst_file, open_src_file,
    set_notification_level,
};

fn run(args: ParsedArgs) -> anyhow::Result<()> {
    set_notification_level(args.display_level);
    if args.show_help {
        print_help(&args.exe_name);
        return Ok(());
    }
    displaylevel!(3, "{}", welcome_message());

    // Format restrictions are checked before any file is opened.
    let prefs = args.prefs;
    prefs.validate(args.dictionary_filename.is_some())?;

    let dictionary = match args.dictionary_filename.as_deref() {
        Some(path) => load_dictionary(path)?,
        None => Vec::new(),
    };

    let mut src = open_src_file(&args.input_filename)?;
    let mut dst = open_dst_file(&args.output_filename, args.force_overwrite)?;

    // Keep the result line off a terminal that is receiving compressed bytes.
    if dst.is_stdout && display_level() == 2 {
        set_notification_level(1);
    }

    let result = compress(&mut src, &mut dst, &dictionary, &prefs)
        .with_context(|| format!("compressing {}", args.input_filename))?;

    let ratio = if result.bytes_in == 0 {
        0.0
    } else {
        result.bytes_out as f64 / result.bytes_in as f64 * 100.0
    };
    displaylevel!(
        2,
        "Compressed {} bytes into {} bytes ==> {:.2}%\n",
        result.bytes_in,
        result.bytes_out,
        ratio
    );
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    if std::env::args().len() == 1 && std::io::stdin().is_terminal() {
        let program = std::env::args().next().unwrap_or_else(|| "smallz4".to_owned());
        print_help(&program);
        return;
    }

    set_notification_level(DISPLAY_LEVEL_DEFAULT);
    let exit_code = match parse_args().and_then(run) {
        Ok(()) => 0,
        Err(e) => {
            displaylevel!(1, "ERROR: {:#}\n", e);
            1
        }
    };
    std::process::exit(exit_code);
}
