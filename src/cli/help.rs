// cli/help.rs — help text.
//
// Functions:
//   help_text   → the full usage screen as a `String`
//   print_help  → writes it to stdout

use crate::cli::constants::{COMPRESSOR_NAME, SMALLZ4_VERSION};
use crate::config::{SHORT_CHAINS_GREEDY, SHORT_CHAINS_LAZY};

/// The usage screen for `program` (argv[0]).
pub fn help_text(program: &str) -> String {
    let p = program;
    let mut s = String::new();
    s.push_str(&format!(
        "{} {}: LZ4 compressor with optimal parsing, output readable by any LZ4 decoder\n\n",
        COMPRESSOR_NAME, SMALLZ4_VERSION
    ));
    s.push_str("Basic usage:\n");
    s.push_str(&format!("  {} [flags] [input] [output]\n\n", p));
    s.push_str("Reads from STDIN if no input is given (or input is -),\n");
    s.push_str("writes to STDOUT if no output is given (or output is -).\n\n");
    s.push_str("Examples:\n");
    s.push_str(&format!("  {}   < abc.txt > abc.txt.lz4    # use STDIN and STDOUT\n", p));
    s.push_str(&format!("  {}     abc.txt > abc.txt.lz4    # read from file, write to STDOUT\n", p));
    s.push_str(&format!("  {}     abc.txt   abc.txt.lz4    # read from and write to file\n", p));
    s.push_str(&format!("  cat abc.txt | {} - abc.txt.lz4  # read from STDIN, write to file\n", p));
    s.push_str(&format!("  {} -6  abc.txt   abc.txt.lz4    # compression level 6 instead of 9\n", p));
    s.push_str(&format!("  {} -f  abc.txt   abc.txt.lz4    # overwrite an existing file\n", p));
    s.push_str(&format!("  {} -f7 abc.txt   abc.txt.lz4    # level 7 and overwrite\n\n", p));
    s.push_str("Flags:\n");
    s.push_str("  -0, -1 ... -9   Set compression level, default: 9 (see below)\n");
    s.push_str("  -h              Display this help message\n");
    s.push_str("  -f              Overwrite an existing file\n");
    s.push_str("  -g              Game Boy format (not LZ4 compatible)\n");
    s.push_str("  -l              Use the LZ4 legacy file format\n");
    s.push_str("  -D FILE         Load dictionary (last 64 KiB of FILE)\n");
    s.push_str("  -v / -q         More / less verbose\n\n");
    s.push_str("Compression levels:\n");
    s.push_str("  -0              No compression\n");
    s.push_str(&format!(
        "  -1 ... -{}       Greedy search, check 1 to {} matches\n",
        SHORT_CHAINS_GREEDY, SHORT_CHAINS_GREEDY
    ));
    s.push_str(&format!(
        "  -{} ... -{}       Lazy matching with optimal parsing, check {} to {} matches\n",
        SHORT_CHAINS_GREEDY + 1,
        SHORT_CHAINS_LAZY,
        SHORT_CHAINS_GREEDY + 1,
        SHORT_CHAINS_LAZY
    ));
    s.push_str(&format!(
        "  -{} ... -8       Optimal parsing, check {} to 8 matches\n",
        SHORT_CHAINS_LAZY + 1,
        SHORT_CHAINS_LAZY + 1
    ));
    s.push_str("  -9              Optimal parsing, check all possible matches (default)\n");
    s
}

pub fn print_help(program: &str) {
    print!("{}", help_text(program));
}
