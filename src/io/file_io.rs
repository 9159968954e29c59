//! File I/O glue for the `smallz4` binary.
//!
//! - [`open_src_file`] resolves a path string to a `Box<dyn Read>`, handling
//!   the `"stdin"` sentinel and rejecting directories.
//! - [`open_dst_file`] resolves a path string to a [`DstFile`], handling the
//!   `"stdout"` sentinel and refusing to clobber an existing file unless
//!   overwriting was requested.
//! - [`load_dictionary`] reads the last 64 KiB of a dictionary file.
//!
//! Verbosity-gated diagnostics are emitted via [`displaylevel!`].

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::config::MAX_DICT_SIZE;
use crate::displaylevel;

// ---------------------------------------------------------------------------
// Sentinel strings
// ---------------------------------------------------------------------------

/// Sentinel: read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "stdout";

// ---------------------------------------------------------------------------
// Source file
// ---------------------------------------------------------------------------

/// Opens a source for reading.
///
/// - [`STDIN_MARK`] returns standard input.
/// - A directory is an [`io::ErrorKind::InvalidInput`] error.
/// - Otherwise the file is opened and wrapped in a [`BufReader`].
pub fn open_src_file(path: &str) -> io::Result<Box<dyn Read>> {
    if path == STDIN_MARK {
        displaylevel!(4, "Using stdin for input\n");
        return Ok(Box::new(io::stdin()));
    }

    if Path::new(path).is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: is a directory", path),
        ));
    }

    let f = File::open(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path, e)))?;
    Ok(Box::new(BufReader::new(f)))
}

// ---------------------------------------------------------------------------
// Destination file
// ---------------------------------------------------------------------------

/// A write-capable destination produced by [`open_dst_file`].
///
/// Callers inspect `is_stdout` to keep result messages off a terminal that
/// is receiving compressed bytes.
pub struct DstFile {
    inner: Box<dyn Write>,
    pub is_stdout: bool,
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Opens a destination for writing.
///
/// [`STDOUT_MARK`] selects standard output.  An existing regular file is
/// only replaced when `overwrite` is set; otherwise the call fails with
/// [`io::ErrorKind::AlreadyExists`] before anything is touched.
pub fn open_dst_file(path: &str, overwrite: bool) -> io::Result<DstFile> {
    if path == STDOUT_MARK {
        displaylevel!(4, "Using stdout for output\n");
        return Ok(DstFile {
            inner: Box::new(io::stdout().lock()),
            is_stdout: true,
        });
    }

    if !overwrite && Path::new(path).exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{}: output file already exists", path),
        ));
    }

    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: cannot create file: {}", path, e)))?;

    Ok(DstFile {
        inner: Box::new(BufWriter::new(f)),
        is_stdout: false,
    })
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

/// Reads a dictionary file, keeping only its last [`MAX_DICT_SIZE`] bytes.
pub fn load_dictionary(path: &str) -> io::Result<Vec<u8>> {
    let mut f = File::open(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: cannot open dictionary: {}", path, e)))?;
    let size = f.metadata()?.len();
    let skip = size.saturating_sub(MAX_DICT_SIZE as u64);
    if skip > 0 {
        f.seek(SeekFrom::Start(skip))?;
    }

    let mut dictionary = Vec::with_capacity((size - skip) as usize);
    f.read_to_end(&mut dictionary)?;
    // The file may have grown since `metadata`.
    if dictionary.len() > MAX_DICT_SIZE {
        dictionary.drain(..dictionary.len() - MAX_DICT_SIZE);
    }
    displaylevel!(4, "Loaded {} dictionary bytes from {}\n", dictionary.len(), path);
    Ok(dictionary)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
