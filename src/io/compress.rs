//! Streaming compression driver.
//!
//! [`compress`] runs one single-threaded pass over a byte source:
//!
//! ```text
//! read block → append to window → parse (hash chain updated as it goes)
//!            → serialise with the format's FrameWriter → write
//! ```
//!
//! Everything a run needs (source, sink, dictionary, preferences) is passed
//! in explicitly, so independent runs can execute side by side.  Memory is
//! bounded by the format's block size plus the 64 KiB history.
//!
//! Preferences are validated before the first byte is read or written.  A
//! read or write failure aborts the run; bytes already handed to the sink
//! stay there.

use std::fmt;
use std::io::{self, Read, Write};

use crate::block::Token;
use crate::config::MAX_DICT_SIZE;
use crate::displaylevel;
use crate::frame::{BlockEncoding, FrameWriter, GameBoyWriter, LegacyWriter, ModernWriter};
use crate::hc::{HashChain, Window};
use crate::io::prefs::{ConfigError, Format, Prefs};
use crate::parse::Parser;

// ---------------------------------------------------------------------------
// Public result and error types
// ---------------------------------------------------------------------------

/// Statistics returned from a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressResult {
    /// Total uncompressed source bytes processed.
    pub bytes_in: u64,
    /// Total bytes written to the destination.
    pub bytes_out: u64,
    /// Number of input blocks.
    pub blocks: u64,
}

#[derive(Debug)]
pub enum CompressError {
    /// Rejected preferences; nothing was read or written.
    Config(ConfigError),
    /// The byte source failed.
    Read(io::Error),
    /// The byte sink failed.
    Write(io::Error),
}

impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressError::Config(e) => write!(f, "invalid configuration: {}", e),
            CompressError::Read(e) => write!(f, "read error: {}", e),
            CompressError::Write(e) => write!(f, "write error: {}", e),
        }
    }
}

impl std::error::Error for CompressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompressError::Config(e) => Some(e),
            CompressError::Read(e) | CompressError::Write(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CompressError {
    fn from(e: ConfigError) -> Self {
        CompressError::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fill `buf` as far as the source allows.  Retries on `Interrupted`; a short
/// count means end of data.
fn read_to_capacity<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match reader.read(&mut buf[total..]) {
            Ok(0) => break, // EOF
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// Write and clear `out`, returning the byte count.
fn flush_out<W: Write + ?Sized>(dst: &mut W, out: &mut Vec<u8>) -> Result<u64, CompressError> {
    if out.is_empty() {
        return Ok(0);
    }
    dst.write_all(out).map_err(CompressError::Write)?;
    let n = out.len() as u64;
    out.clear();
    Ok(n)
}

fn frame_writer(format: Format) -> Box<dyn FrameWriter> {
    match format {
        Format::Frame => Box::new(ModernWriter::new()),
        Format::Legacy => Box::new(LegacyWriter::new()),
        Format::GameBoy => Box::new(GameBoyWriter::new()),
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Compress everything `src` yields into `dst`.
///
/// `dictionary` is history made visible to the first block without being
/// emitted; only its last 64 KiB matter.  Pass an empty slice for none.
pub fn compress<R, W>(
    src: &mut R,
    dst: &mut W,
    dictionary: &[u8],
    prefs: &Prefs,
) -> Result<CompressResult, CompressError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    prefs.validate(!dictionary.is_empty())?;

    let mut writer = frame_writer(prefs.format);
    let mut parser = Parser::for_level(prefs.level);
    let params = parser.params();
    let dictionary = &dictionary[dictionary.len().saturating_sub(MAX_DICT_SIZE)..];

    displaylevel!(
        3,
        "Compressing to {} format, level {} ({:?}, chain {}), dictionary {} bytes\n",
        prefs.format,
        prefs.level,
        params.strategy,
        params.max_chain,
        dictionary.len()
    );

    let block_size = writer.block_size();
    let independent = writer.independent_blocks();
    let mut window = Window::with_dictionary(dictionary);
    let mut chain = HashChain::new();
    let mut input = vec![0u8; block_size];
    let mut tokens: Vec<Token> = Vec::new();
    let mut out: Vec<u8> = Vec::new();
    let mut result = CompressResult::default();

    writer.begin(&mut out);
    result.bytes_out += flush_out(dst, &mut out)?;

    loop {
        let n = read_to_capacity(src, &mut input).map_err(CompressError::Read)?;
        if n == 0 {
            break;
        }

        if independent {
            window.reset();
            chain.reset(window.end());
        } else {
            window.slide();
        }
        let start = window.append(&input[..n]);
        let end = window.end();
        parser.parse_block(&window, &mut chain, start, end, &mut tokens);
        let encoding = writer.block(window.slice(start, end), &tokens, &mut out);

        let written = flush_out(dst, &mut out)?;
        result.bytes_in += n as u64;
        result.bytes_out += written;
        result.blocks += 1;
        match encoding {
            BlockEncoding::Stored => {
                displaylevel!(4, "Block {}: {} bytes stored\n", result.blocks, n);
            }
            _ => displaylevel!(
                4,
                "Block {}: {} bytes -> {} bytes in {} tokens ({:?})\n",
                result.blocks,
                n,
                written,
                tokens.len(),
                encoding
            ),
        }

        if n < block_size {
            break;
        }
    }

    writer.end(&mut out);
    result.bytes_out += flush_out(dst, &mut out)?;
    dst.flush().map_err(CompressError::Write)?;
    Ok(result)
}

/// Compress an in-memory buffer.
pub fn compress_to_vec(
    input: &[u8],
    dictionary: &[u8],
    prefs: &Prefs,
) -> Result<Vec<u8>, CompressError> {
    let mut src = input;
    let mut dst = Vec::with_capacity(input.len() / 2 + 16);
    compress(&mut src, &mut dst, dictionary, prefs)?;
    Ok(dst)
}
