// Game Boy stream: no header, carried literals, negated offsets, 0000 end mark.

use std::cell::Cell;
use std::io::{self, Read, Write};
use std::rc::Rc;

use smallz4::{compress, compress_to_vec, Format, Prefs};

use crate::support::{decode_gameboy, dna, noise, periodic, word_salad};

fn gameboy(input: &[u8], dictionary: &[u8], level: u8) -> Vec<u8> {
    let mut prefs = Prefs::new();
    prefs.set_compression_level(level);
    prefs.set_format(Format::GameBoy);
    compress_to_vec(input, dictionary, &prefs).expect("game boy compression")
}

#[test]
fn empty_input_is_a_bare_end_mark() {
    assert_eq!(gameboy(b"", &[], 9), [0x00, 0x00, 0x00]);
}

#[test]
fn literals_then_end_mark() {
    assert_eq!(gameboy(b"abc", &[], 9), [0x30, b'a', b'b', b'c', 0x00, 0x00]);
}

#[test]
fn offsets_are_stored_negated() {
    let out = gameboy(&[b'a'; 32], &[], 9);
    assert_eq!(
        out,
        [
            0x1F, b'a', 0xFF, 0xFF, 7, // offset 1 stored as 0xFFFF
            0x50, b'a', b'a', b'a', b'a', b'a', 0x00, 0x00,
        ]
    );
    assert_eq!(decode_gameboy(&out, &[]), [b'a'; 32]);
}

#[test]
fn level_zero_is_one_literal_run() {
    let input = word_salad(1_000, 2);
    let out = gameboy(&input, &[], 0);
    assert_eq!(out.len(), 1 + 4 + input.len() + 2);
    assert_eq!(decode_gameboy(&out, &[]), input);
}

#[test]
fn round_trips_across_levels() {
    let samples = [word_salad(40_000, 8), dna(20_000, 9), noise(3_000, 10)];
    for input in &samples {
        for level in [1, 4, 7, 9] {
            let out = gameboy(input, &[], level);
            assert_eq!(&decode_gameboy(&out, &[]), input, "level {}", level);
        }
    }
}

#[test]
fn stream_spans_blocks_without_framing() {
    let input = periodic((4 << 20) + 777);
    let out = gameboy(&input, &[], 1);
    // one long match per block, priced in length-extension bytes
    assert!(out.len() < input.len() / 200);
    assert_eq!(decode_gameboy(&out, &[]), input);
}

#[test]
fn dictionary_is_visible_to_the_first_token() {
    let dictionary = word_salad(10_000, 21);
    let input = dictionary[2_000..6_000].to_vec();
    let out = gameboy(&input, &dictionary, 9);
    assert!(out.len() < 40, "{} bytes", out.len());
    assert_eq!(decode_gameboy(&out, &dictionary), input);
}

/// Source that notes how many bytes the sink already holds at every read.
struct Observed<'a> {
    data: &'a [u8],
    sunk: Rc<Cell<usize>>,
    log: Vec<(usize, usize)>,
    consumed: usize,
}

impl Read for Observed<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.log.push((self.consumed, self.sunk.get()));
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        self.consumed += n;
        Ok(n)
    }
}

struct Counted {
    sunk: Rc<Cell<usize>>,
    bytes: Vec<u8>,
}

impl Write for Counted {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        self.sunk.set(self.bytes.len());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn incompressible_input_streams_out_block_by_block() {
    let input = noise((8 << 20) + 1_000, 50);
    let sunk = Rc::new(Cell::new(0));
    let mut src = Observed { data: &input, sunk: Rc::clone(&sunk), log: Vec::new(), consumed: 0 };
    let mut dst = Counted { sunk, bytes: Vec::new() };

    let mut prefs = Prefs::new();
    prefs.set_compression_level(0);
    prefs.set_format(Format::GameBoy);
    compress(&mut src, &mut dst, &[], &prefs).unwrap();

    // The first block is on the wire before the last block is read.
    let before_last = src
        .log
        .iter()
        .filter(|&&(consumed, _)| consumed < input.len())
        .map(|&(_, sunk)| sunk)
        .max()
        .unwrap();
    assert!(before_last >= 4 << 20, "only {} bytes written before the input ran out", before_last);

    // two flush tokens (0xF1), then the final literal run with the end mark
    assert_eq!(dst.bytes[0], 0xF1);
    assert_eq!(decode_gameboy(&dst.bytes, &[]), input);
}
