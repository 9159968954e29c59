// Wire layout of the modern LZ4 frame, checked byte-for-byte and against
// lz4_flex's frame decoder.

use smallz4::block::Token;
use smallz4::hc::{HashChain, Window};
use smallz4::parse::Parser;
use smallz4::{compress_to_vec, Prefs};

use crate::support::{
    decode_frame, decode_frame_with_dict, frame_blocks, periodic, word_salad, FRAME_END_MARK,
    FRAME_HEADER,
};

fn frame(input: &[u8], level: u8) -> Vec<u8> {
    let mut prefs = Prefs::new();
    prefs.set_compression_level(level);
    compress_to_vec(input, &[], &prefs).expect("frame compression")
}

// ---------------------------------------------------------------------------
// Header and end mark
// ---------------------------------------------------------------------------

#[test]
fn empty_input_is_header_and_end_mark() {
    let out = frame(b"", 9);
    let mut expected = FRAME_HEADER.to_vec();
    expected.extend_from_slice(&FRAME_END_MARK);
    assert_eq!(out, expected);
    assert_eq!(out.len(), 11);
    assert!(decode_frame(&out).is_empty());
}

#[test]
fn every_frame_starts_with_the_fixed_header() {
    for level in 0..=9 {
        let out = frame(b"header check", level);
        assert_eq!(&out[..7], &FRAME_HEADER, "level {}", level);
        assert_eq!(&out[out.len() - 4..], &FRAME_END_MARK, "level {}", level);
    }
}

// ---------------------------------------------------------------------------
// Stored and compressed blocks
// ---------------------------------------------------------------------------

#[test]
fn level_zero_stores_every_block() {
    let input = periodic(10_000);
    let out = frame(&input, 0);
    let blocks = frame_blocks(&out);
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].0, "block must carry the uncompressed flag");
    assert_eq!(blocks[0].1, &input[..]);
    assert_eq!(decode_frame(&out), input);
}

#[test]
fn single_byte_is_stored() {
    // One literal token encodes to two bytes, which is not smaller than the
    // raw byte, so the block goes out stored.
    let mut window = Window::new();
    let start = window.append(b"x");
    let mut tokens = Vec::new();
    Parser::for_level(9).parse_block(&window, &mut HashChain::new(), start, window.end(), &mut tokens);
    assert_eq!(tokens, vec![Token::literals(1)]);

    let out = frame(b"x", 9);
    assert_eq!(&out[7..11], &[1, 0, 0, 0x80]);
    assert_eq!(out[11], b'x');
    assert_eq!(out.len(), 16);
    assert_eq!(decode_frame(&out), b"x");
}

#[test]
fn run_of_one_letter_encodes_as_a_single_match() {
    let input = [b'a'; 32];
    let out = frame(&input, 9);
    assert_eq!(
        &out[7..],
        &[
            11, 0, 0, 0, // block size, compressed
            0x1F, b'a', 1, 0, 7, // one literal, offset 1, length 4 + 15 + 7
            0x50, b'a', b'a', b'a', b'a', b'a', // five trailing literals
            0, 0, 0, 0,
        ]
    );
    assert!(out.len() < 32 + 11);
    assert_eq!(decode_frame(&out), input);
}

#[test]
fn compressible_blocks_are_not_stored() {
    let input = word_salad(50_000, 3);
    let out = frame(&input, 9);
    let blocks = frame_blocks(&out);
    assert_eq!(blocks.len(), 1);
    assert!(!blocks[0].0);
    assert!(blocks[0].1.len() < input.len());
}

// ---------------------------------------------------------------------------
// Multiple blocks
// ---------------------------------------------------------------------------

#[test]
fn large_input_is_split_into_linked_blocks() {
    let input = periodic((4 << 20) + 1_000);
    let out = frame(&input, 1);
    let blocks = frame_blocks(&out);
    assert_eq!(blocks.len(), 2);
    // The second block starts mid-phrase and matches back into the first.
    assert!(blocks[1].1.len() < 100, "tail block is {} bytes", blocks[1].1.len());
    assert_eq!(decode_frame(&out), input);
}

#[test]
fn block_decoder_with_dictionary_agrees_with_frame_decoder() {
    let input = word_salad(30_000, 11);
    let out = frame(&input, 7);
    assert_eq!(decode_frame_with_dict(&out, &[]), decode_frame(&out));
}
