// Driver properties over whole streams: round trip at every level and
// format, and level 9 never losing to a faster level.

use smallz4::{compress, compress_to_vec, CompressResult, Format, Prefs};

use crate::support::{decode_frame, decode_gameboy, decode_legacy, dna, noise, periodic, word_salad};

fn prefs(level: u8, format: Format) -> Prefs {
    let mut prefs = Prefs::new();
    prefs.set_compression_level(level);
    prefs.set_format(format);
    prefs
}

fn greedy_trap() -> Vec<u8> {
    let mut data = b"abcd0123".to_vec();
    data.extend_from_slice(b"Xbcdefghijklmnopqrstuv4567");
    data.extend_from_slice(b"abcdefghijklmnopqrstuv");
    data.extend_from_slice(b"!#%&*()=+?");
    data
}

fn samples() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("periodic", periodic(20_000)),
        ("words", word_salad(30_000, 1)),
        ("dna", dna(20_000, 2)),
        ("noise", noise(5_000, 3)),
        ("greedy trap", greedy_trap()),
    ]
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn frame_round_trips_at_every_level() {
    for (name, input) in samples() {
        for level in 0..=9 {
            let out = compress_to_vec(&input, &[], &prefs(level, Format::Frame)).unwrap();
            assert_eq!(decode_frame(&out), input, "{} at level {}", name, level);
        }
    }
}

#[test]
fn legacy_round_trips_at_every_level() {
    for (name, input) in samples() {
        for level in 1..=9 {
            let out = compress_to_vec(&input, &[], &prefs(level, Format::Legacy)).unwrap();
            assert_eq!(decode_legacy(&out), input, "{} at level {}", name, level);
        }
    }
}

#[test]
fn gameboy_round_trips_at_every_level() {
    for (name, input) in samples() {
        for level in 0..=9 {
            let out = compress_to_vec(&input, &[], &prefs(level, Format::GameBoy)).unwrap();
            assert_eq!(decode_gameboy(&out, &[]), input, "{} at level {}", name, level);
        }
    }
}

#[test]
fn single_byte_round_trips_in_every_format() {
    let frame = compress_to_vec(b"Q", &[], &prefs(9, Format::Frame)).unwrap();
    assert_eq!(decode_frame(&frame), b"Q");
    let legacy = compress_to_vec(b"Q", &[], &prefs(9, Format::Legacy)).unwrap();
    assert_eq!(legacy, [0x02, 0x21, 0x4C, 0x18, 2, 0, 0, 0, 0x10, b'Q']);
    let gameboy = compress_to_vec(b"Q", &[], &prefs(9, Format::GameBoy)).unwrap();
    assert_eq!(gameboy, [0x10, b'Q', 0, 0]);
}

// ---------------------------------------------------------------------------
// Compression quality
// ---------------------------------------------------------------------------

#[test]
fn level_nine_is_never_larger() {
    for (name, input) in samples() {
        for format in [Format::Frame, Format::GameBoy] {
            let best = compress_to_vec(&input, &[], &prefs(9, format)).unwrap().len();
            for level in 0..9 {
                let other = compress_to_vec(&input, &[], &prefs(level, format)).unwrap().len();
                assert!(
                    best <= other,
                    "{} in {} format: level 9 gave {} bytes, level {} gave {}",
                    name,
                    format,
                    best,
                    level,
                    other
                );
            }
        }
    }
}

#[test]
fn optimal_parse_beats_greedy_on_the_trap() {
    let input = greedy_trap();
    let greedy = compress_to_vec(&input, &[], &prefs(3, Format::Frame)).unwrap();
    let optimal = compress_to_vec(&input, &[], &prefs(9, Format::Frame)).unwrap();
    assert!(optimal.len() < greedy.len());
}

#[test]
fn repetitive_input_shrinks() {
    let input = [b'a'; 32];
    let out = compress_to_vec(&input, &[], &Prefs::default()).unwrap();
    assert!(out.len() < input.len() + 11);

    let text = word_salad(100_000, 4);
    let out = compress_to_vec(&text, &[], &Prefs::default()).unwrap();
    assert!(out.len() < text.len() / 2, "{} bytes", out.len());
}

#[test]
fn incompressible_input_costs_only_framing() {
    let input = noise(100_000, 5);
    let out = compress_to_vec(&input, &[], &Prefs::default()).unwrap();
    assert_eq!(out.len(), input.len() + 7 + 4 + 4);
}

// ---------------------------------------------------------------------------
// Result accounting
// ---------------------------------------------------------------------------

#[test]
fn result_counts_bytes_and_blocks() {
    let input = periodic((4 << 20) + 1);
    let mut dst = Vec::new();
    let result = compress(&mut &input[..], &mut dst, &[], &prefs(1, Format::Frame)).unwrap();
    assert_eq!(result.bytes_in, input.len() as u64);
    assert_eq!(result.bytes_out, dst.len() as u64);
    assert_eq!(result.blocks, 2);
}

#[test]
fn empty_input_in_every_format() {
    for (format, expected) in [
        (Format::Frame, &[0x04, 0x22, 0x4D, 0x18, 0x40, 0x70, 0xDF, 0, 0, 0, 0][..]),
        (Format::Legacy, &[0x02, 0x21, 0x4C, 0x18][..]),
        (Format::GameBoy, &[0, 0, 0][..]),
    ] {
        let mut dst = Vec::new();
        let result = compress(&mut std::io::empty(), &mut dst, &[], &prefs(9, format)).unwrap();
        assert_eq!(dst, expected, "{}", format);
        assert_eq!(
            result,
            CompressResult { bytes_in: 0, bytes_out: expected.len() as u64, blocks: 0 }
        );
    }
}
