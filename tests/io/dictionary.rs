// Dictionary history: visible to the first block, never emitted, and only
// its last 64 KiB count.

use smallz4::{compress_to_vec, Format, Prefs};

use crate::support::{decode_frame_with_dict, decode_gameboy, noise, word_salad};

fn abcd(size: usize) -> Vec<u8> {
    b"ABCD".iter().cycle().take(size).copied().collect()
}

#[test]
fn matching_dictionary_shrinks_the_output() {
    let input = abcd(80_000);
    let dictionary = input[input.len() - 65_536..].to_vec();
    let prefs = Prefs::default();

    let plain = compress_to_vec(&input, &[], &prefs).unwrap();
    let primed = compress_to_vec(&input, &dictionary, &prefs).unwrap();
    assert!(primed.len() < plain.len(), "{} vs {}", primed.len(), plain.len());
    assert_eq!(decode_frame_with_dict(&primed, &dictionary), input);
}

#[test]
fn dictionary_turns_unique_data_into_a_match() {
    let dictionary = noise(20_000, 7);
    let input = dictionary[5_000..15_000].to_vec();
    let prefs = Prefs::default();

    let plain = compress_to_vec(&input, &[], &prefs).unwrap();
    let primed = compress_to_vec(&input, &dictionary, &prefs).unwrap();
    assert!(plain.len() > input.len());
    assert!(primed.len() < 100, "{} bytes", primed.len());
    assert_eq!(decode_frame_with_dict(&primed, &dictionary), input);
}

#[test]
fn only_the_last_64k_of_the_dictionary_is_used() {
    let dictionary = word_salad(100_000, 12);
    let tail = &dictionary[dictionary.len() - 65_536..];
    let input = word_salad(20_000, 13);
    let prefs = Prefs::default();

    let full = compress_to_vec(&input, &dictionary, &prefs).unwrap();
    let trimmed = compress_to_vec(&input, tail, &prefs).unwrap();
    assert_eq!(full, trimmed);
    assert_eq!(decode_frame_with_dict(&full, tail), input);
}

#[test]
fn dictionary_is_never_emitted() {
    let dictionary = word_salad(1_000, 14);
    let prefs = Prefs::new();
    let out = compress_to_vec(b"", &dictionary, &prefs).unwrap();
    assert_eq!(out.len(), 11);
}

#[test]
fn gameboy_stream_uses_the_dictionary() {
    let dictionary = word_salad(30_000, 15);
    let input = word_salad(10_000, 16);
    let mut prefs = Prefs::new();
    prefs.set_format(Format::GameBoy);
    let out = compress_to_vec(&input, &dictionary, &prefs).unwrap();
    assert_eq!(decode_gameboy(&out, &dictionary), input);
}
