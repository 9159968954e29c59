// Legacy LZ4 stream: magic plus independent size-prefixed blocks.

use smallz4::{compress_to_vec, CompressError, ConfigError, Format, Prefs};

use crate::support::{decode_legacy, periodic, word_salad, LEGACY_MAGIC};

fn legacy_prefs(level: u8) -> Prefs {
    let mut prefs = Prefs::new();
    prefs.set_compression_level(level);
    prefs.set_format(Format::Legacy);
    prefs
}

#[test]
fn empty_input_is_magic_only() {
    let out = compress_to_vec(b"", &[], &legacy_prefs(9)).unwrap();
    assert_eq!(out, LEGACY_MAGIC);
}

#[test]
fn short_input_is_one_block_of_literals() {
    let out = compress_to_vec(b"hi", &[], &legacy_prefs(9)).unwrap();
    assert_eq!(out, [0x02, 0x21, 0x4C, 0x18, 3, 0, 0, 0, 0x20, b'h', b'i']);
}

#[test]
fn no_end_mark_follows_the_last_block() {
    let input = word_salad(20_000, 5);
    let out = compress_to_vec(&input, &[], &legacy_prefs(6)).unwrap();
    let size = u32::from_le_bytes([out[4], out[5], out[6], out[7]]) as usize;
    assert_eq!(out.len(), 4 + 4 + size);
    assert_eq!(decode_legacy(&out), input);
}

#[test]
fn blocks_above_eight_mib_are_independent() {
    let input = periodic((8 << 20) + 5_000);
    let out = compress_to_vec(&input, &[], &legacy_prefs(1)).unwrap();
    // decode_legacy decodes each block without history
    assert_eq!(decode_legacy(&out), input);

    let first = u32::from_le_bytes([out[4], out[5], out[6], out[7]]) as usize;
    let second_at = 8 + first;
    assert!(second_at + 4 < out.len(), "expected a second block");
    let second =
        u32::from_le_bytes([out[second_at], out[second_at + 1], out[second_at + 2], out[second_at + 3]]);
    // 5000 bytes of fresh history: at least the first phrase is literal.
    assert!(second > 80);
}

#[test]
fn rejects_level_zero_and_dictionaries() {
    let err = compress_to_vec(b"abc", &[], &legacy_prefs(0)).unwrap_err();
    assert!(matches!(err, CompressError::Config(ConfigError::LegacyUncompressed)));

    let err = compress_to_vec(b"abc", b"dictionary", &legacy_prefs(9)).unwrap_err();
    assert!(matches!(err, CompressError::Config(ConfigError::LegacyWithDictionary)));
}
