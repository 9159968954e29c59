#![no_main]
use std::io::Read;

use libfuzzer_sys::fuzz_target;
use smallz4::{compress_to_vec, Prefs};

fuzz_target!(|data: &[u8]| {
    // First byte picks the level, the rest is the payload.
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let mut prefs = Prefs::new();
    prefs.set_compression_level(selector % 10);

    let compressed = compress_to_vec(payload, &[], &prefs)
        .expect("in-memory compression cannot fail for a valid level");

    let mut recovered = Vec::with_capacity(payload.len());
    lz4_flex::frame::FrameDecoder::new(&compressed[..])
        .read_to_end(&mut recovered)
        .unwrap_or_else(|e| {
            panic!(
                "frame round-trip: lz4_flex rejected our frame ({} bytes in, {} out): {}",
                payload.len(),
                compressed.len(),
                e
            )
        });

    assert_eq!(
        recovered, payload,
        "frame round-trip mismatch at level {}",
        prefs.level
    );
});
