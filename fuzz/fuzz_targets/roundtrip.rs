#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = match c5::encode(data) {
        Ok(c) => c,
        Err(_) => return,
    };

    let recovered = c5::decode(&compressed).expect("decoding our own encoder output must never fail");

    assert_eq!(
        recovered,
        data,
        "round-trip mismatch: {} bytes compressed to {}, decoded back to {}",
        data.len(),
        compressed.len(),
        recovered.len()
    );
});
