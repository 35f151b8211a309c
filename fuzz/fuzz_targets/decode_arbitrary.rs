#![no_main]
use libfuzzer_sys::fuzz_target;

// Feed arbitrary bytes through the decoder. Err results are expected and
// fine; what we verify is the absence of panics.
fuzz_target!(|data: &[u8]| {
    let _ = c5::decode(data);
});
