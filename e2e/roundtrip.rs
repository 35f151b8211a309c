//! End-to-end round-trip tests against the documented boundary scenarios.

use c5::{compress_bound, decode, encode, peek_uncompressed_length};

#[test]
fn s1_empty_input() {
    let compressed = encode(&[]).unwrap();
    assert_eq!(&compressed[..4], &[0, 0, 0, 0]);
    assert_eq!(peek_uncompressed_length(&compressed).unwrap(), 0);
    assert_eq!(decode(&compressed).unwrap(), Vec::<u8>::new());
}

#[test]
fn s2_single_byte() {
    let input = [0x41u8];
    let compressed = encode(&input).unwrap();
    assert_eq!(&compressed[..4], &[0, 0, 0, 1]);
    assert_eq!(compressed[4], 0x41);
    assert_eq!(decode(&compressed).unwrap(), input);
}

#[test]
fn s3_constant_run() {
    let input = vec![0x55u8; 1024];
    let compressed = encode(&input).unwrap();
    // A single seed byte plus a handful of command bytes should compress
    // a long constant run down to well under a hundred bytes.
    assert!(compressed.len() < 100, "compressed size was {}", compressed.len());
    assert_eq!(decode(&compressed).unwrap(), input);
}

#[test]
fn s4_incompressible_stays_within_expansion_bound() {
    let mut state: u64 = 0xDEAD_BEEF_CAFE_F00D;
    let input: Vec<u8> = (0..4096)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect();

    let compressed = encode(&input).unwrap();
    assert!(compressed.len() <= compress_bound(input.len()));
    assert_eq!(decode(&compressed).unwrap(), input);
}

#[test]
fn s5_repeated_phrase_compresses_via_back_references() {
    let phrase = b"the quick brown fox ";
    let mut input = Vec::new();
    for _ in 0..100 {
        input.extend_from_slice(phrase);
    }

    let compressed = encode(&input).unwrap();
    assert!(compressed.len() < input.len() / 4);
    assert_eq!(decode(&compressed).unwrap(), input);
}

#[test]
fn s6_periodic_short_range_exercises_overlap_copy() {
    let mut input = Vec::new();
    for _ in 0..256 {
        input.extend_from_slice(b"ABAB");
    }

    let compressed = encode(&input).unwrap();
    assert_eq!(decode(&compressed).unwrap(), input);
}

#[test]
fn encode_is_deterministic() {
    let input = b"repeat repeat repeat repeat repeat".to_vec();
    assert_eq!(encode(&input).unwrap(), encode(&input).unwrap());
}

#[test]
fn decode_emits_exactly_the_declared_length() {
    let input = b"a slightly longer message with some structure structure structure".to_vec();
    let compressed = encode(&input).unwrap();
    let decoded = decode(&compressed).unwrap();
    assert_eq!(decoded.len(), peek_uncompressed_length(&compressed).unwrap() as usize);
}
