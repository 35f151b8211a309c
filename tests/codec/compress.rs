use c5::{compress_bound, encode};

#[test]
fn header_spells_input_length_big_endian() {
    let input = vec![7u8; 300];
    let compressed = encode(&input).unwrap();
    let want = (300u32).to_be_bytes();
    assert_eq!(&compressed[..4], &want);
}

#[test]
fn compress_bound_matches_reference_heuristic() {
    assert_eq!(compress_bound(4096), 4521);
    assert_eq!(compress_bound(0), 16);
}

#[test]
fn never_exceeds_its_own_compress_bound() {
    for len in [0usize, 1, 2, 3, 4, 5, 63, 64, 65, 1000, 5000] {
        let input: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
        let compressed = encode(&input).unwrap();
        assert!(
            compressed.len() <= compress_bound(len) + 4,
            "len {} produced {} bytes",
            len,
            compressed.len()
        );
    }
}

#[test]
fn single_repeated_byte_degenerates_to_a_periodic_overlap_copy() {
    // ago == 1 exercises the short-overlap / periodic-replication branch in
    // the decoder for most of the run's length.
    let input = vec![b'z'; 2000];
    let compressed = encode(&input).unwrap();
    assert!(compressed.len() < 64);
}
