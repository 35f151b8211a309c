use c5::{decode, encode, peek_uncompressed_length, DecodeError};

#[test]
fn peek_length_does_not_require_the_rest_of_the_stream() {
    let compressed = encode(b"any payload here").unwrap();
    assert_eq!(peek_uncompressed_length(&compressed[..4]).unwrap(), 17);
}

#[test]
fn rejects_a_stream_shorter_than_the_header() {
    assert!(matches!(peek_uncompressed_length(&[1, 2, 3]), Err(DecodeError::MissingHeader)));
}

#[test]
fn rejects_truncated_commands_without_panicking() {
    let compressed = encode(&vec![b'a'; 500]).unwrap();
    for cut in [5, compressed.len() / 2, compressed.len() - 1] {
        let truncated = &compressed[..cut];
        // Must either fail cleanly or (rarely, if truncation happened to
        // land on a command boundary with a now-wrong header) still not
        // panic; either way this must never read out of bounds.
        let _ = decode(truncated);
    }
}

#[test]
fn rejects_out_of_range_back_reference() {
    // A 5-byte input, header says 1 uncompressed byte, first byte 'a', then
    // a tag byte encoding a copy of len=1 with ago so large it points before
    // the start of output.
    let mut bogus = vec![0u8, 0, 0, 2, b'a'];
    // tag: high nibble 0 -> len=1, low nibble 0xF -> ago low bits
    bogus.push(0x0F);
    // varint for ago high bits: a large value so ago far exceeds outpos (1)
    bogus.push(0xFF);
    bogus.push(0x7F);

    let result = decode(&bogus);
    assert!(matches!(result, Err(DecodeError::InvalidBackReference { .. }) | Err(DecodeError::Truncated)));
}

#[test]
fn zero_length_input_round_trips_through_the_wire_format() {
    let compressed = encode(&[]).unwrap();
    assert_eq!(compressed, vec![0u8, 0, 0, 0]);
    assert_eq!(decode(&compressed).unwrap(), Vec::<u8>::new());
}
