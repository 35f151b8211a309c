use c5::{decode, encode, peek_uncompressed_length};
use proptest::prelude::*;

proptest! {
    #[test]
    fn round_trips_arbitrary_byte_sequences(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let compressed = encode(&data).unwrap();
        let decompressed = decode(&compressed).unwrap();
        prop_assert_eq!(decompressed, data);
    }

    #[test]
    fn header_always_reports_the_true_input_length(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let compressed = encode(&data).unwrap();
        prop_assert_eq!(peek_uncompressed_length(&compressed).unwrap() as usize, data.len());
    }

    #[test]
    fn low_entropy_bytes_still_round_trip(
        byte in any::<u8>(),
        len in 0usize..8192,
    ) {
        let data = vec![byte; len];
        let compressed = encode(&data).unwrap();
        let decompressed = decode(&compressed).unwrap();
        prop_assert_eq!(decompressed, data);
    }

    #[test]
    fn short_periodic_patterns_round_trip(
        period in 1usize..16,
        repeats in 1usize..400,
    ) {
        let unit: Vec<u8> = (0..period as u8).collect();
        let mut data = Vec::with_capacity(period * repeats);
        for _ in 0..repeats {
            data.extend_from_slice(&unit);
        }
        let compressed = encode(&data).unwrap();
        let decompressed = decode(&compressed).unwrap();
        prop_assert_eq!(decompressed, data);
    }
}
