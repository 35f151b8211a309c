//! Criterion benchmarks for the `c5`/`uc5` codec.
//!
//! Run with:
//!   cargo bench --bench codec

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Highly repetitive synthetic data, so throughput numbers reflect the codec
/// rather than the corpus.
fn synthetic_data(size: usize) -> Vec<u8> {
    const LOREM: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
        sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
        Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi \
        ut aliquip ex ea commodo consequat.";

    let mut out = Vec::with_capacity(size);
    while out.len() < size {
        let rem = size - out.len();
        let take = rem.min(LOREM.len());
        out.extend_from_slice(&LOREM[..take]);
    }
    out
}

fn random_data(size: usize) -> Vec<u8> {
    // A small linear congruential generator — deterministic and
    // dependency-free, good enough to produce incompressible bytes.
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut out = Vec::with_capacity(size);
    for _ in 0..size {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        out.push((state >> 56) as u8);
    }
    out
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_decode");

    for &size in &[16_384usize, 262_144] {
        let compressible = synthetic_data(size);
        let incompressible = random_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode_compressible", size), &compressible, |b, data| {
            b.iter(|| c5::encode(data).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("encode_incompressible", size), &incompressible, |b, data| {
            b.iter(|| c5::encode(data).unwrap())
        });

        let compressed = c5::encode(&compressible).unwrap();
        group.bench_with_input(BenchmarkId::new("decode_compressible", size), &compressed, |b, data| {
            b.iter(|| c5::decode(data).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode_decode);
criterion_main!(benches);
