// config.rs — Compile-time configuration constants.
// Migrated from the compile-time knobs documented at the top of c5.c:
// HASH_EVERY_N_BYTES, MAX_LITERALIZE, HISTORY_SIZE_BITS, HISTORY_ASSOC.
//
// These values are load-bearing for the exact byte sequence a given input
// compresses to, but not for round-trip correctness: any decoder built
// against the wire format in `crate::codec` can decode output produced with
// different values of these knobs. They are grouped here, Rust-const style,
// rather than passed as runtime parameters, matching how the reference
// implementation wires them in as preprocessor constants.

/// Number of rows in the encoder's history index. Must be a power of two and
/// not exceed `2^16` (the hash only mixes enough entropy for a 16-bit row
/// index). Snappy, which this codec's hash function is borrowed from, uses
/// the same default.
pub const HISTORY_SIZE_BITS: u32 = 14;

/// Row count derived from [`HISTORY_SIZE_BITS`]. Equivalent to `HISTORY_SIZE`.
pub const HISTORY_SIZE: usize = 1 << HISTORY_SIZE_BITS;

/// Associativity of the history index: how many recent positions are kept
/// per row before round-robin eviction. `1` (direct-mapped) is the reference
/// value; raising it trades CPU for a higher chance of finding a match.
pub const HISTORY_ASSOC: usize = 1;

/// Multiplicative hash constant applied to the 4-byte fingerprint read at
/// each candidate input position. Borrowed from Snappy; chosen so the upper
/// bits of the product mix the fingerprint's low three bytes acceptably.
pub const HASH_MULTIPLIER: u32 = 0x1E35_A7BD;

/// Frequency, in bytes, at which the encoder opportunistically inserts
/// intermediate positions into the history index while extending a match or
/// skimming an incompressible run. Must be a power of two.
pub const HASH_EVERY_N_BYTES: usize = 32;

/// Upper bound on the literalize stride used while skimming apparently
/// incompressible input (see [`crate::codec::compress`]).
pub const MAX_LITERALIZE: usize = 32;

/// Minimum match length the encoder will prefer over literalizing.
pub const MIN_MATCH_LEN: usize = 4;

/// Bytes of trailing, addressable (but not necessarily meaningful) slack
/// every input and output buffer handed to [`crate::codec`] must carry past
/// its logical length. Required so the wide-word match extension, the
/// periodic-overlap copy, and the literal/copy byte copies never need a
/// bounds check on every iteration.
pub const PADDING: usize = 64;
