//! Hash-indexed LZ77 byte-stream codec.
//!
//! [`compress::encode`] and [`decompress::decode`] are the only entry
//! points most callers need; [`types`] holds the wire-format primitives
//! both directions share.

pub mod compress;
pub mod decompress;
pub mod types;

pub use compress::{compress_bound, encode, EncodeError};
pub use decompress::{decode, peek_uncompressed_length, DecodeError};
