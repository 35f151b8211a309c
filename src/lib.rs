//! Hash-indexed LZ77 byte-stream codec — the `c5`/`uc5` compressor pair.
//!
//! The two entry points most callers need are [`encode`] and [`decode`];
//! [`codec`] also exposes the lower-level wire-format building blocks for
//! callers assembling their own framing.

pub mod cli;
pub mod codec;
pub mod config;
pub mod file;

pub use codec::{compress_bound, decode, encode, peek_uncompressed_length, DecodeError, EncodeError};
pub use config::PADDING;
