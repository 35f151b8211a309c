//! Decoder half of the codec: `decode` and `peek_uncompressed_length`.
//!
//! Translated from `uc5` in the reference implementation. The decoder makes
//! a single forward pass over the compressed stream, alternating literal
//! runs and back-reference copies as directed by one control bit per
//! command pair.

use crate::codec::types::{copy8_within, read_varint, BitReader, ZHI_MASK, ZLO_MASK};
use crate::config::PADDING;

/// Failure modes for [`decode`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The compressed stream ended in the middle of a command.
    #[error("compressed stream is truncated")]
    Truncated,
    /// A back-reference points further back than any byte produced so far.
    #[error("back-reference at output offset {outpos} reaches {ago} bytes back, past the start of the stream")]
    InvalidBackReference { outpos: usize, ago: u32 },
    /// The 4-byte header is present but the stream has fewer than 4 bytes.
    #[error("compressed stream is shorter than the 4-byte length header")]
    MissingHeader,
}

/// Reads the 4-byte big-endian length header without decompressing anything.
///
/// Equivalent to `uc5_length`. Callers typically use this to size the output
/// buffer before calling [`decode`], though `decode` recomputes it itself.
pub fn peek_uncompressed_length(data: &[u8]) -> Result<u32, DecodeError> {
    if data.len() < 4 {
        return Err(DecodeError::MissingHeader);
    }
    Ok(u32::from_be_bytes(data[0..4].try_into().unwrap()))
}

/// Decompresses a stream produced by [`crate::codec::compress::encode`].
pub fn decode(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let outlen = peek_uncompressed_length(data)? as usize;
    if outlen == 0 {
        return Ok(Vec::new());
    }

    let inlen = data.len();
    let mut padded_in = vec![0u8; inlen + PADDING];
    padded_in[..inlen].copy_from_slice(data);

    let mut out = vec![0u8; outlen + PADDING];
    let mut outpos = 0usize;
    let mut inpos = 4usize;
    let mut bits = BitReader::new();

    if inpos >= inlen {
        return Err(DecodeError::Truncated);
    }
    out[outpos] = padded_in[inpos];
    outpos += 1;
    inpos += 1;

    while inpos < inlen {
        let bit = bits
            .get_bit(&padded_in, &mut inpos, inlen)
            .ok_or(DecodeError::Truncated)?;

        if bit == 1 {
            decode_literal(&padded_in, &mut inpos, inlen, &mut out, &mut outpos, &mut bits)?;
        }
        decode_copy(&padded_in, &mut inpos, inlen, &mut out, &mut outpos)?;
    }

    if outpos != outlen {
        return Err(DecodeError::Truncated);
    }

    out.truncate(outlen);
    Ok(out)
}

/// Reads one literal-run command and appends its bytes to `out`.
///
/// Equivalent to `uc5_literal`.
fn decode_literal(
    buf: &[u8],
    inpos: &mut usize,
    limit: usize,
    out: &mut [u8],
    outpos: &mut usize,
    bits: &mut BitReader,
) -> Result<(), DecodeError> {
    let mut len = bits.get_bits(buf, inpos, limit, 2).ok_or(DecodeError::Truncated)? + 1;
    if len == 4 {
        len = read_varint(buf, inpos, limit).ok_or(DecodeError::Truncated)? + 3;
    }
    let len = len as usize;

    if *inpos + len > limit || *outpos + len > out.len() {
        return Err(DecodeError::Truncated);
    }
    out[*outpos..*outpos + len].copy_from_slice(&buf[*inpos..*inpos + len]);
    *inpos += len;
    *outpos += len;
    Ok(())
}

/// Reads one back-reference command and materializes it into `out`.
///
/// Equivalent to `uc5_copy`. Must tolerate `len == 0`, which the encoder
/// emits once at end of stream to flush a trailing literal run; the three
/// branches below all degenerate harmlessly to a no-op when `len == 0`.
fn decode_copy(
    buf: &[u8],
    inpos: &mut usize,
    limit: usize,
    out: &mut Vec<u8>,
    outpos: &mut usize,
) -> Result<(), DecodeError> {
    if *inpos >= limit {
        return Err(DecodeError::Truncated);
    }
    let z = buf[*inpos];
    *inpos += 1;

    let len: u32 = if z & ZHI_MASK == ZHI_MASK {
        read_varint(buf, inpos, limit).ok_or(DecodeError::Truncated)?.wrapping_add(15)
    } else {
        ((z >> 4) as u32) + 1
    };

    let ago_hi = read_varint(buf, inpos, limit).ok_or(DecodeError::Truncated)?;
    let ago = (ago_hi << 4) + (z & ZLO_MASK) as u32;

    let len = len as usize;
    if len == 0 {
        return Ok(());
    }

    if ago == 0 || ago as usize > *outpos {
        return Err(DecodeError::InvalidBackReference { outpos: *outpos, ago });
    }
    // +8 leaves room for the wide-copy branches' final overshooting chunk.
    if *outpos + len + 8 > out.len() {
        return Err(DecodeError::Truncated);
    }
    let offset = *outpos - ago as usize;

    if ago >= 8 {
        let mut i = 0;
        while i < len {
            copy8_within(out, *outpos + i, offset + i);
            i += 8;
        }
        *outpos += len;
        return Ok(());
    }

    if len >= 10 {
        let ago = ago as usize;
        out[*outpos] = out[offset];
        out[*outpos + 1] = out[offset + 1];

        let src2 = offset + (2 % ago);
        let b2 = [out[src2], out[src2 + 1]];
        out[*outpos + 2..*outpos + 4].copy_from_slice(&b2);

        let src4 = offset + (4 % ago);
        let b4: [u8; 4] = out[src4..src4 + 4].try_into().unwrap();
        out[*outpos + 4..*outpos + 8].copy_from_slice(&b4);

        let doffset = 8 % ago;
        let mut i = 0;
        let mut src = offset;
        while i < len {
            copy8_within(out, *outpos + i, src);
            src += doffset;
            i += 8;
        }

        *outpos += len;
        return Ok(());
    }

    // ago < 8 and len < 10: fall back to a sequential byte-by-byte copy,
    // which is the only safe way to reproduce a period-`ago` repeat when
    // the run is too short for the primed wide-copy trick above.
    let mut src = offset;
    for i in 0..len {
        out[*outpos + i] = out[src];
        src += 1;
    }
    *outpos += len;

    Ok(())
}
