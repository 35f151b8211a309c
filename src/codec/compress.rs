//! Encoder half of the codec: `encode` and `compress_bound`.
//!
//! Translated from `c5` in the reference implementation. The encoder makes a
//! single forward pass over the input, looking up a hash-indexed history of
//! recent positions to find back-references, and falling back to literal
//! runs over stretches where no sufficiently long match is found.

use crate::codec::types::{read_u32, write_varint, BitWriter, HistoryIndex, ZHI_MASK, ZHI_MAX, ZLO_MASK};
use crate::config::{HASH_EVERY_N_BYTES, HISTORY_ASSOC, MAX_LITERALIZE, MIN_MATCH_LEN, PADDING};

/// Failure modes for [`encode`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The input is too large for its length to fit in the 4-byte stream
    /// header.
    #[error("input length {0} exceeds the maximum representable stream length")]
    InputTooLarge(usize),
}

/// Upper bound on the compressed size of an `inlen`-byte input.
///
/// Mirrors the reference implementation's `inlen * 1.1 + 16` allocation
/// heuristic: every 4-byte match command costs at most 1 tag byte plus two
/// small varints, and every literal costs at most a few bits plus its raw
/// bytes, so output never grows much past input size.
pub fn compress_bound(inlen: usize) -> usize {
    inlen + inlen / 10 + 16
}

/// Compresses `input`, returning a self-describing byte stream that
/// [`crate::codec::decompress::decode`] can invert.
///
/// The returned buffer always begins with a 4-byte big-endian length header
/// (see [`crate::codec::decompress::peek_uncompressed_length`]) naming
/// `input.len()`.
pub fn encode(input: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let inlen = input.len();
    if inlen > u32::MAX as usize {
        return Err(EncodeError::InputTooLarge(inlen));
    }

    if inlen == 0 {
        return Ok(vec![0, 0, 0, 0]);
    }

    // Internal padded copy so every fixed-width word read stays in bounds
    // without the caller needing to know about it.
    let mut padded_in = vec![0u8; inlen + PADDING];
    padded_in[..inlen].copy_from_slice(input);

    let mut out = vec![0u8; compress_bound(inlen) + PADDING];
    let mut outpos = 0usize;
    let mut inpos = 0usize;

    let mut history = HistoryIndex::new();
    let mut bits = BitWriter::new();

    out[0] = ((inlen >> 24) & 0xff) as u8;
    out[1] = ((inlen >> 16) & 0xff) as u8;
    out[2] = ((inlen >> 8) & 0xff) as u8;
    out[3] = (inlen & 0xff) as u8;
    outpos += 4;

    let row0 = HistoryIndex::row_of(&padded_in, inpos);
    history.insert(row0, inpos as u32);
    out[outpos] = padded_in[inpos];
    outpos += 1;
    inpos += 1;

    let mut literal_pos = 0usize;
    let mut literal_len = 0usize;
    let mut copy_pos = 0u32;

    while inpos < inlen {
        let (mut copy_len, mut found_pos) = (0usize, 0u32);

        let key = HistoryIndex::row_of(&padded_in, inpos);
        for slot in 0..HISTORY_ASSOC {
            let this_copy_pos = history.get(key, slot);
            if this_copy_pos as usize >= inpos {
                continue;
            }

            let max_copy_len = inlen - inpos;
            let mut this_copy_len = 0usize;

            while this_copy_len + 4 < max_copy_len
                && read_u32(&padded_in, this_copy_pos as usize + this_copy_len)
                    == read_u32(&padded_in, inpos + this_copy_len)
            {
                if this_copy_len & (HASH_EVERY_N_BYTES - 1) == 0 {
                    let row = HistoryIndex::row_of(&padded_in, inpos + this_copy_len);
                    history.insert(row, (inpos + this_copy_len) as u32);
                }
                this_copy_len += 4;
            }

            while this_copy_len < max_copy_len
                && padded_in[this_copy_pos as usize + this_copy_len] == padded_in[inpos + this_copy_len]
            {
                if this_copy_len & (HASH_EVERY_N_BYTES - 1) == 0 {
                    let row = HistoryIndex::row_of(&padded_in, inpos + this_copy_len);
                    history.insert(row, (inpos + this_copy_len) as u32);
                }
                this_copy_len += 1;
            }

            if this_copy_len > copy_len {
                copy_len = this_copy_len;
                found_pos = this_copy_pos;
            }
        }

        if copy_len >= MIN_MATCH_LEN {
            copy_pos = found_pos;
            if literal_len > 0 {
                bits.put_bit(&mut out, &mut outpos, 1);
                emit_literal(&mut out, &mut outpos, &padded_in, literal_pos, literal_len, &mut bits);
                literal_len = 0;
            } else {
                bits.put_bit(&mut out, &mut outpos, 0);
            }
            emit_copy(&mut out, &mut outpos, inpos, copy_pos, copy_len as u32);
            inpos += copy_len;
        } else {
            let mut literalize = 1 + (literal_len >> 3);
            if literalize > MAX_LITERALIZE {
                literalize = MAX_LITERALIZE;
            }
            if inpos + literalize >= inlen {
                literalize = inlen - inpos;
            }

            if literal_len == 0 {
                literal_pos = inpos;
            }

            let row = HistoryIndex::row_of(&padded_in, inpos);
            history.insert(row, inpos as u32);

            inpos += literalize;
            literal_len += literalize;
        }
    }

    if literal_len > 0 {
        bits.put_bit(&mut out, &mut outpos, 1);
        emit_literal(&mut out, &mut outpos, &padded_in, literal_pos, literal_len, &mut bits);
        // len == 0 means no bytes are actually copied, so `ago` is never
        // dereferenced by the decoder; pick 1 rather than carry over
        // whatever stale `copy_pos` the last real match left behind.
        emit_copy(&mut out, &mut outpos, inpos, (inpos as u32).wrapping_sub(1), 0);
    }

    bits.finish(&mut out);

    out.truncate(outpos);
    Ok(out)
}

/// Writes the length-prefixed literal run `input[pos..pos+len]` to `out`.
///
/// Equivalent to `c5_literal`: a 2-bit inline length (1..=3, or 3 meaning
/// "read a varint for the real length minus 3") followed by the raw bytes.
fn emit_literal(out: &mut [u8], outpos: &mut usize, input: &[u8], pos: usize, len: usize, bits: &mut BitWriter) {
    let c = (len - 1).min(3) as u32;
    bits.put_bits(out, outpos, c, 2);

    if len >= 4 {
        write_varint(out, outpos, (len - 3) as u32);
    }

    out[*outpos..*outpos + len].copy_from_slice(&input[pos..pos + len]);
    *outpos += len;
}

/// Writes a back-reference command: `copy_len` bytes, `ago = inpos -
/// copy_pos` positions back from the current output cursor.
///
/// Equivalent to `c5_copy`. Also used, with `copy_len == 0`, to flush a
/// trailing literal run at end of stream — the reference format requires
/// every literal to be followed by a copy command, even a no-op one, so the
/// bit stream never needs an explicit end marker.
fn emit_copy(out: &mut [u8], outpos: &mut usize, inpos: usize, copy_pos: u32, copy_len: u32) {
    let ago = (inpos as u32).wrapping_sub(copy_pos);

    // copy_len == 0 intentionally underflows here, exactly like the
    // reference: it forces the varint-overflow branch below, and the
    // decoder's matching wraparound (`varint + 15`) reconstructs 0.
    let z_low = (ago & ZLO_MASK as u32) as u8;
    if copy_len.wrapping_sub(1) < ZHI_MAX {
        out[*outpos] = z_low | ((copy_len.wrapping_sub(1) as u8) << 4);
        *outpos += 1;
    } else {
        out[*outpos] = z_low | ZHI_MASK;
        *outpos += 1;
        write_varint(out, outpos, copy_len.wrapping_sub(15));
    }

    write_varint(out, outpos, ago >> 4);
}
