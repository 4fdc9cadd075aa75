// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! BER length prefixes.
//!
//! Lengths below 128 use the one-byte short form. Longer lengths use the
//! long form: `0x80 | n` followed by `n` big-endian bytes, with `n` as small
//! as possible.

use smallvec::SmallVec;
use thiserror::Error;

/// Longest encoding of a `u64` length: one prefix byte and eight length bytes.
pub const MAX_BER_LEN: usize = 9;

/// Failure decoding a BER length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BerError {
    #[error("empty length field")]
    Empty,
    #[error("indefinite length is not allowed")]
    Indefinite,
    #[error("length field of {0} bytes does not fit in 64 bits")]
    TooLong(usize),
    #[error("length field truncated")]
    Truncated,
}

/// Encode a length in the shortest BER form.
pub fn encode_length(length: u64) -> SmallVec<[u8; MAX_BER_LEN]> {
    let mut out = SmallVec::new();
    if length < 0x80 {
        out.push(length as u8);
        return out;
    }

    let bytes = length.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    out.push(0x80 | (bytes.len() - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
    return out;
}

/// Decode a BER length, returning the length and the bytes it occupied.
pub fn decode_length(buf: &[u8]) -> Result<(u64, usize), BerError> {
    let first = *buf.first().ok_or(BerError::Empty)?;
    if first < 0x80 {
        return Ok((first as u64, 1));
    }

    let count = (first & 0x7f) as usize;
    if count == 0 {
        return Err(BerError::Indefinite);
    }
    if count > 8 {
        return Err(BerError::TooLong(count));
    }
    let field = buf.get(1..1 + count).ok_or(BerError::Truncated)?;

    let mut length = 0u64;
    for &byte in field {
        length = (length << 8) | byte as u64;
    }
    return Ok((length, 1 + count));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form() {
        assert_eq!(encode_length(0).as_slice(), &[0x00]);
        assert_eq!(encode_length(0x7f).as_slice(), &[0x7f]);
    }

    #[test]
    fn long_form_is_minimal() {
        assert_eq!(encode_length(0x80).as_slice(), &[0x81, 0x80]);
        assert_eq!(encode_length(0x1234).as_slice(), &[0x82, 0x12, 0x34]);
        assert_eq!(encode_length(u64::MAX).len(), MAX_BER_LEN);
    }

    #[test]
    fn decode_agrees_with_encode() {
        for length in [0u64, 1, 0x7f, 0x80, 0xff, 0x100, 0x10_0000, u64::MAX] {
            let encoded = encode_length(length);
            assert_eq!(decode_length(&encoded), Ok((length, encoded.len())));
        }
    }

    #[test]
    fn decode_accepts_padded_long_form() {
        // Fixed-width four-byte fields are common in the wild.
        assert_eq!(decode_length(&[0x83, 0x00, 0x00, 0x3e]), Ok((0x3e, 4)));
    }

    #[test]
    fn decode_rejects_malformed() {
        assert_eq!(decode_length(&[]), Err(BerError::Empty));
        assert_eq!(decode_length(&[0x80]), Err(BerError::Indefinite));
        assert_eq!(decode_length(&[0x89, 0, 0, 0, 0, 0, 0, 0, 0, 0]), Err(BerError::TooLong(9)));
        assert_eq!(decode_length(&[0x82, 0x01]), Err(BerError::Truncated));
    }
}
