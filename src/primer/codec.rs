// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Wire encoding of primers.
//!
//! A primer block is a 16-byte key, a BER length, and a value. The value is
//! a vector: an 8-byte header (entry count and entry size, both u32) followed
//! by one 18-byte entry per binding. Each entry is a u16 tag and the 16 label
//! bytes. Every integer is big-endian.
//!
//! Decoding is lenient where the layout still allows one reading of the
//! bytes: a mismatched header or a partial trailing entry produces a
//! `Diagnostic` and decoding carries on. A label bound under two tags keeps
//! only the later tag and is reported too. Only a buffer too short for the
//! header is rejected.

use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::ber;
use crate::dict::Dictionary;
use crate::error::Diagnostic;
use crate::error::PrimerError;
use crate::label::LABEL_LEN;
use crate::label::Label;
use crate::primer::table::Primer;
use crate::primer::table::Tag;

/// Size of the vector header: entry count and entry size.
pub const HEADER_LEN: usize = 8;

/// Size of one entry: a 2-byte tag and a 16-byte label.
pub const ENTRY_LEN: usize = 2 + LABEL_LEN;

/// The result of decoding a primer.
#[derive(Clone, Debug)]
pub struct Decoded {
    pub primer: Primer,
    /// Bytes actually read. May be less than the buffer length.
    pub consumed: usize,
    /// Recoverable problems found along the way.
    pub diagnostics: Vec<Diagnostic>,
}

fn read_u16(bytes: &[u8]) -> u16 {
    return u16::from_be_bytes([bytes[0], bytes[1]]);
}

fn read_u32(bytes: &[u8]) -> u32 {
    return u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}

impl Primer {
    /// Replace the contents of this primer with those of a primer value.
    ///
    /// Returns the number of bytes read and any recoverable problems. On
    /// error the primer is left empty.
    pub fn read_value(&mut self, buf: &[u8]) -> Result<(usize, Vec<Diagnostic>), PrimerError> {
        debug!(len = buf.len(), "reading primer");
        self.clear();

        if buf.len() < HEADER_LEN {
            return Err(PrimerError::TooSmall { len: buf.len() });
        }

        let mut diagnostics = Vec::new();
        let items = (buf.len() - HEADER_LEN) / ENTRY_LEN;
        let consumed = items * ENTRY_LEN + HEADER_LEN;
        if consumed != buf.len() {
            report(&mut diagnostics, Diagnostic::TrailingBytes { extra: buf.len() - consumed });
        }

        let claimed_items = read_u32(&buf[0..4]);
        let claimed_size = read_u32(&buf[4..8]);
        if claimed_size as usize != ENTRY_LEN {
            report(&mut diagnostics, Diagnostic::ItemSize { claimed: claimed_size });
        } else if claimed_items as usize != items {
            report(
                &mut diagnostics,
                Diagnostic::ItemCount { claimed: claimed_items, actual: items as u32 },
            );
        }

        for entry in buf[HEADER_LEN..consumed].chunks_exact(ENTRY_LEN) {
            let tag = Tag(read_u16(&entry[0..2]));
            let mut bytes = [0u8; LABEL_LEN];
            bytes.copy_from_slice(&entry[2..]);
            let label = Label(bytes);

            trace!("  {tag} -> {label}");
            if let Some(earlier) = self.tag_of(&label).filter(|&earlier| earlier != tag) {
                let duplicate = Diagnostic::DuplicateLabel { label, kept: tag, dropped: earlier };
                report(&mut diagnostics, duplicate);
            }
            self.insert(tag, label);
        }

        return Ok((consumed, diagnostics));
    }
}

/// Decode a primer value (the part after the key and length).
pub fn decode(buf: &[u8]) -> Result<Decoded, PrimerError> {
    let mut primer = Primer::new();
    let (consumed, diagnostics) = primer.read_value(buf)?;
    return Ok(Decoded { primer, consumed, diagnostics });
}

/// Decode a whole primer block: key, BER length, then value.
///
/// `consumed` covers the whole block as declared by its length, even when
/// the value itself had trailing bytes.
pub fn read_block<D: Dictionary + ?Sized>(buf: &[u8], dict: &D) -> Result<Decoded, PrimerError> {
    let key = dict.primer_key()?;
    if buf.len() < key.len() {
        return Err(PrimerError::Truncated { needed: key.len() as u64, available: buf.len() });
    }
    if &buf[..key.len()] != key {
        return Err(PrimerError::UnexpectedKey);
    }

    let (length, length_len) = ber::decode_length(&buf[key.len()..])?;
    let start = key.len() + length_len;
    let needed = (start as u64).checked_add(length).unwrap_or(u64::MAX);
    if needed > buf.len() as u64 {
        return Err(PrimerError::Truncated { needed, available: buf.len() });
    }

    let end = needed as usize;
    let mut decoded = decode(&buf[start..end])?;
    decoded.consumed = end;
    return Ok(decoded);
}

/// Append a primer value (vector header and entries), returning its size.
pub fn encode_value(primer: &Primer, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    out.reserve(primer.len() * ENTRY_LEN + HEADER_LEN);

    out.extend_from_slice(&(primer.len() as u32).to_be_bytes());
    out.extend_from_slice(&(ENTRY_LEN as u32).to_be_bytes());
    for (tag, label) in primer.iter() {
        out.extend_from_slice(&tag.0.to_be_bytes());
        out.extend_from_slice(label.as_bytes());
    }

    return out.len() - start;
}

/// Append a whole primer block (key, BER length, value).
///
/// Returns the number of bytes appended. Nothing is written if the
/// dictionary has no primer key.
pub fn encode<D: Dictionary + ?Sized>(
    primer: &Primer,
    dict: &D,
    out: &mut Vec<u8>,
) -> Result<usize, PrimerError> {
    let key = dict.primer_key()?;
    let value_len = primer.len() as u64 * ENTRY_LEN as u64 + HEADER_LEN as u64;
    let length = ber::encode_length(value_len);

    let start = out.len();
    out.reserve(key.len() + length.len() + value_len as usize);
    out.extend_from_slice(key);
    out.extend_from_slice(&length);
    encode_value(primer, out);

    return Ok(out.len() - start);
}
