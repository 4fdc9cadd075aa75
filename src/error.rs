// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Errors and non-fatal diagnostics for primer decoding, encoding and lookup.

use thiserror::Error;

use crate::ber::BerError;
use crate::label::Label;
use crate::primer::Tag;

/// A failure that stops the current primer operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimerError {
    /// The buffer cannot hold the 8-byte vector header.
    #[error("primer too small: {len} bytes, must be at least 8")]
    TooSmall { len: usize },

    /// A construct the primer needs is not registered in the dictionary.
    #[error("dictionary has no usable entry for {name:?}")]
    MissingDictionaryEntry { name: &'static str },

    /// Every tag in the dynamic range is already in use.
    #[error("no dynamic tags remain")]
    Exhausted,

    /// The block key is not the primer key.
    #[error("block key is not the primer key")]
    UnexpectedKey,

    /// The block declares more payload than the buffer holds.
    #[error("primer block truncated: need {needed} bytes, have {available}")]
    Truncated { needed: u64, available: usize },

    /// The block length prefix is malformed.
    #[error("bad primer length: {0}")]
    Ber(#[from] BerError),
}

/// A recoverable inconsistency found while decoding.
///
/// Decoding carries on using the layout derived from the buffer size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The payload is not a whole number of 18-byte entries.
    #[error("primer is not a whole number of 18-byte entries: {extra} trailing bytes ignored")]
    TrailingBytes { extra: usize },

    /// The vector header declares an entry size other than 18.
    #[error("malformed vector header: entry size is 18, header claims {claimed}")]
    ItemSize { claimed: u32 },

    /// The vector header declares a different number of entries.
    #[error("malformed vector header: {actual} entries present, header claims {claimed}")]
    ItemCount { claimed: u32, actual: u32 },

    /// The same label appears under two tags. Only the later tag is kept.
    #[error("label {label} bound under both {dropped} and {kept}: keeping {kept}")]
    DuplicateLabel { label: Label, kept: Tag, dropped: Tag },
}
