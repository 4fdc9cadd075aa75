// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Primer - local-tag dictionaries for compact binary metadata.
//!
//! A primer maps 16-bit local tags to the 16-byte labels they stand for, so
//! a stream can refer to types cheaply and still be decoded without context.
//!
//! # Quick Start
//!
//! ```
//! use primer::dict::TypeRegistry;
//! use primer::label::Label;
//! use primer::primer::{Primer, Tag, encode, read_block};
//!
//! let dict = TypeRegistry::builtin();
//! let mut table = Primer::new();
//!
//! // Labels without a registered tag get dynamic tags from 0xffff down.
//! let tag = table.lookup(&dict, &Label([9; 16]), Tag::NONE).unwrap();
//! assert_eq!(tag, Tag(0xffff));
//!
//! // Write the primer block and read it back.
//! let mut out = Vec::new();
//! encode(&table, &dict, &mut out).unwrap();
//! let decoded = read_block(&out, &dict).unwrap();
//! assert_eq!(decoded.primer, table);
//! ```

pub mod ber;
pub mod dict;
pub mod error;
pub mod label;
pub mod primer;
