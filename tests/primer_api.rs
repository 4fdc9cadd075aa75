// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Tests for the public primer API: a tagging pass, decoding, the static primer.

use primer::dict::{DictEntry, Dictionary, TypeRegistry};
use primer::error::{Diagnostic, PrimerError};
use primer::label::Label;
use primer::primer::{Primer, PrimerConfig, Tag, decode, encode, read_block, static_lookup};

// =============================================================================
// Helper functions
// =============================================================================

fn label(n: u8) -> Label {
    let mut bytes = [0x06, 0x0e, 0x2b, 0x34, 0x7f, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    bytes[15] = n;
    return Label(bytes);
}

/// A dictionary that builds primers with a narrow dynamic range.
struct NarrowDictionary {
    inner: TypeRegistry,
}

impl Dictionary for NarrowDictionary {
    fn find_by_label(&self, label: &Label) -> Option<&DictEntry> {
        return self.inner.find_by_label(label);
    }

    fn find_by_name(&self, name: &str) -> Option<&DictEntry> {
        return self.inner.find_by_name(name);
    }

    fn make_primer(&self) -> Primer {
        return Primer::with_config(PrimerConfig::new(0x8004, 0x8000));
    }
}

// =============================================================================
// Tagging pass
// =============================================================================

#[test]
fn tagging_pass_then_encode_then_decode() {
    let mut dict = TypeRegistry::builtin();
    dict.register(DictEntry::with_tag("Duration", label(1), 0x0202));
    let mut table = dict.make_primer();

    // Registered, dynamic, dynamic, repeat, suggestion honored.
    assert_eq!(table.lookup(&dict, &label(1), Tag::NONE), Ok(Tag(0x0202)));
    assert_eq!(table.lookup(&dict, &label(2), Tag::NONE), Ok(Tag(0xffff)));
    assert_eq!(table.lookup(&dict, &label(3), Tag::NONE), Ok(Tag(0xfffe)));
    assert_eq!(table.lookup(&dict, &label(2), Tag::NONE), Ok(Tag(0xffff)));
    assert_eq!(table.lookup(&dict, &label(3), Tag(0xfffe)), Ok(Tag(0xfffe)));
    assert_eq!(table.len(), 3);

    let mut out = Vec::new();
    let written = encode(&table, &dict, &mut out).unwrap();
    assert_eq!(written, 16 + 1 + 8 + 3 * 18);

    let decoded = read_block(&out, &dict).unwrap();
    assert_eq!(decoded.primer, table);
    assert_eq!(decoded.primer.tag_of(&label(3)), Some(Tag(0xfffe)));
}

#[test]
fn decoded_primer_continues_allocation() {
    let dict = TypeRegistry::new();
    let mut table = Primer::new();
    table.insert(Tag(0xffff), label(1));
    table.insert(Tag(0xfffe), label(2));

    let mut out = Vec::new();
    primer::primer::encode_value(&table, &mut out);
    let mut decoded = decode(&out).unwrap().primer;

    // The fresh table skips over tags already used in the stream.
    assert_eq!(decoded.lookup(&dict, &label(3), Tag::NONE), Ok(Tag(0xfffd)));
}

#[test]
fn exhaustion_through_custom_dictionary() {
    let dict = NarrowDictionary { inner: TypeRegistry::new() };
    let mut table = dict.make_primer();
    for n in 0..5 {
        assert!(table.lookup(&dict, &label(n), Tag::NONE).is_ok());
    }
    assert_eq!(table.lookup(&dict, &label(9), Tag::NONE), Err(PrimerError::Exhausted));
    assert_eq!(table.lookup_or_none(&dict, &label(9), Tag::NONE), Tag::NONE);
    // Known labels still resolve once the range is gone.
    assert_eq!(table.lookup(&dict, &label(0), Tag::NONE), Ok(Tag(0x8004)));
}

#[test]
fn encode_fails_without_primer_entry() {
    let dict = NarrowDictionary { inner: TypeRegistry::new() };
    let mut out = vec![1, 2, 3];
    let result = encode(&Primer::new(), &dict, &mut out);

    assert_eq!(result, Err(PrimerError::MissingDictionaryEntry { name: "Primer" }));
    assert_eq!(out, vec![1, 2, 3]);
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn decode_clamps_to_whole_entries() {
    let mut buf = vec![0, 0, 0, 3, 0, 0, 0, 18];
    for n in 1..=3u8 {
        buf.extend_from_slice(&[0x80, n]);
        buf.extend_from_slice(&label(n).0);
    }
    buf.extend_from_slice(&[1, 2, 3, 4, 5]);

    let decoded = decode(&buf).unwrap();
    assert_eq!(decoded.primer.len(), 3);
    assert_eq!(decoded.consumed, 8 + 18 * 3);
    assert_eq!(decoded.diagnostics, vec![Diagnostic::TrailingBytes { extra: 5 }]);
    assert_eq!(decoded.primer.find(Tag(0x8002)), Some(label(2)));
}

#[test]
fn decode_rejects_seven_bytes() {
    let mut table = Primer::new();
    table.insert(Tag(1), label(1));

    let result = table.read_value(&[0u8; 7]);
    assert_eq!(result, Err(PrimerError::TooSmall { len: 7 }));
    assert!(table.is_empty());
}

#[test]
fn diagnostics_render_readably() {
    let text = Diagnostic::ItemCount { claimed: 4, actual: 3 }.to_string();
    assert_eq!(text, "malformed vector header: 3 entries present, header claims 4");
}

// =============================================================================
// Static primer
// =============================================================================

#[test]
fn static_lookup_allocates_dynamic_tags() {
    let a = static_lookup(&label(101), Tag::NONE).unwrap();
    let b = static_lookup(&label(102), Tag::NONE).unwrap();

    assert!(a.0 >= 0x8000 && b.0 >= 0x8000);
    assert_ne!(a, b);
    assert_eq!(static_lookup(&label(101), b), Ok(a));
    assert_eq!(static_lookup(&label(101), a), Ok(a));
}
