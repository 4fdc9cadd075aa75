// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The type dictionary consulted by primers.
//!
//! A dictionary knows, for each registered type, its label and its key. For
//! the "Primer" construct the key is the 16-byte block key written ahead of
//! an encoded primer. For items in a local set the key is usually the 2-byte
//! static tag the item is always written with.
//!
//! `TypeRegistry` is a small in-memory dictionary. `TypeRegistry::builtin()`
//! knows the primer key and a few common static tags, and
//! `TypeRegistry::global()` is a shared, read-only instance of it.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::PrimerError;
use crate::label::Label;
use crate::primer::Primer;

/// Dictionary name of the primer construct.
pub const PRIMER_NAME: &str = "Primer";

/// The label of the primer pack, also used as its block key.
pub const PRIMER_LABEL: Label = Label([
    0x06, 0x0e, 0x2b, 0x34, 0x02, 0x05, 0x01, 0x01,
    0x0d, 0x01, 0x02, 0x01, 0x01, 0x05, 0x01, 0x00,
]);

/// One registered type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictEntry {
    pub name: String,
    pub label: Label,
    /// The key this type is written with. Empty when it has none.
    pub key: SmallVec<[u8; 16]>,
}

impl DictEntry {
    /// An entry with an arbitrary key.
    pub fn new(name: &str, label: Label, key: &[u8]) -> DictEntry {
        return DictEntry {
            name: name.to_string(),
            label,
            key: SmallVec::from_slice(key),
        };
    }

    /// An entry written with a 2-byte static tag.
    pub fn with_tag(name: &str, label: Label, tag: u16) -> DictEntry {
        return DictEntry::new(name, label, &tag.to_be_bytes());
    }

    /// The static tag of this entry, if its key is exactly two bytes.
    pub fn static_tag(&self) -> Option<u16> {
        match self.key.as_slice() {
            &[hi, lo] => Some(((hi as u16) << 8) | lo as u16),
            _ => None,
        }
    }
}

/// Lookup service for registered types.
pub trait Dictionary {
    /// Find the type registered with this label.
    fn find_by_label(&self, label: &Label) -> Option<&DictEntry>;

    /// Find the type registered under this name.
    fn find_by_name(&self, name: &str) -> Option<&DictEntry>;

    /// Build an empty primer for use with this dictionary.
    fn make_primer(&self) -> Primer {
        return Primer::new();
    }

    /// The block key written ahead of an encoded primer.
    fn primer_key(&self) -> Result<&[u8], PrimerError> {
        return self
            .find_by_name(PRIMER_NAME)
            .map(|entry| entry.key.as_slice())
            .filter(|key| !key.is_empty())
            .ok_or(PrimerError::MissingDictionaryEntry { name: PRIMER_NAME });
    }
}

/// An in-memory dictionary indexed by label and by name.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    entries: Vec<DictEntry>,
    by_label: FxHashMap<Label, usize>,
    by_name: FxHashMap<String, usize>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> TypeRegistry {
        return TypeRegistry::default();
    }

    /// A registry holding the primer construct and common static tags.
    pub fn builtin() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register(DictEntry::new(PRIMER_NAME, PRIMER_LABEL, &PRIMER_LABEL.0));
        registry.register(DictEntry::with_tag(
            "InstanceUID",
            Label([
                0x06, 0x0e, 0x2b, 0x34, 0x01, 0x01, 0x01, 0x01,
                0x01, 0x01, 0x15, 0x02, 0x00, 0x00, 0x00, 0x00,
            ]),
            0x3c0a,
        ));
        registry.register(DictEntry::with_tag(
            "GenerationUID",
            Label([
                0x06, 0x0e, 0x2b, 0x34, 0x01, 0x01, 0x01, 0x02,
                0x05, 0x20, 0x07, 0x01, 0x08, 0x00, 0x00, 0x00,
            ]),
            0x0102,
        ));
        registry.register(DictEntry::with_tag(
            "LastModifiedDate",
            Label([
                0x06, 0x0e, 0x2b, 0x34, 0x01, 0x01, 0x01, 0x02,
                0x07, 0x02, 0x01, 0x10, 0x02, 0x04, 0x00, 0x00,
            ]),
            0x3b02,
        ));
        return registry;
    }

    /// The shared builtin registry, built on first use.
    pub fn global() -> &'static TypeRegistry {
        static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();
        return GLOBAL.get_or_init(TypeRegistry::builtin);
    }

    /// Register a type, replacing any entry with the same label or name.
    pub fn register(&mut self, entry: DictEntry) {
        let existing = self
            .by_label
            .get(&entry.label)
            .or_else(|| self.by_name.get(&entry.name))
            .copied();

        let index = match existing {
            Some(index) => {
                let old = &self.entries[index];
                self.by_label.remove(&old.label);
                self.by_name.remove(&old.name);
                index
            }
            None => {
                self.entries.push(entry.clone());
                self.entries.len() - 1
            }
        };

        // A replacement may collide with a second, different entry; that one
        // loses its index and is reachable only through `iter`.
        self.by_label.insert(entry.label, index);
        self.by_name.insert(entry.name.clone(), index);
        self.entries[index] = entry;
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DictEntry> {
        return self.entries.iter();
    }
}

impl Dictionary for TypeRegistry {
    fn find_by_label(&self, label: &Label) -> Option<&DictEntry> {
        return self.by_label.get(label).map(|&i| &self.entries[i]);
    }

    fn find_by_name(&self, name: &str) -> Option<&DictEntry> {
        return self.by_name.get(name).map(|&i| &self.entries[i]);
    }
}
