// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The primer table: a bijection between local tags and labels.
//!
//! Streams refer to types by 16-bit tag rather than by 16-byte label. The
//! primer records which label each tag stands for, so the stream can still
//! be understood outside the context it was written in.
//!
//! The table supports:
//! - Tag to label: O(log n) (ordered map, so iteration is by tag)
//! - Label to tag: O(1) average case (hash map)
//! - Paired mutation only: `insert` and `remove` update both directions

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::label::Label;

/// A local tag standing in for a label within one stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Tag(pub u16);

impl Tag {
    /// Reserved value meaning "no tag" or "no suggestion".
    pub const NONE: Tag = Tag(0);

    /// Create a new tag.
    pub const fn new(value: u16) -> Tag {
        return Tag(value);
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        return self.0 == 0;
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [hi, lo] = self.0.to_be_bytes();
        return write!(f, "{:02x}.{:02x}", hi, lo);
    }
}

/// Where dynamic tags are taken from.
///
/// Tags are handed out downward from `dynamic_start` until the counter
/// drops below `dynamic_floor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimerConfig {
    pub dynamic_start: u16,
    pub dynamic_floor: u16,
}

impl PrimerConfig {
    /// The dynamic range of the wire format: `0x8000..=0xffff`.
    pub const DEFAULT: PrimerConfig = PrimerConfig {
        dynamic_start: 0xffff,
        dynamic_floor: 0x8000,
    };

    /// A config with the given inclusive dynamic range.
    pub const fn new(dynamic_start: u16, dynamic_floor: u16) -> PrimerConfig {
        return PrimerConfig { dynamic_start, dynamic_floor };
    }

    /// The floor actually used; tag 0 is never handed out.
    pub(crate) fn floor(&self) -> u32 {
        return self.dynamic_floor.max(1) as u32;
    }
}

impl Default for PrimerConfig {
    fn default() -> Self {
        return PrimerConfig::DEFAULT;
    }
}

/// A table mapping local tags to labels, and back.
#[derive(Clone, Debug)]
pub struct Primer {
    /// Map from tag to label.
    forward: BTreeMap<Tag, Label>,
    /// Map from label to tag. Always the exact inverse of `forward`.
    reverse: FxHashMap<Label, Tag>,
    /// Next candidate for a dynamic tag. May sit below the floor once the
    /// range is used up.
    pub(crate) next_dynamic: u32,
    config: PrimerConfig,
}

impl Default for Primer {
    fn default() -> Self {
        return Self::new();
    }
}

impl PartialEq for Primer {
    /// Two primers are equal when they hold the same bindings.
    fn eq(&self, other: &Self) -> bool {
        return self.forward == other.forward;
    }
}

impl Eq for Primer {}

impl Primer {
    /// Create a new empty primer with the default dynamic range.
    pub fn new() -> Primer {
        return Primer::with_config(PrimerConfig::DEFAULT);
    }

    /// Create a new empty primer with the given dynamic range.
    pub fn with_config(config: PrimerConfig) -> Primer {
        return Primer {
            forward: BTreeMap::new(),
            reverse: FxHashMap::default(),
            next_dynamic: config.dynamic_start as u32,
            config,
        };
    }

    /// Remove every binding. The dynamic counter is left where it is.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
    }

    /// Bind `tag` to `label`, returning the label `tag` was bound to before.
    ///
    /// A label is bound to at most one tag: if `label` was already bound
    /// under a different tag, that binding is removed.
    pub fn insert(&mut self, tag: Tag, label: Label) -> Option<Label> {
        if let Some(old_tag) = self.reverse.insert(label, tag) {
            if old_tag != tag {
                self.forward.remove(&old_tag);
            }
        }

        let previous = self.forward.insert(tag, label);
        if let Some(old_label) = previous {
            if old_label != label {
                self.reverse.remove(&old_label);
            }
        }
        return previous;
    }

    /// Remove the binding for `tag`, returning its label.
    pub fn remove(&mut self, tag: Tag) -> Option<Label> {
        let label = self.forward.remove(&tag)?;
        self.reverse.remove(&label);
        return Some(label);
    }

    /// Get the label bound to `tag`.
    #[inline]
    pub fn find(&self, tag: Tag) -> Option<Label> {
        return self.forward.get(&tag).copied();
    }

    /// Get the tag bound to `label`.
    #[inline]
    pub fn tag_of(&self, label: &Label) -> Option<Tag> {
        return self.reverse.get(label).copied();
    }

    /// Check if `tag` is bound.
    #[inline]
    pub fn contains(&self, tag: Tag) -> bool {
        return self.forward.contains_key(&tag);
    }

    /// Get the number of bindings.
    #[inline]
    pub fn len(&self) -> usize {
        return self.forward.len();
    }

    /// Check if the primer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.forward.is_empty();
    }

    /// Iterate over all (tag, label) pairs in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &Label)> {
        return self.forward.iter().map(|(&tag, label)| (tag, label));
    }

    /// The next dynamic tag that will be tried, if any remain.
    pub fn next_dynamic(&self) -> Option<Tag> {
        if self.next_dynamic < self.config.floor() {
            return None;
        }
        return Some(Tag(self.next_dynamic as u16));
    }

    /// The dynamic range this primer allocates from.
    pub fn config(&self) -> PrimerConfig {
        return self.config;
    }

    /// Check that `reverse` is the exact inverse of `forward`.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        if self.forward.len() != self.reverse.len() {
            return false;
        }
        return self
            .forward
            .iter()
            .all(|(tag, label)| self.reverse.get(label) == Some(tag));
    }
}

impl FromIterator<(Tag, Label)> for Primer {
    fn from_iter<I: IntoIterator<Item = (Tag, Label)>>(iter: I) -> Primer {
        let mut primer = Primer::new();
        for (tag, label) in iter {
            primer.insert(tag, label);
        }
        return primer;
    }
}
