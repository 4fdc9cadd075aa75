// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Choosing the tag a label is written with.
//!
//! `Primer::lookup` tries, in order:
//!
//! 1. the caller's suggested tag, if it is already bound to this label;
//! 2. the tag this label was given earlier;
//! 3. the static tag registered for the label in the dictionary, unless
//!    another label already holds it;
//! 4. a fresh dynamic tag, counting down from the top of the dynamic range.
//!
//! Steps 3 and 4 record the new binding in the primer.

use tracing::warn;

use crate::dict::Dictionary;
use crate::error::PrimerError;
use crate::label::Label;
use crate::primer::table::Primer;
use crate::primer::table::Tag;

impl Primer {
    /// Determine the tag to use for `label`, adding it to the primer if new.
    ///
    /// Pass `Tag::NONE` when there is no suggestion. A suggested tag is only
    /// used when it is already bound to `label`; one bound to another label
    /// is skipped without error. A suggested tag that is not bound at all is
    /// also skipped rather than reserved.
    pub fn lookup<D: Dictionary + ?Sized>(
        &mut self,
        dict: &D,
        label: &Label,
        suggested: Tag,
    ) -> Result<Tag, PrimerError> {
        if !suggested.is_none() && self.find(suggested).as_ref() == Some(label) {
            return Ok(suggested);
        }

        if let Some(tag) = self.tag_of(label) {
            return Ok(tag);
        }

        // A registered tag already bound to some other label is left alone.
        let registered = dict
            .find_by_label(label)
            .and_then(|entry| entry.static_tag())
            .map(Tag)
            .filter(|&tag| !tag.is_none() && !self.contains(tag));
        if let Some(tag) = registered {
            self.insert(tag, *label);
            return Ok(tag);
        }

        return self.allocate_dynamic(label);
    }

    /// Like `lookup`, but returns `Tag::NONE` when no tag could be assigned.
    pub fn lookup_or_none<D: Dictionary + ?Sized>(
        &mut self,
        dict: &D,
        label: &Label,
        suggested: Tag,
    ) -> Tag {
        return self.lookup(dict, label, suggested).unwrap_or(Tag::NONE);
    }

    /// Bind `label` to the highest free tag at or below the dynamic counter.
    ///
    /// The scan is linear. Values skipped because they were taken are not
    /// revisited on later calls.
    fn allocate_dynamic(&mut self, label: &Label) -> Result<Tag, PrimerError> {
        let floor = self.config().floor();
        while self.next_dynamic >= floor {
            let tag = Tag(self.next_dynamic as u16);
            self.next_dynamic -= 1;
            if !self.contains(tag) {
                self.insert(tag, *label);
                return Ok(tag);
            }
        }

        warn!(%label, "run out of dynamic tags");
        return Err(PrimerError::Exhausted);
    }
}
