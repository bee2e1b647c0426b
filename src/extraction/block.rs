//! The catalog entry produced by extraction.

use serde::Serialize;

use crate::config::ArgRole;

/// Translator-facing and provenance comments attached to a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlockComments {
    /// Translator notes, in insertion order, no duplicates.
    pub extracted: Vec<String>,
    /// `path:line` source locations. Duplicate-free; the merge engine keeps
    /// this sorted lexicographically.
    pub reference: Vec<String>,
}

/// One discovered translatable string.
///
/// `id` stays `None` until a traversal assigns one. Blocks without a usable
/// id never reach the output; the merge engine filters them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBlock {
    /// Disambiguates identical ids used in different meanings.
    pub context: String,
    pub id: Option<String>,
    /// Present only when a plural form was matched.
    pub plural_id: Option<String>,
    /// One empty slot per required plural form, filled in later by
    /// translators.
    pub translations: Vec<String>,
    pub comments: BlockComments,
}

impl Default for MessageBlock {
    fn default() -> Self {
        Self {
            context: String::new(),
            id: None,
            plural_id: None,
            translations: vec![String::new()],
            comments: BlockComments::default(),
        }
    }
}

impl MessageBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the block carries a non-blank id and may appear in output.
    pub fn has_translatable_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }

    /// Merge identity: two blocks fill the same catalog slot iff id and
    /// context are exactly equal. Plural state and comments are irrelevant.
    pub fn same_slot(&self, other: &MessageBlock) -> bool {
        self.id == other.id && self.context == other.context
    }

    /// Assign an extracted value to the field selected by `role`.
    pub fn assign(&mut self, role: ArgRole, value: String) {
        match role {
            ArgRole::Id => self.id = Some(value),
            ArgRole::PluralId => self.set_plural_id(value),
            ArgRole::Context => self.context = value,
            ArgRole::Comment => self.add_extracted_comment(value),
            ArgRole::Ignore => {}
        }
    }

    /// Setting a plural form widens the translation placeholders to two
    /// slots (singular + plural).
    pub fn set_plural_id(&mut self, plural_id: String) {
        self.plural_id = Some(plural_id);
        self.translations = vec![String::new(), String::new()];
    }

    /// Replace the id with element text content. Text children always win
    /// over an attribute-derived id; other attribute-derived fields survive.
    pub fn override_id(&mut self, text: &str) {
        self.id = Some(text.to_string());
    }

    pub fn add_extracted_comment(&mut self, comment: String) {
        if !self.comments.extracted.contains(&comment) {
            self.comments.extracted.push(comment);
        }
    }

    pub fn add_reference(&mut self, reference: String) {
        if !self.comments.reference.contains(&reference) {
            self.comments.reference.push(reference);
        }
    }
}
