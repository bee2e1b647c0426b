//! Deduplication of raw block lists into one entry per (id, context).

use super::block::MessageBlock;

/// Reduce a raw ordered block list into unique blocks keyed by
/// `(id, context)`, preserving first-seen order.
///
/// The fold builds a fresh list, so no output block ever aliases another.
/// Merging an already-merged list yields it unchanged.
pub fn merge_blocks(raw: Vec<MessageBlock>) -> Vec<MessageBlock> {
    let mut merged: Vec<MessageBlock> = Vec::new();

    for block in raw {
        if !block.has_translatable_id() {
            continue;
        }
        match merged.iter_mut().find(|existing| existing.same_slot(&block)) {
            Some(existing) => absorb(existing, block),
            None => merged.push(block),
        }
    }

    merged
}

/// Merge a duplicate into its canonical slot.
///
/// Extracted comments union in insertion order; references union and are
/// re-sorted. An incoming plural form overwrites the canonical one, so with
/// any number of conflicting occurrences the last one in raw order wins.
/// A singular duplicate never erases an established plural.
fn absorb(existing: &mut MessageBlock, incoming: MessageBlock) {
    for comment in incoming.comments.extracted {
        existing.add_extracted_comment(comment);
    }
    for reference in incoming.comments.reference {
        existing.add_reference(reference);
    }
    existing.comments.reference.sort();

    if incoming.plural_id.is_some() {
        existing.plural_id = incoming.plural_id;
        existing.translations = incoming.translations;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn block(id: &str) -> MessageBlock {
        MessageBlock {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn block_in_context(id: &str, context: &str) -> MessageBlock {
        MessageBlock {
            id: Some(id.to_string()),
            context: context.to_string(),
            ..Default::default()
        }
    }

    fn plural_block(id: &str, plural_id: &str) -> MessageBlock {
        let mut block = block(id);
        block.set_plural_id(plural_id.to_string());
        block
    }

    fn referenced_block(id: &str, reference: &str) -> MessageBlock {
        let mut block = block(id);
        block.add_reference(reference.to_string());
        block
    }

    #[test]
    fn test_null_and_blank_ids_are_dropped() {
        let raw = vec![
            MessageBlock::new(),
            block(""),
            block("   "),
            block("Hello"),
        ];
        let merged = merge_blocks(raw);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_duplicates_collapse_preserving_first_seen_order() {
        let raw = vec![block("B"), block("A"), block("B"), block("A")];
        let merged = merge_blocks(raw);
        let ids: Vec<_> = merged.iter().map(|b| b.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_merge_identity_includes_context() {
        let raw = vec![
            block_in_context("Open", "menu"),
            block_in_context("Open", "file"),
            block_in_context("Open", "menu"),
        ];
        let merged = merge_blocks(raw);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_plural_state_never_splits_an_entry() {
        let raw = vec![block("Item"), plural_block("Item", "Items")];
        let merged = merge_blocks(raw);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].plural_id.as_deref(), Some("Items"));
        assert_eq!(merged[0].translations, vec![String::new(), String::new()]);
    }

    #[test]
    fn test_last_plural_wins_across_three_occurrences() {
        let raw = vec![
            plural_block("Item", "first plural"),
            plural_block("Item", "second plural"),
            plural_block("Item", "third plural"),
        ];
        let merged = merge_blocks(raw);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].plural_id.as_deref(), Some("third plural"));
    }

    #[test]
    fn test_singular_duplicate_keeps_existing_plural() {
        let raw = vec![plural_block("Item", "Items"), block("Item")];
        let merged = merge_blocks(raw);
        assert_eq!(merged[0].plural_id.as_deref(), Some("Items"));
        assert_eq!(merged[0].translations, vec![String::new(), String::new()]);
    }

    #[test]
    fn test_references_union_sorted_and_deduplicated() {
        let raw = vec![
            referenced_block("Hi", "b.js:10"),
            referenced_block("Hi", "a.js:3"),
            referenced_block("Hi", "b.js:10"),
        ];
        let merged = merge_blocks(raw);
        assert_eq!(merged[0].comments.reference, vec!["a.js:3", "b.js:10"]);
    }

    #[test]
    fn test_extracted_comments_union_in_insertion_order() {
        let mut first = block("Hi");
        first.add_extracted_comment("greeting".to_string());
        let mut second = block("Hi");
        second.add_extracted_comment("shown on login".to_string());
        second.add_extracted_comment("greeting".to_string());

        let merged = merge_blocks(vec![first, second]);
        assert_eq!(
            merged[0].comments.extracted,
            vec!["greeting", "shown on login"]
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let raw = vec![
            referenced_block("Hi", "b.js:10"),
            referenced_block("Hi", "a.js:3"),
            plural_block("Item", "Items"),
            block_in_context("Open", "menu"),
        ];
        let once = merge_blocks(raw);
        let twice = merge_blocks(once.clone());
        assert_eq!(once, twice);
    }
}
