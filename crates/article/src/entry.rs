//! Identity-bearing wrappers around blocks.
//!
//! The renderer diffs successive versions of an article by entry identifier. Identifiers are
//! minted whenever an entry is built (including on every decode) and never written to JSON, so
//! the same document decoded twice yields entries with different identifiers.

use crate::{ContentBlock, HeaderBlock};
use folio_uuid::EntryId;

/// A block paired with an opaque, freshly minted identifier.
///
/// Equality compares identifier and block, so two entries built from identical blocks are
/// different objects. Use [`Entry::same_block`] to compare payloads only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<T> {
    id: EntryId,
    block: T,
}

pub type HeaderEntry = Entry<HeaderBlock>;
pub type ContentEntry = Entry<ContentBlock>;

impl<T> Entry<T> {
    /// Wrap `block`, minting a new identifier.
    pub fn new(block: T) -> Self {
        Self {
            id: EntryId::new(),
            block,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn block(&self) -> &T {
        &self.block
    }

    pub fn into_block(self) -> T {
        self.block
    }
}

impl<T: PartialEq> Entry<T> {
    /// Compare payloads, ignoring identifiers.
    pub fn same_block(&self, other: &Self) -> bool {
        self.block == other.block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_blocks_get_distinct_ids() {
        let first = ContentEntry::new(ContentBlock::Body("Hello".into()));
        let second = ContentEntry::new(ContentBlock::Body("Hello".into()));

        assert_ne!(first.id(), second.id());
        assert_ne!(first, second);
        assert!(first.same_block(&second));
    }

    #[test]
    fn identical_blocks_encode_identically() {
        let first = ContentEntry::new(ContentBlock::Divider);
        let second = ContentEntry::new(ContentBlock::Divider);

        assert_eq!(
            first.block().to_json().expect("encode"),
            second.block().to_json().expect("encode")
        );
    }

    #[test]
    fn id_is_stable_for_the_lifetime_of_the_entry() {
        let entry = HeaderEntry::new(HeaderBlock::Subtitle("Notes".into()));
        let id = entry.id();
        let cloned = entry.clone();

        assert_eq!(entry.id(), id);
        assert_eq!(cloned.id(), id);
        assert_eq!(cloned.into_block(), HeaderBlock::Subtitle("Notes".into()));
    }
}
