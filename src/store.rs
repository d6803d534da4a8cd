//! In-memory registry of stored highlights
//!
//! Persistence stays with the host: records serialize with serde and the
//! store takes a full collection back via [`HighlightStore::replace_all`].

use std::collections::BTreeMap;

use thiserror::Error;

use crate::geometry::PageNumber;
use crate::grouping::group_by_page;
use crate::highlight::{Comment, Highlight};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no highlight with id {0:?}")]
pub struct UnknownIdError(pub String);

/// Insertion-ordered highlight collection with id access.
///
/// A stored position never changes; [`HighlightStore::update_comment`] is the
/// only mutation an existing record supports.
#[derive(Debug, Default)]
pub struct HighlightStore {
    highlights: Vec<Highlight>,
}

impl HighlightStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a draft under the given id. Replaces an existing record with
    /// the same id.
    pub fn add(&mut self, id: impl Into<String>, draft: Highlight) -> &Highlight {
        let id = id.into();
        let highlight = draft.with_id(id.clone());

        match self.index_of(&id) {
            Some(idx) => {
                self.highlights[idx] = highlight;
                &self.highlights[idx]
            }
            None => {
                self.highlights.push(highlight);
                &self.highlights[self.highlights.len() - 1]
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Highlight> {
        self.index_of(id).map(|idx| &self.highlights[idx])
    }

    pub fn update_comment(&mut self, id: &str, comment: Comment) -> Result<(), UnknownIdError> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| UnknownIdError(id.to_string()))?;
        self.highlights[idx].comment = Some(comment);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Highlight, UnknownIdError> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| UnknownIdError(id.to_string()))?;
        Ok(self.highlights.remove(idx))
    }

    #[must_use]
    pub fn all(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Swap in a collection loaded by the host.
    pub fn replace_all(&mut self, highlights: Vec<Highlight>) {
        self.highlights = highlights;
    }

    pub fn clear(&mut self) {
        self.highlights.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.highlights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }

    /// Per-page render groups, with the ghost included when given.
    #[must_use]
    pub fn by_page(&self, transient: Option<&Highlight>) -> BTreeMap<PageNumber, Vec<Highlight>> {
        group_by_page(&self.highlights, transient)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.highlights
            .iter()
            .position(|h| h.id.as_deref() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ScaledRect;
    use crate::highlight::ScaledPosition;

    fn create_draft(page: PageNumber, text: &str) -> Highlight {
        let rect = ScaledRect {
            x1: 10.0,
            y1: 10.0,
            x2: 60.0,
            y2: 25.0,
            width: 612.0,
            height: 792.0,
            page_number: None,
        };
        Highlight::text(text, ScaledPosition::new(rect, vec![rect], page))
    }

    #[test]
    fn test_add_and_get() {
        let mut store = HighlightStore::new();
        store.add("h-1", create_draft(1, "first"));

        let stored = store.get("h-1").unwrap();
        assert_eq!(stored.id.as_deref(), Some("h-1"));
        assert!(!stored.is_ghost());
    }

    #[test]
    fn test_add_existing_id_replaces() {
        let mut store = HighlightStore::new();
        store.add("h-1", create_draft(1, "first"));
        store.add("h-1", create_draft(1, "second"));

        assert_eq!(store.len(), 1);
        match &store.get("h-1").unwrap().content {
            crate::highlight::HighlightContent::Text { text } => assert_eq!(text, "second"),
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn test_update_comment_keeps_position() {
        let mut store = HighlightStore::new();
        store.add("h-1", create_draft(2, "words"));
        let position_before = store.get("h-1").unwrap().position.clone();

        store
            .update_comment("h-1", Comment::new("note").with_emoji("📌"))
            .unwrap();

        let updated = store.get("h-1").unwrap();
        assert_eq!(updated.position, position_before);
        assert_eq!(updated.comment.as_ref().unwrap().text, "note");
    }

    #[test]
    fn test_update_comment_unknown_id_fails() {
        let mut store = HighlightStore::new();
        let err = store.update_comment("missing", Comment::new("note"));
        assert_eq!(err, Err(UnknownIdError("missing".to_string())));
    }

    #[test]
    fn test_remove_returns_the_record() {
        let mut store = HighlightStore::new();
        store.add("h-1", create_draft(1, "words"));

        let removed = store.remove("h-1").unwrap();
        assert_eq!(removed.id.as_deref(), Some("h-1"));
        assert!(store.is_empty());
        assert!(store.remove("h-1").is_err());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut store = HighlightStore::new();
        store.add("h-1", create_draft(3, "a"));
        store.add("h-2", create_draft(1, "b"));
        store.add("h-3", create_draft(2, "c"));

        let ids: Vec<_> = store.all().iter().map(|h| h.id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["h-1", "h-2", "h-3"]);
    }

    #[test]
    fn test_by_page_includes_the_ghost() {
        let mut store = HighlightStore::new();
        store.add("h-1", create_draft(1, "stored"));
        let ghost = create_draft(1, "pending");

        let grouped = store.by_page(Some(&ghost));
        assert_eq!(grouped[&1].len(), 2);
    }

    #[test]
    fn test_replace_all_swaps_the_collection() {
        let mut store = HighlightStore::new();
        store.add("h-1", create_draft(1, "old"));

        store.replace_all(vec![create_draft(2, "new").with_id("h-9")]);
        assert!(store.get("h-1").is_none());
        assert!(store.get("h-9").is_some());
    }
}
