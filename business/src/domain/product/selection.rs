use std::collections::HashSet;

use super::model::ProductId;

/// Checked-row tracking for bulk actions. Lives outside the view state:
/// re-filtering or re-sorting never touches the selection, only removal
/// from the full collection does (via [`SelectionSet::retain`]).
///
/// Selection is client-side state. The HTTP surface only ever sees its
/// end product, the id list posted to the batch delete endpoint; this
/// type is exported for clients that embed the business crate directly
/// and need the select-all and pruning rules ([`SelectionSet::toggle_all`]
/// pairs with [`visible_ids`](super::list_view::visible_ids)).
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<ProductId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    pub fn toggle(&mut self, id: ProductId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// The "select all" checkbox over the currently visible (filtered)
    /// ids: replaces the selection with that set, or clears everything
    /// when the visible set is already fully selected.
    pub fn toggle_all(&mut self, visible: &[ProductId]) {
        let all_selected =
            !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id));
        if all_selected {
            self.ids.clear();
        } else {
            self.ids = visible.iter().cloned().collect();
        }
    }

    /// Drops ids that no longer exist in the full collection.
    pub fn retain(&mut self, existing: &[ProductId]) {
        let existing: HashSet<&ProductId> = existing.iter().collect();
        self.ids.retain(|id| existing.contains(id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn should_toggle_individual_ids() {
        let mut selection = SelectionSet::new();
        selection.toggle(id("p1"));
        assert!(selection.is_selected(&id("p1")));
        selection.toggle(id("p1"));
        assert!(!selection.is_selected(&id("p1")));
    }

    #[test]
    fn should_select_all_over_visible_set_only() {
        let mut selection = SelectionSet::new();
        let visible = vec![id("p1"), id("p2")];
        selection.toggle_all(&visible);
        assert_eq!(selection.len(), 2);
        assert!(!selection.is_selected(&id("p3")));
    }

    #[test]
    fn should_clear_when_visible_set_already_selected() {
        let mut selection = SelectionSet::new();
        let visible = vec![id("p1"), id("p2")];
        selection.toggle_all(&visible);
        selection.toggle_all(&visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn should_replace_partial_selection_on_select_all() {
        let mut selection = SelectionSet::new();
        selection.toggle(id("p9"));
        let visible = vec![id("p1"), id("p2")];
        selection.toggle_all(&visible);
        assert_eq!(selection.len(), 2);
        assert!(!selection.is_selected(&id("p9")));
    }

    #[test]
    fn should_survive_refiltering_but_not_deletion() {
        let mut selection = SelectionSet::new();
        selection.toggle(id("p1"));
        selection.toggle(id("p2"));

        // The view re-filtered; nothing happens to the selection.
        assert_eq!(selection.len(), 2);

        // p2 was deleted from the collection.
        selection.retain(&[id("p1"), id("p3")]);
        assert!(selection.is_selected(&id("p1")));
        assert!(!selection.is_selected(&id("p2")));
    }

    #[test]
    fn should_not_select_anything_for_empty_visible_set() {
        let mut selection = SelectionSet::new();
        selection.toggle_all(&[]);
        assert!(selection.is_empty());
    }
}
