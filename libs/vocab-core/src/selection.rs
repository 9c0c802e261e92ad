//! Which sets the player picked, and the word pool they produce.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::types::{Library, Word};

/// Tracks the chosen set ids.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectionStore {
    selected: BTreeSet<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a set in or out of the selection. Unknown ids are ignored.
    ///
    /// Returns whether the set is selected afterwards.
    pub fn toggle(&mut self, library: &Library, set_id: &str) -> bool {
        if !library.contains_set(set_id) {
            return false;
        }
        if !self.selected.remove(set_id) {
            self.selected.insert(set_id.to_string());
            return true;
        }
        false
    }

    pub fn select_all(&mut self, library: &Library) {
        self.selected = library.sets().iter().map(|set| set.id.clone()).collect();
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, set_id: &str) -> bool {
        self.selected.contains(set_id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids that still exist in `library`, in library order.
    pub fn selected_ids(&self, library: &Library) -> Vec<String> {
        library
            .sets()
            .iter()
            .filter(|set| self.is_selected(&set.id))
            .map(|set| set.id.clone())
            .collect()
    }

    /// Words of every selected set, in library order.
    pub fn active_pool(&self, library: &Library) -> Vec<Word> {
        library
            .sets()
            .iter()
            .filter(|set| self.is_selected(&set.id))
            .flat_map(|set| set.words.iter().cloned())
            .collect()
    }

    pub fn total_selected_words(&self, library: &Library) -> usize {
        library
            .sets()
            .iter()
            .filter(|set| self.is_selected(&set.id))
            .map(|set| set.words.len())
            .sum()
    }

    /// Drop ids that are not part of `library`, e.g. after a reload.
    pub fn retain_known(&mut self, library: &Library) {
        self.selected.retain(|id| library.contains_set(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::word;
    use crate::types::VocabSet;
    use pretty_assertions::assert_eq;

    fn library() -> Library {
        Library::new(vec![
            VocabSet {
                id: "b".to_string(),
                name: "B".to_string(),
                words: vec![word("b1", "bee"), word("b2", "bat")],
            },
            VocabSet {
                id: "a".to_string(),
                name: "A".to_string(),
                words: vec![word("a1", "ant")],
            },
        ])
    }

    #[test]
    fn toggle_adds_and_removes() {
        let library = library();
        let mut store = SelectionStore::new();

        assert!(store.toggle(&library, "a"));
        assert!(store.is_selected("a"));
        assert!(!store.toggle(&library, "a"));
        assert!(store.is_empty());
    }

    #[test]
    fn toggle_ignores_unknown_sets() {
        let library = library();
        let mut store = SelectionStore::new();

        assert!(!store.toggle(&library, "zzz"));
        assert!(store.is_empty());
    }

    #[test]
    fn pool_follows_library_order() {
        let library = library();
        let mut store = SelectionStore::new();
        store.toggle(&library, "a");
        store.toggle(&library, "b");

        let ids: Vec<String> = store.active_pool(&library).into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["b1", "b2", "a1"]);
        assert_eq!(store.selected_ids(&library), vec!["b", "a"]);
        assert_eq!(store.total_selected_words(&library), 3);
    }

    #[test]
    fn select_all_then_clear() {
        let library = library();
        let mut store = SelectionStore::new();

        store.select_all(&library);
        assert_eq!(store.total_selected_words(&library), 3);

        store.clear_all();
        assert!(store.is_empty());
        assert!(store.active_pool(&library).is_empty());
    }

    #[test]
    fn retain_known_drops_stale_ids() {
        let library = library();
        let mut store = SelectionStore::new();
        store.select_all(&library);

        let smaller = Library::new(vec![library.sets()[1].clone()]);
        store.retain_known(&smaller);

        assert!(store.is_selected("a"));
        assert!(!store.is_selected("b"));
    }
}
