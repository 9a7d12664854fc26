//! Selection tracking by record key.

use std::collections::HashSet;
use std::hash::Hash;

/// Selection mode for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    #[default]
    None,
    /// Single row selection.
    Single,
    /// Multiple rows can be selected.
    Multi,
}

/// Tracks selected rows by their keys.
///
/// The selection is global across pages: a key selected on one page stays
/// selected while the user navigates elsewhere. [`Selection::retain`]
/// enforces that the set never references a key outside the dataset.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    pub mode: SelectionMode,
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new(SelectionMode::None)
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection in the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// Toggle selection of a key. Returns `true` if the selection changed.
    pub fn toggle(&mut self, key: K) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if self.selected.contains(&key) {
                    self.selected.clear();
                } else {
                    self.selected.clear();
                    self.selected.insert(key);
                }
                true
            }
            SelectionMode::Multi => {
                if !self.selected.remove(&key) {
                    self.selected.insert(key);
                }
                true
            }
        }
    }

    /// Select every key in `keys`. Returns `true` if any was newly added.
    ///
    /// Only meaningful in `Multi` mode; a no-op otherwise.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = K>) -> bool {
        if self.mode != SelectionMode::Multi {
            return false;
        }
        let mut changed = false;
        for key in keys {
            changed |= self.selected.insert(key);
        }
        changed
    }

    /// Deselect every key in `keys`. Returns `true` if any was removed.
    pub fn deselect_all(&mut self, keys: impl IntoIterator<Item = K>) -> bool {
        let mut changed = false;
        for key in keys {
            changed |= self.selected.remove(&key);
        }
        changed
    }

    /// Drop selected keys not accepted by `is_valid`.
    /// Returns `true` if any key was dropped.
    pub fn retain(&mut self, is_valid: impl Fn(&K) -> bool) -> bool {
        let before = self.selected.len();
        self.selected.retain(|key| is_valid(key));
        self.selected.len() != before
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Check if every key in `keys` is selected. True for an empty iterator.
    pub fn contains_all<'a>(&self, keys: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        keys.into_iter().all(|key| self.selected.contains(key))
    }

    /// Clear all selections. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had = !self.selected.is_empty();
        self.selected.clear();
        had
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate over the selected keys (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }
}
