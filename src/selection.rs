//! Matches picked for report generation.
//!
//! Ids are only meaningful for the roster that assigned them, so a selection has to be cleared
//! whenever a new roster is loaded.

use indexmap::IndexSet;

use crate::matcher::MatchView;

/// A set of selected match ids, iterated in the order they were selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: IndexSet<u32>,
}

impl Selection {
    /// An empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id`
    pub fn select(&mut self, id: u32) {
        self.ids.insert(id);
    }

    /// Removes `id`
    pub fn deselect(&mut self, id: u32) {
        self.ids.shift_remove(&id);
    }

    /// Selects or deselects `id`
    pub fn set(&mut self, id: u32, selected: bool) {
        if selected {
            self.select(id);
        } else {
            self.deselect(id);
        }
    }

    /// Flips `id`, returning whether it is selected afterwards
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.shift_remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Whether `id` is selected
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The selected ids, oldest selection first
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    /// Drops everything
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Adds every match listed in `view`
    pub fn select_all(&mut self, view: &MatchView) {
        self.ids.extend(view.matches.iter().map(|m| m.id));
        trace!("selection: {} after select all", self.ids.len());
    }

    /// With a query active, removes only the matches listed in `view`; otherwise clears everything
    pub fn select_none(&mut self, view: &MatchView) {
        if view.is_filtered() {
            for record in &view.matches {
                self.ids.shift_remove(&record.id);
            }
        } else {
            self.ids.clear();
        }
        trace!("selection: {} after select none", self.ids.len());
    }
}

impl FromIterator<u32> for Selection {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixture::Match;
    use crate::matcher::{ViewState, view};
    use crate::roster::Roster;

    fn roster() -> Roster {
        Roster::new(["Rot", "Blau", "Rot II"].map(|team| Match {
            team1: Some(team.into()),
            ..Default::default()
        }))
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle(3));
        assert!(selection.contains(3));
        assert!(!selection.toggle(3));
        assert!(selection.is_empty());
        selection.set(2, true);
        selection.set(1, true);
        selection.set(2, false);
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_keeps_selection_order() {
        let mut selection = Selection::new();
        for id in [7, 2, 9, 4] {
            selection.select(id);
        }
        selection.select(2);
        selection.deselect(9);
        selection.toggle(1);
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![7, 2, 4, 1]);
    }

    #[test]
    fn test_select_none_filtered_keeps_hidden() {
        let roster = roster();
        let mut selection = Selection::new();
        selection.select_all(&view(&roster, &ViewState::default()));
        assert_eq!(selection.len(), 3);

        let filtered = view(&roster, &ViewState::default().with_query("rot"));
        selection.select_none(&filtered);
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_select_none_unfiltered_clears() {
        let roster = roster();
        let mut selection: Selection = [1, 2, 7].into_iter().collect();
        selection.select_none(&view(&roster, &ViewState::default()));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_filtered_adds() {
        let roster = roster();
        let mut selection: Selection = [2].into_iter().collect();
        selection.select_all(&view(&roster, &ViewState::default().with_query("ii")));
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec![2, 3]);
    }
}
