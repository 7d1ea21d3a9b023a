// ── Selection controller ──
//
// Owns the user-chosen filter parameters for one view and the store they
// apply to. Every setter is one state transition followed by exactly one
// re-evaluation; the cached match set is rebuilt before the setter
// returns, so readers never observe a half-updated state.

use indexmap::IndexMap;
use tracing::debug;

use crate::catalog::store::RecordStore;
use crate::catalog::{query, Record};
use crate::error::CoreError;

/// The current combination of search text and facet selections.
///
/// Default is the idle state: empty search, no facet constraints. A facet
/// absent from the map means "All" for that facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_text: String,
    active_facets: IndexMap<String, String>,
}

impl FilterState {
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn active_facets(&self) -> &IndexMap<String, String> {
        &self.active_facets
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Set or clear one facet constraint. `None` means "All".
    pub fn set_facet(&mut self, facet: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.active_facets.insert(facet.to_owned(), value.to_owned());
            }
            None => {
                self.active_facets.shift_remove(facet);
            }
        }
    }

    /// Restore the idle state.
    pub fn reset(&mut self) {
        self.search_text.clear();
        self.active_facets.clear();
    }

    /// True when no constraint is active.
    pub fn is_idle(&self) -> bool {
        self.search_text.is_empty() && self.active_facets.is_empty()
    }
}

/// Per-view filter controller: one store, one [`FilterState`], one cached
/// match set.
///
/// Created fresh when a view mounts and dropped when it unmounts; never
/// shared between views and never persisted.
#[derive(Debug)]
pub struct SelectionController<T: Record> {
    store: RecordStore<T>,
    state: FilterState,
    /// Indices into the store, in store order. Rebuilt on every mutation.
    matches: Vec<usize>,
}

impl<T: Record> SelectionController<T> {
    /// Take ownership of a store with the idle filter state (all records match).
    pub fn new(store: RecordStore<T>) -> Self {
        let mut controller = Self {
            store,
            state: FilterState::default(),
            matches: Vec::new(),
        };
        controller.recompute();
        controller
    }

    /// Replace the search text. Triggers one re-evaluation.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
        self.recompute();
    }

    /// Set or clear one facet constraint. Triggers one re-evaluation.
    ///
    /// Rejects facet names the record type does not declare, leaving the
    /// existing state untouched.
    pub fn set_facet(&mut self, facet: &str, value: Option<&str>) -> Result<(), CoreError> {
        if !T::facet_names().contains(&facet) {
            return Err(CoreError::unknown_facet(facet, T::facet_names()));
        }
        self.state.set_facet(facet, value);
        self.recompute();
        Ok(())
    }

    /// Restore the idle state. Triggers one re-evaluation.
    pub fn reset(&mut self) {
        self.state.reset();
        self.recompute();
    }

    /// The current filter parameters.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// The records matching the current state, in store order.
    pub fn results(&self) -> Vec<&T> {
        self.matches
            .iter()
            .map(|&index| &self.store.all()[index])
            .collect()
    }

    /// Number of matching records.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// The underlying store.
    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    fn recompute(&mut self) {
        self.matches = query::evaluate_indices(&self.store, &self.state);
        debug!(
            search = %self.state.search_text(),
            facets = self.state.active_facets().len(),
            matched = self.matches.len(),
            total = self.store.len(),
            "filter recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::{roster_store, Fixture};
    use pretty_assertions::assert_eq;

    fn names(controller: &SelectionController<Fixture>) -> Vec<String> {
        controller.results().iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn fresh_controller_matches_everything() {
        let controller = SelectionController::new(roster_store());
        assert!(controller.state().is_idle());
        assert_eq!(names(&controller), ["Ahri", "Garen", "Lux"]);
    }

    #[test]
    fn facet_selection_narrows_results() {
        let mut controller = SelectionController::new(roster_store());
        controller.set_facet("role", Some("Mage")).expect("known facet");
        assert_eq!(names(&controller), ["Ahri", "Lux"]);

        controller.set_facet("role", None).expect("known facet");
        assert_eq!(names(&controller), ["Ahri", "Garen", "Lux"]);
    }

    #[test]
    fn search_narrows_results() {
        let mut controller = SelectionController::new(roster_store());
        controller.set_search_text("gar");
        assert_eq!(names(&controller), ["Garen"]);
    }

    #[test]
    fn unknown_facet_is_rejected_without_corrupting_state() {
        let mut controller = SelectionController::new(roster_store());
        controller.set_facet("role", Some("Mage")).expect("known facet");
        let before = controller.state().clone();

        let err = controller
            .set_facet("alignment", Some("Chaotic"))
            .expect_err("unknown facet");
        assert!(matches!(err, CoreError::UnknownFacet { .. }));

        assert_eq!(controller.state(), &before);
        assert_eq!(names(&controller), ["Ahri", "Lux"]);
    }

    #[test]
    fn reset_restores_full_results() {
        let mut controller = SelectionController::new(roster_store());
        controller.set_search_text("gar");
        controller.set_facet("role", Some("Fighter")).expect("known facet");
        assert_eq!(names(&controller), ["Garen"]);

        controller.reset();
        assert!(controller.state().is_idle());
        assert_eq!(names(&controller), ["Ahri", "Garen", "Lux"]);
    }

    #[test]
    fn sequential_setters_match_sequential_application() {
        let mut controller = SelectionController::new(roster_store());
        controller.set_search_text("a");
        controller.set_facet("role", Some("Mage")).expect("known facet");
        controller.set_search_text("lu");
        assert_eq!(names(&controller), ["Lux"]);
        assert_eq!(controller.match_count(), 1);
    }
}
