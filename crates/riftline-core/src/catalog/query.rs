// ── Query engine ──
//
// One ordered pass over the store, AND-composing the text predicate with
// every active facet. O(n·f); catalogs hold tens of items, so no index.

use crate::catalog::selection::FilterState;
use crate::catalog::store::RecordStore;
use crate::catalog::{predicate, Record};

/// Evaluate a filter state against a store.
///
/// Returns the subsequence of records satisfying the search text AND every
/// active facet constraint, in original store order. An all-empty state
/// returns every record. Pure: no mutation, identical inputs give
/// identical output.
pub fn evaluate<'a, T: Record>(store: &'a RecordStore<T>, state: &FilterState) -> Vec<&'a T> {
    let all = store.all();
    evaluate_indices(store, state)
        .into_iter()
        .map(|index| &all[index])
        .collect()
}

/// Like [`evaluate`], but yields store indices instead of references.
///
/// The selection controller caches these across mutations; indices stay
/// valid because stores are immutable after load.
pub fn evaluate_indices<T: Record>(store: &RecordStore<T>, state: &FilterState) -> Vec<usize> {
    store
        .all()
        .iter()
        .enumerate()
        .filter(|(_, record)| predicate::text_match(*record, state.search_text()))
        .filter(|(_, record)| {
            state
                .active_facets()
                .iter()
                .all(|(facet, value)| predicate::facet_equals(*record, facet, value))
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::{champ, roster_store, Fixture};
    use crate::model::ItemId;
    use pretty_assertions::assert_eq;

    fn names(results: &[&Fixture]) -> Vec<String> {
        results.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn empty_state_returns_store_unchanged() {
        let store = roster_store();
        let state = FilterState::default();

        let results = evaluate(&store, &state);
        assert_eq!(names(&results), ["Ahri", "Garen", "Lux"]);
        assert_eq!(results.len(), store.len());
    }

    #[test]
    fn facet_only_keeps_matching_records_in_order() {
        let store = roster_store();
        let mut state = FilterState::default();
        state.set_facet("role", Some("Mage"));

        assert_eq!(names(&evaluate(&store, &state)), ["Ahri", "Lux"]);
    }

    #[test]
    fn search_only_matches_substring() {
        let store = roster_store();
        let mut state = FilterState::default();
        state.set_search_text("gar");

        assert_eq!(names(&evaluate(&store, &state)), ["Garen"]);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let store = roster_store();
        let mut state = FilterState::default();
        state.set_search_text("z");

        assert!(evaluate(&store, &state).is_empty());
    }

    #[test]
    fn search_and_facet_compose_with_and() {
        let store = roster_store();
        let mut state = FilterState::default();
        state.set_search_text("a"); // Ahri + Garen
        state.set_facet("role", Some("Mage")); // Ahri + Lux

        assert_eq!(names(&evaluate(&store, &state)), ["Ahri"]);
    }

    #[test]
    fn record_missing_an_active_facet_is_excluded() {
        let store = RecordStore::load(vec![
            champ(1, "Ahri", "Mage"),
            Fixture {
                id: ItemId::Num(2),
                name: "Shadow".into(),
                role: None,
            },
        ])
        .expect("unique ids");
        let mut state = FilterState::default();
        state.set_facet("role", Some("Mage"));

        assert_eq!(names(&evaluate(&store, &state)), ["Ahri"]);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let store = roster_store();
        let mut state = FilterState::default();
        state.set_search_text("a");
        state.set_facet("role", Some("Mage"));

        let first = names(&evaluate(&store, &state));
        let second = names(&evaluate(&store, &state));
        assert_eq!(first, second);
    }

    #[test]
    fn output_is_a_subsequence_of_the_store() {
        let store = roster_store();
        let mut state = FilterState::default();
        state.set_search_text("a");

        let all: Vec<String> = store.all().iter().map(|c| c.name.clone()).collect();
        let got = names(&evaluate(&store, &state));

        // Every result appears in store order with no duplicates.
        let mut cursor = 0;
        for name in &got {
            let pos = all[cursor..]
                .iter()
                .position(|n| n == name)
                .expect("result must come from the store, in order");
            cursor += pos + 1;
        }
    }
}
