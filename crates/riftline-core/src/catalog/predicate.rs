// ── Filter predicates ──
//
// Named, side-effect-free boolean tests over (record, params). Keeping
// them as free functions lets the query engine compose any number of
// facets without special cases, and lets each rule be tested without a
// store.

use crate::catalog::Record;

/// Case-insensitive substring test across a record's search fields.
///
/// An empty needle matches everything. Lower-casing is Unicode-aware
/// (`str::to_lowercase`); there is no tokenization and no fuzzy matching.
pub fn text_match<T: Record>(record: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact, case-sensitive equality against one facet of a record.
///
/// A record that does not carry the facet never satisfies the constraint.
/// "No constraint" is expressed by not calling this predicate at all, not
/// by a sentinel value.
pub fn facet_equals<T: Record>(record: &T, facet: &str, value: &str) -> bool {
    record.facet(facet).is_some_and(|held| held == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::{champ, Fixture};
    use crate::model::ItemId;

    #[test]
    fn empty_needle_matches_everything() {
        assert!(text_match(&champ(1, "Ahri", "Mage"), ""));
    }

    #[test]
    fn needle_is_case_insensitive() {
        let garen = champ(2, "Garen", "Fighter");
        assert!(text_match(&garen, "gar"));
        assert!(text_match(&garen, "GAR"));
        assert!(text_match(&garen, "aReN"));
        assert!(!text_match(&garen, "z"));
    }

    #[test]
    fn needle_lowercasing_is_unicode_aware() {
        let nidalee = champ(3, "Nìdalée", "Fighter");
        assert!(text_match(&nidalee, "NÌDALÉE"));
        assert!(text_match(&nidalee, "ìdalé"));
    }

    #[test]
    fn any_search_field_can_match() {
        // Fixture searches name only; a miss there is a miss overall.
        let ahri = champ(1, "Ahri", "Mage");
        assert!(!text_match(&ahri, "mage"));
    }

    #[test]
    fn facet_equality_is_case_sensitive() {
        let ahri = champ(1, "Ahri", "Mage");
        assert!(facet_equals(&ahri, "role", "Mage"));
        assert!(!facet_equals(&ahri, "role", "mage"));
        assert!(!facet_equals(&ahri, "role", "Fighter"));
    }

    #[test]
    fn missing_facet_never_satisfies() {
        let unroled = Fixture {
            id: ItemId::Num(4),
            name: "Shadow".into(),
            role: None,
        };
        assert!(!facet_equals(&unroled, "role", "Mage"));
        assert!(!facet_equals(&unroled, "alignment", "Chaotic"));
    }
}
