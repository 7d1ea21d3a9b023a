//! Shared helpers for command handlers.

use riftline_core::catalog::{Record, RecordStore, SelectionController};
use riftline_core::{CoreError, ItemId};

use crate::error::CliError;

/// Build a controller over `store` with the given search text and facets
/// already applied. `facets` pairs a facet name with an optional value;
/// `None` entries are skipped.
pub fn select<T: Record>(
    store: RecordStore<T>,
    search: Option<&str>,
    facets: &[(&str, Option<String>)],
) -> Result<SelectionController<T>, CoreError> {
    let mut controller = SelectionController::new(store);
    if let Some(text) = search {
        controller.set_search_text(text);
    }
    for (facet, value) in facets {
        if let Some(value) = value.as_deref() {
            controller.set_facet(facet, Some(value))?;
        }
    }
    Ok(controller)
}

/// Resolve an identifier (id, or a record's display name via `name_of`)
/// against a store, case-insensitively for names.
pub fn find_record<'a, T: Record>(
    store: &'a RecordStore<T>,
    identifier: &str,
    name_of: impl Fn(&T) -> &str,
    resource_type: &str,
    list_command: &str,
) -> Result<&'a T, CliError> {
    if let Ok(id) = identifier.parse::<ItemId>() {
        if let Some(record) = store.get(&id) {
            return Ok(record);
        }
    }
    store
        .all()
        .iter()
        .find(|record| name_of(record).eq_ignore_ascii_case(identifier))
        .ok_or_else(|| CliError::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
            list_command: list_command.into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use riftline_core::content;

    #[test]
    fn find_record_matches_id_then_name() {
        let store = content::champions();

        let by_id = find_record(&store, "3", |c| &c.name, "champion", "champions list");
        assert_eq!(by_id.unwrap().name, "Jinx");

        let by_name = find_record(&store, "lee sin", |c| &c.name, "champion", "champions list");
        assert_eq!(by_name.unwrap().name, "Lee Sin");

        let missing = find_record(&store, "teemo", |c| &c.name, "champion", "champions list");
        assert!(matches!(missing, Err(CliError::NotFound { .. })));
    }

    #[test]
    fn select_applies_search_and_facets_together() {
        let controller = select(
            content::champions(),
            Some("the"),
            &[("role", Some("Mage".into()))],
        )
        .unwrap();
        let names: Vec<&str> = controller.results().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ahri", "Lux"]);
    }
}
