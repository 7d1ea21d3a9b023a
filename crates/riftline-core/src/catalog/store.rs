// ── Record store ──
//
// Ordered, immutable-after-load storage for one record type. Insertion
// order is significant: every later filtering stage preserves it.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Record;
use crate::error::CoreError;
use crate::model::ItemId;

/// An ordered collection of records, validated at load time.
///
/// Ids must be unique and non-empty within one load; a failed load
/// returns an error without constructing a partially populated store.
/// After load the store is read-only.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    items: Vec<T>,
}

impl<T: Record> RecordStore<T> {
    /// Validate and load a sequence of records, preserving order.
    pub fn load(items: impl IntoIterator<Item = T>) -> Result<Self, CoreError> {
        let items: Vec<T> = items.into_iter().collect();

        let mut seen: HashSet<ItemId> = HashSet::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let id = item.id();
            if id.is_empty() {
                return Err(CoreError::EmptyId { index });
            }
            if !seen.insert(id.clone()) {
                return Err(CoreError::DuplicateId { id, index });
            }
        }

        debug!(count = items.len(), "catalog loaded");
        Ok(Self { items })
    }

    /// All records in original insertion order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Resolve a record by id. Linear scan -- catalogs hold tens of items.
    pub fn get(&self, id: &ItemId) -> Option<&T> {
        self.items.iter().find(|item| &item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::{champ, Fixture};

    #[test]
    fn load_preserves_insertion_order() {
        let store = RecordStore::load(vec![
            champ(1, "Ahri", "Mage"),
            champ(2, "Garen", "Fighter"),
            champ(3, "Lux", "Mage"),
        ])
        .expect("unique ids");

        let names: Vec<&str> = store.all().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ahri", "Garen", "Lux"]);
    }

    #[test]
    fn duplicate_id_rejects_whole_load() {
        let err = RecordStore::load(vec![
            champ(1, "Ahri", "Mage"),
            champ(1, "Garen", "Fighter"),
        ])
        .expect_err("duplicate id");

        assert_eq!(
            err,
            CoreError::DuplicateId {
                id: ItemId::Num(1),
                index: 1
            }
        );
    }

    #[test]
    fn empty_slug_id_rejects_whole_load() {
        let bad = Fixture {
            id: ItemId::Slug(String::new()),
            name: "Nameless".into(),
            role: None,
        };
        let err = RecordStore::load(vec![bad]).expect_err("empty id");
        assert_eq!(err, CoreError::EmptyId { index: 0 });
    }

    #[test]
    fn get_by_id() {
        let store =
            RecordStore::load(vec![champ(1, "Ahri", "Mage"), champ(2, "Garen", "Fighter")])
                .expect("unique ids");

        assert_eq!(store.get(&ItemId::Num(2)).map(|c| c.name.as_str()), Some("Garen"));
        assert!(store.get(&ItemId::Num(9)).is_none());
    }
}
