//! The filterable catalog engine.
//!
//! Four pieces, leaf first: the [`Record`] contract, the ordered
//! [`RecordStore`], the pure [`predicate`] functions, and the
//! [`query`] engine that AND-composes them. [`SelectionController`]
//! ties one store to one [`FilterState`] per view.

pub mod predicate;
pub mod query;
pub mod record;
pub mod selection;
pub mod store;

pub use record::Record;
pub use selection::{FilterState, SelectionController};
pub use store::RecordStore;

#[cfg(test)]
pub(crate) mod test_fixtures {
    //! A minimal record type for engine tests, with an optional facet so
    //! the missing-facet exclusion rule can be exercised.

    use std::borrow::Cow;

    use super::{Record, RecordStore};
    use crate::model::ItemId;

    #[derive(Debug, Clone)]
    pub(crate) struct Fixture {
        pub id: ItemId,
        pub name: String,
        pub role: Option<String>,
    }

    impl Record for Fixture {
        fn id(&self) -> ItemId {
            self.id.clone()
        }

        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::from(&self.name)]
        }

        fn facet_names() -> &'static [&'static str] {
            &["role"]
        }

        fn facet(&self, name: &str) -> Option<Cow<'_, str>> {
            match name {
                "role" => self.role.as_deref().map(Cow::from),
                _ => None,
            }
        }
    }

    pub(crate) fn champ(id: u64, name: &str, role: &str) -> Fixture {
        Fixture {
            id: ItemId::Num(id),
            name: name.into(),
            role: Some(role.into()),
        }
    }

    /// The scenario roster: Ahri (Mage), Garen (Fighter), Lux (Mage).
    pub(crate) fn roster_store() -> RecordStore<Fixture> {
        RecordStore::load(vec![
            champ(1, "Ahri", "Mage"),
            champ(2, "Garen", "Fighter"),
            champ(3, "Lux", "Mage"),
        ])
        .expect("fixture ids are unique")
    }
}
