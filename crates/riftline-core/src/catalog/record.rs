//! The record contract every filterable catalog type implements.

use std::borrow::Cow;

use crate::model::ItemId;

/// One filterable catalog record.
///
/// A record exposes exactly three things to the catalog engine: a stable
/// id, the ordered text attributes eligible for substring search, and a
/// fixed set of named facets each holding at most one categorical value.
/// Everything else about the type (stats, dates, flags) is presentation
/// data the engine never looks at.
pub trait Record {
    /// Stable unique identifier within one store.
    fn id(&self) -> ItemId;

    /// Text attributes eligible for substring matching, in declaration order.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Facet names this record type exposes. Fixed per type, not per record.
    fn facet_names() -> &'static [&'static str];

    /// The value of one facet, or `None` when this record does not carry it.
    ///
    /// Facet values are controlled-vocabulary tags; comparisons against
    /// them are exact and case-sensitive.
    fn facet(&self, name: &str) -> Option<Cow<'_, str>>;
}
