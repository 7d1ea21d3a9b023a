// ── Core error types ──
//
// Load-time errors are fatal to the load call that raised them; a store
// is never partially populated. Facet errors are recoverable -- the
// controller's filter state is left exactly as it was.

use thiserror::Error;

use crate::model::ItemId;

/// Unified error type for the core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    // ── Load errors ──────────────────────────────────────────────────
    #[error("duplicate record id {id} at position {index}")]
    DuplicateId { id: ItemId, index: usize },

    #[error("record at position {index} has an empty id")]
    EmptyId { index: usize },

    // ── Filter errors ────────────────────────────────────────────────
    #[error("unknown facet '{facet}' (known facets: {known})")]
    UnknownFacet { facet: String, known: String },
}

impl CoreError {
    /// Build an `UnknownFacet` error from the facet list a record type declares.
    pub fn unknown_facet(facet: impl Into<String>, known: &[&str]) -> Self {
        Self::UnknownFacet {
            facet: facet.into(),
            known: known.join(", "),
        }
    }
}
