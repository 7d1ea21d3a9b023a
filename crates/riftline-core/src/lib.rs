//! Catalog data layer for the Riftline workspace (CLI / TUI consumers).
//!
//! This crate owns the domain model and the filtering machinery shared by
//! every surface:
//!
//! - **[`RecordStore<T>`]** — Ordered, load-once storage for a catalog of
//!   records. [`RecordStore::load`] validates ids (non-empty, unique) and
//!   the store preserves insertion order forever after.
//!
//! - **[`Record`]** — The per-type contract: a stable [`ItemId`], the text
//!   fields searched by free-text queries, and named facets with exact
//!   string values.
//!
//! - **[`catalog::query`]** — Conjunctive evaluation of a [`FilterState`]
//!   (one optional substring query AND any number of facet selections)
//!   against a store, yielding matches in store order.
//!
//! - **[`SelectionController<T>`]** — Stateful driver for interactive
//!   surfaces: owns a store plus a [`FilterState`], recomputes its cached
//!   match set exactly once per mutation, and rejects unknown facet names
//!   up front.
//!
//! - **Domain model** ([`model`]) — Champions, news articles, leaderboards,
//!   esports events, and game modes, with [`content`] providing the
//!   built-in catalogs the binaries ship with.

pub mod catalog;
pub mod content;
pub mod error;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{FilterState, Record, RecordStore, SelectionController};
pub use error::CoreError;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Champion,
    Difficulty,
    EventStatus,
    GameMode,
    ItemId,
    MatchUp,
    NewsArticle,
    NewsCategory,
    ProTeam,
    RankChange,
    RankedPlayer,
    Role,
    Tier,
    Tournament,
};
