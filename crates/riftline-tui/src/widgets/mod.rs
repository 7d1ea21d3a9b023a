//! Small reusable rendering helpers shared across screens.

pub mod stat_tile;
pub mod sub_tabs;
