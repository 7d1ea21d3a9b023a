// ── Catalog identity ──
//
// Every catalog record carries an ItemId. Built-in content uses small
// integers (matching the upstream display data); callers loading their
// own catalogs may prefer string slugs. Both live behind one type so
// stores and controllers never care which.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier for one catalog record, unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(u64),
    Slug(String),
}

impl ItemId {
    /// A slug id must carry text; numeric ids are always well-formed.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Slug(s) if s.trim().is_empty())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Slug(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        Self::Num(n)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        match s.parse::<u64>() {
            Ok(n) => Self::Num(n),
            Err(_) => Self::Slug(s),
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_parse_as_num() {
        assert_eq!(ItemId::from("42"), ItemId::Num(42));
        assert_eq!(ItemId::from("ahri"), ItemId::Slug("ahri".into()));
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(ItemId::Num(7).to_string(), "7");
        assert_eq!(ItemId::from("lee-sin").to_string(), "lee-sin");
    }

    #[test]
    fn empty_slug_is_malformed() {
        assert!(ItemId::Slug(String::new()).is_empty());
        assert!(ItemId::Slug("  ".into()).is_empty());
        assert!(!ItemId::Num(0).is_empty());
    }
}
