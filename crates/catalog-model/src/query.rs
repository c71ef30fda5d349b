//! User-controlled query parameters.
//!
//! A [`QueryState`] is a snapshot of the three controls the UI exposes:
//! free-text search, category selection, and price sort direction. The
//! pipeline only ever reads a snapshot; mutation belongs to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel accepted at the wire/UI edge for "no category filter".
pub const ALL_SENTINEL: &str = "all";

/// Direction of the price sort.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum SortDirection {
    /// Price: low to high.
    #[default]
    Ascending,
    /// Price: high to low.
    Descending,
}

impl SortDirection {
    /// Returns the canonical short code.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    /// Parse a sort direction. Accepts short codes and full names,
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!("Unknown sort direction: {s}")),
        }
    }
}

/// Category selection, tagged rather than sentinel-based.
///
/// The string `"all"` exists only at the edge: a catalog category
/// literally named "all" is representable as `Category("all".into())`
/// and never conflates with [`CategoryFilter::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Restrict to items whose category equals the label exactly.
    Category(String),
}

impl CategoryFilter {
    /// Interpret user input: the sentinel (case-insensitive) selects
    /// [`CategoryFilter::All`], anything else is a category label. Total.
    pub fn parse_label(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case(ALL_SENTINEL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(s.to_string())
        }
    }

    /// Returns true when no category restriction applies.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// The selected label, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Category(label) => Some(label),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{ALL_SENTINEL}"),
            CategoryFilter::Category(label) => write!(f, "{label}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// Total: the sentinel maps to `All`, anything else is a label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::parse_label(s))
    }
}

/// Snapshot of the user-chosen filter/sort parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryState {
    /// Free-text search term. Empty keeps everything.
    pub search_term: String,
    /// Category restriction.
    pub category: CategoryFilter,
    /// Price sort direction.
    pub sort_direction: SortDirection,
}

impl QueryState {
    /// Builder-style setter for the search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Builder-style setter for the category filter.
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Builder-style setter for the sort direction.
    #[must_use]
    pub fn with_sort(mut self, direction: SortDirection) -> Self {
        self.sort_direction = direction;
        self
    }
}
