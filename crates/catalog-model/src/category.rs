//! The set of selectable categories derived from an item collection.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::item::Item;
use crate::query::{ALL_SENTINEL, CategoryFilter};

/// Distinct category labels present in the current item collection.
///
/// Labels are stored sorted (case-sensitive ordinal order) and
/// deduplicated. The `"all"` sentinel is not a member; it is prepended
/// only when rendering UI options via [`CategorySet::options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    /// Derive the category set from an item collection.
    ///
    /// Deterministic; an empty collection yields an empty set.
    pub fn from_items(items: &[Item]) -> Self {
        let mut labels: Vec<String> =
            items.iter().map(|item| item.category.clone()).collect();
        labels.sort();
        labels.dedup();
        Self { labels }
    }

    /// Sorted distinct labels, without the sentinel.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels for UI controls: the `"all"` sentinel followed by every
    /// distinct label in sorted order.
    pub fn options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(self.labels.len() + 1);
        options.push(ALL_SENTINEL.to_string());
        options.extend(self.labels.iter().cloned());
        options
    }

    /// Returns true if the label is a category of the current collection.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.binary_search_by(|l| l.as_str().cmp(label)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Check a category selection against the current set.
    ///
    /// `All` is always valid; `Category(label)` is only valid while the
    /// label still exists in the underlying collection.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] for a stale or unknown
    /// label.
    pub fn validate(&self, filter: &CategoryFilter) -> Result<()> {
        match filter {
            CategoryFilter::All => Ok(()),
            CategoryFilter::Category(label) => {
                if self.contains(label) {
                    Ok(())
                } else {
                    Err(CatalogError::UnknownCategory {
                        label: label.clone(),
                    })
                }
            }
        }
    }
}
