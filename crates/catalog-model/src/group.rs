//! The display-ready grouped view.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::item::Item;

/// Label of the single group produced when no category is selected.
pub const ALL_PRODUCTS_LABEL: &str = "All Products";

/// Key identifying a display group.
///
/// Tagged so the "show everything together" group can never collide with
/// a category that happens to share its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    /// The single group shown when no category filter applies.
    AllProducts,
    /// A group holding items of one observed category value.
    ByCategory(String),
}

impl GroupKey {
    /// Display label for the group heading.
    pub fn label(&self) -> &str {
        match self {
            GroupKey::AllProducts => ALL_PRODUCTS_LABEL,
            GroupKey::ByCategory(label) => label,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One ordered group of items under a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductGroup {
    pub key: GroupKey,
    pub items: Vec<Item>,
}

/// Ordered groups, each an ordered list of items.
///
/// Invariant: concatenating every group's items, in group order then item
/// order, reproduces the filtered-and-sorted sequence exactly — no item
/// dropped or duplicated. Zero groups is the representation of an empty
/// result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedView {
    groups: Vec<ProductGroup>,
}

impl GroupedView {
    pub fn new(groups: Vec<ProductGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[ProductGroup] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductGroup> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total item count across all groups.
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    /// All items in group order then item order.
    pub fn flattened(&self) -> Vec<&Item> {
        self.groups
            .iter()
            .flat_map(|group| group.items.iter())
            .collect()
    }
}

impl<'a> IntoIterator for &'a GroupedView {
    type Item = &'a ProductGroup;
    type IntoIter = std::slice::Iter<'a, ProductGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
