//! Derives the selectable category set from the raw collection.

use catalog_model::{CategorySet, Item};

/// Extract the distinct, sorted category labels from the collection.
///
/// Informational output feeding UI controls; independent of the
/// filter/sort/group chain. Deterministic and side-effect-free.
pub fn extract_categories(items: &[Item]) -> CategorySet {
    CategorySet::from_items(items)
}
