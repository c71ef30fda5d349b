//! Orders the filtered collection by price.

use catalog_model::{Item, SortDirection};

/// Sort items by price in the given direction.
///
/// The sort is stable: items with equal prices retain their relative
/// order from the input, so output stays reproducible for tied prices.
/// `f64::total_cmp` keeps the comparator a total order even for
/// pathological payloads.
pub fn sort_by_price(mut items: Vec<Item>, direction: SortDirection) -> Vec<Item> {
    match direction {
        SortDirection::Ascending => {
            items.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        SortDirection::Descending => {
            items.sort_by(|a, b| b.price.total_cmp(&a.price));
        }
    }
    items
}
