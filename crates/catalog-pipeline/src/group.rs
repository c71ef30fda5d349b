//! Partitions the ordered collection into labeled display groups.

use catalog_model::{CategoryFilter, GroupKey, GroupedView, Item, ProductGroup};

/// Group the sorted sequence for display.
///
/// - `All`: one [`GroupKey::AllProducts`] group holding the full
///   sequence; an empty sequence yields zero groups.
/// - `Category(_)`: groups keyed by each item's actual observed
///   `category` value, created in first-encountered order. The upstream
///   filter normally leaves a single category here, but this stage never
///   assumes it.
pub fn group_items(items: Vec<Item>, filter: &CategoryFilter) -> GroupedView {
    if items.is_empty() {
        return GroupedView::default();
    }
    if filter.is_all() {
        return GroupedView::new(vec![ProductGroup {
            key: GroupKey::AllProducts,
            items,
        }]);
    }

    let mut groups: Vec<ProductGroup> = Vec::new();
    for item in items {
        match groups
            .iter_mut()
            .find(|group| group.key.label() == item.category)
        {
            Some(group) => group.items.push(item),
            None => groups.push(ProductGroup {
                key: GroupKey::ByCategory(item.category.clone()),
                items: vec![item],
            }),
        }
    }
    GroupedView::new(groups)
}
