//! End-to-end tests for the derived-view pipeline.

use catalog_model::{
    ALL_PRODUCTS_LABEL, CategoryFilter, GroupKey, Item, QueryState, SortDirection,
};
use catalog_pipeline::{ViewPipeline, derive_view, extract_categories};

fn item(id: u64, title: &str, category: &str, price: f64, rating: f64) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
        price,
        rating,
        thumbnail_url: String::new(),
    }
}

fn sample_catalog() -> Vec<Item> {
    vec![
        item(1, "Red Shirt", "clothes", 20.0, 4.2),
        item(2, "Blue Mug", "home", 10.0, 3.0),
        item(3, "Green Shirt", "clothes", 20.0, 4.8),
    ]
}

fn ids(items: &[&Item]) -> Vec<u64> {
    items.iter().map(|item| item.id).collect()
}

#[test]
fn search_with_all_categories_keeps_one_group_and_tied_order() {
    let query = QueryState::default()
        .with_search("shirt")
        .with_sort(SortDirection::Ascending);
    let view = derive_view(&sample_catalog(), &query);

    assert_eq!(view.len(), 1);
    let group = &view.groups()[0];
    assert_eq!(group.key, GroupKey::AllProducts);
    assert_eq!(group.key.label(), ALL_PRODUCTS_LABEL);
    // Tie on price=20.0: source order (1 before 3) is preserved.
    let group_ids: Vec<u64> = group.items.iter().map(|i| i.id).collect();
    assert_eq!(group_ids, [1, 3]);
}

#[test]
fn category_selection_groups_under_its_label() {
    let query = QueryState::default()
        .with_category(CategoryFilter::Category("home".to_string()))
        .with_sort(SortDirection::Descending);
    let view = derive_view(&sample_catalog(), &query);

    assert_eq!(view.len(), 1);
    let group = &view.groups()[0];
    assert_eq!(group.key, GroupKey::ByCategory("home".to_string()));
    assert_eq!(ids(&group.items.iter().collect::<Vec<_>>()), [2]);
}

#[test]
fn unmatched_term_yields_zero_groups() {
    let query = QueryState::default().with_search("xyz");
    let view = derive_view(&sample_catalog(), &query);
    assert!(view.is_empty());
    assert_eq!(view.total_items(), 0);
}

#[test]
fn categories_are_sorted_deduped_and_sentinel_first() {
    let set = extract_categories(&sample_catalog());
    assert_eq!(set.labels(), ["clothes", "home"]);
    assert_eq!(set.options(), ["all", "clothes", "home"]);
}

#[test]
fn descending_sort_over_full_catalog() {
    let query = QueryState::default().with_sort(SortDirection::Descending);
    let view = derive_view(&sample_catalog(), &query);
    let flattened = view.flattened();
    assert_eq!(ids(&flattened), [1, 3, 2]);
}

#[test]
fn pipeline_is_idempotent() {
    let items = sample_catalog();
    let query = QueryState::default()
        .with_search("shirt")
        .with_category(CategoryFilter::Category("clothes".to_string()))
        .with_sort(SortDirection::Descending);
    assert_eq!(derive_view(&items, &query), derive_view(&items, &query));
}

#[test]
fn memoized_pipeline_matches_direct_derivation() {
    let items = sample_catalog();
    let query = QueryState::default().with_search("shirt");
    let direct = derive_view(&items, &query);

    let mut pipeline = ViewPipeline::with_items(items);
    assert_eq!(pipeline.view(&query), &direct);
    // Second call is served from the memo; structure must be unchanged.
    assert_eq!(pipeline.view(&query), &direct);
}

#[test]
fn fetch_failure_shape_equals_empty_catalog() {
    // The pipeline cannot tell a failed fetch from an empty catalog;
    // both are an empty collection and must render identically.
    let query = QueryState::default();
    let from_failure = derive_view(&[], &query);
    let from_empty_catalog = derive_view(&Vec::new(), &query);
    assert_eq!(from_failure, from_empty_catalog);
    assert!(from_failure.is_empty());
}
