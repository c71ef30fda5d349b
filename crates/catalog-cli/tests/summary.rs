//! Tests for view rendering.

use catalog_cli::summary::render_summary;
use catalog_model::{GroupKey, GroupedView, Item, ProductGroup, QueryState};
use catalog_pipeline::{ViewPipeline, derive_view};

fn item(id: u64, title: &str, category: &str, price: f64) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
        price,
        rating: 4.0,
        thumbnail_url: String::new(),
    }
}

#[test]
fn summary_lists_each_group_and_total() {
    let view = GroupedView::new(vec![
        ProductGroup {
            key: GroupKey::ByCategory("home".to_string()),
            items: vec![item(2, "Blue Mug", "home", 10.0)],
        },
        ProductGroup {
            key: GroupKey::ByCategory("clothes".to_string()),
            items: vec![
                item(1, "Red Shirt", "clothes", 20.0),
                item(3, "Green Shirt", "clothes", 20.0),
            ],
        },
    ]);
    insta::assert_snapshot!(render_summary(&view), @r"
    home: 1 items
    clothes: 2 items
    Total: 3 items, 2 groups
    ");
}

#[test]
fn summary_of_empty_view_reports_zero() {
    let summary = render_summary(&GroupedView::default());
    assert_eq!(summary, "Total: 0 items, 0 groups");
}

#[test]
fn end_to_end_derivation_feeds_the_summary() {
    let items = vec![
        item(1, "Red Shirt", "clothes", 20.0),
        item(2, "Blue Mug", "home", 10.0),
    ];
    let query = QueryState::default();
    let mut pipeline = ViewPipeline::with_items(items.clone());
    let view = pipeline.view(&query).clone();
    assert_eq!(view, derive_view(&items, &query));

    let summary = render_summary(&view);
    assert!(summary.contains("All Products: 2 items"));
    assert!(summary.contains("Total: 2 items, 1 groups"));
}
