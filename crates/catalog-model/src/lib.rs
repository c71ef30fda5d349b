pub mod category;
pub mod error;
pub mod group;
pub mod item;
pub mod query;

pub use category::CategorySet;
pub use error::{CatalogError, Result};
pub use group::{ALL_PRODUCTS_LABEL, GroupKey, GroupedView, ProductGroup};
pub use item::{Item, ProductsPage};
pub use query::{ALL_SENTINEL, CategoryFilter, QueryState, SortDirection};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_state_serializes() {
        let query = QueryState::default()
            .with_search("shirt")
            .with_category(CategoryFilter::Category("clothes".to_string()))
            .with_sort(SortDirection::Descending);
        let json = serde_json::to_string(&query).expect("serialize query");
        let round: QueryState = serde_json::from_str(&json).expect("deserialize query");
        assert_eq!(round, query);
    }

    #[test]
    fn grouped_view_totals() {
        let item = Item {
            id: 1,
            title: "Mug".to_string(),
            description: String::new(),
            category: "home".to_string(),
            price: 10.0,
            rating: 3.0,
            thumbnail_url: String::new(),
        };
        let view = GroupedView::new(vec![ProductGroup {
            key: GroupKey::ByCategory("home".to_string()),
            items: vec![item],
        }]);
        assert_eq!(view.len(), 1);
        assert_eq!(view.total_items(), 1);
        assert!(!view.is_empty());
    }
}
