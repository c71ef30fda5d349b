//! Narrows the raw collection by search term and category.

use catalog_model::{CategoryFilter, Item, QueryState};

/// Filter the collection by the query's search term and category.
///
/// Both filters compose conjunctively and the input order is preserved.
/// An empty result is a legitimate outcome, never an error.
///
/// - Non-empty `search_term`: keeps items where the lowercased term is a
///   substring of the lowercased title, description, or category.
/// - `Category(label)`: keeps only items whose category equals the label
///   exactly (case-sensitive).
pub fn filter_items(items: &[Item], query: &QueryState) -> Vec<Item> {
    let term = query.search_term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_search(item, &term))
        .filter(|item| matches_category(item, &query.category))
        .cloned()
        .collect()
}

fn matches_search(item: &Item, lowered_term: &str) -> bool {
    if lowered_term.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(lowered_term)
        || item.description.to_lowercase().contains(lowered_term)
        || item.category.to_lowercase().contains(lowered_term)
}

fn matches_category(item: &Item, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Category(label) => item.category == *label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::SortDirection;

    fn item(id: u64, title: &str, description: &str, category: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price: 1.0,
            rating: 0.0,
            thumbnail_url: String::new(),
        }
    }

    #[test]
    fn empty_term_keeps_everything() {
        let items = vec![item(1, "Mug", "", "home"), item(2, "Shirt", "", "clothes")];
        let query = QueryState::default();
        assert_eq!(filter_items(&items, &query).len(), 2);
    }

    #[test]
    fn search_matches_title_description_or_category() {
        let items = vec![
            item(1, "Red Shirt", "", "clothes"),
            item(2, "Mug", "a shirt-shaped mug", "home"),
            item(3, "Socks", "", "shirtwear"),
            item(4, "Lamp", "", "home"),
        ];
        let query = QueryState::default().with_search("SHIRT");
        let ids: Vec<u64> = filter_items(&items, &query).iter().map(|i| i.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let items = vec![item(1, "Mug", "", "home"), item(2, "Rug", "", "Home")];
        let query = QueryState::default()
            .with_category(CategoryFilter::Category("home".to_string()));
        let ids: Vec<u64> = filter_items(&items, &query).iter().map(|i| i.id).collect();
        assert_eq!(ids, [1]);
    }

    #[test]
    fn filters_compose_conjunctively() {
        let items = vec![
            item(1, "Red Shirt", "", "clothes"),
            item(2, "Shirt Rack", "", "home"),
        ];
        let query = QueryState::default()
            .with_search("shirt")
            .with_category(CategoryFilter::Category("home".to_string()))
            .with_sort(SortDirection::Ascending);
        let ids: Vec<u64> = filter_items(&items, &query).iter().map(|i| i.id).collect();
        assert_eq!(ids, [2]);
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let items = vec![item(1, "Mug", "", "home")];
        let query = QueryState::default().with_search("xyz");
        assert!(filter_items(&items, &query).is_empty());
    }
}
