//! Pipeline orchestration and memoization.
//!
//! [`derive_view`] is the pure filter → sort → group composition.
//! [`ViewPipeline`] wraps it with the item collection and two
//! independently keyed memos:
//!
//! - the category set depends only on the collection, so it is keyed on
//!   the collection version alone and survives query changes;
//! - the grouped view depends on the collection *and* every query field,
//!   so its key carries both the version and the full [`QueryState`].
//!
//! Keying the view memo on the query alone (forgetting the collection)
//! is the classic stale-cache bug; the version component guards it and a
//! regression test pins it down.

use tracing::{debug, info};

use catalog_model::{CategorySet, GroupedView, Item, QueryState, Result};

use crate::categories::extract_categories;
use crate::filter::filter_items;
use crate::group::group_items;
use crate::sort::sort_by_price;

/// Run the full derivation once: filter, then stable price sort, then
/// grouping. Pure and total; identical inputs produce identical output.
pub fn derive_view(items: &[Item], query: &QueryState) -> GroupedView {
    let filtered = filter_items(items, query);
    info!(
        total = items.len(),
        filtered = filtered.len(),
        "filtered collection"
    );
    let sorted = sort_by_price(filtered, query.sort_direction);
    let view = group_items(sorted, &query.category);
    info!(groups = view.len(), items = view.total_items(), "grouped view");
    view
}

/// The item collection plus memoized derived values.
#[derive(Debug, Default)]
pub struct ViewPipeline {
    items: Vec<Item>,
    /// Bumped whenever the collection is replaced, so memo keys can
    /// depend on the collection without comparing it element-wise.
    version: u64,
    category_memo: Option<(u64, CategorySet)>,
    view_memo: Option<(u64, QueryState, GroupedView)>,
}

impl ViewPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline over an initial collection.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Replace the item collection, invalidating both memos.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.version += 1;
        self.category_memo = None;
        self.view_memo = None;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The selectable category set for the current collection.
    ///
    /// Recomputed only when the collection changes; query changes never
    /// invalidate it.
    pub fn categories(&mut self) -> &CategorySet {
        if self
            .category_memo
            .as_ref()
            .is_some_and(|(version, _)| *version != self.version)
        {
            self.category_memo = None;
        }
        let version = self.version;
        let items = &self.items;
        let (_, set) = self.category_memo.get_or_insert_with(|| {
            debug!(version, "recomputing category set");
            (version, extract_categories(items))
        });
        set
    }

    /// Check a query's category selection against the current collection.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCategory` when the selection names a
    /// category absent from the current collection.
    pub fn validate_query(&mut self, query: &QueryState) -> Result<()> {
        let category = query.category.clone();
        self.categories().validate(&category)
    }

    /// The grouped view for the given query.
    ///
    /// Memoized on (collection version, query); repeated calls with the
    /// same pair return the cached structure unchanged.
    pub fn view(&mut self, query: &QueryState) -> &GroupedView {
        let hit = self.view_memo.as_ref().is_some_and(|(version, cached, _)| {
            *version == self.version && cached == query
        });
        if !hit {
            self.view_memo = None;
        }
        let version = self.version;
        let items = &self.items;
        let (_, _, view) = self.view_memo.get_or_insert_with(|| {
            debug!(version, "recomputing grouped view");
            (version, query.clone(), derive_view(items, query))
        });
        view
    }
}
