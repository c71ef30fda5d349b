//! Derived-view computation pipeline for the product catalog.
//!
//! Turns a raw item collection plus a [`QueryState`](catalog_model::QueryState)
//! snapshot into a display-ready grouped structure:
//!
//! - **categories**: selectable category set, derived from the collection
//! - **filter**: text and category narrowing, order preserving
//! - **sort**: stable price ordering
//! - **group**: partition into labeled display groups
//! - **view**: orchestration and per-derived-value memoization
//!
//! Every stage is pure and synchronous; the pipeline performs no I/O and
//! is total over its input domain.

pub mod categories;
pub mod filter;
pub mod group;
pub mod sort;
pub mod view;

pub use categories::extract_categories;
pub use filter::filter_items;
pub use group::group_items;
pub use sort::sort_by_price;
pub use view::{ViewPipeline, derive_view};
