//! Catalog item types and the wire payload they arrive in.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Items are owned by the external data source; the pipeline treats them
/// as read-only value objects for the duration of one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier assigned by the data source.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Longer descriptive text.
    #[serde(default)]
    pub description: String,
    /// Free-form category label.
    #[serde(default)]
    pub category: String,
    /// Price in the source currency. Non-negative.
    pub price: f64,
    /// Customer rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f64,
    /// URL of the thumbnail image.
    #[serde(rename = "thumbnail", default)]
    pub thumbnail_url: String,
}

/// Payload shape returned by the products endpoint.
///
/// Only `products` is consumed; the pagination metadata is parsed and
/// ignored (no pagination in this system).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Item>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

impl ProductsPage {
    /// Consume the page, keeping only the item collection.
    pub fn into_items(self) -> Vec<Item> {
        self.products
    }
}
