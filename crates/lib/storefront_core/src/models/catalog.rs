//! Product catalog, reviews and interaction records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product as listed and shown on detail pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    #[serde(rename = "product_name")]
    pub product_name: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// External URL, server path or upload filename.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating_count: Option<i32>,
    /// Average of review ratings, 0-5.
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Admin create/update payload, sent as the `products` multipart part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Star rating, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn new(stars: u8) -> Option<Self> {
        (1..=5).contains(&stars).then_some(Self(stars))
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

/// Review as returned for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub review_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub product_id: i64,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub rating: Rating,
    pub content: String,
}

/// Interaction statistics for one product (admin view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInteractions {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub data: Vec<Value>,
}
