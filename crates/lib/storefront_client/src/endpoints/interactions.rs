//! `/interactions/*`: view tracking and personalised recommendations.
//!
//! These calls feed a recommender, so none of them fail the caller:
//! errors are logged and replaced with an empty result.

use reqwest::Method;
use storefront_core::models::{MessageResponse, Product, ProductInteractions};
use tracing::warn;

use crate::{Client, send_json};

pub struct Interactions<'a> {
    pub(crate) client: &'a Client,
}

impl Interactions<'_> {
    /// Record that the signed-in user viewed `product_id`.
    pub async fn record(&self, product_id: i64) -> MessageResponse {
        let request = self
            .client
            .request(Method::POST, "/interactions/record")
            .query(&[("productId", product_id)]);
        match send_json(request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(product_id, error = %e, "recording interaction failed");
                MessageResponse {
                    message: Some("Error recording interaction".to_string()),
                }
            }
        }
    }

    pub async fn my_recommendations(&self) -> Vec<Product> {
        let request = self
            .client
            .request(Method::GET, "/interactions/my-recommendations");
        match send_json(request).await {
            Ok(products) => products,
            Err(e) => {
                warn!(error = %e, "fetching personal recommendations failed");
                Vec::new()
            }
        }
    }

    pub async fn for_product(&self, product_id: i64) -> ProductInteractions {
        let request = self
            .client
            .request(Method::GET, &format!("/interactions/product/{product_id}"));
        match send_json(request).await {
            Ok(stats) => stats,
            Err(e) => {
                warn!(product_id, error = %e, "fetching product interactions failed");
                ProductInteractions::default()
            }
        }
    }
}
