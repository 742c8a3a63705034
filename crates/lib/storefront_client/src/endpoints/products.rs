//! `/products/*`: the public catalog.

use reqwest::Method;
use storefront_core::format::Page;
use storefront_core::models::Product;
use tracing::warn;

use crate::{Client, ClientResult, send_json};

pub struct Products<'a> {
    pub(crate) client: &'a Client,
}

impl Products<'_> {
    pub async fn list(&self, page: Page) -> ClientResult<Vec<Product>> {
        send_json(
            self.client
                .request(Method::GET, "/products/")
                .query(&[("noPage", page.number), ("sizePage", page.size)]),
        )
        .await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Product> {
        send_json(self.client.request(Method::GET, &format!("/products/{id}"))).await
    }

    pub async fn search(&self, name: &str, page: Page) -> ClientResult<Vec<Product>> {
        send_json(self.client.request(Method::GET, "/products/products").query(&[
            ("name", name.to_string()),
            ("noPage", page.number.to_string()),
            ("sizePage", page.size.to_string()),
        ]))
        .await
    }

    /// Products similar to `id`. Failures degrade to an empty list.
    pub async fn recommendations(&self, id: i64) -> Vec<Product> {
        let path = format!("/products/{id}/recommendations");
        match send_json(self.client.request(Method::GET, &path)).await {
            Ok(products) => products,
            Err(e) => {
                warn!(product_id = id, error = %e, "fetching product recommendations failed");
                Vec::new()
            }
        }
    }

    /// Dedicated image endpoint for a product.
    pub fn image_url(&self, id: i64) -> String {
        let images = self.client.images();
        images.product_image_url(id, images.placeholder())
    }
}
