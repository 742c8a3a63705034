//! `/reviews/products/*`.

use reqwest::Method;
use storefront_core::models::{Review, ReviewRequest};

use crate::{Client, ClientResult, send_for_status, send_json};

pub struct Reviews<'a> {
    pub(crate) client: &'a Client,
}

impl Reviews<'_> {
    pub async fn create(&self, product_id: i64, review: &ReviewRequest) -> ClientResult<Review> {
        send_json(
            self.client
                .request(Method::POST, &format!("/reviews/products/{product_id}"))
                .json(review),
        )
        .await
    }

    /// True when the server accepted the deletion.
    pub async fn delete(&self, product_id: i64, review_id: i64) -> ClientResult<bool> {
        send_for_status(self.client.request(
            Method::DELETE,
            &format!("/reviews/products/{product_id}/{review_id}"),
        ))
        .await
    }

    pub async fn for_product(&self, product_id: i64) -> ClientResult<Vec<Review>> {
        send_json(
            self.client
                .anonymous(Method::GET, &format!("/reviews/products/{product_id}")),
        )
        .await
    }
}
