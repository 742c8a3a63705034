//! `/cart/items`: the signed-in user's cart.

use reqwest::Method;
use storefront_core::models::{CartItem, MessageResponse};

use crate::{Client, ClientResult, send_json};

pub struct Cart<'a> {
    pub(crate) client: &'a Client,
}

impl Cart<'_> {
    pub async fn items(&self) -> ClientResult<Vec<CartItem>> {
        send_json(self.client.request(Method::GET, "/cart/items")).await
    }

    /// Set the quantity of a product in the cart, adding it if absent.
    pub async fn update_item(&self, product_id: i64, quantity: i64) -> ClientResult<MessageResponse> {
        send_json(
            self.client
                .request(Method::PUT, &format!("/cart/items/{product_id}"))
                .query(&[("quantity", quantity)]),
        )
        .await
    }

    pub async fn remove_item(&self, product_id: i64) -> ClientResult<MessageResponse> {
        send_json(
            self.client
                .request(Method::DELETE, &format!("/cart/items/{product_id}")),
        )
        .await
    }
}
