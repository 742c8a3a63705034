//! `/payments/*`: payment methods and the redirect-based gateway.

use reqwest::Method;
use storefront_core::models::{MessageResponse, PaymentReturn};

use crate::{Client, ClientResult, send_json, send_text};

pub struct Payments<'a> {
    pub(crate) client: &'a Client,
}

impl Payments<'_> {
    /// Ask the backend for a gateway checkout URL. The reply is the bare URL.
    pub async fn create_vnpay_url(
        &self,
        total_price: f64,
        order_info: &str,
        order_id: i64,
    ) -> ClientResult<String> {
        let url = send_text(self.client.request(Method::POST, "/payments/createUrl").query(&[
            ("totalPrice", total_price.to_string()),
            ("orderInfo", order_info.to_string()),
            ("orderId", order_id.to_string()),
        ]))
        .await?;
        Ok(url.trim().to_string())
    }

    pub async fn add_method(&self, name: &str) -> ClientResult<MessageResponse> {
        send_json(
            self.client
                .request(Method::POST, "/payments/methods")
                .query(&[("name", name)]),
        )
        .await
    }

    /// Forward the gateway's return query string verbatim to the backend.
    pub async fn vnpay_return(&self, query_string: &str) -> ClientResult<PaymentReturn> {
        let query_string = query_string.trim_start_matches('?');
        let path = if query_string.is_empty() {
            "/payments/vnpay/return".to_string()
        } else {
            format!("/payments/vnpay/return?{query_string}")
        };
        send_json(self.client.request(Method::GET, &path)).await
    }
}
