//! `/orders/*` and `/invoices/*`.

use reqwest::Method;
use storefront_core::models::{Invoice, MessageResponse, Order, OrderSummary};

use crate::{Client, ClientResult, send_for_status, send_json};

pub struct Orders<'a> {
    pub(crate) client: &'a Client,
}

impl Orders<'_> {
    /// Turn the current cart into an order paid with `payment_method_id`.
    pub async fn create(&self, payment_method_id: i64) -> ClientResult<Order> {
        send_json(
            self.client
                .request(Method::POST, "/orders/create")
                .query(&[("paymentMethod", payment_method_id)]),
        )
        .await
    }

    pub async fn delete(&self, order_id: i64) -> ClientResult<MessageResponse> {
        send_json(
            self.client
                .request(Method::DELETE, &format!("/orders/{order_id}")),
        )
        .await
    }

    pub async fn mine(&self) -> ClientResult<Vec<OrderSummary>> {
        send_json(self.client.request(Method::GET, "/orders/my-orders")).await
    }

    pub async fn get(&self, order_id: i64) -> ClientResult<Order> {
        send_json(self.client.request(Method::GET, &format!("/orders/{order_id}"))).await
    }
}

pub struct Invoices<'a> {
    pub(crate) client: &'a Client,
}

impl Invoices<'_> {
    pub async fn create(&self, order_id: i64, payment_method_id: i64) -> ClientResult<Invoice> {
        send_json(
            self.client
                .request(Method::POST, "/invoices")
                .query(&[("orderId", order_id), ("paymentMethodId", payment_method_id)]),
        )
        .await
    }

    /// True when the server accepted the deletion.
    pub async fn delete(&self, invoice_id: i64) -> ClientResult<bool> {
        send_for_status(
            self.client
                .request(Method::DELETE, &format!("/invoices/{invoice_id}")),
        )
        .await
    }
}
