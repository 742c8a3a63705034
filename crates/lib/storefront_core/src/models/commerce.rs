//! Cart, orders, invoices and payment results.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Backend dates arrive either as epoch milliseconds or as ISO-8601 text
/// depending on server serializer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

impl Timestamp {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            Timestamp::Text(text) => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|d| d.with_timezone(&Utc)),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.to_datetime(), self) {
            (Some(dt), _) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
            (None, Timestamp::Text(text)) => f.write_str(text),
            (None, Timestamp::Millis(ms)) => write!(f, "{ms}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i64,
    #[serde(default)]
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    PendingPayment,
    Placed,
    Cancelled,
    Shipped,
    Finished,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::PendingPayment => "PENDING_PAYMENT",
            OrderStatus::Placed => "PLACED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Finished => "FINISHED",
            OrderStatus::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Row in the "my orders" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: i64,
    #[serde(default)]
    pub create_at: Option<Timestamp>,
    pub status: OrderStatus,
    pub total_price: f64,
    #[serde(default)]
    pub payment_method_name: Option<String>,
    /// Present while a gateway payment is still outstanding.
    #[serde(default)]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub total_items: u32,
}

/// Full order, as returned by create and get.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub cart_items: Vec<CartItem>,
    pub total_price: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub payment_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    pub user_id: i64,
    pub order_id: i64,
    pub total_amount: f64,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Result of the payment gateway's redirect back to the shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentReturn {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentReturn {
    /// The message if the server sent one, otherwise the raw payload.
    pub fn summary(&self) -> String {
        match &self.message {
            Some(message) if !message.is_empty() => message.clone(),
            _ => Value::Object(self.extra.clone()).to_string(),
        }
    }
}
