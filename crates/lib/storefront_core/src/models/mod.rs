//! Backend DTOs.
//!
//! Field names follow the backend's JSON exactly (including its one
//! snake_case field, `product_name`). Unknown fields are ignored and
//! optional fields default, so older and newer servers both parse.

mod catalog;
mod commerce;
mod user;

pub use catalog::{Product, ProductInteractions, ProductRequest, Rating, Review, ReviewRequest};
pub use commerce::{
    CartItem, Invoice, Order, OrderStatus, OrderSummary, PaymentReturn, Timestamp,
};
pub use user::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, TokenPair, UpdateProfileRequest,
    UserProfile,
};
