//! # storefront_core
//!
//! Client-side domain logic for the storefront: session tokens, role
//! resolution from token claims, product image URLs, backend models and
//! display formatting. Nothing here talks to the network.

pub mod auth;
pub mod config;
pub mod format;
pub mod images;
pub mod models;
pub mod session;

pub use config::ClientConfig;
pub use images::ImageResolver;
pub use session::Session;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
