//! Endpoint groups.

mod admin;
mod cart;
mod interactions;
mod orders;
mod payments;
mod products;
mod reviews;
mod user;

use std::path::Path;

pub use admin::Admin;
pub use cart::Cart;
pub use interactions::Interactions;
pub use orders::{Invoices, Orders};
pub use payments::Payments;
pub use products::Products;
pub use reviews::Reviews;
pub use user::User;

use crate::Client;

impl Client {
    pub fn user(&self) -> User<'_> {
        User { client: self }
    }

    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    pub fn cart(&self) -> Cart<'_> {
        Cart { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices { client: self }
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments { client: self }
    }

    pub fn reviews(&self) -> Reviews<'_> {
        Reviews { client: self }
    }

    pub fn interactions(&self) -> Interactions<'_> {
        Interactions { client: self }
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin { client: self }
    }

    /// Invalidate the server-side session, then forget both local tokens.
    ///
    /// The tokens are cleared whatever the server says, including when it
    /// cannot be reached. A server failure is still returned afterwards,
    /// unless the tokens themselves could not be removed.
    pub async fn logout(&self) -> crate::ClientResult<storefront_core::models::MessageResponse> {
        self.user().logout().await
    }
}

/// Image file attached to an admin product create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime: mime.into(),
        }
    }

    /// Read an image from disk, guessing its type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let mime = mime_for(path);
        Ok(Self::new(file_name, bytes, mime))
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
