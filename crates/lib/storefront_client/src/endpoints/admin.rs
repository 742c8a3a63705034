//! `/admin/*`: user and product administration.
//!
//! The client does not check roles itself; the server rejects non-admins.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use storefront_core::format::Page;
use storefront_core::models::{MessageResponse, ProductRequest, UserProfile};

use super::ImageUpload;
use crate::{Client, ClientError, ClientResult, send_json};

pub struct Admin<'a> {
    pub(crate) client: &'a Client,
}

impl Admin<'_> {
    pub async fn users(&self, page: Page) -> ClientResult<Vec<UserProfile>> {
        send_json(
            self.client
                .request(Method::GET, "/admin/users")
                .query(&[("noPage", page.number), ("sizePage", page.size)]),
        )
        .await
    }

    pub async fn user(&self, id: i64) -> ClientResult<UserProfile> {
        send_json(self.client.request(Method::GET, &format!("/admin/users/{id}"))).await
    }

    pub async fn delete_user(&self, id: i64) -> ClientResult<MessageResponse> {
        send_json(
            self.client
                .request(Method::DELETE, &format!("/admin/users/{id}")),
        )
        .await
    }

    pub async fn create_product(
        &self,
        product: &ProductRequest,
        image: Option<ImageUpload>,
    ) -> ClientResult<MessageResponse> {
        let form = product_form(product, image)?;
        send_json(
            self.client
                .request(Method::POST, "/admin/products")
                .multipart(form),
        )
        .await
    }

    pub async fn update_product(
        &self,
        id: i64,
        product: &ProductRequest,
        image: Option<ImageUpload>,
    ) -> ClientResult<MessageResponse> {
        let form = product_form(product, image)?;
        send_json(
            self.client
                .request(Method::PUT, &format!("/admin/products/{id}"))
                .multipart(form),
        )
        .await
    }

    pub async fn delete_product(&self, id: i64) -> ClientResult<MessageResponse> {
        send_json(
            self.client
                .request(Method::DELETE, &format!("/admin/products/{id}")),
        )
        .await
    }
}

/// `products` as a JSON part, plus the image as `file` when given.
fn product_form(product: &ProductRequest, image: Option<ImageUpload>) -> ClientResult<Form> {
    let json = serde_json::to_string(product).map_err(|e| ClientError::Decode(e.to_string()))?;
    let mut form = Form::new().part("products", Part::text(json).mime_str("application/json")?);
    if let Some(image) = image {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime)?;
        form = form.part("file", part);
    }
    Ok(form)
}
