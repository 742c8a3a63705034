//! # storefront_client
//!
//! Typed async client for the storefront REST API.
//!
//! A [`Client`] owns an explicit [`Session`]; the bearer token is read from
//! it on every request and written back by login, refresh and logout.
//! Endpoint groups hang off the client the way the backend groups its
//! routes:
//!
//! - [`Client::user`]: registration, login/logout, profile, token refresh
//! - [`Client::products`]: catalog listing, search, recommendations
//! - [`Client::cart`], [`Client::orders`], [`Client::invoices`], [`Client::payments`]
//! - [`Client::reviews`], [`Client::interactions`]
//! - [`Client::admin`]: user and product administration
//!
//! There are no retries and no automatic token refresh.

mod error;
pub mod endpoints;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use storefront_core::{ClientConfig, ImageResolver, Session};
use tracing::debug;

pub use endpoints::ImageUpload;
pub use error::{ClientError, ClientResult};

/// Handle on the API.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    images: ImageResolver,
}

impl Client {
    /// Build a client from configuration, applying the configured timeout.
    pub fn new(config: &ClientConfig, session: Session) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self::with_http(http, config, session))
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, config: &ClientConfig, session: Session) -> Self {
        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
            images: config.image_resolver(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn images(&self) -> &ImageResolver {
        &self.images
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Request with the session's access token attached, when there is one.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Request without the session's credentials.
    pub(crate) fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }
}

/// Send and decode a JSON reply.
pub(crate) async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
    let response = check(request.send().await?).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Send and return the reply body as text.
pub(crate) async fn send_text(request: RequestBuilder) -> ClientResult<String> {
    let response = check(request.send().await?).await?;
    Ok(response.text().await?)
}

/// Send and report only whether the server answered 2xx.
pub(crate) async fn send_for_status(request: RequestBuilder) -> ClientResult<bool> {
    let response = request.send().await?;
    Ok(response.status().is_success())
}

/// Turn a non-2xx response into [`ClientError::Status`].
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    let fallback = format!("HTTP {}", status.as_u16());
    let message = if is_json {
        response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string))
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
    } else {
        fallback
    };

    debug!(status = status.as_u16(), %message, "API call failed");
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
