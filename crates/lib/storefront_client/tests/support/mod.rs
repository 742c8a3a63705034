//! Stub backend shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use storefront_client::Client;
use storefront_core::{ClientConfig, Session};

/// What the stub saw: one line per request, e.g. `GET /api/cart/items bearer=abc`.
#[derive(Clone, Default)]
pub struct Seen(pub Arc<Mutex<Vec<String>>>);

impl Seen {
    pub fn push(&self, line: impl Into<String>) {
        self.0.lock().expect("seen lock").push(line.into());
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.lock().expect("seen lock").clone()
    }
}

/// Bearer token from request headers, or `-`.
pub fn bearer(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or("-")
        .to_string()
}

/// Serve `router` under `/api` on an ephemeral port; returns the API base URL.
pub async fn spawn(router: Router) -> String {
    spawn_root(Router::new().nest("/api", router)).await
}

/// Serve `app` as-is, at the root; returns the address plus `/api`.
pub async fn spawn_root(app: Router) -> String {
    init_tracing();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub backend");
    });
    format!("http://{addr}/api")
}

/// Route client logs to the test harness; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An address nothing listens on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api")
}

pub fn client(base_url: &str) -> Client {
    client_with_session(base_url, Session::in_memory())
}

pub fn client_with_session(base_url: &str, session: Session) -> Client {
    let config = ClientConfig::default()
        .with_api_base_url(base_url)
        .expect("valid base url");
    Client::new(&config, session).expect("client")
}

/// HS256 token carrying `claims`, signed with a throwaway secret.
pub fn mint(claims: Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"stub-backend-secret"),
    )
    .expect("mint token")
}

pub fn admin_token() -> String {
    mint(json!({ "sub": "admin@shop.vn", "id": 1, "roles": ["ROLE_ADMIN"] }))
}

pub fn user_token() -> String {
    mint(json!({ "sub": "user@shop.vn", "id": 2, "roles": ["ROLE_USER"] }))
}

pub fn product_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "product_name": name,
        "price": 150000,
        "quantity": 5,
        "image": format!("p{id}.png"),
        "ratingCount": 2,
        "rating": 4.5
    })
}
