//! Method, path, query and body of every endpoint group, checked against a
//! backend that records each request verbatim.

mod support;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Uri};
use serde_json::{Value, json};
use storefront_client::Client;
use storefront_core::format::Page;
use storefront_core::models::{
    ProductRequest, Rating, RegisterRequest, ReviewRequest, UpdateProfileRequest,
};
use support::{Seen, bearer};

/// Records `METHOD path?query bearer=token [body]` and answers with a body
/// shaped for the route.
async fn record(
    State(seen): State<Seen>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    let is_multipart = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));
    let body = if is_multipart {
        " <multipart>".to_string()
    } else if body.is_empty() {
        String::new()
    } else {
        format!(" {}", String::from_utf8_lossy(&body))
    };
    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    seen.push(format!("{method} {target} bearer={}{body}", bearer(&headers)));

    Json(reply_for(&method, uri.path()))
}

fn reply_for(method: &Method, path: &str) -> Value {
    let review = json!({
        "reviewId": 9, "userName": "lan@shop.vn", "productId": 1, "rating": 5, "content": "Tốt"
    });
    let user = json!({ "id": 3, "email": "u@shop.vn", "roles": ["ROLE_USER"] });

    match (method.as_str(), path) {
        ("POST", p) if p.starts_with("/api/reviews/products/") => review,
        ("GET", p) if p.starts_with("/api/reviews/products/") => json!([review]),
        ("GET", "/api/orders/11") => {
            json!({ "cartItems": [], "totalPrice": 15000, "status": "PAID" })
        }
        ("POST", "/api/invoices") => {
            json!({ "id": 5, "userId": 2, "orderId": 11, "totalAmount": 15000 })
        }
        ("GET", "/api/admin/users") => json!([user]),
        ("GET", p) if p.starts_with("/api/admin/users/") => user,
        _ => json!({ "message": "ok" }),
    }
}

async fn recorded_client(seen: &Seen, token: Option<&str>) -> Client {
    let app = Router::new().fallback(record).with_state(seen.clone());
    let client = support::client(&support::spawn_root(app).await);
    if let Some(token) = token {
        client.session().set_tokens(token, None).expect("seed");
    }
    client
}

#[tokio::test]
async fn review_routes() {
    let seen = Seen::default();
    let client = recorded_client(&seen, Some("tok")).await;
    let reviews = client.reviews();

    let request = ReviewRequest {
        rating: Rating::new(5).expect("rating"),
        content: "Tốt".into(),
    };
    let created = reviews.create(1, &request).await.expect("create");
    assert_eq!(created.review_id, Some(9));
    assert_eq!(reviews.for_product(1).await.expect("list").len(), 1);
    assert!(reviews.delete(1, 9).await.expect("delete"));

    assert_eq!(
        seen.lines(),
        vec![
            r#"POST /api/reviews/products/1 bearer=tok {"rating":5,"content":"Tốt"}"#,
            "GET /api/reviews/products/1 bearer=-",
            "DELETE /api/reviews/products/1/9 bearer=tok",
        ]
    );
}

#[tokio::test]
async fn order_and_invoice_routes() {
    let seen = Seen::default();
    let client = recorded_client(&seen, Some("tok")).await;

    let order = client.orders().get(11).await.expect("get");
    assert_eq!(order.total_price, 15000.0);
    client.orders().delete(11).await.expect("delete");
    let invoice = client.invoices().create(11, 2).await.expect("invoice");
    assert_eq!(invoice.order_id, 11);

    assert_eq!(
        seen.lines(),
        vec![
            "GET /api/orders/11 bearer=tok",
            "DELETE /api/orders/11 bearer=tok",
            "POST /api/invoices?orderId=11&paymentMethodId=2 bearer=tok",
        ]
    );
}

#[tokio::test]
async fn admin_routes() {
    let seen = Seen::default();
    let client = recorded_client(&seen, Some("tok")).await;
    let admin = client.admin();

    assert_eq!(admin.users(Page::ADMIN).await.expect("users").len(), 1);
    assert_eq!(admin.user(3).await.expect("user").email, "u@shop.vn");
    admin.delete_user(3).await.expect("delete user");
    let request = ProductRequest {
        product_name: "Thước kẻ".into(),
        price: 9000.0,
        quantity: 4,
        category: None,
        description: None,
    };
    admin
        .update_product(4, &request, None)
        .await
        .expect("update product");
    admin.delete_product(4).await.expect("delete product");

    assert_eq!(
        seen.lines(),
        vec![
            "GET /api/admin/users?noPage=0&sizePage=20 bearer=tok",
            "GET /api/admin/users/3 bearer=tok",
            "DELETE /api/admin/users/3 bearer=tok",
            "PUT /api/admin/products/4 bearer=tok <multipart>",
            "DELETE /api/admin/products/4 bearer=tok",
        ]
    );
}

#[tokio::test]
async fn payment_method_and_cart_removal_routes() {
    let seen = Seen::default();
    let client = recorded_client(&seen, Some("tok")).await;

    client.payments().add_method("VNPay").await.expect("add method");
    client.cart().remove_item(1).await.expect("remove");

    assert_eq!(
        seen.lines(),
        vec![
            "POST /api/payments/methods?name=VNPay bearer=tok",
            "DELETE /api/cart/items/1 bearer=tok",
        ]
    );
}

#[tokio::test]
async fn account_routes() {
    let seen = Seen::default();
    let client = recorded_client(&seen, Some("tok")).await;
    let user = client.user();

    user.register(&RegisterRequest {
        email: "a@shop.vn".into(),
        password: "pw".into(),
    })
    .await
    .expect("register");
    user.update_profile(
        2,
        &UpdateProfileRequest {
            address: Some("HN".into()),
            ..Default::default()
        },
    )
    .await
    .expect("update profile");
    user.reset_password("a@shop.vn").await.expect("reset");
    user.verify_otp("a@shop.vn", "123456").await.expect("verify");
    user.change_password("a@shop.vn", "NewPass1", Some("123456"))
        .await
        .expect("change");

    assert_eq!(
        seen.lines(),
        vec![
            r#"POST /api/user/auth/register bearer=- {"email":"a@shop.vn","password":"pw"}"#,
            r#"PUT /api/user/updation/2 bearer=tok {"address":"HN"}"#,
            "POST /api/user/auth/reset-password?email=a%40shop.vn bearer=-",
            "POST /api/user/auth/verify-otp?email=a%40shop.vn&otp=123456 bearer=-",
            "POST /api/user/auth/change-password?email=a%40shop.vn&newPassword=NewPass1&otp=123456 bearer=-",
        ]
    );
}
