//! Order viewing against a mock backend

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn orders() -> Value {
    json!([
        {
            "_id": "6650aa0011223344",
            "user": {"_id": "u-998877665544", "name": "Asha", "email": "asha@example.com"},
            "orderItems": [{"name": "Kettle", "image": "/k.png", "qty": 2, "price": 499.0}],
            "shippingAddress": {"address": "1 MG Road", "city": "Pune", "postalCode": "411001", "country": "IN"},
            "totalPrice": 998.0,
            "status": "shipped",
            "createdAt": "2024-05-01T10:30:00Z"
        },
        {
            "_id": "6650bb0055667788",
            "user": {"_id": "u-112233445566", "name": "Ravi", "email": "ravi@example.com"},
            "orderItems": [],
            "totalPrice": 120.0,
            "status": "refunded",
            "createdAt": "2024-05-02T08:00:00Z"
        },
        {
            "_id": "6650cc0099aabbcc",
            "user": {"_id": "u-000000000001", "name": "Meera", "email": "meera@example.com"},
            "orderItems": []
        }
    ])
}

async fn mount_orders(backend: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(header("authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(backend)
        .await;
}

#[tokio::test]
async fn test_order_list_renders_rows() {
    let backend = mock_backend().await;
    mount_orders(&backend, orders()).await;

    let response = send(app_for(&backend), get("/orders", Some(TOKEN))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.matches(r#"class="order-row""#).count(), 3);
    assert!(response.body.contains("11223344"));
    assert!(response.body.contains("asha@example.com"));
    assert!(response.body.contains("₹998.00"));
    assert!(response.body.contains("05/01/2024"));
    assert!(response.body.contains(r#"href="/orders?view=6650aa0011223344""#));
    assert!(!response.body.contains("Order Details"));
}

#[tokio::test]
async fn test_status_badges() {
    let backend = mock_backend().await;
    mount_orders(&backend, orders()).await;

    let response = send(app_for(&backend), get("/orders", Some(TOKEN))).await;

    assert!(response.body.contains(r#"class="status-badge badge-purple""#));
    assert!(response.body.contains("SHIPPED"));
    // refunded is unmapped and the third order has no status at all
    assert_eq!(
        response.body.matches(r#"class="status-badge badge-gray""#).count(),
        2
    );
    assert!(response.body.contains(">N/A<"));
    assert!(!response.body.contains("REFUNDED"));
    // missing total
    assert!(response.body.contains("₹0.00"));
}

#[tokio::test]
async fn test_detail_modal_uses_listed_order() {
    let backend = mock_backend().await;
    mount_orders(&backend, orders()).await;

    let response = send(
        app_for(&backend),
        get("/orders?view=6650aa0011223344", Some(TOKEN)),
    )
    .await;

    assert!(response.body.contains("Order Details"));
    assert!(response.body.contains("status-tile status-solid-blue"));
    assert!(response.body.contains("May 1, 2024, 10:30 AM"));
    assert!(response.body.contains("1 MG Road, Pune"));
    assert!(response.body.contains("411001, IN"));
    assert!(response.body.contains("77665544"));
    assert!(response.body.contains("2 x ₹499.00"));
}

#[tokio::test]
async fn test_detail_modal_fallbacks() {
    let backend = mock_backend().await;
    mount_orders(&backend, orders()).await;

    let response = send(
        app_for(&backend),
        get("/orders?view=6650bb0055667788", Some(TOKEN)),
    )
    .await;

    assert!(response.body.contains("No shipping address provided."));
    assert!(response.body.contains("No items found for this order."));
    assert!(response.body.contains("status-tile status-solid-gray"));
}

#[tokio::test]
async fn test_unknown_view_id_shows_plain_list() {
    let backend = mock_backend().await;
    mount_orders(&backend, orders()).await;

    let response = send(app_for(&backend), get("/orders?view=nope", Some(TOKEN))).await;
    assert!(!response.body.contains("Order Details"));
    assert_eq!(response.body.matches(r#"class="order-row""#).count(), 3);
}

#[tokio::test]
async fn test_backend_message_is_shown_on_failure() {
    let backend = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Not authorized as an admin"})),
        )
        .mount(&backend)
        .await;

    let response = send(app_for(&backend), get("/orders", Some(TOKEN))).await;
    assert!(response.body.contains("Not authorized as an admin"));
    assert!(!response.body.contains("order-row"));
}

#[tokio::test]
async fn test_generic_message_when_backend_gives_none() {
    let backend = mock_backend().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&backend)
        .await;

    let response = send(app_for(&backend), get("/orders", Some(TOKEN))).await;
    assert!(
        response
            .body
            .contains("Failed to fetch orders. Check backend connection.")
    );
}

#[tokio::test]
async fn test_empty_order_list() {
    let backend = mock_backend().await;
    mount_orders(&backend, json!([])).await;

    let response = send(app_for(&backend), get("/orders", Some(TOKEN))).await;
    assert!(response.body.contains("No orders found."));
}

#[tokio::test]
async fn test_spinner_streams_before_orders() {
    let backend = mock_backend().await;
    mount_orders(&backend, orders()).await;

    let chunks = send_chunks(app_for(&backend), get("/orders", Some(TOKEN))).await;

    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].contains("Loading orders..."));
    assert!(chunks[0].contains("Manage Orders"));
    assert!(!chunks[0].contains("order-row"));
    assert_eq!(chunks[1].matches(r#"class="order-row""#).count(), 3);
    assert!(chunks[1].ends_with("</html>"));
}
