//! Dashboard, system status and sales report pages

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use storefront_web::build_app;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, header, method, path},
};

async fn mount_json(backend: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(backend)
        .await;
}

async fn mount_status(backend: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(backend)
        .await;
}

#[tokio::test]
async fn test_system_status_cards() {
    let backend = mock_backend().await;
    mount_json(
        &backend,
        "/api/orders/stats",
        json!({"totalOrders": 42, "totalRevenue": 1234.5, "pendingOrders": 3, "deliveredOrders": 30}),
    )
    .await;

    let response = send(app_for(&backend), get("/system-status", Some(TOKEN))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Application Health Overview"));
    assert!(response.body.contains(">42<"));
    assert!(response.body.contains("₹1234.50"));
    assert!(response.body.contains(r#"href="/system-status" class="nav-link active""#));
}

#[tokio::test]
async fn test_system_status_error_shows_banner_above_zero_cards() {
    let backend = mock_backend().await;
    mount_status(&backend, "/api/orders/stats", 500).await;

    let response = send(app_for(&backend), get("/system-status", Some(TOKEN))).await;

    let banner = response
        .body
        .find("Failed to fetch backend statistics. Check API endpoint /api/orders/stats")
        .unwrap();
    let cards = response.body.find("stat-grid").unwrap();
    assert!(banner < cards);
    assert!(response.body.contains("₹0.00"));
}

#[tokio::test]
async fn test_null_stats_render_as_zero() {
    let backend = mock_backend().await;
    mount_json(
        &backend,
        "/api/orders/stats",
        json!({"totalOrders": 0, "totalRevenue": null, "pendingOrders": null, "deliveredOrders": 0}),
    )
    .await;

    let response = send(app_for(&backend), get("/system-status", Some(TOKEN))).await;

    assert!(!response.body.contains("error-banner"));
    assert!(response.body.contains("₹0.00"));
}

#[tokio::test]
async fn test_sales_report_tables() {
    let backend = mock_backend().await;
    mount_json(
        &backend,
        "/api/orders/top-selling",
        json!([{"_id": "p1", "name": "Kettle", "totalQuantity": 40, "totalRevenue": 19960.0}]),
    )
    .await;
    mount_json(
        &backend,
        "/api/orders/sales-by-month",
        json!([{"_id": {"year": 2024, "month": 4}, "totalSales": 5000.0, "orderCount": 12}]),
    )
    .await;

    let response = send(app_for(&backend), get("/sales-report", Some(TOKEN))).await;

    assert!(response.body.contains("Kettle"));
    assert!(response.body.contains("₹19960.00"));
    assert!(response.body.contains("2024-04"));
    assert!(response.body.contains("₹5000.00"));
}

#[tokio::test]
async fn test_sales_report_accepts_month_number_keys() {
    let backend = mock_backend().await;
    mount_json(&backend, "/api/orders/top-selling", json!([])).await;
    mount_json(
        &backend,
        "/api/orders/sales-by-month",
        json!([{"_id": 4, "totalSales": 5000.0, "orderCount": 12}]),
    )
    .await;

    let response = send(app_for(&backend), get("/sales-report", Some(TOKEN))).await;

    assert!(response.body.contains("April"));
    assert!(response.body.contains("₹5000.00"));
    assert!(!response.body.contains("Failed to fetch sales report data."));
}

#[tokio::test]
async fn test_sales_report_prefers_month_label_over_group_key() {
    let backend = mock_backend().await;
    mount_json(&backend, "/api/orders/top-selling", json!([])).await;
    mount_json(
        &backend,
        "/api/orders/sales-by-month",
        json!([{"_id": {"year": 2024, "month": 4}, "month": "Apr 2024", "totalSales": 10.0}]),
    )
    .await;

    let response = send(app_for(&backend), get("/sales-report", Some(TOKEN))).await;

    assert!(response.body.contains("Apr 2024"));
    assert!(!response.body.contains("Failed to fetch sales report data."));
}

#[tokio::test]
async fn test_empty_sales_arrays_render_both_fallbacks() {
    let backend = mock_backend().await;
    mount_json(&backend, "/api/orders/top-selling", json!([])).await;
    mount_json(&backend, "/api/orders/sales-by-month", json!([])).await;

    let response = send(app_for(&backend), get("/sales-report", Some(TOKEN))).await;

    assert!(response.body.contains("No monthly sales data available."));
    assert!(response.body.contains("No top selling products data available."));
    assert!(!response.body.contains("data-table"));
}

#[tokio::test]
async fn test_sales_report_failure_is_composite() {
    let backend = mock_backend().await;
    mount_json(&backend, "/api/orders/top-selling", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/orders/sales-by-month"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "aggregation failed"})))
        .mount(&backend)
        .await;

    let response = send(app_for(&backend), get("/sales-report", Some(TOKEN))).await;

    assert!(response.body.contains("Failed to fetch sales report data."));
    assert!(!response.body.contains("aggregation failed"));
}

#[tokio::test]
async fn test_dashboard_combines_all_reports() {
    let backend = mock_backend().await;
    mount_json(
        &backend,
        "/api/orders/stats",
        json!({"totalOrders": 7, "totalRevenue": 700.0, "pendingOrders": 1, "deliveredOrders": 5}),
    )
    .await;
    mount_json(&backend, "/api/orders/top-selling", json!([])).await;
    mount_json(
        &backend,
        "/api/orders/sales-by-month",
        json!([{"month": "2024-03", "totalSales": 700.0, "orderCount": 7}]),
    )
    .await;

    let response = send(app_for(&backend), get("/dashboard", Some(TOKEN))).await;

    assert!(response.body.contains("₹700.00"));
    assert!(response.body.contains("2024-03"));
    assert!(response.body.contains("No top selling products data available."));
    assert_eq!(backend.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_disabled_reports_make_no_backend_calls() {
    let backend = mock_backend().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&backend)
        .await;
    let config = TestConfigBuilder::new()
        .with_backend(&backend.uri())
        .without_reports()
        .build();

    let dashboard = send(build_app(config.clone()), get("/dashboard", Some(TOKEN))).await;
    assert!(dashboard.body.contains("Dashboard View Removed"));

    let sales = send(build_app(config), get("/sales-report", Some(TOKEN))).await;
    assert!(sales.body.contains("A table listing the best-selling products goes here."));
}
