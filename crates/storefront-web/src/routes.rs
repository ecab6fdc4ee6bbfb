//! Route definitions for the admin dashboard

use crate::{
    handlers::{assets, auth, health, pages, products},
    session::require_session,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

/// Build the complete router. Every route, the fallback included, sits
/// behind the session guard.
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Public
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/health", get(health::health_check))
        .route("/static/admin.css", get(assets::stylesheet))
        // Session
        .route("/logout", post(auth::logout))
        // Pages
        .route("/", get(pages::root))
        .route("/dashboard", get(pages::dashboard))
        .route("/system-status", get(pages::system_status))
        .route("/orders", get(pages::orders))
        .route("/sales-report", get(pages::sales_report))
        // Product management
        .route(
            "/products",
            get(products::products_page).post(products::create_product),
        )
        .route("/products/:id", post(products::update_product))
        .route("/products/:id/delete", post(products::delete_product))
        // Unknown authenticated paths land on the dashboard
        .fallback(pages::dashboard)
        .layer(middleware::from_fn(require_session))
}
