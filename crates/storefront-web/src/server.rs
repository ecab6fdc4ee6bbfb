//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use std::sync::Arc;
use storefront_core::Config;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the complete web application with all routes and state
pub fn build_app(config: Config) -> Router {
    let state = Arc::new(AppState::new(config));

    build_routes()
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
