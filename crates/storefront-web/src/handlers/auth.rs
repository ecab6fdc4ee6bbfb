//! Login and logout

use crate::{
    api_client::ApiError,
    forms::LoginForm,
    pages::LoginPage,
    session::{DEFAULT_PATH, LOGIN_PATH, clear_token, store_token},
    state::AppState,
    views::render_document,
};
use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use leptos::prelude::*;
use std::sync::Arc;
use storefront_core::types::LoginRequest;
use tracing::{info, instrument, warn};

/// Shown when the backend rejects the credentials without a message
pub const LOGIN_FAILED: &str = "Invalid email or password.";
const LOGIN_UNAVAILABLE: &str = "Backend URL is not configured. Please check your configuration.";

/// Login form
pub async fn login_page() -> Html<String> {
    render_login(None, String::new())
}

/// Exchange the submitted credentials for a session token
#[instrument(skip_all, fields(email = %form.email))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let email = form.email.clone();

    match state.api_client.login(&LoginRequest::from(form)).await {
        Ok(token) => {
            info!("Admin signed in");
            (store_token(jar, token), Redirect::to(DEFAULT_PATH)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Login failed");
            let message = match e {
                ApiError::NotConfigured => LOGIN_UNAVAILABLE.to_string(),
                e => e.message_or(LOGIN_FAILED),
            };
            render_login(Some(message), email).into_response()
        }
    }
}

/// Clear the session token and return to the login page
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    info!("Admin signed out");
    (clear_token(jar), Redirect::to(LOGIN_PATH))
}

fn render_login(error: Option<String>, email: String) -> Html<String> {
    render_document("Login", view! { <LoginPage error=error email=email /> })
}
