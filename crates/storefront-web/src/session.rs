//! Session token storage and the route guard
//!
//! The token lives in a browser cookie under a fixed key. Its presence alone
//! gates access to the protected layout; nothing here validates it.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{Method, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::convert::Infallible;
use tracing::debug;

/// Cookie holding the session token
pub const SESSION_COOKIE: &str = "userToken";

/// Where unauthenticated navigations are sent
pub const LOGIN_PATH: &str = "/login";

/// Form target that ends the session
pub const LOGOUT_PATH: &str = "/logout";

/// Landing page for authenticated users
pub const DEFAULT_PATH: &str = "/dashboard";

/// Paths reachable without a session; a trailing slash covers the subtree
const PUBLIC_PATHS: [&str; 3] = [LOGIN_PATH, "/health", "/static/"];

/// The caller's session, read from the request cookies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A session holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Read the session from a cookie jar. Empty values count as absent.
    #[must_use]
    pub fn from_jar(jar: &CookieJar) -> Self {
        Self {
            token: jar
                .get(SESSION_COOKIE)
                .map(|cookie| cookie.value().to_string())
                .filter(|token| !token.is_empty()),
        }
    }

    /// The stored token
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is stored
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_jar(&CookieJar::from_headers(&parts.headers)))
    }
}

/// Store `token` in the jar
#[must_use]
pub fn store_token(jar: CookieJar, token: String) -> CookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Remove the token from the jar
#[must_use]
pub fn clear_token(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

/// Outcome of the route guard for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the request through
    Allow,
    /// Send the browser to the login page
    RedirectToLogin,
}

/// Decide whether a request may proceed.
///
/// Without a token everything but the public paths is redirected, except
/// POSTs to the form endpoints: those handlers report a missing token as an
/// alert themselves.
#[must_use]
pub fn guard(method: &Method, path: &str, authenticated: bool) -> GuardDecision {
    if authenticated || is_public(path) || (method == Method::POST && is_form_endpoint(path)) {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// `/logout`, `/products`, `/products/{id}` and `/products/{id}/delete`
fn is_form_endpoint(path: &str) -> bool {
    if path == LOGOUT_PATH || path == "/products" {
        return true;
    }
    let Some(rest) = path.strip_prefix("/products/") else {
        return false;
    };
    let id = rest.strip_suffix("/delete").unwrap_or(rest);
    !id.is_empty() && !id.contains('/')
}

fn is_public(path: &str) -> bool {
    PUBLIC_PATHS
        .iter()
        .any(|public| match public.strip_suffix('/') {
            Some(dir) => path == dir || path.starts_with(public),
            None => path == *public,
        })
}

/// Middleware applying [`guard`] to every request
pub async fn require_session(session: Session, request: Request, next: Next) -> Response {
    match guard(
        request.method(),
        request.uri().path(),
        session.is_authenticated(),
    ) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::RedirectToLogin => {
            debug!(path = %request.uri().path(), "No session token, redirecting to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}
