//! HTTP client for communicating with the storefront backend

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use storefront_core::config::BackendConfig;
use storefront_core::types::{
    LoginRequest, LoginResponse, MonthlySales, Order, OrderStats, Product, ProductInput,
    TopSellingProduct,
};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Errors raised while talking to the backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// No backend base URL is configured
    #[error("Backend URL is not configured")]
    NotConfigured,

    /// The request never produced a response
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("Backend returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        /// HTTP status
        status: StatusCode,
        /// `message` field of the error body, when present
        message: Option<String>,
    },

    /// The body was not valid JSON for the expected type
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body was JSON but not of the expected shape
    #[error("Unexpected data format from server: {0}")]
    UnexpectedShape(String),
}

impl ApiError {
    /// Message supplied by the backend, if any
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Backend message, or `fallback` when the backend gave none
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Result alias for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// API client for making HTTP requests to the storefront backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    /// Create a new API client for an already normalised base URL (see
    /// [`BackendConfig::url`]). `None` leaves the client unconfigured; every
    /// call then fails with [`ApiError::NotConfigured`].
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Create a client from the backend section of the configuration
    pub fn from_config(backend: &BackendConfig) -> Self {
        Self::new(backend.url().map(str::to_string))
    }

    /// Whether a backend base URL is available
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// The configured base URL
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn url(&self, path: &str) -> ApiResult<String> {
        self.base_url
            .as_ref()
            .map(|base| format!("{base}{path}"))
            .ok_or(ApiError::NotConfigured)
    }

    /// List the product catalog. This endpoint is public.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedShape`] when the body is not a JSON
    /// array, or any transport/status error.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        let url = self.url("/api/products")?;
        let body: serde_json::Value = self.send(self.client.get(&url), &url).await?;

        if !body.is_array() {
            warn!(url = %url, "Product list response is not an array");
            return Err(ApiError::UnexpectedShape(
                "expected an array of products".to_string(),
            ));
        }

        Ok(serde_json::from_value(body)?)
    }

    /// Create a product
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token, input), fields(name = %input.name))]
    pub async fn create_product(&self, token: &str, input: &ProductInput) -> ApiResult<()> {
        let url = self.url("/api/products")?;
        let request = self.client.post(&url).bearer_auth(token).json(input);
        self.send_discarding(request, &url).await
    }

    /// Replace the fields of an existing product
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token, input))]
    pub async fn update_product(
        &self,
        token: &str,
        id: &str,
        input: &ProductInput,
    ) -> ApiResult<()> {
        let url = self.url(&format!("/api/products/{}", urlencoding::encode(id)))?;
        let request = self.client.put(&url).bearer_auth(token).json(input);
        self.send_discarding(request, &url).await
    }

    /// Delete a product by id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    #[instrument(skip(self, token))]
    pub async fn delete_product(&self, token: &str, id: &str) -> ApiResult<()> {
        let url = self.url(&format!("/api/products/{}", urlencoding::encode(id)))?;
        let request = self.client.delete(&url).bearer_auth(token);
        self.send_discarding(request, &url).await
    }

    /// List all orders
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, token))]
    pub async fn list_orders(&self, token: &str) -> ApiResult<Vec<Order>> {
        self.get_authorized("/api/orders", token).await
    }

    /// Aggregate order statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, token))]
    pub async fn order_stats(&self, token: &str) -> ApiResult<OrderStats> {
        self.get_authorized("/api/orders/stats", token).await
    }

    /// Best-selling products, ranked by the backend
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, token))]
    pub async fn top_selling(&self, token: &str) -> ApiResult<Vec<TopSellingProduct>> {
        self.get_authorized("/api/orders/top-selling", token).await
    }

    /// Revenue bucketed by month
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, token))]
    pub async fn sales_by_month(&self, token: &str) -> ApiResult<Vec<MonthlySales>> {
        self.get_authorized("/api/orders/sales-by-month", token).await
    }

    /// Exchange credentials for a session token
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the credentials or answers
    /// without a token.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<String> {
        let url = self.url("/api/users/login")?;
        let response: LoginResponse = self
            .send(self.client.post(&url).json(credentials), &url)
            .await?;

        response
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::UnexpectedShape("login response has no token".to_string()))
    }

    async fn get_authorized<T: DeserializeOwned>(&self, path: &str, token: &str) -> ApiResult<T> {
        let url = self.url(path)?;
        self.send(self.client.get(&url).bearer_auth(token), &url)
            .await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> ApiResult<T> {
        let response = Self::dispatch(request, url).await?;
        let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_discarding(&self, request: RequestBuilder, url: &str) -> ApiResult<()> {
        Self::dispatch(request, url).await.map(drop)
    }

    async fn dispatch(request: RequestBuilder, url: &str) -> ApiResult<Response> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        debug!(url = %url, status = %status, "Backend responded");

        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        Err(ApiError::Status { status, message })
    }
}
