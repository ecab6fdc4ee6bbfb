//! Error/data state shared by every page
//!
//! A page only renders once its fetches have settled; while they are in
//! flight the browser shows the loading shell streamed by
//! [`crate::views::stream_admin_page`].

use crate::api_client::{ApiError, ApiResult};
use tracing::error;

/// Settled state of one page's data fetch
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<T> {
    /// Message to show instead of (or above) the data
    pub error: Option<String>,
    /// Fetched data, or its empty default
    pub data: T,
}

impl<T: Default> PageState<T> {
    /// Settled with data
    #[must_use]
    pub const fn ready(data: T) -> Self {
        Self { error: None, data }
    }

    /// Settled with an error; data stays at its default
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            data: T::default(),
        }
    }

    /// Settle from a backend result. The error shows the backend's message
    /// when it sent one, `fallback` otherwise.
    #[must_use]
    pub fn from_result(result: ApiResult<T>, fallback: &str) -> Self {
        match result {
            Ok(data) => Self::ready(data),
            Err(e) => {
                error!(error = %e, "Page data fetch failed");
                Self::failed(e.message_or(fallback))
            }
        }
    }

    /// Settle from a backend result, mapping the error with `describe`
    #[must_use]
    pub fn from_result_with(result: ApiResult<T>, describe: impl FnOnce(&ApiError) -> String) -> Self {
        match result {
            Ok(data) => Self::ready(data),
            Err(e) => {
                error!(error = %e, "Page data fetch failed");
                Self::failed(describe(&e))
            }
        }
    }
}

impl<T> PageState<T> {
    /// Whether the page should render its content
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.error.is_none()
    }
}
