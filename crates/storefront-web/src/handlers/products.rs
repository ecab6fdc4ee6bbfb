//! Product management handlers
//!
//! Mutations come in as HTML form posts. Success redirects back to the list,
//! which refetches it; failure re-renders the page with a blocking alert and
//! the form still holding what was submitted.

use crate::{
    api_client::{ApiClient, ApiError},
    forms::{ProductForm, ProductFormState},
    pages::ProductsPage,
    page_state::PageState,
    session::Session,
    state::AppState,
    views::{render_admin_page, stream_admin_page},
};
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use leptos::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use storefront_core::types::{Product, ProductInput};
use tracing::{error, info, instrument, warn};

/// Path of the product list
pub const PRODUCTS_PATH: &str = "/products";

/// List error when no backend is configured
pub const BACKEND_NOT_CONFIGURED: &str =
    "Backend URL is not configured. Please check your configuration.";
/// Action alert when no backend is configured
pub const BACKEND_ACTION_UNAVAILABLE: &str = "Backend URL is not configured. Cannot perform action.";
/// Action alert when no session token is stored
pub const AUTH_REQUIRED: &str =
    "Authentication failed. Please log in as an admin user to perform this action.";
/// List error for a transport or HTTP failure
pub const FETCH_FAILED: &str = "Failed to fetch products.";
/// List error for a body that is not an array
pub const UNEXPECTED_FORMAT: &str = "Unexpected data format from server.";
const SAVE_FAILED: &str = "Failed to save product. Check the server logs for details.";
const DELETE_FAILED: &str = "Failed to delete product. Check the server logs for details.";

/// Query of the products page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductsQuery {
    /// `new` opens an empty form
    pub form: Option<String>,
    /// Id of the product to edit
    pub edit: Option<String>,
}

impl ProductsQuery {
    fn form_state(&self, products: &[Product]) -> Option<ProductFormState> {
        if let Some(id) = self.edit.as_deref() {
            return products
                .iter()
                .find(|product| product.id == id)
                .map(ProductFormState::edit);
        }
        (self.form.as_deref() == Some("new")).then(ProductFormState::create)
    }
}

/// Product table, with the form open when the query asks for it
#[instrument(skip_all)]
pub async fn products_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductsQuery>,
) -> Response {
    stream_admin_page("Products", PRODUCTS_PATH, "Loading products...", async move {
        let products = load_products(&state.api_client).await;
        let form = query.form_state(&products.data);
        products_view(products, form, None)
    })
}

/// Create a product from the submitted form
#[instrument(skip_all, fields(name = %form.name))]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Response {
    let input = form.into_input();
    let result = perform(&state.api_client, &session, ProductAction::Create(&input)).await;
    finish(&state.api_client, result, || {
        Some(ProductFormState {
            editing: None,
            values: input,
        })
    })
    .await
}

/// Replace a product with the submitted form
#[instrument(skip_all, fields(id = %id))]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Response {
    let input = form.into_input();
    let result = perform(
        &state.api_client,
        &session,
        ProductAction::Update(&id, &input),
    )
    .await;
    finish(&state.api_client, result, || {
        Some(ProductFormState {
            editing: Some(id),
            values: input,
        })
    })
    .await
}

/// Delete a product
#[instrument(skip_all, fields(id = %id))]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    let result = perform(&state.api_client, &session, ProductAction::Delete(&id)).await;
    finish(&state.api_client, result, || None).await
}

async fn load_products(api: &ApiClient) -> PageState<Vec<Product>> {
    if !api.is_configured() {
        return PageState::failed(BACKEND_NOT_CONFIGURED);
    }

    PageState::from_result_with(api.list_products().await, |e| match e {
        ApiError::UnexpectedShape(_) => UNEXPECTED_FORMAT.to_string(),
        ApiError::NotConfigured => BACKEND_NOT_CONFIGURED.to_string(),
        _ => FETCH_FAILED.to_string(),
    })
}

#[derive(Debug, Clone, Copy)]
enum ProductAction<'a> {
    Create(&'a ProductInput),
    Update(&'a str, &'a ProductInput),
    Delete(&'a str),
}

impl ProductAction<'_> {
    const fn failure_message(self) -> &'static str {
        match self {
            Self::Create(_) | Self::Update(..) => SAVE_FAILED,
            Self::Delete(_) => DELETE_FAILED,
        }
    }
}

/// Run a mutation, returning the alert text on failure
async fn perform(
    api: &ApiClient,
    session: &Session,
    action: ProductAction<'_>,
) -> Result<(), String> {
    if !api.is_configured() {
        return Err(BACKEND_ACTION_UNAVAILABLE.to_string());
    }
    let Some(token) = session.token() else {
        warn!("Product action attempted without a session token");
        return Err(AUTH_REQUIRED.to_string());
    };

    let result = match action {
        ProductAction::Create(input) => api.create_product(token, input).await,
        ProductAction::Update(id, input) => api.update_product(token, id, input).await,
        ProductAction::Delete(id) => api.delete_product(token, id).await,
    };

    match result {
        Ok(()) => {
            info!(?action, "Product action succeeded");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Product action failed");
            Err(e.message_or(action.failure_message()))
        }
    }
}

async fn finish(
    api: &ApiClient,
    result: Result<(), String>,
    reopen: impl FnOnce() -> Option<ProductFormState>,
) -> Response {
    match result {
        Ok(()) => Redirect::to(PRODUCTS_PATH).into_response(),
        Err(alert) => {
            let products = load_products(api).await;
            render_admin_page("Products", PRODUCTS_PATH, products_view(products, reopen(), Some(alert)))
                .into_response()
        }
    }
}

fn products_view(
    products: PageState<Vec<Product>>,
    form: Option<ProductFormState>,
    alert: Option<String>,
) -> impl IntoView {
    view! { <ProductsPage state=products form=form alert=alert /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            image: String::new(),
            description: String::new(),
            category: String::new(),
            price: 1.0,
            count_in_stock: 1,
        }
    }

    #[test]
    fn test_query_opens_create_form() {
        let query = ProductsQuery {
            form: Some("new".to_string()),
            edit: None,
        };
        assert_eq!(query.form_state(&[]), Some(ProductFormState::create()));
    }

    #[test]
    fn test_query_opens_edit_form_for_listed_product() {
        let products = vec![product("a"), product("b")];
        let query = ProductsQuery {
            form: None,
            edit: Some("b".to_string()),
        };

        let state = query.form_state(&products).unwrap();
        assert_eq!(state.editing.as_deref(), Some("b"));
        assert_eq!(state.values.name, "Product b");
    }

    #[test]
    fn test_query_ignores_unknown_edit_id_and_plain_list() {
        let products = vec![product("a")];
        let missing = ProductsQuery {
            form: None,
            edit: Some("zzz".to_string()),
        };
        assert_eq!(missing.form_state(&products), None);
        assert_eq!(ProductsQuery::default().form_state(&products), None);
    }

    #[tokio::test]
    async fn test_actions_need_a_backend() {
        let api = ApiClient::new(None);
        let result = perform(&api, &Session::with_token("t"), ProductAction::Delete("a")).await;
        assert_eq!(result, Err(BACKEND_ACTION_UNAVAILABLE.to_string()));
    }

    #[tokio::test]
    async fn test_actions_need_a_token() {
        let api = ApiClient::new(Some("http://127.0.0.1:9".to_string()));
        let input = ProductInput::default();
        let result = perform(&api, &Session::default(), ProductAction::Create(&input)).await;
        assert_eq!(result, Err(AUTH_REQUIRED.to_string()));
    }
}
