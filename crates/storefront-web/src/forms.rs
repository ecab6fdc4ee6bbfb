//! Form payloads posted by the browser

use serde::Deserialize;
use storefront_core::types::{LoginRequest, Product, ProductId, ProductInput};

/// Raw product form fields as submitted by the browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductForm {
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
    /// Free-text description
    pub description: String,
    /// Price as typed
    pub price: String,
    /// Category label
    pub category: String,
    /// Stock count as typed
    pub count_in_stock: String,
}

impl ProductForm {
    /// Convert to the backend payload, coercing the numeric fields
    #[must_use]
    pub fn into_input(self) -> ProductInput {
        ProductInput {
            price: coerce_number(&self.price),
            count_in_stock: coerce_count(&self.count_in_stock),
            name: self.name,
            image: self.image,
            description: self.description,
            category: self.category,
        }
    }
}

/// Number coercion for numeric inputs: blank is zero, anything unparsable or
/// non-finite is zero too.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Whole-unit coercion for stock counts
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn coerce_count(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .unwrap_or_else(|_| coerce_number(raw).trunc() as i64)
}

/// What the shared add/edit form is currently showing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormState {
    /// Product being edited; `None` means the form creates a new product
    pub editing: Option<ProductId>,
    /// Field values to prefill
    pub values: ProductInput,
}

impl ProductFormState {
    /// Empty form for a new product
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing product
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        Self {
            editing: Some(product.id.clone()),
            values: ProductInput::from(product),
        }
    }

    /// Heading of the form
    #[must_use]
    pub const fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Product"
        } else {
            "Add New Product"
        }
    }

    /// URL the form posts to
    #[must_use]
    pub fn action(&self) -> String {
        self.editing.as_ref().map_or_else(
            || "/products".to_string(),
            |id| format!("/products/{}", urlencoding::encode(id)),
        )
    }
}

/// Login form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl From<LoginForm> for LoginRequest {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.email.trim().to_string(),
            password: form.password,
        }
    }
}
