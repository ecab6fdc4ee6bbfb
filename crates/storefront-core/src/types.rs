//! Data types mirrored from the storefront backend
//!
//! The backend speaks camelCase JSON and identifies documents with a
//! Mongo-style `_id`; `id` is accepted as an alias everywhere.

use chrono::{DateTime, Month, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// `null` decodes like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Whole(i64),
    Fractional(f64),
}

/// Stock counts may have been stored as fractions; they are truncated.
#[allow(clippy::cast_possible_truncation)]
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Whole(n)) => n,
        Some(Count::Fractional(n)) if n.is_finite() => n.trunc() as i64,
        Some(Count::Fractional(_)) | None => 0,
    })
}

/// Backend document identifier
pub type ProductId = String;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Image URL
    #[serde(default)]
    pub image: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// Unit price
    #[serde(default)]
    pub price: f64,

    /// Units in stock
    #[serde(default, deserialize_with = "lenient_count")]
    pub count_in_stock: i64,
}

/// Payload sent to the backend when creating or updating a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
    /// Free-text description
    pub description: String,
    /// Category label
    pub category: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub count_in_stock: i64,
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price,
            count_in_stock: product.count_in_stock,
        }
    }
}

/// Customer attached to an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
    /// Backend identifier
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    /// Customer name
    #[serde(default)]
    pub name: String,
    /// Customer email
    #[serde(default)]
    pub email: String,
}

/// A single line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product name at the time of ordering
    #[serde(default)]
    pub name: String,
    /// Product image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Quantity ordered
    #[serde(default)]
    pub qty: u32,
    /// Unit price
    #[serde(default)]
    pub price: f64,
}

/// Shipping destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Street address
    #[serde(default)]
    pub address: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// Postal code
    #[serde(default)]
    pub postal_code: String,
    /// Country
    #[serde(default)]
    pub country: String,
}

/// A customer order. Read-only from the dashboard's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Customer
    #[serde(default)]
    pub user: OrderUser,

    /// Ordered items
    #[serde(default)]
    pub order_items: Vec<OrderItem>,

    /// Shipping destination, if one was provided
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,

    /// Order total
    #[serde(default)]
    pub total_price: Option<f64>,

    /// Raw status string; see [`OrderStatus`] for the known values
    #[serde(default)]
    pub status: Option<String>,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// The status if it is one of the known values
    #[must_use]
    pub fn known_status(&self) -> Option<OrderStatus> {
        self.status.as_deref().and_then(OrderStatus::parse)
    }
}

/// Known order statuses. The backend's set is open; anything else is treated
/// as unknown by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, awaiting confirmation
    Pending,
    /// Confirmed by the shop
    Confirmed,
    /// Being prepared
    Processing,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
    /// Cancelled
    Cancelled,
    /// Payment was declined
    PaymentFailed,
}

impl OrderStatus {
    /// All known statuses
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::Confirmed,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
        Self::PaymentFailed,
    ];

    /// Case-insensitive lookup of a raw status string
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
    }

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::PaymentFailed => "payment_failed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate order statistics from `/api/orders/stats`. Missing and `null`
/// values read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderStats {
    /// Number of orders
    #[serde(deserialize_with = "null_as_default")]
    pub total_orders: u64,
    /// Sum of order totals
    #[serde(deserialize_with = "null_as_default")]
    pub total_revenue: f64,
    /// Orders still pending
    #[serde(deserialize_with = "null_as_default")]
    pub pending_orders: u64,
    /// Orders delivered
    #[serde(deserialize_with = "null_as_default")]
    pub delivered_orders: u64,
}

/// Month key of a sales bucket. Backends send a preformatted label, a bare
/// month number or the `{ year, month }` group key of an aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthKey {
    /// Preformatted label such as `2024-03`
    Label(String),
    /// Month number, 1-12
    Index(u32),
    /// Aggregation group key
    YearMonth {
        /// Calendar year
        year: i32,
        /// Month number, 1-12
        month: u32,
    },
}

impl Default for MonthKey {
    fn default() -> Self {
        Self::Label(String::new())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::Index(month) => {
                let name = u8::try_from(*month)
                    .ok()
                    .and_then(|m| Month::try_from(m).ok());
                match name {
                    Some(name) => f.write_str(name.name()),
                    None => write!(f, "{month}"),
                }
            }
            Self::YearMonth { year, month } => write!(f, "{year}-{month:02}"),
        }
    }
}

/// One bucket of `/api/orders/sales-by-month`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawMonthlySales")]
pub struct MonthlySales {
    /// Month the bucket covers
    pub month: MonthKey,
    /// Revenue in the month
    pub total_sales: f64,
    /// Orders in the month
    pub order_count: u64,
}

/// Wire form of a sales bucket. The aggregation's `_id` and a `month` label
/// may both be present; the label wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMonthlySales {
    #[serde(default)]
    month: Option<MonthKey>,
    #[serde(default, rename = "_id")]
    group: Option<MonthKey>,
    #[serde(default, deserialize_with = "null_as_default")]
    total_sales: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    order_count: u64,
}

impl From<RawMonthlySales> for MonthlySales {
    fn from(raw: RawMonthlySales) -> Self {
        Self {
            month: raw.month.or(raw.group).unwrap_or_default(),
            total_sales: raw.total_sales,
            order_count: raw.order_count,
        }
    }
}

/// One row of `/api/orders/top-selling`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellingProduct {
    /// Product identifier, when the backend includes it
    #[serde(default, rename = "_id", alias = "id")]
    pub id: Option<String>,
    /// Product name
    #[serde(default)]
    pub name: String,
    /// Units sold
    #[serde(default)]
    pub total_quantity: u64,
    /// Revenue from the product
    #[serde(default)]
    pub total_revenue: f64,
}

/// Credentials posted to the backend login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Backend login response; only the token is used
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token
    #[serde(default)]
    pub token: Option<String>,
    /// Display name of the account
    #[serde(default)]
    pub name: Option<String>,
}
