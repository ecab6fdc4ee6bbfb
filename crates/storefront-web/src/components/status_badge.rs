//! Order status badges
//!
//! Both palettes are keyed by the lower-cased status. Missing, empty or
//! unmapped statuses get the neutral class and the text `N/A`.

use leptos::prelude::*;
use storefront_core::types::OrderStatus;

/// Text shown for statuses that are missing or not recognised
pub const UNKNOWN_STATUS: &str = "N/A";

/// Neutral class of the list palette
pub const LIST_NEUTRAL: &str = "badge-gray";

/// Neutral class of the modal palette
pub const MODAL_NEUTRAL: &str = "status-solid-gray";

/// Where a badge is drawn; each place has its own palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Pill in the orders table
    List,
    /// Solid tile in the order detail modal
    Modal,
}

/// Display text for a raw status: upper-cased when known, `N/A` otherwise
#[must_use]
pub fn status_label(raw: Option<&str>) -> String {
    raw.and_then(OrderStatus::parse).map_or_else(
        || UNKNOWN_STATUS.to_string(),
        |status| status.as_str().to_uppercase(),
    )
}

/// CSS class for a raw status in the given palette
#[must_use]
pub fn status_class(raw: Option<&str>, style: BadgeStyle) -> &'static str {
    let status = raw.and_then(OrderStatus::parse);
    match style {
        BadgeStyle::List => status.map_or(LIST_NEUTRAL, list_class),
        BadgeStyle::Modal => status.map_or(MODAL_NEUTRAL, modal_class),
    }
}

const fn list_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge-yellow",
        OrderStatus::Confirmed | OrderStatus::Delivered => "badge-green",
        OrderStatus::Processing => "badge-blue",
        OrderStatus::Shipped => "badge-purple",
        OrderStatus::Cancelled | OrderStatus::PaymentFailed => "badge-red",
    }
}

const fn modal_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => "status-solid-green",
        OrderStatus::Shipped => "status-solid-blue",
        OrderStatus::Processing | OrderStatus::Pending => "status-solid-yellow",
        OrderStatus::Cancelled => "status-solid-red",
        OrderStatus::Confirmed | OrderStatus::PaymentFailed => MODAL_NEUTRAL,
    }
}

/// Status pill or tile for an order
#[component]
pub fn StatusBadge(
    /// Raw status from the backend
    status: Option<String>,
    /// Palette to use
    palette: BadgeStyle,
) -> impl IntoView {
    let label = status_label(status.as_deref());
    let shape = match palette {
        BadgeStyle::List => "status-badge",
        BadgeStyle::Modal => "status-tile",
    };
    let class = format!("{shape} {}", status_class(status.as_deref(), palette));

    view! { <span class=class>{label}</span> }
}
