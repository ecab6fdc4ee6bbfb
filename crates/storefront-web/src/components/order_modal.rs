//! Read-only order detail modal

use super::status_badge::{BadgeStyle, StatusBadge};
use crate::format::{detail_date, money, money_or_zero, short_id};
use leptos::prelude::*;
use storefront_core::types::{Order, OrderItem, ShippingAddress};

/// Image shown for items that have none
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/50x50/3B82F6/FFFFFF?text=Item";

/// Detail view of one order. Closing returns to the plain order list.
#[component]
pub fn OrderModal(
    /// Order picked from the already-fetched list
    order: Order,
) -> impl IntoView {
    let Order {
        id,
        user,
        order_items,
        shipping_address,
        total_price,
        status,
        created_at,
    } = order;

    view! {
        <div class="modal-backdrop">
            <div class="modal-dialog modal-wide">
                <div class="modal-header">
                    <h2 class="modal-title">
                        "Order Details " <span class="order-ref">"#" {short_id(&id).to_string()}</span>
                    </h2>
                    <a href="/orders" class="modal-close" aria-label="Close">"✕"</a>
                </div>

                <div class="order-summary">
                    <div class="summary-tile">
                        <p class="summary-label">"Total Amount"</p>
                        <p class="summary-total">{money_or_zero(total_price)}</p>
                    </div>
                    <div class="summary-tile">
                        <p class="summary-label">"Order Date"</p>
                        <p class="summary-value">{detail_date(created_at.as_ref())}</p>
                    </div>
                    <StatusBadge status=status palette=BadgeStyle::Modal />
                </div>

                <div class="order-parties">
                    <section class="panel">
                        <h3>"Customer Info"</h3>
                        <p><strong>"Name: "</strong>{user.name}</p>
                        <p><strong>"Email: "</strong>{user.email}</p>
                        <p><strong>"User ID: "</strong>{short_id(&user.id).to_string()}</p>
                    </section>
                    <section class="panel">
                        <h3>"Shipping Address"</h3>
                        <ShippingBlock address=shipping_address />
                    </section>
                </div>

                <section class="panel">
                    <h3>"Items Ordered"</h3>
                    <ItemList items=order_items />
                </section>

                <div class="form-actions">
                    <a href="/orders" class="btn btn-primary">"Close"</a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ShippingBlock(address: Option<ShippingAddress>) -> impl IntoView {
    match address {
        Some(address) => view! {
            <p>{format!("{}, {}", address.address, address.city)}</p>
            <p>{format!("{}, {}", address.postal_code, address.country)}</p>
        }
        .into_any(),
        None => view! { <p>"No shipping address provided."</p> }.into_any(),
    }
}

#[component]
fn ItemList(items: Vec<OrderItem>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="empty-state">"No items found for this order."</p> }.into_any();
    }

    view! {
        <ul class="order-items">
            {items
                .into_iter()
                .map(|item| {
                    let image = item
                        .image
                        .filter(|src| !src.is_empty())
                        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
                    view! {
                        <li class="order-item">
                            <img src=image alt=item.name.clone() class="item-thumb" />
                            <span class="item-name">{item.name}</span>
                            <span class="item-qty">{format!("{} x {}", item.qty, money(item.price))}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
