//! Order management page

use crate::components::status_badge::BadgeStyle;
use crate::components::{ErrorBanner, OrderModal, StatusBadge};
use crate::format::{list_date, money_or_zero, short_id};
use crate::page_state::PageState;
use leptos::prelude::*;
use storefront_core::types::Order;

/// Order table with an optional detail modal
#[component]
pub fn OrdersPage(
    /// Settled order list fetch
    state: PageState<Vec<Order>>,
    /// Order whose detail modal is open
    selected: Option<Order>,
) -> impl IntoView {
    if let Some(message) = state.error {
        return view! { <ErrorBanner message=message /> }.into_any();
    }

    let rows = if state.data.is_empty() {
        view! {
            <tr>
                <td colspan="6" class="empty-state">"No orders found."</td>
            </tr>
        }
        .into_any()
    } else {
        state
            .data
            .into_iter()
            .map(|order| view! { <OrderRow order=order /> })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="page">
            <h1 class="page-title">"Manage Orders"</h1>
            <div class="table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Order ID"</th>
                            <th>"User"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                            <th>"Date"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            {selected.map(|order| view! { <OrderModal order=order /> })}
        </div>
    }
    .into_any()
}

#[component]
fn OrderRow(order: Order) -> impl IntoView {
    let view_href = format!("/orders?view={}", urlencoding::encode(&order.id));

    view! {
        <tr class="order-row">
            <td class="order-id">{short_id(&order.id).to_string()}</td>
            <td>
                <p>{order.user.name}</p>
                <p class="muted">{order.user.email}</p>
            </td>
            <td>{money_or_zero(order.total_price)}</td>
            <td>
                <StatusBadge status=order.status palette=BadgeStyle::List />
            </td>
            <td>{list_date(order.created_at.as_ref())}</td>
            <td class="row-actions">
                <a href=view_href class="link-primary">"View"</a>
            </td>
        </tr>
    }
}
