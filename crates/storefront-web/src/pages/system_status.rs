//! System status page: headline order statistics

use crate::components::{ErrorBanner, StatCard};
use crate::format::money;
use crate::page_state::PageState;
use leptos::prelude::*;
use storefront_core::types::OrderStats;

/// Four stat cards fed by the backend's order statistics. An error shows
/// above the cards, which then read zero.
#[component]
pub fn SystemStatusPage(
    /// Settled statistics fetch
    state: PageState<OrderStats>,
) -> impl IntoView {

    let stats = state.data;
    view! {
        <div class="page">
            <h1 class="page-title">"Application Health Overview"</h1>
            {state.error.map(|message| view! { <ErrorBanner message=message /> })}
            <div class="stat-grid">
                <StatCard title="Total Orders" value=stats.total_orders.to_string() accent="accent-blue" />
                <StatCard title="Total Revenue" value=money(stats.total_revenue) accent="accent-green" />
                <StatCard title="Pending Orders" value=stats.pending_orders.to_string() accent="accent-yellow" />
                <StatCard
                    title="Delivered Orders"
                    value=stats.delivered_orders.to_string()
                    accent="accent-purple"
                />
            </div>
        </div>
    }
    .into_any()
}
