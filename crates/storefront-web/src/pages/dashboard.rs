//! Dashboard overview page

use crate::components::{ErrorBanner, MonthlySalesTable, StatCard, TopSellingTable};
use crate::format::money;
use crate::page_state::PageState;
use leptos::prelude::*;
use storefront_core::types::{MonthlySales, OrderStats, TopSellingProduct};

/// Everything the data-driven dashboard shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    /// Headline statistics
    pub stats: OrderStats,
    /// Best sellers
    pub top_selling: Vec<TopSellingProduct>,
    /// Revenue by month
    pub monthly: Vec<MonthlySales>,
}

/// Dashboard overview. `None` renders the static placeholder.
#[component]
pub fn DashboardPage(
    /// Settled report fetch, when reports are enabled
    report: Option<PageState<DashboardData>>,
) -> impl IntoView {
    let Some(state) = report else {
        return view! { <DashboardPlaceholder /> }.into_any();
    };

    if let Some(message) = state.error {
        return view! { <ErrorBanner message=message /> }.into_any();
    }

    let DashboardData {
        stats,
        top_selling,
        monthly,
    } = state.data;

    view! {
        <div class="page">
            <h1 class="page-title">"Dashboard"</h1>
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
            <section class="panel">
                <h2>"Monthly Sales"</h2>
                <MonthlySalesTable rows=monthly />
            </section>
            <section class="panel">
                <h2>"Top Selling Products"</h2>
                <TopSellingTable rows=top_selling />
            </section>
        </div>
    }
    .into_any()
}

#[component]
fn DashboardPlaceholder() -> impl IntoView {
    view! {
        <div class="page placeholder">
            <div class="placeholder-card">
                <h1 class="page-title">"Dashboard View Removed"</h1>
                <p class="muted">"This view is currently empty. Please navigate using the sidebar."</p>
            </div>
        </div>
    }
}
