//! Sales report page

use crate::components::{ErrorBanner, MonthlySalesTable, TopSellingTable};
use crate::page_state::PageState;
use leptos::prelude::*;
use storefront_core::types::{MonthlySales, TopSellingProduct};

/// Composite error shown when any report request fails
pub const SALES_REPORT_ERROR: &str = "Failed to fetch sales report data.";

/// Both report series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesReportData {
    /// Best sellers
    pub top_selling: Vec<TopSellingProduct>,
    /// Revenue by month
    pub monthly: Vec<MonthlySales>,
}

/// Sales report. `None` renders the static placeholder.
#[component]
pub fn SalesReportPage(
    /// Settled report fetch, when reports are enabled
    report: Option<PageState<SalesReportData>>,
) -> impl IntoView {
    let Some(state) = report else {
        return view! { <SalesReportPlaceholder /> }.into_any();
    };

    if let Some(message) = state.error {
        return view! { <ErrorBanner message=message /> }.into_any();
    }

    view! {
        <div class="page">
            <h1 class="page-title">"Sales Report"</h1>
            <section class="panel">
                <h2>"Monthly Sales Overview"</h2>
                <MonthlySalesTable rows=state.data.monthly />
            </section>
            <section class="panel">
                <h2>"Top Selling Products"</h2>
                <TopSellingTable rows=state.data.top_selling />
            </section>
        </div>
    }
    .into_any()
}

#[component]
fn SalesReportPlaceholder() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Sales Report"</h1>
            <section class="panel">
                <h2>"Monthly Sales Overview"</h2>
                <p class="muted">"A detailed chart showing sales data by month will be placed here."</p>
            </section>
            <section class="panel">
                <h2>"Top Selling Products"</h2>
                <p class="muted">"A table listing the best-selling products goes here."</p>
            </section>
        </div>
    }
}
