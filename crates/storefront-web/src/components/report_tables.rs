//! Sales report tables shared by the dashboard and the sales report page

use crate::format::money;
use leptos::prelude::*;
use storefront_core::types::{MonthlySales, TopSellingProduct};

/// Shown instead of an empty monthly table
pub const NO_MONTHLY_SALES: &str = "No monthly sales data available.";

/// Shown instead of an empty top-selling table
pub const NO_TOP_SELLING: &str = "No top selling products data available.";

/// Monthly revenue buckets
#[component]
pub fn MonthlySalesTable(
    /// Rows in backend order
    rows: Vec<MonthlySales>,
) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="empty-state">{NO_MONTHLY_SALES}</p> }.into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Month"</th>
                    <th>"Total Sales"</th>
                    <th>"Orders"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.month.to_string()}</td>
                                <td>{money(row.total_sales)}</td>
                                <td>{row.order_count}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

/// Best-selling products, ranked by the backend
#[component]
pub fn TopSellingTable(
    /// Rows in rank order
    rows: Vec<TopSellingProduct>,
) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="empty-state">{NO_TOP_SELLING}</p> }.into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Product"</th>
                    <th>"Units Sold"</th>
                    <th>"Revenue"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .enumerate()
                    .map(|(rank, row)| {
                        view! {
                            <tr>
                                <td>{rank + 1}</td>
                                <td>{row.name}</td>
                                <td>{row.total_quantity}</td>
                                <td>{money(row.total_revenue)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
