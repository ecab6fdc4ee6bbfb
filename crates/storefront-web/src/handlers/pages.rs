//! Read-only page handlers
//!
//! Each handler streams the admin layout with a spinner, fetches its page's
//! data from the backend, settles it into a [`PageState`] and streams the
//! rendered page after it.

use crate::{
    api_client::{ApiClient, ApiResult},
    pages::{
        DashboardData, DashboardPage, OrdersPage, SalesReportData, SalesReportPage,
        SystemStatusPage, sales_report::SALES_REPORT_ERROR,
    },
    page_state::PageState,
    session::{DEFAULT_PATH, Session},
    state::AppState,
    views::{render_admin_page, stream_admin_page},
};
use axum::{
    extract::{Query, State},
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};
use leptos::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use storefront_core::types::{Order, OrderStats};
use tracing::{debug, instrument};

/// Shown when the dashboard's report requests fail
pub const DASHBOARD_ERROR: &str = "Failed to fetch dashboard data.";
const STATS_NO_TOKEN: &str = "Authentication token not found.";
const STATS_ERROR: &str =
    "Failed to fetch backend statistics. Check API endpoint /api/orders/stats";
const ORDERS_NO_TOKEN: &str = "Authentication token not found. Please log in.";
const ORDERS_ERROR: &str = "Failed to fetch orders. Check backend connection.";

/// `/` sends authenticated users to the default page
pub async fn root() -> Redirect {
    Redirect::to(DEFAULT_PATH)
}

/// Dashboard overview. Also serves unknown authenticated paths.
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    session: Session,
    uri: Uri,
) -> Response {
    if !state.reports_enabled() {
        debug!("Reports disabled, rendering placeholder dashboard");
        return render_admin_page(
            "Dashboard",
            uri.path(),
            view! { <DashboardPage report=None /> },
        )
        .into_response();
    }

    stream_admin_page("Dashboard", uri.path(), "Loading dashboard...", async move {
        // Unreachable behind `require_session`, which redirects tokenless navigations
        let report = match session.token() {
            Some(token) => PageState::from_result_with(
                load_dashboard(&state.api_client, token).await,
                |e| e.message_or(DASHBOARD_ERROR),
            ),
            None => PageState::failed(STATS_NO_TOKEN),
        };
        view! { <DashboardPage report=Some(report) /> }
    })
}

async fn load_dashboard(api: &ApiClient, token: &str) -> ApiResult<DashboardData> {
    let (stats, top_selling, monthly) = tokio::try_join!(
        api.order_stats(token),
        api.top_selling(token),
        api.sales_by_month(token),
    )?;

    Ok(DashboardData {
        stats,
        top_selling,
        monthly,
    })
}

/// Headline statistics
#[instrument(skip_all)]
pub async fn system_status(State(state): State<Arc<AppState>>, session: Session) -> Response {
    stream_admin_page(
        "System Status",
        "/system-status",
        "Loading System Status...",
        async move {
            // Unreachable behind `require_session`, which redirects tokenless navigations
            let stats: PageState<OrderStats> = match session.token() {
                Some(token) => {
                    PageState::from_result(state.api_client.order_stats(token).await, STATS_ERROR)
                }
                None => PageState::failed(STATS_NO_TOKEN),
            };
            view! { <SystemStatusPage state=stats /> }
        },
    )
}

/// Query of the orders page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersQuery {
    /// Id of the order whose details are open
    pub view: Option<String>,
}

/// Order list, with the detail modal when `?view=<id>` names a listed order
#[instrument(skip_all, fields(view = ?query.view))]
pub async fn orders(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(query): Query<OrdersQuery>,
) -> Response {
    stream_admin_page("Orders", "/orders", "Loading orders...", async move {
        // Unreachable behind `require_session`, which redirects tokenless navigations
        let orders: PageState<Vec<Order>> = match session.token() {
            Some(token) => {
                PageState::from_result(state.api_client.list_orders(token).await, ORDERS_ERROR)
            }
            None => PageState::failed(ORDERS_NO_TOKEN),
        };

        let selected = query
            .view
            .as_deref()
            .and_then(|id| orders.data.iter().find(|order| order.id == id))
            .cloned();

        view! { <OrdersPage state=orders selected=selected /> }
    })
}

/// Sales report; the two series are fetched one after the other
#[instrument(skip_all)]
pub async fn sales_report(State(state): State<Arc<AppState>>, session: Session) -> Response {
    if !state.reports_enabled() {
        return render_admin_page(
            "Sales Report",
            "/sales-report",
            view! { <SalesReportPage report=None /> },
        )
        .into_response();
    }

    stream_admin_page(
        "Sales Report",
        "/sales-report",
        "Loading sales report...",
        async move {
            // Unreachable behind `require_session`, which redirects tokenless navigations
            let report = match session.token() {
                Some(token) => PageState::from_result_with(
                    load_sales_report(&state.api_client, token).await,
                    |_| SALES_REPORT_ERROR.to_string(),
                ),
                None => PageState::failed(SALES_REPORT_ERROR),
            };
            view! { <SalesReportPage report=Some(report) /> }
        },
    )
}

async fn load_sales_report(api: &ApiClient, token: &str) -> ApiResult<SalesReportData> {
    let top_selling = api.top_selling(token).await?;
    let monthly = api.sales_by_month(token).await?;

    Ok(SalesReportData {
        top_selling,
        monthly,
    })
}
