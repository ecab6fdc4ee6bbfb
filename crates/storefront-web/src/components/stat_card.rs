//! Single-metric card

use leptos::prelude::*;

/// Card showing one headline number
#[component]
pub fn StatCard(
    /// Metric name
    #[prop(into)]
    title: String,
    /// Preformatted value
    #[prop(into)]
    value: String,
    /// Accent colour class for the card border
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {accent}")>
            <div class="stat-title">{title}</div>
            <p class="stat-value">{value}</p>
        </div>
    }
}
