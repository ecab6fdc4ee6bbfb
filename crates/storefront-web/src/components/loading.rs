//! Loading component for displaying loading states

use leptos::prelude::*;

/// Loading spinner with a page-specific message
#[component]
pub fn Loading(
    /// Text under the spinner
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}
