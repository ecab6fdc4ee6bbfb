//! Error banners and blocking alerts

use leptos::prelude::*;

/// Inline error banner shown at the top of a page
#[component]
pub fn ErrorBanner(
    /// Message to display
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span>{message}</span>
        </div>
    }
}

/// Modal alert covering the page until acknowledged.
///
/// The OK button ticks a hidden checkbox that the stylesheet uses to hide
/// the alert, so whatever is underneath (an open form, say) stays as it was.
#[component]
pub fn BlockingAlert(
    /// Message to display
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <input type="checkbox" id="alert-dismiss" class="alert-toggle" />
        <div class="alert-backdrop">
            <div class="alert-dialog" role="alertdialog" aria-modal="true">
                <p class="alert-message">{message}</p>
                <label for="alert-dismiss" class="btn btn-primary">"OK"</label>
            </div>
        </div>
    }
}
