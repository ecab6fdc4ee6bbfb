//! Authenticated layout shell

use super::{NavRail, TopBar};
use leptos::prelude::*;

/// Navigation rail and top bar around the routed content.
///
/// The hidden `nav-toggle` checkbox drives the collapsed rail on small
/// viewports; the top bar's menu button is its label.
#[component]
pub fn AdminLayout(
    /// Path of the page being rendered, for the active nav entry
    #[prop(into)]
    active: String,
    /// Page content
    children: Children,
) -> impl IntoView {
    view! {
        <div class="layout">
            <input type="checkbox" id="nav-toggle" class="nav-toggle" />
            <NavRail active=active />
            <div class="layout-main">
                <TopBar authenticated=true />
                <main class="content">{children()}</main>
            </div>
        </div>
    }
}
