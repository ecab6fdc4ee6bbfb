//! Top bar with branding and the session action

use crate::session::LOGIN_PATH;
use leptos::prelude::*;

/// Top bar. Shows Logout with a session and Login without one.
#[component]
pub fn TopBar(
    /// Whether a session token is present
    authenticated: bool,
) -> impl IntoView {
    let action = if authenticated {
        view! {
            <form method="post" action="/logout" class="inline-form">
                <button type="submit" class="btn btn-danger">"Logout"</button>
            </form>
        }
        .into_any()
    } else {
        view! { <a href=LOGIN_PATH class="btn btn-success">"Login"</a> }.into_any()
    };

    view! {
        <header class="top-bar">
            <label for="nav-toggle" class="menu-toggle" aria-label="Toggle navigation">"☰"</label>
            <h1 class="top-bar-title">"Dashboard Overview"</h1>
            <div class="top-bar-actions">{action}</div>
        </header>
    }
}
