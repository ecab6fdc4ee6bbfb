//! Login page

use crate::components::{ErrorBanner, TopBar};
use leptos::prelude::*;

/// Email/password form posting to `/login`
#[component]
pub fn LoginPage(
    /// Message from a failed attempt
    error: Option<String>,
    /// Email to prefill after a failed attempt
    #[prop(into)]
    email: String,
) -> impl IntoView {
    view! {
        <TopBar authenticated=false />
        <div class="login-page">
            <div class="login-card">
                <h1 class="page-title">"Admin Login"</h1>
                {error.map(|message| view! { <ErrorBanner message=message /> })}
                <form method="post" action="/login" class="login-form">
                    <label for="login-email">"Email"</label>
                    <input id="login-email" type="email" name="email" value=email required=true />
                    <label for="login-password">"Password"</label>
                    <input id="login-password" type="password" name="password" required=true />
                    <button type="submit" class="btn btn-primary">"Sign In"</button>
                </form>
            </div>
        </div>
    }
}
