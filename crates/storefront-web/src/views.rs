//! Rendering of pages into complete HTML documents

use crate::components::{AdminLayout, Loading};
use axum::{
    body::Body,
    http::header,
    response::{Html, IntoResponse, Response},
};
use futures_util::{FutureExt, StreamExt, future, stream};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use std::{convert::Infallible, future::Future};
use tracing::{Instrument, warn};

/// Stylesheet served under the public static prefix
pub const STYLESHEET_PATH: &str = "/static/admin.css";

/// Placeholder the streamed content replaces in the loading shell
const CONTENT_SLOT: &str = r#"<template id="page-content"></template>"#;

#[component]
fn Document(
    /// Window title
    #[prop(into)]
    title: String,
    /// Body content
    children: Children,
) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="stylesheet" href=STYLESHEET_PATH />
            </head>
            <body>{children()}</body>
        </html>
    }
}

/// Render `body` as a standalone document
pub fn render_document<V>(title: &str, body: V) -> Html<String>
where
    V: IntoView + 'static,
{
    let title = format!("{title} | Admin Panel");
    let html = Owner::new().with(move || view! { <Document title=title>{body}</Document> }.to_html());
    Html(html)
}

/// Render `content` inside the authenticated layout
pub fn render_admin_page<V>(title: &str, active: &str, content: V) -> Html<String>
where
    V: IntoView + 'static,
{
    let active = active.to_string();
    render_document(title, view! { <AdminLayout active=active>{content}</AdminLayout> })
}

/// The admin layout with a spinner in place of the content, split around the
/// point where the content goes.
fn loading_shell(title: &str, active: &str, message: &str) -> (String, String) {
    let message = message.to_string();
    let Html(shell) = render_admin_page(
        title,
        active,
        view! {
            <Loading message=message />
            <template id="page-content"></template>
        },
    );

    match shell.split_once(CONTENT_SLOT) {
        Some((head, tail)) => (head.to_string(), tail.to_string()),
        None => {
            warn!("Content slot missing from the loading shell");
            (shell, String::new())
        }
    }
}

/// Stream a page whose content waits on the backend.
///
/// The layout and a spinner with `loading` go out first. The content follows
/// in a second chunk once `content` resolves; the stylesheet hides the
/// spinner as soon as the content lands after it.
pub fn stream_admin_page<F, V>(title: &str, active: &str, loading: &str, content: F) -> Response
where
    F: Future<Output = V> + Send + 'static,
    V: IntoView + 'static,
{
    let (head, tail) = loading_shell(title, active, loading);

    let rest = content.in_current_span().map(move |view| {
        let mut html = Owner::new().with(move || view.to_html());
        html.push_str(&tail);
        Ok::<_, Infallible>(html)
    });
    let body = stream::once(future::ready(Ok::<_, Infallible>(head))).chain(stream::once(rest));

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(body),
    )
        .into_response()
}
