//! Storefront admin dashboard
//!
//! Server-rendered admin interface for a storefront backend: session guard,
//! system statistics, product management, order inspection and sales
//! reports. Every data operation is an HTTP call to the backend.

#![recursion_limit = "256"]

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod components;
pub mod format;
pub mod forms;
pub mod handlers;
pub mod page_state;
pub mod pages;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;
pub mod views;

// Re-export the main functions
pub use server::build_app;
pub use state::AppState;
