//! Reusable view components

pub mod alert;
pub mod layout;
pub mod loading;
pub mod nav_rail;
pub mod order_modal;
pub mod product_form;
pub mod report_tables;
pub mod stat_card;
pub mod status_badge;
pub mod top_bar;

pub use alert::{BlockingAlert, ErrorBanner};
pub use layout::AdminLayout;
pub use loading::Loading;
pub use nav_rail::NavRail;
pub use order_modal::OrderModal;
pub use product_form::ProductFormDialog;
pub use report_tables::{MonthlySalesTable, TopSellingTable};
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use top_bar::TopBar;
