//! Page components for the admin dashboard
//!
//! Each page takes its already-settled state and renders the error or content
//! branch. The spinner shown while a page waits on the backend belongs to the
//! streamed shell in [`crate::views`].

pub mod dashboard;
pub mod login;
pub mod orders;
pub mod products;
pub mod sales_report;
pub mod system_status;

pub use dashboard::{DashboardData, DashboardPage};
pub use login::LoginPage;
pub use orders::OrdersPage;
pub use products::ProductsPage;
pub use sales_report::{SalesReportData, SalesReportPage};
pub use system_status::SystemStatusPage;
