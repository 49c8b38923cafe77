pub mod dashboard;
pub mod quote;

pub use dashboard::DashboardPage;
pub use quote::QuotePage;
