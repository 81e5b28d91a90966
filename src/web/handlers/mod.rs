//! Template rendering handlers.

pub mod dashboard;

pub use dashboard::dashboard_handler;
