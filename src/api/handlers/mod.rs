//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;

pub use health::db_check_handler;
pub use links::{add_link_handler, delete_link_handler, list_links_handler, visit_link_handler};
