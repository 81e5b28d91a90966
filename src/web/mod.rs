//! Web layer for the browser-based UI.
//!
//! Serves the dashboard page with Askama. The page is a thin view: it
//! renders registry state fetched from the JSON API and forwards user
//! intents (add, search, open, delete) back into it.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
