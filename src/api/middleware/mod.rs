//! Request processing middleware for the API.

pub mod rate_limit;
pub mod tracing;
