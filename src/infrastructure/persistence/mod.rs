//! PostgreSQL-backed implementations of domain contracts.

pub mod pg_probe;

pub use pg_probe::PgProbe;
