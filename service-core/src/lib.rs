//! service-core: Shared infrastructure for the marketplace HTTP services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
