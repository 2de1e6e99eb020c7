//! HTTP handlers for the description service.

pub mod description;
pub mod health;

pub use description::{generate_description, method_not_allowed};
pub use health::{health_check, metrics_endpoint, readiness_check};
