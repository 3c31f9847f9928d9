//! service-core: Shared infrastructure for the mealplan services.
pub mod config;
pub mod error;
pub mod observability;
