//! HTTP handlers for the mealplan service.

pub mod health;
pub mod plan;
pub mod recipes;
