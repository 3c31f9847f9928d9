//! Business services: generation, storage, and outbound notification.

pub mod generator;
pub mod notifier;
pub mod providers;
pub mod store;

pub use generator::PlanGenerator;
pub use notifier::Notifier;
pub use store::{InMemoryRecipeStore, RecipeStore};
