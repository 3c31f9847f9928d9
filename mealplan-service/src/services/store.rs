//! In-memory artifact storage.

use crate::models::Recipe;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Repository seam for generated recipes.
///
/// Backed by process memory here; the trait keeps the HTTP surface agnostic
/// to the backing store.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert a recipe, replacing any earlier artifact with the same name.
    async fn put(&self, recipe: Recipe);

    /// All stored recipes in insertion order.
    async fn list(&self) -> Vec<Recipe>;
}

/// Unbounded process-lifetime store.
///
/// Writes are serialized through the lock. A same-name write replaces the
/// earlier entry in place, so list order stays stable and the last write
/// wins.
#[derive(Default)]
pub struct InMemoryRecipeStore {
    inner: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn put(&self, recipe: Recipe) {
        let mut recipes = self.inner.write().await;
        match recipes.iter().position(|r| r.name == recipe.name) {
            Some(idx) => recipes[idx] = recipe,
            None => recipes.push(recipe),
        }
    }

    async fn list(&self) -> Vec<Recipe> {
        self.inner.read().await.clone()
    }
}
