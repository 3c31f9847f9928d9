use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::models::Recipe;
use crate::services::generator;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct GenerateRecipeRequest {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

/// List every stored recipe in insertion order.
#[tracing::instrument(skip(state))]
pub async fn list_recipes(State(state): State<AppState>) -> Json<RecipeListResponse> {
    let recipes = state.store.list().await;
    Json(RecipeListResponse { recipes })
}

/// Generate a recipe from an ingredient list and store it.
#[tracing::instrument(skip(state, request))]
pub async fn generate_recipe(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<GenerateRecipeRequest>, AppError>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let recipe = generator::stub_recipe(request.ingredients);
    state.store.put(recipe.clone()).await;

    tracing::info!(name = %recipe.name, "Recipe generated");

    Ok((StatusCode::CREATED, Json(recipe)))
}
