//! Recipe and diet plan generation.

use crate::models::{PatientProfile, Recipe};
use crate::services::providers::{ProviderError, TextProvider};
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;

/// Name given to every stub-generated artifact. Uniqueness is not
/// guaranteed; a later generation silently replaces the earlier one.
pub const GENERATED_RECIPE_NAME: &str = "AI Generated Meal";

/// The stub generation pool. Output content is always one of these.
pub const RECIPE_POOL: [&str; 2] = [
    "Spaghetti: boil the pasta, brown the sausage, and toss both with tomato sauce.",
    "Grilled Chicken: season the chicken, grill over medium heat, and serve with roasted vegetables.",
];

/// System instruction for the diet plan prompt.
const DIET_PLAN_SYSTEM_PROMPT: &str =
    "You are a registered dietitian. Write a personalized one-week diet plan \
     with breakfast, lunch, dinner, and snacks for each day. Respond in plain \
     text with one section per day.";

/// Stub recipe generation: content drawn uniformly at random from
/// [`RECIPE_POOL`], ingredients echoed unchanged.
pub fn stub_recipe(ingredients: Vec<String>) -> Recipe {
    let idx = rand::thread_rng().gen_range(0..RECIPE_POOL.len());

    Recipe {
        name: GENERATED_RECIPE_NAME.to_string(),
        ingredients,
        content: RECIPE_POOL[idx].to_string(),
        created_at: Utc::now(),
    }
}

/// Builds the fixed two-message prompt and delegates generation to the
/// configured text provider.
#[derive(Clone)]
pub struct PlanGenerator {
    provider: Arc<dyn TextProvider>,
}

impl PlanGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Generate a diet plan for the given profile. The provider's completion
    /// is returned verbatim.
    pub async fn diet_plan(&self, profile: &PatientProfile) -> Result<String, ProviderError> {
        let user_prompt = diet_plan_prompt(profile);
        self.provider
            .generate(DIET_PLAN_SYSTEM_PROMPT, &user_prompt)
            .await
    }

    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.provider.health_check().await
    }
}

/// Interpolates every profile field verbatim into the user message.
fn diet_plan_prompt(profile: &PatientProfile) -> String {
    format!(
        "Create a diet plan for a patient with the following details:\n\
         Age: {}\n\
         Height: {} cm\n\
         Weight: {} kg\n\
         Gender: {}\n\
         Goals: {}\n\
         Medical condition: {}\n\
         Dietary preferences: {}",
        profile.age,
        profile.height,
        profile.weight,
        profile.gender,
        profile.goals,
        profile.medical_condition,
        profile.dietary,
    )
}
