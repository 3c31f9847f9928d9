use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::models::PatientProfile;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Serialize)]
pub struct DietPlanResponse {
    pub diet_plan: String,
}

/// Generate a diet plan for a patient profile, optionally emailing it.
///
/// Email delivery is best-effort: failures are logged and never affect the
/// response.
#[tracing::instrument(skip(state, profile))]
pub async fn generate_diet_plan(
    State(state): State<AppState>,
    WithRejection(Json(profile), _): WithRejection<Json<PatientProfile>, AppError>,
) -> Result<Json<DietPlanResponse>, AppError> {
    let plan = state.generator.diet_plan(&profile).await.map_err(|e| {
        tracing::error!(error = %e, "Diet plan generation failed");
        AppError::BadGateway("text generation service unavailable".to_string())
    })?;

    if let Some(to) = profile.email.as_deref() {
        if let Err(e) = state.notifier.send_plan(to, &plan).await {
            tracing::warn!(error = %e, to = %to, "Failed to deliver diet plan email");
        }
    }

    Ok(Json(DietPlanResponse { diet_plan: plan }))
}
