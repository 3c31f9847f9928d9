use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// Liveness greeting for the root path.
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "AI mealplan service is running" }))
}

/// Health check endpoint. Reports how the outbound dependencies are wired;
/// the service itself is healthy as long as it answers.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let generation = match state.generator.health_check().await {
        Ok(_) => "configured",
        Err(_) => "unconfigured",
    };
    let email = if state.notifier.is_enabled() {
        "smtp"
    } else {
        "mock"
    };

    Json(json!({
        "status": "ok",
        "service": "mealplan-service",
        "version": env!("CARGO_PKG_VERSION"),
        "generation": generation,
        "email": email,
    }))
}
