mod common;

use common::TestApp;
use mealplan_service::services::generator::{GENERATED_RECIPE_NAME, RECIPE_POOL};
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn home_returns_liveness_message() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&app.address)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .expect("message missing")
        .contains("running"));
}

#[tokio::test]
async fn recipes_are_empty_before_any_generation() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/recipes", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["recipes"], json!([]));
}

#[tokio::test]
async fn generate_recipe_echoes_ingredients() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let ingredients = json!(["Pasta", "Sausage", "Tomato sauce"]);
    let response = client
        .post(format!("{}/recipe", app.address))
        .json(&json!({ "ingredients": ingredients }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], GENERATED_RECIPE_NAME);
    assert_eq!(body["ingredients"], ingredients);
}

#[tokio::test]
async fn stub_content_always_comes_from_the_fixed_pool() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for _ in 0..20 {
        let response = client
            .post(format!("{}/recipe", app.address))
            .json(&json!({ "ingredients": ["Rice"] }))
            .send()
            .await
            .expect("Failed to execute request");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let content = body["content"].as_str().expect("content missing");
        assert!(
            RECIPE_POOL.contains(&content),
            "unexpected stub content: {}",
            content
        );
    }
}

#[tokio::test]
async fn list_returns_single_artifact_after_one_generation() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    client
        .post(format!("{}/recipe", app.address))
        .json(&json!({ "ingredients": ["Eggs", "Spinach"] }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = client
        .get(format!("{}/recipes", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let recipes = body["recipes"].as_array().expect("recipes missing");
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["name"], GENERATED_RECIPE_NAME);
}

#[tokio::test]
async fn same_name_generations_keep_only_the_latest() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    client
        .post(format!("{}/recipe", app.address))
        .json(&json!({ "ingredients": ["Pasta"] }))
        .send()
        .await
        .expect("Failed to execute request");

    client
        .post(format!("{}/recipe", app.address))
        .json(&json!({ "ingredients": ["Rice", "Beans"] }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = client
        .get(format!("{}/recipes", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // Both artifacts share the fixed name, so the last write wins.
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let recipes = body["recipes"].as_array().expect("recipes missing");
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["ingredients"], json!(["Rice", "Beans"]));
}

#[tokio::test]
async fn malformed_recipe_request_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // ingredients must be a list of strings
    let response = client
        .post(format!("{}/recipe", app.address))
        .json(&json!({ "ingredients": "Pasta" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 422);

    let recipes: serde_json::Value = client
        .get(format!("{}/recipes", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(recipes["recipes"], json!([]));
}
