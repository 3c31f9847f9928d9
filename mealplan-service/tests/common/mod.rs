use mealplan_service::config::{MealplanConfig, OpenAiSettings, SecurityConfig, SmtpConfig};
use mealplan_service::services::providers::{MockEmailProvider, MockTextProvider};
use mealplan_service::services::{InMemoryRecipeStore, Notifier, PlanGenerator};
use mealplan_service::startup::{build_router, AppState};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub text_provider: Arc<MockTextProvider>,
    pub email_provider: Arc<MockEmailProvider>,
}

impl TestApp {
    /// Spawn the app on a random port with working mock providers.
    pub async fn spawn() -> Self {
        Self::spawn_with(MockTextProvider::new(true), MockEmailProvider::new(true)).await
    }

    /// Spawn with specific provider mocks (e.g. a disabled text provider).
    pub async fn spawn_with(text: MockTextProvider, email: MockEmailProvider) -> Self {
        let config = MealplanConfig {
            common: CoreConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            openai: OpenAiSettings {
                api_key: "test-api-key".to_string(),
                model: "gpt-4o-mini".to_string(),
                timeout_secs: 5,
            },
            smtp: SmtpConfig {
                host: "smtp.test.local".to_string(),
                port: 587,
                user: "test".to_string(),
                password: "test".to_string(),
                from_email: "test@example.com".to_string(),
                from_name: "Test Service".to_string(),
                enabled: false, // Use mock
            },
            security: SecurityConfig {
                allowed_origins: vec!["http://localhost:8000".to_string()],
            },
        };

        let text_provider = Arc::new(text);
        let email_provider = Arc::new(email);

        let state = AppState {
            config,
            store: Arc::new(InMemoryRecipeStore::new()),
            generator: PlanGenerator::new(text_provider.clone()),
            notifier: Notifier::new(email_provider.clone()),
        };

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let port = listener
            .local_addr()
            .expect("Failed to read local addr")
            .port();
        let router = build_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            text_provider,
            email_provider,
        }
    }
}
