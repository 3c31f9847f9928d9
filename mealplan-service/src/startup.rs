//! Application startup and lifecycle management.
//!
//! Wires configuration into providers, builds the router, and manages the
//! server lifecycle.

use crate::config::MealplanConfig;
use crate::handlers;
use crate::services::providers::openai::OpenAiConfig;
use crate::services::providers::{
    EmailProvider, MockEmailProvider, OpenAiTextProvider, SmtpProvider, TextProvider,
};
use crate::services::{InMemoryRecipeStore, Notifier, PlanGenerator, RecipeStore};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: MealplanConfig,
    pub store: Arc<dyn RecipeStore>,
    pub generator: PlanGenerator,
    pub notifier: Notifier,
}

/// Build the HTTP router for the given state.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .security
                .allowed_origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::error!("Invalid CORS origin '{}': {}. Skipping.", origin, e);
                        None
                    }
                })
                .collect::<Vec<HeaderValue>>(),
        )
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(handlers::health::home))
        .route("/health", get(handlers::health::health_check))
        .route("/recipes", get(handlers::recipes::list_recipes))
        .route("/recipe", post(handlers::recipes::generate_recipe))
        .route("/generate", post(handlers::plan::generate_diet_plan))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: MealplanConfig) -> Result<Self, AppError> {
        let text_provider: Arc<dyn TextProvider> =
            Arc::new(OpenAiTextProvider::new(OpenAiConfig {
                api_key: config.openai.api_key.clone(),
                model: config.openai.model.clone(),
                timeout: Duration::from_secs(config.openai.timeout_secs),
            }));

        if config.openai.api_key.is_empty() {
            tracing::warn!(
                "OPENAI_API_KEY not set; diet plan generation will fail until configured"
            );
        } else {
            tracing::info!(
                model = %config.openai.model,
                "Initialized OpenAI text provider"
            );
        }

        let email_provider: Arc<dyn EmailProvider> = if config.smtp.enabled {
            match SmtpProvider::new(config.smtp.clone()) {
                Ok(provider) => {
                    tracing::info!("SMTP email provider initialized");
                    Arc::new(provider)
                }
                Err(e) => {
                    tracing::warn!("Failed to initialize SMTP provider: {}. Using mock.", e);
                    Arc::new(MockEmailProvider::new(true))
                }
            }
        } else {
            tracing::info!("SMTP provider disabled, using mock email provider");
            Arc::new(MockEmailProvider::new(true))
        };

        let state = AppState {
            config: config.clone(),
            store: Arc::new(InMemoryRecipeStore::new()),
            generator: PlanGenerator::new(text_provider),
            notifier: Notifier::new(email_provider),
        };

        let addr: SocketAddr = format!("{}:{}", config.common.host, config.common.port)
            .parse()
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Invalid bind address: {}", e)))?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
