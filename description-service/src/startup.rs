//! Application startup and lifecycle management.

use crate::config::DescriptionConfig;
use crate::handlers;
use crate::services::{
    DescriptionService, OpenRouterProvider, RandomSelector, TemplateSelector, TextProvider,
};
use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: DescriptionConfig,
    pub descriptions: DescriptionService,
}

impl AppState {
    /// Wire the description service from configuration. The OpenRouter
    /// provider is only created when a usable API key is present.
    pub fn new(
        config: DescriptionConfig,
        selector: Arc<dyn TemplateSelector>,
    ) -> Result<Self, AppError> {
        let provider: Option<Arc<dyn TextProvider>> = if config.openrouter.is_configured() {
            let provider = OpenRouterProvider::new(config.openrouter.clone()).map_err(|e| {
                tracing::error!("Failed to initialize OpenRouter provider: {}", e);
                AppError::ConfigError(anyhow::anyhow!(e))
            })?;
            tracing::info!(
                model = %config.openrouter.model,
                base_url = %config.openrouter.base_url,
                timeout_secs = config.openrouter.timeout.as_secs(),
                "Initialized OpenRouter text provider"
            );
            Some(Arc::new(provider) as Arc<dyn TextProvider>)
        } else {
            tracing::warn!(
                "OPENROUTER_API_KEY not configured - descriptions will use local templates"
            );
            None
        };

        let descriptions = DescriptionService::new(provider, selector, &config.generation);

        Ok(Self {
            config,
            descriptions,
        })
    }
}

/// Build the HTTP router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route(
            "/api/ai/description",
            post(handlers::generate_description).fallback(handlers::method_not_allowed),
        )
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration and random template selection.
    pub async fn build(config: DescriptionConfig) -> Result<Self, AppError> {
        let state = AppState::new(config, Arc::new(RandomSelector))?;
        Self::with_state(state).await
    }

    /// Bind the listener for prepared state (port 0 = random port for testing).
    pub async fn with_state(state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Description service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
