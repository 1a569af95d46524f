//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use exchange_types::{CurrencyRepository, ExchangeRepository};

use super::handlers::{self, AppState};
use crate::openapi::ApiDoc;

/// HTTP Server for the Exchange API.
pub struct HttpServer<R>
where
    R: CurrencyRepository + ExchangeRepository,
{
    state: Arc<AppState<R>>,
}

impl<R> HttpServer<R>
where
    R: CurrencyRepository + ExchangeRepository,
{
    /// Creates a new HTTP server backed by `repo`.
    pub fn new(repo: R) -> Self {
        Self {
            state: Arc::new(AppState::new(repo)),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
            .route(
                "/api/currencies",
                post(handlers::create_currency::<R>).get(handlers::list_currencies::<R>),
            )
            .route("/api/currencies/{code}", get(handlers::get_currency::<R>))
            .route(
                "/api/exchanges",
                post(handlers::create_exchange::<R>).get(handlers::list_exchanges::<R>),
            )
            .route(
                "/api/exchanges/{base}/{target}",
                get(handlers::get_exchange::<R>).patch(handlers::update_exchange::<R>),
            )
            .route("/api/convert", get(handlers::convert::<R>))
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
