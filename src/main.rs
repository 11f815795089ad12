use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use consulta_cpf_api::config::Config;
use consulta_cpf_api::handlers::{self, AppState};
use consulta_cpf_api::upstream::LookupClient;

/// Main entry point for the application.
///
/// Initializes logging and configuration, builds the upstream lookup
/// client and the HTTP routes (health check, CPF lookup, static front-end
/// fallback), then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "consulta_cpf_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize upstream lookup client
    let lookup = LookupClient::new(&config);

    // Build application state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        lookup,
    });

    // API routes with request size limit (a lookup body is one CPF)
    let api_routes = Router::new()
        .route("/api/consultarCpf", post(handlers::consultar_cpf))
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(64 * 1024)));

    // Build final app: health check, API, front-end assets on the fallback
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
