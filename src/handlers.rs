use crate::config::Config;
use crate::cpf::normalize_cpf;
use crate::errors::AppError;
use crate::models::{LookupRequest, NormalizedRecord};
use crate::upstream::LookupClient;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the upstream CPF lookup service.
    pub lookup: LookupClient,
}

/// Health check endpoint.
///
/// Always returns 200, independent of whether the lookup token is
/// configured.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "ok": true })))
}

/// POST /api/consultarCpf
///
/// Validates the CPF shape, queries the upstream lookup service and
/// returns the normalized four-field record.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `req` - JSON body carrying the raw CPF value.
///
/// # Returns
///
/// * `Result<Json<NormalizedRecord>, AppError>` - The normalized record or
///   the classified failure.
pub async fn consultar_cpf(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LookupRequest>,
) -> Result<Json<NormalizedRecord>, AppError> {
    let cpf = normalize_cpf(req.cpf.as_deref().unwrap_or(""))?;

    tracing::info!("Consulting CPF: {}", cpf);

    let data = state.lookup.lookup(&cpf).await?;
    let record = NormalizedRecord::from_upstream(&data, &cpf);

    tracing::info!("Lookup complete for CPF {}", cpf);

    Ok(Json(record))
}
