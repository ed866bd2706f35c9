//! HTTP server over the record store.
//!
//! The endpoints are a pass-through to the persistence layer:
//! - `GET /migrations` lists record keys
//! - `POST /migrations` creates (or overwrites) a record, answering 201 with
//!   the derived key
//! - `DELETE /migrations` removes one or many records named by the `remove`
//!   field of the body, answering with the per-key report
//!
//! Non-JSON request bodies are rejected by the typed extractors with a
//! client-error status before reaching the store.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use convoy_core::{ConvoyError, MigrationRecord, RecordStore, RemoveReport};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state for the HTTP handlers.
#[derive(Clone)]
struct AppState {
    store: Arc<RecordStore>,
}

/// Build the daemon router.
pub fn router(store: Arc<RecordStore>) -> Router {
    Router::new()
        .route(
            "/migrations",
            get(list_migrations).post(create_migration).delete(remove_migrations),
        )
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}

/// Serve the API until ctrl-c.
pub async fn serve(addr: SocketAddr, store: Arc<RecordStore>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(store))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received shutdown signal");
        })
        .await
}

async fn list_migrations(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let keys = state.store.list().await?;
    Ok(Json(keys))
}

#[derive(Debug, Serialize)]
struct CreatedResponse {
    key: String,
}

async fn create_migration(
    State(state): State<AppState>,
    Json(record): Json<MigrationRecord>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    info!(source_ip = %record.source.source_ip, "HTTP: create migration record");
    let key = state.store.create(&record).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { key })))
}

/// Body of a DELETE request: one key or a batch.
#[derive(Debug, Deserialize)]
struct RemoveRequest {
    remove: RemoveKeys,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoveKeys {
    One(String),
    Many(Vec<String>),
}

impl RemoveKeys {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(key) => vec![key],
            Self::Many(keys) => keys,
        }
    }
}

async fn remove_migrations(
    State(state): State<AppState>,
    Json(request): Json<RemoveRequest>,
) -> Result<Json<RemoveReport>, ApiError> {
    let keys = request.remove.into_vec();
    info!(count = keys.len(), "HTTP: remove migration records");
    let report = state.store.remove(&keys).await?;
    Ok(Json(report))
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    records: usize,
}

async fn healthz(State(state): State<AppState>) -> Result<Json<Health>, ApiError> {
    let records = state.store.list().await?.len();
    Ok(Json(Health { status: "healthy", version: env!("CARGO_PKG_VERSION"), records }))
}

/// Wire mapping for core errors.
struct ApiError(ConvoyError);

impl From<ConvoyError> for ApiError {
    fn from(err: ConvoyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ConvoyError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            ConvoyError::Validation { .. } | ConvoyError::MissingSystemDisk => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}
