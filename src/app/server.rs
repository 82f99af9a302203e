//! HTTP surface: liveness check and the multipart campaign endpoint.

use crate::config::toml_config::ServerConfig;
use crate::core::clock::SystemClock;
use crate::core::engine::CampaignEngine;
use crate::core::pipeline::CampaignPipeline;
use crate::domain::ports::Clock;
use crate::utils::error::{GeneratorError, Result};
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Multipart part carrying the contact table.
pub const UPLOAD_FIELD: &str = "file";

pub struct AppState<C: Clock> {
    engine: Arc<CampaignEngine<CampaignPipeline<C>>>,
}

impl<C: Clock> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// 綁定位址並持續服務，直到收到 Ctrl-C
    pub async fn start(self) -> Result<()> {
        let app = build_router(SystemClock, self.config.max_upload_bytes());
        let listener = tokio::net::TcpListener::bind(&self.config.bind).await?;

        tracing::info!(
            "🌐 Nestable Generator API listening on {} (upload limit {} MB)",
            listener.local_addr()?,
            self.config.max_upload_mb
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

pub fn build_router<C: Clock + 'static>(clock: C, max_upload_bytes: usize) -> Router {
    let state = AppState {
        engine: Arc::new(CampaignEngine::new(CampaignPipeline::new(clock))),
    };

    Router::new()
        .route("/healthz", get(health_check))
        .route("/generate", post(generate_campaign::<C>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

async fn generate_campaign<C: Clock + 'static>(
    State(state): State<AppState<C>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Response> {
    // 非 multipart 請求也要回 JSON 錯誤
    let mut multipart = multipart.map_err(|rejection| GeneratorError::UploadError {
        message: rejection.body_text(),
    })?;
    let upload = read_upload(&mut multipart).await?;

    // CPU 密集的整條管線放到 blocking 執行緒
    let engine = Arc::clone(&state.engine);
    let archive = tokio::task::spawn_blocking(move || engine.run(&upload))
        .await
        .map_err(|e| GeneratorError::TaskError {
            message: e.to_string(),
        })??;

    let headers = [
        (header::CONTENT_TYPE, archive.content_type.to_string()),
        (header::CONTENT_DISPOSITION, archive.content_disposition()),
    ];
    Ok((headers, archive.bytes).into_response())
}

async fn read_upload(multipart: &mut Multipart) -> Result<Vec<u8>> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let data = field.bytes().await.map_err(upload_error)?;
        tracing::debug!(
            "Received upload {:?} ({} bytes)",
            filename.as_deref().unwrap_or("<unnamed>"),
            data.len()
        );
        return Ok(data.to_vec());
    }

    Err(GeneratorError::MissingUploadError {
        field: UPLOAD_FIELD.to_string(),
    })
}

fn upload_error(err: MultipartError) -> GeneratorError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        GeneratorError::UploadTooLarge {
            message: err.body_text(),
        }
    } else {
        GeneratorError::UploadError {
            message: err.body_text(),
        }
    }
}

impl IntoResponse for GeneratorError {
    fn into_response(self) -> Response {
        let status = match &self {
            GeneratorError::DecodeError { .. }
            | GeneratorError::SchemaError { .. }
            | GeneratorError::UploadError { .. }
            | GeneratorError::CellTooLongError { .. }
            | GeneratorError::InputFileError { .. } => StatusCode::BAD_REQUEST,
            GeneratorError::MissingUploadError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            GeneratorError::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(
                "❌ Request failed: {} (category: {:?})",
                self,
                self.category()
            );
        } else {
            tracing::warn!("Request rejected ({}): {}", status, self);
        }

        let body = Json(json!({ "detail": self.user_friendly_message() }));
        (status, body).into_response()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
