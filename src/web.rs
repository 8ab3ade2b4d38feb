//! HTTP routes: the form page, `/schedule`, `/metrics` and `/health`.

use crate::api::{ErrorBody, ScheduleRequest, ScheduleResponse};
use crate::config::ServerConfig;
use crate::error::SchedulerError;
use crate::metrics::{Collector, MetricsExporter};
use crate::scheduler::Algorithm;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    metrics: Arc<Mutex<Collector>>,
}

impl AppState {
    /// Create handler state from configuration
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            metrics: Arc::new(Mutex::new(Collector::new())),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get metrics collector
    pub fn metrics(&self) -> &Arc<Mutex<Collector>> {
        &self.metrics
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/schedule", post(schedule_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health))
        .with_state(state)
}

impl IntoResponse for SchedulerError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

pub async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /schedule`
pub async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<Json<ScheduleResponse>, SchedulerError> {
    let outcome = run_schedule(&state, payload).await;

    if state.config.enable_metrics {
        let mut metrics = state.metrics.lock().await;
        match &outcome {
            Ok((algorithm, response)) => {
                metrics.record_schedule(*algorithm, response.total_seek);
                if let Some(optimal) = &response.optimal {
                    metrics.record_comparison(optimal.algorithm);
                }
            }
            Err(e) => metrics.record_rejection(e.reason()),
        }
    }

    outcome.map(|(_, response)| Json(response))
}

async fn run_schedule(
    state: &AppState,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<(Algorithm, ScheduleResponse), SchedulerError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected schedule payload");
        SchedulerError::MalformedInput(rejection.body_text())
    })?;

    let job = request.validate(&state.config).map_err(|e| {
        warn!(error = %e, "rejected schedule request");
        e
    })?;

    info!(
        algorithm = %job.algorithm(),
        direction = %job.direction(),
        requests = job.workload().requests().len(),
        head = job.workload().head(),
        compare = job.compare(),
        "scheduling"
    );

    let algorithm = job.algorithm();
    let response = tokio::task::spawn_blocking(move || job.run())
        .await
        .map_err(|e| {
            error!(error = %e, "scheduling task failed");
            SchedulerError::Worker(e.to_string())
        })?;

    Ok((algorithm, response))
}

/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    if !state.config.enable_metrics {
        return StatusCode::NOT_FOUND.into_response();
    }

    let metrics = state.metrics.lock().await;
    Json(MetricsExporter::new(&metrics).to_json()).into_response()
}
