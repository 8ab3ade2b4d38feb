use axum::body::to_bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use disk_scheduler::prelude::*;
use disk_scheduler::web::{health, metrics_handler, schedule_handler};

const QUEUE: &str = "98,183,37,122,14,124,65,67";

#[tokio::test]
async fn schedule_endpoint_returns_sequence() {
    let state = AppState::new(ServerConfig::new());
    let request = ScheduleRequest::new(QUEUE, 53, 200, "SSTF");

    let Json(response) = schedule_handler(State(state.clone()), Ok(Json(request)))
        .await
        .unwrap();

    assert_eq!(response.sequence, vec![53, 65, 67, 37, 14, 98, 122, 124, 183]);
    assert_eq!(response.total_seek, 236);

    let metrics = state.metrics().lock().await;
    assert_eq!(
        metrics.value("schedule_requests_total", &[("algorithm", "SSTF")]),
        Some(1)
    );
    assert_eq!(
        metrics.value("seek_distance_total", &[("algorithm", "SSTF")]),
        Some(236)
    );
}

#[tokio::test]
async fn compare_is_counted() {
    let state = AppState::new(ServerConfig::new());
    let request = ScheduleRequest::new(QUEUE, 53, 200, "FCFS").with_compare(true);

    let Json(response) = schedule_handler(State(state.clone()), Ok(Json(request)))
        .await
        .unwrap();
    assert_eq!(response.optimal.unwrap().algorithm, Algorithm::Look);

    let metrics = state.metrics().lock().await;
    assert_eq!(metrics.value("comparisons_total", &[]), Some(1));
    assert_eq!(
        metrics.value("optimal_selected_total", &[("algorithm", "LOOK")]),
        Some(1)
    );
}

#[tokio::test]
async fn invalid_algorithm_is_bad_request() {
    let state = AppState::new(ServerConfig::new());
    let request = ScheduleRequest::new(QUEUE, 53, 200, "RANDOM");

    let err = schedule_handler(State(state.clone()), Ok(Json(request)))
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidAlgorithm(_)));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    let metrics = state.metrics().lock().await;
    assert_eq!(
        metrics.value("rejected_requests_total", &[("reason", "invalid_algorithm")]),
        Some(1)
    );
    assert_eq!(metrics.value("schedule_requests_total", &[("algorithm", "FCFS")]), None);
}

#[tokio::test]
async fn out_of_range_is_bad_request() {
    let state = AppState::new(ServerConfig::new());
    let request = ScheduleRequest::new("5,500", 53, 200, "FCFS");

    let err = schedule_handler(State(state), Ok(Json(request)))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[test]
fn server_errors_map_to_500() {
    let err = SchedulerError::Worker("panicked".into());
    assert!(!err.is_client_error());
    assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn metrics_endpoint_exports_counters() {
    let state = AppState::new(ServerConfig::new());
    let request = ScheduleRequest::new("10,20", 0, 100, "C-LOOK");
    schedule_handler(State(state.clone()), Ok(Json(request)))
        .await
        .unwrap();

    let response = metrics_handler(State(state)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let metrics: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(metrics[0]["name"], "schedule_requests_total");
    assert_eq!(metrics[0]["labels"]["algorithm"], "C-LOOK");
    assert_eq!(metrics[0]["value"], 1);
    assert_eq!(metrics[1]["name"], "seek_distance_total");
    assert_eq!(metrics[1]["value"], 20);
}

#[tokio::test]
async fn metrics_disabled() {
    let state = AppState::new(ServerConfig::new().with_metrics(false));
    let request = ScheduleRequest::new("10,20", 0, 100, "FCFS");
    schedule_handler(State(state.clone()), Ok(Json(request)))
        .await
        .unwrap();

    assert!(state.metrics().lock().await.metrics().is_empty());
    let response = metrics_handler(State(state)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_ok() {
    let Json(body) = health().await;
    assert_eq!(body["status"], "ok");
}
