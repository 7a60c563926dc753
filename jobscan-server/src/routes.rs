//! HTTP routes and handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use jobscan_rs::engine::{AssessmentRequest, Assessor};
use jobscan_rs::report;
use jobscan_rs::storage::{NewScamReport, ScamReport, Stores};
use jobscan_rs::ScanError;

/// Shared application state
pub struct AppState {
    pub assessor: Assessor,
    pub stores: Stores,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }

    fn response(status: StatusCode, msg: impl Into<String>) -> Response {
        (status, Json(Self::new(msg))).into_response()
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/assess", post(assess))
        .route("/history", get(history))
        .route("/last", get(last))
        .route("/last/export", get(export_last))
        .route("/reports", post(submit_report));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /api/assess - Assess a posting and store the result
async fn assess(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssessmentRequest>,
) -> Response {
    let record = match state.assessor.assess(request).await {
        Ok(record) => record,
        Err(ScanError::InvalidInput(msg)) => {
            return ApiError::response(StatusCode::BAD_REQUEST, msg);
        }
        Err(e) => {
            warn!("Assessment failed: {}", e);
            return ApiError::response(StatusCode::INTERNAL_SERVER_ERROR, "Assessment failed");
        }
    };

    // The assessment is still returned when it cannot be stored
    if let Err(e) = state.stores.record(&record).await {
        warn!("Failed to store assessment {}: {}", record.id, e);
    }

    info!(
        "Assessed posting {}: score {}",
        record.id, record.assessment.score
    );
    (StatusCode::OK, Json(record)).into_response()
}

/// GET /api/history - All stored assessments, oldest first
async fn history(State(state): State<Arc<AppState>>) -> Response {
    Json(state.stores.history.load().await).into_response()
}

/// GET /api/last - Most recent assessment
async fn last(State(state): State<Arc<AppState>>) -> Response {
    match state.stores.last_result.load().await {
        Some(record) => Json(record).into_response(),
        None => ApiError::response(StatusCode::NOT_FOUND, "No assessment stored yet"),
    }
}

/// GET /api/last/export - Text export of the most recent assessment
async fn export_last(State(state): State<Arc<AppState>>) -> Response {
    match state.stores.last_result.load().await {
        Some(record) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            report::render_text(&record),
        )
            .into_response(),
        None => ApiError::response(StatusCode::NOT_FOUND, "No assessment stored yet"),
    }
}

/// POST /api/reports - Submit a scam report
async fn submit_report(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<NewScamReport>,
) -> Response {
    let report = match ScamReport::new(submission) {
        Ok(report) => report,
        Err(e) => return ApiError::response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.stores.reports.append(report.clone()).await {
        Ok(()) => {
            info!("Stored scam report {} for {}", report.id, report.link);
            (StatusCode::CREATED, Json(report)).into_response()
        }
        Err(e) => {
            warn!("Failed to store scam report: {}", e);
            ApiError::response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store report")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use jobscan_rs::config::{AppConfig, StorageConfig};
    use jobscan_rs::probe::{HttpProber, NameResolver, ProbeFailure, ProbeTimeouts, VerificationProbe};
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::ServiceExt;

    /// Network where nothing exists
    struct Offline;

    #[async_trait]
    impl NameResolver for Offline {
        async fn resolve(&self, _host: &str) -> Result<(), ProbeFailure> {
            Err(ProbeFailure::NotFound)
        }
    }

    #[async_trait]
    impl HttpProber for Offline {
        async fn head(&self, _url: &str, _timeout: Duration) -> Result<u16, ProbeFailure> {
            Err(ProbeFailure::Connect("offline".to_string()))
        }
    }

    fn app(dir: &TempDir) -> Router {
        let config = AppConfig::default();
        let probe = VerificationProbe::new(
            Arc::new(Offline),
            Arc::new(Offline),
            ProbeTimeouts::default(),
        );
        let storage = StorageConfig {
            data_dir: dir.path().to_path_buf(),
            ..StorageConfig::default()
        };

        router(Arc::new(AppState {
            assessor: Assessor::with_probe(&config, probe),
            stores: Stores::from_config(&storage),
        }))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = TempDir::new().unwrap();
        let response = app(&dir).oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_assess_stores_record() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/assess",
                serde_json::json!({
                    "text": "URGENT HIRING!!!! Pay a registration fee now to join today!!",
                    "email": "person@gmail.com"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let record = json_body(response).await;
        assert_eq!(record["assessment"]["score"], 73);
        assert_eq!(record["assessment"]["band"], "HIGH");
        assert_eq!(record["assessment"]["company_status"], "missing");

        let history = json_body(app.clone().oneshot(get("/api/history")).await.unwrap()).await;
        assert_eq!(history.as_array().map(Vec::len), Some(1));

        let last = json_body(app.clone().oneshot(get("/api/last")).await.unwrap()).await;
        assert_eq!(last["id"], record["id"]);

        let export = app.oneshot(get("/api/last/export")).await.unwrap();
        assert_eq!(export.status(), StatusCode::OK);
        assert_eq!(
            export.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        let bytes = to_bytes(export.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("Risk Score: 73/100 (HIGH)"));
    }

    #[tokio::test]
    async fn test_blank_text_is_bad_request() {
        let dir = TempDir::new().unwrap();
        let response = app(&dir)
            .oneshot(post_json("/api/assess", serde_json::json!({ "text": "  " })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_last_is_not_found_when_empty() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        let response = app.clone().oneshot(get("/api/last")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(get("/api/last/export")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reports() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/reports",
                serde_json::json!({
                    "link": "https://jobs-now.xyz/apply",
                    "details": "Asked for a deposit",
                    "has_attachment": true
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let report = json_body(response).await;
        assert_eq!(report["link"], "https://jobs-now.xyz/apply");
        assert_eq!(report["has_attachment"], true);

        let response = app
            .oneshot(post_json("/api/reports", serde_json::json!({ "link": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
