//! JSON HTTP API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Liveness check |
//! | `POST` | `/api/query` | Answer a question from the loaded courses |
//! | `GET`  | `/api/courses` | List loaded courses with chunk counts |
//!
//! # Error Contract
//!
//! Rejected requests return `422 Unprocessable Entity` with:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "Question cannot be empty" } }
//! ```
//!
//! This covers a blank question as well as a missing field, wrong types, a
//! non-JSON content type, or an unparsable body.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use course_rag_core::engine::CourseEngine;
use course_rag_core::error::QueryError;
use course_rag_core::models::{CourseSummary, SourceRef};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;

const SERVICE_MESSAGE: &str = "RAG Course Chatbot API";

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    engine: Arc<CourseEngine>,
}

/// Build the router over `engine`.
pub fn router(engine: Arc<CourseEngine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_root))
        .route("/api/query", post(handle_query))
        .route("/api/courses", get(handle_courses))
        .layer(cors)
        .with_state(AppState { engine })
}

/// Bind to `[server].bind` and serve until the process is terminated.
pub async fn run_server(config: &Config, engine: Arc<CourseEngine>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&config.server.bind).await?;
    serve(listener, engine).await
}

/// Serve on an already-bound listener.
pub async fn serve(listener: TcpListener, engine: Arc<CourseEngine>) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("course API listening on http://{}", addr);
    axum::serve(listener, router(engine)).await?;
    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code.
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
#[derive(Debug)]
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

/// Constructs a 422 Unprocessable Entity error.
fn validation_error(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        code: "validation_error".to_string(),
        message: message.into(),
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::EmptyQuestion => validation_error(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        validation_error(rejection.body_text())
    }
}

// ============ GET / ============

#[derive(Serialize)]
struct RootResponse {
    status: String,
    message: String,
}

async fn handle_root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ok".to_string(),
        message: SERVICE_MESSAGE.to_string(),
    })
}

// ============ POST /api/query ============

#[derive(Debug, Deserialize)]
struct QueryRequest {
    question: String,
    /// Falls back to `[retrieval].default_top_k` when absent.
    #[serde(default)]
    top_k: Option<i64>,
}

#[derive(Serialize)]
struct QueryResponse {
    answer: String,
    sources: Vec<SourceRef>,
}

/// Handler for `POST /api/query`.
///
/// Body rejections are taken as a `Result` so they share the 422 error
/// shape instead of axum's plain-text defaults.
async fn handle_query(
    State(state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, AppError> {
    let Json(req) = payload?;

    let result = state.engine.query(&req.question, req.top_k)?;
    tracing::debug!(
        top_k = ?req.top_k,
        sources = result.hits.len(),
        "answered query"
    );

    Ok(Json(QueryResponse {
        sources: result.sources(),
        answer: result.answer,
    }))
}

// ============ GET /api/courses ============

#[derive(Serialize)]
struct CoursesResponse {
    courses: Vec<CourseSummary>,
}

async fn handle_courses(State(state): State<AppState>) -> Json<CoursesResponse> {
    Json(CoursesResponse {
        courses: state.engine.list_courses(),
    })
}
