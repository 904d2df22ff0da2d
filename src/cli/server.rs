//! HTTP server mode for REST API access to conversions
//!
//! Every request runs its own stateless conversion; nothing is shared between
//! requests except the default options.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{ConvertOptions, OptionOverrides};
use crate::dialect::{DialectConfig, SqlKind};
use crate::error::{Error, Result};
use crate::session::convert;

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Options applied before each request's overrides
    pub defaults: ConvertOptions,
}

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

/// Request body for the convert endpoint
#[derive(Debug, Deserialize)]
struct ConvertRequest {
    /// JSON records, either as raw text or as an embedded JSON value
    json: Value,
    /// Per-request option overrides
    #[serde(flatten)]
    overrides: OptionOverrides,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the router (without binding a socket)
pub fn router(config: ServerConfig) -> Router {
    let state = AppState { config };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/dialects", get(list_dialects))
        .route("/types", get(type_reference))
        .route("/convert", post(convert_json))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// List supported dialects with their syntax settings
async fn list_dialects() -> impl IntoResponse {
    Json(ApiResponse::success(DialectConfig::all()))
}

/// Column type per semantic kind for every dialect
async fn type_reference() -> impl IntoResponse {
    let rows: Vec<Value> = SqlKind::ALL
        .iter()
        .map(|kind| {
            let types: serde_json::Map<String, Value> = DialectConfig::all()
                .iter()
                .map(|config| {
                    (
                        config.dialect.to_string(),
                        Value::String(config.column_type(*kind).to_string()),
                    )
                })
                .collect();
            json!({ "kind": kind, "types": types })
        })
        .collect();
    Json(ApiResponse::success(rows))
}

/// Convert JSON records to SQL
async fn convert_json(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConvertRequest>,
) -> Response {
    let input = match request.json {
        Value::String(text) => text,
        other => other.to_string(),
    };
    let options = state.config.defaults.clone().with_overrides(request.overrides);

    match convert(&input, &options) {
        Ok(result) => {
            tracing::info!(
                dialect = %options.dialect,
                records = result.record_count,
                batches = result.insert_batches,
                "Converted request"
            );
            (StatusCode::OK, Json(ApiResponse::success(result))).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Conversion failed");
            (StatusCode::BAD_REQUEST, Json(ApiResponse::<()>::error(e.to_string())))
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(router(ServerConfig::default()), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_dialects() {
        let (status, body) = call(router(ServerConfig::default()), get_request("/dialects")).await;
        assert_eq!(status, StatusCode::OK);
        let dialects = body["data"].as_array().unwrap();
        assert_eq!(dialects.len(), 5);
        assert_eq!(dialects[4]["dialect"], "sqlserver");
        assert_eq!(dialects[4]["usesBatchSeparator"], true);
    }

    #[tokio::test]
    async fn test_types() {
        let (_, body) = call(router(ServerConfig::default()), get_request("/types")).await;
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0]["kind"], "integer");
        assert_eq!(rows[0]["types"]["oracle"], "NUMBER(10)");
    }

    #[tokio::test]
    async fn test_convert_text_input() {
        let request = json!({
            "json": r#"[{"id": 1, "userName": "a"}]"#,
            "dialect": "postgresql",
            "caseStyle": "snake_case"
        });
        let (status, body) =
            call(router(ServerConfig::default()), post_json("/convert", &request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["insertBatches"], 1);
        assert_eq!(body["data"]["mapping"][1]["field"], "user_name");
        let sql = body["data"]["sql"].as_str().unwrap();
        assert!(sql.contains("\"user_name\" VARCHAR(4000)"));
    }

    #[tokio::test]
    async fn test_convert_embedded_input_uses_defaults() {
        let config = ServerConfig {
            defaults: ConvertOptions::new().with_table_name("events"),
        };
        let request = json!({ "json": [{"kind": "click"}] });
        let (status, body) = call(router(config), post_json("/convert", &request)).await;

        assert_eq!(status, StatusCode::OK);
        let sql = body["data"]["sql"].as_str().unwrap();
        assert!(sql.contains("`events`"));
    }

    #[tokio::test]
    async fn test_convert_error() {
        let request = json!({ "json": "   " });
        let (status, body) =
            call(router(ServerConfig::default()), post_json("/convert", &request)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "JSON input is empty");
    }
}
