// Value Formats - Web Server
// REST API over the unit-format registry

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use value_formats::numeric::MAX_DECIMALS;
use value_formats::{
    collect_stats, default_registry, display_value, AppConfig, BuildInfo, DecimalCount, Error,
    FormatRegistry, MenuCategory, PanelStats, PanelSummary,
};

/// Shared application state
#[derive(Clone)]
struct AppState {
    registry: Arc<FormatRegistry>,
    build: Arc<BuildInfo>,
    default_decimals: DecimalCount,
}

impl AppState {
    fn new(config: &AppConfig) -> Self {
        Self {
            registry: Arc::new(default_registry().clone()),
            build: Arc::new(BuildInfo::from_config(config)),
            default_decimals: config.display.decimals,
        }
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Response {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
        .into_response()
    }
}

fn api_error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ApiResponse::<()> {
        success: false,
        data: None,
        error: Some(message.into()),
    };
    (status, Json(body)).into_response()
}

fn error_response(err: Error) -> Response {
    match err {
        Error::UnknownFormat(id) => api_error(StatusCode::NOT_FOUND, format!("unknown format '{}'", id)),
        Error::InvalidResource(msg) | Error::Config(msg) => api_error(StatusCode::BAD_REQUEST, msg),
        other => {
            tracing::error!(error = %other, "request failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

/// Format request (body of POST /api/format)
#[derive(Deserialize)]
struct FormatRequest {
    id: String,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    decimals: Option<i32>,
}

/// Query string of GET /api/formats/:id
#[derive(Deserialize)]
struct FormatQuery {
    value: Option<String>,
    decimals: Option<i32>,
}

/// Formatted value response
#[derive(Serialize)]
struct FormattedResponse {
    id: String,
    value: Value,
    text: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check with build info
async fn health_check(State(state): State<AppState>) -> Response {
    ApiResponse::ok(state.build.as_ref().clone())
}

/// GET /api/formats - Unit picker menu
async fn list_formats(State(state): State<AppState>) -> Response {
    let menu: Vec<MenuCategory> = state.registry.menu();
    ApiResponse::ok(menu)
}

/// GET /api/formats/:id?value=..&decimals=.. - Format one value
async fn format_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FormatQuery>,
) -> Response {
    let id = urlencoding::decode(&id)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(id);

    let Some(raw) = query.value else {
        return api_error(StatusCode::BAD_REQUEST, "missing 'value' query parameter");
    };
    format_one(&state, id, Value::String(raw), query.decimals)
}

/// POST /api/format - Format one value from a JSON body
async fn format_from_body(State(state): State<AppState>, Json(request): Json<FormatRequest>) -> Response {
    format_one(&state, request.id, request.value, request.decimals)
}

fn format_one(state: &AppState, id: String, value: Value, decimals: Option<i32>) -> Response {
    if let Some(d) = decimals {
        if !(0..=MAX_DECIMALS).contains(&d) {
            return api_error(
                StatusCode::BAD_REQUEST,
                format!("decimals must be between 0 and {}, got {}", MAX_DECIMALS, d),
            );
        }
    }

    let decimals = decimals.or(state.default_decimals);
    match display_value(&state.registry, &id, &value, decimals) {
        Ok(text) => ApiResponse::ok(FormattedResponse { id, value, text }),
        Err(e) => error_response(e),
    }
}

/// POST /api/panels/stats - Summarise a dashboard's panels
async fn panel_stats(Json(panels): Json<Vec<PanelSummary>>) -> Response {
    let stats: PanelStats = collect_stats(&panels);
    tracing::debug!(panels = stats.panels, sources = stats.sources.len(), "panel stats");
    ApiResponse::ok(stats)
}

fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/formats", get(list_formats))
        .route("/formats/:id", get(format_by_id))
        .route("/format", post(format_from_body))
        .route("/panels/stats", post(panel_stats))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // config path: first argument, then VALUE_FORMATS_CONFIG
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("VALUE_FORMATS_CONFIG").ok())
        .map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref()).context("failed to load configuration")?;

    let state = AppState::new(&config);
    tracing::info!(
        formats = state.registry.count(),
        fingerprint = %state.registry.fingerprint(),
        footer = %state.build.footer(),
        "registry ready"
    );
    if state.build.update_available() {
        tracing::warn!(latest = ?state.build.latest_version, "a newer version is available");
    }

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("failed to bind to {}", config.server.bind))?;

    tracing::info!(addr = %config.server.bind, "🚀 server running");
    axum::serve(listener, router(state)).await.context("server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::json;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(&AppConfig::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_req("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["commit"], "unknown");
    }

    #[tokio::test]
    async fn test_menu() {
        let (status, body) = send(get_req("/api/formats")).await;
        assert_eq!(status, StatusCode::OK);
        let menu = body["data"].as_array().unwrap();
        assert_eq!(menu.len(), 23);
        assert_eq!(menu[0]["text"], "none");
    }

    #[tokio::test]
    async fn test_format_by_id() {
        let (status, body) = send(get_req("/api/formats/bytes?value=2048&decimals=0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["text"], "2 KiB");
    }

    #[tokio::test]
    async fn test_format_unknown_id_is_404() {
        let (status, body) = send(get_req("/api/formats/parsecs?value=1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_format_missing_value_is_400() {
        let (status, _) = send(get_req("/api/formats/bytes")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_format_post() {
        let request = post_json("/api/format", json!({ "id": "percent", "value": 42, "decimals": 0 }));
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["text"], "42%");

        let request = post_json("/api/format", json!({ "id": "percent", "value": "junk" }));
        let (_, body) = send(request).await;
        assert_eq!(body["data"]["text"], "NA");
    }

    #[tokio::test]
    async fn test_format_post_bad_decimals() {
        let request = post_json("/api/format", json!({ "id": "percent", "value": 1, "decimals": 99 }));
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_panel_stats() {
        let panels = json!([
            { "type": "graph", "datasource": "prom", "alert": { "name": "cpu" } },
            { "type": "graph", "datasource": "prom", "description": "latency" },
            { "type": "table", "datasource": "influx" }
        ]);
        let (status, body) = send(post_json("/api/panels/stats", panels)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["panels"], 3);
        assert_eq!(body["data"]["alerts"], 1);
        assert_eq!(body["data"]["sources"][0]["name"], "prom");
    }
}
