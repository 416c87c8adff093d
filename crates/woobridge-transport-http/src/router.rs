//! Axum router for the HTTP/JSON-RPC transport.
//! Routes: `POST /mcp` (requests), `GET /health` and `GET /health/ready`
//! (probes), `GET /events/:channel` (SSE change feed), and
//! `GET /api/poll/:resource` (buffered change polling).

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{
        sse::{Event as SseEvent, KeepAlive},
        IntoResponse, Sse,
    },
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt as _};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use woobridge_mcp::McpHandler;
use woobridge_protocol::{error_codes, JsonRpcNotification, JsonRpcRequest};

use crate::events::{parse_since, EventHub};

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP request dispatcher.
    pub handler: Arc<McpHandler>,
    /// The mutation change feed.
    pub events: Arc<EventHub>,
}

/// Builds the axum `Router` with all gateway routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/mcp", post(handle_mcp))
        .route("/health", get(handle_health))
        .route("/health/ready", get(handle_ready))
        .route("/events/:channel", get(handle_events))
        .route("/api/poll/:resource", get(handle_poll))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "woobridge"}))
}

/// Readiness probe. Returns `200 OK` once the server is accepting requests.
async fn handle_ready(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ready",
        "service": "woobridge",
        "subscribers": state.events.subscriber_count(),
    }))
}

async fn handle_mcp(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let json_val: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => {
            return json_rpc_error(
                StatusCode::OK,
                error_codes::PARSE_ERROR,
                &format!("parse error: {e}"),
            )
        }
    };

    let has_id = json_val.get("id").is_some_and(|v| !v.is_null());
    if !has_id {
        if let Ok(notif) = serde_json::from_value::<JsonRpcNotification>(json_val) {
            state.handler.handle_notification(&notif);
        }
        return StatusCode::NO_CONTENT.into_response();
    }

    let request: JsonRpcRequest = match serde_json::from_value(json_val) {
        Ok(r) => r,
        Err(e) => {
            return json_rpc_error(
                StatusCode::OK,
                error_codes::INVALID_REQUEST,
                &format!("invalid request: {e}"),
            )
        }
    };

    let output = state.handler.dispatch(&request).await;
    match output.to_json() {
        Ok(json_str) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json_str,
        )
            .into_response(),
        Err(e) => json_rpc_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            &e.to_string(),
        ),
    }
}

/// SSE stream of mutation events for one resource channel.
async fn handle_events(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    tracing::debug!(%channel, "sse client connected");

    let rx = state.events.subscribe(&channel);
    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => {
            let data = serde_json::to_string(&event).ok()?;
            Some(Ok(SseEvent::default().data(data).id(event.id)))
        }
        // A lagged receiver skips what it missed and keeps streaming.
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

#[derive(Deserialize)]
struct PollQuery {
    since: Option<String>,
}

/// Buffered change polling for clients that cannot hold an SSE connection.
async fn handle_poll(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(query): Query<PollQuery>,
) -> impl IntoResponse {
    let since = match query.since.as_deref() {
        Some(raw) => match parse_since(raw) {
            Some(ts) => Some(ts),
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": format!("unparseable since value: {raw:?} (want RFC 3339 or epoch milliseconds)"),
                    })),
                )
                    .into_response()
            }
        },
        None => None,
    };

    let events = state.events.events_since(&resource, since);
    Json(json!({
        "resource": resource,
        "count": events.len(),
        "events": events,
        "now": Utc::now(),
    }))
    .into_response()
}

/// Produces a JSON-RPC error response without a request ID (id: null).
fn json_rpc_error(status: StatusCode, code: i32, message: &str) -> axum::response::Response {
    let body = json!({
        "jsonrpc": "2.0",
        "id": null,
        "error": { "code": code, "message": message }
    });
    (status, Json(body)).into_response()
}
