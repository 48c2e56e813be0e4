//! HTTP transport implementation.
//!
//! JSON-RPC over POST requests, so plain HTTP clients (curl, browsers, ...)
//! can list and call tools. The same listener serves `/api/status` and `/health`.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rmcp::ErrorData as McpError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::{McpServer, status};

/// Protocol revision advertised by `initialize`.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Incoming JSON-RPC 2.0 message. Messages without an `id` are notifications.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Outgoing JSON-RPC 2.0 reply carrying either a result or an error.
#[derive(Debug, Clone, Serialize)]
pub struct RpcReply {
    jsonrpc: &'static str,
    id: Value,
    #[serde(flatten)]
    outcome: RpcOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
enum RpcOutcome {
    Result(Value),
    Error(RpcError),
}

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcError {
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<McpError> for RpcError {
    fn from(err: McpError) -> Self {
        Self::new(err.code.0, err.message)
    }
}

impl RpcReply {
    fn new(id: Option<Value>, outcome: Result<Value, RpcError>) -> Self {
        Self {
            jsonrpc: "2.0",
            id: id.unwrap_or(Value::Null),
            outcome: match outcome {
                Ok(value) => RpcOutcome::Result(value),
                Err(err) => RpcOutcome::Error(err),
            },
        }
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the application router.
    ///
    /// `port` is the port reported by the liveness endpoint.
    pub fn router(&self, server: McpServer, port: u16) -> Router {
        let name = server.name().to_string();

        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .with_state(server)
            .merge(status::router(&name, port))
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            app = app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        app
    }

    /// Bind the listener and serve until it fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;
        let port = listener.local_addr()?.port();

        let app = self.router(server, port);

        info!(
            "Ready - listening on {} (JSON-RPC at POST {}, status at GET {}, CORS {})",
            addr,
            self.config.rpc_path,
            status::STATUS_PATH,
            if self.config.enable_cors { "on" } else { "off" }
        );

        axum::serve(listener, app)
            .await
            .map_err(TransportError::serve)
    }
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(State(server): State<McpServer>, Json(request): Json<RpcRequest>) -> Response {
    tracing::Span::current().record("method", request.method.as_str());

    if request.method.starts_with("notifications/") {
        info!("Received notification: {}", request.method);
        return StatusCode::ACCEPTED.into_response();
    }

    let outcome = if request.jsonrpc == "2.0" {
        dispatch(&server, &request.method, request.params).await
    } else {
        Err(RpcError::new(RpcError::INVALID_REQUEST, "Invalid Request"))
    };

    Json(RpcReply::new(request.id, outcome)).into_response()
}

/// Route one JSON-RPC method to the server.
async fn dispatch(
    server: &McpServer,
    method: &str,
    params: Option<Value>,
) -> Result<Value, RpcError> {
    match method {
        "initialize" => Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": server.name(),
                "version": server.version()
            }
        })),
        "ping" => Ok(json!({})),
        "tools/list" => {
            let tools = serde_json::to_value(server.tool_catalog())
                .map_err(|e| RpcError::new(RpcError::INTERNAL_ERROR, e.to_string()))?;
            Ok(json!({ "tools": tools }))
        }
        "tools/call" => tools_call(server, params).await,
        other => {
            warn!("Unknown method: {}", other);
            Err(RpcError::new(
                RpcError::METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ))
        }
    }
}

/// Extract `{name, arguments}` and invoke the tool.
async fn tools_call(server: &McpServer, params: Option<Value>) -> Result<Value, RpcError> {
    let invalid = |msg: &str| RpcError::new(RpcError::INVALID_PARAMS, msg);

    let params = params.ok_or_else(|| invalid("Missing params"))?;
    let name = params
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("Missing tool name"))?;
    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(_) => return Err(invalid("'arguments' must be an object")),
    };

    let result = server.call_tool_result(name, arguments).await?;
    serde_json::to_value(result)
        .map_err(|e| RpcError::new(RpcError::INTERNAL_ERROR, e.to_string()))
}
