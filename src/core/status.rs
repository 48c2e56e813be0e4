//! Liveness endpoint.
//!
//! `GET /api/status` reports that the process is up and which port it is
//! bound to. It never touches the document store.

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::config::StatusConfig;
use super::transport::{TransportError, TransportResult};

/// Route of the liveness endpoint.
pub const STATUS_PATH: &str = "/api/status";

/// Body returned by the liveness endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub port: u16,
}

#[derive(Clone)]
struct StatusState {
    name: String,
    port: u16,
}

/// Build a router serving only the liveness endpoint.
///
/// Meant to be merged into a larger router or served on its own.
pub fn router(server_name: &str, port: u16) -> Router {
    Router::new()
        .route(STATUS_PATH, get(status_handler))
        .with_state(StatusState {
            name: server_name.to_string(),
            port,
        })
}

async fn status_handler(State(state): State<StatusState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: format!("{} is running", state.name),
        port: state.port,
    })
}

/// Bind the liveness listener and serve it in the background.
///
/// Binding happens before this returns, so a port conflict fails startup.
pub async fn spawn(server_name: &str, config: &StatusConfig) -> TransportResult<JoinHandle<()>> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| TransportError::bind(&addr, e))?;
    let port = listener.local_addr()?.port();

    info!("Status endpoint ready on http://{}:{}{}", config.host, port, STATUS_PATH);

    let app = router(server_name, port);
    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Status endpoint stopped: {}", e);
        }
    }))
}
