//! Transport selection.

use serde::{Deserialize, Serialize};

use crate::core::config::StatusConfig;

#[cfg(not(any(feature = "stdio", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio or http");

/// Which transport carries MCP traffic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Newline-delimited JSON-RPC on stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Bind address; shared with the liveness endpoint.
    pub host: String,
    pub port: u16,

    /// Route accepting JSON-RPC requests.
    pub rpc_path: String,

    /// Send permissive CORS headers.
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// HTTP settings listening where the liveness endpoint would.
    pub fn on(status: &StatusConfig) -> Self {
        Self {
            host: status.host.clone(),
            port: status.port,
            rpc_path: "/mcp".to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self::on(&StatusConfig::default())
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::select("", &StatusConfig::default())
    }
}

impl TransportConfig {
    /// Pick a transport by name, falling back to the first compiled-in one.
    #[cfg_attr(not(feature = "http"), allow(unused_variables))]
    pub fn select(name: &str, status: &StatusConfig) -> Self {
        match name.to_ascii_lowercase().as_str() {
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::on(status)),
            #[cfg(feature = "stdio")]
            _ => Self::Stdio,
            #[cfg(not(feature = "stdio"))]
            _ => Self::Http(HttpConfig::on(status)),
        }
    }

    /// Load transport config from `MCP_TRANSPORT`, `MCP_HTTP_PATH` and `MCP_HTTP_CORS`.
    pub fn from_env(status: &StatusConfig) -> Self {
        let name = std::env::var("MCP_TRANSPORT").unwrap_or_default();

        #[cfg_attr(not(feature = "http"), allow(unused_mut))]
        let mut config = Self::select(&name, status);

        #[cfg(feature = "http")]
        if let Self::Http(http) = &mut config {
            if let Ok(path) = std::env::var("MCP_HTTP_PATH") {
                http.rpc_path = path;
            }
            if let Ok(cors) = std::env::var("MCP_HTTP_CORS") {
                http.enable_cors = !matches!(cors.to_ascii_lowercase().as_str(), "false" | "0");
            }
        }

        config
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unknown_name_falls_back_to_stdio() {
        let status = StatusConfig::default();
        assert!(matches!(
            TransportConfig::select("carrier-pigeon", &status),
            TransportConfig::Stdio
        ));
        assert!(TransportConfig::default().description().contains("STDIO"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_uses_status_port() {
        let status = StatusConfig {
            host: "0.0.0.0".to_string(),
            port: 4000,
        };
        match TransportConfig::select("HTTP", &status) {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, 4000);
                assert_eq!(cfg.host, "0.0.0.0");
                assert_eq!(cfg.rpc_path, "/mcp");
            }
            #[allow(unreachable_patterns)]
            other => panic!("expected http transport, got {other:?}"),
        }
    }
}
