//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file), then shared read-only behind an `Arc`.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default port for the liveness endpoint and the HTTP transport.
pub const DEFAULT_PORT: u16 = 3000;

/// Default upstream Notion API root.
pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1/";

/// Notion API version sent with every upstream request.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Liveness endpoint configuration.
    pub status: StatusConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Document store (Notion) configuration.
    pub notion: NotionConfig,

    /// Tool dispatch limits.
    pub tools: ToolsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the `/api/status` listener.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on (`PORT`).
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the Notion API.
#[derive(Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration token. Required; see [`Config::validate`].
    pub api_key: Option<String>,

    /// API root, must end with a slash so relative paths join under it.
    pub base_url: String,

    /// Value of the `Notion-Version` header.
    pub version: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .finish()
    }
}

/// Tool dispatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Maximum number of tool calls allowed in flight at once.
    pub max_concurrent_calls: usize,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_NOTION_BASE_URL.to_string(),
            version: DEFAULT_NOTION_VERSION.to_string(),
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            max_concurrent_calls: 16,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "notion-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            status: StatusConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            notion: NotionConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `PORT` and the `NOTION_*` variables follow the conventional names;
    /// everything else is prefixed with `MCP_`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(host) = std::env::var("MCP_HOST") {
            config.status.host = host;
        }

        config.status.port = parse_env("PORT").unwrap_or(DEFAULT_PORT);

        config.transport = TransportConfig::from_env(&config.status);

        if let Ok(api_key) = std::env::var("NOTION_API_KEY") {
            if !api_key.trim().is_empty() {
                config.notion.api_key = Some(api_key);
                info!("Notion API key loaded from environment");
            }
        }

        if let Ok(base_url) = std::env::var("NOTION_API_BASE_URL") {
            config.notion.base_url = base_url;
        }

        if let Ok(version) = std::env::var("NOTION_VERSION") {
            config.notion.version = version;
        }

        if let Some(max) = parse_env::<usize>("MCP_MAX_CONCURRENT_CALLS") {
            if max == 0 {
                warn!("MCP_MAX_CONCURRENT_CALLS must be positive, keeping default");
            } else {
                config.tools.max_concurrent_calls = max;
            }
        }

        config
    }

    /// Check that everything needed to serve requests is present.
    ///
    /// A missing credential fails here rather than on the first tool call.
    pub fn validate(&self) -> Result<()> {
        if self.notion.api_key.is_none() {
            return Err(Error::config(
                "NOTION_API_KEY is not set; create an integration token at https://www.notion.so/my-integrations",
            ));
        }
        Ok(())
    }
}

/// Read and parse an environment variable, ignoring unset or malformed values.
fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value for {}: {:?}", key, raw);
            None
        }
    }
}
