//! Web server implementation
//!
//! Provides the main server struct and configuration.

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use super::routes::{api_routes, AppState};
use super::{DEFAULT_BIND, DEFAULT_PORT};
use crate::fetch::FetchOptions;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Address to bind to
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a new server config with the given port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Create a new server config with the given bind address
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind, self.port).parse()
    }
}

/// Web server instance
pub struct WebServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server with default configuration
    pub fn new() -> Self {
        Self::with_options(ServerConfig::default(), FetchOptions::default())
    }

    /// Create a new web server with the given configuration
    pub fn with_config(config: ServerConfig) -> Self {
        Self::with_options(config, FetchOptions::default())
    }

    /// Create a new web server with explicit download behavior
    pub fn with_options(config: ServerConfig, fetch: FetchOptions) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new(fetch)),
        }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router
    fn build_router(&self) -> Router {
        Router::new()
            .merge(api_routes())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.socket_addr()?;
        let router = self.build_router();

        println!("Starting server on http://{}", addr);
        println!("API endpoints:");
        println!("  GET /focus?url=...   - Detect focus point of a remote image");
        println!("  GET /focus?path=...  - Detect focus point of a local image");
        println!("  GET /health          - Health check");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

impl Default for WebServer {
    fn default() -> Self {
        Self::new()
    }
}
