//! Web server module for focuspoint
//!
//! Exposes the salient point detector over a small REST API.
//!
//! # Features
//!
//! - Focus detection for remote images (`?url=`) and local paths (`?path=`)
//! - Health check endpoint
//! - Permissive CORS for browser clients
//!
//! # Usage
//!
//! Enable the `web` feature and use the `serve` subcommand:
//!
//! ```bash
//! cargo build --features web
//! focuspoint serve --port 5000
//! ```

mod routes;
mod server;

pub use server::{ServerConfig, WebServer};

/// Default server port
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1";
