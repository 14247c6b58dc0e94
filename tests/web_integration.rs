//! Integration tests for the web server module
//!
//! Run with: cargo test --features web

#![cfg(feature = "web")]

use focuspoint::web::{DEFAULT_BIND, DEFAULT_PORT};
use focuspoint::{FetchOptions, FocusPoint, FocusResult, ServerConfig, WebServer};

// TC-WEB-001: Default configuration matches the documented service port
#[test]
fn test_server_config_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.port, 5000);
    assert_eq!(config.bind, DEFAULT_BIND);
}

// TC-WEB-002: Builder overrides
#[test]
fn test_server_config_builder() {
    let config = ServerConfig::default().with_port(8080).with_bind("0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind, "0.0.0.0");
}

// TC-WEB-003: Socket address resolution
#[test]
fn test_socket_addr_resolution() {
    let addr = ServerConfig::default().with_port(7000).socket_addr().unwrap();
    assert_eq!(addr.port(), 7000);
    assert_eq!(addr.ip().to_string(), "127.0.0.1");

    let bad = ServerConfig::default().with_bind("focus.example");
    assert!(bad.socket_addr().is_err());
}

// TC-WEB-004: Server construction carries its configuration
#[tokio::test]
async fn test_web_server_construction() {
    let server = WebServer::new();
    assert_eq!(server.config().port, DEFAULT_PORT);

    let custom = WebServer::with_options(
        ServerConfig::default().with_port(9100),
        FetchOptions::default(),
    );
    assert_eq!(custom.config().port, 9100);
}

// TC-WEB-005: Focus results serialize to the wire format clients parse
#[test]
fn test_focus_result_wire_format() {
    let result = FocusResult {
        focus: FocusPoint { x: 333, y: 41 },
        width: 1024,
        height: 768,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"focus":{"x":333,"y":41},"width":1024,"height":768}"#
    );
}
