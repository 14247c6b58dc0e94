//! focuspoint - salient point detection for images
//!
//! Reduces a visual attention map to the single most important pixel of
//! an image. Ships with a color-contrast saliency model, loaders for
//! local files and URLs, and an optional HTTP service.
//!
//! # Quick start
//!
//! ```no_run
//! use focuspoint::SalientPointDetector;
//!
//! let image = image::open("photo.jpg")?.to_rgb8();
//! let result = SalientPointDetector::new().detect(&image)?;
//! println!("{}", serde_json::to_string(&result)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - `web`: axum-based HTTP service exposing the detector

pub mod cli;
pub mod config;
pub mod fetch;
pub mod saliency;

#[cfg(feature = "web")]
pub mod web;

pub use cli::{Cli, Commands, DetectArgs};
pub use config::{CliOverrides, Config, ConfigError};
pub use fetch::{FetchError, FetchOptions};
pub use saliency::{
    FocusPoint, FocusResult, GlobalContrastModel, SaliencyError, SaliencyMap, SaliencyModel,
    SalientPointDetector,
};

#[cfg(feature = "web")]
pub use cli::ServeArgs;
#[cfg(feature = "web")]
pub use web::{ServerConfig, WebServer};

/// Process exit codes
pub mod exit_codes {
    /// Successful completion
    pub const SUCCESS: i32 = 0;
    /// Unspecified failure
    pub const GENERAL_ERROR: i32 = 1;
    /// Input file missing or no input given
    pub const INPUT_NOT_FOUND: i32 = 2;
}
