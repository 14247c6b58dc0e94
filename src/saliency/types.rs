//! Common types for the saliency module

use image::{ImageBuffer, Luma};
use serde::Serialize;
use thiserror::Error;

/// Saliency pipeline error types
#[derive(Debug, Error)]
pub enum SaliencyError {
    #[error("Image too small for saliency analysis: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    #[error("Saliency computation failed: {0}")]
    ComputationFailed(String),
}

pub type Result<T> = std::result::Result<T, SaliencyError>;

/// Raw attention map produced by a saliency model.
///
/// One score per pixel, values in `[0.0, 1.0]`, at working resolution.
pub type SaliencyMap = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Pixel coordinates of the detected focus point.
///
/// Invariant: `x < width` and `y < height` of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusPoint {
    pub x: u32,
    pub y: u32,
}

/// Detection output: the focus point plus the source image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusResult {
    /// The most visually important pixel
    pub focus: FocusPoint,
    /// Source image width in pixels
    pub width: u32,
    /// Source image height in pixels
    pub height: u32,
}
