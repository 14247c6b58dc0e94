//! Working-resolution bookkeeping
//!
//! Saliency models run on a half-resolution copy of the source image.
//! The conditioned map is brought back to full resolution before any
//! coordinate is derived, so downstream stages never rescale points.

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::types::{Result, SaliencyError};

// ============================================================
// Constants
// ============================================================

/// Fixed divisor between source and working resolution
const SCALE_DIVISOR: u32 = 2;

/// Smallest source dimension that still yields a non-empty working image
const MIN_SOURCE_DIMENSION: u32 = 2;

// ============================================================
// Types
// ============================================================

/// Resolved dimensions for one pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingScale {
    /// Source image width
    pub full_width: u32,
    /// Source image height
    pub full_height: u32,
    /// Working image width (floor of half the source width)
    pub width: u32,
    /// Working image height (floor of half the source height)
    pub height: u32,
}

impl WorkingScale {
    /// Validates the source dimensions and derives the working resolution.
    ///
    /// Rejects images where either dimension is below [`MIN_SOURCE_DIMENSION`],
    /// before any model work happens.
    pub fn from_dimensions(full_width: u32, full_height: u32) -> Result<Self> {
        if full_width < MIN_SOURCE_DIMENSION || full_height < MIN_SOURCE_DIMENSION {
            return Err(SaliencyError::InvalidImage {
                width: full_width,
                height: full_height,
            });
        }

        Ok(Self {
            full_width,
            full_height,
            width: full_width / SCALE_DIVISOR,
            height: full_height / SCALE_DIVISOR,
        })
    }

    /// Produces the working image via bilinear downsampling.
    pub fn downscale(&self, image: &RgbImage) -> RgbImage {
        imageops::resize(image, self.width, self.height, FilterType::Triangle)
    }
}

// ============================================================
// Tests
// ============================================================
