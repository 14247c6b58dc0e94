//! Salient point detection
//!
//! Finds the single most visually important pixel of an image by reducing
//! a per-pixel attention map to one coordinate pair.
//!
//! # Algorithm
//!
//! 1. Downscale the image to half resolution
//! 2. Score every pixel with a [`SaliencyModel`]
//! 3. Condition the map: quantize, blur, upsample, contrast stretch
//! 4. Binarize with Otsu's method
//! 5. Clean the mask with a morphological opening
//! 6. Keep the largest external region
//! 7. Report its polygon centroid, or the peak map pixel when no
//!    region survives
//!
//! # Usage
//!
//! ```no_run
//! use focuspoint::SalientPointDetector;
//!
//! let image = image::open("photo.jpg")?.to_rgb8();
//! let result = SalientPointDetector::new().detect(&image)?;
//! println!("focus at ({}, {})", result.focus.x, result.focus.y);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod binarize;
mod centroid;
mod conditioner;
mod model;
mod morphology;
mod pipeline;
mod region;
mod scale;
mod types;

pub use model::{GlobalContrastModel, SaliencyModel};
pub use pipeline::SalientPointDetector;
pub use types::{FocusPoint, FocusResult, Result, SaliencyError, SaliencyMap};
