//! Map conditioning
//!
//! Turns a raw working-resolution saliency map into a full-resolution
//! 8-bit map that is smooth enough to threshold: quantize to `u8`,
//! Gaussian blur, bilinear upsample, then a min-max contrast stretch.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use imageproc::filter::gaussian_blur_f32;

use super::types::SaliencyMap;

/// Gaussian blur strength. The kernel radius derived from this sigma
/// spans seven taps, wide enough to merge speckle into coherent blobs.
const BLUR_SIGMA: f32 = 1.4;

/// Smoothing and normalization of raw saliency maps.
pub struct MapConditioner;

impl MapConditioner {
    /// Runs the full conditioning chain and returns a map at the
    /// requested full resolution.
    pub fn condition(map: &SaliencyMap, full_width: u32, full_height: u32) -> GrayImage {
        let quantized = Self::quantize(map);
        let blurred = gaussian_blur_f32(&quantized, BLUR_SIGMA);
        let full = imageops::resize(&blurred, full_width, full_height, FilterType::Triangle);
        Self::stretch(&full)
    }

    /// Maps unit-range scores onto `0..=255`, truncating fractions.
    fn quantize(map: &SaliencyMap) -> GrayImage {
        let mut out = GrayImage::new(map.width(), map.height());
        for (x, y, pixel) in map.enumerate_pixels() {
            let value = (pixel.0[0] * 255.0).clamp(0.0, 255.0) as u8;
            out.put_pixel(x, y, Luma([value]));
        }
        out
    }

    /// Linear min-max stretch to the full `0..=255` range.
    ///
    /// A flat map has no range to stretch and collapses to all zeros,
    /// the degenerate case of the linear remap.
    fn stretch(map: &GrayImage) -> GrayImage {
        let (width, height) = map.dimensions();

        let mut min = u8::MAX;
        let mut max = u8::MIN;
        for pixel in map.pixels() {
            min = min.min(pixel.0[0]);
            max = max.max(pixel.0[0]);
        }

        if max <= min {
            return GrayImage::new(width, height);
        }

        let span = (max - min) as f32;
        let mut out = GrayImage::new(width, height);
        for (x, y, pixel) in map.enumerate_pixels() {
            let value = ((pixel.0[0] - min) as f32 * 255.0 / span).round() as u8;
            out.put_pixel(x, y, Luma([value]));
        }
        out
    }
}
