//! Saliency model abstraction
//!
//! A model turns an RGB image into a per-pixel attention map. The pipeline
//! treats the model as a black box behind [`SaliencyModel`], so alternative
//! scoring strategies plug in without touching the reduction stages.

use image::{Luma, RgbImage};

use super::types::{Result, SaliencyMap};

/// Per-pixel visual attention scoring.
///
/// Implementations must be deterministic: the same image always produces
/// the same map. The returned map has the same dimensions as the input,
/// with scores in `[0.0, 1.0]`.
pub trait SaliencyModel: Send + Sync {
    fn compute(&self, image: &RgbImage) -> Result<SaliencyMap>;
}

/// Color-contrast saliency model.
///
/// Scores each pixel by its Euclidean RGB distance from the global mean
/// color, normalized so the most distinct pixel scores 1.0. Images with no
/// color spread produce an all-zero map.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalContrastModel;

impl SaliencyModel for GlobalContrastModel {
    fn compute(&self, image: &RgbImage) -> Result<SaliencyMap> {
        let (width, height) = image.dimensions();
        let pixel_count = width as u64 * height as u64;

        let mut sums = [0u64; 3];
        for pixel in image.pixels() {
            sums[0] += pixel.0[0] as u64;
            sums[1] += pixel.0[1] as u64;
            sums[2] += pixel.0[2] as u64;
        }
        let mean = [
            sums[0] as f32 / pixel_count.max(1) as f32,
            sums[1] as f32 / pixel_count.max(1) as f32,
            sums[2] as f32 / pixel_count.max(1) as f32,
        ];

        let mut map = SaliencyMap::new(width, height);
        let mut max_distance = 0.0f32;
        for (x, y, pixel) in image.enumerate_pixels() {
            let dr = pixel.0[0] as f32 - mean[0];
            let dg = pixel.0[1] as f32 - mean[1];
            let db = pixel.0[2] as f32 - mean[2];
            let distance = (dr * dr + dg * dg + db * db).sqrt();
            map.put_pixel(x, y, Luma([distance]));
            if distance > max_distance {
                max_distance = distance;
            }
        }

        if max_distance > f32::EPSILON {
            for pixel in map.pixels_mut() {
                pixel.0[0] /= max_distance;
            }
        } else {
            // No spread at all, e.g. a uniform image
            for pixel in map.pixels_mut() {
                pixel.0[0] = 0.0;
            }
        }

        Ok(map)
    }
}
