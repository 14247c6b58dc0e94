//! Otsu binarization of conditioned maps

use image::GrayImage;
use imageproc::contrast::{otsu_level, threshold, ThresholdType};

/// Foreground separation via Otsu's method.
pub struct Binarizer;

impl Binarizer {
    /// Computes the Otsu level over the map's histogram and thresholds it.
    ///
    /// Foreground is strictly above the level, so pixels at the level stay
    /// background. Returns the binary mask together with the level chosen.
    pub fn binarize(map: &GrayImage) -> (GrayImage, u8) {
        let level = otsu_level(map);
        let mask = threshold(map, level, ThresholdType::Binary);
        (mask, level)
    }
}
