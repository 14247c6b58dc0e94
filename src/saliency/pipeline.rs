//! Detection pipeline
//!
//! Wires the stages together: downscale, model inference, conditioning,
//! binarization, opening, region selection, centroid. Every coordinate
//! decision happens at full resolution.

use image::RgbImage;
use tracing::{debug, debug_span, warn};

use super::binarize::Binarizer;
use super::centroid;
use super::conditioner::MapConditioner;
use super::model::{GlobalContrastModel, SaliencyModel};
use super::morphology::{self, OPENING_ITERATIONS};
use super::region;
use super::scale::WorkingScale;
use super::types::{FocusPoint, FocusResult, Result, SaliencyError};

/// Reduces an image to its single most visually important pixel.
///
/// The detector is deterministic for a given model: the same image
/// always produces the same [`FocusResult`]. Shareable across threads.
pub struct SalientPointDetector {
    model: Box<dyn SaliencyModel>,
}

impl SalientPointDetector {
    /// Detector backed by the built-in color-contrast model.
    pub fn new() -> Self {
        Self::with_model(Box::new(GlobalContrastModel))
    }

    /// Detector backed by a caller-supplied saliency model.
    pub fn with_model(model: Box<dyn SaliencyModel>) -> Self {
        Self { model }
    }

    /// Runs the full pipeline on `image`.
    ///
    /// Model failures propagate unchanged. When thresholding and cleanup
    /// leave no region with usable area, the result falls back to the
    /// brightest pixel of the conditioned map.
    pub fn detect(&self, image: &RgbImage) -> Result<FocusResult> {
        let (width, height) = image.dimensions();
        let _span = debug_span!("detect", width, height).entered();

        let scale = WorkingScale::from_dimensions(width, height)?;
        let working = scale.downscale(image);
        debug!(
            to = format!("{}x{}", scale.width, scale.height),
            "Downscaled to working resolution"
        );

        let map = self.model.compute(&working)?;
        if map.dimensions() != (scale.width, scale.height) {
            return Err(SaliencyError::ComputationFailed(format!(
                "model returned a {}x{} map for a {}x{} image",
                map.width(),
                map.height(),
                scale.width,
                scale.height
            )));
        }

        let conditioned = MapConditioner::condition(&map, scale.full_width, scale.full_height);
        let (mask, level) = Binarizer::binarize(&conditioned);
        debug!(level, "Binarized conditioned map");

        let cleaned = morphology::open(&mask, OPENING_ITERATIONS);
        let regions = region::extract_regions(&cleaned);
        debug!(regions = regions.len(), "Extracted candidate regions");

        if let Some(winner) = region::largest_region(&regions) {
            if let Some((x, y)) = centroid::region_centroid(winner) {
                debug!(x, y, area = winner.area, "Selected region centroid");
                return Ok(FocusResult {
                    focus: FocusPoint { x, y },
                    width: scale.full_width,
                    height: scale.full_height,
                });
            }
        }

        let (x, y) = centroid::peak_pixel(&conditioned);
        warn!(x, y, "No region with usable area, falling back to peak pixel");
        Ok(FocusResult {
            focus: FocusPoint { x, y },
            width: scale.full_width,
            height: scale.full_height,
        })
    }
}

impl Default for SalientPointDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_detect_reports_source_dimensions() {
        let mut image = RgbImage::from_pixel(64, 48, Rgb([12, 12, 12]));
        for y in 20..30 {
            for x in 25..35 {
                image.put_pixel(x, y, Rgb([240, 240, 240]));
            }
        }

        let result = SalientPointDetector::new().detect(&image).unwrap();
        assert_eq!(result.width, 64);
        assert_eq!(result.height, 48);
        assert!(result.focus.x < 64);
        assert!(result.focus.y < 48);
    }

    #[test]
    fn test_detect_rejects_degenerate_images() {
        let detector = SalientPointDetector::new();

        let empty = RgbImage::new(0, 0);
        assert!(matches!(
            detector.detect(&empty),
            Err(SaliencyError::InvalidImage {
                width: 0,
                height: 0
            })
        ));

        let sliver = RgbImage::new(100, 1);
        assert!(matches!(
            detector.detect(&sliver),
            Err(SaliencyError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_stage_events_carry_detect_span() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = Arc::new(Mutex::new(Vec::new()));
        let writer = Capture(sink.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut image = RgbImage::from_pixel(100, 100, Rgb([15, 15, 15]));
        for y in 40..60 {
            for x in 40..60 {
                image.put_pixel(x, y, Rgb([230, 230, 230]));
            }
        }

        tracing::subscriber::with_default(subscriber, || {
            SalientPointDetector::new().detect(&image).unwrap();
        });

        let output = String::from_utf8(sink.lock().unwrap().clone()).unwrap();
        let scope = "detect{width=100 height=100}";
        for message in [
            "Downscaled to working resolution",
            "Binarized conditioned map",
            "Extracted candidate regions",
        ] {
            let line = output
                .lines()
                .find(|line| line.contains(message))
                .unwrap_or_else(|| panic!("missing event: {message}"));
            assert!(line.contains(scope), "event outside detect span: {line}");
        }
    }

    #[test]
    fn test_detect_rejects_mismatched_model_output() {
        use crate::saliency::types::SaliencyMap;

        struct WrongSizeModel;
        impl SaliencyModel for WrongSizeModel {
            fn compute(&self, _image: &RgbImage) -> Result<SaliencyMap> {
                Ok(SaliencyMap::new(1, 1))
            }
        }

        let detector = SalientPointDetector::with_model(Box::new(WrongSizeModel));
        let image = RgbImage::from_pixel(64, 64, Rgb([50, 50, 50]));
        assert!(matches!(
            detector.detect(&image),
            Err(SaliencyError::ComputationFailed(_))
        ));
    }
}
