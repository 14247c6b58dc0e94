//! Binary morphology on threshold masks
//!
//! Erosion and dilation with a fixed 5x5 elliptical structuring element,
//! composed into the opening that strips speckle from binarized maps.
//! Samples outside the image are neutral for each primitive: erosion
//! treats them as foreground, dilation as background, so regions touching
//! the border are not distorted.

use image::{GrayImage, Luma};

/// Opening passes applied to every mask
pub const OPENING_ITERATIONS: usize = 2;

/// Offsets of the active cells of a 5x5 elliptical structuring element,
/// relative to its center:
///
/// ```text
/// . . # . .
/// # # # # #
/// # # # # #
/// # # # # #
/// . . # . .
/// ```
const ELLIPSE_OFFSETS: [(i32, i32); 17] = [
    (0, -2),
    (-2, -1),
    (-1, -1),
    (0, -1),
    (1, -1),
    (2, -1),
    (-2, 0),
    (-1, 0),
    (0, 0),
    (1, 0),
    (2, 0),
    (-2, 1),
    (-1, 1),
    (0, 1),
    (1, 1),
    (2, 1),
    (0, 2),
];

/// Minimum over the structuring element. Out-of-bounds samples count as 255.
pub fn erode(mask: &GrayImage) -> GrayImage {
    let (width, height) = mask.dimensions();
    let mut out = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let mut value = u8::MAX;
            for &(dx, dy) in ELLIPSE_OFFSETS.iter() {
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;
                if nx >= 0 && ny >= 0 && (nx as u32) < width && (ny as u32) < height {
                    value = value.min(mask.get_pixel(nx as u32, ny as u32).0[0]);
                }
            }
            out.put_pixel(x, y, Luma([value]));
        }
    }

    out
}

/// Maximum over the structuring element. Out-of-bounds samples count as 0.
pub fn dilate(mask: &GrayImage) -> GrayImage {
    let (width, height) = mask.dimensions();
    let mut out = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let mut value = u8::MIN;
            for &(dx, dy) in ELLIPSE_OFFSETS.iter() {
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;
                if nx >= 0 && ny >= 0 && (nx as u32) < width && (ny as u32) < height {
                    value = value.max(mask.get_pixel(nx as u32, ny as u32).0[0]);
                }
            }
            out.put_pixel(x, y, Luma([value]));
        }
    }

    out
}

/// Morphological opening: `iterations` erosions followed by the same
/// number of dilations. Structures smaller than the element vanish,
/// larger ones keep their extent.
pub fn open(mask: &GrayImage, iterations: usize) -> GrayImage {
    let mut current = mask.clone();
    for _ in 0..iterations {
        current = erode(&current);
    }
    for _ in 0..iterations {
        current = dilate(&current);
    }
    current
}
