//! Connected region extraction
//!
//! Traces region borders on the cleaned mask and keeps only external
//! ones: outer borders with no enclosing contour. Holes and islands
//! nested inside holes never become candidate regions.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

/// One external region of the mask: its border polygon and polygon area.
#[derive(Debug, Clone)]
pub struct Region {
    /// Border pixels in trace order
    pub points: Vec<Point<i32>>,
    /// Shoelace area of the border polygon, in square pixels
    pub area: f64,
}

/// Extracts all external regions of a binary mask, in border trace
/// discovery order (raster order of each region's topmost border pixel).
pub fn extract_regions(mask: &GrayImage) -> Vec<Region> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| {
            let area = polygon_area(&c.points);
            Region {
                points: c.points,
                area,
            }
        })
        .collect()
}

/// Picks the region with the strictly largest area. Ties keep the
/// earliest region in discovery order. Returns `None` for an empty slice.
pub fn largest_region(regions: &[Region]) -> Option<&Region> {
    let mut best: Option<&Region> = None;
    for region in regions {
        let replace = match best {
            None => true,
            Some(current) => region.area > current.area,
        };
        if replace {
            best = Some(region);
        }
    }
    best
}

/// Unsigned shoelace area of a closed polygon. Degenerate polygons
/// (fewer than three distinct vertices, or a zero-width trace) have
/// area zero.
fn polygon_area(points: &[Point<i32>]) -> f64 {
    let n = points.len();
    let mut sum = 0i64;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x as i64 * points[j].y as i64;
        sum -= points[j].x as i64 * points[i].y as i64;
    }
    sum.abs() as f64 / 2.0
}
