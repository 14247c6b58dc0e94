//! Focus point selection
//!
//! Reduces the winning region to a single pixel via polygon moments,
//! with a peak-pixel scan as the fallback when no region has usable
//! area.

use image::GrayImage;

use super::region::Region;

/// Centroid of a region's border polygon from its first-order moments,
/// truncated to pixel coordinates.
///
/// Returns `None` when the polygon area is zero (single points, straight
/// lines, one-pixel-wide traces), which signals the caller to fall back.
pub fn region_centroid(region: &Region) -> Option<(u32, u32)> {
    let points = &region.points;
    let n = points.len();

    // Green's theorem over the closed border polygon. The signed area
    // factor cancels in the division, so orientation does not matter.
    let mut area2 = 0i64;
    let mut sum_x = 0i128;
    let mut sum_y = 0i128;
    for i in 0..n {
        let j = (i + 1) % n;
        let xi = points[i].x as i64;
        let yi = points[i].y as i64;
        let xj = points[j].x as i64;
        let yj = points[j].y as i64;

        let cross = xi * yj - xj * yi;
        area2 += cross;
        sum_x += (xi + xj) as i128 * cross as i128;
        sum_y += (yi + yj) as i128 * cross as i128;
    }

    if area2 == 0 {
        return None;
    }

    let cx = sum_x / (3 * area2 as i128);
    let cy = sum_y / (3 * area2 as i128);
    Some((cx as u32, cy as u32))
}

/// First pixel holding the map's maximum value, scanning rows top to
/// bottom and pixels left to right. Ties keep the earliest pixel.
pub fn peak_pixel(map: &GrayImage) -> (u32, u32) {
    let mut best = (0u32, 0u32);
    let mut best_value = 0u8;
    for (x, y, pixel) in map.enumerate_pixels() {
        if pixel.0[0] > best_value {
            best_value = pixel.0[0];
            best = (x, y);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use imageproc::point::Point;

    fn square_region(x0: i32, y0: i32, side: i32) -> Region {
        let points = vec![
            Point::new(x0, y0),
            Point::new(x0 + side, y0),
            Point::new(x0 + side, y0 + side),
            Point::new(x0, y0 + side),
        ];
        Region {
            points,
            area: (side * side) as f64,
        }
    }

    #[test]
    fn test_square_centroid_is_center() {
        let region = square_region(10, 20, 8);
        assert_eq!(region_centroid(&region), Some((14, 24)));
    }

    #[test]
    fn test_centroid_truncates_fractions() {
        // 5-wide square centered at 12.5
        let region = square_region(10, 10, 5);
        assert_eq!(region_centroid(&region), Some((12, 12)));
    }

    #[test]
    fn test_centroid_orientation_independent() {
        let clockwise = Region {
            points: vec![
                Point::new(0, 0),
                Point::new(0, 6),
                Point::new(6, 6),
                Point::new(6, 0),
            ],
            area: 36.0,
        };
        assert_eq!(region_centroid(&clockwise), Some((3, 3)));
    }

    #[test]
    fn test_single_point_has_no_centroid() {
        let region = Region {
            points: vec![Point::new(5, 9)],
            area: 0.0,
        };
        assert_eq!(region_centroid(&region), None);
    }

    #[test]
    fn test_straight_line_has_no_centroid() {
        let region = Region {
            points: vec![Point::new(2, 7), Point::new(12, 7)],
            area: 0.0,
        };
        assert_eq!(region_centroid(&region), None);
    }

    #[test]
    fn test_peak_pixel_finds_maximum() {
        let mut map = GrayImage::new(10, 10);
        map.put_pixel(6, 2, Luma([80]));
        map.put_pixel(3, 7, Luma([200]));
        assert_eq!(peak_pixel(&map), (3, 7));
    }

    #[test]
    fn test_peak_pixel_tie_keeps_first_in_row_major_order() {
        let mut map = GrayImage::new(10, 10);
        map.put_pixel(8, 1, Luma([200]));
        map.put_pixel(2, 4, Luma([200]));
        map.put_pixel(9, 9, Luma([200]));
        assert_eq!(peak_pixel(&map), (8, 1));
    }

    #[test]
    fn test_peak_pixel_all_zero_map() {
        let map = GrayImage::new(6, 4);
        assert_eq!(peak_pixel(&map), (0, 0));
    }
}
