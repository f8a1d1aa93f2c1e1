//! Marching squares cell classification and segment extraction.

use crate::grid::SampleGrid;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Endpoint equality within a per-axis tolerance in degrees.
    pub fn close_to(&self, other: &GeoPoint, tolerance: f64) -> bool {
        (self.lat - other.lat).abs() <= tolerance && (self.lon - other.lon).abs() <= tolerance
    }
}

/// A contour line segment produced by a single cell.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

/// Interpolated level crossings on the four edges of a cell.
///
/// An edge carries a crossing only when its corner values straddle the
/// level, so every edge the case table names is present for that case.
#[derive(Debug, Clone, Copy)]
struct EdgeCrossings {
    top: Option<GeoPoint>,
    right: Option<GeoPoint>,
    bottom: Option<GeoPoint>,
    left: Option<GeoPoint>,
}

/// Extract all crossings of `level` through `grid` as unordered segments.
///
/// Cells with any missing corner are skipped; this is expected at
/// data-coverage edges, not an error.
pub fn march_squares(grid: &SampleGrid, level: f64) -> Vec<Segment> {
    let mut segments = Vec::new();
    if grid.rows() < 2 || grid.cols() < 2 {
        return segments;
    }

    for row in 0..grid.rows() - 1 {
        for col in 0..grid.cols() - 1 {
            let (Some(tl), Some(tr), Some(br), Some(bl)) = (
                grid.get(row, col),
                grid.get(row, col + 1),
                grid.get(row + 1, col + 1),
                grid.get(row + 1, col),
            ) else {
                continue;
            };

            // Corner bits: top-left=1, top-right=2, bottom-right=4,
            // bottom-left=8; a bit is set when the corner is >= level.
            let mut case = 0u8;
            if tl >= level {
                case |= 1;
            }
            if tr >= level {
                case |= 2;
            }
            if br >= level {
                case |= 4;
            }
            if bl >= level {
                case |= 8;
            }
            if case == 0 || case == 15 {
                continue;
            }

            let p_tl = GeoPoint::new(grid.lon_at(col), grid.lat_at(row));
            let p_tr = GeoPoint::new(grid.lon_at(col + 1), grid.lat_at(row));
            let p_br = GeoPoint::new(grid.lon_at(col + 1), grid.lat_at(row + 1));
            let p_bl = GeoPoint::new(grid.lon_at(col), grid.lat_at(row + 1));

            let crossings = EdgeCrossings {
                top: edge_crossing(p_tl, p_tr, tl, tr, level),
                right: edge_crossing(p_tr, p_br, tr, br, level),
                bottom: edge_crossing(p_bl, p_br, bl, br, level),
                left: edge_crossing(p_tl, p_bl, tl, bl, level),
            };

            let (first, second) = cell_segments(case, &crossings, (tl + br) / 2.0, level);
            segments.extend(first);
            segments.extend(second);
        }
    }

    segments
}

/// Interpolated crossing point on one edge, `None` when the corner values
/// do not straddle the level.
fn edge_crossing(a: GeoPoint, b: GeoPoint, va: f64, vb: f64, level: f64) -> Option<GeoPoint> {
    if (va >= level) == (vb >= level) {
        return None;
    }
    // Straddling guarantees va != vb
    let t = ((level - va) / (vb - va)).clamp(0.0, 1.0);
    Some(GeoPoint::new(
        a.lon + t * (b.lon - a.lon),
        a.lat + t * (b.lat - a.lat),
    ))
}

/// Case table mapping a cell classification to its segments.
///
/// The saddle cases (5 and 10) pick their pairing from the average of the
/// diagonal corners (top-left and bottom-right) against the level; the
/// same test applies to every ambiguous cell. An exact tie follows the
/// `>=` branch.
fn cell_segments(
    case: u8,
    c: &EdgeCrossings,
    diag_mean: f64,
    level: f64,
) -> (Option<Segment>, Option<Segment>) {
    let join = |a: Option<GeoPoint>, b: Option<GeoPoint>| {
        a.zip(b).map(|(start, end)| Segment { start, end })
    };

    match case {
        1 | 14 => (join(c.top, c.left), None),
        2 | 13 => (join(c.top, c.right), None),
        3 | 12 => (join(c.left, c.right), None),
        4 | 11 => (join(c.right, c.bottom), None),
        6 | 9 => (join(c.top, c.bottom), None),
        7 | 8 => (join(c.left, c.bottom), None),
        5 => {
            if diag_mean >= level {
                (join(c.top, c.right), join(c.bottom, c.left))
            } else {
                (join(c.top, c.left), join(c.right, c.bottom))
            }
        }
        10 => {
            if diag_mean >= level {
                (join(c.top, c.left), join(c.right, c.bottom))
            } else {
                (join(c.top, c.right), join(c.bottom, c.left))
            }
        }
        _ => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridBounds;

    fn unit_bounds() -> GridBounds {
        GridBounds {
            lat_min: 0.0,
            lat_max: 1.0,
            lon_min: 0.0,
            lon_max: 1.0,
        }
    }

    fn grid_2x2(tl: f64, tr: f64, bl: f64, br: f64) -> SampleGrid {
        // Row-major: row 0 (north) then row 1 (south)
        SampleGrid::new(
            2,
            2,
            unit_bounds(),
            vec![Some(tl), Some(tr), Some(bl), Some(br)],
        )
    }

    #[test]
    fn test_no_crossing_when_uniform() {
        let flat = grid_2x2(5.0, 5.0, 5.0, 5.0);
        assert!(march_squares(&flat, 5.0).is_empty()); // case 15
        assert!(march_squares(&flat, 9.0).is_empty()); // case 0

        let above = grid_2x2(6.0, 7.0, 8.0, 9.0);
        assert!(march_squares(&above, 5.0).is_empty());
    }

    #[test]
    fn test_null_corner_skips_cell() {
        let grid = SampleGrid::new(
            2,
            2,
            unit_bounds(),
            vec![Some(10.0), Some(10.0), None, Some(0.0)],
        );
        assert!(march_squares(&grid, 5.0).is_empty());
    }

    #[test]
    fn test_horizontal_midline() {
        // Top row 10, bottom row 0, level 5: one segment joining the
        // midpoints of the left and right edges at t = 0.5.
        let grid = grid_2x2(10.0, 10.0, 0.0, 0.0);
        let segments = march_squares(&grid, 5.0);
        assert_eq!(segments.len(), 1);

        let seg = segments[0];
        assert!((seg.start.lat - 0.5).abs() < 1e-12);
        assert!((seg.end.lat - 0.5).abs() < 1e-12);
        let lons = [seg.start.lon, seg.end.lon];
        assert!(lons.contains(&0.0));
        assert!(lons.contains(&1.0));
    }

    #[test]
    fn test_interpolation_fraction() {
        // Left edge from tl=8 to bl=0 crosses level 2 at t = 0.75
        let grid = grid_2x2(8.0, 8.0, 0.0, 0.0);
        let segments = march_squares(&grid, 2.0);
        assert_eq!(segments.len(), 1);
        assert!((segments[0].start.lat - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_saddle_case5_pairing() {
        // tl and br above: case 5. Diagonal mean (10+10)/2 = 10 >= 5,
        // so the pairing is top-right and bottom-left.
        let grid = grid_2x2(10.0, 0.0, 0.0, 10.0);
        let segments = march_squares(&grid, 5.0);
        assert_eq!(segments.len(), 2);

        // top crossing at lat=1, right crossing at lon=1
        let has_top_right = segments
            .iter()
            .any(|s| (s.start.lat - 1.0).abs() < 1e-12 && (s.end.lon - 1.0).abs() < 1e-12);
        let has_bottom_left = segments
            .iter()
            .any(|s| (s.start.lat - 0.0).abs() < 1e-12 && (s.end.lon - 0.0).abs() < 1e-12);
        assert!(has_top_right);
        assert!(has_bottom_left);
    }

    #[test]
    fn test_saddle_case10_pairing() {
        // tr and bl above: case 10. Diagonal mean (0+0)/2 = 0 < 5, so the
        // swapped test yields top-right and bottom-left.
        let grid = grid_2x2(0.0, 10.0, 10.0, 0.0);
        let segments = march_squares(&grid, 5.0);
        assert_eq!(segments.len(), 2);

        let has_top_right = segments
            .iter()
            .any(|s| (s.start.lat - 1.0).abs() < 1e-12 && (s.end.lon - 1.0).abs() < 1e-12);
        let has_bottom_left = segments
            .iter()
            .any(|s| (s.start.lat - 0.0).abs() < 1e-12 && (s.end.lon - 0.0).abs() < 1e-12);
        assert!(has_top_right);
        assert!(has_bottom_left);
    }

    #[test]
    fn test_saddle_deterministic() {
        let grid = grid_2x2(10.0, 0.0, 0.0, 10.0);
        let first = march_squares(&grid, 5.0);
        for _ in 0..10 {
            let again = march_squares(&grid, 5.0);
            assert_eq!(first.len(), again.len());
            for (a, b) in first.iter().zip(again.iter()) {
                assert_eq!(a.start, b.start);
                assert_eq!(a.end, b.end);
            }
        }
    }

    #[test]
    fn test_peak_emits_closed_ring_segments() {
        // 3x3 grid with a peak in the center: four cells each emit one
        // segment around the peak.
        let bounds = GridBounds {
            lat_min: 0.0,
            lat_max: 2.0,
            lon_min: 0.0,
            lon_max: 2.0,
        };
        let values = vec![
            Some(0.0),
            Some(0.0),
            Some(0.0),
            Some(0.0),
            Some(10.0),
            Some(0.0),
            Some(0.0),
            Some(0.0),
            Some(0.0),
        ];
        let grid = SampleGrid::new(3, 3, bounds, values);
        let segments = march_squares(&grid, 5.0);
        assert_eq!(segments.len(), 4);
    }
}
