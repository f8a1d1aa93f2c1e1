//! Greedy stitching of unordered segments into polylines.

use crate::marching::{GeoPoint, Segment};

/// Endpoint matching tolerance in degrees, applied to each axis.
pub const STITCH_TOLERANCE: f64 = 0.0001;

/// An ordered run of connected contour points for one level.
#[derive(Debug, Clone)]
pub struct Polyline {
    pub points: Vec<GeoPoint>,
}

impl Polyline {
    /// Whether the first and last points coincide within tolerance.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 2 => {
                first.close_to(last, STITCH_TOLERANCE)
            }
            _ => false,
        }
    }
}

/// Merge unordered segments into maximal polylines.
///
/// Each unused segment seeds a polyline; remaining segments attach by
/// either endpoint to either the head or the tail, prepending or appending
/// their other point, until nothing more fits. The scan is O(n^2) in the
/// segment count, fine at tens of segments per level; grids with hundreds
/// of cells per axis would need endpoint hashing instead.
pub fn stitch_segments(segments: &[Segment]) -> Vec<Polyline> {
    let mut polylines = Vec::new();
    let mut used = vec![false; segments.len()];

    for seed in 0..segments.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let mut points = vec![segments[seed].start, segments[seed].end];

        let mut extended = true;
        while extended {
            extended = false;
            let head = points[0];
            let tail = points[points.len() - 1];

            for i in 0..segments.len() {
                if used[i] {
                    continue;
                }
                let seg = &segments[i];
                if seg.start.close_to(&tail, STITCH_TOLERANCE) {
                    points.push(seg.end);
                } else if seg.end.close_to(&tail, STITCH_TOLERANCE) {
                    points.push(seg.start);
                } else if seg.start.close_to(&head, STITCH_TOLERANCE) {
                    points.insert(0, seg.end);
                } else if seg.end.close_to(&head, STITCH_TOLERANCE) {
                    points.insert(0, seg.start);
                } else {
                    continue;
                }
                used[i] = true;
                extended = true;
                break;
            }
        }

        // Cannot drop below 2 given segment construction; defensive check
        if points.len() >= 2 {
            polylines.push(Polyline { points });
        }
    }

    polylines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment {
            start: GeoPoint::new(x1, y1),
            end: GeoPoint::new(x2, y2),
        }
    }

    #[test]
    fn test_merge_two_segments_sharing_endpoint() {
        let segments = vec![seg(0.0, 0.0, 1.0, 0.0), seg(1.0, 0.0, 2.0, 0.5)];
        let polylines = stitch_segments(&segments);
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].points.len(), 3);
        assert_eq!(polylines[0].points[0], GeoPoint::new(0.0, 0.0));
        assert_eq!(polylines[0].points[2], GeoPoint::new(2.0, 0.5));
    }

    #[test]
    fn test_merge_within_tolerance() {
        // Endpoints differ by less than the tolerance on both axes
        let segments = vec![
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.00005, 0.00005, 2.0, 0.0),
        ];
        let polylines = stitch_segments(&segments);
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].points.len(), 3);
    }

    #[test]
    fn test_no_merge_beyond_tolerance() {
        let segments = vec![seg(0.0, 0.0, 1.0, 0.0), seg(1.01, 0.0, 2.0, 0.0)];
        let polylines = stitch_segments(&segments);
        assert_eq!(polylines.len(), 2);
    }

    #[test]
    fn test_extends_at_head() {
        // The second segment attaches to the polyline's head, not its tail
        let segments = vec![seg(1.0, 0.0, 2.0, 0.0), seg(0.0, 0.0, 1.0, 0.0)];
        let polylines = stitch_segments(&segments);
        assert_eq!(polylines.len(), 1);
        let points = &polylines[0].points;
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], GeoPoint::new(0.0, 0.0));
        assert_eq!(points[2], GeoPoint::new(2.0, 0.0));
    }

    #[test]
    fn test_reversed_segment_attaches() {
        // Matching is order-independent within a segment
        let segments = vec![seg(0.0, 0.0, 1.0, 0.0), seg(2.0, 0.0, 1.0, 0.0)];
        let polylines = stitch_segments(&segments);
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].points.len(), 3);
    }

    #[test]
    fn test_quadrilateral_loop_closes() {
        let segments = vec![
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 1.0, 1.0),
            seg(1.0, 1.0, 0.0, 1.0),
            seg(0.0, 1.0, 0.0, 0.0),
        ];
        let polylines = stitch_segments(&segments);
        assert_eq!(polylines.len(), 1);
        let polyline = &polylines[0];
        assert_eq!(polyline.points.len(), 5);
        assert!(polyline.is_closed());
    }

    #[test]
    fn test_disjoint_segments_stay_separate() {
        let segments = vec![seg(0.0, 0.0, 1.0, 0.0), seg(5.0, 5.0, 6.0, 5.0)];
        let polylines = stitch_segments(&segments);
        assert_eq!(polylines.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(stitch_segments(&[]).is_empty());
    }
}
