//! Arc-length parameterization of a crack polyline.
//!
//! Positions are measured from the first point of the curve. A query point
//! is assigned to the nearest segment (lowest segment index on ties within
//! tolerance) and projected onto it.

use nalgebra::Point3;

use super::curve::CurveGeometry;
use super::tolerance::Tolerance;

/// Outcome of projecting a point onto the curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcProjection {
    /// Arc-length position of the projected point
    pub arc_position: f64,
    /// Segment the point was assigned to (`None` for curves without segments)
    pub segment: Option<usize>,
    /// Local parameter within the segment, in [0, 1]
    pub parameter: f64,
    /// Distance from the query point to its projection
    pub distance: f64,
    /// Whether the query point lies within tolerance of the curve
    pub on_curve: bool,
}

/// Cumulative segment lengths of a curve.
///
/// Borrows the curve so the index can never go out of date with the
/// geometry it was built from.
#[derive(Debug, Clone)]
pub struct ArcLengthIndex<'a> {
    curve: &'a CurveGeometry,
    /// `cumulative[i]` is the arc position of point `i`
    cumulative: Vec<f64>,
}

impl<'a> ArcLengthIndex<'a> {
    pub fn new(curve: &'a CurveGeometry) -> Self {
        let mut cumulative = Vec::with_capacity(curve.num_points());
        let mut acc = 0.0;
        if curve.num_points() > 0 {
            cumulative.push(0.0);
        }
        for (a, b) in curve.segments() {
            acc += (b - a).norm();
            cumulative.push(acc);
        }
        Self { curve, cumulative }
    }

    pub fn curve(&self) -> &CurveGeometry {
        self.curve
    }

    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Arc position of the first point of segment `segment`
    pub fn segment_start(&self, segment: usize) -> f64 {
        self.cumulative.get(segment).copied().unwrap_or_else(|| self.total_length())
    }

    /// Project `point` onto a known segment and return its arc position.
    ///
    /// Used when the segment is already known, e.g. from an intersection
    /// test, so no nearest-segment search is needed.
    pub fn arc_position_on_segment(&self, segment: usize, point: &Point3<f64>) -> f64 {
        match self.curve.segment(segment) {
            Some((a, b)) => {
                let (t, _) = project_onto_segment(&a, &b, point);
                self.cumulative[segment] + t * (b - a).norm()
            }
            None => self.total_length(),
        }
    }

    /// Nearest-segment projection of `point`.
    ///
    /// Never fails: a point farther than the tolerance from every segment is
    /// assigned to the nearest one and flagged with `on_curve == false`.
    pub fn project(&self, point: &Point3<f64>, tolerance: &Tolerance) -> ArcProjection {
        let tol = tolerance.absolute();

        if self.curve.num_segments() == 0 {
            let distance = self
                .curve
                .points()
                .first()
                .map(|p| (point - p).norm())
                .unwrap_or(f64::INFINITY);
            log::debug!("arc position queried on a curve without segments");
            return ArcProjection {
                arc_position: 0.0,
                segment: None,
                parameter: 0.0,
                distance,
                on_curve: distance <= tol,
            };
        }

        let mut best_segment = 0;
        let mut best_t = 0.0;
        let mut best_distance = f64::INFINITY;

        for (i, (a, b)) in self.curve.segments().enumerate() {
            let (t, distance) = project_onto_segment(&a, &b, point);
            // A later segment has to be closer by more than the tolerance to win
            if distance < best_distance - tol {
                best_segment = i;
                best_t = t;
                best_distance = distance;
            }
        }

        let seg_len = self.cumulative[best_segment + 1] - self.cumulative[best_segment];
        let on_curve = best_distance <= tol;
        if !on_curve {
            log::warn!(
                "point ({:.6e}, {:.6e}, {:.6e}) is {:.3e} off the crack (tolerance {:.3e}); using nearest segment {}",
                point.x, point.y, point.z, best_distance, tol, best_segment
            );
        }

        ArcProjection {
            arc_position: self.cumulative[best_segment] + best_t * seg_len,
            segment: Some(best_segment),
            parameter: best_t,
            distance: best_distance,
            on_curve,
        }
    }

    pub fn arc_position(&self, point: &Point3<f64>, tolerance: &Tolerance) -> f64 {
        self.project(point, tolerance).arc_position
    }

    /// Arc positions for a batch of points, in input order
    pub fn arc_positions(&self, points: &[Point3<f64>], tolerance: &Tolerance) -> Vec<f64> {
        points
            .iter()
            .map(|p| self.arc_position(p, tolerance))
            .collect()
    }

    /// Point located at arc position `arc`, clamped to the curve ends
    pub fn point_at(&self, arc: f64) -> Option<Point3<f64>> {
        let points = self.curve.points();
        let first = *points.first()?;
        if self.curve.num_segments() == 0 || arc <= 0.0 {
            return Some(first);
        }
        if arc >= self.total_length() {
            return points.last().copied();
        }

        // First point whose cumulative length reaches `arc` closes the segment
        let end = self.cumulative.partition_point(|&s| s < arc).max(1);
        let seg = end - 1;
        let seg_len = self.cumulative[end] - self.cumulative[seg];
        let t = if seg_len > 0.0 {
            (arc - self.cumulative[seg]) / seg_len
        } else {
            0.0
        };
        let (a, b) = (points[seg], points[end]);
        Some(a + (b - a) * t)
    }
}

/// Clamped projection of `p` onto segment [a, b].
///
/// Returns the segment parameter and the distance to the foot point.
pub fn project_onto_segment(a: &Point3<f64>, b: &Point3<f64>, p: &Point3<f64>) -> (f64, f64) {
    let d = b - a;
    let len2 = d.norm_squared();
    let t = if len2 > 0.0 {
        ((p - a).dot(&d) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let foot = a + d * t;
    (t, (p - foot).norm())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn polyline() -> CurveGeometry {
        CurveGeometry::from_xy(&[[0.0, 0.0], [1.0, 0.0], [3.0, 0.0], [3.0, 2.0]])
    }

    #[test]
    fn test_cumulative_lengths() {
        let curve = polyline();
        let index = ArcLengthIndex::new(&curve);
        assert_relative_eq!(index.total_length(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(index.segment_start(2), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_on_curve_points_map_to_prefix_length() {
        let curve = polyline();
        let index = ArcLengthIndex::new(&curve);
        let tol = Tolerance::default();

        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 1.5, 0.0),
            Point3::new(3.0, 2.0, 0.0),
        ];
        let arcs = index.arc_positions(&pts, &tol);
        let expected = [0.0, 0.5, 2.0, 4.5, 5.0];
        for (a, e) in arcs.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_point_at_inverts_arc_position() {
        let curve = polyline();
        let index = ArcLengthIndex::new(&curve);
        let tol = Tolerance::default();

        for &s in &[0.0, 0.25, 1.0, 2.7, 3.0, 4.1, 5.0] {
            let p = index.point_at(s).unwrap();
            assert_relative_eq!(index.arc_position(&p, &tol), s, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_point_at_clamps() {
        let curve = polyline();
        let index = ArcLengthIndex::new(&curve);
        assert_eq!(index.point_at(-1.0), Some(Point3::new(0.0, 0.0, 0.0)));
        assert_eq!(index.point_at(99.0), Some(Point3::new(3.0, 2.0, 0.0)));
        let empty = CurveGeometry::new(2);
        assert_eq!(ArcLengthIndex::new(&empty).point_at(1.0), None);
    }

    #[test]
    fn test_tie_goes_to_lowest_segment() {
        // Point equidistant from both legs of a right angle
        let curve = CurveGeometry::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        let index = ArcLengthIndex::new(&curve);
        let proj = index.project(&Point3::new(0.5, 0.5, 0.0), &Tolerance::default());
        assert_eq!(proj.segment, Some(0));
        assert_relative_eq!(proj.arc_position, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_near_tie_within_tolerance_keeps_lower_segment() {
        let curve = CurveGeometry::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        let index = ArcLengthIndex::new(&curve);
        let tol = Tolerance::new(1e-3, 1.0);

        // Segment 1 is closer by 5e-4, inside the 1e-3 band
        let proj = index.project(&Point3::new(0.5, 0.5005, 0.0), &tol);
        assert_eq!(proj.segment, Some(0));
        assert_relative_eq!(proj.distance, 0.5005, epsilon = 1e-12);
        assert_relative_eq!(proj.arc_position, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_clearly_closer_later_segment_wins() {
        let curve = CurveGeometry::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        let index = ArcLengthIndex::new(&curve);
        let tol = Tolerance::new(1e-3, 1.0);

        // Segment 1 is closer by 5e-3, outside the 1e-3 band
        let proj = index.project(&Point3::new(0.5, 0.505, 0.0), &tol);
        assert_eq!(proj.segment, Some(1));
        assert_relative_eq!(proj.distance, 0.5, epsilon = 1e-12);
        assert_relative_eq!(proj.arc_position, 1.505, epsilon = 1e-12);
    }

    #[test]
    fn test_off_curve_point_is_best_effort() {
        let curve = CurveGeometry::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        let index = ArcLengthIndex::new(&curve);
        let proj = index.project(&Point3::new(5.0, 5.0, 0.0), &Tolerance::default());
        assert!(!proj.on_curve);
        assert_eq!(proj.segment, Some(1));
        assert_relative_eq!(proj.arc_position, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_curve_positions_are_zero() {
        let single = CurveGeometry::from_xy(&[[2.0, 2.0]]);
        let index = ArcLengthIndex::new(&single);
        let proj = index.project(&Point3::new(2.0, 2.0, 0.0), &Tolerance::default());
        assert_eq!(proj.arc_position, 0.0);
        assert!(proj.on_curve);
        assert_eq!(proj.segment, None);
    }

    #[test]
    fn test_projection_clamps_to_segment() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let (t, d) = project_onto_segment(&a, &b, &Point3::new(2.0, 0.0, 0.0));
        assert_eq!(t, 1.0);
        assert_relative_eq!(d, 1.0, epsilon = 1e-12);
    }
}
