//! Crack/crack intersection.
//!
//! Every segment of one curve is tested against every segment of the other
//! using the parametric closest-point formulation, which covers both planar
//! and spatial polylines. Parallel and degenerate segment pairs never report
//! an intersection.

use nalgebra::Point3;

use super::arc_length::ArcLengthIndex;
use super::curve::CurveGeometry;
use super::tolerance::Tolerance;

/// Squared sine of the angle below which two segments count as parallel
const PARALLEL_SIN2: f64 = 1e-12;

/// Crossing of two individual segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Intersection point, located on the first segment
    pub point: Point3<f64>,
    /// Parameter along the first segment, in [0, 1]
    pub t: f64,
    /// Parameter along the second segment, in [0, 1]
    pub s: f64,
}

/// Intersect segment [p0, p1] with segment [q0, q1].
///
/// Both parameters may overshoot [0, 1] by `tolerance` in length units and
/// are clamped afterwards. For non-coplanar segments the closest points
/// must also lie within `tolerance` of each other.
pub fn segment_intersection(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    q0: &Point3<f64>,
    q1: &Point3<f64>,
    tolerance: f64,
) -> Option<SegmentHit> {
    let d1 = p1 - p0;
    let d2 = q1 - q0;
    let r = p0 - q0;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    if a == 0.0 || e == 0.0 {
        return None;
    }

    let b = d1.dot(&d2);
    let c = d1.dot(&r);
    let f = d2.dot(&r);

    // |d1 x d2|^2
    let denom = a * e - b * b;
    if denom <= PARALLEL_SIN2 * a * e {
        return None;
    }

    let t = (b * f - c * e) / denom;
    let s = (a * f - b * c) / denom;

    let t_tol = tolerance / a.sqrt();
    let s_tol = tolerance / e.sqrt();
    if t < -t_tol || t > 1.0 + t_tol || s < -s_tol || s > 1.0 + s_tol {
        return None;
    }

    let t = t.clamp(0.0, 1.0);
    let s = s.clamp(0.0, 1.0);
    let on_p = p0 + d1 * t;
    let on_q = q0 + d2 * s;
    if (on_p - on_q).norm() > tolerance {
        return None;
    }

    Some(SegmentHit { point: on_p, t, s })
}

/// One crossing of two crack curves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackIntersection {
    pub point: Point3<f64>,
    /// Arc position on the curve the query was made from
    pub arc_position: f64,
    /// Arc position on the other curve
    pub other_arc_position: f64,
    pub segment: usize,
    pub other_segment: usize,
}

/// All crossings between two curves, ordered by increasing arc position on
/// the querying curve.
///
/// Coincident crossings (for instance where the other curve passes through
/// a vertex shared by two segments) are kept; deduplication is left to the
/// caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionResult {
    pub intersections: Vec<CrackIntersection>,
}

impl IntersectionResult {
    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intersections.len()
    }

    pub fn points(&self) -> Vec<Point3<f64>> {
        self.intersections.iter().map(|i| i.point).collect()
    }

    pub fn arc_positions(&self) -> Vec<f64> {
        self.intersections.iter().map(|i| i.arc_position).collect()
    }

    /// Split into parallel point and arc-position sequences
    pub fn into_parts(self) -> (Vec<Point3<f64>>, Vec<f64>) {
        self.intersections
            .into_iter()
            .map(|i| (i.point, i.arc_position))
            .unzip()
    }
}

/// Intersect `this` with `other`.
pub fn intersect_curves(
    this: &CurveGeometry,
    other: &CurveGeometry,
    tolerance: &Tolerance,
) -> IntersectionResult {
    let tol = tolerance.absolute();
    let this_index = ArcLengthIndex::new(this);
    let other_index = ArcLengthIndex::new(other);

    let mut intersections = Vec::new();
    for (i, (p0, p1)) in this.segments().enumerate() {
        for (j, (q0, q1)) in other.segments().enumerate() {
            if let Some(hit) = segment_intersection(&p0, &p1, &q0, &q1, tol) {
                intersections.push(CrackIntersection {
                    point: hit.point,
                    arc_position: this_index.arc_position_on_segment(i, &hit.point),
                    other_arc_position: other_index.segment_start(j) + hit.s * (q1 - q0).norm(),
                    segment: i,
                    other_segment: j,
                });
            }
        }
    }

    intersections.sort_by(|a, b| a.arc_position.total_cmp(&b.arc_position));

    IntersectionResult { intersections }
}
