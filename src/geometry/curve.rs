use nalgebra::Point3;

/// Segments shorter than this are treated as repeated points
const MIN_SEGMENT_LENGTH: f64 = 1e-14;

/// Piecewise-linear crack path.
///
/// Points are stored in traversal order from the start tip to the end tip.
/// Two-dimensional input is embedded in the z = 0 plane; `dimension`
/// remembers which form the curve was given in. A planar curve becomes
/// spatial as soon as it receives a point off the z = 0 plane.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveGeometry {
    points: Vec<Point3<f64>>,
    dimension: usize,
}

impl CurveGeometry {
    pub fn new(dimension: usize) -> Self {
        debug_assert!(dimension == 2 || dimension == 3);
        Self {
            points: Vec::new(),
            dimension,
        }
    }

    /// Build a curve from an ordered point sequence.
    ///
    /// Consecutive repeated points are dropped.
    pub fn from_points(points: impl IntoIterator<Item = Point3<f64>>, dimension: usize) -> Self {
        let mut curve = Self::new(dimension);
        for p in points {
            curve.push_tip(p);
        }
        curve
    }

    /// Convenience constructor for planar curves
    pub fn from_xy(coords: &[[f64; 2]]) -> Self {
        Self::from_points(coords.iter().map(|c| Point3::new(c[0], c[1], 0.0)), 2)
    }

    /// Extend the curve at its end tip.
    ///
    /// Returns `false` if the point repeats the current end tip and was
    /// dropped.
    pub fn push_tip(&mut self, p: Point3<f64>) -> bool {
        if let Some(last) = self.points.last() {
            if (p - last).norm() < MIN_SEGMENT_LENGTH {
                log::debug!("dropping repeated end-tip point {:?}", p);
                return false;
            }
        }
        self.lift_for(&p);
        self.points.push(p);
        true
    }

    /// Extend the curve at its start tip. All arc positions measured from
    /// the old start shift by the length of the new segment.
    pub fn prepend_tip(&mut self, p: Point3<f64>) -> bool {
        if let Some(first) = self.points.first() {
            if (p - first).norm() < MIN_SEGMENT_LENGTH {
                log::debug!("dropping repeated start-tip point {:?}", p);
                return false;
            }
        }
        self.lift_for(&p);
        self.points.insert(0, p);
        true
    }

    /// Replace the whole point sequence.
    ///
    /// A planar curve becomes spatial if any new point leaves the z = 0
    /// plane; a spatial curve stays spatial.
    pub fn replace_points(&mut self, points: impl IntoIterator<Item = Point3<f64>>) {
        self.points.clear();
        for p in points {
            self.push_tip(p);
        }
    }

    fn lift_for(&mut self, p: &Point3<f64>) {
        if self.dimension == 2 && p.z != 0.0 {
            log::debug!("point {:?} leaves the z = 0 plane; curve becomes spatial", p);
            self.dimension = 3;
        }
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Endpoints of segment `i`
    pub fn segment(&self, i: usize) -> Option<(Point3<f64>, Point3<f64>)> {
        if i + 1 < self.points.len() {
            Some((self.points[i], self.points[i + 1]))
        } else {
            None
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Sum of segment lengths; zero for curves with fewer than two points
    pub fn compute_length(&self) -> f64 {
        self.segments().map(|(a, b)| (b - a).norm()).sum()
    }

    /// True once the two tips coincide (coalescence closed the curve)
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 2 => (last - first).norm() <= tolerance,
            _ => false,
        }
    }
}
