//! Crack path geometry: the polyline, its arc-length parameterization and
//! curve/curve intersection.

pub mod tolerance;
pub mod curve;
pub mod arc_length;
pub mod intersection;

pub use tolerance::Tolerance;
pub use curve::CurveGeometry;
pub use arc_length::{ArcLengthIndex, ArcProjection, project_onto_segment};
pub use intersection::{CrackIntersection, IntersectionResult, SegmentHit, intersect_curves, segment_intersection};
