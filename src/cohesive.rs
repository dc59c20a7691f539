use nalgebra::Point3;

use crate::handles::GaussPointHandle;

/// Cohesive-zone integration point registered on a crack.
///
/// The Gauss point itself belongs to an element; the crack keeps a handle
/// and the global coordinates the point had when it was registered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohesiveZonePoint {
    pub gauss_point: GaussPointHandle,
    pub coords: Point3<f64>,
}

/// Append-only registry of cohesive-zone points.
///
/// Points and arc positions are stored as two index-aligned sequences.
/// Entries are never removed, so index `i` keeps referring to the same
/// cohesive point for the lifetime of the crack.
#[derive(Debug, Clone, Default)]
pub struct CohesiveZoneRegistry {
    points: Vec<CohesiveZonePoint>,
    arc_positions: Vec<f64>,
}

impl CohesiveZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a point at the end of both sequences. Returns its index.
    pub fn append(&mut self, point: CohesiveZonePoint, arc_position: f64) -> usize {
        let idx = self.points.len();
        self.points.push(point);
        self.arc_positions.push(arc_position);
        debug_assert_eq!(self.points.len(), self.arc_positions.len());
        idx
    }

    pub fn points(&self) -> &[CohesiveZonePoint] {
        &self.points
    }

    pub fn arc_positions(&self) -> &[f64] {
        &self.arc_positions
    }

    pub fn gauss_points(&self) -> Vec<GaussPointHandle> {
        self.points.iter().map(|p| p.gauss_point).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CohesiveZonePoint, f64)> + '_ {
        self.points.iter().zip(self.arc_positions.iter().copied())
    }

    /// Recompute every stored arc position in place. Order and count are
    /// preserved.
    pub(crate) fn reposition<F>(&mut self, mut arc_of: F)
    where
        F: FnMut(&CohesiveZonePoint) -> f64,
    {
        for (point, arc) in self.points.iter().zip(self.arc_positions.iter_mut()) {
            *arc = arc_of(point);
        }
    }
}
