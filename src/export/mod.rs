//! Export of crack state for visualization.
//!
//! The crack only hands borrowed data to a `CrackExporter`; formatting and
//! file handling belong to the exporter.

pub mod gnuplot;

pub use gnuplot::GnuplotExportModule;

use nalgebra::Point3;

use crate::cohesive::CohesiveZonePoint;
use crate::handles::TimeStep;

/// Snapshot of one crack handed to an exporter
#[derive(Debug, Clone, Copy)]
pub struct CrackExportData<'a> {
    pub crack_index: usize,
    /// 2 for planar cracks, 3 otherwise
    pub dimension: usize,
    pub points: &'a [Point3<f64>],
    pub length: f64,
    pub cohesive_points: &'a [CohesiveZonePoint],
    pub cohesive_arc_positions: &'a [f64],
}

/// Visualization adapter receiving crack data once per time step
pub trait CrackExporter {
    fn output_crack(&mut self, data: &CrackExportData<'_>, step: &TimeStep);
}
