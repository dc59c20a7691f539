//! Enrichment-item capabilities.
//!
//! An enrichment item is described by what it can do rather than by a
//! class hierarchy: provide its geometry, size its DOF pool and hand data
//! to an export hook.

pub mod item;

pub use item::EnrichmentItem;

use crate::export::CrackExporter;
use crate::geometry::{CurveGeometry, Tolerance};
use crate::handles::TimeStep;

/// Access to the discontinuity geometry of an enrichment item
pub trait GeometryProvider {
    fn curve(&self) -> &CurveGeometry;

    fn tolerance(&self) -> Tolerance;
}

/// Number of extra degrees of freedom an enrichment item contributes
pub trait DofPoolSizing {
    fn dof_pool_size(&self) -> usize;
}

/// Export of per-step state to a visualization adapter
pub trait ExportHook {
    fn export(&self, exporter: &mut dyn CrackExporter, step: &TimeStep);
}
