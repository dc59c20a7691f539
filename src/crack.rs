//! Crack enrichment item.
//!
//! A `Crack` owns its path geometry and the registry of cohesive-zone
//! points placed along it. Everything else it refers to (XFEM manager,
//! domain, Gauss points) is owned by the host simulation.
//!
//! Arc positions of cohesive points are fixed when the point is appended.
//! Growing the crack at its start tip shifts the frame those positions were
//! measured in; they are only recomputed when `reindex_on_growth` is set or
//! `reindex_cohesive_zone` is called.

use nalgebra::Point3;

use crate::cohesive::{CohesiveZonePoint, CohesiveZoneRegistry};
use crate::config::{CrackRecord, CrackTip, CRACK_INPUT_RECORD_NAME};
use crate::enrichment::{DofPoolSizing, EnrichmentItem, ExportHook, GeometryProvider};
use crate::error::Result;
use crate::export::{CrackExportData, CrackExporter};
use crate::geometry::{intersect_curves, ArcLengthIndex, ArcProjection, CurveGeometry, IntersectionResult, Tolerance};
use crate::handles::{DomainId, GaussPointHandle, TimeStep, XfemManagerId};

/// Branch functions of the asymptotic near-tip displacement field
const BRANCH_FUNCTIONS_PER_TIP: usize = 4;

#[derive(Debug, Clone)]
pub struct Crack {
    item: EnrichmentItem,
    curve: CurveGeometry,
    tolerance: Tolerance,
    enriched_tips: Vec<CrackTip>,
    reindex_on_growth: bool,
    cohesive_zone: CohesiveZoneRegistry,
}

impl Crack {
    pub const CLASS_NAME: &'static str = "Crack";

    /// Empty planar crack; geometry is supplied by `initialize_from` or the
    /// growth methods.
    pub fn new(index: usize, xfem_manager: XfemManagerId, domain: DomainId) -> Self {
        Self {
            item: EnrichmentItem::new(index, xfem_manager, domain),
            curve: CurveGeometry::new(2),
            tolerance: Tolerance::default(),
            enriched_tips: Vec::new(),
            reindex_on_growth: false,
            cohesive_zone: CohesiveZoneRegistry::new(),
        }
    }

    pub fn from_record(
        index: usize,
        xfem_manager: XfemManagerId,
        domain: DomainId,
        record: &CrackRecord,
    ) -> Result<Self> {
        let mut crack = Self::new(index, xfem_manager, domain);
        crack.initialize_from(record)?;
        Ok(crack)
    }

    pub fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    pub fn input_record_name(&self) -> &'static str {
        CRACK_INPUT_RECORD_NAME
    }

    /// Set geometry and enrichment parameters from an input record.
    ///
    /// The record is validated completely before anything is assigned, so
    /// on error the crack is left unchanged.
    pub fn initialize_from(&mut self, record: &CrackRecord) -> Result<()> {
        let curve = record.seed_curve()?;
        let tolerance = record.tolerance()?;
        record.validate_enrichment()?;

        self.curve = curve;
        self.tolerance = tolerance;
        self.item.enriched_dofs = record.enriched_dofs.clone();
        self.item.enrichment_functions = record.enrichment_functions;
        self.enriched_tips = record.enriched_tips.clone();
        self.reindex_on_growth = record.reindex_on_growth;

        log::debug!(
            "crack {} initialized: {} points, length {:.6e}, tolerance {:.3e}",
            self.item.index,
            self.curve.num_points(),
            self.curve.compute_length(),
            self.tolerance.absolute()
        );
        Ok(())
    }

    pub fn index(&self) -> usize {
        self.item.index
    }

    pub fn enrichment_item(&self) -> &EnrichmentItem {
        &self.item
    }

    pub fn enriched_tips(&self) -> &[CrackTip] {
        &self.enriched_tips
    }

    pub fn set_reindex_on_growth(&mut self, enabled: bool) {
        self.reindex_on_growth = enabled;
    }

    pub fn set_tolerance(&mut self, tolerance: Tolerance) {
        self.tolerance = tolerance;
    }

    // ---- geometry updates ----

    /// Extend the crack at its end tip
    pub fn grow_end(&mut self, tip: Point3<f64>) {
        if self.curve.push_tip(tip) {
            self.after_growth();
        }
    }

    /// Extend the crack at its start tip
    pub fn grow_start(&mut self, tip: Point3<f64>) {
        if self.curve.prepend_tip(tip) {
            self.after_growth();
        }
    }

    /// Replace the crack path with an updated one
    pub fn set_geometry(&mut self, points: impl IntoIterator<Item = Point3<f64>>) {
        self.curve.replace_points(points);
        self.after_growth();
    }

    fn after_growth(&mut self) {
        if self.reindex_on_growth {
            self.reindex_cohesive_zone();
        }
    }

    /// Recompute the arc positions of all registered cohesive points
    /// against the current geometry.
    pub fn reindex_cohesive_zone(&mut self) {
        let index = ArcLengthIndex::new(&self.curve);
        let tolerance = self.tolerance;
        self.cohesive_zone
            .reposition(|cz| index.arc_position(&cz.coords, &tolerance));
        log::debug!(
            "crack {}: re-indexed {} cohesive points",
            self.item.index,
            self.cohesive_zone.len()
        );
    }

    // ---- cohesive zone ----

    /// Register a cohesive-zone Gauss point located at `coords`.
    ///
    /// The arc position is taken against the current geometry. Points off
    /// the crack are assigned to the nearest segment; the returned
    /// projection tells the caller whether that happened.
    pub fn append_cohesive_zone_gauss_point(
        &mut self,
        gauss_point: GaussPointHandle,
        coords: Point3<f64>,
    ) -> ArcProjection {
        let projection = ArcLengthIndex::new(&self.curve).project(&coords, &self.tolerance);
        self.cohesive_zone.append(
            CohesiveZonePoint { gauss_point, coords },
            projection.arc_position,
        );
        projection
    }

    pub fn cohesive_zone(&self) -> &CohesiveZoneRegistry {
        &self.cohesive_zone
    }

    pub fn cohesive_zone_gauss_points(&self) -> Vec<GaussPointHandle> {
        self.cohesive_zone.gauss_points()
    }

    pub fn cohesive_zone_arc_positions(&self) -> &[f64] {
        self.cohesive_zone.arc_positions()
    }

    // ---- geometry queries ----

    /// Crossings with `other`, ordered along this crack
    pub fn compute_crack_intersection_points(&self, other: &Crack) -> IntersectionResult {
        intersect_curves(&self.curve, &other.curve, &self.tolerance.looser(other.tolerance))
    }

    /// Arc positions of points on (or near) this crack
    pub fn compute_arc_points(&self, points: &[Point3<f64>]) -> Vec<f64> {
        ArcLengthIndex::new(&self.curve).arc_positions(points, &self.tolerance)
    }

    pub fn compute_length(&self) -> f64 {
        self.curve.compute_length()
    }

    pub fn is_closed(&self) -> bool {
        self.curve.is_closed(self.tolerance.absolute())
    }

    pub fn call_gnuplot_export_module(&self, exporter: &mut dyn CrackExporter, step: &TimeStep) {
        self.export(exporter, step);
    }
}

impl GeometryProvider for Crack {
    fn curve(&self) -> &CurveGeometry {
        &self.curve
    }

    fn tolerance(&self) -> Tolerance {
        self.tolerance
    }
}

impl DofPoolSizing for Crack {
    /// Base enrichment DOFs plus the branch-function DOFs of every
    /// tip-enriched tip.
    fn dof_pool_size(&self) -> usize {
        let tip_dofs = self.item.enriched_dofs.len() * BRANCH_FUNCTIONS_PER_TIP;
        self.item.dof_pool_size() + tip_dofs * self.enriched_tips.len()
    }
}

impl ExportHook for Crack {
    fn export(&self, exporter: &mut dyn CrackExporter, step: &TimeStep) {
        let data = CrackExportData {
            crack_index: self.item.index,
            dimension: self.curve.dimension(),
            points: self.curve.points(),
            length: self.curve.compute_length(),
            cohesive_points: self.cohesive_zone.points(),
            cohesive_arc_positions: self.cohesive_zone.arc_positions(),
        };
        exporter.output_crack(&data, step);
    }
}
