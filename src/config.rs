//! Input records for cracks.
//!
//! Cracks are read from TOML files holding one `[[crack]]` table per crack:
//!
//! ```toml
//! [[crack]]
//! points = [[0.0, 0.0], [2.0, 0.0]]
//! element_size = 0.1
//! enriched_dofs = ["u", "v"]
//! enriched_tips = ["end"]
//! ```

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CrackError, Result};
use crate::geometry::{CurveGeometry, Tolerance};

/// Keyword under which crack records appear in the input
pub const CRACK_INPUT_RECORD_NAME: &str = "crack";

/// Displacement component enriched by a crack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DofId {
    U,
    V,
    W,
}

/// Crack tip selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrackTip {
    Start,
    End,
}

/// One `crack` record as read from input
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CrackRecord {
    /// Seed polyline, 2 or 3 coordinates per point (required)
    #[serde(default)]
    pub points: Option<Vec<Vec<f64>>>,
    /// Characteristic element size of the mesh the crack cuts
    #[serde(default)]
    pub element_size: Option<f64>,
    /// Geometric epsilon relative to `element_size`
    #[serde(default)]
    pub relative_tolerance: Option<f64>,
    #[serde(default = "default_enriched_dofs")]
    pub enriched_dofs: Vec<DofId>,
    /// Enrichment functions per enriched DOF
    #[serde(default = "default_enrichment_functions")]
    pub enrichment_functions: usize,
    /// Tips carrying branch-function enrichment
    #[serde(default)]
    pub enriched_tips: Vec<CrackTip>,
    /// Recompute cohesive arc positions after every growth step
    #[serde(default)]
    pub reindex_on_growth: bool,
}

fn default_enriched_dofs() -> Vec<DofId> { vec![DofId::U, DofId::V] }
fn default_enrichment_functions() -> usize { 1 }

impl CrackRecord {
    /// Record seeded with a planar polyline and default parameters
    pub fn with_points_xy(points: &[[f64; 2]]) -> Self {
        Self {
            points: Some(points.iter().map(|p| p.to_vec()).collect()),
            enriched_dofs: default_enriched_dofs(),
            enrichment_functions: default_enrichment_functions(),
            ..Self::default()
        }
    }

    /// Validate the seed points and build the initial curve
    pub fn seed_curve(&self) -> Result<CurveGeometry> {
        let raw = self
            .points
            .as_ref()
            .ok_or_else(|| CrackError::configuration("points", "missing"))?;
        if raw.is_empty() {
            return Err(CrackError::configuration("points", "at least one point is required"));
        }

        let dimension = raw[0].len();
        if dimension != 2 && dimension != 3 {
            return Err(CrackError::configuration(
                "points",
                format!("points need 2 or 3 coordinates, got {}", dimension),
            ));
        }

        let mut points = Vec::with_capacity(raw.len());
        for (i, coords) in raw.iter().enumerate() {
            if coords.len() != dimension {
                return Err(CrackError::configuration(
                    "points",
                    format!("point {} has {} coordinates, expected {}", i, coords.len(), dimension),
                ));
            }
            if coords.iter().any(|c| !c.is_finite()) {
                return Err(CrackError::configuration(
                    "points",
                    format!("point {} has a non-finite coordinate", i),
                ));
            }
            let z = if dimension == 3 { coords[2] } else { 0.0 };
            points.push(Point3::new(coords[0], coords[1], z));
        }

        let curve = CurveGeometry::from_points(points, dimension);
        if curve.num_points() < raw.len() {
            log::debug!("dropped {} repeated seed points", raw.len() - curve.num_points());
        }
        Ok(curve)
    }

    /// Validate and assemble the geometric tolerance
    pub fn tolerance(&self) -> Result<Tolerance> {
        let element_size = self.element_size.unwrap_or(1.0);
        if !(element_size.is_finite() && element_size > 0.0) {
            return Err(CrackError::configuration(
                "element_size",
                format!("must be positive, got {}", element_size),
            ));
        }
        let relative = self.relative_tolerance.unwrap_or(Tolerance::DEFAULT_RELATIVE);
        if !(relative.is_finite() && relative > 0.0) {
            return Err(CrackError::configuration(
                "relative_tolerance",
                format!("must be positive, got {}", relative),
            ));
        }
        Ok(Tolerance::new(relative, element_size))
    }

    /// Check the enrichment parameters
    pub fn validate_enrichment(&self) -> Result<()> {
        if self.enrichment_functions == 0 {
            return Err(CrackError::configuration("enrichment_functions", "must be at least 1"));
        }
        for (i, dof) in self.enriched_dofs.iter().enumerate() {
            if self.enriched_dofs[..i].contains(dof) {
                return Err(CrackError::configuration(
                    "enriched_dofs",
                    format!("{:?} listed twice", dof),
                ));
            }
        }
        if self.enriched_tips.len() == 2 && self.enriched_tips[0] == self.enriched_tips[1] {
            return Err(CrackError::configuration("enriched_tips", "tip listed twice"));
        }
        if self.enriched_tips.len() > 2 {
            return Err(CrackError::configuration("enriched_tips", "a crack has at most two tips"));
        }
        Ok(())
    }
}

/// Input file holding any number of `[[crack]]` records
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CrackInputFile {
    #[serde(rename = "crack", default)]
    pub cracks: Vec<CrackRecord>,
}

impl CrackInputFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let input: CrackInputFile = toml::from_str(contents)?;
        if input.cracks.is_empty() {
            return Err(CrackError::configuration(
                CRACK_INPUT_RECORD_NAME,
                "no crack records found",
            ));
        }
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let input = CrackInputFile::from_toml_str(
            r#"
            [[crack]]
            points = [[0.0, 0.0], [2.0, 0.0]]
            element_size = 0.5
            enriched_tips = ["end"]

            [[crack]]
            points = [[1.0, -1.0, 0.0], [1.0, 1.0, 0.0]]
            enriched_dofs = ["u", "v", "w"]
            enrichment_functions = 2
            reindex_on_growth = true
            "#,
        )
        .unwrap();

        assert_eq!(input.cracks.len(), 2);
        let first = &input.cracks[0];
        assert_eq!(first.enriched_dofs, vec![DofId::U, DofId::V]);
        assert_eq!(first.enrichment_functions, 1);
        assert_eq!(first.enriched_tips, vec![CrackTip::End]);
        assert_eq!(first.tolerance().unwrap().element_size, 0.5);
        assert_eq!(first.seed_curve().unwrap().dimension(), 2);

        let second = &input.cracks[1];
        assert!(second.reindex_on_growth);
        assert_eq!(second.seed_curve().unwrap().dimension(), 3);
    }

    #[test]
    fn test_missing_points_is_configuration_error() {
        let record = CrackRecord::default();
        match record.seed_curve() {
            Err(CrackError::Configuration { field, .. }) => assert_eq!(field, "points"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_points_rejected() {
        let mut record = CrackRecord::with_points_xy(&[[0.0, 0.0]]);
        record.points = Some(vec![vec![0.0, 0.0], vec![1.0, 0.0, 0.0]]);
        assert!(record.seed_curve().is_err());

        record.points = Some(vec![vec![0.0]]);
        assert!(record.seed_curve().is_err());

        record.points = Some(vec![vec![0.0, f64::NAN]]);
        assert!(record.seed_curve().is_err());

        record.points = Some(Vec::new());
        assert!(record.seed_curve().is_err());
    }

    #[test]
    fn test_bad_tolerance_rejected() {
        let mut record = CrackRecord::with_points_xy(&[[0.0, 0.0], [1.0, 0.0]]);
        record.element_size = Some(0.0);
        assert!(record.tolerance().is_err());

        record.element_size = Some(1.0);
        record.relative_tolerance = Some(-1e-3);
        assert!(record.tolerance().is_err());
    }

    #[test]
    fn test_bad_enrichment_rejected() {
        let mut record = CrackRecord::with_points_xy(&[[0.0, 0.0], [1.0, 0.0]]);
        assert!(record.validate_enrichment().is_ok());

        record.enriched_dofs = vec![DofId::U, DofId::U];
        assert!(record.validate_enrichment().is_err());

        record.enriched_dofs = vec![DofId::U];
        record.enriched_tips = vec![CrackTip::Start, CrackTip::Start];
        assert!(record.validate_enrichment().is_err());

        record.enriched_tips = vec![CrackTip::Start];
        record.enrichment_functions = 0;
        assert!(record.validate_enrichment().is_err());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(CrackInputFile::from_toml_str("").is_err());
    }

    #[test]
    fn test_malformed_field_is_configuration_error() {
        // Wrong value type and unknown enum value fail the same way as a
        // missing field
        for input in ["[[crack]]\npoints = 3", "[[crack]]\npoints = [[0.0, 0.0]]\nenriched_dofs = [\"x\"]"] {
            match CrackInputFile::from_toml_str(input) {
                Err(CrackError::Configuration { field, .. }) => assert_eq!(field, CRACK_INPUT_RECORD_NAME),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }
}
