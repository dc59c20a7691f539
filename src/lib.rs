pub mod error;
pub mod handles;
pub mod geometry;
pub mod cohesive;
pub mod config;
pub mod enrichment;
pub mod export;
pub mod crack;
pub mod branching;

pub use error::{CrackError, Result};
pub use handles::{DomainId, GaussPointHandle, TimeStep, XfemManagerId};
pub use geometry::{ArcLengthIndex, ArcProjection, CrackIntersection, CurveGeometry, IntersectionResult, Tolerance, intersect_curves, segment_intersection};
pub use cohesive::{CohesiveZonePoint, CohesiveZoneRegistry};
pub use config::{CrackInputFile, CrackRecord, CrackTip, DofId, CRACK_INPUT_RECORD_NAME};
pub use enrichment::{DofPoolSizing, EnrichmentItem, ExportHook, GeometryProvider};
pub use export::{CrackExportData, CrackExporter, GnuplotExportModule};
pub use crack::Crack;
pub use branching::{CrackPairIntersection, intersect_all};
