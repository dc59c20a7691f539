use crate::config::DofId;
use crate::handles::{DomainId, XfemManagerId};

use super::DofPoolSizing;

/// Data shared by every enrichment item
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentItem {
    /// Enrichment item number within the XFEM manager
    pub index: usize,
    pub xfem_manager: XfemManagerId,
    pub domain: DomainId,
    /// Displacement components that receive enriched DOFs
    pub enriched_dofs: Vec<DofId>,
    /// Enrichment functions per enriched component
    pub enrichment_functions: usize,
}

impl EnrichmentItem {
    pub fn new(index: usize, xfem_manager: XfemManagerId, domain: DomainId) -> Self {
        Self {
            index,
            xfem_manager,
            domain,
            enriched_dofs: vec![DofId::U, DofId::V],
            enrichment_functions: 1,
        }
    }
}

impl DofPoolSizing for EnrichmentItem {
    /// One DOF per enriched component and enrichment function
    fn dof_pool_size(&self) -> usize {
        self.enriched_dofs.len() * self.enrichment_functions
    }
}
