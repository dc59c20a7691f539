//! Non-owning references into state owned by the host simulation.
//!
//! The XFEM manager, the domain and the integration points all live in
//! arenas of the host; a crack only stores their indices.

/// Index of the XFEM manager that owns an enrichment item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XfemManagerId(pub usize);

/// Index of the domain a crack belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomainId(pub usize);

/// Handle to a Gauss point owned by a finite element.
///
/// `element` is the global element number, `index` the integration point
/// number within that element's integration rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GaussPointHandle {
    pub element: usize,
    pub index: usize,
}

impl GaussPointHandle {
    pub fn new(element: usize, index: usize) -> Self {
        Self { element, index }
    }
}

/// Solution step handed to export hooks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeStep {
    /// Step counter
    pub number: usize,
    /// Target time at the end of the step
    pub time: f64,
}

impl TimeStep {
    pub fn new(number: usize, time: f64) -> Self {
        Self { number, time }
    }
}
