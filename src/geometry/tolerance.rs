use serde::{Deserialize, Serialize};

/// Geometric tolerance expressed relative to the mesh element size.
///
/// The absolute band used for "on segment" tests is
/// `relative * element_size`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Tolerance {
    pub relative: f64,
    pub element_size: f64,
}

impl Tolerance {
    pub const DEFAULT_RELATIVE: f64 = 1e-6;

    pub fn new(relative: f64, element_size: f64) -> Self {
        Self { relative, element_size }
    }

    /// Default relative epsilon on a mesh of the given element size
    pub fn for_element_size(element_size: f64) -> Self {
        Self::new(Self::DEFAULT_RELATIVE, element_size)
    }

    pub fn absolute(&self) -> f64 {
        self.relative * self.element_size
    }

    /// The looser of two tolerances, used when two cracks meet
    pub fn looser(self, other: Tolerance) -> Tolerance {
        if other.absolute() > self.absolute() {
            other
        } else {
            self
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::for_element_size(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_scales_with_element_size() {
        let tol = Tolerance::new(1e-3, 0.5);
        assert_eq!(tol.absolute(), 5e-4);
    }

    #[test]
    fn test_looser_picks_larger_band() {
        let fine = Tolerance::new(1e-6, 0.1);
        let coarse = Tolerance::new(1e-6, 10.0);
        assert_eq!(fine.looser(coarse), coarse);
        assert_eq!(coarse.looser(fine), coarse);
    }
}
