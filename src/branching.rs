//! Domain-wide crack intersection sweep.
//!
//! Every unordered pair of cracks is intersected independently. Cracks are
//! only read, so pairs are evaluated in parallel.

use rayon::prelude::*;

use crate::crack::Crack;
use crate::geometry::IntersectionResult;

/// Crossings between two cracks of a domain.
///
/// `first` and `second` are positions in the slice passed to
/// `intersect_all`; arc positions in `result` are measured along `first`.
#[derive(Debug, Clone)]
pub struct CrackPairIntersection {
    pub first: usize,
    pub second: usize,
    pub result: IntersectionResult,
}

/// Intersect every pair of cracks and keep the pairs that cross.
///
/// Output is ordered by `(first, second)`.
pub fn intersect_all(cracks: &[Crack]) -> Vec<CrackPairIntersection> {
    let pairs: Vec<(usize, usize)> = (0..cracks.len())
        .flat_map(|i| (i + 1..cracks.len()).map(move |j| (i, j)))
        .collect();

    pairs
        .par_iter()
        .filter_map(|&(i, j)| {
            let result = cracks[i].compute_crack_intersection_points(&cracks[j]);
            if result.is_empty() {
                None
            } else {
                Some(CrackPairIntersection { first: i, second: j, result })
            }
        })
        .collect()
}
