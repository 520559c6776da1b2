//! Algorithm enum for selecting the step implementation.
//!
//! Both variants compute the same next generation; they only differ in
//! how neighbor counting is scheduled.

use super::{LivingSet, step};

/// Available evolution algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Hash-map neighbor counting on the calling thread
    #[default]
    Sparse,
    /// Neighbor counting split across rayon's thread pool
    SparseParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sparse, Algorithm::SparseParallel]
    }

    /// Display name for the HUD
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Sparse",
            Algorithm::SparseParallel => "Sparse+Par",
        }
    }

    /// Compute the next generation with this algorithm
    pub fn step(&self, living: &LivingSet) -> LivingSet {
        match self {
            Algorithm::Sparse => step::step(living),
            Algorithm::SparseParallel => step::step_parallel(living),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Sparse);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_all_algorithms_agree_on_glider() {
        let glider: LivingSet = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
            .into_iter()
            .map(Cell::from)
            .collect();
        let results: Vec<_> = Algorithm::all().iter().map(|a| a.step(&glider)).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }
}
