//! One Game of Life generation over a sparse living set.
//!
//! Only cells adjacent to a live cell are ever counted, so the grid can be
//! unbounded: a cell with zero live neighbors is dead and never enumerated.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use super::{Cell, CellState};

/// The set of currently alive cells
pub type LivingSet = HashSet<Cell>;

/// Count live neighbors for every cell touching the living set
fn neighbor_counts(living: &LivingSet) -> HashMap<Cell, u8> {
    let mut counts = HashMap::with_capacity(living.len() * 8);
    for cell in living {
        for n in cell.neighbors() {
            *counts.entry(n).or_insert(0u8) += 1;
        }
    }
    counts
}

/// Parallel neighbor counting: per-thread maps merged pairwise
fn neighbor_counts_parallel(living: &LivingSet) -> HashMap<Cell, u8> {
    living
        .par_iter()
        .fold(HashMap::new, |mut counts: HashMap<Cell, u8>, cell| {
            for n in cell.neighbors() {
                *counts.entry(n).or_insert(0) += 1;
            }
            counts
        })
        .reduce(HashMap::new, |a, b| {
            // merge the smaller map into the larger one
            let (mut big, small) = if a.len() >= b.len() { (a, b) } else { (b, a) };
            for (cell, n) in small {
                *big.entry(cell).or_insert(0) += n;
            }
            big
        })
}

fn survivors(living: &LivingSet, counts: HashMap<Cell, u8>) -> LivingSet {
    counts
        .into_iter()
        .filter(|&(cell, n)| {
            CellState::from_alive(living.contains(&cell))
                .evolve(n)
                .is_alive()
        })
        .map(|(cell, _)| cell)
        .collect()
}

/// Pure functional evolution - returns the next generation (serial)
pub fn step(living: &LivingSet) -> LivingSet {
    survivors(living, neighbor_counts(living))
}

/// Same result as [`step`], neighbor counting spread over rayon's pool
pub fn step_parallel(living: &LivingSet) -> LivingSet {
    survivors(living, neighbor_counts_parallel(living))
}

/// Advance `generations` times
pub fn step_n(living: &LivingSet, generations: u32) -> LivingSet {
    (0..generations).fold(living.clone(), |current, _| step(&current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn set(cells: &[(i64, i64)]) -> LivingSet {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_empty_stays_empty() {
        assert!(step(&LivingSet::new()).is_empty());
    }

    #[test]
    fn test_block_still_life() {
        let block = set(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = set(&[(0, 0), (1, 0), (2, 0)]);
        let vertical = step(&horizontal);
        assert_eq!(vertical, set(&[(1, -1), (1, 0), (1, 1)]));
        assert_eq!(step(&vertical), horizontal);
    }

    #[test]
    fn test_glider_translates() {
        let glider = set(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let moved: LivingSet = glider.iter().map(|c| c.offset(1, -1)).collect();
        assert_eq!(step_n(&glider, 4), moved);
    }

    #[test]
    fn test_rule_law_on_random_soup() {
        let mut rng = StdRng::seed_from_u64(7);
        let soup: LivingSet = (0..200)
            .map(|_| Cell::new(rng.random_range(-10..10), rng.random_range(-10..10)))
            .collect();
        let next = step(&soup);

        for y in -12..12 {
            for x in -12..12 {
                let c = Cell::new(x, y);
                let n = c.neighbors().filter(|m| soup.contains(m)).count();
                let expected = n == 3 || (n == 2 && soup.contains(&c));
                assert_eq!(next.contains(&c), expected, "Mismatch at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(42);
        let soup: LivingSet = (0..500)
            .map(|_| Cell::new(rng.random_range(-30..30), rng.random_range(-30..30)))
            .collect();
        assert_eq!(step(&soup), step_parallel(&soup));
    }
}
