//! Performance benchmark comparing the step algorithms and pattern resolution

use std::path::Path;
use std::time::Instant;

use pattern_life::application::{Compositor, MemorySource, DEFAULT_MAX_DEPTH};
use pattern_life::domain::{Algorithm, Cell, LivingSet, TransformSpec};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_soup(side: i64, seed: u64) -> LivingSet {
    let mut rng = StdRng::seed_from_u64(seed);
    (-side / 2..side / 2)
        .flat_map(|y| (-side / 2..side / 2).map(move |x| Cell::new(x, y)))
        .filter(|_| rng.random_bool(0.3))
        .collect()
}

/// Milliseconds per generation
fn benchmark_steps(algorithm: Algorithm, start: &LivingSet, generations: u32) -> f64 {
    let begin = Instant::now();
    let mut living = start.clone();
    for _ in 0..generations {
        living = algorithm.step(&living);
    }
    begin.elapsed().as_secs_f64() * 1000.0 / generations as f64
}

fn main() {
    println!("=== Step Benchmark (random soup, 30% density) ===\n");
    println!("{:>10} {:>10} {:>12} {:>12} {:>10}", "Side", "Cells", "Sparse", "Sparse+Par", "Speedup");
    println!("{:-<58}", "");

    let generations = 20;
    for side in [32, 64, 128, 256, 512] {
        let soup = random_soup(side, side as u64);
        let serial_ms = benchmark_steps(Algorithm::Sparse, &soup, generations);
        let parallel_ms = benchmark_steps(Algorithm::SparseParallel, &soup, generations);
        println!(
            "{:>10} {:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", side, side),
            soup.len(),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Composite resolution ===\n");

    let mut source = MemorySource::with_presets();
    let row: String = (0..8)
        .map(|i| format!("{} 0 gosper_glider_gun.rle {} False {} {}\n", i * 50, if i % 2 == 1 { "True" } else { "False" }, i % 4, i * 15))
        .collect();
    source.insert("gun_row.cpx", row);
    let grid: String = (0..8).map(|j| format!("0 {} gun_row.cpx False False 0 0\n", -60 * j)).collect();
    source.insert("gun_grid.cpx", grid);

    let compositor = Compositor::new(source, DEFAULT_MAX_DEPTH);
    let begin = Instant::now();
    match compositor.place(Cell::default(), Path::new("gun_grid.cpx"), TransformSpec::IDENTITY) {
        Ok(diff) => println!(
            "64 guns: {} set, {} cleared in {:.2} ms",
            diff.set_cells.len(),
            diff.clear_cells.len(),
            begin.elapsed().as_secs_f64() * 1000.0
        ),
        Err(e) => println!("resolution failed: {}", e),
    }
}
