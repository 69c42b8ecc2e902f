//! Step timing: serial vs rayon read pass across grid sizes

use std::time::Instant;
use demo_games::Grid;

const PROBABILITY: f64 = 0.15;
const SEED: u64 = 100;

fn seeded(size: usize) -> Grid {
    match Grid::seeded(size, size, PROBABILITY, SEED) {
        Ok(grid) => grid,
        Err(e) => panic!("benchmark grid {size}x{size}: {e}"),
    }
}

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    let parallel_ms = benchmark_parallel(2000, iterations);
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
