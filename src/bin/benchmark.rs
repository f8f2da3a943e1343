//! Step throughput benchmark across grid sizes, rules and execution modes

use std::time::Instant;

use cellular_automata::domain::{ExecutionMode, Grid, Rule, Stepper};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark_step(size: usize, rule: Rule, mode: ExecutionMode, iterations: u32) -> f64 {
    let mut grid = Grid::new(size, size);
    grid.randomize(0.3, &mut StdRng::seed_from_u64(2024));
    let mut stepper = Stepper::new(rule).with_mode(mode);

    let start = Instant::now();
    for _ in 0..iterations {
        stepper.step(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Cellular Automata Step Benchmark ===\n");

    let sizes = [50, 100, 200, 400, 800];
    let iterations = 10;

    println!("{:>10} {:>14} {:>12} {:>12} {:>10}", "Size", "Rule", "Serial", "Parallel", "Speedup");
    println!("{:-<62}", "");

    for size in sizes {
        for rule in [Rule::GameOfLife, Rule::BriansBrain] {
            let serial_ms = benchmark_step(size, rule, ExecutionMode::Serial, iterations);
            let parallel_ms = benchmark_step(size, rule, ExecutionMode::Parallel, iterations);

            println!(
                "{:>10} {:>14} {:>12.2} {:>12.2} {:>9.1}x",
                format!("{}x{}", size, size),
                rule.name(),
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms
            );
        }
    }

    println!("\n=== Throughput at 800x800 ===\n");

    let cells = 800 * 800;
    for mode in ExecutionMode::all() {
        let ms = benchmark_step(800, Rule::GameOfLife, mode, iterations);
        println!(
            "{:<10} {:.2} ms/gen, {:.1}M cells/sec",
            mode.name(),
            ms,
            (cells as f64) / (ms / 1000.0) / 1_000_000.0
        );
    }
}
