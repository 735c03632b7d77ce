use std::time::Instant;

use anyhow::Context;
use pointgen::{load_points, DATA_FILE};

fn main() -> anyhow::Result<()> {
    let start_time = Instant::now();
    let points =
        load_points(DATA_FILE).with_context(|| format!("failed to read {DATA_FILE}"))?;
    let mid_time = Instant::now();

    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut max_depth = 0;
    let mut sequential = true;

    for (i, p) in points.iter().enumerate() {
        min = (min.0.min(p.x), min.1.min(p.y));
        max = (max.0.max(p.x), max.1.max(p.y));
        max_depth = max_depth.max(p.nesting_depth());
        sequential &= p.id == i;
    }

    let end_time = Instant::now();

    println!("Points: {}", points.len());
    if !points.is_empty() {
        println!("x: [{}, {}]", min.0, max.0);
        println!("y: [{}, {}]", min.1, max.1);
    }
    println!("Sequential ids: {sequential}");
    println!("Max nesting depth: {max_depth}");
    println!(
        "Load = {} seconds",
        (mid_time - start_time).as_millis() as f32 / 1000.0
    );
    println!(
        "Scan = {} seconds",
        (end_time - mid_time).as_millis() as f32 / 1000.0
    );

    Ok(())
}
