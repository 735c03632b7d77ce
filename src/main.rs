use std::time::Instant;

use anyhow::Context;
use pointgen::{save_points, GenerateConfig, DATA_FILE};

fn main() -> anyhow::Result<()> {
    let config = GenerateConfig::default();

    let start_time = Instant::now();
    let points = config.generate(&mut rand::thread_rng());
    let mid_time = Instant::now();

    save_points(DATA_FILE, &points).with_context(|| format!("failed to write {DATA_FILE}"))?;
    let end_time = Instant::now();

    println!(
        "Generated {} data points and saved to {DATA_FILE}",
        points.len()
    );
    eprintln!(
        "Generate = {} seconds",
        (mid_time - start_time).as_millis() as f32 / 1000.0
    );
    eprintln!(
        "Write = {} seconds",
        (end_time - mid_time).as_millis() as f32 / 1000.0
    );

    Ok(())
}
