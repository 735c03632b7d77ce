use rand::Rng;

use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerateConfig {
    pub count: usize,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 150_000,
            x_range: (-1.0, 1.0),
            y_range: (-1.0, 1.0),
        }
    }
}

impl GenerateConfig {
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
        generate(self.count, self.x_range, self.y_range, rng)
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    low + (high - low) * rng.gen::<f64>()
}

/// Points with ids `0..count`, coordinates drawn independently from each range.
pub fn generate<R: Rng + ?Sized>(
    count: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
    rng: &mut R,
) -> Vec<Point> {
    let mut points = Vec::new();

    for id in 0..count {
        let x = uniform(rng, x_range);
        let y = uniform(rng, y_range);
        points.push(Point::new(id, x, y));
    }

    points
}
