pub mod dataset;
pub mod error;
pub mod generate;
pub mod point;

pub use dataset::{load_points, save_points, DATA_FILE};
pub use error::{Error, Result};
pub use generate::{generate, GenerateConfig};
pub use point::Point;
