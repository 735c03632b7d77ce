use serde::{Deserialize, Serialize};

/// `children` is always empty when generated, consumers attach child points later.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub children: Vec<Point>,
}

impl Point {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            children: Vec::new(),
        }
    }

    /// Depth of the child tree below this point, 0 for a leaf.
    pub fn nesting_depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.nesting_depth())
            .max()
            .unwrap_or(0)
    }
}
