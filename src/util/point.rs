use float_cmp::approx_eq;
use serde::{Deserialize, Serialize};

/// A position on the drawing plane.
#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The point at `angle` radians on the circle of given radius around the origin.
    pub fn polar(radius: f64, angle: f64) -> Self {
        Point {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        approx_eq!(f64, self.x, other.x, epsilon = 1e-9) && approx_eq!(f64, self.y, other.y, epsilon = 1e-9)
    }
}
