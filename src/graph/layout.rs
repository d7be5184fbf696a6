use std::f64::consts::PI;

use crate::util::Point;

/// Places `order` nodes evenly on the unit circle, node 0 at the top, continuing clockwise.
pub fn circle(order: usize) -> Vec<Point> {
    (0..order)
        .map(|i| Point::polar(1.0, PI / 2.0 - 2.0 * PI * i as f64 / order as f64))
        .collect()
}
