mod point;
pub mod scale;

pub use point::Point;
