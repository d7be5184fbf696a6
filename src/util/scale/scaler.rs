/// Maps values of the range `min..=max` linearly onto `0.0..=1.0`.
pub struct Scaler {
    pub min: f64,
    pub max: f64,
    diff: f64,
}

impl Scaler {
    pub fn new(min: f64, max: f64) -> Self {
        Scaler {
            min,
            max,
            diff: max - min,
        }
    }

    /// A degenerate range maps everything to the centre.
    pub fn scale(&self, val: f64) -> f64 {
        if self.diff == 0.0 {
            0.5
        } else {
            (val - self.min) / self.diff
        }
    }
}
