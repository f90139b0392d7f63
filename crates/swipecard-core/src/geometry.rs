//! Logical-pixel geometry used by the gesture recogniser.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Displacement from `origin` to `self`.
    pub fn delta_from(self, origin: Point) -> Point {
        Point {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }

    /// True when both axes moved less than `slop` pixels.
    pub fn within(self, slop: f32) -> bool {
        self.x.abs() < slop && self.y.abs() < slop
    }
}
