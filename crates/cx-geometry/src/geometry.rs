// ABOUTME: Point, size and rectangle value types in a Y-up coordinate space.
// ABOUTME: Equality and hashing compare components exactly, with no tolerance.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Feed a float to a hasher so that values equal under `==` hash equally.
fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    // -0.0 + 0.0 is +0.0, folding both zeros onto one bit pattern
    (value + 0.0).to_bits().hash(state);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle with its origin at the min-x, min-y corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

// Eq requires that no component is NaN.
impl Eq for Point {}
impl Eq for Size {}
impl Eq for Rect {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.x, state);
        hash_f64(self.y, state);
    }
}

impl Hash for Size {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.width, state);
        hash_f64(self.height, state);
    }
}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.size.hash(state);
    }
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x.min(self.origin.x + self.size.width)
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x.max(self.origin.x + self.size.width)
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y.min(self.origin.y + self.size.height)
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y.max(self.origin.y + self.size.height)
    }

    pub fn width(&self) -> f64 {
        self.size.width.abs()
    }

    pub fn height(&self) -> f64 {
        self.size.height.abs()
    }

    /// Point-in-rect test, inclusive on the min edges and exclusive on the max edges.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Whether `other` lies entirely inside this rect, edges included.
    ///
    /// Equivalent to the intersection of both rects being `other`.
    pub fn fully_contains(&self, other: &Rect) -> bool {
        self.min_x() <= other.min_x()
            && self.max_x() >= other.max_x()
            && self.min_y() <= other.min_y()
            && self.max_y() >= other.max_y()
    }

    /// Overlapping area of two rects, `None` when they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min_x = self.min_x().max(other.min_x());
        let min_y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());

        if min_x <= max_x && min_y <= max_y {
            Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
        } else {
            None
        }
    }

    /// Rect shrunk by `dx` on the left and right and `dy` on the top and bottom
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.min_x() + dx,
            self.min_y() + dy,
            self.width() - 2.0 * dx,
            self.height() - 2.0 * dy,
        )
    }
}
