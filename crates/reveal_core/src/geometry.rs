//! Core geometry types and the reveal coverage math
//!
//! Origins are expressed in normalized coordinates: `(0, 0)` is the top-start
//! corner of a container, `(1, 1)` the bottom-end corner. [`map_to_size`]
//! projects a normalized origin into pixel space, and [`max_radius`] computes
//! the smallest circle radius that covers the whole container from that
//! origin.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// The four corner points of a rect of this size at the origin
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::ZERO,
            Point::new(self.width, 0.0),
            Point::new(0.0, self.height),
            Point::new(self.width, self.height),
        ]
    }
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Maps a normalized origin into pixel coordinates within the given size.
///
/// Each axis scales independently: `(0.5, 0.5)` maps to the center of the
/// container, `(1, 0)` to the top-end corner.
pub fn map_to_size(normalized: Point, size: Size) -> Point {
    Point::new(normalized.x * size.width, normalized.y * size.height)
}

/// Calculates the maximum radius needed to fully cover a container of `size`
/// with a circle centered at the normalized origin.
///
/// Per axis, the farthest edge is `max(o, 1 - o)` away in normalized terms;
/// scaling by the dimension and taking the Euclidean norm gives the distance
/// to the farthest corner. Zero or negative sizes degrade to a zero radius.
pub fn max_radius(normalized: Point, size: Size) -> f32 {
    let x = normalized.x.max(1.0 - normalized.x);
    let y = normalized.y.max(1.0 - normalized.y);

    let max_x = x * size.width.max(0.0);
    let max_y = y * size.height.max(0.0);

    (max_x * max_x + max_y * max_y).sqrt()
}
