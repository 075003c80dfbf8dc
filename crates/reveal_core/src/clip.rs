//! Clip descriptors produced by the reveal controller
//!
//! A [`ClipDescriptor`] tells the host rendering layer what to do with the
//! revealed content this frame: clip it to a circle, or drop it from layout
//! and hit testing entirely.

use crate::geometry::Point;

/// Per-frame clipping output of a circular reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipDescriptor {
    /// Content is fully collapsed and must be excluded from layout and hit
    /// testing. Emitted only when the reveal is configured to hide when
    /// invisible; otherwise a zero-radius `Circle` keeps the layout slot.
    Hidden,
    /// Content is clipped to the interior of a filled circle. Everything
    /// outside the circle is invisible; everything inside renders normally.
    Circle { center: Point, radius: f32 },
}

impl ClipDescriptor {
    /// Create a circular clip
    pub fn circle(center: Point, radius: f32) -> Self {
        ClipDescriptor::Circle { center, radius }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, ClipDescriptor::Hidden)
    }

    /// Hit test against the visible region.
    ///
    /// `Hidden` content receives no hits. Circle clips hit only inside the
    /// circle's interior.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            ClipDescriptor::Hidden => false,
            ClipDescriptor::Circle { center, radius } => {
                center.distance_to(point) <= *radius
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_receives_no_hits() {
        assert!(!ClipDescriptor::Hidden.contains(Point::ZERO));
        assert!(ClipDescriptor::Hidden.is_hidden());
    }

    #[test]
    fn test_circle_hit_test() {
        let clip = ClipDescriptor::circle(Point::new(50.0, 50.0), 10.0);

        assert!(clip.contains(Point::new(50.0, 50.0)));
        assert!(clip.contains(Point::new(57.0, 57.0)));
        assert!(!clip.contains(Point::new(61.0, 50.0)));
    }

    #[test]
    fn test_zero_radius_circle_is_not_hidden() {
        let clip = ClipDescriptor::circle(Point::new(10.0, 10.0), 0.0);
        assert!(!clip.is_hidden());
        // Degenerate circle still hits its own center point.
        assert!(clip.contains(Point::new(10.0, 10.0)));
    }
}
