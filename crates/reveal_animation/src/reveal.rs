//! Circular reveal transition
//!
//! A reveal clips its content to a circle that grows from a configurable
//! origin until it covers the whole container, and shrinks back on hide.
//! [`CircularReveal`] owns the visibility flag and the spring-driven
//! progress; [`clip_for_progress`] is the pure evaluation path for hosts
//! that drive progress from another animation source.

use crate::scheduler::{AnimatedValue, SchedulerHandle};
use crate::spring::{SpringConfig, DAMPING_RATIO_MEDIUM_BOUNCE, STIFFNESS_HIGH, STIFFNESS_MEDIUM};
use reveal_core::{map_to_size, max_radius, ClipDescriptor, Point, Size, Vec2};

/// Symbolic origin positions for reveal and entrance animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealOrigin {
    TopStart,
    TopCenter,
    TopEnd,
    CenterStart,
    #[default]
    Center,
    CenterEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
}

impl RevealOrigin {
    /// Convert the origin to normalized coordinates (0.0 to 1.0).
    pub fn to_normalized(self) -> Point {
        match self {
            RevealOrigin::TopStart => Point::new(0.0, 0.0),
            RevealOrigin::TopCenter => Point::new(0.5, 0.0),
            RevealOrigin::TopEnd => Point::new(1.0, 0.0),
            RevealOrigin::CenterStart => Point::new(0.0, 0.5),
            RevealOrigin::Center => Point::new(0.5, 0.5),
            RevealOrigin::CenterEnd => Point::new(1.0, 0.5),
            RevealOrigin::BottomStart => Point::new(0.0, 1.0),
            RevealOrigin::BottomCenter => Point::new(0.5, 1.0),
            RevealOrigin::BottomEnd => Point::new(1.0, 1.0),
        }
    }

    /// Unit direction items enter from when the reveal originates here.
    ///
    /// Start-column origins enter from the left (`x = -1`), end-column from
    /// the right (`x = 1`); top-row origins from above (`y = -1`), bottom-row
    /// from below (`y = 1`). Center axes contribute no movement.
    pub fn entrance_direction(self) -> Vec2 {
        let x = match self {
            RevealOrigin::TopStart | RevealOrigin::CenterStart | RevealOrigin::BottomStart => -1.0,
            RevealOrigin::TopEnd | RevealOrigin::CenterEnd | RevealOrigin::BottomEnd => 1.0,
            _ => 0.0,
        };
        let y = match self {
            RevealOrigin::TopStart | RevealOrigin::TopCenter | RevealOrigin::TopEnd => -1.0,
            RevealOrigin::BottomStart | RevealOrigin::BottomCenter | RevealOrigin::BottomEnd => 1.0,
            _ => 0.0,
        };
        Vec2::new(x, y)
    }
}

/// Where a reveal originates: a symbolic position or an arbitrary
/// normalized point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Origin {
    Symbolic(RevealOrigin),
    Normalized(Point),
}

impl Origin {
    /// Resolve to normalized coordinates.
    pub fn to_normalized(self) -> Point {
        match self {
            Origin::Symbolic(origin) => origin.to_normalized(),
            Origin::Normalized(point) => point,
        }
    }

    /// Build an origin from a touch position in container pixel coordinates.
    ///
    /// An empty container has no meaningful touch positions; the origin
    /// degrades to the center.
    pub fn from_touch(position: Point, container: Size) -> Self {
        if container.is_empty() {
            return Origin::Symbolic(RevealOrigin::Center);
        }
        Origin::Normalized(Point::new(
            position.x / container.width,
            position.y / container.height,
        ))
    }

    /// Build an origin from a triggering element's position.
    ///
    /// Same normalization as [`Origin::from_touch`]; use with the host's
    /// layout-measurement callback to reveal outward from a button or icon.
    pub fn from_element(position: Point, container: Size) -> Self {
        Self::from_touch(position, container)
    }
}

impl Default for Origin {
    fn default() -> Self {
        Origin::Symbolic(RevealOrigin::Center)
    }
}

impl From<RevealOrigin> for Origin {
    fn from(origin: RevealOrigin) -> Self {
        Origin::Symbolic(origin)
    }
}

impl From<Point> for Origin {
    fn from(point: Point) -> Self {
        Origin::Normalized(point)
    }
}

/// Configuration for a circular reveal.
///
/// The item spring and stagger delay are carried here so a reveal and the
/// item entrances inside it can be configured as one unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    /// Where the reveal originates
    pub origin: Origin,
    /// Spring driving the reveal progress
    pub spring: SpringConfig,
    /// Remove content from layout and hit testing when fully hidden.
    /// When false, a fully hidden reveal keeps its layout slot and emits a
    /// zero-radius clip instead.
    pub hide_when_invisible: bool,
    /// Spring driving item entrances inside this reveal
    pub item_spring: SpringConfig,
    /// Per-item start delay in milliseconds
    pub item_stagger_delay_ms: f32,
}

impl RevealSpec {
    pub fn from_origin(origin: impl Into<Origin>) -> Self {
        Self {
            origin: origin.into(),
            ..Default::default()
        }
    }
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            spring: SpringConfig::with_damping_ratio(DAMPING_RATIO_MEDIUM_BOUNCE, STIFFNESS_MEDIUM),
            hide_when_invisible: true,
            item_spring: SpringConfig::with_damping_ratio(DAMPING_RATIO_MEDIUM_BOUNCE, STIFFNESS_HIGH),
            item_stagger_delay_ms: 50.0,
        }
    }
}

/// Evaluate the clip for an externally driven progress value.
///
/// This is the pure core of the reveal: given the same inputs it always
/// produces the same descriptor. A settled spring snaps exactly to its
/// target, so a fully hidden reveal compares equal to 0.0 here; a bouncy
/// hide passing through negative values does not, and keeps its (clamped)
/// zero-radius circle.
pub fn clip_for_progress(
    progress: f32,
    origin: Point,
    container: Size,
    hide_when_invisible: bool,
) -> ClipDescriptor {
    if hide_when_invisible && progress == 0.0 {
        return ClipDescriptor::Hidden;
    }

    let center = map_to_size(origin, container);
    let radius = max_radius(origin, container) * progress.max(0.0);
    ClipDescriptor::circle(center, radius)
}

/// An animated circular reveal.
///
/// Owns the visibility flag and a spring-driven progress value. The host
/// flips visibility with [`CircularReveal::set_visible`] and evaluates
/// [`CircularReveal::clip`] each frame with the current container size.
pub struct CircularReveal {
    spec: RevealSpec,
    progress: AnimatedValue,
    visible: bool,
}

impl CircularReveal {
    /// Create a hidden reveal (progress 0).
    pub fn new(handle: SchedulerHandle, spec: RevealSpec) -> Self {
        let progress = AnimatedValue::new(handle, 0.0, spec.spring);
        Self {
            spec,
            progress,
            visible: false,
        }
    }

    /// Flip the visibility flag.
    ///
    /// Showing animates progress toward 1, hiding animates back toward 0
    /// with the same spring. Retargeting mid-flight continues from the
    /// current value and velocity; rapid toggling never jumps.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        tracing::debug!(visible, "circular reveal visibility changed");
        self.progress.set_target(if visible { 1.0 } else { 0.0 });
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current reveal progress (may transiently overshoot [0, 1])
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }

    /// Evaluate the clip for the current frame.
    pub fn clip(&self, container: Size) -> ClipDescriptor {
        clip_for_progress(
            self.progress.get(),
            self.spec.origin.to_normalized(),
            container,
            self.spec.hide_when_invisible,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::AnimationScheduler;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_micros(16_667);
    const SIZE: Size = Size::new(100.0, 200.0);

    #[test]
    fn test_symbolic_origins_map_to_fixed_points() {
        assert_eq!(RevealOrigin::TopStart.to_normalized(), Point::new(0.0, 0.0));
        assert_eq!(RevealOrigin::Center.to_normalized(), Point::new(0.5, 0.5));
        assert_eq!(RevealOrigin::BottomEnd.to_normalized(), Point::new(1.0, 1.0));
        assert_eq!(RevealOrigin::CenterEnd.to_normalized(), Point::new(1.0, 0.5));
    }

    #[test]
    fn test_touch_origin_normalizes_against_container() {
        let origin = Origin::from_touch(Point::new(25.0, 150.0), SIZE);
        assert_eq!(origin.to_normalized(), Point::new(0.25, 0.75));

        // Empty container degrades to center.
        let origin = Origin::from_touch(Point::new(25.0, 150.0), Size::ZERO);
        assert_eq!(origin.to_normalized(), Point::new(0.5, 0.5));
    }

    #[test]
    fn test_hidden_vs_zero_radius_at_zero_progress() {
        let center = RevealOrigin::Center.to_normalized();

        let clip = clip_for_progress(0.0, center, SIZE, true);
        assert_eq!(clip, ClipDescriptor::Hidden);

        let clip = clip_for_progress(0.0, center, SIZE, false);
        assert_eq!(
            clip,
            ClipDescriptor::circle(Point::new(50.0, 100.0), 0.0)
        );
    }

    #[test]
    fn test_full_progress_covers_container() {
        let origin = RevealOrigin::TopStart.to_normalized();
        let clip = clip_for_progress(1.0, origin, SIZE, true);

        match clip {
            ClipDescriptor::Circle { center, radius } => {
                assert_eq!(center, Point::new(0.0, 0.0));
                // Radius reaches the farthest corner.
                for corner in SIZE.corners() {
                    assert!(radius >= center.distance_to(corner) - 1e-3);
                }
            }
            ClipDescriptor::Hidden => panic!("fully revealed content must not be hidden"),
        }
    }

    #[test]
    fn test_negative_overshoot_clamps_radius() {
        let center = RevealOrigin::Center.to_normalized();
        let clip = clip_for_progress(-0.05, center, SIZE, true);

        // Mid-bounce below zero is not "exactly hidden": layout stays, radius clamps.
        match clip {
            ClipDescriptor::Circle { radius, .. } => assert_eq!(radius, 0.0),
            ClipDescriptor::Hidden => panic!("bounce through negative progress must not hide"),
        }
    }

    #[test]
    fn test_reveal_animates_toward_shown() {
        let scheduler = AnimationScheduler::new();
        let mut reveal = CircularReveal::new(scheduler.handle(), RevealSpec::default());

        assert_eq!(reveal.clip(SIZE), ClipDescriptor::Hidden);

        reveal.set_visible(true);
        for _ in 0..240 {
            scheduler.advance(FRAME);
        }

        assert!(!reveal.is_animating());
        assert!((reveal.progress() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_rapid_toggle_has_no_discontinuity() {
        let scheduler = AnimationScheduler::new();
        let mut reveal = CircularReveal::new(scheduler.handle(), RevealSpec::default());

        reveal.set_visible(true);
        for _ in 0..10 {
            scheduler.advance(FRAME);
        }
        let mid = reveal.progress();
        assert!(mid > 0.0 && mid < 1.0);

        // Reverse, then immediately re-show. Progress must move smoothly
        // from wherever it was, never jumping to an endpoint.
        reveal.set_visible(false);
        assert_eq!(reveal.progress(), mid);

        scheduler.advance(FRAME);
        let after_one_frame = reveal.progress();
        assert!((after_one_frame - mid).abs() < 0.2);

        reveal.set_visible(true);
        assert_eq!(reveal.progress(), after_one_frame);
    }

    #[test]
    fn test_hide_collapses_to_hidden_descriptor() {
        let scheduler = AnimationScheduler::new();
        let mut reveal = CircularReveal::new(scheduler.handle(), RevealSpec::default());

        reveal.set_visible(true);
        let mut frames = 0;
        while scheduler.advance(FRAME) {
            frames += 1;
            assert!(frames < 600, "show animation failed to settle");
        }

        reveal.set_visible(false);
        frames = 0;
        while scheduler.advance(FRAME) {
            frames += 1;
            assert!(frames < 600, "hide animation failed to settle");
        }

        // Settling snaps progress to exactly 0, which collapses the clip.
        assert_eq!(reveal.progress(), 0.0);
        assert_eq!(reveal.clip(SIZE), ClipDescriptor::Hidden);
    }

    #[test]
    fn test_clip_is_idempotent_between_ticks() {
        let scheduler = AnimationScheduler::new();
        let mut reveal = CircularReveal::new(scheduler.handle(), RevealSpec::default());
        reveal.set_visible(true);
        scheduler.advance(FRAME);

        assert_eq!(reveal.clip(SIZE), reveal.clip(SIZE));
    }

    #[test]
    fn test_custom_origin_spec() {
        let spec = RevealSpec::from_origin(Point::new(0.1, 0.9));
        assert_eq!(spec.origin.to_normalized(), Point::new(0.1, 0.9));

        let spec = RevealSpec::from_origin(RevealOrigin::TopEnd);
        assert_eq!(spec.origin.to_normalized(), Point::new(1.0, 0.0));
    }
}
