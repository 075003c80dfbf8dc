//! Staggered item entrances
//!
//! Items inside a reveal animate in one after another: each starts from a
//! smaller, transparent, offset pose and springs to identity, delayed by
//! `item_index * stagger_delay_ms` after the parent becomes visible. When
//! the parent is dismissed, every item snaps straight back to the hidden
//! pose; pending starts are cancelled so nothing begins late.

use crate::reveal::{Origin, RevealOrigin, RevealSpec};
use crate::scheduler::{AnimatedValue, DelayId, SchedulerHandle};
use crate::spring::{
    SpringConfig, DAMPING_RATIO_LOW_BOUNCE, DAMPING_RATIO_MEDIUM_BOUNCE, DAMPING_RATIO_NO_BOUNCE,
    STIFFNESS_HIGH, STIFFNESS_LOW, STIFFNESS_MEDIUM, STIFFNESS_VERY_LOW,
};
use crate::values::Interpolate;
use reveal_core::{ItemTransform, Vec2};
use smallvec::SmallVec;

/// The starting pose an item animates from as progress goes 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPhysicsSpec {
    /// Scale at progress 0 (0.8 = 80% of normal size)
    pub initial_scale: f32,
    /// Alpha at progress 0
    pub initial_alpha: f32,
    /// How far the item starts offset along the entrance direction, in pixels
    pub initial_translation_magnitude: f32,
    /// Total degrees to rotate during entrance
    pub rotation_degrees: f32,
    /// Spring driving the item's progress
    pub spring: SpringConfig,
}

impl ItemPhysicsSpec {
    /// Exaggerated pose and a loose spring, for playful entrances.
    pub fn strong_bounce() -> Self {
        Self {
            initial_scale: 0.5,
            initial_translation_magnitude: 150.0,
            rotation_degrees: 30.0,
            spring: SpringConfig::with_damping_ratio(DAMPING_RATIO_LOW_BOUNCE, STIFFNESS_LOW),
            ..Default::default()
        }
    }

    /// Subtle pose and a critically damped, slow spring.
    pub fn gentle_entrance() -> Self {
        Self {
            initial_scale: 0.9,
            initial_translation_magnitude: 20.0,
            rotation_degrees: 5.0,
            spring: SpringConfig::with_damping_ratio(DAMPING_RATIO_NO_BOUNCE, STIFFNESS_VERY_LOW),
            ..Default::default()
        }
    }

    /// Rotation-only entrance: already visible and in place, just swings in.
    pub fn shake_only() -> Self {
        Self {
            initial_scale: 1.0,
            initial_alpha: 1.0,
            initial_translation_magnitude: 0.0,
            rotation_degrees: 15.0,
            spring: SpringConfig::with_damping_ratio(DAMPING_RATIO_LOW_BOUNCE, STIFFNESS_HIGH),
        }
    }
}

impl Default for ItemPhysicsSpec {
    fn default() -> Self {
        Self {
            initial_scale: 0.8,
            initial_alpha: 0.0,
            initial_translation_magnitude: 80.0,
            rotation_degrees: 0.0,
            spring: SpringConfig::with_damping_ratio(DAMPING_RATIO_MEDIUM_BOUNCE, STIFFNESS_MEDIUM),
        }
    }
}

/// Map a progress value to the item pose.
///
/// Alpha and scale interpolate from their initial values to 1; translation
/// interpolates from `entrance_direction * magnitude` to zero, so items
/// slide in from the reveal origin's side (center origins pop in place);
/// rotation interpolates from `rotation_degrees` to 0.
pub fn transform_for_progress(
    progress: f32,
    origin: RevealOrigin,
    spec: &ItemPhysicsSpec,
) -> ItemTransform {
    let alpha = spec.initial_alpha.lerp(&1.0, progress);
    let scale = spec.initial_scale.lerp(&1.0, progress);

    let initial_offset = origin.entrance_direction() * spec.initial_translation_magnitude;
    let offset = initial_offset.lerp(&Vec2::ZERO, progress);

    let rotation = spec.rotation_degrees.lerp(&0.0, progress);

    ItemTransform {
        alpha,
        scale_x: scale,
        scale_y: scale,
        translate_x: offset.x,
        translate_y: offset.y,
        rotation,
    }
}

/// Per-item entrance controller.
///
/// Tracks the shared parent-revealed flag, the item's staggered start, and
/// its spring-driven progress. Evaluate [`ItemEntrance::transform`] each
/// frame to get the pose.
pub struct ItemEntrance {
    handle: SchedulerHandle,
    spec: ItemPhysicsSpec,
    origin: RevealOrigin,
    item_index: usize,
    stagger_delay_ms: f32,
    progress: AnimatedValue,
    pending_start: Option<DelayId>,
    parent_revealed: bool,
}

impl ItemEntrance {
    /// Create an idle item (progress 0, parent hidden).
    ///
    /// A negative stagger delay is a contract violation; it is clamped to
    /// zero in release builds.
    pub fn new(
        handle: SchedulerHandle,
        item_index: usize,
        origin: RevealOrigin,
        spec: ItemPhysicsSpec,
        stagger_delay_ms: f32,
    ) -> Self {
        debug_assert!(
            stagger_delay_ms >= 0.0,
            "stagger delay must be non-negative"
        );
        let progress = AnimatedValue::new(handle.clone(), 0.0, spec.spring);
        Self {
            handle,
            spec,
            origin,
            item_index,
            stagger_delay_ms: stagger_delay_ms.max(0.0),
            progress,
            pending_start: None,
            parent_revealed: false,
        }
    }

    /// Observe the parent's visibility flag.
    ///
    /// On reveal, the item's start is scheduled `item_index * stagger_delay_ms`
    /// out (index 0 starts in the same frame). On dismissal, any queued start
    /// is cancelled and progress snaps to exactly 0: a dismissed parent shows
    /// no exit animation and no late entrances.
    pub fn set_parent_revealed(&mut self, revealed: bool) {
        if revealed == self.parent_revealed {
            return;
        }
        self.parent_revealed = revealed;

        if revealed {
            let delay_ms = self.item_index as f32 * self.stagger_delay_ms;
            if delay_ms > 0.0 {
                tracing::trace!(item = self.item_index, delay_ms, "item start scheduled");
                self.pending_start = self.handle.register_delay(delay_ms);
            } else {
                self.progress.set_target(1.0);
            }
        } else {
            if let Some(id) = self.pending_start.take() {
                tracing::trace!(item = self.item_index, "pending item start cancelled");
                self.handle.remove_delay(id);
            }
            self.progress.set_immediate(0.0);
        }
    }

    /// Promote an elapsed stagger delay into a running spring.
    fn claim_elapsed_start(&mut self) {
        if let Some(id) = self.pending_start {
            if self.handle.is_delay_elapsed(id) {
                self.handle.remove_delay(id);
                self.pending_start = None;
                self.progress.set_target(1.0);
            }
        }
    }

    /// Evaluate the item's pose for the current frame.
    pub fn transform(&mut self) -> ItemTransform {
        self.claim_elapsed_start();
        transform_for_progress(self.progress.get(), self.origin, &self.spec)
    }

    /// Current entrance progress (exactly 0 while idle or dismissed)
    pub fn progress(&mut self) -> f32 {
        self.claim_elapsed_start();
        self.progress.get()
    }

    /// Check if the item is waiting out its stagger delay
    pub fn is_pending(&self) -> bool {
        self.pending_start.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    pub fn parent_revealed(&self) -> bool {
        self.parent_revealed
    }

    pub fn item_index(&self) -> usize {
        self.item_index
    }
}

impl Drop for ItemEntrance {
    fn drop(&mut self) {
        if let Some(id) = self.pending_start.take() {
            self.handle.remove_delay(id);
        }
    }
}

/// A set of items sharing one parent reveal.
///
/// Guarantees every item observes the same flag transition in the same
/// frame, with start times strictly ordered by index.
pub struct ItemGroup {
    items: SmallVec<[ItemEntrance; 4]>,
    revealed: bool,
}

impl ItemGroup {
    pub fn new(
        handle: &SchedulerHandle,
        count: usize,
        origin: RevealOrigin,
        spec: ItemPhysicsSpec,
        stagger_delay_ms: f32,
    ) -> Self {
        let items = (0..count)
            .map(|index| ItemEntrance::new(handle.clone(), index, origin, spec, stagger_delay_ms))
            .collect();
        Self {
            items,
            revealed: false,
        }
    }

    /// Build a group from a reveal's configuration.
    ///
    /// Items take their entrance direction from the reveal's origin and
    /// their spring and stagger delay from the reveal spec; `pose` supplies
    /// the starting scale/alpha/translation/rotation. A reveal with an
    /// arbitrary normalized origin has no edge direction; its items pop in
    /// place.
    pub fn for_reveal(
        handle: &SchedulerHandle,
        count: usize,
        spec: &RevealSpec,
        pose: ItemPhysicsSpec,
    ) -> Self {
        let origin = match spec.origin {
            Origin::Symbolic(origin) => origin,
            Origin::Normalized(_) => RevealOrigin::Center,
        };
        let item_spec = ItemPhysicsSpec {
            spring: spec.item_spring,
            ..pose
        };
        Self::new(handle, count, origin, item_spec, spec.item_stagger_delay_ms)
    }

    /// Flip the shared visibility flag for all items at once.
    pub fn set_revealed(&mut self, revealed: bool) {
        if revealed == self.revealed {
            return;
        }
        self.revealed = revealed;
        for item in &mut self.items {
            item.set_parent_revealed(revealed);
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Evaluate every item's pose for the current frame, in index order.
    pub fn transforms(&mut self) -> impl Iterator<Item = ItemTransform> + '_ {
        self.items.iter_mut().map(|item| item.transform())
    }

    pub fn items_mut(&mut self) -> &mut [ItemEntrance] {
        &mut self.items
    }
}
