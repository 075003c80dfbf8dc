//! Animation scheduler
//!
//! Owns every active spring and pending stagger delay, and advances them when
//! the host's frame scheduler calls [`AnimationScheduler::advance`]. The
//! execution model is single-threaded and cooperative: there is no animation
//! thread and nothing blocks; the host drives ticks while
//! [`AnimationScheduler::advance`] reports that work remains.
//!
//! Controllers hold a [`SchedulerHandle`] (a weak reference) and register
//! their animations through it:
//! - [`AnimatedValue`] - a spring-driven scalar that retargets smoothly
//! - delay entries - cancellable one-shot timers used for staggered starts

use crate::spring::{Spring, SpringConfig};
use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

new_key_type! {
    /// Handle to a registered spring
    pub struct SpringId;
    /// Handle to a pending delay timer
    pub struct DelayId;
}

/// A one-shot countdown used to stagger animation starts.
///
/// Elapsed entries stay registered (and keep the scheduler active) until the
/// owner claims or cancels them, so a start can never be missed between
/// frames.
struct DelayEntry {
    remaining_ms: f32,
}

struct SchedulerInner {
    springs: SlotMap<SpringId, Spring>,
    delays: SlotMap<DelayId, DelayEntry>,
}

impl SchedulerInner {
    fn has_active(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled()) || !self.delays.is_empty()
    }
}

/// The animation scheduler that ticks all active animations
///
/// Typically owned by the host application; controllers receive a
/// [`SchedulerHandle`] via [`AnimationScheduler::handle`].
pub struct AnimationScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                springs: SlotMap::with_key(),
                delays: SlotMap::with_key(),
            })),
        }
    }

    /// Get a handle for passing to controllers.
    ///
    /// The handle is weak: it does not keep the scheduler alive, and every
    /// operation through it becomes a no-op once the scheduler is dropped.
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Advance all animations by the given frame delta.
    ///
    /// Returns true while any spring is unsettled or any delay is pending,
    /// i.e. while the host should keep scheduling frames.
    ///
    /// Springs are not removed when they settle; they stay registered until
    /// their wrapper drops, so a settled value can be retargeted later.
    pub fn advance(&self, dt: Duration) -> bool {
        let mut inner = self.inner.borrow_mut();
        let dt_secs = dt.as_secs_f32();
        let dt_ms = dt_secs * 1000.0;

        for (_, spring) in inner.springs.iter_mut() {
            spring.step(dt_secs);
        }

        for (_, delay) in inner.delays.iter_mut() {
            delay.remaining_ms -= dt_ms;
        }

        inner.has_active()
    }

    /// Check if any animations still need frames
    pub fn has_active_animations(&self) -> bool {
        self.inner.borrow().has_active()
    }

    /// Number of registered springs (settled or not)
    pub fn spring_count(&self) -> usize {
        self.inner.borrow().springs.len()
    }

    /// Number of pending delay timers
    pub fn delay_count(&self) -> usize {
        self.inner.borrow().delays.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to controllers so they can register and query animations without
/// keeping the scheduler alive.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    // =========================================================================
    // Spring operations
    // =========================================================================

    /// Register a spring and return its ID
    pub fn register_spring(&self, spring: Spring) -> Option<SpringId> {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow_mut().springs.insert(spring))
    }

    /// Update a spring's target
    pub fn set_spring_target(&self, id: SpringId, target: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(spring) = inner.borrow_mut().springs.get_mut(id) {
                spring.set_target(target);
            }
        }
    }

    /// Get current spring value
    pub fn get_spring_value(&self, id: SpringId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.borrow().springs.get(id).map(|s| s.value()))
    }

    /// Check if a spring has settled (at rest at target)
    ///
    /// A missing spring counts as settled: there is nothing animating.
    pub fn is_spring_settled(&self, id: SpringId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.borrow().springs.get(id).map(|s| s.is_settled()))
            .unwrap_or(true)
    }

    /// Remove a spring
    pub fn remove_spring(&self, id: SpringId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().springs.remove(id);
        }
    }

    // =========================================================================
    // Delay operations
    // =========================================================================

    /// Register a one-shot delay timer.
    ///
    /// The returned handle is the cancellation token: call
    /// [`SchedulerHandle::remove_delay`] to cancel a start that must not
    /// happen anymore, or poll [`SchedulerHandle::is_delay_elapsed`] and
    /// remove the entry when claiming it.
    pub fn register_delay(&self, delay_ms: f32) -> Option<DelayId> {
        self.inner.upgrade().map(|inner| {
            inner.borrow_mut().delays.insert(DelayEntry {
                remaining_ms: delay_ms,
            })
        })
    }

    /// Check whether a delay has fully counted down.
    ///
    /// A missing (cancelled) delay reports false: it will never elapse.
    pub fn is_delay_elapsed(&self, id: DelayId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .borrow()
                    .delays
                    .get(id)
                    .map(|d| d.remaining_ms <= 0.0)
            })
            .unwrap_or(false)
    }

    /// Cancel or claim a delay timer
    pub fn remove_delay(&self, id: DelayId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().delays.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Value (spring-based)
// ============================================================================

/// A spring-driven scalar that automatically registers with the scheduler
///
/// Changing the target starts (or retargets) a spring animation toward it;
/// the spring is registered lazily on the first real target change and
/// removed when the value is dropped or snapped.
///
/// # Example
///
/// ```ignore
/// let mut progress = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::default());
/// progress.set_target(1.0);     // animate toward shown
/// scheduler.advance(frame_dt);  // host frame tick
/// let p = progress.get();       // current interpolated value
/// ```
pub struct AnimatedValue {
    handle: SchedulerHandle,
    spring_id: Option<SpringId>,
    config: SpringConfig,
    /// Last known value while no spring is registered
    current: f32,
    target: f32,
}

impl AnimatedValue {
    /// Create a new animated value at the given initial value
    pub fn new(handle: SchedulerHandle, initial: f32, config: SpringConfig) -> Self {
        Self {
            handle,
            spring_id: None,
            config,
            current: initial,
            target: initial,
        }
    }

    /// Set the target value, animating toward it if it differs
    pub fn set_target(&mut self, target: f32) {
        self.target = target;

        if let Some(id) = self.spring_id {
            self.handle.set_spring_target(id, target);
        } else if (target - self.current).abs() > 1e-3 {
            let spring = Spring::new(self.config, self.current);
            if let Some(id) = self.handle.register_spring(spring) {
                self.spring_id = Some(id);
                self.handle.set_spring_target(id, target);
            }
        }
    }

    /// Get the current animated value
    pub fn get(&self) -> f32 {
        if let Some(id) = self.spring_id {
            self.handle.get_spring_value(id).unwrap_or(self.target)
        } else {
            self.current
        }
    }

    /// Set the value immediately, discarding any in-flight animation.
    ///
    /// This is the zero-duration snap used when a dismissed parent must not
    /// play exit animations.
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.spring_id.take() {
            self.handle.remove_spring(id);
        }
        self.current = value;
        self.target = value;
    }

    /// Check if currently animating toward the target
    pub fn is_animating(&self) -> bool {
        match self.spring_id {
            Some(id) => !self.handle.is_spring_settled(id),
            None => false,
        }
    }

    /// Get the current target value
    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.spring_id {
            self.handle.remove_spring(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_micros(16_667);

    #[test]
    fn test_advance_settles_spring() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::default());
        value.set_target(1.0);

        assert!(scheduler.has_active_animations());

        for _ in 0..240 {
            scheduler.advance(FRAME);
        }

        assert!(!value.is_animating());
        assert!((value.get() - 1.0).abs() < 1e-3);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_value_is_stable_between_ticks() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::default());
        value.set_target(1.0);

        scheduler.advance(FRAME);

        // No tick in between: repeated reads observe the same value.
        let a = value.get();
        let b = value.get();
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_immediate_removes_spring() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::default());
        value.set_target(1.0);
        scheduler.advance(FRAME);
        assert_eq!(scheduler.spring_count(), 1);

        value.set_immediate(0.0);

        assert_eq!(scheduler.spring_count(), 0);
        assert_eq!(value.get(), 0.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_drop_unregisters_spring() {
        let scheduler = AnimationScheduler::new();
        {
            let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::default());
            value.set_target(1.0);
            assert_eq!(scheduler.spring_count(), 1);
        }
        assert_eq!(scheduler.spring_count(), 0);
    }

    #[test]
    fn test_no_spring_until_target_changes() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.5, SpringConfig::default());

        // Same-value target does not allocate a spring.
        value.set_target(0.5);
        assert_eq!(scheduler.spring_count(), 0);
        assert_eq!(value.get(), 0.5);
    }

    #[test]
    fn test_delay_counts_down_and_cancels() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let delay = handle.register_delay(50.0).unwrap();
        assert!(!handle.is_delay_elapsed(delay));
        assert!(scheduler.has_active_animations());

        // Two 16.667ms frames: 33ms elapsed, still pending.
        scheduler.advance(FRAME);
        scheduler.advance(FRAME);
        assert!(!handle.is_delay_elapsed(delay));

        scheduler.advance(FRAME);
        assert!(handle.is_delay_elapsed(delay));

        // Elapsed entries keep the scheduler active until claimed.
        assert!(scheduler.has_active_animations());
        handle.remove_delay(delay);
        assert!(!scheduler.has_active_animations());

        // A cancelled delay never reports elapsed.
        assert!(!handle.is_delay_elapsed(delay));
    }

    #[test]
    fn test_dead_handle_is_inert() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle.register_spring(Spring::new(SpringConfig::default(), 0.0)).is_none());
        assert!(handle.register_delay(10.0).is_none());
    }
}
