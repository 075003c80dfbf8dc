//! Spring physics for progress values
//!
//! RK4-integrated damped harmonic oscillator, used to drive reveal and item
//! progress between 0 and 1. Springs are interruptible: retargeting keeps the
//! current value and velocity, so a reveal reversed mid-flight turns around
//! smoothly instead of jumping.

/// Damping ratio of a critically damped spring (no oscillation).
pub const DAMPING_RATIO_NO_BOUNCE: f32 = 1.0;
/// Slightly underdamped; a small, quick overshoot.
pub const DAMPING_RATIO_LOW_BOUNCE: f32 = 0.75;
/// Noticeably bouncy; the default feel for reveals and item entrances.
pub const DAMPING_RATIO_MEDIUM_BOUNCE: f32 = 0.5;
/// Very bouncy; several visible oscillations before settling.
pub const DAMPING_RATIO_HIGH_BOUNCE: f32 = 0.2;

/// Very slow response, for long ambient transitions.
pub const STIFFNESS_VERY_LOW: f32 = 50.0;
/// Slow response.
pub const STIFFNESS_LOW: f32 = 200.0;
/// Medium response; the default for reveal transitions.
pub const STIFFNESS_MEDIUM: f32 = 1500.0;
/// Fast response; the default for item entrances.
pub const STIFFNESS_HIGH: f32 = 10_000.0;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Create a new spring configuration from raw coefficients
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        debug_assert!(stiffness > 0.0, "spring stiffness must be positive");
        debug_assert!(mass > 0.0, "spring mass must be positive");
        Self {
            stiffness: stiffness.max(f32::EPSILON),
            damping: damping.max(0.0),
            mass: mass.max(f32::EPSILON),
        }
    }

    /// Create a spring from a damping ratio and stiffness (unit mass).
    ///
    /// The damping ratio describes the feel directly: 1.0 settles without
    /// oscillating, values below 1.0 overshoot and bounce, values above 1.0
    /// creep in slowly. The raw damping coefficient is
    /// `ratio * 2 * sqrt(stiffness * mass)`.
    pub fn with_damping_ratio(damping_ratio: f32, stiffness: f32) -> Self {
        debug_assert!(damping_ratio >= 0.0, "damping ratio must be non-negative");
        let mass = 1.0;
        let damping = damping_ratio.max(0.0) * 2.0 * (stiffness * mass).sqrt();
        Self::new(stiffness, damping, mass)
    }

    /// The damping coefficient at which this spring stops oscillating
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// The damping ratio (1.0 = critically damped)
    pub fn damping_ratio(&self) -> f32 {
        self.damping / self.critical_damping()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is critically damped (no oscillation, fastest settling)
    pub fn is_critically_damped(&self) -> bool {
        (self.damping - self.critical_damping()).abs() < 0.01
    }

    /// Check if the spring is overdamped (slow settling, no oscillation)
    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::with_damping_ratio(DAMPING_RATIO_MEDIUM_BOUNCE, STIFFNESS_MEDIUM)
    }
}

/// A spring-driven scalar
///
/// Holds the current value, velocity, and target. [`Spring::step`] advances
/// the simulation by an explicit time delta, so it can be tested (and
/// replayed) without any render loop.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget the spring. Value and velocity are unchanged, so an
    /// in-flight animation continues smoothly toward the new target.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Check if the spring has settled at its target.
    ///
    /// Epsilons are sized for normalized progress values: within 1/1000 of
    /// the target and moving slower than 1% of the range per second reads as
    /// at rest.
    pub fn is_settled(&self) -> bool {
        const EPSILON: f32 = 1e-3;
        const VELOCITY_EPSILON: f32 = 1e-2;

        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Step the spring simulation using RK4 integration.
    ///
    /// The step that lands in the settle window snaps exactly to the
    /// target, so downstream checks against 0.0 and 1.0 are exact even if
    /// the host stops ticking as soon as everything reports settled.
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);

        settle(&mut spring, 240);

        assert!(spring.is_settled());
        assert!((spring.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_spring_inherits_velocity_on_retarget() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);

        settle(&mut spring, 5);

        let velocity = spring.velocity();
        let value = spring.value();
        assert!(velocity > 0.0);

        // Reverse mid-flight: no jump in value, velocity carries over.
        spring.set_target(0.0);
        assert_eq!(spring.velocity(), velocity);
        assert_eq!(spring.value(), value);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let config = SpringConfig::with_damping_ratio(DAMPING_RATIO_HIGH_BOUNCE, STIFFNESS_MEDIUM);
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(1.0);

        let mut peak = 0.0_f32;
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            peak = peak.max(spring.value());
        }

        assert!(peak > 1.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_critically_damped_spring_never_overshoots() {
        let config = SpringConfig::with_damping_ratio(DAMPING_RATIO_NO_BOUNCE, STIFFNESS_MEDIUM);
        assert!(config.is_critically_damped());

        let mut spring = Spring::new(config, 0.0);
        spring.set_target(1.0);

        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() <= 1.0 + 1e-3);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn test_damping_ratio_round_trip() {
        let config = SpringConfig::with_damping_ratio(0.5, STIFFNESS_HIGH);
        assert!((config.damping_ratio() - 0.5).abs() < 1e-4);
        assert!(config.is_underdamped());

        let overdamped = SpringConfig::with_damping_ratio(2.0, STIFFNESS_LOW);
        assert!(overdamped.is_overdamped());
    }

    #[test]
    fn test_stiff_spring_stable_at_frame_rate() {
        let config = SpringConfig::with_damping_ratio(DAMPING_RATIO_MEDIUM_BOUNCE, STIFFNESS_HIGH);
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(1.0);

        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            assert!(spring.value().is_finite());
            assert!(spring.value() > -1.0 && spring.value() < 3.0);
        }
        assert!(spring.is_settled());
    }
}
