//! Reveal Animation System
//!
//! Spring physics and the controllers behind circular reveal transitions
//! and staggered item entrances.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs parametrized by damping
//!   ratio and stiffness; interruptible, inheriting velocity on retarget
//! - **Frame Scheduler**: single-threaded, host-driven ticking with weak
//!   handles and RAII animation registration
//! - **Circular Reveal**: an expanding/contracting circular clip mask
//!   originating from a symbolic position, a normalized point, or a touch
//! - **Item Entrance**: per-item scale/fade/slide/rotate entrances,
//!   staggered by index and snapped away instantly on dismissal
//!
//! The crate produces plain descriptors ([`reveal_core::ClipDescriptor`],
//! [`reveal_core::ItemTransform`]); rendering them is the host's concern.

pub mod item;
pub mod reveal;
pub mod scheduler;
pub mod spring;
pub mod values;

pub use item::{transform_for_progress, ItemEntrance, ItemGroup, ItemPhysicsSpec};
pub use reveal::{clip_for_progress, CircularReveal, Origin, RevealOrigin, RevealSpec};
pub use scheduler::{
    AnimatedValue, AnimationScheduler, DelayId, SchedulerHandle, SpringId,
};
pub use spring::{Spring, SpringConfig};
pub use values::Interpolate;
