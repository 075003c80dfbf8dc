//! Reveal Core Types
//!
//! Foundational value types for the reveal animation toolkit:
//!
//! - **Geometry**: points, sizes, vectors, and the origin-to-coverage math
//!   that sizes a circular clip so it always covers its container
//! - **Clip Descriptors**: the per-frame output of a circular reveal
//! - **Item Transforms**: the per-frame pose output of an item entrance
//!
//! These types carry no animation state of their own. Controllers in
//! `reveal_animation` produce them each frame; the host rendering layer
//! consumes them.

pub mod clip;
pub mod geometry;
pub mod transform;

pub use clip::ClipDescriptor;
pub use geometry::{map_to_size, max_radius, Point, Size, Vec2};
pub use transform::ItemTransform;
