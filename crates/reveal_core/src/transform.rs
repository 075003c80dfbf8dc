//! Per-item transform output
//!
//! The item-entrance controller maps its progress value to this pose each
//! frame. The host applies it to the item's render layer (alpha blend,
//! uniform scale, translation in pixels, rotation in degrees).

/// The per-frame pose of an item inside a reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    pub alpha: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    /// Rotation in degrees, applied around the item center
    pub rotation: f32,
}

impl ItemTransform {
    /// The settled pose: fully opaque, unscaled, untranslated, unrotated.
    pub const IDENTITY: ItemTransform = ItemTransform {
        alpha: 1.0,
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        rotation: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        self == &Self::IDENTITY
    }
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
