//! Blending-space policies.
//!
//! Separable blend formulas are written for additive color, where larger values mean more
//! light. Subtractive formats (CMYK) store ink, so their channels are inverted into additive
//! space before the formula runs and inverted back afterwards. Alpha is never converted.

use super::Channel;

/// Conversion between a format's stored color values and the additive space blend functions
/// expect.
pub trait BlendingPolicy<T: Channel>: Send + Sync + 'static {
    /// Stable policy name.
    const NAME: &'static str;

    /// Stored value to additive space.
    fn to_additive(v: T) -> T;

    /// Additive value back to storage.
    fn from_additive(v: T) -> T;
}

/// Identity policy for RGB and gray formats.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdditiveBlending;

/// Inverting policy for ink-based formats.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubtractiveBlending;

impl<T: Channel> BlendingPolicy<T> for AdditiveBlending {
    const NAME: &'static str = "additive";

    #[inline]
    fn to_additive(v: T) -> T {
        v
    }

    #[inline]
    fn from_additive(v: T) -> T {
        v
    }
}

impl<T: Channel> BlendingPolicy<T> for SubtractiveBlending {
    const NAME: &'static str = "subtractive";

    #[inline]
    fn to_additive(v: T) -> T {
        v.inv()
    }

    #[inline]
    fn from_additive(v: T) -> T {
        v.inv()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channel/blending.rs"]
mod tests;
