//! Pixel compositors.
//!
//! [`CompositeOp`] is the one operation every compositor exposes. Implementations come in two
//! shapes: channel-indexed generic compositors driven by a shared row loop, and fixed-format
//! compositors for four-channel, alpha-last pixels that process batches of lanes.

use crate::foundation::core::PixelFormat;
use crate::registry::modes::CompositeMode;

pub(crate) mod alpha;
pub(crate) mod alpha_darken;
pub(crate) mod base;
pub(crate) mod fixed;
pub(crate) mod generic;
pub mod parallel;
pub mod params;

pub use alpha_darken::{AlphaDarkenCreamy, AlphaDarkenHard, AlphaDarkenParams};
pub use params::CompositeParams;

/// A compositor bound to one mode and one pixel format.
///
/// `composite` never fails and holds no mutable state; concurrent calls are safe as long as
/// their destination regions do not overlap.
pub trait CompositeOp: Send + Sync {
    /// Mode this compositor implements.
    fn mode(&self) -> CompositeMode;

    /// Pixel format this compositor reads and writes.
    fn format(&self) -> PixelFormat;

    /// Stable mode identifier.
    fn id(&self) -> &'static str {
        self.mode().id()
    }

    /// Compose `params.src` onto `params.dst` in place.
    fn composite(&self, params: &mut CompositeParams<'_>);
}
