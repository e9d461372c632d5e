//! Alpha-shaping compositors: over, copy, erase, behind and the destination-keeping modes.

use crate::channel::{Channel, clamp, union_shape_opacity};
use crate::composite::base::{PixelCompositor, PixelContext};

/// What one compositing step does to the color channels of a pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ColorStep<T> {
    /// Leave the destination color.
    Keep,
    /// Take the source color.
    Replace,
    /// Mix source and destination with the given weight. How the weight is used is up to the
    /// mode.
    Mix(T),
}

/// Source-over color step and new alpha for an applied source alpha.
///
/// [`ColorStep::Mix`] carries the weight of `dst.lerp(src, w)`.
pub(crate) fn over_step<T: Channel>(applied: T, dst_alpha: T) -> (ColorStep<T>, T) {
    if applied == T::ZERO {
        return (ColorStep::Keep, dst_alpha);
    }
    if applied == T::UNIT || dst_alpha == T::ZERO {
        return (ColorStep::Replace, union_shape_opacity(applied, dst_alpha));
    }
    if dst_alpha == T::UNIT {
        return (ColorStep::Mix(applied), T::UNIT);
    }
    let new_alpha = union_shape_opacity(applied, dst_alpha);
    (ColorStep::Mix(clamp::<T>(applied.div(new_alpha))), new_alpha)
}

/// Copy color step and new alpha for an applied opacity.
///
/// [`ColorStep::Mix`] carries the opacity for [`copy_channel`].
pub(crate) fn copy_step<T: Channel>(opacity: T, src_alpha: T, dst_alpha: T) -> (ColorStep<T>, T) {
    if opacity == T::ZERO {
        return (ColorStep::Keep, dst_alpha);
    }
    if opacity == T::UNIT {
        return (ColorStep::Replace, src_alpha);
    }
    let new_alpha = dst_alpha.lerp(src_alpha, opacity);
    if new_alpha == T::ZERO {
        return (ColorStep::Keep, new_alpha);
    }
    if dst_alpha == T::ZERO {
        return (ColorStep::Replace, new_alpha);
    }
    (ColorStep::Mix(opacity), new_alpha)
}

/// One channel of a partial copy: alpha-weighted mix divided back by the new alpha.
pub(crate) fn copy_channel<T: Channel>(
    src: T,
    src_alpha: T,
    dst: T,
    dst_alpha: T,
    opacity: T,
    new_alpha: T,
) -> T {
    let blended = dst.mul(dst_alpha).lerp(src.mul(src_alpha), opacity);
    clamp::<T>(blended.div(new_alpha))
}

/// Porter-Duff source-over.
pub(crate) struct OverCompositor;

impl<T: Channel> PixelCompositor<T> for OverCompositor {
    fn composite_pixel(
        &self,
        src: &[T],
        src_alpha: T,
        dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T {
        let applied = src_alpha.mul3(mask_alpha, ctx.opacity);
        if applied == T::ZERO {
            return dst_alpha;
        }

        if ctx.alpha_locked {
            for i in 0..ctx.channel_count {
                if ctx.writes(i) {
                    dst[i] = dst[i].lerp(src[i], applied);
                }
            }
            return dst_alpha;
        }

        let (step, new_alpha) = over_step(applied, dst_alpha);
        match step {
            ColorStep::Keep => {}
            ColorStep::Replace => {
                if dst_alpha == T::ZERO {
                    ctx.nullify_unwritten(dst);
                }
                ctx.copy_colors(src, dst);
            }
            ColorStep::Mix(w) => {
                for i in 0..ctx.channel_count {
                    if ctx.writes(i) {
                        dst[i] = dst[i].lerp(src[i], w);
                    }
                }
            }
        }
        new_alpha
    }
}

/// Replaces the destination by the source, fading by opacity and mask.
pub(crate) struct CopyCompositor;

impl<T: Channel> PixelCompositor<T> for CopyCompositor {
    fn composite_pixel(
        &self,
        src: &[T],
        src_alpha: T,
        dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T {
        let opacity = ctx.opacity.mul(mask_alpha);
        let (step, new_alpha) = copy_step(opacity, src_alpha, dst_alpha);
        match step {
            ColorStep::Keep => {}
            ColorStep::Replace => {
                if dst_alpha == T::ZERO {
                    ctx.nullify_unwritten(dst);
                }
                ctx.copy_colors(src, dst);
            }
            ColorStep::Mix(op) => {
                for i in 0..ctx.channel_count {
                    if ctx.writes(i) {
                        dst[i] = copy_channel(src[i], src_alpha, dst[i], dst_alpha, op, new_alpha);
                    }
                }
            }
        }
        new_alpha
    }
}

/// Removes coverage: `dstA * inv(srcA * mask * opacity)`. Color is untouched.
pub(crate) struct EraseCompositor;

impl<T: Channel> PixelCompositor<T> for EraseCompositor {
    fn composite_pixel(
        &self,
        _src: &[T],
        src_alpha: T,
        _dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T {
        let applied = src_alpha.mul3(mask_alpha, ctx.opacity);
        dst_alpha.mul(applied.inv())
    }
}

/// Paints underneath the destination.
pub(crate) struct BehindCompositor;

impl<T: Channel> PixelCompositor<T> for BehindCompositor {
    fn composite_pixel(
        &self,
        src: &[T],
        src_alpha: T,
        dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T {
        if dst_alpha == T::UNIT {
            return dst_alpha;
        }
        let applied = src_alpha.mul3(mask_alpha, ctx.opacity);
        if applied == T::ZERO {
            return dst_alpha;
        }

        let new_alpha = union_shape_opacity(dst_alpha, applied);
        if new_alpha == T::ZERO {
            return new_alpha;
        }
        if dst_alpha == T::ZERO {
            ctx.nullify_unwritten(dst);
            ctx.copy_colors(src, dst);
            return new_alpha;
        }

        for i in 0..ctx.channel_count {
            if ctx.writes(i) {
                let src_mult = src[i].mul(applied);
                let blended = src_mult.lerp(dst[i], dst_alpha);
                dst[i] = clamp::<T>(blended.div(new_alpha));
            }
        }
        new_alpha
    }
}

/// Keeps the destination where the source covers it: `dstA * appliedA`. Color is untouched.
pub(crate) struct DestinationInCompositor;

impl<T: Channel> PixelCompositor<T> for DestinationInCompositor {
    fn composite_pixel(
        &self,
        _src: &[T],
        src_alpha: T,
        _dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T {
        let applied = src_alpha.mul3(mask_alpha, ctx.opacity);
        dst_alpha.mul(applied)
    }
}

/// Destination color over the source, clipped to the source coverage.
pub(crate) struct DestinationAtopCompositor;

impl<T: Channel> PixelCompositor<T> for DestinationAtopCompositor {
    fn composite_pixel(
        &self,
        src: &[T],
        src_alpha: T,
        dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T {
        let applied = src_alpha.mul3(mask_alpha, ctx.opacity);
        if src_alpha == T::ZERO {
            return applied;
        }
        if dst_alpha == T::ZERO {
            ctx.nullify_unwritten(dst);
            ctx.copy_colors(src, dst);
            return applied;
        }
        for i in 0..ctx.channel_count {
            if ctx.writes(i) {
                dst[i] = src[i].lerp(dst[i], dst_alpha);
            }
        }
        applied
    }
}

/// Raises the destination alpha toward the source alpha along a smooth maximum.
pub(crate) struct GreaterCompositor;

impl<T: Channel> PixelCompositor<T> for GreaterCompositor {
    fn composite_pixel(
        &self,
        src: &[T],
        src_alpha: T,
        dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T {
        if dst_alpha == T::UNIT {
            return dst_alpha;
        }
        let applied = src_alpha.mul3(mask_alpha, ctx.opacity);
        if applied == T::ZERO {
            return dst_alpha;
        }

        let da = dst_alpha.to_f32();
        let sa = applied.to_f32();
        let w = 1.0 / (1.0 + (-40.0 * (da - sa)).exp());
        let a = (da * w + sa * (1.0 - w)).clamp(0.0, 1.0).max(da);
        let fake_opacity = T::from_f32(1.0 - (1.0 - a) / (1.0 - da + 1e-16));
        let new_alpha = T::from_f32(a);

        if dst_alpha == T::ZERO {
            ctx.nullify_unwritten(dst);
            ctx.copy_colors(src, dst);
            return new_alpha;
        }
        if new_alpha == T::ZERO {
            return new_alpha;
        }
        for i in 0..ctx.channel_count {
            if ctx.writes(i) {
                let blended = dst[i].mul(dst_alpha).lerp(src[i], fake_opacity);
                dst[i] = clamp::<T>(blended.div(new_alpha));
            }
        }
        new_alpha
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/alpha.rs"]
mod tests;
