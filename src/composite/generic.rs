//! Separable and non-separable compositors lifting blend functions into pixel operations, and
//! the additive `luminosity_sai` compositor.

use std::marker::PhantomData;

use crate::blend::BlendFn;
use crate::blend::hsx::RgbBlend;
use crate::blend::light::addition_sai;
use crate::channel::blending::{AdditiveBlending, BlendingPolicy};
use crate::channel::clamp::ClampPolicy;
use crate::channel::{Channel, blend, div_by_alpha, union_shape_opacity};
use crate::composite::base::{PixelCompositor, PixelContext};
use crate::foundation::core::MAX_CHANNELS;

/// Shared alpha model: `composed(i, src, dst)` yields the blend result for channel `i`, or
/// `None` for channels the function does not touch (`touches(i)` is false for those).
fn compose_with<T: Channel>(
    src: &[T],
    src_alpha: T,
    dst: &mut [T],
    dst_alpha: T,
    ctx: &PixelContext<T>,
    touches: impl Fn(usize) -> bool,
    composed: impl Fn(usize, T, T) -> Option<T>,
) -> T {
    if ctx.alpha_locked {
        for i in 0..ctx.channel_count {
            if ctx.writes(i)
                && let Some(cf) = composed(i, src[i], dst[i])
            {
                dst[i] = dst[i].lerp(cf, src_alpha);
            }
        }
        return dst_alpha;
    }

    let new_alpha = union_shape_opacity(src_alpha, dst_alpha);

    if dst_alpha == T::ZERO {
        ctx.nullify_unwritten(dst);
        for i in 0..ctx.channel_count {
            if ctx.writes(i) && touches(i) {
                dst[i] = src[i];
            }
        }
        return new_alpha;
    }

    if dst_alpha == T::UNIT {
        for i in 0..ctx.channel_count {
            if ctx.writes(i)
                && let Some(cf) = composed(i, src[i], dst[i])
            {
                dst[i] = dst[i].lerp(cf, src_alpha);
            }
        }
        return new_alpha;
    }

    for i in 0..ctx.channel_count {
        if ctx.writes(i)
            && let Some(cf) = composed(i, src[i], dst[i])
        {
            let mixed = blend(src[i], src_alpha, dst[i], dst_alpha, cf);
            dst[i] = div_by_alpha(mixed, new_alpha);
        }
    }
    new_alpha
}

/// Applies a channel function to every color channel independently, in the additive space
/// chosen by `B`.
pub(crate) struct SeparableCompositor<T: Channel, B: BlendingPolicy<T> = AdditiveBlending> {
    func: BlendFn<T>,
    _blending: PhantomData<fn() -> B>,
}

impl<T: Channel, B: BlendingPolicy<T>> SeparableCompositor<T, B> {
    pub(crate) fn new(func: BlendFn<T>) -> Self {
        Self {
            func,
            _blending: PhantomData,
        }
    }
}

impl<T: Channel, B: BlendingPolicy<T>> PixelCompositor<T> for SeparableCompositor<T, B> {
    fn composite_pixel(
        &self,
        src: &[T],
        src_alpha: T,
        dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T {
        let src_alpha = src_alpha.mul3(mask_alpha, ctx.opacity);
        if src_alpha == T::ZERO {
            return dst_alpha;
        }
        let f = self.func;
        compose_with(src, src_alpha, dst, dst_alpha, ctx, |_| true, |_, s, d| {
            Some(B::from_additive(f(B::to_additive(s), B::to_additive(d))))
        })
    }
}

/// Applies an RGB function to the red, green and blue channels jointly.
pub(crate) struct NonSeparableCompositor {
    func: RgbBlend,
}

impl NonSeparableCompositor {
    pub(crate) fn new(func: RgbBlend) -> Self {
        Self { func }
    }
}

impl<T: Channel> PixelCompositor<T> for NonSeparableCompositor {
    fn composite_pixel(
        &self,
        src: &[T],
        src_alpha: T,
        dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T {
        let src_alpha = src_alpha.mul3(mask_alpha, ctx.opacity);
        let Some(rgb) = ctx.rgb_pos else {
            return dst_alpha;
        };
        if src_alpha == T::ZERO {
            return dst_alpha;
        }

        let s3 = rgb.map(|p| src[p].to_f32());
        let mut d3 = rgb.map(|p| dst[p].to_f32());
        self.func.apply(s3, &mut d3);
        let mut out = [None; MAX_CHANNELS];
        for (k, &p) in rgb.iter().enumerate() {
            out[p] = Some(T::from_f32(d3[k]));
        }

        compose_with(
            src,
            src_alpha,
            dst,
            dst_alpha,
            ctx,
            |i| out[i].is_some(),
            |i, _, _| out[i],
        )
    }
}

/// Adds the alpha-weighted source to the destination color (`luminosity_sai`).
///
/// Source color is treated as not premultiplied. The new alpha is the union of the applied
/// source alpha and the destination alpha.
pub(crate) struct AdditionSaiCompositor<P> {
    _policy: PhantomData<fn() -> P>,
}

impl<P> AdditionSaiCompositor<P> {
    pub(crate) fn new() -> Self {
        Self {
            _policy: PhantomData,
        }
    }
}

impl<T: Channel, P: ClampPolicy<T>> PixelCompositor<T> for AdditionSaiCompositor<P> {
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
        let new_alpha = if ctx.alpha_locked {
            dst_alpha
        } else {
            union_shape_opacity(applied, dst_alpha)
        };
        if new_alpha == T::ZERO {
            return new_alpha;
        }
        for i in 0..ctx.channel_count {
            if ctx.writes(i) {
                dst[i] = addition_sai::<T, P>(src[i], applied, dst[i]);
            }
        }
        new_alpha
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/generic.rs"]
mod tests;
