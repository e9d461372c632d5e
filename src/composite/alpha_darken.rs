//! AlphaDarken: the painting mode that caps repeated dabs of one stroke at the stroke opacity.
//!
//! Colors blend as in source-over. The new alpha is computed twice: once as if flow were one
//! ("full flow") and once from the current alphas only ("zero flow"), then interpolated by flow.
//! How opacity, average opacity and the zero-flow alpha are derived is a strategy
//! ([`AlphaDarkenParams`]).

use std::marker::PhantomData;

use crate::channel::{Channel, union_shape_opacity};
use crate::composite::base::{PixelCompositor, PixelContext};

/// Parameter strategy for AlphaDarken.
pub trait AlphaDarkenParams: Send + Sync + 'static {
    /// Stable strategy name.
    const NAME: &'static str;

    /// Effective opacity from layer opacity and flow.
    fn opacity<T: Channel>(opacity: T, flow: T) -> T;

    /// Effective average opacity from the stroke's last opacity and flow.
    fn average_opacity<T: Channel>(last_opacity: T, flow: T) -> T;

    /// Alpha reached when flow is zero.
    fn zero_flow_alpha<T: Channel>(src_alpha: T, dst_alpha: T) -> T;
}

/// "Hard" strategy: flow scales both opacities; zero flow unions source and destination.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaDarkenHard;

/// "Creamy" strategy: opacities are used as given; zero flow keeps the destination alpha.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaDarkenCreamy;

impl AlphaDarkenParams for AlphaDarkenHard {
    const NAME: &'static str = "hard";

    fn opacity<T: Channel>(opacity: T, flow: T) -> T {
        flow.mul(opacity)
    }

    fn average_opacity<T: Channel>(last_opacity: T, flow: T) -> T {
        flow.mul(last_opacity)
    }

    fn zero_flow_alpha<T: Channel>(src_alpha: T, dst_alpha: T) -> T {
        union_shape_opacity(src_alpha, dst_alpha)
    }
}

impl AlphaDarkenParams for AlphaDarkenCreamy {
    const NAME: &'static str = "creamy";

    fn opacity<T: Channel>(opacity: T, _flow: T) -> T {
        opacity
    }

    fn average_opacity<T: Channel>(last_opacity: T, _flow: T) -> T {
        last_opacity
    }

    fn zero_flow_alpha<T: Channel>(_src_alpha: T, dst_alpha: T) -> T {
        dst_alpha
    }
}

/// Alpha reached at full flow.
pub(crate) fn full_flow_alpha<T: Channel>(
    src_alpha: T,
    mask_alpha: T,
    dst_alpha: T,
    opacity: T,
    average_opacity: T,
) -> T {
    if average_opacity > opacity {
        if average_opacity > dst_alpha {
            let reverse_blend = T::clamp_wide(dst_alpha.div(average_opacity));
            src_alpha.lerp(average_opacity, reverse_blend)
        } else {
            dst_alpha
        }
    } else if opacity > dst_alpha {
        dst_alpha.lerp(opacity, mask_alpha)
    } else {
        dst_alpha
    }
}

/// New alpha for one pixel: the full-flow alpha, pulled toward the zero-flow alpha as flow
/// drops. `applied` is the source alpha after mask and opacity, `msk` after mask only.
pub(crate) fn alpha_darken_alpha<T: Channel, W: AlphaDarkenParams>(
    applied: T,
    msk: T,
    dst_alpha: T,
    opacity: T,
    average_opacity: T,
    flow: T,
) -> T {
    let full = full_flow_alpha(applied, msk, dst_alpha, opacity, average_opacity);
    if flow == T::UNIT {
        return full;
    }
    W::zero_flow_alpha(applied, dst_alpha).lerp(full, flow)
}

pub(crate) struct AlphaDarkenCompositor<W: AlphaDarkenParams> {
    _params: PhantomData<fn() -> W>,
}

impl<W: AlphaDarkenParams> AlphaDarkenCompositor<W> {
    pub(crate) fn new() -> Self {
        Self {
            _params: PhantomData,
        }
    }
}

impl<T: Channel, W: AlphaDarkenParams> PixelCompositor<T> for AlphaDarkenCompositor<W> {
    fn prepare(&self, ctx: &mut PixelContext<T>) {
        let opacity = W::opacity(ctx.opacity, ctx.flow);
        let average = W::average_opacity(ctx.average_opacity, ctx.flow);
        ctx.opacity = opacity;
        ctx.average_opacity = average;
    }

    fn composite_pixel(
        &self,
        src: &[T],
        src_alpha: T,
        dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T {
        let msk = mask_alpha.mul(src_alpha);
        let src_alpha = msk.mul(ctx.opacity);
        if src_alpha == T::ZERO {
            return dst_alpha;
        }

        if dst_alpha == T::ZERO {
            ctx.nullify_unwritten(dst);
            ctx.copy_colors(src, dst);
        } else {
            for i in 0..ctx.channel_count {
                if ctx.writes(i) {
                    dst[i] = dst[i].lerp(src[i], src_alpha);
                }
            }
        }

        alpha_darken_alpha::<T, W>(
            src_alpha,
            msk,
            dst_alpha,
            ctx.opacity,
            ctx.average_opacity,
            ctx.flow,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/alpha_darken.rs"]
mod tests;
