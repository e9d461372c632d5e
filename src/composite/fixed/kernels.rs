//! Lane kernels for Over, Copy and AlphaDarken.
//!
//! Each kernel is written as a per-lane loop over fixed-size arrays so the compiler can keep
//! the batched instantiation in vector registers. The per-pixel decisions come from the same
//! step functions the generic compositors use.

use std::marker::PhantomData;

use crate::channel::Channel;
use crate::composite::alpha::{ColorStep, copy_channel, copy_step, over_step};
use crate::composite::alpha_darken::{AlphaDarkenParams, alpha_darken_alpha};

use super::{LaneKernel, Lanes, Uniforms};

/// Source-over.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct OverKernel;

impl<T: Channel> LaneKernel<T> for OverKernel {
    fn apply<const N: usize>(
        &self,
        src: &Lanes<T, N>,
        dst: &mut Lanes<T, N>,
        mask: &[T; N],
        u: &Uniforms<T>,
    ) {
        for i in 0..N {
            let applied = src.a[i].mul3(mask[i], u.opacity);
            let (step, new_alpha) = over_step(applied, dst.a[i]);
            match step {
                ColorStep::Keep => continue,
                ColorStep::Replace => {
                    for k in 0..3 {
                        dst.c[k][i] = src.c[k][i];
                    }
                }
                ColorStep::Mix(w) => {
                    for k in 0..3 {
                        dst.c[k][i] = dst.c[k][i].lerp(src.c[k][i], w);
                    }
                }
            }
            dst.a[i] = new_alpha;
        }
    }
}

/// Opacity-weighted replacement, alpha included.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CopyKernel;

impl<T: Channel> LaneKernel<T> for CopyKernel {
    fn apply<const N: usize>(
        &self,
        src: &Lanes<T, N>,
        dst: &mut Lanes<T, N>,
        mask: &[T; N],
        u: &Uniforms<T>,
    ) {
        for i in 0..N {
            let op = u.opacity.mul(mask[i]);
            let (sa, da) = (src.a[i], dst.a[i]);
            let (step, new_alpha) = copy_step(op, sa, da);
            match step {
                ColorStep::Keep => {}
                ColorStep::Replace => {
                    for k in 0..3 {
                        dst.c[k][i] = src.c[k][i];
                    }
                }
                ColorStep::Mix(op) => {
                    for k in 0..3 {
                        dst.c[k][i] = copy_channel(src.c[k][i], sa, dst.c[k][i], da, op, new_alpha);
                    }
                }
            }
            dst.a[i] = new_alpha;
        }
    }
}

/// AlphaDarken with parameter strategy `W`.
pub(crate) struct AlphaDarkenKernel<W: AlphaDarkenParams>(PhantomData<fn() -> W>);

impl<W: AlphaDarkenParams> AlphaDarkenKernel<W> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Channel, W: AlphaDarkenParams> LaneKernel<T> for AlphaDarkenKernel<W> {
    fn prepare(&self, u: &mut Uniforms<T>) {
        let opacity = W::opacity(u.opacity, u.flow);
        let average = W::average_opacity(u.average_opacity, u.flow);
        u.opacity = opacity;
        u.average_opacity = average;
    }

    fn apply<const N: usize>(
        &self,
        src: &Lanes<T, N>,
        dst: &mut Lanes<T, N>,
        mask: &[T; N],
        u: &Uniforms<T>,
    ) {
        for i in 0..N {
            let msk = mask[i].mul(src.a[i]);
            let applied = msk.mul(u.opacity);
            if applied == T::ZERO {
                continue;
            }
            let da = dst.a[i];

            if da == T::ZERO {
                for k in 0..3 {
                    dst.c[k][i] = src.c[k][i];
                }
            } else {
                for k in 0..3 {
                    dst.c[k][i] = dst.c[k][i].lerp(src.c[k][i], applied);
                }
            }

            dst.a[i] = alpha_darken_alpha::<T, W>(
                applied,
                msk,
                da,
                u.opacity,
                u.average_opacity,
                u.flow,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/composite/kernels.rs"]
mod tests;
