//! Fixed-format compositors for four-channel pixels with alpha last.
//!
//! Pixels are loaded into structure-of-arrays lanes of their storage type, composed by a
//! [`LaneKernel`] and stored back. Kernels use the same channel arithmetic as the generic
//! compositors, so a fixed op and its generic twin write identical bytes. The same kernel runs
//! with one lane for the scalar path and with [`driver::LANES`] lanes for the batched path.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::channel::{Channel, scale_opacity};
use crate::composite::CompositeOp;
use crate::composite::params::CompositeParams;
use crate::foundation::core::PixelFormat;
use crate::registry::modes::CompositeMode;

pub(crate) mod driver;
pub(crate) mod kernels;

/// `N` pixels in structure-of-arrays form: three color planes and one alpha plane.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Lanes<T: Channel, const N: usize> {
    pub(crate) c: [[T; N]; 3],
    pub(crate) a: [T; N],
}

impl<T: Channel, const N: usize> Default for Lanes<T, N> {
    fn default() -> Self {
        Self {
            c: [[T::ZERO; N]; 3],
            a: [T::ZERO; N],
        }
    }
}

/// Physical layout of a four-channel, alpha-last pixel.
pub(crate) trait FixedLayout: Send + Sync + 'static {
    type Storage: Channel;
    const PIXEL_BYTES: usize;

    /// Load `N` consecutive pixels from `bytes`.
    fn load<const N: usize>(bytes: &[u8], out: &mut Lanes<Self::Storage, N>);

    /// Store `N` consecutive pixels into `bytes`.
    fn store<const N: usize>(lanes: &Lanes<Self::Storage, N>, bytes: &mut [u8]);
}

/// Four channels of `T`: 32-bit (`u8`), 64-bit (`u16`) or 128-bit (`f32`) pixels.
pub(crate) struct Fixed4<T: Channel>(PhantomData<fn() -> T>);

impl<T: Channel> FixedLayout for Fixed4<T> {
    type Storage = T;
    const PIXEL_BYTES: usize = 4 * T::BYTES;

    fn load<const N: usize>(bytes: &[u8], out: &mut Lanes<T, N>) {
        for i in 0..N {
            let px = &bytes[i * Self::PIXEL_BYTES..];
            for (k, plane) in out.c.iter_mut().enumerate() {
                plane[i] = T::read(&px[k * T::BYTES..]);
            }
            out.a[i] = T::read(&px[3 * T::BYTES..]);
        }
    }

    fn store<const N: usize>(lanes: &Lanes<T, N>, bytes: &mut [u8]) {
        for i in 0..N {
            let px = &mut bytes[i * Self::PIXEL_BYTES..];
            for (k, plane) in lanes.c.iter().enumerate() {
                plane[i].write(&mut px[k * T::BYTES..]);
            }
            lanes.a[i].write(&mut px[3 * T::BYTES..]);
        }
    }
}

/// Scalars shared by every lane of one call, quantized to the storage type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Uniforms<T: Channel> {
    pub(crate) opacity: T,
    pub(crate) flow: T,
    pub(crate) average_opacity: T,
}

impl<T: Channel> Uniforms<T> {
    pub(crate) fn new(params: &CompositeParams<'_>) -> Self {
        Self {
            opacity: scale_opacity::<T>(params.opacity),
            flow: scale_opacity::<T>(params.flow),
            average_opacity: scale_opacity::<T>(params.average_opacity()),
        }
    }
}

/// A compositing formula over lanes of `T`.
pub(crate) trait LaneKernel<T: Channel>: Send + Sync + 'static {
    /// Adjust the call uniforms before the first pixel.
    fn prepare(&self, _u: &mut Uniforms<T>) {}

    /// Compose `src` onto `dst` lane by lane. `mask` holds the scaled coverage per lane.
    fn apply<const N: usize>(
        &self,
        src: &Lanes<T, N>,
        dst: &mut Lanes<T, N>,
        mask: &[T; N],
        u: &Uniforms<T>,
    );
}

/// A fixed-format compositor with a generic twin for calls it cannot serve.
pub(crate) struct FixedOp<L: FixedLayout, K: LaneKernel<L::Storage>> {
    mode: CompositeMode,
    format: PixelFormat,
    kernel: K,
    fallback: Arc<dyn CompositeOp>,
    vectorize: bool,
    _layout: PhantomData<fn() -> L>,
}

impl<L: FixedLayout, K: LaneKernel<L::Storage>> FixedOp<L, K> {
    pub(crate) fn new(
        mode: CompositeMode,
        format: PixelFormat,
        kernel: K,
        fallback: Arc<dyn CompositeOp>,
        vectorize: bool,
    ) -> Self {
        Self {
            mode,
            format,
            kernel,
            fallback,
            vectorize,
            _layout: PhantomData,
        }
    }
}

impl<L: FixedLayout, K: LaneKernel<L::Storage>> CompositeOp for FixedOp<L, K> {
    fn mode(&self) -> CompositeMode {
        self.mode
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn composite(&self, params: &mut CompositeParams<'_>) {
        if !params.channel_flags.is_all(self.format.channel_count) {
            tracing::trace!(op = self.id(), "partial channel flags, using generic compositor");
            self.fallback.composite(params);
            return;
        }

        let mut u = Uniforms::<L::Storage>::new(params);
        if u.opacity == L::Storage::ZERO || params.rows == 0 || params.cols == 0 {
            return;
        }
        self.kernel.prepare(&mut u);

        tracing::trace!(
            op = self.id(),
            rows = params.rows,
            cols = params.cols,
            vectorize = self.vectorize,
            "composite"
        );
        driver::composite_rows::<L, K>(&self.kernel, &u, params, self.vectorize);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/composite/fixed.rs"]
mod tests;
