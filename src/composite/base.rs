//! Generic row loop shared by every channel-indexed compositor.

use std::marker::PhantomData;

use crate::channel::{Channel, scale_opacity};
use crate::composite::CompositeOp;
use crate::composite::params::CompositeParams;
use crate::foundation::core::{ChannelFlags, MAX_CHANNELS, PixelFormat};
use crate::registry::modes::CompositeMode;

/// Per-call state fixed for every pixel of one composite call.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PixelContext<T: Channel> {
    pub(crate) opacity: T,
    pub(crate) flow: T,
    pub(crate) average_opacity: T,
    pub(crate) alpha_locked: bool,
    pub(crate) all_channels: bool,
    pub(crate) flags: ChannelFlags,
    pub(crate) alpha_pos: Option<usize>,
    pub(crate) rgb_pos: Option<[usize; 3]>,
    pub(crate) channel_count: usize,
}

impl<T: Channel> PixelContext<T> {
    pub(crate) fn new(format: PixelFormat, params: &CompositeParams<'_>) -> Self {
        Self {
            opacity: scale_opacity::<T>(params.opacity),
            flow: scale_opacity::<T>(params.flow),
            average_opacity: scale_opacity::<T>(params.average_opacity()),
            alpha_locked: params.channel_flags.alpha_locked(format),
            all_channels: params.channel_flags.is_all(format.channel_count),
            flags: params.channel_flags,
            alpha_pos: format.alpha_pos,
            rgb_pos: format.rgb_pos,
            channel_count: format.channel_count,
        }
    }

    pub(crate) fn is_color(&self, channel: usize) -> bool {
        Some(channel) != self.alpha_pos
    }

    /// Return `true` when `channel` is a color channel this call may write.
    pub(crate) fn writes(&self, channel: usize) -> bool {
        self.is_color(channel) && (self.all_channels || self.flags.contains(channel))
    }

    /// Zero the color channels this call may not write. Used when a transparent destination
    /// gains coverage, since its color was undefined.
    pub(crate) fn nullify_unwritten(&self, dst: &mut [T]) {
        if self.all_channels {
            return;
        }
        for (i, d) in dst.iter_mut().enumerate() {
            if self.is_color(i) && !self.flags.contains(i) {
                *d = T::ZERO;
            }
        }
    }

    /// Copy every writable color channel from `src`.
    pub(crate) fn copy_colors(&self, src: &[T], dst: &mut [T]) {
        for i in 0..self.channel_count {
            if self.writes(i) {
                dst[i] = src[i];
            }
        }
    }
}

/// A per-pixel compositing strategy driven by [`composite_rows`].
pub(crate) trait PixelCompositor<T: Channel>: Send + Sync + 'static {
    /// Adjust the per-call context before the first pixel.
    fn prepare(&self, _ctx: &mut PixelContext<T>) {}

    /// Compose one pixel. `src_alpha` and `dst_alpha` are the stored alphas (`UNIT` for
    /// alpha-less formats), `mask_alpha` the scaled mask byte. Color channels of `dst` are
    /// updated in place; the return value is the new destination alpha.
    fn composite_pixel(
        &self,
        src: &[T],
        src_alpha: T,
        dst: &mut [T],
        dst_alpha: T,
        mask_alpha: T,
        ctx: &PixelContext<T>,
    ) -> T;
}

fn read_pixel<T: Channel>(bytes: &[u8], out: &mut [T]) {
    for (i, c) in out.iter_mut().enumerate() {
        *c = T::read(&bytes[i * T::BYTES..]);
    }
}

fn write_pixel<T: Channel>(px: &[T], bytes: &mut [u8]) {
    for (i, c) in px.iter().enumerate() {
        c.write(&mut bytes[i * T::BYTES..]);
    }
}

/// Walk every pixel of `params` and hand it to `compositor`.
pub(crate) fn composite_rows<T: Channel, C: PixelCompositor<T>>(
    compositor: &C,
    format: PixelFormat,
    params: &mut CompositeParams<'_>,
) {
    let mut ctx = PixelContext::<T>::new(format, params);
    if ctx.opacity == T::ZERO || params.rows == 0 || params.cols == 0 {
        return;
    }
    compositor.prepare(&mut ctx);

    let n = format.channel_count;
    let px = format.pixel_bytes();
    let src_inc = if params.src_row_stride == 0 { 0 } else { px };

    let mut src_px = [T::ZERO; MAX_CHANNELS];
    let mut dst_px = [T::ZERO; MAX_CHANNELS];

    for row in 0..params.rows {
        let src_row = row * params.src_row_stride;
        let dst_row = row * params.dst_row_stride;
        let mask_row = params.mask.map(|m| &m[row * params.mask_row_stride..]);

        for col in 0..params.cols {
            let s = &params.src[src_row + col * src_inc..][..px];
            let d = &mut params.dst[dst_row + col * px..][..px];
            read_pixel(s, &mut src_px[..n]);
            read_pixel(d, &mut dst_px[..n]);

            let src_alpha = ctx.alpha_pos.map_or(T::UNIT, |a| src_px[a]);
            let dst_alpha = ctx.alpha_pos.map_or(T::UNIT, |a| dst_px[a]);
            if ctx.alpha_locked && dst_alpha == T::ZERO {
                continue;
            }
            let mask_alpha = mask_row.map_or(T::UNIT, |m| T::from_mask(m[col]));

            let new_alpha = compositor.composite_pixel(
                &src_px[..n],
                src_alpha,
                &mut dst_px[..n],
                dst_alpha,
                mask_alpha,
                &ctx,
            );
            if let Some(a) = ctx.alpha_pos {
                dst_px[a] = if ctx.alpha_locked { dst_alpha } else { new_alpha };
            }
            write_pixel(&dst_px[..n], d);
        }
    }
}

/// A [`CompositeOp`] backed by a [`PixelCompositor`] over channel type `T`.
pub(crate) struct GenericOp<T: Channel, C: PixelCompositor<T>> {
    mode: CompositeMode,
    format: PixelFormat,
    compositor: C,
    _channel: PhantomData<fn() -> T>,
}

impl<T: Channel, C: PixelCompositor<T>> GenericOp<T, C> {
    pub(crate) fn new(mode: CompositeMode, format: PixelFormat, compositor: C) -> Self {
        Self {
            mode,
            format,
            compositor,
            _channel: PhantomData,
        }
    }
}

impl<T: Channel, C: PixelCompositor<T>> CompositeOp for GenericOp<T, C> {
    fn mode(&self) -> CompositeMode {
        self.mode
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn composite(&self, params: &mut CompositeParams<'_>) {
        tracing::trace!(op = self.id(), rows = params.rows, cols = params.cols, "composite");
        composite_rows::<T, C>(&self.compositor, self.format, params);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/base.rs"]
mod tests;
