//! Parameters of one composite call.

use crate::foundation::core::{ChannelFlags, PixelFormat};
use crate::foundation::error::{CompositeError, CompositeResult};

/// Everything one composite call reads, plus the destination it writes.
///
/// Buffers are interleaved pixel rows addressed by byte strides. A source row stride of zero
/// broadcasts the first source pixel to every destination pixel. The mask holds one byte per
/// pixel; its row stride may also be zero to repeat the first mask row.
///
/// Geometry is the caller's contract. [`CompositeParams::validate`] checks it up front when the
/// caller wants a recoverable error instead of a panic on a short buffer.
#[derive(Debug)]
pub struct CompositeParams<'a> {
    /// Destination pixels, modified in place.
    pub dst: &'a mut [u8],
    /// Bytes between destination rows.
    pub dst_row_stride: usize,
    /// Source pixels.
    pub src: &'a [u8],
    /// Bytes between source rows, `0` to broadcast one pixel.
    pub src_row_stride: usize,
    /// Optional 8-bit coverage mask.
    pub mask: Option<&'a [u8]>,
    /// Bytes between mask rows.
    pub mask_row_stride: usize,
    /// Number of rows to composite.
    pub rows: usize,
    /// Number of pixels per row.
    pub cols: usize,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f32,
    /// Brush flow in `[0, 1]`, used by AlphaDarken.
    pub flow: f32,
    /// Average opacity of the current stroke, used by AlphaDarken. Defaults to `opacity`.
    pub last_opacity: Option<f32>,
    /// Channels this call may write.
    pub channel_flags: ChannelFlags,
}

impl<'a> CompositeParams<'a> {
    /// Full-strength, all-channel parameters without a mask.
    pub fn new(
        dst: &'a mut [u8],
        dst_row_stride: usize,
        src: &'a [u8],
        src_row_stride: usize,
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            dst,
            dst_row_stride,
            src,
            src_row_stride,
            mask: None,
            mask_row_stride: 0,
            rows,
            cols,
            opacity: 1.0,
            flow: 1.0,
            last_opacity: None,
            channel_flags: ChannelFlags::ALL,
        }
    }

    /// Attach a coverage mask.
    pub fn with_mask(mut self, mask: &'a [u8], mask_row_stride: usize) -> Self {
        self.mask = Some(mask);
        self.mask_row_stride = mask_row_stride;
        self
    }

    /// Set the layer opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the brush flow.
    pub fn with_flow(mut self, flow: f32) -> Self {
        self.flow = flow;
        self
    }

    /// Set the stroke's average opacity.
    pub fn with_last_opacity(mut self, last_opacity: f32) -> Self {
        self.last_opacity = Some(last_opacity);
        self
    }

    /// Restrict which channels may be written.
    pub fn with_channel_flags(mut self, flags: ChannelFlags) -> Self {
        self.channel_flags = flags;
        self
    }

    /// Average stroke opacity, falling back to `opacity`.
    pub fn average_opacity(&self) -> f32 {
        self.last_opacity.unwrap_or(self.opacity)
    }

    /// Check buffer sizes, strides and channel flags against `format`.
    pub fn validate(&self, format: PixelFormat) -> CompositeResult<()> {
        format.validate()?;
        self.channel_flags.validate(format)?;
        if self.rows == 0 || self.cols == 0 {
            return Ok(());
        }

        let row_bytes = self.cols * format.pixel_bytes();
        if self.dst_row_stride < row_bytes && self.rows > 1 {
            return Err(CompositeError::validation(format!(
                "destination row stride {} is shorter than a row of {row_bytes} bytes",
                self.dst_row_stride
            )));
        }
        let dst_needed = (self.rows - 1) * self.dst_row_stride + row_bytes;
        if self.dst.len() < dst_needed {
            return Err(CompositeError::validation(format!(
                "destination holds {} bytes, {dst_needed} needed",
                self.dst.len()
            )));
        }

        let src_needed = if self.src_row_stride == 0 {
            format.pixel_bytes()
        } else {
            if self.src_row_stride < row_bytes && self.rows > 1 {
                return Err(CompositeError::validation(format!(
                    "source row stride {} is shorter than a row of {row_bytes} bytes",
                    self.src_row_stride
                )));
            }
            (self.rows - 1) * self.src_row_stride + row_bytes
        };
        if self.src.len() < src_needed {
            return Err(CompositeError::validation(format!(
                "source holds {} bytes, {src_needed} needed",
                self.src.len()
            )));
        }

        if let Some(mask) = self.mask {
            let mask_needed = (self.rows - 1) * self.mask_row_stride + self.cols;
            if mask.len() < mask_needed {
                return Err(CompositeError::validation(format!(
                    "mask holds {} bytes, {mask_needed} needed",
                    mask.len()
                )));
            }
        }

        for (name, v) in [("opacity", self.opacity), ("flow", self.flow)] {
            if !v.is_finite() {
                return Err(CompositeError::validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}
