//! Row driver for fixed-format compositors.
//!
//! Each row is split into leading scalar pixels up to the next [`ALIGN_BYTES`] boundary of the
//! destination, full batches of [`LANES`] pixels, and a scalar tail. A broadcast source (row
//! stride zero) is replicated into a small buffer once per call so batches can read it like a
//! regular row.

use smallvec::SmallVec;

use crate::channel::Channel;
use crate::composite::params::CompositeParams;

use super::{FixedLayout, LaneKernel, Lanes, Uniforms};

/// Pixels per batch.
pub(crate) const LANES: usize = 8;
/// Destination alignment the batched path aims for.
pub(crate) const ALIGN_BYTES: usize = 32;

/// Pixels to process one at a time before the destination reaches alignment.
///
/// Returns zero when the row can never align (the misalignment is not a whole number of
/// pixels).
pub(crate) fn leading_pixels(misalign: usize, pixel_bytes: usize, cols: usize) -> usize {
    if misalign % pixel_bytes != 0 {
        return 0;
    }
    (((ALIGN_BYTES - misalign) % ALIGN_BYTES) / pixel_bytes).min(cols)
}

/// How a row splits into leading scalar, batched and trailing scalar pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowSplit {
    pub(crate) lead: usize,
    pub(crate) batches: usize,
    pub(crate) tail: usize,
}

impl RowSplit {
    pub(crate) fn new(dst_addr: usize, pixel_bytes: usize, cols: usize, vectorize: bool) -> Self {
        if !vectorize {
            return Self {
                lead: cols,
                batches: 0,
                tail: 0,
            };
        }
        let lead = leading_pixels(dst_addr % ALIGN_BYTES, pixel_bytes, cols);
        let rest = cols - lead;
        Self {
            lead,
            batches: rest / LANES,
            tail: rest % LANES,
        }
    }
}

fn run<L: FixedLayout, K: LaneKernel<L::Storage>, const N: usize>(
    kernel: &K,
    u: &Uniforms<L::Storage>,
    src: &[u8],
    dst: &mut [u8],
    mask: Option<&[u8]>,
) {
    let mut s = Lanes::<L::Storage, N>::default();
    let mut d = Lanes::<L::Storage, N>::default();
    let mut m = [L::Storage::UNIT; N];
    L::load(src, &mut s);
    L::load(dst, &mut d);
    if let Some(mask) = mask {
        for (v, &b) in m.iter_mut().zip(mask) {
            *v = L::Storage::from_mask(b);
        }
    }
    kernel.apply(&s, &mut d, &m, u);
    L::store(&d, dst);
}

/// Composite every row of `params` with `kernel`.
pub(crate) fn composite_rows<L: FixedLayout, K: LaneKernel<L::Storage>>(
    kernel: &K,
    u: &Uniforms<L::Storage>,
    params: &mut CompositeParams<'_>,
    vectorize: bool,
) {
    let px = L::PIXEL_BYTES;
    let broadcast = params.src_row_stride == 0;

    let mut broadcast_buf = SmallVec::<[u8; 128]>::new();
    if broadcast {
        let pixel = &params.src[..px];
        for _ in 0..LANES {
            broadcast_buf.extend_from_slice(pixel);
        }
    }

    for row in 0..params.rows {
        let dst_row = &mut params.dst[row * params.dst_row_stride..][..params.cols * px];
        let src_row = if broadcast {
            &broadcast_buf[..]
        } else {
            &params.src[row * params.src_row_stride..][..params.cols * px]
        };
        let mask_row = params
            .mask
            .map(|m| &m[row * params.mask_row_stride..][..params.cols]);

        let split = RowSplit::new(dst_row.as_ptr() as usize, px, params.cols, vectorize);
        let src_at = |col: usize| if broadcast { 0 } else { col * px };

        let mut col = 0;
        for _ in 0..split.lead {
            run::<L, K, 1>(
                kernel,
                u,
                &src_row[src_at(col)..],
                &mut dst_row[col * px..],
                mask_row.map(|m| &m[col..col + 1]),
            );
            col += 1;
        }
        for _ in 0..split.batches {
            run::<L, K, LANES>(
                kernel,
                u,
                &src_row[src_at(col)..],
                &mut dst_row[col * px..],
                mask_row.map(|m| &m[col..col + LANES]),
            );
            col += LANES;
        }
        for _ in 0..split.tail {
            run::<L, K, 1>(
                kernel,
                u,
                &src_row[src_at(col)..],
                &mut dst_row[col * px..],
                mask_row.map(|m| &m[col..col + 1]),
            );
            col += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/composite/driver.rs"]
mod tests;
