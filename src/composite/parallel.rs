//! Strip-parallel driver.
//!
//! The destination is cut into disjoint horizontal strips and every strip is composited by the
//! same op on a rayon pool. Each strip is an ordinary composite call, so results match a single
//! serial call byte for byte.

use rayon::prelude::*;

use crate::composite::CompositeOp;
use crate::composite::params::CompositeParams;
use crate::foundation::error::{CompositeError, CompositeResult};

/// Build the rayon pool used by [`composite_parallel`]. `None` uses rayon's default size.
pub fn build_thread_pool(threads: Option<usize>) -> CompositeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CompositeError::config(
            "parallel compositing 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CompositeError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

/// Composite `params` in strips of `strip_rows` rows on `pool`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(op = op.id(), rows = params.rows, cols = params.cols, strip_rows = strip_rows)
)]
pub fn composite_parallel(
    op: &dyn CompositeOp,
    params: &mut CompositeParams<'_>,
    pool: &rayon::ThreadPool,
    strip_rows: usize,
) -> CompositeResult<()> {
    if strip_rows == 0 {
        return Err(CompositeError::validation("strip_rows must be >= 1"));
    }
    if params.rows == 0 || params.cols == 0 {
        return Ok(());
    }
    if params.rows <= strip_rows || params.dst_row_stride == 0 {
        op.composite(params);
        return Ok(());
    }

    let rows = params.rows;
    let cols = params.cols;
    let dst_stride = params.dst_row_stride;
    let src = params.src;
    let src_stride = params.src_row_stride;
    let mask = params.mask;
    let mask_stride = params.mask_row_stride;
    let opacity = params.opacity;
    let flow = params.flow;
    let last_opacity = params.last_opacity;
    let flags = params.channel_flags;

    let strips = rows.div_ceil(strip_rows);
    let dst_len = params.dst.len().min(strips * strip_rows * dst_stride);
    let dst = &mut params.dst[..dst_len];

    pool.install(|| {
        dst.par_chunks_mut(strip_rows * dst_stride)
            .enumerate()
            .for_each(|(i, strip)| {
                let row0 = i * strip_rows;
                let mut sub = CompositeParams {
                    dst: strip,
                    dst_row_stride: dst_stride,
                    src: &src[row0 * src_stride..],
                    src_row_stride: src_stride,
                    mask: mask.map(|m| &m[row0 * mask_stride..]),
                    mask_row_stride: mask_stride,
                    rows: strip_rows.min(rows - row0),
                    cols,
                    opacity,
                    flow,
                    last_opacity,
                    channel_flags: flags,
                };
                op.composite(&mut sub);
            });
    });
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composite/parallel.rs"]
mod tests;
