use super::*;
use crate::composite::fixed::Fixed4;
use crate::composite::fixed::kernels::{CopyKernel, OverKernel};

fn pattern(len: usize, seed: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 37 + seed * 101 + 11) % 256) as u8).collect()
}

fn full<T: Channel>() -> Uniforms<T> {
    Uniforms {
        opacity: T::UNIT,
        flow: T::UNIT,
        average_opacity: T::UNIT,
    }
}

#[test]
fn leading_pixels_reach_alignment() {
    assert_eq!(leading_pixels(0, 4, 100), 0);
    assert_eq!(leading_pixels(4, 4, 100), 7);
    assert_eq!(leading_pixels(16, 16, 100), 1);
    assert_eq!(leading_pixels(4, 4, 3), 3);
}

#[test]
fn unalignable_rows_have_no_lead() {
    assert_eq!(leading_pixels(2, 4, 100), 0);
    assert_eq!(leading_pixels(8, 16, 100), 0);
}

#[test]
fn row_split_covers_every_pixel() {
    let split = RowSplit::new(36, 4, 20, true);
    assert_eq!(
        split,
        RowSplit {
            lead: 7,
            batches: 1,
            tail: 5
        }
    );
    for cols in 0..40 {
        for addr in [0usize, 4, 12, 28, 33] {
            let s = RowSplit::new(addr, 4, cols, true);
            assert_eq!(s.lead + s.batches * LANES + s.tail, cols);
            assert!(s.tail < LANES);
        }
    }
}

#[test]
fn scalar_only_split_when_not_vectorized() {
    assert_eq!(
        RowSplit::new(36, 4, 20, false),
        RowSplit {
            lead: 20,
            batches: 0,
            tail: 0
        }
    );
}

#[test]
fn batched_and_scalar_rows_match_on_unaligned_buffers() {
    let (rows, cols, px) = (3, 21, 4);
    let stride = cols * px + 4;
    let src = pattern(rows * stride, 1);
    let mask = pattern(rows * cols, 2);
    let base = pattern(rows * stride + 8, 3);

    for offset in [0usize, 4, 8] {
        let mut scalar = base.clone();
        let mut batched = base.clone();
        let mut outputs = Vec::new();
        for (buf, vectorize) in [(&mut scalar, false), (&mut batched, true)] {
            let mut params = CompositeParams::new(
                &mut buf[offset..offset + rows * stride],
                stride,
                &src,
                stride,
                rows,
                cols,
            )
            .with_mask(&mask, cols);
            let u = Uniforms {
                opacity: 191,
                ..full::<u8>()
            };
            composite_rows::<Fixed4<u8>, OverKernel>(&OverKernel, &u, &mut params, vectorize);
            outputs.push(buf.clone());
        }
        assert_eq!(outputs[0], outputs[1], "offset {offset}");
        assert_ne!(outputs[0], base);
    }
}

#[test]
fn broadcast_source_reuses_one_pixel() {
    let (rows, cols) = (2, 19);
    let src = [12u8, 34, 56, 78];
    let mut dst = vec![0u8; rows * cols * 4];
    let mut params = CompositeParams::new(&mut dst, cols * 4, &src, 0, rows, cols);
    composite_rows::<Fixed4<u8>, CopyKernel>(&CopyKernel, &full::<u8>(), &mut params, true);
    for p in dst.chunks_exact(4) {
        assert_eq!(p, &src);
    }
}

#[test]
fn float_rows_match_between_paths() {
    let (rows, cols) = (2, 13);
    let stride = cols * 16;
    let to_bytes = |v: Vec<f32>| -> Vec<u8> { v.iter().flat_map(|c| c.to_ne_bytes()).collect() };
    let src = to_bytes((0..rows * cols * 4).map(|i| (i % 7) as f32 / 6.0).collect());
    let base = to_bytes((0..rows * cols * 4).map(|i| (i % 5) as f32 / 4.0).collect());

    let mut a = base.clone();
    let mut b = base.clone();
    for (buf, vectorize) in [(&mut a, false), (&mut b, true)] {
        let mut params = CompositeParams::new(buf, stride, &src, stride, rows, cols);
        let u = full::<f32>();
        composite_rows::<Fixed4<f32>, OverKernel>(&OverKernel, &u, &mut params, vectorize);
    }
    assert_eq!(a, b);
}
