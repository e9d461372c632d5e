use super::*;
use crate::composite::alpha_darken::{AlphaDarkenCreamy, AlphaDarkenHard};

fn uniforms(opacity: u8, flow: u8) -> Uniforms<u8> {
    Uniforms {
        opacity,
        flow,
        average_opacity: opacity,
    }
}

fn lanes<const N: usize>(px: [[u8; 4]; N]) -> Lanes<u8, N> {
    let mut l = Lanes::<u8, N>::default();
    for (i, p) in px.iter().enumerate() {
        for k in 0..3 {
            l.c[k][i] = p[k];
        }
        l.a[i] = p[3];
    }
    l
}

fn pixel<const N: usize>(l: &Lanes<u8, N>, i: usize) -> [u8; 4] {
    [l.c[0][i], l.c[1][i], l.c[2][i], l.a[i]]
}

#[test]
fn over_onto_opaque_keeps_full_alpha() {
    let src = lanes([[255, 128, 0, 77]]);
    let mut dst = lanes([[0, 128, 255, 255]]);
    OverKernel.apply(&src, &mut dst, &[255], &uniforms(255, 255));
    assert_eq!(pixel(&dst, 0), [77, 128, 178, 255]);
}

#[test]
fn over_partial_alphas_union() {
    let src = lanes([[255, 255, 255, 128]]);
    let mut dst = lanes([[0, 0, 0, 128]]);
    OverKernel.apply(&src, &mut dst, &[255], &uniforms(255, 255));
    assert_eq!(pixel(&dst, 0), [170, 170, 170, 192]);
}

#[test]
fn over_masked_lane_is_untouched() {
    let src = lanes([[255; 4], [255; 4]]);
    let mut dst = lanes([[51, 51, 51, 102], [51, 51, 51, 102]]);
    OverKernel.apply(&src, &mut dst, &[0, 255], &uniforms(255, 255));
    assert_eq!(pixel(&dst, 0), [51, 51, 51, 102]);
    assert_eq!(pixel(&dst, 1), [255; 4]);
}

#[test]
fn copy_full_opacity_replaces_alpha() {
    let src = lanes([[25, 51, 76, 64]]);
    let mut dst = lanes([[230, 230, 230, 255]]);
    CopyKernel.apply(&src, &mut dst, &[255], &uniforms(255, 255));
    assert_eq!(pixel(&dst, 0), [25, 51, 76, 64]);
}

#[test]
fn copy_half_opacity_with_transparent_source_keeps_color() {
    let src = lanes([[0; 4]]);
    let mut dst = lanes([[102, 102, 102, 255]]);
    CopyKernel.apply(&src, &mut dst, &[255], &uniforms(128, 255));
    assert_eq!(pixel(&dst, 0), [102, 102, 102, 127]);
}

#[test]
fn alpha_darken_prepare_applies_strategy() {
    let mut u = uniforms(204, 128);
    LaneKernel::<u8>::prepare(&AlphaDarkenKernel::<AlphaDarkenHard>::new(), &mut u);
    assert_eq!(u.opacity, 102);
    assert_eq!(u.average_opacity, 102);

    let mut u = uniforms(204, 128);
    LaneKernel::<u8>::prepare(&AlphaDarkenKernel::<AlphaDarkenCreamy>::new(), &mut u);
    assert_eq!(u.opacity, 204);
}

#[test]
fn alpha_darken_caps_at_opacity() {
    let k = AlphaDarkenKernel::<AlphaDarkenCreamy>::new();
    let mut u = uniforms(128, 255);
    k.prepare(&mut u);
    let src = lanes([[255; 4]]);
    let mut dst = lanes([[0; 4]]);
    for _ in 0..4 {
        k.apply(&src, &mut dst, &[255], &u);
    }
    assert_eq!(dst.a[0], 128);
    assert_eq!(dst.c[0][0], 255);
}

#[test]
fn batched_and_single_lanes_agree() {
    let px = [
        [25, 51, 76, 0],
        [128, 128, 128, 128],
        [230, 25, 102, 255],
        [77, 178, 51, 64],
    ];
    let src = lanes([
        [255, 0, 128, 153],
        [51, 102, 153, 255],
        [0, 0, 0, 77],
        [204, 204, 204, 0],
    ]);
    let mask = [255, 128, 64, 255];
    let u = uniforms(178, 255);

    let mut batch = lanes(px);
    OverKernel.apply(&src, &mut batch, &mask, &u);
    for i in 0..4 {
        let s = lanes([pixel(&src, i)]);
        let mut d = lanes([px[i]]);
        OverKernel.apply(&s, &mut d, &[mask[i]], &u);
        assert_eq!(pixel(&d, 0), pixel(&batch, i));
    }
}

#[test]
fn float_lanes_use_channel_arithmetic() {
    let mut src = Lanes::<f32, 1>::default();
    let mut dst = Lanes::<f32, 1>::default();
    src.c[0][0] = 1.0;
    src.a[0] = 0.5;
    dst.a[0] = 0.5;
    let u = Uniforms {
        opacity: 1.0f32,
        flow: 1.0,
        average_opacity: 1.0,
    };
    OverKernel.apply(&src, &mut dst, &[1.0], &u);
    assert!((dst.a[0] - 0.75).abs() < 1e-6);
    assert!((dst.c[0][0] - 2.0 / 3.0).abs() < 1e-6);
}
