use super::*;
use crate::blend::SeparableMode;
use crate::channel::blending::SubtractiveBlending;
use crate::channel::clamp::{ClampFloatHdr, ClampFloatSdr, ClampInteger};
use crate::composite::params::CompositeParams;
use crate::foundation::core::{ChannelFlags, PixelFormat};

fn ctx<T: Channel>(format: PixelFormat, flags: ChannelFlags) -> PixelContext<T> {
    let mut dst = [0u8; 0];
    let src = [0u8; 0];
    let params = CompositeParams::new(&mut dst, 0, &src, 0, 0, 0).with_channel_flags(flags);
    PixelContext::new(format, &params)
}

fn multiply_u8() -> SeparableCompositor<u8> {
    SeparableCompositor::new(SeparableMode::Multiply.channel_fn::<u8, ClampInteger>())
}

fn run<T: Channel, C: PixelCompositor<T>>(
    c: &C,
    ctx: &PixelContext<T>,
    src: [T; 4],
    dst: &mut [T; 4],
) -> T {
    let (sa, da) = (src[3], dst[3]);
    c.composite_pixel(&src, sa, dst, da, T::UNIT, ctx)
}

#[test]
fn multiply_onto_opaque_destination() {
    let ctx = ctx::<u8>(PixelFormat::rgba8(), ChannelFlags::ALL);
    let mut dst = [100, 100, 100, 255];
    let alpha = run(&multiply_u8(), &ctx, [200, 200, 200, 255], &mut dst);
    assert_eq!(&dst[..3], &[78, 78, 78]);
    assert_eq!(alpha, 255);
}

#[test]
fn multiply_onto_half_covered_destination() {
    let ctx = ctx::<u8>(PixelFormat::rgba8(), ChannelFlags::ALL);
    let mut dst = [100, 100, 100, 128];
    let alpha = run(&multiply_u8(), &ctx, [200, 200, 200, 255], &mut dst);
    assert_eq!(alpha, 255);
    assert_eq!(&dst[..3], &[139, 139, 139]);
}

#[test]
fn transparent_destination_takes_source_color() {
    let ctx = ctx::<u8>(PixelFormat::rgba8(), ChannelFlags::ALL);
    let mut dst = [50, 60, 70, 0];
    let alpha = run(&multiply_u8(), &ctx, [200, 100, 0, 128], &mut dst);
    assert_eq!(&dst[..3], &[200, 100, 0]);
    assert_eq!(alpha, 128);
}

#[test]
fn zero_source_alpha_leaves_destination() {
    let ctx = ctx::<u8>(PixelFormat::rgba8(), ChannelFlags::ALL);
    let mut dst = [50, 60, 70, 90];
    let alpha = run(&multiply_u8(), &ctx, [200, 100, 0, 0], &mut dst);
    assert_eq!(dst, [50, 60, 70, 90]);
    assert_eq!(alpha, 90);
}

#[test]
fn partial_flags_on_transparent_destination_zero_unflagged_colors() {
    let ctx = ctx::<u8>(PixelFormat::rgba8(), ChannelFlags::from_channels(&[0, 3]));
    let mut dst = [50, 60, 70, 0];
    let alpha = run(&multiply_u8(), &ctx, [200, 100, 40, 255], &mut dst);
    assert_eq!(&dst[..3], &[200, 0, 0]);
    assert_eq!(alpha, 255);
}

#[test]
fn alpha_lock_blends_colors_and_returns_old_alpha() {
    let ctx = ctx::<u8>(
        PixelFormat::rgba8(),
        ChannelFlags::alpha_locked_for(PixelFormat::rgba8()),
    );
    let mut dst = [100, 100, 100, 128];
    let alpha = run(&multiply_u8(), &ctx, [200, 200, 200, 255], &mut dst);
    assert_eq!(&dst[..3], &[78, 78, 78]);
    assert_eq!(alpha, 128);
}

#[test]
fn float_dodge_follows_clamp_policy() {
    let ctx = ctx::<f32>(PixelFormat::rgba_f32(), ChannelFlags::ALL);
    let dodge = SeparableMode::ColorDodge;
    let hdr = SeparableCompositor::<f32>::new(dodge.channel_fn::<f32, ClampFloatHdr>());
    let sdr = SeparableCompositor::<f32>::new(dodge.channel_fn::<f32, ClampFloatSdr>());

    let mut dst = [0.8, 0.8, 0.8, 1.0];
    run(&hdr, &ctx, [0.5, 0.5, 0.5, 1.0], &mut dst);
    assert!((dst[0] - 1.6).abs() < 1e-6, "{dst:?}");

    let mut dst = [0.8, 0.8, 0.8, 1.0];
    run(&sdr, &ctx, [0.5, 0.5, 0.5, 1.0], &mut dst);
    assert_eq!(dst[0], 1.0);
}

#[test]
fn darker_color_picks_darker_pixel() {
    let ctx = ctx::<u8>(PixelFormat::rgba8(), ChannelFlags::ALL);
    let c = NonSeparableCompositor::new(RgbBlend::DarkerColor);
    let mut dst = [255, 255, 255, 255];
    let alpha = run(&c, &ctx, [10, 20, 30, 255], &mut dst);
    assert_eq!(dst, [10, 20, 30, 255]);
    assert_eq!(alpha, 255);
}

#[test]
fn non_separable_follows_rgb_positions() {
    let ctx = ctx::<u8>(PixelFormat::bgra8(), ChannelFlags::ALL);
    let c = NonSeparableCompositor::new(RgbBlend::LighterColor);
    let mut dst = [0, 0, 0, 255];
    run(&c, &ctx, [30, 20, 10, 255], &mut dst);
    assert_eq!(&dst[..3], &[30, 20, 10]);
}

#[test]
fn non_separable_without_rgb_is_a_no_op() {
    let ctx = ctx::<u8>(PixelFormat::graya8(), ChannelFlags::ALL);
    let c = NonSeparableCompositor::new(RgbBlend::DarkerColor);
    let mut dst = [90, 200];
    let alpha = c.composite_pixel(&[10, 255], 255, &mut dst, 200, 255, &ctx);
    assert_eq!(dst, [90, 200]);
    assert_eq!(alpha, 200);
}

#[test]
fn subtractive_multiply_adds_ink() {
    let ctx = ctx::<u8>(PixelFormat::cmyka8(), ChannelFlags::ALL);
    let c = SeparableCompositor::<u8, SubtractiveBlending>::new(
        SeparableMode::Multiply.channel_fn::<u8, ClampInteger>(),
    );
    let src = [100u8, 0, 255, 100, 255];
    let mut dst = [100u8, 0, 0, 100, 255];
    let alpha = c.composite_pixel(&src, 255, &mut dst, 255, 255, &ctx);
    assert_eq!(&dst[..4], &[161, 0, 255, 161]);
    assert_eq!(alpha, 255);
}

#[test]
fn subtractive_screen_removes_ink() {
    let ctx = ctx::<u8>(PixelFormat::cmyka8(), ChannelFlags::ALL);
    let c = SeparableCompositor::<u8, SubtractiveBlending>::new(
        SeparableMode::Screen.channel_fn::<u8, ClampInteger>(),
    );
    let src = [100u8, 100, 100, 100, 255];
    let mut dst = [100u8, 100, 100, 100, 255];
    c.composite_pixel(&src, 255, &mut dst, 255, 255, &ctx);
    assert!(dst[..4].iter().all(|&v| v == 39), "{dst:?}");
}

mod addition_sai {
    use super::*;

    #[test]
    fn adds_weighted_source_and_unions_alpha() {
        let ctx = ctx::<u8>(PixelFormat::rgba8(), ChannelFlags::ALL);
        let c = AdditionSaiCompositor::<ClampInteger>::new();
        let mut dst = [50, 50, 250, 255];
        let alpha = run(&c, &ctx, [100, 0, 100, 255], &mut dst);
        assert_eq!(&dst[..3], &[150, 50, 255]);
        assert_eq!(alpha, 255);

        let mut dst = [0, 0, 0, 128];
        let alpha = run(&c, &ctx, [255, 255, 255, 128], &mut dst);
        assert_eq!(&dst[..3], &[128, 128, 128]);
        assert_eq!(alpha, 192);
    }

    #[test]
    fn alpha_lock_keeps_alpha() {
        let ctx = ctx::<u8>(
            PixelFormat::rgba8(),
            ChannelFlags::alpha_locked_for(PixelFormat::rgba8()),
        );
        let c = AdditionSaiCompositor::<ClampInteger>::new();
        let mut dst = [10, 10, 10, 100];
        let alpha = run(&c, &ctx, [20, 20, 20, 255], &mut dst);
        assert_eq!(&dst[..3], &[30, 30, 30]);
        assert_eq!(alpha, 100);
    }

    #[test]
    fn hdr_float_keeps_overshoot() {
        let ctx = ctx::<f32>(PixelFormat::rgba_f32(), ChannelFlags::ALL);
        let mut hdr = [0.9f32, 0.0, 0.0, 1.0];
        run(&AdditionSaiCompositor::<ClampFloatHdr>::new(), &ctx, [0.5, 0.0, 0.0, 1.0], &mut hdr);
        assert!((hdr[0] - 1.4).abs() < 1e-6);
        let mut sdr = [0.9f32, 0.0, 0.0, 1.0];
        run(&AdditionSaiCompositor::<ClampFloatSdr>::new(), &ctx, [0.5, 0.0, 0.0, 1.0], &mut sdr);
        assert_eq!(sdr[0], 1.0);
    }
}
