use super::*;
use crate::composite::params::CompositeParams;
use crate::foundation::core::{ChannelFlags, PixelFormat};

fn ctx(opacity: f32, flags: ChannelFlags) -> PixelContext<u8> {
    let mut dst = [0u8; 0];
    let src = [0u8; 0];
    let params = CompositeParams::new(&mut dst, 0, &src, 0, 0, 0)
        .with_opacity(opacity)
        .with_channel_flags(flags);
    PixelContext::new(PixelFormat::rgba8(), &params)
}

fn run<C: PixelCompositor<u8>>(c: &C, ctx: &PixelContext<u8>, src: [u8; 4], dst: &mut [u8; 4]) {
    let (sa, da) = (src[3], dst[3]);
    dst[3] = c.composite_pixel(&src, sa, dst, da, 255, ctx);
}

mod over {
    use super::*;

    #[test]
    fn opaque_source_replaces() {
        let mut dst = [1, 2, 3, 40];
        run(&OverCompositor, &ctx(1.0, ChannelFlags::ALL), [200, 100, 50, 255], &mut dst);
        assert_eq!(dst, [200, 100, 50, 255]);
    }

    #[test]
    fn opaque_destination_stays_opaque() {
        let mut dst = [0, 0, 0, 255];
        run(&OverCompositor, &ctx(1.0, ChannelFlags::ALL), [200, 200, 200, 128], &mut dst);
        assert_eq!(dst, [100, 100, 100, 255]);
    }

    #[test]
    fn partial_alphas_union() {
        let mut dst = [0, 0, 0, 128];
        run(&OverCompositor, &ctx(1.0, ChannelFlags::ALL), [255, 255, 255, 128], &mut dst);
        assert_eq!(dst, [170, 170, 170, 192]);
    }

    #[test]
    fn invisible_source_is_a_no_op() {
        let mut dst = [9, 8, 7, 6];
        run(&OverCompositor, &ctx(1.0, ChannelFlags::ALL), [200, 200, 200, 0], &mut dst);
        assert_eq!(dst, [9, 8, 7, 6]);
    }

    #[test]
    fn alpha_lock_keeps_alpha() {
        let flags = ChannelFlags::alpha_locked_for(PixelFormat::rgba8());
        let mut dst = [0, 0, 0, 128];
        run(&OverCompositor, &ctx(1.0, flags), [255, 255, 255, 255], &mut dst);
        assert_eq!(dst, [255, 255, 255, 128]);
    }
}

mod copy {
    use super::*;

    #[test]
    fn full_opacity_overwrites_alpha_too() {
        let mut dst = [1, 2, 3, 255];
        run(&CopyCompositor, &ctx(1.0, ChannelFlags::ALL), [200, 100, 50, 17], &mut dst);
        assert_eq!(dst, [200, 100, 50, 17]);
    }

    #[test]
    fn half_opacity_mixes_premultiplied() {
        let mut dst = [100, 100, 100, 255];
        run(&CopyCompositor, &ctx(0.5, ChannelFlags::ALL), [200, 200, 200, 255], &mut dst);
        assert_eq!(dst, [150, 150, 150, 255]);
    }

    #[test]
    fn half_opacity_with_transparent_source_keeps_color() {
        let mut dst = [100, 100, 100, 255];
        run(&CopyCompositor, &ctx(0.5, ChannelFlags::ALL), [0, 0, 0, 0], &mut dst);
        assert_eq!(dst, [100, 100, 100, 127]);
    }
}

mod erase {
    use super::*;

    #[test]
    fn full_strength_clears_alpha_only() {
        let mut dst = [10, 20, 30, 200];
        run(&EraseCompositor, &ctx(1.0, ChannelFlags::ALL), [0, 0, 0, 255], &mut dst);
        assert_eq!(dst, [10, 20, 30, 0]);
    }

    #[test]
    fn half_opacity_halves_alpha() {
        let mut dst = [10, 20, 30, 200];
        run(&EraseCompositor, &ctx(0.5, ChannelFlags::ALL), [0, 0, 0, 255], &mut dst);
        assert_eq!(dst, [10, 20, 30, 100]);
    }
}

mod behind {
    use super::*;

    #[test]
    fn opaque_destination_is_untouched() {
        let mut dst = [10, 20, 30, 255];
        run(&BehindCompositor, &ctx(1.0, ChannelFlags::ALL), [255, 255, 255, 255], &mut dst);
        assert_eq!(dst, [10, 20, 30, 255]);
    }

    #[test]
    fn transparent_destination_takes_source() {
        let mut dst = [10, 20, 30, 0];
        run(&BehindCompositor, &ctx(1.0, ChannelFlags::ALL), [200, 100, 50, 128], &mut dst);
        assert_eq!(dst, [200, 100, 50, 128]);
    }

    #[test]
    fn source_shows_through_partial_destination() {
        let mut dst = [0, 0, 0, 128];
        run(&BehindCompositor, &ctx(1.0, ChannelFlags::ALL), [255, 255, 255, 255], &mut dst);
        assert_eq!(dst, [127, 127, 127, 255]);
    }
}

mod destination_in {
    use super::*;

    #[test]
    fn scales_alpha_by_source_coverage() {
        let mut dst = [10, 20, 30, 200];
        run(&DestinationInCompositor, &ctx(1.0, ChannelFlags::ALL), [255, 0, 0, 128], &mut dst);
        assert_eq!(dst, [10, 20, 30, 100]);
    }

    #[test]
    fn transparent_source_clears_alpha() {
        let mut dst = [10, 20, 30, 200];
        run(&DestinationInCompositor, &ctx(1.0, ChannelFlags::ALL), [255, 0, 0, 0], &mut dst);
        assert_eq!(dst, [10, 20, 30, 0]);
    }
}

mod destination_atop {
    use super::*;

    #[test]
    fn destination_color_weighs_by_its_alpha() {
        let mut dst = [0, 0, 0, 128];
        run(
            &DestinationAtopCompositor,
            &ctx(1.0, ChannelFlags::ALL),
            [200, 100, 50, 255],
            &mut dst,
        );
        assert_eq!(dst, [100, 50, 25, 255]);
    }

    #[test]
    fn transparent_destination_takes_source() {
        let mut dst = [1, 2, 3, 0];
        run(&DestinationAtopCompositor, &ctx(1.0, ChannelFlags::ALL), [200, 100, 50, 64], &mut dst);
        assert_eq!(dst, [200, 100, 50, 64]);
    }

    #[test]
    fn alpha_follows_applied_source() {
        let mut dst = [1, 2, 3, 255];
        run(
            &DestinationAtopCompositor,
            &ctx(0.5, ChannelFlags::ALL),
            [200, 100, 50, 255],
            &mut dst,
        );
        assert_eq!(dst, [1, 2, 3, 128]);
    }
}

mod greater {
    use super::*;

    #[test]
    fn opaque_destination_is_untouched() {
        let mut dst = [10, 20, 30, 255];
        run(&GreaterCompositor, &ctx(1.0, ChannelFlags::ALL), [255, 255, 255, 255], &mut dst);
        assert_eq!(dst, [10, 20, 30, 255]);
    }

    #[test]
    fn transparent_destination_takes_source() {
        let mut dst = [10, 20, 30, 0];
        run(&GreaterCompositor, &ctx(1.0, ChannelFlags::ALL), [200, 100, 50, 255], &mut dst);
        assert_eq!(dst, [200, 100, 50, 255]);
    }

    #[test]
    fn alpha_never_drops() {
        for sa in [0u8, 32, 64, 128, 200, 255] {
            for da in [1u8, 64, 128, 200, 254] {
                let mut dst = [50, 50, 50, da];
                run(
                    &GreaterCompositor,
                    &ctx(1.0, ChannelFlags::ALL),
                    [250, 250, 250, sa],
                    &mut dst,
                );
                assert!(dst[3] >= da, "sa {sa} da {da}: {dst:?}");
            }
        }
    }

    #[test]
    fn weaker_source_barely_moves_alpha() {
        let mut dst = [50, 50, 50, 200];
        run(&GreaterCompositor, &ctx(1.0, ChannelFlags::ALL), [250, 250, 250, 32], &mut dst);
        assert_eq!(dst[3], 200);
    }
}
