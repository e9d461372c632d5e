use pigment::{
    CompositeMode, CompositeParams, CompositeRegistry, EngineConfig, PixelFormat,
    build_thread_pool, composite_parallel,
};

const SIZE: usize = 64;

fn striped_tile() -> Vec<u8> {
    let mut px = Vec::with_capacity(SIZE * SIZE * 4);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let on = (x / 8 + y / 8) % 2 == 0;
            let a = if on { 255 } else { 96 };
            px.extend_from_slice(&[(x * 4) as u8, (y * 4) as u8, 200, a]);
        }
    }
    px
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = EngineConfig::from_json_str(r#"{"strip_rows": 16}"#)?;
    let registry = CompositeRegistry::new(cfg.clone());
    let pool = build_thread_pool(cfg.threads)?;
    let format = PixelFormat::rgba8();
    let stride = SIZE * format.pixel_bytes();

    let src = striped_tile();
    let mask: Vec<u8> = (0..SIZE * SIZE).map(|i| ((i % SIZE) * 4) as u8).collect();

    for id in ["normal", "multiply", "screen", "overlay", "color", "alphadarken"] {
        let mode = CompositeMode::from_id(id)?;
        let op = registry.create(mode, format)?;

        let mut dst = vec![0u8; SIZE * SIZE * 4];
        for px in dst.chunks_exact_mut(4) {
            px.copy_from_slice(&[128, 64, 32, 255]);
        }

        let mut params = CompositeParams::new(&mut dst, stride, &src, stride, SIZE, SIZE)
            .with_mask(&mask, SIZE)
            .with_opacity(0.75)
            .with_flow(0.5);
        params.validate(format)?;
        composite_parallel(op.as_ref(), &mut params, &pool, cfg.strip_rows)?;

        let sum: u64 = dst.iter().map(|&b| u64::from(b)).sum();
        println!("{id:>12} ({:?}): checksum {sum}", mode.category());
    }

    Ok(())
}
