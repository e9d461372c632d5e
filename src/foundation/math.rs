pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn mul3_div255_u8(x: u8, y: u8, z: u8) -> u8 {
    let p = u32::from(x) * u32::from(y) * u32::from(z);
    ((p + 32_512) / 65_025) as u8
}

pub(crate) fn mul_div65535_u16(x: u16, y: u16) -> u16 {
    (((u64::from(x) * u64::from(y)) + 32_767) / 65_535) as u16
}

pub(crate) fn mul3_div65535_u16(x: u16, y: u16, z: u16) -> u16 {
    const DEN: u64 = 65_535 * 65_535;
    let p = u64::from(x) * u64::from(y) * u64::from(z);
    ((p + DEN / 2) / DEN) as u16
}

/// `a * unit / b` rounded to nearest. `b` must be non-zero.
pub(crate) fn div_round_i64(a: i64, b: i64, unit: i64) -> i64 {
    let num = a * unit;
    let half = b / 2;
    if num >= 0 {
        (num + half) / b
    } else {
        (num - half) / b
    }
}

/// `a + (b - a) * t / unit` with the correction rounded symmetrically around zero.
pub(crate) fn lerp_round_i64(a: i64, b: i64, t: i64, unit: i64) -> i64 {
    let d = (b - a) * t;
    let half = unit / 2;
    let step = if d >= 0 {
        (d + half) / unit
    } else {
        (d - half) / unit
    };
    a + step
}

/// Quantize a normalized float to `[0, unit]`, rounding to nearest.
pub(crate) fn quantize_unit(v: f32, unit: f32) -> f32 {
    if v.is_nan() {
        return 0.0;
    }
    (v.clamp(0.0, 1.0) * unit).round()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
