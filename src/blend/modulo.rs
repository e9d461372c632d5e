//! Modulo family, evaluated on normalized `f64` values and kept in `[0, 1]`.

use crate::channel::Channel;

const EPSILON: f64 = f32::EPSILON as f64;

fn sdr<T: Channel>(v: f64) -> T {
    T::from_f64(v.clamp(0.0, 1.0))
}

fn modf(a: f64, b: f64) -> f64 {
    let b = b + EPSILON;
    a - b * (a / b).floor()
}

fn divisive_modulo_f(s: f64, d: f64) -> f64 {
    if s == 0.0 {
        return modf(d / EPSILON, 1.0);
    }
    modf(d / s, 1.0)
}

fn divisive_modulo_continuous_f(s: f64, d: f64) -> f64 {
    if d == 0.0 {
        return 0.0;
    }
    if s == 0.0 {
        return divisive_modulo_f(s, d);
    }
    let m = divisive_modulo_f(s, d);
    if ((d / s).ceil() as i64) % 2 != 0 {
        m
    } else {
        1.0 - m
    }
}

fn modulo_shift_f(s: f64, d: f64) -> f64 {
    if s == 1.0 && d == 0.0 {
        return 0.0;
    }
    modf(d + s, 1.0)
}

/// `dst mod src`.
pub fn modulo<T: Channel>(src: T, dst: T) -> T {
    sdr::<T>(modf(dst.to_f64(), src.to_f64()))
}

/// `(dst / src) mod 1`.
pub fn divisive_modulo<T: Channel>(src: T, dst: T) -> T {
    sdr::<T>(divisive_modulo_f(src.to_f64(), dst.to_f64()))
}

/// [`divisive_modulo`] mirrored on every other period, so it has no jumps.
pub fn divisive_modulo_continuous<T: Channel>(src: T, dst: T) -> T {
    sdr::<T>(divisive_modulo_continuous_f(src.to_f64(), dst.to_f64()))
}

/// Continuous modulo: [`divisive_modulo_continuous`] scaled back by `src`.
pub fn modulo_continuous<T: Channel>(src: T, dst: T) -> T {
    divisive_modulo_continuous(src, dst).mul(src)
}

/// `(dst + src) mod 1`.
pub fn modulo_shift<T: Channel>(src: T, dst: T) -> T {
    sdr::<T>(modulo_shift_f(src.to_f64(), dst.to_f64()))
}

/// [`modulo_shift`] mirrored on every other period.
pub fn modulo_shift_continuous<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    if s == 1.0 && d == 0.0 {
        return T::UNIT;
    }
    let m = modulo_shift_f(s, d);
    if ((d + s).ceil() as i64) % 2 != 0 || d == 0.0 {
        sdr::<T>(m)
    } else {
        sdr::<T>(1.0 - m)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/modulo.rs"]
mod tests;
