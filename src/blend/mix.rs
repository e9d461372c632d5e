//! Mixing modes: grain, means, interpolation, penumbra and the hard-mix variants.

use std::f64::consts::PI;

use crate::blend::light::{color_burn, color_dodge};
use crate::channel::clamp::ClampPolicy;
use crate::channel::{Channel, clamp, clamp_to_sdr};

/// `dst + src - half`.
pub fn grain_merge<T: Channel>(src: T, dst: T) -> T {
    clamp::<T>(dst.widen() + src.widen() - T::HALF.widen())
}

/// `dst - src + half`.
pub fn grain_extract<T: Channel>(src: T, dst: T) -> T {
    clamp::<T>(dst.widen() - src.widen() + T::HALF.widen())
}

/// `sqrt(src * dst)`.
pub fn geometric_mean<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    T::from_f64((s * d).max(0.0).sqrt())
}

/// Harmonic mean, `2 / (1/src + 1/dst)`. Zero on either side yields zero.
pub fn parallel<T: Channel>(src: T, dst: T) -> T {
    if src == T::ZERO || dst == T::ZERO {
        return T::ZERO;
    }
    let (s, d) = (src.to_f64(), dst.to_f64());
    T::from_f64(2.0 / (1.0 / s + 1.0 / d))
}

/// Arithmetic mean.
pub fn allanon<T: Channel>(src: T, dst: T) -> T {
    T::from_f64((src.to_f64() + dst.to_f64()) * 0.5)
}

/// Hard light with the divide operator on the bright half.
pub fn hard_overlay<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    if s >= 1.0 {
        return T::UNIT;
    }
    if s > 0.5 {
        let denom = 2.0 - 2.0 * s;
        return if denom <= 0.0 {
            T::UNIT
        } else {
            T::from_f64(d / denom)
        };
    }
    T::from_f64(2.0 * s * d)
}

/// Cosine interpolation of both operands.
pub fn interpolation<T: Channel>(src: T, dst: T) -> T {
    if src == T::ZERO && dst == T::ZERO {
        return T::ZERO;
    }
    let (s, d) = (src.to_f64(), dst.to_f64());
    T::from_f64(0.5 - 0.25 * (PI * s).cos() - 0.25 * (PI * d).cos())
}

/// [`interpolation`] applied twice.
pub fn interpolation_2x<T: Channel>(src: T, dst: T) -> T {
    if src == T::ZERO && dst == T::ZERO {
        return T::ZERO;
    }
    let x = interpolation(src, dst);
    interpolation(x, x)
}

fn dodge_sdr<T: Channel>(src: T, dst: T) -> T {
    if dst == T::ZERO {
        return T::ZERO;
    }
    let inv = src.inv();
    if inv <= T::ZERO {
        return T::UNIT;
    }
    clamp_to_sdr::<T>(dst.div(inv))
}

fn halve<T: Channel>(v: T) -> T {
    T::from_f64(v.to_f64() * 0.5)
}

/// Penumbra, source-weighted.
pub fn penumbra_a<T: Channel>(src: T, dst: T) -> T {
    if src == T::UNIT {
        return T::UNIT;
    }
    if src.widen() + dst.widen() < T::UNIT.widen() {
        return halve(dodge_sdr(src, dst));
    }
    if dst == T::ZERO {
        return T::ZERO;
    }
    halve(clamp_to_sdr::<T>(src.inv().div(dst))).inv()
}

/// Penumbra, destination-weighted.
pub fn penumbra_b<T: Channel>(src: T, dst: T) -> T {
    if dst == T::UNIT {
        return T::UNIT;
    }
    if src.widen() + dst.widen() < T::UNIT.widen() {
        return halve(dodge_sdr(dst, src));
    }
    if src == T::ZERO {
        return T::ZERO;
    }
    halve(clamp_to_sdr::<T>(dst.inv().div(src))).inv()
}

/// Arc-tangent penumbra, `2 * atan(dst / (1 - src)) / pi`.
pub fn penumbra_c<T: Channel>(src: T, dst: T) -> T {
    if src >= T::UNIT {
        return T::UNIT;
    }
    let (s, d) = (src.to_f64(), dst.to_f64());
    T::from_f64(2.0 * (d / (1.0 - s)).atan() / PI)
}

/// Arc-tangent penumbra, `2 * atan(src / (1 - dst)) / pi`.
pub fn penumbra_d<T: Channel>(src: T, dst: T) -> T {
    penumbra_c(dst, src)
}

/// Color dodge on bright destinations, color burn on dark ones.
pub fn hard_mix<T: Channel, P: ClampPolicy<T>>(src: T, dst: T) -> T {
    if dst > T::HALF {
        color_dodge::<T, P>(src, dst)
    } else {
        color_burn::<T, P>(src, dst)
    }
}

/// Thresholded sum: white when `src + dst` exceeds one, black otherwise.
pub fn hard_mix_photoshop<T: Channel>(src: T, dst: T) -> T {
    if src.widen() + dst.widen() > T::UNIT.widen() {
        T::UNIT
    } else {
        T::ZERO
    }
}

/// `3 * dst - 2 * inv(src)`, saturated.
pub fn hard_mix_softer_photoshop<T: Channel>(src: T, dst: T) -> T {
    let d = dst.widen();
    let is = src.inv().widen();
    clamp::<T>(d + d + d - (is + is))
}

#[cfg(test)]
#[path = "../../tests/unit/blend/mix.rs"]
mod tests;
