//! Arithmetic, comparison and "negative" families.

use crate::channel::{Channel, clamp, union_shape_opacity};

/// `src * dst`.
pub fn multiply<T: Channel>(src: T, dst: T) -> T {
    src.mul(dst)
}

/// `src + dst - src * dst`.
pub fn screen<T: Channel>(src: T, dst: T) -> T {
    union_shape_opacity(src, dst)
}

/// `dst + src`, saturated.
pub fn addition<T: Channel>(src: T, dst: T) -> T {
    clamp::<T>(dst.widen() + src.widen())
}

/// `dst - src`, saturated.
pub fn subtract<T: Channel>(src: T, dst: T) -> T {
    clamp::<T>(dst.widen() - src.widen())
}

/// `dst - inv(src)`, saturated.
pub fn inverse_subtract<T: Channel>(src: T, dst: T) -> T {
    clamp::<T>(dst.widen() - src.inv().widen())
}

/// `dst / src`. A zero source maps black to black and everything else to white.
pub fn divide<T: Channel>(src: T, dst: T) -> T {
    if src == T::ZERO {
        return if dst == T::ZERO { T::ZERO } else { T::UNIT };
    }
    clamp::<T>(dst.div(src))
}

/// `|dst - src|`.
pub fn difference<T: Channel>(src: T, dst: T) -> T {
    if src > dst {
        clamp::<T>(src.widen() - dst.widen())
    } else {
        clamp::<T>(dst.widen() - src.widen())
    }
}

/// `dst + src - 2 * src * dst`.
pub fn exclusion<T: Channel>(src: T, dst: T) -> T {
    let x = src.mul(dst).widen();
    clamp::<T>(dst.widen() + src.widen() - (x + x))
}

/// Per-channel minimum.
pub fn darken_only<T: Channel>(src: T, dst: T) -> T {
    if src < dst { src } else { dst }
}

/// Per-channel maximum.
pub fn lighten_only<T: Channel>(src: T, dst: T) -> T {
    if src > dst { src } else { dst }
}

/// `2 * atan(src / dst) / pi`.
pub fn arc_tangent<T: Channel>(src: T, dst: T) -> T {
    if dst == T::ZERO {
        return if src == T::ZERO { T::ZERO } else { T::UNIT };
    }
    let (s, d) = (src.to_f64(), dst.to_f64());
    T::from_f64(2.0 * (s / d).atan() / std::f64::consts::PI)
}

/// `1 - |dst - src|`.
pub fn equivalence<T: Channel>(src: T, dst: T) -> T {
    difference(src, dst).inv()
}

/// `|sqrt(dst) - sqrt(src)|`.
pub fn additive_subtractive<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64().max(0.0), dst.to_f64().max(0.0));
    T::from_f64((d.sqrt() - s.sqrt()).abs())
}

/// `1 - |1 - src - dst|`.
pub fn negation<T: Channel>(src: T, dst: T) -> T {
    let unit = T::UNIT.widen();
    let a = unit - src.widen() - dst.widen();
    let abs = if a < T::ZERO.widen() { -a } else { a };
    clamp::<T>(unit - abs)
}

#[cfg(test)]
#[path = "../../tests/unit/blend/arithmetic.rs"]
mod tests;
