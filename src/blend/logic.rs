//! Fuzzy-logic modes: each channel's normalized value is treated as a truth probability.

use crate::channel::{Channel, clamp, union_shape_opacity};

/// `src * dst`.
pub fn and<T: Channel>(src: T, dst: T) -> T {
    src.mul(dst)
}

/// `src + dst - src * dst`.
pub fn or<T: Channel>(src: T, dst: T) -> T {
    union_shape_opacity(src, dst)
}

/// `src + dst - 2 * src * dst`.
pub fn xor<T: Channel>(src: T, dst: T) -> T {
    let p = src.mul(dst).widen();
    clamp::<T>(src.widen() + dst.widen() - (p + p))
}

/// `not (src and dst)`.
pub fn nand<T: Channel>(src: T, dst: T) -> T {
    and(src, dst).inv()
}

/// `not (src or dst)`.
pub fn nor<T: Channel>(src: T, dst: T) -> T {
    or(src, dst).inv()
}

/// `not (src xor dst)`.
pub fn xnor<T: Channel>(src: T, dst: T) -> T {
    xor(src, dst).inv()
}

/// `src implies dst`, i.e. `(not src) or dst`.
pub fn implication<T: Channel>(src: T, dst: T) -> T {
    or(src.inv(), dst)
}

/// `src and (not dst)`.
pub fn not_implication<T: Channel>(src: T, dst: T) -> T {
    and(src, dst.inv())
}

/// `dst implies src`, i.e. `src or (not dst)`.
pub fn converse<T: Channel>(src: T, dst: T) -> T {
    or(src, dst.inv())
}

/// `(not src) and dst`.
pub fn not_converse<T: Channel>(src: T, dst: T) -> T {
    and(src.inv(), dst)
}

#[cfg(test)]
#[path = "../../tests/unit/blend/logic.rs"]
mod tests;
