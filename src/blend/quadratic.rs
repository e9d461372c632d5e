//! Quadratic modes (reflect, glow, freeze, heat) and their hybrids.
//!
//! Results are restricted to the SDR range for every channel type.

use crate::channel::{Channel, clamp_to_sdr};

use super::mix::{allanon, hard_mix_photoshop};

/// `src^2 / (1 - dst)`.
pub fn glow<T: Channel>(src: T, dst: T) -> T {
    if dst >= T::UNIT {
        return T::UNIT;
    }
    clamp_to_sdr::<T>(src.mul(src).div(dst.inv()))
}

/// `dst^2 / (1 - src)`.
pub fn reflect<T: Channel>(src: T, dst: T) -> T {
    glow(dst, src)
}

/// `1 - (1 - src)^2 / dst`.
pub fn heat<T: Channel>(src: T, dst: T) -> T {
    if src >= T::UNIT {
        return T::UNIT;
    }
    if dst == T::ZERO {
        return T::ZERO;
    }
    let is = src.inv();
    clamp_to_sdr::<T>(is.mul(is).div(dst)).inv()
}

/// `1 - (1 - dst)^2 / src`.
pub fn freeze<T: Channel>(src: T, dst: T) -> T {
    heat(dst, src)
}

/// Heat where the operands sum past one, glow elsewhere ("helow").
pub fn heat_glow<T: Channel>(src: T, dst: T) -> T {
    if hard_mix_photoshop(src, dst) == T::UNIT {
        return heat(src, dst);
    }
    if src == T::ZERO {
        return T::ZERO;
    }
    glow(src, dst)
}

/// Freeze where the operands sum past one, reflect elsewhere ("frect").
pub fn freeze_reflect<T: Channel>(src: T, dst: T) -> T {
    if hard_mix_photoshop(src, dst) == T::UNIT {
        return freeze(src, dst);
    }
    if dst == T::ZERO {
        return T::ZERO;
    }
    reflect(src, dst)
}

/// Glow where the operands sum past one, heat elsewhere ("gleat").
pub fn glow_heat<T: Channel>(src: T, dst: T) -> T {
    if dst >= T::UNIT {
        return T::UNIT;
    }
    if hard_mix_photoshop(src, dst) == T::UNIT {
        return glow(src, dst);
    }
    heat(src, dst)
}

/// [`glow_heat`] with the operands swapped ("reeze").
pub fn reflect_freeze<T: Channel>(src: T, dst: T) -> T {
    glow_heat(dst, src)
}

/// Mean of [`freeze_reflect`] and [`heat_glow`] ("fhyrd").
pub fn heat_glow_freeze_reflect_hybrid<T: Channel>(src: T, dst: T) -> T {
    allanon(freeze_reflect(src, dst), heat_glow(src, dst))
}

#[cfg(test)]
#[path = "../../tests/unit/blend/quadratic.rs"]
mod tests;
