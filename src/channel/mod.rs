//! Channel arithmetic.
//!
//! [`Channel`] abstracts over the three storage types. Integer types use fixed-point math with
//! rounding and a wider accumulator so intermediate products never overflow; `f32` uses plain
//! float math with an `f64` accumulator.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::foundation::core::ChannelType;
use crate::foundation::math::{
    div_round_i64, lerp_round_i64, mul_div255_u8, mul_div65535_u16, mul3_div255_u8,
    mul3_div65535_u16, quantize_unit,
};

pub mod blending;
pub mod clamp;

/// A channel storage type.
pub trait Channel:
    Copy + Default + PartialEq + PartialOrd + Debug + Send + Sync + 'static
{
    /// Accumulator type wide enough for products and signed intermediates.
    type Wide: Copy
        + PartialOrd
        + Debug
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>
        + Div<Output = Self::Wide>
        + Neg<Output = Self::Wide>;

    /// Runtime tag for this type.
    const TYPE: ChannelType;
    /// Fully transparent / black.
    const ZERO: Self;
    /// Fully opaque / white.
    const UNIT: Self;
    /// Midpoint used by the light family (127 for `u8`).
    const HALF: Self;
    /// Storage size in bytes.
    const BYTES: usize;

    /// Promote to the accumulator type.
    fn widen(self) -> Self::Wide;
    /// Saturate an accumulator value back into the storage range.
    ///
    /// Integer types clamp to `[ZERO, UNIT]`; `f32` only clamps to the finite range so HDR
    /// values survive.
    fn clamp_wide(w: Self::Wide) -> Self;
    /// `a * b` normalized by the unit value.
    fn mul(self, b: Self) -> Self;
    /// `a * b * c` normalized by the unit value squared.
    fn mul3(self, b: Self, c: Self) -> Self;
    /// `a * UNIT / b` in the accumulator type. Callers guard `b == ZERO`; a zero divisor yields
    /// `UNIT` (or `ZERO` when `a` is zero too).
    fn div(self, b: Self) -> Self::Wide;
    /// `a + (b - a) * t`.
    fn lerp(self, b: Self, t: Self) -> Self;
    /// `UNIT - a`.
    fn inv(self) -> Self {
        Self::clamp_wide(Self::UNIT.widen() - self.widen())
    }

    /// Normalized value as `f32`.
    fn to_f32(self) -> f32;
    /// Quantize a normalized `f32`. Integer types round and clamp; `f32` passes through.
    fn from_f32(v: f32) -> Self;
    /// Normalized value as `f64`.
    fn to_f64(self) -> f64;
    /// Quantize a normalized `f64`. Integer types round and clamp; `f32` narrows.
    fn from_f64(v: f64) -> Self;
    /// Scale an 8-bit mask value into this type.
    fn from_mask(m: u8) -> Self;

    /// Read one channel from native-endian bytes.
    fn read(bytes: &[u8]) -> Self;
    /// Write one channel as native-endian bytes.
    fn write(self, bytes: &mut [u8]);
}

impl Channel for u8 {
    type Wide = i32;

    const TYPE: ChannelType = ChannelType::U8;
    const ZERO: Self = 0;
    const UNIT: Self = u8::MAX;
    const HALF: Self = 127;
    const BYTES: usize = 1;

    fn widen(self) -> i32 {
        i32::from(self)
    }

    fn clamp_wide(w: i32) -> Self {
        w.clamp(0, 255) as u8
    }

    fn mul(self, b: Self) -> Self {
        mul_div255_u8(u16::from(self), u16::from(b))
    }

    fn mul3(self, b: Self, c: Self) -> Self {
        mul3_div255_u8(self, b, c)
    }

    fn div(self, b: Self) -> i32 {
        if b == 0 {
            return if self == 0 { 0 } else { 255 };
        }
        div_round_i64(i64::from(self), i64::from(b), 255) as i32
    }

    fn lerp(self, b: Self, t: Self) -> Self {
        let v = lerp_round_i64(i64::from(self), i64::from(b), i64::from(t), 255);
        v.clamp(0, 255) as u8
    }

    fn to_f32(self) -> f32 {
        f32::from(self) / 255.0
    }

    fn from_f32(v: f32) -> Self {
        quantize_unit(v, 255.0) as u8
    }

    fn to_f64(self) -> f64 {
        f64::from(self) / 255.0
    }

    fn from_f64(v: f64) -> Self {
        if v.is_nan() {
            return 0;
        }
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    fn from_mask(m: u8) -> Self {
        m
    }

    fn read(bytes: &[u8]) -> Self {
        bytes[0]
    }

    fn write(self, bytes: &mut [u8]) {
        bytes[0] = self;
    }
}

impl Channel for u16 {
    type Wide = i64;

    const TYPE: ChannelType = ChannelType::U16;
    const ZERO: Self = 0;
    const UNIT: Self = u16::MAX;
    const HALF: Self = 32_767;
    const BYTES: usize = 2;

    fn widen(self) -> i64 {
        i64::from(self)
    }

    fn clamp_wide(w: i64) -> Self {
        w.clamp(0, 65_535) as u16
    }

    fn mul(self, b: Self) -> Self {
        mul_div65535_u16(self, b)
    }

    fn mul3(self, b: Self, c: Self) -> Self {
        mul3_div65535_u16(self, b, c)
    }

    fn div(self, b: Self) -> i64 {
        if b == 0 {
            return if self == 0 { 0 } else { 65_535 };
        }
        div_round_i64(i64::from(self), i64::from(b), 65_535)
    }

    fn lerp(self, b: Self, t: Self) -> Self {
        let v = lerp_round_i64(i64::from(self), i64::from(b), i64::from(t), 65_535);
        v.clamp(0, 65_535) as u16
    }

    fn to_f32(self) -> f32 {
        f32::from(self) / 65_535.0
    }

    fn from_f32(v: f32) -> Self {
        quantize_unit(v, 65_535.0) as u16
    }

    fn to_f64(self) -> f64 {
        f64::from(self) / 65_535.0
    }

    fn from_f64(v: f64) -> Self {
        if v.is_nan() {
            return 0;
        }
        (v.clamp(0.0, 1.0) * 65_535.0).round() as u16
    }

    fn from_mask(m: u8) -> Self {
        u16::from(m) * 257
    }

    fn read(bytes: &[u8]) -> Self {
        u16::from_ne_bytes([bytes[0], bytes[1]])
    }

    fn write(self, bytes: &mut [u8]) {
        bytes[..2].copy_from_slice(&self.to_ne_bytes());
    }
}

impl Channel for f32 {
    type Wide = f64;

    const TYPE: ChannelType = ChannelType::F32;
    const ZERO: Self = 0.0;
    const UNIT: Self = 1.0;
    const HALF: Self = 0.5;
    const BYTES: usize = 4;

    fn widen(self) -> f64 {
        f64::from(self)
    }

    fn clamp_wide(w: f64) -> Self {
        if w.is_nan() {
            return 0.0;
        }
        w.clamp(-f64::from(f32::MAX), f64::from(f32::MAX)) as f32
    }

    fn mul(self, b: Self) -> Self {
        self * b
    }

    fn mul3(self, b: Self, c: Self) -> Self {
        self * b * c
    }

    fn div(self, b: Self) -> f64 {
        if b == 0.0 {
            return if self == 0.0 { 0.0 } else { 1.0 };
        }
        f64::from(self) / f64::from(b)
    }

    fn lerp(self, b: Self, t: Self) -> Self {
        self + (b - self) * t
    }

    fn to_f32(self) -> f32 {
        self
    }

    fn from_f32(v: f32) -> Self {
        v
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(v: f64) -> Self {
        Self::clamp_wide(v)
    }

    fn from_mask(m: u8) -> Self {
        f32::from(m) / 255.0
    }

    fn read(bytes: &[u8]) -> Self {
        f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn write(self, bytes: &mut [u8]) {
        bytes[..4].copy_from_slice(&self.to_ne_bytes());
    }
}

/// Saturate to the storage range: `[ZERO, UNIT]` for integer types, finite for `f32`.
pub fn clamp<T: Channel>(w: T::Wide) -> T {
    T::clamp_wide(w)
}

/// Saturate the top at `UNIT`; negative floats flow through. Integer types still floor at zero.
pub fn clamp_allow_negative<T: Channel>(w: T::Wide) -> T {
    if w > T::UNIT.widen() {
        T::UNIT
    } else {
        T::clamp_wide(w)
    }
}

/// Restrict to the SDR range `[ZERO, UNIT]`, for `f32` too. Negative results floor at zero;
/// [`clamp_allow_negative`] keeps them.
pub fn clamp_to_sdr<T: Channel>(w: T::Wide) -> T {
    if w < T::ZERO.widen() {
        T::ZERO
    } else if w > T::UNIT.widen() {
        T::UNIT
    } else {
        T::clamp_wide(w)
    }
}

/// Coverage union of two alphas: `a + b - a * b`.
pub fn union_shape_opacity<T: Channel>(a: T, b: T) -> T {
    T::clamp_wide(a.widen() + b.widen() - a.mul(b).widen())
}

/// Alpha-weighted mix of source, destination and composed values, not yet divided by the new
/// alpha:
/// `inv(srcA) * dstA * dst + inv(dstA) * srcA * src + srcA * dstA * composed`.
pub fn blend<T: Channel>(src: T, src_alpha: T, dst: T, dst_alpha: T, composed: T) -> T::Wide {
    src_alpha.inv().mul3(dst_alpha, dst).widen()
        + dst_alpha.inv().mul3(src_alpha, src).widen()
        + src_alpha.mul3(dst_alpha, composed).widen()
}

/// Divide a [`blend`] result by the new alpha and saturate. Zero alpha yields zero.
pub fn div_by_alpha<T: Channel>(mixed: T::Wide, new_alpha: T) -> T {
    if new_alpha == T::ZERO {
        return T::ZERO;
    }
    clamp::<T>(clamp::<T>(mixed).div(new_alpha))
}

/// Quantize a normalized opacity/flow scalar into channel units.
pub fn scale_opacity<T: Channel>(v: f32) -> T {
    if v.is_nan() {
        return T::ZERO;
    }
    T::from_f32(v.clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/channel/mod.rs"]
mod tests;
