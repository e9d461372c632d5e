//! Dodge, burn and light families.
//!
//! Formulas that can overshoot the nominal range route their result through a [`ClampPolicy`],
//! so float formats can keep HDR values where the caller asks for it.

use crate::channel::clamp::ClampPolicy;
use crate::channel::{Channel, clamp};

use super::arithmetic::{addition, screen};
use super::mix::{hard_mix_photoshop, penumbra_a, penumbra_b};

/// `dst / (1 - src)`. A negative float destination stays negative.
pub fn color_dodge<T: Channel, P: ClampPolicy<T>>(src: T, dst: T) -> T {
    if dst == T::ZERO {
        return T::ZERO;
    }
    let inv = src.inv();
    if inv <= T::ZERO {
        return T::UNIT;
    }
    P::clamp_result_allow_negative(dst.div(inv))
}

/// `1 - (1 - dst) / src`.
pub fn color_burn<T: Channel, P: ClampPolicy<T>>(src: T, dst: T) -> T {
    if dst == T::UNIT {
        return T::UNIT;
    }
    let inv_dst = dst.inv();
    if src < inv_dst {
        return T::ZERO;
    }
    P::clamp_result(T::UNIT.widen() - inv_dst.div(src))
}

/// `src + dst - 1`.
pub fn linear_burn<T: Channel, P: ClampPolicy<T>>(src: T, dst: T) -> T {
    P::clamp_result(src.widen() + dst.widen() - T::UNIT.widen())
}

/// `dst + 2 * src - 1`, saturated.
pub fn linear_light<T: Channel>(src: T, dst: T) -> T {
    let s = src.widen();
    clamp::<T>(dst.widen() + s + s - T::UNIT.widen())
}

/// Burn below the midpoint, dodge above it, each with doubled source.
pub fn vivid_light<T: Channel, P: ClampPolicy<T>>(src: T, dst: T) -> T {
    let unit = T::UNIT.widen();
    if src < T::HALF {
        if src == T::ZERO {
            return if dst == T::UNIT { T::UNIT } else { T::ZERO };
        }
        let src2 = src.widen() + src.widen();
        let dsti = dst.inv().widen();
        return P::clamp_result(unit - (dsti * unit / src2));
    }
    if src == T::UNIT {
        return if dst == T::ZERO { T::ZERO } else { T::UNIT };
    }
    let srci = src.inv().widen();
    let srci2 = srci + srci;
    if srci2 <= T::ZERO.widen() {
        return T::UNIT;
    }
    P::clamp_result_allow_negative(dst.widen() * unit / srci2)
}

/// `dst + src * srcA`, for source colors that are not premultiplied.
pub fn addition_sai<T: Channel, P: ClampPolicy<T>>(src: T, src_alpha: T, dst: T) -> T {
    P::clamp_result(dst.widen() + src.mul(src_alpha).widen())
}

/// `max(2 * src - 1, min(dst, 2 * src))`.
pub fn pin_light<T: Channel, P: ClampPolicy<T>>(src: T, dst: T) -> T {
    let src2 = src.widen() + src.widen();
    let d = dst.widen();
    let a = if d < src2 { d } else { src2 };
    let lo = src2 - T::UNIT.widen();
    let b = if lo > a { lo } else { a };
    P::clamp_result(b)
}

/// Multiply below the midpoint, screen above it, with doubled source.
pub fn hard_light<T: Channel, P: ClampPolicy<T>>(src: T, dst: T) -> T {
    let unit = T::UNIT.widen();
    let mut src2 = src.widen() + src.widen();
    let d = dst.widen();
    if src > T::HALF {
        src2 = src2 - unit;
        return P::clamp_result((src2 + d) - (src2 * d / unit));
    }
    P::clamp_result(src2 * d / unit)
}

/// Hard light with the operands swapped.
pub fn overlay<T: Channel, P: ClampPolicy<T>>(src: T, dst: T) -> T {
    hard_light::<T, P>(dst, src)
}

/// Photoshop soft light.
pub fn soft_light<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    if s > 0.5 {
        return T::from_f64(d + (2.0 * s - 1.0) * (d.max(0.0).sqrt() - d));
    }
    T::from_f64(d - (1.0 - 2.0 * s) * d * (1.0 - d))
}

/// W3C/SVG soft light.
pub fn soft_light_svg<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    if s > 0.5 {
        let dd = if d > 0.25 {
            d.sqrt()
        } else {
            ((16.0 * d - 12.0) * d + 4.0) * d
        };
        return T::from_f64(d + (2.0 * s - 1.0) * (dd - d));
    }
    T::from_f64(d - (1.0 - 2.0 * s) * d * (1.0 - d))
}

/// Pegtop soft light: `dst * screen(src, dst) + src * dst * inv(dst)`.
pub fn soft_light_pegtop_delphi<T: Channel>(src: T, dst: T) -> T {
    addition(dst.mul(screen(src, dst)), src.mul(dst).mul(dst.inv()))
}

/// `dst ^ (2 ^ (2 * (0.5 - src)))`.
pub fn soft_light_ifs_illusions<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    T::from_f64(d.max(0.0).powf(2f64.powf(2.0 * (0.5 - s))))
}

/// `dst ^ (1 / src)`.
pub fn gamma_dark<T: Channel>(src: T, dst: T) -> T {
    if src == T::ZERO {
        return T::ZERO;
    }
    let (s, d) = (src.to_f64(), dst.to_f64());
    T::from_f64(d.max(0.0).powf(1.0 / s))
}

/// `dst ^ src`.
pub fn gamma_light<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    T::from_f64(d.max(0.0).powf(s))
}

/// Inverted [`gamma_dark`] of the inverted operands.
pub fn gamma_illumination<T: Channel>(src: T, dst: T) -> T {
    gamma_dark(src.inv(), dst.inv()).inv()
}

/// Penumbra A or B depending on a hard-mix threshold.
pub fn flat_light<T: Channel>(src: T, dst: T) -> T {
    if src == T::ZERO {
        return T::ZERO;
    }
    if hard_mix_photoshop(src.inv(), dst) == T::UNIT {
        penumbra_b(src, dst)
    } else {
        penumbra_a(src, dst)
    }
}

fn pnorm<T: Channel>(src: T, dst: T, p: f64) -> T {
    let (s, d) = (src.to_f64().max(0.0), dst.to_f64().max(0.0));
    T::from_f64((d.powf(p) + s.powf(p)).powf(1.0 / p))
}

/// p-norm with `p = 7/3`.
pub fn pnorm_a<T: Channel>(src: T, dst: T) -> T {
    pnorm(src, dst, 7.0 / 3.0)
}

/// p-norm with `p = 4`.
pub fn pnorm_b<T: Channel>(src: T, dst: T) -> T {
    pnorm(src, dst, 4.0)
}

/// Super-elliptic light with exponent 2.875.
pub fn super_light<T: Channel>(src: T, dst: T) -> T {
    const P: f64 = 2.875;
    let (s, d) = (src.to_f64(), dst.to_f64());
    if s < 0.5 {
        let a = (1.0 - d).max(0.0).powf(P);
        let b = (1.0 - 2.0 * s).max(0.0).powf(P);
        return T::from_f64(1.0 - (a + b).powf(1.0 / P));
    }
    let a = d.max(0.0).powf(P);
    let b = (2.0 * s - 1.0).max(0.0).powf(P);
    T::from_f64((a + b).powf(1.0 / P))
}

/// `src * (1 - src) + sqrt(dst)`.
pub fn tint_ifs_illusions<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    T::from_f64(s * (1.0 - s) + d.max(0.0).sqrt())
}

/// Lightening fog.
pub fn fog_lighten_ifs_illusions<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    let (is, id) = (1.0 - s, 1.0 - d);
    if s < 0.5 {
        return T::from_f64(1.0 - is * s - id * is);
    }
    T::from_f64(s - id * is + is * is)
}

/// `dst ^ ((1 - src) * 1.04)`, white for a white source.
pub fn easy_dodge<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    if s >= 1.0 {
        return T::UNIT;
    }
    T::from_f64(d.max(0.0).powf((1.0 - s) * 1.039_999_999))
}

/// `1 - (1 - src) ^ (dst * 1.04)`.
pub fn easy_burn<T: Channel>(src: T, dst: T) -> T {
    let (mut s, d) = (src.to_f64(), dst.to_f64());
    if s >= 1.0 {
        s = 0.999_999_999_999;
    }
    T::from_f64(1.0 - (1.0 - s).powf(d * 1.039_999_999))
}

/// `1 - (sqrt(1 - src) + (1 - dst) * src)`.
pub fn shade_ifs_illusions<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    T::from_f64(1.0 - ((1.0 - d) * s + (1.0 - s).max(0.0).sqrt()))
}

/// Darkening fog.
pub fn fog_darken_ifs_illusions<T: Channel>(src: T, dst: T) -> T {
    let (s, d) = (src.to_f64(), dst.to_f64());
    if s < 0.5 {
        return T::from_f64((1.0 - s) * s + s * d);
    }
    T::from_f64(s * d + s - s * s)
}

#[cfg(test)]
#[path = "../../tests/unit/blend/light.rs"]
mod tests;
