//! Clamp policies for the dodge/burn/light family.
//!
//! A policy decides how the raw result of a formula that can leave the nominal range is brought
//! back into storage. Integer formats have one sensible choice; float formats pick between
//! SDR and HDR behavior.

use super::{Channel, clamp, clamp_allow_negative, clamp_to_sdr};

/// Strategy applied to formula results that may overshoot.
pub trait ClampPolicy<T: Channel>: Send + Sync + 'static {
    /// Stable policy name.
    const NAME: &'static str;

    /// Bring an unconstrained result into range.
    fn clamp_result(v: T::Wide) -> T;

    /// Like [`ClampPolicy::clamp_result`], but lets negative values through where the storage
    /// type can hold them.
    fn clamp_result_allow_negative(v: T::Wide) -> T;
}

/// Saturating clamp for integer channels.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClampInteger;

/// Float clamp restricting results to `[0, 1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClampFloatSdr;

/// Float clamp keeping any finite non-negative result.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClampFloatHdr;

impl ClampPolicy<u8> for ClampInteger {
    const NAME: &'static str = "integer";

    fn clamp_result(v: i32) -> u8 {
        clamp::<u8>(v)
    }

    fn clamp_result_allow_negative(v: i32) -> u8 {
        clamp::<u8>(v)
    }
}

impl ClampPolicy<u16> for ClampInteger {
    const NAME: &'static str = "integer";

    fn clamp_result(v: i64) -> u16 {
        clamp::<u16>(v)
    }

    fn clamp_result_allow_negative(v: i64) -> u16 {
        clamp::<u16>(v)
    }
}

impl ClampPolicy<f32> for ClampFloatSdr {
    const NAME: &'static str = "sdr";

    fn clamp_result(v: f64) -> f32 {
        clamp_to_sdr::<f32>(v)
    }

    fn clamp_result_allow_negative(v: f64) -> f32 {
        clamp_allow_negative::<f32>(v)
    }
}

impl ClampPolicy<f32> for ClampFloatHdr {
    const NAME: &'static str = "hdr";

    fn clamp_result(v: f64) -> f32 {
        clamp::<f32>(v.max(0.0))
    }

    fn clamp_result_allow_negative(v: f64) -> f32 {
        clamp::<f32>(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channel/clamp.rs"]
mod tests;
