//! Mode lookup.
//!
//! [`CompositeRegistry`] turns a mode identifier plus a [`PixelFormat`] into a ready compositor.
//! The channel type picks the monomorphized channel arithmetic and clamp policy. Subtractive
//! formats (CMYK) run separable modes in inverted space. Four-channel, alpha-last formats get
//! the fixed-format compositor for `normal`, `copy` and `alphadarken`, wrapping the generic
//! compositor of the same mode for calls it cannot serve.

pub mod modes;

use std::sync::Arc;

use crate::blend::hsx::RgbBlend;
use crate::channel::Channel;
use crate::channel::clamp::{ClampFloatHdr, ClampFloatSdr, ClampInteger, ClampPolicy};
use crate::composite::CompositeOp;
use crate::channel::blending::{AdditiveBlending, BlendingPolicy, SubtractiveBlending};
use crate::composite::alpha::{
    BehindCompositor, CopyCompositor, DestinationAtopCompositor, DestinationInCompositor,
    EraseCompositor, GreaterCompositor, OverCompositor,
};
use crate::composite::alpha_darken::{
    AlphaDarkenCompositor, AlphaDarkenCreamy, AlphaDarkenHard, AlphaDarkenParams,
};
use crate::composite::base::{GenericOp, PixelCompositor};
use crate::composite::fixed::kernels::{AlphaDarkenKernel, CopyKernel, OverKernel};
use crate::composite::fixed::{Fixed4, FixedOp, LaneKernel};
use crate::composite::generic::{
    AdditionSaiCompositor, NonSeparableCompositor, SeparableCompositor,
};
use crate::config::{AlphaDarkenStyle, EngineConfig, FloatClamp};
use crate::foundation::core::{ChannelType, PixelFormat};
use crate::foundation::error::{CompositeError, CompositeResult};

use modes::CompositeMode;

/// Creates compositors for every mode and pixel format.
#[derive(Clone, Debug, Default)]
pub struct CompositeRegistry {
    config: EngineConfig,
}

impl CompositeRegistry {
    /// Create a registry that builds compositors with `config`.
    pub fn new(config: EngineConfig) -> Self {
        tracing::debug!(
            vectorize = config.vectorize,
            float_clamp = ?config.float_clamp,
            alpha_darken = ?config.alpha_darken,
            "composite registry"
        );
        Self { config }
    }

    /// Settings used for every compositor this registry creates.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every mode the registry knows.
    pub fn modes(&self) -> impl Iterator<Item = CompositeMode> {
        CompositeMode::all()
    }

    /// Return `true` when `mode` can run on `format`.
    pub fn supports(&self, mode: CompositeMode, format: PixelFormat) -> bool {
        format.validate().is_ok() && (!mode.needs_rgb() || format.rgb_pos.is_some())
    }

    /// Look a compositor up by mode identifier.
    pub fn lookup(&self, id: &str, format: PixelFormat) -> CompositeResult<Arc<dyn CompositeOp>> {
        let mode = CompositeMode::from_id(id)?;
        self.create(mode, format)
    }

    /// Create the compositor for `mode` on `format`.
    pub fn create(
        &self,
        mode: CompositeMode,
        format: PixelFormat,
    ) -> CompositeResult<Arc<dyn CompositeOp>> {
        format.validate()?;
        if mode.needs_rgb() && format.rgb_pos.is_none() {
            return Err(CompositeError::unsupported_format(format!(
                "mode '{}' needs red, green and blue channels, {} has none",
                mode.id(),
                describe(format)
            )));
        }

        Ok(match format.channel_type {
            ChannelType::U8 => self.build_in_space::<u8, ClampInteger>(mode, format),
            ChannelType::U16 => self.build_in_space::<u16, ClampInteger>(mode, format),
            ChannelType::F32 => match self.config.float_clamp {
                FloatClamp::Sdr => self.build_in_space::<f32, ClampFloatSdr>(mode, format),
                FloatClamp::Hdr => self.build_in_space::<f32, ClampFloatHdr>(mode, format),
            },
        })
    }

    fn build_in_space<T: Channel, P: ClampPolicy<T>>(
        &self,
        mode: CompositeMode,
        format: PixelFormat,
    ) -> Arc<dyn CompositeOp> {
        if format.subtractive {
            self.build::<T, P, SubtractiveBlending>(mode, format)
        } else {
            self.build::<T, P, AdditiveBlending>(mode, format)
        }
    }

    fn build<T: Channel, P: ClampPolicy<T>, B: BlendingPolicy<T>>(
        &self,
        mode: CompositeMode,
        format: PixelFormat,
    ) -> Arc<dyn CompositeOp> {
        tracing::debug!(
            op = mode.id(),
            format = %describe(format),
            fixed = format.is_fixed_four() && has_fixed_path(mode),
            clamp = P::NAME,
            blending = B::NAME,
            "created compositor"
        );
        match mode {
            CompositeMode::Over => {
                self.fixed_or_generic::<T, _, _>(mode, format, OverCompositor, OverKernel)
            }
            CompositeMode::Copy => {
                self.fixed_or_generic::<T, _, _>(mode, format, CopyCompositor, CopyKernel)
            }
            CompositeMode::AlphaDarken => match self.config.alpha_darken {
                AlphaDarkenStyle::Creamy => self.alpha_darken::<T, AlphaDarkenCreamy>(mode, format),
                AlphaDarkenStyle::Hard => self.alpha_darken::<T, AlphaDarkenHard>(mode, format),
            },
            CompositeMode::Erase => generic::<T, _>(mode, format, EraseCompositor),
            CompositeMode::Behind => generic::<T, _>(mode, format, BehindCompositor),
            CompositeMode::DestinationIn => generic::<T, _>(mode, format, DestinationInCompositor),
            CompositeMode::DestinationAtop => {
                generic::<T, _>(mode, format, DestinationAtopCompositor)
            }
            CompositeMode::Greater => generic::<T, _>(mode, format, GreaterCompositor),
            CompositeMode::LuminositySai => {
                generic::<T, _>(mode, format, AdditionSaiCompositor::<P>::new())
            }
            CompositeMode::Separable(sep) => generic::<T, _>(
                mode,
                format,
                SeparableCompositor::<T, B>::new(sep.channel_fn::<T, P>()),
            ),
            CompositeMode::NonSeparable(func, model) => generic::<T, _>(
                mode,
                format,
                NonSeparableCompositor::new(RgbBlend::Hsx(func, model)),
            ),
            CompositeMode::DarkerColor => {
                generic::<T, _>(mode, format, NonSeparableCompositor::new(RgbBlend::DarkerColor))
            }
            CompositeMode::LighterColor => {
                generic::<T, _>(mode, format, NonSeparableCompositor::new(RgbBlend::LighterColor))
            }
            CompositeMode::TangentNormalmap => generic::<T, _>(
                mode,
                format,
                NonSeparableCompositor::new(RgbBlend::TangentNormalmap),
            ),
        }
    }

    fn alpha_darken<T: Channel, W: AlphaDarkenParams>(
        &self,
        mode: CompositeMode,
        format: PixelFormat,
    ) -> Arc<dyn CompositeOp> {
        tracing::trace!(op = mode.id(), params = W::NAME, "alpha darken strategy");
        self.fixed_or_generic::<T, _, _>(
            mode,
            format,
            AlphaDarkenCompositor::<W>::new(),
            AlphaDarkenKernel::<W>::new(),
        )
    }

    fn fixed_or_generic<T: Channel, C: PixelCompositor<T>, K: LaneKernel<T>>(
        &self,
        mode: CompositeMode,
        format: PixelFormat,
        compositor: C,
        kernel: K,
    ) -> Arc<dyn CompositeOp> {
        let fallback = generic::<T, C>(mode, format, compositor);
        if !format.is_fixed_four() {
            return fallback;
        }
        Arc::new(FixedOp::<Fixed4<T>, K>::new(
            mode,
            format,
            kernel,
            fallback,
            self.config.vectorize,
        ))
    }
}

fn generic<T: Channel, C: PixelCompositor<T>>(
    mode: CompositeMode,
    format: PixelFormat,
    compositor: C,
) -> Arc<dyn CompositeOp> {
    Arc::new(GenericOp::<T, C>::new(mode, format, compositor))
}

fn has_fixed_path(mode: CompositeMode) -> bool {
    matches!(mode, CompositeMode::Over | CompositeMode::Copy | CompositeMode::AlphaDarken)
}

fn describe(format: PixelFormat) -> String {
    format!(
        "{}x{} (alpha {:?})",
        format.channel_type.name(),
        format.channel_count,
        format.alpha_pos
    )
}

#[cfg(test)]
#[path = "../../tests/unit/registry/mod.rs"]
mod tests;
