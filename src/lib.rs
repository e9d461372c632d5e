//! Pigment is a pixel compositing engine.
//!
//! It composes a source pixel buffer onto a destination buffer in place, under a blend mode, a
//! layer opacity, an optional 8-bit coverage mask and a channel-flag set. The public surface is
//! small:
//!
//! - Build a [`CompositeRegistry`] from an [`EngineConfig`]
//! - Look a compositor up by mode identifier and [`PixelFormat`]
//! - Call [`CompositeOp::composite`] with [`CompositeParams`], or split the work across a rayon
//!   pool with [`composite_parallel`]
//!
//! Blend-mode channel functions live in [`blend`] and can be used on their own.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod blend;
pub mod channel;
pub mod composite;
pub mod config;
pub mod registry;

pub use crate::foundation::core::{ChannelFlags, ChannelType, MAX_CHANNELS, PixelFormat};
pub use crate::foundation::error::{CompositeError, CompositeResult};

pub use crate::channel::Channel;
pub use crate::channel::blending::{AdditiveBlending, BlendingPolicy, SubtractiveBlending};
pub use crate::channel::clamp::{ClampFloatHdr, ClampFloatSdr, ClampInteger, ClampPolicy};
pub use crate::composite::parallel::{build_thread_pool, composite_parallel};
pub use crate::composite::{
    AlphaDarkenCreamy, AlphaDarkenHard, AlphaDarkenParams, CompositeOp, CompositeParams,
};
pub use crate::config::{AlphaDarkenStyle, EngineConfig, FloatClamp};
pub use crate::registry::CompositeRegistry;
pub use crate::registry::modes::{CompositeMode, ModeCategory};
