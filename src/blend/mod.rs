//! Per-blend-mode channel functions.
//!
//! Separable functions take `(src, dst)` channel values and return the composed color value.
//! Alpha is handled by the compositor that lifts them into a pixel operation. Non-separable
//! functions live in [`hsx`] and work on whole RGB triples.

use crate::channel::Channel;
use crate::channel::clamp::ClampPolicy;

pub mod arithmetic;
pub mod hsx;
pub mod light;
pub mod logic;
pub mod mix;
pub mod modulo;
pub mod quadratic;

/// A separable channel function.
pub type BlendFn<T> = fn(T, T) -> T;

/// Every separable blend mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SeparableMode {
    Add,
    Subtract,
    InverseSubtract,
    Multiply,
    Divide,
    Modulo,
    ModuloContinuous,
    DivisiveModulo,
    DivisiveModuloContinuous,
    ModuloShift,
    ModuloShiftContinuous,
    Difference,
    Exclusion,
    ArcTangent,
    Equivalence,
    AdditiveSubtractive,
    Negation,
    Overlay,
    GrainMerge,
    GrainExtract,
    HardMix,
    HardMixPhotoshop,
    HardMixSofterPhotoshop,
    GeometricMean,
    Parallel,
    Allanon,
    HardOverlay,
    Interpolation,
    Interpolation2x,
    PenumbraA,
    PenumbraB,
    PenumbraC,
    PenumbraD,
    Screen,
    ColorDodge,
    LinearDodge,
    Lighten,
    HardLight,
    SoftLightIfsIllusions,
    SoftLightPegtopDelphi,
    SoftLightSvg,
    SoftLight,
    GammaLight,
    GammaIllumination,
    VividLight,
    FlatLight,
    PinLight,
    LinearLight,
    PnormA,
    PnormB,
    SuperLight,
    TintIfsIllusions,
    FogLightenIfsIllusions,
    EasyDodge,
    ColorBurn,
    LinearBurn,
    Darken,
    GammaDark,
    ShadeIfsIllusions,
    FogDarkenIfsIllusions,
    EasyBurn,
    Xor,
    Or,
    And,
    Nand,
    Nor,
    Xnor,
    Implication,
    NotImplication,
    Converse,
    NotConverse,
    Reflect,
    Glow,
    Freeze,
    Heat,
    GlowHeat,
    HeatGlow,
    ReflectFreeze,
    FreezeReflect,
    HeatGlowFreezeReflectHybrid,
}

impl SeparableMode {
    /// Resolve the channel function for storage type `T` under clamp policy `P`.
    pub fn channel_fn<T: Channel, P: ClampPolicy<T>>(self) -> BlendFn<T> {
        use arithmetic as a;
        use light as l;
        use logic as b;
        use mix as m;
        use modulo as md;
        use quadratic as q;

        match self {
            Self::Add | Self::LinearDodge => a::addition::<T>,
            Self::Subtract => a::subtract::<T>,
            Self::InverseSubtract => a::inverse_subtract::<T>,
            Self::Multiply => a::multiply::<T>,
            Self::Divide => a::divide::<T>,
            Self::Modulo => md::modulo::<T>,
            Self::ModuloContinuous => md::modulo_continuous::<T>,
            Self::DivisiveModulo => md::divisive_modulo::<T>,
            Self::DivisiveModuloContinuous => md::divisive_modulo_continuous::<T>,
            Self::ModuloShift => md::modulo_shift::<T>,
            Self::ModuloShiftContinuous => md::modulo_shift_continuous::<T>,
            Self::Difference => a::difference::<T>,
            Self::Exclusion => a::exclusion::<T>,
            Self::ArcTangent => a::arc_tangent::<T>,
            Self::Equivalence => a::equivalence::<T>,
            Self::AdditiveSubtractive => a::additive_subtractive::<T>,
            Self::Negation => a::negation::<T>,
            Self::Overlay => l::overlay::<T, P>,
            Self::GrainMerge => m::grain_merge::<T>,
            Self::GrainExtract => m::grain_extract::<T>,
            Self::HardMix => m::hard_mix::<T, P>,
            Self::HardMixPhotoshop => m::hard_mix_photoshop::<T>,
            Self::HardMixSofterPhotoshop => m::hard_mix_softer_photoshop::<T>,
            Self::GeometricMean => m::geometric_mean::<T>,
            Self::Parallel => m::parallel::<T>,
            Self::Allanon => m::allanon::<T>,
            Self::HardOverlay => m::hard_overlay::<T>,
            Self::Interpolation => m::interpolation::<T>,
            Self::Interpolation2x => m::interpolation_2x::<T>,
            Self::PenumbraA => m::penumbra_a::<T>,
            Self::PenumbraB => m::penumbra_b::<T>,
            Self::PenumbraC => m::penumbra_c::<T>,
            Self::PenumbraD => m::penumbra_d::<T>,
            Self::Screen => a::screen::<T>,
            Self::ColorDodge => l::color_dodge::<T, P>,
            Self::Lighten => a::lighten_only::<T>,
            Self::HardLight => l::hard_light::<T, P>,
            Self::SoftLightIfsIllusions => l::soft_light_ifs_illusions::<T>,
            Self::SoftLightPegtopDelphi => l::soft_light_pegtop_delphi::<T>,
            Self::SoftLightSvg => l::soft_light_svg::<T>,
            Self::SoftLight => l::soft_light::<T>,
            Self::GammaLight => l::gamma_light::<T>,
            Self::GammaIllumination => l::gamma_illumination::<T>,
            Self::VividLight => l::vivid_light::<T, P>,
            Self::FlatLight => l::flat_light::<T>,
            Self::PinLight => l::pin_light::<T, P>,
            Self::LinearLight => l::linear_light::<T>,
            Self::PnormA => l::pnorm_a::<T>,
            Self::PnormB => l::pnorm_b::<T>,
            Self::SuperLight => l::super_light::<T>,
            Self::TintIfsIllusions => l::tint_ifs_illusions::<T>,
            Self::FogLightenIfsIllusions => l::fog_lighten_ifs_illusions::<T>,
            Self::EasyDodge => l::easy_dodge::<T>,
            Self::ColorBurn => l::color_burn::<T, P>,
            Self::LinearBurn => l::linear_burn::<T, P>,
            Self::Darken => a::darken_only::<T>,
            Self::GammaDark => l::gamma_dark::<T>,
            Self::ShadeIfsIllusions => l::shade_ifs_illusions::<T>,
            Self::FogDarkenIfsIllusions => l::fog_darken_ifs_illusions::<T>,
            Self::EasyBurn => l::easy_burn::<T>,
            Self::Xor => b::xor::<T>,
            Self::Or => b::or::<T>,
            Self::And => b::and::<T>,
            Self::Nand => b::nand::<T>,
            Self::Nor => b::nor::<T>,
            Self::Xnor => b::xnor::<T>,
            Self::Implication => b::implication::<T>,
            Self::NotImplication => b::not_implication::<T>,
            Self::Converse => b::converse::<T>,
            Self::NotConverse => b::not_converse::<T>,
            Self::Reflect => q::reflect::<T>,
            Self::Glow => q::glow::<T>,
            Self::Freeze => q::freeze::<T>,
            Self::Heat => q::heat::<T>,
            Self::GlowHeat => q::glow_heat::<T>,
            Self::HeatGlow => q::heat_glow::<T>,
            Self::ReflectFreeze => q::reflect_freeze::<T>,
            Self::FreezeReflect => q::freeze_reflect::<T>,
            Self::HeatGlowFreezeReflectHybrid => q::heat_glow_freeze_reflect_hybrid::<T>,
        }
    }
}
