//! Mode identifiers and categories.

use crate::blend::SeparableMode as S;
use crate::blend::hsx::{HsxFunction as F, HsxModel as M};
use crate::foundation::error::{CompositeError, CompositeResult};

pub use crate::blend::SeparableMode;
pub use crate::blend::hsx::{HsxFunction, HsxModel};

/// Grouping used by pickers and documentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ModeCategory {
    Arithmetic,
    Binary,
    Modulo,
    Negative,
    Light,
    Dark,
    Hsy,
    Hsi,
    Hsl,
    Hsv,
    Mix,
    Misc,
    Quadratic,
}

/// A composite mode, serialized as its identifier string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CompositeMode {
    /// Porter-Duff source-over (`normal`).
    Over,
    /// Stroke-capped painting mode (`alphadarken`).
    AlphaDarken,
    /// Opacity-weighted replacement (`copy`).
    Copy,
    /// Alpha removal (`erase`).
    Erase,
    /// Paint under the destination (`behind`).
    Behind,
    /// Keep the destination where the source covers it (`destination-in`).
    DestinationIn,
    /// Destination atop the source (`destination-atop`).
    DestinationAtop,
    /// Smooth maximum of source and destination alpha (`greater`).
    Greater,
    /// Add the alpha-weighted source color (`luminosity_sai`).
    LuminositySai,
    /// A separable channel function.
    Separable(SeparableMode),
    /// An HSX function in one model.
    NonSeparable(HsxFunction, HsxModel),
    /// Keep the darker of source and destination by luma (`darker color`).
    DarkerColor,
    /// Keep the lighter of source and destination by luma (`lighter color`).
    LighterColor,
    /// Combine tangent-space normal maps (`tangent_normalmap`).
    TangentNormalmap,
}

use CompositeMode::{NonSeparable as N, Separable as Sep};
use ModeCategory as C;

const MODES: &[(CompositeMode, &str, ModeCategory)] = &[
    (CompositeMode::Over, "normal", C::Mix),
    (CompositeMode::AlphaDarken, "alphadarken", C::Mix),
    (CompositeMode::Copy, "copy", C::Misc),
    (CompositeMode::Erase, "erase", C::Misc),
    (CompositeMode::Behind, "behind", C::Mix),
    (CompositeMode::Greater, "greater", C::Mix),
    (CompositeMode::DestinationIn, "destination-in", C::Misc),
    (CompositeMode::DestinationAtop, "destination-atop", C::Misc),
    // arithmetic
    (Sep(S::Add), "add", C::Arithmetic),
    (Sep(S::Subtract), "subtract", C::Arithmetic),
    (Sep(S::InverseSubtract), "inverse_subtract", C::Arithmetic),
    (Sep(S::Multiply), "multiply", C::Arithmetic),
    (Sep(S::Divide), "divide", C::Arithmetic),
    // modulo
    (Sep(S::Modulo), "modulo", C::Modulo),
    (Sep(S::ModuloContinuous), "modulo_continuous", C::Modulo),
    (Sep(S::DivisiveModulo), "divisive_modulo", C::Modulo),
    (Sep(S::DivisiveModuloContinuous), "divisive_modulo_continuous", C::Modulo),
    (Sep(S::ModuloShift), "modulo_shift", C::Modulo),
    (Sep(S::ModuloShiftContinuous), "modulo_shift_continuous", C::Modulo),
    // negative
    (Sep(S::Difference), "diff", C::Negative),
    (Sep(S::Exclusion), "exclusion", C::Negative),
    (Sep(S::ArcTangent), "arc_tangent", C::Negative),
    (Sep(S::Equivalence), "equivalence", C::Negative),
    (Sep(S::AdditiveSubtractive), "additive_subtractive", C::Negative),
    (Sep(S::Negation), "negation", C::Negative),
    // mix
    (Sep(S::Overlay), "overlay", C::Mix),
    (Sep(S::GrainMerge), "grain_merge", C::Mix),
    (Sep(S::GrainExtract), "grain_extract", C::Mix),
    (Sep(S::HardMix), "hard mix", C::Mix),
    (Sep(S::HardMixPhotoshop), "hard_mix_photoshop", C::Mix),
    (Sep(S::HardMixSofterPhotoshop), "hard_mix_softer_photoshop", C::Mix),
    (Sep(S::GeometricMean), "geometric_mean", C::Mix),
    (Sep(S::Parallel), "parallel", C::Mix),
    (Sep(S::Allanon), "allanon", C::Mix),
    (Sep(S::HardOverlay), "hard_overlay", C::Mix),
    (Sep(S::Interpolation), "interpolation", C::Mix),
    (Sep(S::Interpolation2x), "interpolation 2x", C::Mix),
    (Sep(S::PenumbraA), "penumbra a", C::Mix),
    (Sep(S::PenumbraB), "penumbra b", C::Mix),
    (Sep(S::PenumbraC), "penumbra c", C::Mix),
    (Sep(S::PenumbraD), "penumbra d", C::Mix),
    // light
    (Sep(S::Screen), "screen", C::Light),
    (Sep(S::ColorDodge), "dodge", C::Light),
    (Sep(S::LinearDodge), "linear_dodge", C::Light),
    (Sep(S::Lighten), "lighten", C::Light),
    (Sep(S::HardLight), "hard_light", C::Light),
    (Sep(S::SoftLightIfsIllusions), "soft_light_ifs_illusions", C::Light),
    (Sep(S::SoftLightPegtopDelphi), "soft_light_pegtop_delphi", C::Light),
    (Sep(S::SoftLightSvg), "soft_light_svg", C::Light),
    (Sep(S::SoftLight), "soft_light", C::Light),
    (Sep(S::GammaLight), "gamma_light", C::Light),
    (Sep(S::GammaIllumination), "gamma_illumination", C::Light),
    (Sep(S::VividLight), "vivid_light", C::Light),
    (Sep(S::FlatLight), "flat_light", C::Light),
    (Sep(S::PinLight), "pin_light", C::Light),
    (Sep(S::LinearLight), "linear light", C::Light),
    (Sep(S::PnormA), "pnorm_a", C::Light),
    (Sep(S::PnormB), "pnorm_b", C::Light),
    (Sep(S::SuperLight), "super_light", C::Light),
    (Sep(S::TintIfsIllusions), "tint_ifs_illusions", C::Light),
    (Sep(S::FogLightenIfsIllusions), "fog_lighten_ifs_illusions", C::Light),
    (Sep(S::EasyDodge), "easy dodge", C::Light),
    (CompositeMode::LuminositySai, "luminosity_sai", C::Light),
    (CompositeMode::LighterColor, "lighter color", C::Light),
    // dark
    (Sep(S::ColorBurn), "burn", C::Dark),
    (Sep(S::LinearBurn), "linear_burn", C::Dark),
    (Sep(S::Darken), "darken", C::Dark),
    (Sep(S::GammaDark), "gamma_dark", C::Dark),
    (Sep(S::ShadeIfsIllusions), "shade_ifs_illusions", C::Dark),
    (Sep(S::FogDarkenIfsIllusions), "fog_darken_ifs_illusions", C::Dark),
    (Sep(S::EasyBurn), "easy burn", C::Dark),
    (CompositeMode::DarkerColor, "darker color", C::Dark),
    // binary
    (Sep(S::Xor), "xor", C::Binary),
    (Sep(S::Or), "or", C::Binary),
    (Sep(S::And), "and", C::Binary),
    (Sep(S::Nand), "nand", C::Binary),
    (Sep(S::Nor), "nor", C::Binary),
    (Sep(S::Xnor), "xnor", C::Binary),
    (Sep(S::Implication), "implication", C::Binary),
    (Sep(S::NotImplication), "not_implication", C::Binary),
    (Sep(S::Converse), "converse", C::Binary),
    (Sep(S::NotConverse), "not_converse", C::Binary),
    // quadratic
    (Sep(S::Reflect), "reflect", C::Quadratic),
    (Sep(S::Glow), "glow", C::Quadratic),
    (Sep(S::Freeze), "freeze", C::Quadratic),
    (Sep(S::Heat), "heat", C::Quadratic),
    (Sep(S::GlowHeat), "glow_heat", C::Quadratic),
    (Sep(S::HeatGlow), "heat_glow", C::Quadratic),
    (Sep(S::ReflectFreeze), "reflect_freeze", C::Quadratic),
    (Sep(S::FreezeReflect), "freeze_reflect", C::Quadratic),
    (
        Sep(S::HeatGlowFreezeReflectHybrid),
        "heat_glow_freeze_reflect_hybrid",
        C::Quadratic,
    ),
    // hsy
    (N(F::Hue, M::Hsy), "hue", C::Hsy),
    (N(F::Color, M::Hsy), "color", C::Hsy),
    (N(F::Saturation, M::Hsy), "saturation", C::Hsy),
    (N(F::IncreaseSaturation, M::Hsy), "inc_saturation", C::Hsy),
    (N(F::DecreaseSaturation, M::Hsy), "dec_saturation", C::Hsy),
    (N(F::Lightness, M::Hsy), "luminize", C::Hsy),
    (N(F::IncreaseLightness, M::Hsy), "inc_luminosity", C::Hsy),
    (N(F::DecreaseLightness, M::Hsy), "dec_luminosity", C::Hsy),
    // hsv
    (N(F::Hue, M::Hsv), "hue_hsv", C::Hsv),
    (N(F::Color, M::Hsv), "color_hsv", C::Hsv),
    (N(F::Saturation, M::Hsv), "saturation_hsv", C::Hsv),
    (N(F::IncreaseSaturation, M::Hsv), "inc_saturation_hsv", C::Hsv),
    (N(F::DecreaseSaturation, M::Hsv), "dec_saturation_hsv", C::Hsv),
    (N(F::Lightness, M::Hsv), "value", C::Hsv),
    (N(F::IncreaseLightness, M::Hsv), "inc_value", C::Hsv),
    (N(F::DecreaseLightness, M::Hsv), "dec_value", C::Hsv),
    // hsl
    (N(F::Hue, M::Hsl), "hue_hsl", C::Hsl),
    (N(F::Color, M::Hsl), "color_hsl", C::Hsl),
    (N(F::Saturation, M::Hsl), "saturation_hsl", C::Hsl),
    (N(F::IncreaseSaturation, M::Hsl), "inc_saturation_hsl", C::Hsl),
    (N(F::DecreaseSaturation, M::Hsl), "dec_saturation_hsl", C::Hsl),
    (N(F::Lightness, M::Hsl), "lightness", C::Hsl),
    (N(F::IncreaseLightness, M::Hsl), "inc_lightness", C::Hsl),
    (N(F::DecreaseLightness, M::Hsl), "dec_lightness", C::Hsl),
    // hsi
    (N(F::Hue, M::Hsi), "hue_hsi", C::Hsi),
    (N(F::Color, M::Hsi), "color_hsi", C::Hsi),
    (N(F::Saturation, M::Hsi), "saturation_hsi", C::Hsi),
    (N(F::IncreaseSaturation, M::Hsi), "inc_saturation_hsi", C::Hsi),
    (N(F::DecreaseSaturation, M::Hsi), "dec_saturation_hsi", C::Hsi),
    (N(F::Lightness, M::Hsi), "intensity", C::Hsi),
    (N(F::IncreaseLightness, M::Hsi), "inc_intensity", C::Hsi),
    (N(F::DecreaseLightness, M::Hsi), "dec_intensity", C::Hsi),
    // misc
    (CompositeMode::TangentNormalmap, "tangent_normalmap", C::Misc),
];

impl CompositeMode {
    /// Look a mode up by its identifier.
    pub fn from_id(id: &str) -> CompositeResult<Self> {
        MODES
            .iter()
            .find(|(_, mode_id, _)| *mode_id == id)
            .map(|(mode, _, _)| *mode)
            .ok_or_else(|| CompositeError::unknown_mode(id))
    }

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        self.entry().1
    }

    /// Category the mode is listed under.
    pub fn category(self) -> ModeCategory {
        self.entry().2
    }

    /// Every mode, in listing order.
    pub fn all() -> impl Iterator<Item = CompositeMode> {
        MODES.iter().map(|(mode, _, _)| *mode)
    }

    /// Return `true` for modes that read red, green and blue jointly.
    pub fn needs_rgb(self) -> bool {
        matches!(
            self,
            Self::NonSeparable(..) | Self::DarkerColor | Self::LighterColor | Self::TangentNormalmap
        )
    }

    fn entry(self) -> &'static (CompositeMode, &'static str, ModeCategory) {
        // every variant is listed in MODES, checked by the registry tests
        MODES
            .iter()
            .find(|(mode, _, _)| *mode == self)
            .unwrap_or(&MODES[0])
    }
}

impl std::fmt::Display for CompositeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for CompositeMode {
    type Err = CompositeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl TryFrom<String> for CompositeMode {
    type Error = CompositeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_id(&value)
    }
}

impl From<CompositeMode> for String {
    fn from(mode: CompositeMode) -> Self {
        mode.id().to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/modes.rs"]
mod tests;
