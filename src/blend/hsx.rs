//! Non-separable modes working on RGB triples.
//!
//! Each function reads the source triple and rewrites the destination triple in place, in
//! normalized `f32`. Lightness and saturation are measured in one of four HSX models.

const EPSILON: f32 = f32::EPSILON;

/// Color model used to measure lightness and saturation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HsxModel {
    /// Luma-weighted lightness (Rec. 601), chroma as saturation.
    Hsy,
    /// Lightness as the mean of the extremes.
    Hsl,
    /// Value as the maximum component.
    Hsv,
    /// Intensity as the mean of the components.
    Hsi,
}

impl HsxModel {
    /// Lightness of an RGB triple.
    pub fn lightness(self, [r, g, b]: [f32; 3]) -> f32 {
        match self {
            Self::Hsy => 0.299 * r + 0.587 * g + 0.114 * b,
            Self::Hsl => (max3(r, g, b) + min3(r, g, b)) * 0.5,
            Self::Hsv => max3(r, g, b),
            Self::Hsi => (r + g + b) * (1.0 / 3.0),
        }
    }

    /// Saturation of an RGB triple.
    pub fn saturation(self, rgb: [f32; 3]) -> f32 {
        let [r, g, b] = rgb;
        let max = max3(r, g, b);
        let min = min3(r, g, b);
        let chroma = max - min;
        match self {
            Self::Hsy => chroma,
            Self::Hsl => {
                let light = (max + min) * 0.5;
                let div = 1.0 - (2.0 * light - 1.0).abs();
                if div > EPSILON { chroma / div } else { 1.0 }
            }
            Self::Hsv => {
                if max > EPSILON {
                    chroma / max
                } else {
                    0.0
                }
            }
            Self::Hsi => {
                let intensity = self.lightness(rgb);
                if chroma > EPSILON && intensity > EPSILON {
                    1.0 - min / intensity
                } else {
                    0.0
                }
            }
        }
    }
}

fn max3(a: f32, b: f32, c: f32) -> f32 {
    a.max(b).max(c)
}

fn min3(a: f32, b: f32, c: f32) -> f32 {
    a.min(b).min(c)
}

/// Shift all components by `light`, then pull out-of-gamut results back toward the lightness.
pub fn add_lightness(model: HsxModel, rgb: &mut [f32; 3], light: f32) {
    for c in rgb.iter_mut() {
        *c += light;
    }
    let l = model.lightness(*rgb);
    let n = min3(rgb[0], rgb[1], rgb[2]);
    let x = max3(rgb[0], rgb[1], rgb[2]);

    if n < 0.0 && (l - n) <= EPSILON {
        // gray below black
        *rgb = [0.0; 3];
        return;
    }
    if n < 0.0 {
        let iln = 1.0 / (l - n);
        for c in rgb.iter_mut() {
            *c = l + ((*c - l) * l) * iln;
        }
    }

    if x > 1.0 && (x - l) > EPSILON {
        let il = 1.0 - l;
        let ixl = 1.0 / (x - l);
        for c in rgb.iter_mut() {
            *c = l + ((*c - l) * il) * ixl;
        }
    }
}

/// Move the triple to lightness `light`.
pub fn set_lightness(model: HsxModel, rgb: &mut [f32; 3], light: f32) {
    let delta = light - model.lightness(*rgb);
    add_lightness(model, rgb, delta);
}

/// Rescale the triple so its chroma equals `sat`, keeping hue.
pub fn set_saturation(rgb: &mut [f32; 3], sat: f32) {
    let (mut min, mut mid, mut max) = (0usize, 1usize, 2usize);
    if rgb[mid] < rgb[min] {
        std::mem::swap(&mut min, &mut mid);
    }
    if rgb[max] < rgb[mid] {
        std::mem::swap(&mut max, &mut mid);
    }
    if rgb[mid] < rgb[min] {
        std::mem::swap(&mut min, &mut mid);
    }

    let chroma = rgb[max] - rgb[min];
    if chroma > 0.0 {
        rgb[mid] = ((rgb[mid] - rgb[min]) * sat) / chroma;
        rgb[max] = sat;
        rgb[min] = 0.0;
    } else {
        *rgb = [0.0; 3];
    }
}

/// Non-separable composite function over one HSX model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HsxFunction {
    /// Source hue, destination saturation and lightness.
    Hue,
    /// Source hue and saturation, destination lightness.
    Color,
    /// Source saturation, destination hue and lightness.
    Saturation,
    /// Push destination saturation toward one by the source saturation.
    IncreaseSaturation,
    /// Pull destination saturation toward zero by the source saturation.
    DecreaseSaturation,
    /// Source lightness, destination hue and saturation.
    Lightness,
    /// Add source lightness to the destination.
    IncreaseLightness,
    /// Add source lightness minus one to the destination.
    DecreaseLightness,
}

impl HsxFunction {
    /// Apply to `dst` with `src` as the other operand.
    pub fn apply(self, model: HsxModel, src: [f32; 3], dst: &mut [f32; 3]) {
        match self {
            Self::Hue => {
                let sat = model.saturation(*dst);
                let light = model.lightness(*dst);
                *dst = src;
                set_saturation(dst, sat);
                set_lightness(model, dst, light);
            }
            Self::Color => {
                let light = model.lightness(*dst);
                *dst = src;
                set_lightness(model, dst, light);
            }
            Self::Saturation => {
                let sat = model.saturation(src);
                let light = model.lightness(*dst);
                set_saturation(dst, sat);
                set_lightness(model, dst, light);
            }
            Self::IncreaseSaturation => {
                let d = model.saturation(*dst);
                let sat = d + (1.0 - d) * model.saturation(src);
                let light = model.lightness(*dst);
                set_saturation(dst, sat);
                set_lightness(model, dst, light);
            }
            Self::DecreaseSaturation => {
                let sat = model.saturation(*dst) * model.saturation(src);
                let light = model.lightness(*dst);
                set_saturation(dst, sat);
                set_lightness(model, dst, light);
            }
            Self::Lightness => set_lightness(model, dst, model.lightness(src)),
            Self::IncreaseLightness => add_lightness(model, dst, model.lightness(src)),
            Self::DecreaseLightness => add_lightness(model, dst, model.lightness(src) - 1.0),
        }
    }
}

/// Keep whichever of source and destination has the lower luma.
pub fn darker_color(src: [f32; 3], dst: &mut [f32; 3]) {
    if HsxModel::Hsy.lightness(*dst) >= HsxModel::Hsy.lightness(src) {
        *dst = src;
    }
}

/// Keep whichever of source and destination has the higher luma.
pub fn lighter_color(src: [f32; 3], dst: &mut [f32; 3]) {
    if HsxModel::Hsy.lightness(*dst) <= HsxModel::Hsy.lightness(src) {
        *dst = src;
    }
}

/// Combine two tangent-space normal maps.
pub fn tangent_normalmap(src: [f32; 3], dst: &mut [f32; 3]) {
    dst[0] = src[0] + (dst[0] - 0.5);
    dst[1] = src[1] + (dst[1] - 0.5);
    dst[2] = src[2] + (dst[2] - 1.0);
}

/// A non-separable RGB blend, chosen at lookup time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RgbBlend {
    /// One of the HSX functions in one model.
    Hsx(HsxFunction, HsxModel),
    /// [`darker_color`].
    DarkerColor,
    /// [`lighter_color`].
    LighterColor,
    /// [`tangent_normalmap`].
    TangentNormalmap,
}

impl RgbBlend {
    /// Apply to `dst` with `src` as the other operand.
    pub fn apply(self, src: [f32; 3], dst: &mut [f32; 3]) {
        match self {
            Self::Hsx(f, model) => f.apply(model, src, dst),
            Self::DarkerColor => darker_color(src, dst),
            Self::LighterColor => lighter_color(src, dst),
            Self::TangentNormalmap => tangent_normalmap(src, dst),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/hsx.rs"]
mod tests;
