use crate::foundation::error::{CompositeError, CompositeResult};

/// Maximum number of channels a pixel may carry.
pub const MAX_CHANNELS: usize = 16;

/// Storage type of every channel in a pixel.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    /// 8-bit unsigned integer, `0..=255`.
    U8,
    /// 16-bit unsigned integer, `0..=65535`.
    U16,
    /// 32-bit float, nominal `0.0..=1.0` with HDR values above one allowed.
    F32,
}

impl ChannelType {
    /// Size of one channel in bytes.
    pub fn bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::F32 => 4,
        }
    }

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::F32 => "f32",
        }
    }
}

/// Pixel layout descriptor: channel type, channel count and where alpha and RGB live.
///
/// Pixels are stored interleaved, channels in native byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelFormat {
    /// Storage type shared by all channels.
    pub channel_type: ChannelType,
    /// Total number of channels, alpha included.
    pub channel_count: usize,
    /// Index of the alpha channel, `None` for alpha-less formats.
    pub alpha_pos: Option<usize>,
    /// Indices of red, green and blue, required by non-separable modes.
    pub rgb_pos: Option<[usize; 3]>,
    /// Color channels store ink amounts (CMYK) rather than light. Separable blend functions
    /// then run on inverted values.
    #[serde(default)]
    pub subtractive: bool,
}

impl PixelFormat {
    /// Create a validated custom layout.
    pub fn new(
        channel_type: ChannelType,
        channel_count: usize,
        alpha_pos: Option<usize>,
        rgb_pos: Option<[usize; 3]>,
    ) -> CompositeResult<Self> {
        let fmt = Self {
            channel_type,
            channel_count,
            alpha_pos,
            rgb_pos,
            subtractive: false,
        };
        fmt.validate()?;
        Ok(fmt)
    }

    const fn rgba(channel_type: ChannelType) -> Self {
        Self {
            channel_type,
            channel_count: 4,
            alpha_pos: Some(3),
            rgb_pos: Some([0, 1, 2]),
            subtractive: false,
        }
    }

    const fn bgra(channel_type: ChannelType) -> Self {
        Self {
            channel_type,
            channel_count: 4,
            alpha_pos: Some(3),
            rgb_pos: Some([2, 1, 0]),
            subtractive: false,
        }
    }

    /// 8-bit RGBA.
    pub const fn rgba8() -> Self {
        Self::rgba(ChannelType::U8)
    }

    /// 8-bit BGRA.
    pub const fn bgra8() -> Self {
        Self::bgra(ChannelType::U8)
    }

    /// 16-bit RGBA.
    pub const fn rgba16() -> Self {
        Self::rgba(ChannelType::U16)
    }

    /// 16-bit BGRA.
    pub const fn bgra16() -> Self {
        Self::bgra(ChannelType::U16)
    }

    /// 32-bit float RGBA.
    pub const fn rgba_f32() -> Self {
        Self::rgba(ChannelType::F32)
    }

    /// 8-bit gray + alpha.
    pub const fn graya8() -> Self {
        Self {
            channel_type: ChannelType::U8,
            channel_count: 2,
            alpha_pos: Some(1),
            rgb_pos: None,
            subtractive: false,
        }
    }

    /// 16-bit gray + alpha.
    pub const fn graya16() -> Self {
        Self {
            channel_type: ChannelType::U16,
            ..Self::graya8()
        }
    }

    /// 8-bit gray without alpha.
    pub const fn gray8() -> Self {
        Self {
            channel_type: ChannelType::U8,
            channel_count: 1,
            alpha_pos: None,
            rgb_pos: None,
            subtractive: false,
        }
    }

    /// 8-bit CMYK + alpha.
    pub const fn cmyka8() -> Self {
        Self {
            channel_type: ChannelType::U8,
            channel_count: 5,
            alpha_pos: Some(4),
            rgb_pos: None,
            subtractive: true,
        }
    }

    /// 32-bit float CMYK + alpha.
    pub const fn cmyka_f32() -> Self {
        Self {
            channel_type: ChannelType::F32,
            ..Self::cmyka8()
        }
    }

    /// Same layout with the given color model.
    pub const fn with_subtractive(self, subtractive: bool) -> Self {
        Self {
            subtractive,
            ..self
        }
    }

    /// Size of one pixel in bytes.
    pub fn pixel_bytes(self) -> usize {
        self.channel_count * self.channel_type.bytes()
    }

    /// Return `true` when the format carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        self.alpha_pos.is_some()
    }

    /// Return `true` for the four-channel, alpha-last layouts served by fixed-format compositors.
    pub fn is_fixed_four(self) -> bool {
        self.channel_count == 4 && self.alpha_pos == Some(3)
    }

    /// Check channel count and the alpha/RGB positions.
    pub fn validate(self) -> CompositeResult<()> {
        if self.channel_count == 0 {
            return Err(CompositeError::validation("pixel format needs at least one channel"));
        }
        if self.channel_count > MAX_CHANNELS {
            return Err(CompositeError::validation(format!(
                "pixel format has {} channels, at most {MAX_CHANNELS} are supported",
                self.channel_count
            )));
        }
        if let Some(a) = self.alpha_pos
            && a >= self.channel_count
        {
            return Err(CompositeError::validation(format!(
                "alpha position {a} is outside {} channels",
                self.channel_count
            )));
        }
        if let Some(rgb) = self.rgb_pos {
            for (i, &p) in rgb.iter().enumerate() {
                if p >= self.channel_count {
                    return Err(CompositeError::validation(format!(
                        "rgb position {p} is outside {} channels",
                        self.channel_count
                    )));
                }
                if Some(p) == self.alpha_pos {
                    return Err(CompositeError::validation(format!(
                        "rgb position {p} aliases the alpha channel"
                    )));
                }
                if rgb[..i].contains(&p) {
                    return Err(CompositeError::validation(format!(
                        "rgb position {p} appears twice"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Bitset selecting which channels a composite call may write.
///
/// The empty set and a set covering every channel both mean "all channels". Clearing the alpha
/// bit of an otherwise non-empty set locks alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ChannelFlags(pub u32);

impl ChannelFlags {
    /// The "all channels" set.
    pub const ALL: Self = Self(0);

    /// Set with exactly the listed channel indices.
    pub fn from_channels(channels: &[usize]) -> Self {
        channels.iter().fold(Self(0), |acc, &c| acc.with(c))
    }

    /// Every channel of `format` except alpha (alpha-locked).
    pub fn alpha_locked_for(format: PixelFormat) -> Self {
        let mut flags = Self::full_for(format.channel_count);
        if let Some(a) = format.alpha_pos {
            flags = flags.without(a);
        }
        flags
    }

    fn full_for(channel_count: usize) -> Self {
        if channel_count >= 32 {
            Self(u32::MAX)
        } else {
            Self((1u32 << channel_count) - 1)
        }
    }

    /// Add `channel` to the set.
    pub fn with(self, channel: usize) -> Self {
        Self(self.0 | (1u32 << channel))
    }

    /// Remove `channel` from the set. Removing from the empty set starts from "every bit".
    pub fn without(self, channel: usize) -> Self {
        let base = if self.0 == 0 { u32::MAX } else { self.0 };
        Self(base & !(1u32 << channel))
    }

    /// Return `true` when `channel` may be written.
    pub fn contains(self, channel: usize) -> bool {
        self.0 == 0 || (self.0 & (1u32 << channel)) != 0
    }

    /// Return `true` when every channel of a `channel_count`-channel pixel may be written.
    pub fn is_all(self, channel_count: usize) -> bool {
        let full = Self::full_for(channel_count).0;
        self.0 == 0 || (self.0 & full) == full
    }

    /// Return `true` when `format` has alpha and its bit is cleared.
    pub fn alpha_locked(self, format: PixelFormat) -> bool {
        match format.alpha_pos {
            Some(a) => !self.contains(a),
            None => false,
        }
    }

    /// Reject bits that name channels `format` does not have.
    pub fn validate(self, format: PixelFormat) -> CompositeResult<()> {
        let full = Self::full_for(format.channel_count).0;
        let extra = self.0 & !full;
        // high bits are either untouched or all set by `without` on the empty set
        if extra != 0 && extra != !full {
            return Err(CompositeError::validation(format!(
                "channel flags {:#b} name channels beyond {}",
                self.0, format.channel_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
