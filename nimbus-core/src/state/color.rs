//! RGB colour value shared between the link and the renderer

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound of the brightness scale used by the control page (percent)
pub const MAX_BRIGHTNESS_PERCENT: i32 = 100;

/// 8-bit-per-channel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split a packed `0xRRGGBB` value into channels
    ///
    /// Bits above the low 24 are ignored, so any integer (including the
    /// saturated results of a best-effort hex parse) maps to a colour.
    pub const fn from_packed(value: i32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack into `0xRRGGBB`
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Brightness of the colour, taken as its strongest channel
    pub fn brightness(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Rescale so the strongest channel sits at `percent` of full scale
    ///
    /// `percent` is clamped to 0..=100. The other channels keep their ratio to
    /// the strongest one. A black colour becomes grey at the requested level.
    ///
    /// Used by the control board's brightness gesture before it sends the
    /// channel frames; the LED board renders channels as received.
    pub fn with_brightness(self, percent: i32) -> Self {
        let target = percent.clamp(0, MAX_BRIGHTNESS_PERCENT) * 255 / MAX_BRIGHTNESS_PERCENT;
        let peak = self.brightness() as i32;
        if peak == 0 {
            let level = target as u8;
            return Self::new(level, level, level);
        }
        let scale = |c: u8| ((c as i32 * target) / peak).clamp(0, 255) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Formats as six lowercase hex digits, the `C` frame payload and the
/// `#rrggbb` colour-picker notation without the hash
impl fmt::LowerHex for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
