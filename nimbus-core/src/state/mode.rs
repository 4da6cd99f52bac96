//! Lighting modes selected over the link

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lighting mode rendered by the lamp
///
/// The wire carries the mode as a plain decimal index, so any integer can
/// arrive in the mode slot. Only the indices below name a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LedMode {
    /// Dim blue background with random lightning flashes
    #[default]
    Thunder,
    /// Warm sunlight
    Sunlight,
    /// Rotating rainbow
    Rainbow,
    /// Solid colour taken from the colour channels
    Color,
}

// Wire format values
const MODE_THUNDER: i32 = 0;
const MODE_SUNLIGHT: i32 = 1;
const MODE_RAINBOW: i32 = 2;
const MODE_COLOR: i32 = 3;

impl LedMode {
    /// Parse a mode from its wire index
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            MODE_THUNDER => Some(LedMode::Thunder),
            MODE_SUNLIGHT => Some(LedMode::Sunlight),
            MODE_RAINBOW => Some(LedMode::Rainbow),
            MODE_COLOR => Some(LedMode::Color),
            _ => None,
        }
    }

    /// Convert to wire index
    pub fn index(self) -> i32 {
        match self {
            LedMode::Thunder => MODE_THUNDER,
            LedMode::Sunlight => MODE_SUNLIGHT,
            LedMode::Rainbow => MODE_RAINBOW,
            LedMode::Color => MODE_COLOR,
        }
    }

    /// Returns true if the mode renders the colour channels
    pub fn uses_color(&self) -> bool {
        matches!(self, LedMode::Color)
    }
}
