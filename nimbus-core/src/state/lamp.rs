//! Shared output state of the link
//!
//! The codec is the only writer: it receives `&mut LampState` for the length
//! of one poll. Renderers and status reporters only ever get `&LampState` or
//! a copy, so the borrow checker enforces single-writer access.

use core::fmt;

use super::color::Rgb;
use super::mode::LedMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colour channels and mode selector last received over the link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LampState {
    color: Rgb,
    mode: i32,
}

impl LampState {
    /// Create a state with the given colour and raw mode index
    pub const fn new(color: Rgb, mode: i32) -> Self {
        Self { color, mode }
    }

    /// Current colour
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Raw mode index as received
    pub fn mode(&self) -> i32 {
        self.mode
    }

    /// Mode as a known lighting mode, if the index names one
    pub fn led_mode(&self) -> Option<LedMode> {
        LedMode::from_index(self.mode)
    }

    /// Overall brightness, the strongest colour channel
    pub fn brightness(&self) -> u8 {
        self.color.brightness()
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn set_red(&mut self, r: u8) {
        self.color.r = r;
    }

    pub fn set_green(&mut self, g: u8) {
        self.color.g = g;
    }

    pub fn set_blue(&mut self, b: u8) {
        self.color.b = b;
    }

    pub fn set_mode(&mut self, mode: i32) {
        self.mode = mode;
    }
}

/// Status line in the lamp's console format
impl fmt::Display for LampState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R: {:3}, G: {:3}, B: {:3}, Mode: {:3}",
            self.color.r, self.color.g, self.color.b, self.mode
        )
    }
}
