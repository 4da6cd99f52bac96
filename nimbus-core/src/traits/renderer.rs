//! LED renderer trait
//!
//! The animation loop runs independently of the serial link. It reads the
//! last received state on every frame and never writes it back.

use crate::state::{LampState, LedMode, Rgb};

/// Errors reported by an LED output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// LED data could not be pushed out
    Transfer,
    /// Output is not initialized
    NotReady,
}

/// Trait for LED strip output
///
/// Effects are board-specific. The renderer only sees `&LampState`, so it
/// cannot race the link for the shared values.
pub trait LampRenderer {
    /// Draw one animation step
    ///
    /// - `state`: colour and mode last received over the link
    /// - `now_ms`: free-running millisecond counter, may wrap
    fn render(&mut self, state: &LampState, now_ms: u32) -> Result<(), RenderError>;

    /// Switch all LEDs off
    fn blank(&mut self) -> Result<(), RenderError>;

    /// Solid colour for this state, if its mode uses the colour channels
    ///
    /// Unknown mode indices fall back to the default mode.
    fn solid_color(state: &LampState) -> Option<Rgb>
    where
        Self: Sized,
    {
        let mode = state.led_mode().unwrap_or_default();
        mode.uses_color().then(|| state.color())
    }
}
