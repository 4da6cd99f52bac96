//! Link configuration
//!
//! Set once when the codec is created. Setters on the codec may change
//! individual fields later; a change applies from the next received byte.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default frame start marker
pub const DEFAULT_START_MARKER: u8 = b'<';

/// Default frame end marker
pub const DEFAULT_END_MARKER: u8 = b'>';

/// Default separator between payload fields
pub const DEFAULT_SEPARATOR: u8 = b'#';

/// Default periodic report rate (reports per second)
pub const DEFAULT_PRINT_FREQUENCY_HZ: f32 = 1.0;

/// Codec configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodecConfig {
    /// Byte that opens a frame
    pub start_marker: u8,
    /// Byte that closes a frame
    pub end_marker: u8,
    /// Byte between fields of a multi-field payload
    pub separator: u8,
    /// Periodic report rate in reports per second; zero or negative disables
    pub print_frequency_hz: f32,
    /// Log every dispatched frame and dump status on each report
    pub debug: bool,
    /// Reject frames with malformed numbers instead of applying a best-effort value
    pub strict: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER,
            end_marker: DEFAULT_END_MARKER,
            separator: DEFAULT_SEPARATOR,
            print_frequency_hz: DEFAULT_PRINT_FREQUENCY_HZ,
            debug: false,
            strict: false,
        }
    }
}

impl CodecConfig {
    /// Frame delimiters as used by the receiver
    pub fn markers(&self) -> Markers {
        Markers {
            start: self.start_marker,
            end: self.end_marker,
        }
    }
}

/// Frame delimiter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Markers {
    pub start: u8,
    pub end: u8,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER,
            end: DEFAULT_END_MARKER,
        }
    }
}
