//! Message types for the lamp link
//!
//! The first body byte selects the message, the rest is ASCII text:
//! - `C`: colour, six hex digits `RRGGBB`
//! - `R`, `G`, `B`: one decimal colour channel
//! - `M`: decimal mode index
//!
//! The control board sends colour as three channel frames; the LED board
//! understands both forms.

use nimbus_core::{LampState, Rgb};
use nimbus_hal::SerialStream;

use crate::encoder::FrameWriter;
use crate::numeric::{parse_decimal, parse_hex, Parsed};

// Message tags
pub const TAG_COLOR: u8 = b'C';
pub const TAG_RED: u8 = b'R';
pub const TAG_GREEN: u8 = b'G';
pub const TAG_BLUE: u8 = b'B';
pub const TAG_MODE: u8 = b'M';

/// Largest value a packed `RRGGBB` colour can take
const MAX_PACKED_COLOR: i32 = 0xFF_FFFF;

/// Messages understood on the lamp link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LampMessage {
    /// Set all three colour channels
    Color(Rgb),
    /// Set the red channel
    Red(u8),
    /// Set the green channel
    Green(u8),
    /// Set the blue channel
    Blue(u8),
    /// Select a lighting mode by index
    Mode(i32),
}

/// Reasons a frame body does not decode to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Frame had no tag byte
    Empty,
    /// Tag is not part of the vocabulary
    UnknownTag(u8),
}

/// A decoded message and whether its numbers parsed cleanly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decoded {
    pub message: LampMessage,
    /// A number was not well-formed; `message` holds the best-effort value
    pub malformed: bool,
}

impl LampMessage {
    /// Wire tag of this message
    pub fn tag(&self) -> u8 {
        match self {
            LampMessage::Color(_) => TAG_COLOR,
            LampMessage::Red(_) => TAG_RED,
            LampMessage::Green(_) => TAG_GREEN,
            LampMessage::Blue(_) => TAG_BLUE,
            LampMessage::Mode(_) => TAG_MODE,
        }
    }

    /// Decode a frame body (tag followed by payload)
    ///
    /// Numbers are parsed best-effort and never fail.
    pub fn decode(body: &[u8]) -> Result<Decoded, DecodeError> {
        let (&tag, payload) = body.split_first().ok_or(DecodeError::Empty)?;

        let decoded = match tag {
            TAG_COLOR => decode_color(payload),
            TAG_RED => decode_channel(payload, LampMessage::Red),
            TAG_GREEN => decode_channel(payload, LampMessage::Green),
            TAG_BLUE => decode_channel(payload, LampMessage::Blue),
            TAG_MODE => {
                let Parsed { value, exact } = parse_decimal(payload);
                Decoded {
                    message: LampMessage::Mode(value),
                    malformed: !exact,
                }
            }
            other => return Err(DecodeError::UnknownTag(other)),
        };
        Ok(decoded)
    }

    /// Write this message into the shared state
    pub fn apply(&self, state: &mut LampState) {
        match *self {
            LampMessage::Color(color) => state.set_color(color),
            LampMessage::Red(r) => state.set_red(r),
            LampMessage::Green(g) => state.set_green(g),
            LampMessage::Blue(b) => state.set_blue(b),
            LampMessage::Mode(mode) => state.set_mode(mode),
        }
    }

    /// Compose this message as one complete frame line
    pub fn write_to<S: SerialStream>(&self, writer: &mut FrameWriter<'_, S>) {
        writer.start().tag(self.tag());
        match *self {
            LampMessage::Color(color) => writer.emit(format_args!("{:x}", color)),
            LampMessage::Red(v) | LampMessage::Green(v) | LampMessage::Blue(v) => writer.emit(v),
            LampMessage::Mode(mode) => writer.emit(mode),
        };
        writer.end().newline();
    }

    /// Messages that announce a complete state to the peer
    ///
    /// Channel frames first, mode last, the order the control board uses
    /// for its periodic resend.
    pub fn announce(state: &LampState) -> [LampMessage; 4] {
        let color = state.color();
        [
            LampMessage::Red(color.r),
            LampMessage::Green(color.g),
            LampMessage::Blue(color.b),
            LampMessage::Mode(state.mode()),
        ]
    }
}

fn decode_channel(payload: &[u8], make: fn(u8) -> LampMessage) -> Decoded {
    let (value, in_range) = channel(parse_decimal(payload));
    Decoded {
        message: make(value),
        malformed: !in_range,
    }
}

fn decode_color(payload: &[u8]) -> Decoded {
    let Parsed { value, exact } = parse_hex(payload);
    Decoded {
        message: LampMessage::Color(Rgb::from_packed(value)),
        malformed: !exact || !(0..=MAX_PACKED_COLOR).contains(&value),
    }
}

/// Narrow a parsed number to a channel byte, wrapping like a C `uint8_t`
fn channel(parsed: Parsed) -> (u8, bool) {
    let in_range = parsed.exact && (0..=u8::MAX as i32).contains(&parsed.value);
    (parsed.value as u8, in_range)
}
