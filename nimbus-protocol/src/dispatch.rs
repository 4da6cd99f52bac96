//! Frame dispatcher
//!
//! Turns a completed frame body into a state update. Nothing here can fail
//! in a way that stops the control loop; every outcome is reported as a
//! [`Dispatch`] value for the caller to count or log.

use nimbus_core::LampState;

use crate::config::CodecConfig;
use crate::messages::{DecodeError, Decoded, LampMessage};

/// Outcome of dispatching one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// State updated; `malformed` marks a best-effort numeric value
    Applied {
        message: LampMessage,
        malformed: bool,
    },
    /// Strict mode dropped a frame with a malformed number; state untouched
    Rejected { tag: u8 },
    /// Tag not in the vocabulary; state untouched
    UnknownTag(u8),
    /// Frame had no tag (`<>`); state untouched
    Empty,
}

impl Dispatch {
    /// Returns true if the state was written
    pub fn is_applied(&self) -> bool {
        matches!(self, Dispatch::Applied { .. })
    }
}

/// Applies decoded frames to the lamp state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatcher {
    strict: bool,
}

impl Dispatcher {
    /// Create a dispatcher
    ///
    /// With `strict` set, frames whose numbers are not well-formed are
    /// dropped instead of applied with a best-effort value.
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Create a dispatcher matching a codec configuration
    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.strict)
    }

    /// Dispatch one frame body (tag followed by payload)
    pub fn dispatch(&self, body: &[u8], state: &mut LampState) -> Dispatch {
        match LampMessage::decode(body) {
            Err(DecodeError::Empty) => Dispatch::Empty,
            Err(DecodeError::UnknownTag(tag)) => Dispatch::UnknownTag(tag),
            Ok(Decoded {
                message,
                malformed: true,
            }) if self.strict => Dispatch::Rejected { tag: message.tag() },
            Ok(Decoded { message, malformed }) => {
                message.apply(state);
                Dispatch::Applied { message, malformed }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::Rgb;

    fn lenient() -> Dispatcher {
        Dispatcher::new(false)
    }

    fn strict() -> Dispatcher {
        Dispatcher::new(true)
    }

    #[test]
    fn test_color_roundtrip() {
        let mut state = LampState::default();
        let outcome = lenient().dispatch(b"C123456", &mut state);

        assert!(outcome.is_applied());
        assert_eq!(state.color(), Rgb::new(18, 52, 86));
    }

    #[test]
    fn test_mode_slot() {
        let mut state = LampState::default();
        lenient().dispatch(b"M2", &mut state);
        assert_eq!(state.mode(), 2);
        lenient().dispatch(b"M0", &mut state);
        assert_eq!(state.mode(), 0);
    }

    #[test]
    fn test_empty_mode_payload_reads_zero() {
        let mut state = LampState::new(Rgb::BLACK, 3);
        let outcome = lenient().dispatch(b"M", &mut state);

        assert_eq!(
            outcome,
            Dispatch::Applied {
                message: LampMessage::Mode(0),
                malformed: true
            }
        );
        assert_eq!(state.mode(), 0);
    }

    #[test]
    fn test_empty_body() {
        let mut state = LampState::new(Rgb::new(1, 2, 3), 1);
        assert_eq!(lenient().dispatch(b"", &mut state), Dispatch::Empty);
        assert_eq!(state, LampState::new(Rgb::new(1, 2, 3), 1));
    }

    #[test]
    fn test_unknown_tag_ignored() {
        let mut state = LampState::new(Rgb::new(1, 2, 3), 1);
        assert_eq!(
            lenient().dispatch(b"T42", &mut state),
            Dispatch::UnknownTag(b'T')
        );
        assert_eq!(state, LampState::new(Rgb::new(1, 2, 3), 1));
    }

    #[test]
    fn test_lenient_applies_malformed() {
        let mut state = LampState::default();
        let outcome = lenient().dispatch(b"Cxyz", &mut state);

        assert_eq!(
            outcome,
            Dispatch::Applied {
                message: LampMessage::Color(Rgb::BLACK),
                malformed: true
            }
        );
    }

    #[test]
    fn test_strict_rejects_malformed() {
        let mut state = LampState::new(Rgb::new(9, 9, 9), 1);
        assert_eq!(
            strict().dispatch(b"Cxyz", &mut state),
            Dispatch::Rejected { tag: b'C' }
        );
        assert_eq!(
            strict().dispatch(b"M", &mut state),
            Dispatch::Rejected { tag: b'M' }
        );
        assert_eq!(state, LampState::new(Rgb::new(9, 9, 9), 1));
    }

    #[test]
    fn test_strict_accepts_clean() {
        let mut state = LampState::default();
        assert!(strict().dispatch(b"R200", &mut state).is_applied());
        assert_eq!(state.color().r, 200);
    }

    #[test]
    fn test_hex_color_ignores_separator() {
        let mut state = LampState::default();
        let outcome = lenient().dispatch(b"C12#34", &mut state);

        assert_eq!(
            outcome,
            Dispatch::Applied {
                message: LampMessage::Color(Rgb::new(0, 0, 0x12)),
                malformed: true
            }
        );
        assert_eq!(state.color(), Rgb::new(0, 0, 0x12));
    }

    #[test]
    fn test_strict_rejects_saturated_number() {
        let mut state = LampState::new(Rgb::BLACK, 1);
        assert_eq!(
            strict().dispatch(b"M99999999999", &mut state),
            Dispatch::Rejected { tag: b'M' }
        );
        assert_eq!(state.mode(), 1);

        let outcome = lenient().dispatch(b"M99999999999", &mut state);
        assert_eq!(
            outcome,
            Dispatch::Applied {
                message: LampMessage::Mode(i32::MAX),
                malformed: true
            }
        );
    }

    #[test]
    fn test_from_config_uses_strict_flag() {
        let config = CodecConfig {
            strict: true,
            ..Default::default()
        };
        let mut state = LampState::default();
        assert_eq!(
            Dispatcher::from_config(&config).dispatch(b"Cxyz", &mut state),
            Dispatch::Rejected { tag: b'C' }
        );
    }
}
