//! Lamp Link Protocol
//!
//! This crate implements the ASCII serial link between the control board
//! (buttons, remote) and the LED board. Both ends run the same codec; each
//! message is one short frame:
//!
//! ```text
//! ┌───────┬─────┬──────────────┬─────┐
//! │ START │ TAG │ PAYLOAD      │ END │
//! │ '<'   │ 1B  │ ASCII, 0+ B  │ '>' │
//! └───────┴─────┴──────────────┴─────┘
//! ```
//!
//! Bytes between frames are noise (debug prints, line endings) and are
//! handed back to the caller. There is no checksum or length field; a frame
//! ends at the first end marker.
//!
//! The codec is polled from the host loop and does at most one byte of
//! receive work per call:
//!
//! ```text
//! stream ─► FrameReceiver ─► Dispatcher ─► LampState
//!                 │               │
//!                 └──► Diagnostics ◄┘
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod codec;
pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod encoder;
pub mod frame;
pub mod messages;
pub mod numeric;
pub mod reporter;

pub use codec::SerialCodec;
pub use config::{CodecConfig, Markers};
pub use diagnostics::{Diagnostics, LinkEvent};
pub use dispatch::{Dispatch, Dispatcher};
pub use encoder::FrameWriter;
pub use frame::{Feed, Frame, FrameReceiver, RX_CAPACITY};
pub use messages::{DecodeError, Decoded, LampMessage};
pub use reporter::PeriodicReporter;
