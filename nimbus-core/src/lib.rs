//! Board-agnostic lamp state
//!
//! This crate holds the values that flow between the serial link and the
//! LED renderer, independent of any board:
//!
//! - Colour and mode state written by the link codec
//! - Lighting mode definitions
//! - The renderer interface LED output implements
//! - Persisted settings snapshots

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[cfg(feature = "serde")]
pub mod settings;
pub mod state;
pub mod traits;

pub use state::{LampState, LedMode, Rgb};
pub use traits::{LampRenderer, RenderError};
