//! Nimbus Hardware Abstraction Layer
//!
//! This crate defines the serial capability the lamp link codec is written
//! against. Chip-specific code only has to provide a buffered UART that
//! implements `embedded-io`; everything above it is board-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  nimbus-protocol (SerialCodec)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  nimbus-hal (this crate - SerialStream) │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   IoStream    │       │ MemoryStream  │
//! │ (embedded-io) │       │ (host / test) │
//! └───────────────┘       └───────────────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod memory;
pub mod stream;

pub use memory::{MemoryStream, MemoryStreamError};
pub use stream::{IoStream, IoStreamError, SerialStream};
