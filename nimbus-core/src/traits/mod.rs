//! Hardware abstraction traits
//!
//! The interface between the lamp state and board-specific LED output.

pub mod renderer;

pub use renderer::{LampRenderer, RenderError};
