//! Lamp state written by the link and read by the renderer
//!
//! Replaces free-floating colour and mode variables with one value type
//! whose ownership makes the writer explicit.

pub mod color;
pub mod lamp;
pub mod mode;

pub use color::Rgb;
pub use lamp::LampState;
pub use mode::LedMode;
