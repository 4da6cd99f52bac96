//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod link;
pub mod render;

pub use link::{link_task, LinkUart};
pub use render::render_task;
