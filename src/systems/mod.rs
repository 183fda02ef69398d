//! Application systems
//!
//! Window and GPU rendering, kept out of the event loop so each can be
//! rebuilt on its own.

mod render;
mod window;

pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
