//! Starlab - star primitive-assembly demos
//!
//! Draws star outlines as triangle fans, lists and strips, switching
//! between them from the keyboard.

pub mod app;
pub mod config;
pub mod demo;
pub mod input;
pub mod scene;
pub mod systems;

pub use app::{run, AppError};
