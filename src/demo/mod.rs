//! Demo programs
//!
//! A [`Demo`] supplies the star batches for the current mode and reacts to
//! mode-related input. Window, exit and fullscreen handling stay in the app.

mod scene_demo;
mod modes_demo;

pub use scene_demo::SceneDemo;
pub use modes_demo::ModesDemo;

use starlab_render::StarBatch;

use crate::input::InputAction;

/// What the app should do after a demo handled an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoResponse {
    /// Nothing changed
    Ignored,
    /// Draw again with the current geometry
    Redraw,
    /// Geometry changed: re-upload batches, then draw
    Rebuild,
}

/// A star demo driven by keyboard modes
pub trait Demo {
    /// Demo name, appended to the window title
    fn name(&self) -> &str;

    /// Clear colour [r, g, b, a]
    fn background(&self) -> [f32; 4];

    /// Batches for the current mode, in draw order
    fn batches(&self) -> Vec<StarBatch>;

    /// Short description of the current mode
    fn mode_label(&self) -> String;

    /// React to a mode-related action
    fn handle(&mut self, action: InputAction) -> DemoResponse;
}

/// Index after applying a mode action to `current` out of `count` modes
///
/// Out-of-range selections leave the index unchanged.
pub(crate) fn next_mode(current: usize, count: usize, action: InputAction) -> Option<usize> {
    match action {
        InputAction::SelectMode(index) if index < count => Some(index),
        InputAction::NextMode if count > 0 => Some((current + 1) % count),
        _ => None,
    }
}
