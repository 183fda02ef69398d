//! Star scene files
//!
//! This module loads and saves the star layout drawn by the scene demo.

mod star_scene;

pub use star_scene::{SceneStar, StarScene, SceneError};
