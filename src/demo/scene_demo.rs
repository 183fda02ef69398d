//! Star scene: several generated stars drawn at once
//!
//! Mode 1 draws every star with its own topology. Modes 2-4 redraw the
//! whole scene as fans, lists or strips.

use starlab_geometry::Topology;
use starlab_render::StarBatch;

use super::{next_mode, Demo, DemoResponse};
use crate::config::AppConfig;
use crate::input::InputAction;
use crate::scene::StarScene;

/// Number of modes: the authored topologies plus one per [`Topology`]
const MODE_COUNT: usize = 1 + Topology::ALL.len();

/// Draws a [`StarScene`], optionally forcing one topology on every star
pub struct SceneDemo {
    scene: StarScene,
    mode: usize,
    background: [f32; 4],
}

impl SceneDemo {
    /// Demo over `scene` in its authored topologies
    pub fn new(scene: StarScene, background: [f32; 4]) -> Self {
        Self {
            scene,
            mode: 0,
            background,
        }
    }

    /// Load the configured scene file, falling back to the built-in layout
    pub fn from_config(config: &AppConfig) -> Self {
        let scene = match StarScene::load(&config.scene.path) {
            Ok(scene) => {
                log::info!(
                    "Loaded scene '{}' with {} stars from {}",
                    scene.name,
                    scene.stars.len(),
                    config.scene.path
                );
                scene
            }
            Err(e) => {
                log::warn!(
                    "Failed to load scene '{}': {}. Using built-in layout.",
                    config.scene.path,
                    e
                );
                StarScene::builtin()
            }
        };
        Self::new(scene, config.rendering.scene_background)
    }

    /// Topology forced on every star, if any
    pub fn topology_override(&self) -> Option<Topology> {
        self.mode.checked_sub(1).map(|i| Topology::ALL[i])
    }

    /// The scene being drawn
    pub fn scene(&self) -> &StarScene {
        &self.scene
    }
}

impl Demo for SceneDemo {
    fn name(&self) -> &str {
        &self.scene.name
    }

    fn background(&self) -> [f32; 4] {
        self.background
    }

    fn batches(&self) -> Vec<StarBatch> {
        self.scene.batches(self.topology_override())
    }

    fn mode_label(&self) -> String {
        match self.topology_override() {
            Some(topology) => format!("[{}/{}] all as {}", self.mode + 1, MODE_COUNT, topology),
            None => format!("[1/{}] mixed topologies", MODE_COUNT),
        }
    }

    fn handle(&mut self, action: InputAction) -> DemoResponse {
        match next_mode(self.mode, MODE_COUNT, action) {
            Some(mode) if mode != self.mode => {
                self.mode = mode;
                log::info!("Scene mode: {}", self.mode_label());
                DemoResponse::Rebuild
            }
            Some(_) => DemoResponse::Ignored,
            None if action == InputAction::Redraw => DemoResponse::Redraw,
            None => DemoResponse::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> SceneDemo {
        SceneDemo::new(StarScene::builtin(), [0.0, 0.2, 0.1, 1.0])
    }

    #[test]
    fn test_starts_mixed() {
        let demo = demo();
        assert_eq!(demo.topology_override(), None);
        let topologies: Vec<Topology> = demo.batches().iter().map(|b| b.topology).collect();
        assert_eq!(topologies[0], Topology::TriangleFan);
        assert_eq!(topologies[1], Topology::TriangleList);
        assert_eq!(topologies[2], Topology::TriangleStrip);
    }

    #[test]
    fn test_override_modes() {
        let mut demo = demo();
        assert_eq!(demo.handle(InputAction::SelectMode(3)), DemoResponse::Rebuild);
        assert_eq!(demo.topology_override(), Some(Topology::TriangleStrip));
        assert!(demo.batches().iter().all(|b| b.topology == Topology::TriangleStrip));
    }

    #[test]
    fn test_space_wraps_to_mixed() {
        let mut demo = demo();
        for _ in 0..MODE_COUNT {
            demo.handle(InputAction::NextMode);
        }
        assert_eq!(demo.topology_override(), None);
    }

    #[test]
    fn test_redraw_keeps_geometry() {
        let mut demo = demo();
        let before = demo.batches();
        assert_eq!(demo.handle(InputAction::Redraw), DemoResponse::Redraw);
        assert_eq!(demo.batches(), before);
    }

    #[test]
    fn test_mode_label() {
        let mut demo = demo();
        assert_eq!(demo.mode_label(), "[1/4] mixed topologies");
        demo.handle(InputAction::SelectMode(1));
        assert_eq!(demo.mode_label(), "[2/4] all as triangle fan");
    }

    #[test]
    fn test_missing_scene_falls_back() {
        let mut config = AppConfig::default();
        config.scene.path = "does/not/exist.ron".to_string();
        let demo = SceneDemo::from_config(&config);
        assert_eq!(demo.scene(), &StarScene::builtin());
        assert_eq!(demo.background(), config.rendering.scene_background);
    }
}
