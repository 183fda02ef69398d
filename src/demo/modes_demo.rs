//! Mode viewer: one hand-placed outline at a time
//!
//! Keys 1-5 pick an outline, Space steps to the next one.

use starlab_geometry::{StarOutline, OUTLINES};
use starlab_render::StarBatch;

use super::{next_mode, Demo, DemoResponse};
use crate::config::RenderingConfig;
use crate::input::InputAction;

/// Cycles through [`OUTLINES`], drawing one in a flat colour
pub struct ModesDemo {
    outlines: Vec<StarOutline>,
    current: usize,
    color: [f32; 4],
    background: [f32; 4],
}

impl ModesDemo {
    /// Viewer over the standard outlines, starting at the first
    pub fn new(color: [f32; 4], background: [f32; 4]) -> Self {
        Self {
            outlines: OUTLINES.to_vec(),
            current: 0,
            color,
            background,
        }
    }

    /// Viewer coloured from the rendering config
    pub fn from_config(config: &RenderingConfig) -> Self {
        Self::new(config.modes_color, config.modes_background)
    }

    /// Index of the outline on screen
    pub fn current(&self) -> usize {
        self.current
    }

    /// Outline on screen
    pub fn outline(&self) -> &StarOutline {
        &self.outlines[self.current]
    }
}

impl Demo for ModesDemo {
    fn name(&self) -> &str {
        "Primitive modes"
    }

    fn background(&self) -> [f32; 4] {
        self.background
    }

    fn batches(&self) -> Vec<StarBatch> {
        vec![StarBatch::from_outline(self.outline(), self.color)]
    }

    fn mode_label(&self) -> String {
        let outline = self.outline();
        format!(
            "[{}/{}] {} ({} triangles)",
            self.current + 1,
            self.outlines.len(),
            outline.name,
            outline.primitive_count()
        )
    }

    fn handle(&mut self, action: InputAction) -> DemoResponse {
        match next_mode(self.current, self.outlines.len(), action) {
            Some(index) if index != self.current => {
                self.current = index;
                log::info!("Mode {}: {}", index + 1, self.outline().name);
                DemoResponse::Rebuild
            }
            Some(_) => DemoResponse::Ignored,
            None if action == InputAction::Redraw => DemoResponse::Redraw,
            None => DemoResponse::Ignored,
        }
    }
}
