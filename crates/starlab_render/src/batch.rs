//! CPU-side draw batches
//!
//! A [`StarBatch`] is one draw call worth of star geometry: vertices in the
//! order their topology expects, plus a flat colour.

use starlab_geometry::{triangulate_fan, StarOutline, StarShape, Topology, Vec3};

use crate::pipeline::{target_color, StarVertex};

/// Geometry and colour for a single draw call
#[derive(Clone, Debug, PartialEq)]
pub struct StarBatch {
    pub vertices: Vec<Vec3>,
    pub topology: Topology,
    pub color: [f32; 4],
}

impl StarBatch {
    /// Create a batch from raw vertices
    pub fn new(vertices: Vec<Vec3>, topology: Topology, color: [f32; 4]) -> Self {
        Self {
            vertices,
            topology,
            color,
        }
    }

    /// Generate a star's vertices in the order `topology` expects
    pub fn from_star(star: &StarShape, topology: Topology, color: [f32; 4]) -> Self {
        Self::new(star.vertices(topology), topology, color)
    }

    /// Copy a hand-placed outline
    pub fn from_outline(outline: &StarOutline, color: [f32; 4]) -> Self {
        Self::new(outline.vertices.to_vec(), outline.topology, color)
    }

    /// Number of triangles this batch draws
    pub fn primitive_count(&self) -> usize {
        self.topology.primitive_count(self.vertices.len())
    }

    /// Topology the GPU draws with
    ///
    /// Fans are drawn as lists since wgpu has no fan topology.
    pub fn native_topology(&self) -> Topology {
        match self.topology {
            Topology::TriangleFan => Topology::TriangleList,
            other => other,
        }
    }

    /// Vertices ready for upload, in [`native_topology`](Self::native_topology) order
    ///
    /// `srgb_target` selects the colour encoding, see [`target_color`].
    pub fn gpu_vertices(&self, srgb_target: bool) -> Vec<StarVertex> {
        let color = target_color(self.color, srgb_target);
        let positions = match self.topology {
            Topology::TriangleFan => triangulate_fan(&self.vertices),
            _ => self.vertices.clone(),
        };
        positions
            .into_iter()
            .map(|p| StarVertex::new(p, color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlab_geometry::outline::{FIVE_POINT_FAN, FIVE_POINT_STRIP};

    const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

    #[test]
    fn test_fan_batch_is_drawn_as_list() {
        let star = StarShape::new([0.0, 0.0], 5, 0.3, 0.12).unwrap();
        let batch = StarBatch::from_star(&star, Topology::TriangleFan, YELLOW);
        assert_eq!(batch.vertices.len(), 12);
        assert_eq!(batch.native_topology(), Topology::TriangleList);
        let gpu = batch.gpu_vertices(false);
        assert_eq!(gpu.len(), 3 * batch.primitive_count());
        assert!(gpu.iter().all(|v| v.color == YELLOW));
    }

    #[test]
    fn test_strip_batch_unchanged() {
        let batch = StarBatch::from_outline(&FIVE_POINT_STRIP, YELLOW);
        assert_eq!(batch.native_topology(), Topology::TriangleStrip);
        assert_eq!(batch.gpu_vertices(false).len(), FIVE_POINT_STRIP.vertex_count());
    }

    #[test]
    fn test_outline_batch_primitives() {
        let batch = StarBatch::from_outline(&FIVE_POINT_FAN, YELLOW);
        assert_eq!(batch.primitive_count(), 10);
        assert_eq!(batch.gpu_vertices(false).len(), 30);
    }

    #[test]
    fn test_srgb_target_decodes_color() {
        let batch = StarBatch::from_outline(&FIVE_POINT_FAN, [0.5, 1.0, 0.0, 1.0]);
        let gpu = batch.gpu_vertices(true);
        assert!(gpu[0].color[0] < 0.5);
        assert_eq!(gpu[0].color[1], 1.0);
    }

    #[test]
    fn test_empty_batch() {
        let batch = StarBatch::new(Vec::new(), Topology::TriangleFan, YELLOW);
        assert_eq!(batch.primitive_count(), 0);
        assert!(batch.gpu_vertices(false).is_empty());
    }
}
