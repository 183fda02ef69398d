//! Hand-placed star outlines
//!
//! Fixed vertex arrays for the mode-cycling demo. Unlike [`StarShape`](crate::StarShape)
//! these are not regular stars: each was laid out by hand for one topology.

use crate::{Topology, Vec3};

/// A fixed vertex array paired with the topology it was laid out for
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarOutline {
    /// Display name
    pub name: &'static str,
    /// Topology the vertex order assumes
    pub topology: Topology,
    /// Vertex positions
    pub vertices: &'static [Vec3],
}

impl StarOutline {
    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles the outline assembles into
    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.topology.primitive_count(self.vertices.len())
    }
}

const fn v(x: f32, y: f32) -> Vec3 {
    Vec3::xy(x, y)
}

/// Five-point star as a fan around the origin
pub const FIVE_POINT_FAN: StarOutline = StarOutline {
    name: "5-point fan",
    topology: Topology::TriangleFan,
    vertices: &[
        v(0.0, 0.0),
        v(0.0, 0.8),
        v(0.2, 0.4),
        v(0.7, 0.4),
        v(0.25, -0.15),
        v(0.4, -0.7),
        v(0.0, -0.4),
        v(-0.4, -0.7),
        v(-0.25, -0.15),
        v(-0.7, 0.4),
        v(-0.2, 0.4),
        v(0.0, 0.8),
    ],
};

/// Four-point star as a fan
pub const FOUR_POINT_FAN: StarOutline = StarOutline {
    name: "4-point fan",
    topology: Topology::TriangleFan,
    vertices: &[
        v(0.0, 0.0),
        v(0.0, 0.8),
        v(0.2, 0.2),
        v(0.8, 0.0),
        v(0.2, -0.2),
        v(0.0, -0.8),
        v(-0.2, -0.2),
        v(-0.8, 0.0),
        v(-0.2, 0.2),
        v(0.0, 0.8),
    ],
};

/// Six-point outline as a fan
///
/// The repeated `(0.4, -0.4)` vertex yields one zero-area triangle.
pub const SIX_POINT_FAN: StarOutline = StarOutline {
    name: "6-point fan",
    topology: Topology::TriangleFan,
    vertices: &[
        v(0.0, 0.0),
        v(0.0, 0.8),
        v(0.4, 0.4),
        v(0.4, -0.4),
        v(0.4, -0.4),
        v(0.0, -0.8),
        v(-0.4, -0.4),
        v(-0.4, 0.4),
        v(0.0, 0.8),
    ],
};

/// Five-point star as a strip alternating the origin with rim vertices
pub const FIVE_POINT_STRIP: StarOutline = StarOutline {
    name: "5-point strip",
    topology: Topology::TriangleStrip,
    vertices: &[
        v(0.0, 0.0),
        v(-0.7, 0.4),
        v(0.0, 0.0),
        v(-0.2, 0.4),
        v(0.0, 0.0),
        v(0.0, 0.8),
        v(0.0, 0.0),
        v(0.2, 0.4),
        v(0.0, 0.0),
        v(0.7, 0.4),
        v(0.0, 0.0),
        v(0.25, -0.15),
        v(0.0, 0.0),
        v(0.4, -0.7),
        v(0.0, 0.0),
        v(0.0, -0.4),
        v(0.0, 0.0),
        v(-0.4, -0.7),
        v(0.0, 0.0),
        v(-0.25, -0.15),
        v(0.0, 0.0),
        v(-0.7, 0.4),
    ],
};

/// Five-point star as independent triangles (tips plus a tiled body)
pub const FIVE_POINT_LIST: StarOutline = StarOutline {
    name: "5-point list",
    topology: Topology::TriangleList,
    vertices: &[
        v(0.0, 0.8),
        v(0.2, 0.4),
        v(-0.2, 0.4),
        v(-0.7, 0.4),
        v(-0.2, 0.4),
        v(-0.25, -0.15),
        v(-0.2, 0.4),
        v(0.2, 0.4),
        v(-0.25, -0.15),
        v(-0.25, -0.15),
        v(0.2, 0.4),
        v(0.25, -0.15),
        v(0.2, 0.4),
        v(0.7, 0.4),
        v(0.25, -0.15),
        v(-0.25, -0.15),
        v(0.0, -0.15),
        v(0.0, -0.4),
        v(0.0, -0.15),
        v(0.25, -0.15),
        v(0.0, -0.4),
        v(0.0, -0.4),
        v(0.25, -0.15),
        v(0.4, -0.7),
        v(0.0, -0.4),
        v(-0.4, -0.7),
        v(-0.25, -0.15),
    ],
};

/// Outlines in mode order (keys 1 to 5)
pub const OUTLINES: [StarOutline; 5] = [
    FIVE_POINT_FAN,
    FIVE_POINT_STRIP,
    FIVE_POINT_LIST,
    FOUR_POINT_FAN,
    SIX_POINT_FAN,
];
