//! Primitive topologies
//!
//! How a flat vertex array is assembled into triangles. The three modes
//! share vertices differently:
//!
//! - **Fan**: every triangle shares the first vertex, `(v0, v[i], v[i+1])`
//! - **List**: independent triangles, `(v[3i], v[3i+1], v[3i+2])`
//! - **Strip**: every triangle reuses the previous two vertices, `(v[i], v[i+1], v[i+2])`

use serde::{Serialize, Deserialize};

use crate::Vec3;

/// GPU primitive-assembly mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    TriangleFan,
    TriangleList,
    TriangleStrip,
}

impl Topology {
    /// All topologies, in the order the demos cycle through them
    pub const ALL: [Topology; 3] = [
        Topology::TriangleFan,
        Topology::TriangleList,
        Topology::TriangleStrip,
    ];

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Topology::TriangleFan => "triangle fan",
            Topology::TriangleList => "triangle list",
            Topology::TriangleStrip => "triangle strip",
        }
    }

    /// Number of triangles assembled from `vertex_count` vertices
    ///
    /// Trailing vertices that do not complete a triangle are ignored.
    pub fn primitive_count(self, vertex_count: usize) -> usize {
        match self {
            Topology::TriangleList => vertex_count / 3,
            Topology::TriangleFan | Topology::TriangleStrip => vertex_count.saturating_sub(2),
        }
    }

    /// Number of vertices needed to draw `primitives` triangles
    pub fn required_vertices(self, primitives: usize) -> usize {
        if primitives == 0 {
            return 0;
        }
        match self {
            Topology::TriangleList => primitives * 3,
            Topology::TriangleFan | Topology::TriangleStrip => primitives + 2,
        }
    }

    /// Assemble `vertices` into triangles the way the rasterizer would
    ///
    /// Strip winding is not normalised: odd strip triangles come out with
    /// their first two vertices swapped, as GPUs emit them.
    pub fn assemble(self, vertices: &[Vec3]) -> Vec<[Vec3; 3]> {
        let count = self.primitive_count(vertices.len());
        (0..count)
            .map(|i| match self {
                Topology::TriangleList => [vertices[3 * i], vertices[3 * i + 1], vertices[3 * i + 2]],
                Topology::TriangleFan => [vertices[0], vertices[i + 1], vertices[i + 2]],
                Topology::TriangleStrip if i % 2 == 0 => [vertices[i], vertices[i + 1], vertices[i + 2]],
                Topology::TriangleStrip => [vertices[i + 1], vertices[i], vertices[i + 2]],
            })
            .collect()
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Expand a triangle fan into an equivalent triangle list
///
/// Backends without native fan support draw the result with list topology.
/// A fan of `n` vertices becomes `3 * (n - 2)` vertices.
pub fn triangulate_fan(fan: &[Vec3]) -> Vec<Vec3> {
    Topology::TriangleFan
        .assemble(fan)
        .into_iter()
        .flatten()
        .collect()
}

/// True when the triangle has (near) zero area
pub fn is_degenerate(triangle: &[Vec3; 3]) -> bool {
    let [a, b, c] = *triangle;
    let cross_z = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    cross_z.abs() <= 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_fan() -> Vec<Vec3> {
        vec![
            Vec3::xy(0.0, 0.0),
            Vec3::xy(1.0, 0.0),
            Vec3::xy(0.0, 1.0),
            Vec3::xy(-1.0, 0.0),
            Vec3::xy(0.0, -1.0),
        ]
    }

    #[test]
    fn test_primitive_count() {
        assert_eq!(Topology::TriangleList.primitive_count(9), 3);
        assert_eq!(Topology::TriangleList.primitive_count(10), 3);
        assert_eq!(Topology::TriangleFan.primitive_count(12), 10);
        assert_eq!(Topology::TriangleStrip.primitive_count(22), 20);
        assert_eq!(Topology::TriangleStrip.primitive_count(1), 0);
        assert_eq!(Topology::TriangleFan.primitive_count(0), 0);
    }

    #[test]
    fn test_required_vertices_inverts_primitive_count() {
        for topology in Topology::ALL {
            for primitives in 1..20 {
                let n = topology.required_vertices(primitives);
                assert_eq!(topology.primitive_count(n), primitives, "{}", topology);
            }
            assert_eq!(topology.required_vertices(0), 0);
        }
    }

    #[test]
    fn test_triangulate_fan() {
        let fan = square_fan();
        let list = triangulate_fan(&fan);
        assert_eq!(list.len(), 3 * (fan.len() - 2));
        // Every triangle starts at the hub
        for tri in list.chunks(3) {
            assert_eq!(tri[0], fan[0]);
        }
        assert_eq!(list[1], fan[1]);
        assert_eq!(list[2], fan[2]);
        assert_eq!(list[7], fan[3]);
        assert_eq!(list[8], fan[4]);
    }

    #[test]
    fn test_triangulate_short_fan() {
        assert!(triangulate_fan(&[Vec3::ZERO, Vec3::xy(1.0, 0.0)]).is_empty());
    }

    #[test]
    fn test_strip_assembly_keeps_winding() {
        let strip = [
            Vec3::xy(0.0, 0.0),
            Vec3::xy(0.0, 1.0),
            Vec3::xy(1.0, 0.0),
            Vec3::xy(1.0, 1.0),
        ];
        let tris = Topology::TriangleStrip.assemble(&strip);
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[1], [strip[2], strip[1], strip[3]]);
    }

    #[test]
    fn test_degenerate() {
        let flat = [Vec3::xy(0.0, 0.0), Vec3::xy(1.0, 1.0), Vec3::xy(0.0, 0.0)];
        let real = [Vec3::xy(0.0, 0.0), Vec3::xy(1.0, 0.0), Vec3::xy(0.0, 1.0)];
        assert!(is_degenerate(&flat));
        assert!(!is_degenerate(&real));
    }
}
