//! Procedural star outlines
//!
//! A star with `N` points has `2N` rim vertices placed at equal angular
//! steps of `π / N`, alternating between the outer radius (the tips) and
//! the inner radius (the notches between tips). The same rim is fed to the
//! three primitive topologies in different vertex orders.

use std::f32::consts::PI;

use serde::{Serialize, Deserialize};

use crate::{GeometryError, Topology, Vec3};

/// Largest point count a star may have
pub const MAX_POINTS: u32 = 1024;

/// Parameters of a regular star centred in the z = 0 plane
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarShape {
    /// Centre of the star
    pub center: [f32; 2],
    /// Number of tips
    pub points: u32,
    /// Distance from the centre to each tip
    pub outer_radius: f32,
    /// Distance from the centre to each notch
    pub inner_radius: f32,
    /// Angle of the first tip in radians (0 points along +x)
    #[serde(default)]
    pub rotation: f32,
}

impl StarShape {
    /// Create a star with its first tip pointing along +x
    pub fn new(
        center: [f32; 2],
        points: u32,
        outer_radius: f32,
        inner_radius: f32,
    ) -> Result<Self, GeometryError> {
        let star = Self {
            center,
            points,
            outer_radius,
            inner_radius,
            rotation: 0.0,
        };
        star.validate()?;
        Ok(star)
    }

    /// Rotate so the first tip sits at `rotation` radians
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Check parameters that may have bypassed [`StarShape::new`] (e.g. deserialized ones)
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.points < 2 {
            return Err(GeometryError::TooFewPoints(self.points));
        }
        if self.points > MAX_POINTS {
            return Err(GeometryError::TooManyPoints(self.points));
        }
        for radius in [self.outer_radius, self.inner_radius] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(GeometryError::InvalidRadius(radius));
            }
        }
        Ok(())
    }

    /// Angle between consecutive rim vertices
    #[inline]
    pub fn angle_step(&self) -> f32 {
        PI / self.points as f32
    }

    /// Centre as a vertex
    #[inline]
    pub fn center_vertex(&self) -> Vec3 {
        Vec3::xy(self.center[0], self.center[1])
    }

    /// The `2N` rim vertices, tip first, counter-clockwise
    pub fn rim(&self) -> Vec<Vec3> {
        let step = self.angle_step();
        let count = 2 * self.points as usize;
        (0..count)
            .map(|k| {
                let radius = if k % 2 == 0 { self.outer_radius } else { self.inner_radius };
                Vec3::polar(self.center, radius, self.rotation + k as f32 * step)
            })
            .collect()
    }

    /// Fan order: centre, the whole rim, then the first tip again to close
    ///
    /// Yields `2N + 2` vertices and `2N` triangles.
    pub fn fan_vertices(&self) -> Vec<Vec3> {
        let rim = self.rim();
        let mut vertices = Vec::with_capacity(rim.len() + 2);
        vertices.push(self.center_vertex());
        vertices.extend_from_slice(&rim);
        vertices.push(rim[0]);
        vertices
    }

    /// List order: two independent triangles per tip
    ///
    /// (centre, tip, following notch) then (centre, notch, next tip).
    /// Yields `6N` vertices and `2N` triangles.
    pub fn list_vertices(&self) -> Vec<Vec3> {
        let rim = self.rim();
        let center = self.center_vertex();
        let n = rim.len();
        let mut vertices = Vec::with_capacity(3 * n);
        for tip in (0..n).step_by(2) {
            let notch = rim[tip + 1];
            let next_tip = rim[(tip + 2) % n];
            vertices.extend_from_slice(&[center, rim[tip], notch]);
            vertices.extend_from_slice(&[center, notch, next_tip]);
        }
        vertices
    }

    /// Strip order: centre and rim interleaved, closing on the first tip
    ///
    /// Yields `4N + 2` vertices. Triangles alternate between a degenerate
    /// (centre, rim, centre) sliver and one of the `2N` fan triangles.
    pub fn strip_vertices(&self) -> Vec<Vec3> {
        let rim = self.rim();
        let center = self.center_vertex();
        let mut vertices = Vec::with_capacity(2 * (rim.len() + 1));
        for k in 0..=rim.len() {
            vertices.push(center);
            vertices.push(rim[k % rim.len()]);
        }
        vertices
    }

    /// Vertices for `topology`
    pub fn vertices(&self, topology: Topology) -> Vec<Vec3> {
        match topology {
            Topology::TriangleFan => self.fan_vertices(),
            Topology::TriangleList => self.list_vertices(),
            Topology::TriangleStrip => self.strip_vertices(),
        }
    }
}
