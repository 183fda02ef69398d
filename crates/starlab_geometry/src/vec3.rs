//! 3D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// 3D position used for star vertices
///
/// All demo geometry lives in the z = 0 plane, but the third component is
/// kept so vertex buffers match the `x, y, z` layout the shaders consume.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a new Vec3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a point on the z = 0 plane
    #[inline]
    pub const fn xy(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Point at `radius` from `center` in direction `angle` (radians)
    #[inline]
    pub fn polar(center: [f32; 2], radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::xy(center[0] + radius * cos, center[1] + radius * sin)
    }

    /// Distance to another point
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Approximate equality within `epsilon` on every component
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_polar() {
        let v = Vec3::polar([1.0, 1.0], 2.0, FRAC_PI_2);
        assert!(v.approx_eq(Vec3::xy(1.0, 3.0), 1e-6));
    }

    #[test]
    fn test_distance() {
        let a = Vec3::xy(0.0, 0.0);
        let b = Vec3::xy(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_layout() {
        assert_eq!(std::mem::size_of::<Vec3>(), 12);
    }

    #[test]
    fn test_cast_to_array() {
        // GPU upload reinterprets positions as [x, y, z]
        let v = Vec3::new(1.0, 2.0, 3.0);
        let array: [f32; 3] = bytemuck::cast(v);
        assert_eq!(array, [1.0, 2.0, 3.0]);
        let binding = [Vec3::xy(4.0, 5.0), v];
        let slice: &[f32] = bytemuck::cast_slice(&binding);
        assert_eq!(slice, &[4.0, 5.0, 0.0, 1.0, 2.0, 3.0]);
    }
}
