//! GPU-compatible data types for the star pipeline
//!
//! These types match the layouts declared in `star.wgsl`.
//! All types derive Pod and Zeroable for safe buffer uploads.

use bytemuck::{Pod, Zeroable};
use starlab_geometry::Vec3;

/// A star vertex with a flat colour
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    /// Position in clip space (z is always 0)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl StarVertex {
    /// Create a vertex from a geometry position and a colour
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: bytemuck::cast(position),
            color,
        }
    }
}

/// View uniforms
/// Layout: 16 bytes (must match star.wgsl ViewUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    /// Per-axis scale applied to x and y before output
    pub scale: [f32; 2],
    pub _padding: [f32; 2],
}

impl ViewUniforms {
    /// Uniforms for a surface of the given size
    pub fn for_surface(width: u32, height: u32, preserve_aspect: bool) -> Self {
        Self {
            scale: view_scale(width, height, preserve_aspect),
            _padding: [0.0; 2],
        }
    }
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0],
            _padding: [0.0; 2],
        }
    }
}

/// Convert one sRGB-encoded channel to linear light
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Colour as written for a target that does (`srgb_target`) or does not
/// gamma-encode on store
///
/// Configured colours are display values. An sRGB target encodes whatever
/// the shader writes, so those values are decoded first to cancel it out.
/// Alpha is never converted.
pub fn target_color(color: [f32; 4], srgb_target: bool) -> [f32; 4] {
    if !srgb_target {
        return color;
    }
    [
        srgb_to_linear(color[0]),
        srgb_to_linear(color[1]),
        srgb_to_linear(color[2]),
        color[3],
    ]
}

/// Scale that maps the `[-1, 1]` square onto the surface
///
/// Without `preserve_aspect` the square is stretched to fill the surface.
/// With it, the longer axis is shrunk so geometry keeps its proportions.
pub fn view_scale(width: u32, height: u32, preserve_aspect: bool) -> [f32; 2] {
    if !preserve_aspect || width == 0 || height == 0 {
        return [1.0, 1.0];
    }
    let aspect = width as f32 / height as f32;
    if aspect >= 1.0 {
        [1.0 / aspect, 1.0]
    } else {
        [1.0, aspect]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_star_vertex_size() {
        // 3 floats position + 4 floats color = 28 bytes
        assert_eq!(size_of::<StarVertex>(), 28);
    }

    #[test]
    fn test_view_uniforms_size() {
        assert_eq!(size_of::<ViewUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<StarVertex>(), 4);
        assert_eq!(std::mem::align_of::<ViewUniforms>(), 4);
    }

    #[test]
    fn test_star_vertex_position() {
        let v = StarVertex::new(Vec3::xy(0.5, -0.25), [1.0; 4]);
        assert_eq!(v.position, [0.5, -0.25, 0.0]);
    }

    #[test]
    fn test_target_color_passthrough() {
        let green = [0.0, 0.2, 0.1, 1.0];
        assert_eq!(target_color(green, false), green);
    }

    #[test]
    fn test_target_color_decodes_for_srgb() {
        let [r, g, b, a] = target_color([0.0, 0.2, 0.1, 0.5], true);
        assert_eq!(r, 0.0);
        // sRGB 0.2 is about 0.033 linear; 0.1 about 0.010
        assert!((g - 0.0331).abs() < 1e-3, "g = {}", g);
        assert!((b - 0.0100).abs() < 1e-3, "b = {}", b);
        assert_eq!(a, 0.5);
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(srgb_to_linear(0.5) < 0.5);
    }

    #[test]
    fn test_view_scale_stretch() {
        assert_eq!(view_scale(800, 600, false), [1.0, 1.0]);
    }

    #[test]
    fn test_view_scale_wide() {
        let [sx, sy] = view_scale(800, 400, true);
        assert!((sx - 0.5).abs() < 1e-6);
        assert_eq!(sy, 1.0);
    }

    #[test]
    fn test_view_scale_tall() {
        let [sx, sy] = view_scale(400, 800, true);
        assert_eq!(sx, 1.0);
        assert!((sy - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_view_scale_zero_size() {
        assert_eq!(view_scale(0, 600, true), [1.0, 1.0]);
    }
}
