//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Star pipeline and uploaded meshes
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use starlab_render::{
    context::{ContextError, RenderContext},
    pipeline::{StarMesh, StarPipeline, ViewUniforms},
    StarBatch,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// The GPU device was lost and must be recreated
    DeviceLost,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::DeviceLost => write!(f, "Device lost"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: StarPipeline,
    meshes: Vec<StarMesh>,
    preserve_aspect: bool,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = StarPipeline::new(&context.device, context.config.format);

        let system = Self {
            context,
            pipeline,
            meshes: Vec::new(),
            preserve_aspect: render_config.preserve_aspect,
        };
        system.update_view();
        Ok(system)
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.update_view();
    }

    fn update_view(&self) {
        let uniforms = ViewUniforms::for_surface(
            self.context.config.width,
            self.context.config.height,
            self.preserve_aspect,
        );
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);
    }

    /// Replace the uploaded meshes with `batches`
    pub fn upload(&mut self, batches: &[StarBatch]) {
        self.meshes = self.pipeline.upload(&self.context.device, batches);
        let vertices: u32 = self.meshes.iter().map(|m| m.vertex_count()).sum();
        log::info!(
            "Uploaded {} star meshes ({} vertices)",
            self.meshes.len(),
            vertices
        );
    }

    /// Drop every vertex buffer
    pub fn release_meshes(&mut self) {
        self.meshes.clear();
    }

    /// Render a single frame
    pub fn render_frame(&mut self, background: [f32; 4]) -> Result<(), RenderError> {
        if self.context.is_device_lost() {
            return Err(RenderError::DeviceLost);
        }

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Star Encoder"),
            });

        let clear_color = self.pipeline.clear_color(background);
        self.pipeline.render(&mut encoder, &view, &self.meshes, clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(format!("{}", RenderError::DeviceLost), "Device lost");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
