//! Render pipeline for star batches
//!
//! wgpu fixes the primitive topology per pipeline, so there is one pipeline
//! for lists and one for strips. Fans never reach the GPU as fans: see
//! [`StarBatch::native_topology`].

use starlab_geometry::Topology;
use wgpu::util::DeviceExt;

use super::types::{target_color, StarVertex, ViewUniforms};
use crate::batch::StarBatch;

/// A batch uploaded to the GPU
pub struct StarMesh {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    topology: Topology,
}

impl StarMesh {
    /// Number of vertices in the buffer
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Topology the buffer is drawn with (never a fan)
    pub fn topology(&self) -> Topology {
        self.topology
    }
}

/// List and strip pipelines sharing one view uniform
pub struct StarPipeline {
    list_pipeline: wgpu::RenderPipeline,
    strip_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// The target gamma-encodes on store
    srgb_target: bool,
}

impl StarPipeline {
    /// Create both pipelines for a surface format
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Star Bind Group Layout"),
            entries: &[
                // View uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Star Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Star Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/star.wgsl").into()),
        });

        let list_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            Topology::TriangleList,
        );
        let strip_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            Topology::TriangleStrip,
        );

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Star Uniform Buffer"),
            contents: bytemuck::bytes_of(&ViewUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Star Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
        });

        Self {
            list_pipeline,
            strip_pipeline,
            uniform_buffer,
            bind_group,
            srgb_target: surface_format.is_srgb(),
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        topology: Topology,
    ) -> wgpu::RenderPipeline {
        let (label, primitive_topology) = match topology {
            Topology::TriangleStrip => ("Star Strip Pipeline", wgpu::PrimitiveTopology::TriangleStrip),
            Topology::TriangleList | Topology::TriangleFan => {
                ("Star List Pipeline", wgpu::PrimitiveTopology::TriangleList)
            }
        };

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: primitive_topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Hand-placed outlines mix windings
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    /// Get the vertex buffer layout for StarVertex
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<StarVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Update view uniforms
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &ViewUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Upload batches, one vertex buffer each
    ///
    /// Batches with no complete triangle are skipped.
    pub fn upload(&self, device: &wgpu::Device, batches: &[StarBatch]) -> Vec<StarMesh> {
        batches
            .iter()
            .filter_map(|batch| {
                let vertices = batch.gpu_vertices(self.srgb_target);
                let topology = batch.native_topology();
                if topology.primitive_count(vertices.len()) == 0 {
                    log::debug!("Skipping {} batch with {} vertices", batch.topology, vertices.len());
                    return None;
                }
                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Star Vertex Buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                Some(StarMesh {
                    vertex_buffer,
                    vertex_count: vertices.len() as u32,
                    topology,
                })
            })
            .collect()
    }

    /// Clear colour for a display-space `rgba`
    pub fn clear_color(&self, rgba: [f32; 4]) -> wgpu::Color {
        let [r, g, b, a] = target_color(rgba, self.srgb_target);
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }

    fn pipeline_for(&self, topology: Topology) -> &wgpu::RenderPipeline {
        match topology {
            Topology::TriangleStrip => &self.strip_pipeline,
            Topology::TriangleList | Topology::TriangleFan => &self.list_pipeline,
        }
    }

    /// Clear `view` and draw every mesh in order
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        meshes: &[StarMesh],
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Star Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.bind_group, &[]);
        for mesh in meshes {
            render_pass.set_pipeline(self.pipeline_for(mesh.topology));
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.draw(0..mesh.vertex_count, 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = StarPipeline::vertex_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<StarVertex>() as u64);
    }

    #[test]
    fn test_color_attribute_follows_position() {
        let layout = StarPipeline::vertex_buffer_layout();
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn test_shader_entry_points() {
        let source = include_str!("../shaders/star.wgsl");
        assert!(source.contains("fn vs_main"));
        assert!(source.contains("fn fs_main"));
    }
}
