// Batched rendering of flat-coloured axis-aligned quads

use super::camera::CameraUniform;
use super::vertex::Vertex;
use anyhow::Result;
use glam::{Mat4, Vec2, Vec4};
use wgpu::util::DeviceExt;

const INITIAL_QUAD_CAPACITY: usize = 256;

/// An axis-aligned coloured rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub center: Vec2,
    pub size: Vec2,
    pub color: Vec4,
}

impl Quad {
    pub fn from_rect(center: Vec2, size: Vec2, color: Vec4) -> Self {
        Self {
            center,
            size,
            color,
        }
    }

    /// Corners in counter-clockwise order starting bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        let half = self.size * 0.5;
        [
            self.center + Vec2::new(-half.x, -half.y),
            self.center + Vec2::new(half.x, -half.y),
            self.center + Vec2::new(half.x, half.y),
            self.center + Vec2::new(-half.x, half.y),
        ]
    }
}

/// CPU-side vertex and index data for a list of quads
#[derive(Debug, Default)]
pub struct QuadBatch {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl QuadBatch {
    /// Rebuild the batch from `quads`, drawn in list order
    pub fn rebuild(&mut self, quads: &[Quad]) {
        self.vertices.clear();
        self.indices.clear();

        for quad in quads {
            let base = self.vertices.len() as u32;
            self.vertices.extend(
                quad.corners()
                    .into_iter()
                    .map(|corner| Vertex::new(corner, quad.color)),
            );
            self.indices
                .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Quad renderer drawing one batch per frame from growable GPU buffers
pub struct QuadRenderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    capacity: usize,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    batch: QuadBatch,
}

impl QuadRenderer {
    /// Create a new quad renderer
    pub fn new(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> Result<Self> {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Quad Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/quad.wgsl").into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Quad Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Quad Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let (vertex_buffer, index_buffer) = create_buffers(device, INITIAL_QUAD_CAPACITY);

        let camera_uniform = CameraUniform {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        };

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
            capacity: INITIAL_QUAD_CAPACITY,
            camera_buffer,
            camera_bind_group,
            batch: QuadBatch::default(),
        })
    }

    /// Upload this frame's quads, growing the GPU buffers when needed
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, quads: &[Quad]) {
        self.batch.rebuild(quads);

        if quads.len() > self.capacity {
            let capacity = quads.len().next_power_of_two();
            log::debug!("Growing quad buffers to {} quads", capacity);
            (self.vertex_buffer, self.index_buffer) = create_buffers(device, capacity);
            self.capacity = capacity;
        }

        if !self.batch.is_empty() {
            queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(self.batch.vertices()),
            );
            queue.write_buffer(
                &self.index_buffer,
                0,
                bytemuck::cast_slice(self.batch.indices()),
            );
        }
    }

    /// Draw the prepared batch
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.batch.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.batch.indices().len() as u32, 0, 0..1);
    }

    /// Get a reference to the camera buffer
    pub fn camera_buffer(&self) -> &wgpu::Buffer {
        &self.camera_buffer
    }
}

fn create_buffers(device: &wgpu::Device, quads: usize) -> (wgpu::Buffer, wgpu::Buffer) {
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Quad Vertex Buffer"),
        size: (quads * 4 * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Quad Index Buffer"),
        size: (quads * 6 * std::mem::size_of::<u32>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    (vertex_buffer, index_buffer)
}
