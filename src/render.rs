use std::borrow::Cow;

use particle_trail::{Circle, CircleBatch, DrawingSurface};
use wgpu::util::DeviceExt;

const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.015,
    g: 0.015,
    b: 0.03,
    a: 1.0,
};

const MIN_INSTANCES: usize = 256;

/// Draws a [`CircleBatch`] as instanced quads, discarding fragments outside each circle.
pub struct RenderModule {
    screen_buffer: wgpu::Buffer,
    corners_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instances: u32,
    srgb: bool,

    bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
}

impl RenderModule {
    pub fn new(device: &wgpu::Device, swapchain_format: wgpu::TextureFormat) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: None,
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("trail.wgsl"))),
        });

        let screen_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Screen Buffer"),
            size: 4 * 4,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        #[rustfmt::skip]
        let corners: [f32; 12] = [
            -1.0, -1.0,  1.0, -1.0,  1.0, 1.0,
            -1.0, -1.0,  1.0,  1.0, -1.0, 1.0,
        ];
        let corners_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: None,
            contents: bytemuck::cast_slice(&corners),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_buffer = create_instance_buffer(device, MIN_INSTANCES);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: None,
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: None,
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("trail"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: None,
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vertex",
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Circle>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32, 2 => Float32x4],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: 2 * 4,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![3 => Float32x2],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fragment",
                targets: &[Some(wgpu::ColorTargetState {
                    format: swapchain_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        Self {
            screen_buffer,
            corners_buffer,
            instance_buffer,
            instance_capacity: MIN_INSTANCES,
            instances: 0,
            srgb: swapchain_format.is_srgb(),

            bind_group,
            pipeline,
        }
    }

    /// Uploads the circles of `batch` that are inside its bounds.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, batch: &CircleBatch) {
        let circles: Vec<Circle> = batch.visible().copied().collect();

        if circles.len() > self.instance_capacity {
            self.instance_capacity = circles.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(device, self.instance_capacity);
        }

        if !circles.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&circles));
        }
        self.instances = circles.len() as u32;

        let (width, height) = batch.size();
        self.update_size(queue, width, height);
    }

    pub fn begin_pass<'a>(
        &'a self,
        encoder: &'a mut wgpu::CommandEncoder,
        view: &'a wgpu::TextureView,
    ) -> wgpu::RenderPass<'a> {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: None,
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(BACKGROUND),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if self.instances > 0 {
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.corners_buffer.slice(..));
            rpass.draw(0..6, 0..self.instances);
        }

        rpass
    }

    fn update_size(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        let srgb = if self.srgb { 1.0f32 } else { 0.0 };
        queue.write_buffer(
            &self.screen_buffer,
            0,
            bytemuck::bytes_of(&[width.max(1) as f32, height.max(1) as f32, srgb, 0.0]),
        );
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Circle Instance Buffer"),
        size: (std::mem::size_of::<Circle>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
