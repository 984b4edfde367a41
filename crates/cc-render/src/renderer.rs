use wgpu::util::DeviceExt;

use cc_core::camera::CameraState;
use cc_core::math::{Matrix4, Vector3};
use cc_core::scene::{Cube, Scene};

use crate::mesh::{cube_vertices, Vertex};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Selected cubes are drawn slightly inflated.
const ACTIVE_SCALE: f32 = 1.05;
/// Pixel half size of the spinning indicator cube.
const OVERLAY_HALF_SIZE: f32 = 24.0;
const OVERLAY_MARGIN: f32 = 32.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeInstance {
    pub model: [[f32; 4]; 4],
    pub active: f32,
    pub _padding: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub camera_position: [f32; 4],
    pub time: f32,
    pub _padding: [f32; 3],
}

impl CubeInstance {
    pub fn from_model(model: Matrix4, active: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            active: if active { 1.0 } else { 0.0 },
            _padding: [0.0; 3],
        }
    }

    /// Model matrix placing the unit cube at the cube's position.
    pub fn for_cube(cube: &Cube) -> Self {
        let position = cube.position();
        let mut model = Matrix4::new().translate(position.x, position.y, position.z);
        if cube.is_active {
            model = model.scale(ACTIVE_SCALE, ACTIVE_SCALE, ACTIVE_SCALE);
        }
        Self::from_model(model, cube.is_active)
    }
}

impl Uniforms {
    pub fn new(view: &Matrix4, projection: &Matrix4, camera_position: Vector3, time: f32) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            camera_position: [camera_position.x, camera_position.y, camera_position.z, 1.0],
            time,
            _padding: [0.0; 3],
        }
    }
}

/// Screen-space projection for the indicator cube. Origin is the top-left
/// corner, Y grows downwards.
pub fn overlay_projection(width: u32, height: u32) -> Matrix4 {
    Matrix4::new().ortho(0.0, width as f32, height as f32, 0.0, -64.0, 64.0, false)
}

/// Indicator cube in the bottom-right corner, tilted and spinning with `time`.
pub fn overlay_model(width: u32, height: u32, time: f32) -> Matrix4 {
    Matrix4::new()
        .translate(width as f32 - OVERLAY_MARGIN, height as f32 - OVERLAY_MARGIN, 0.0)
        .scale(OVERLAY_HALF_SIZE, OVERLAY_HALF_SIZE, OVERLAY_HALF_SIZE)
        .rotate_x(0.4)
        .rotate_y(time)
}

struct UniformSet {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl UniformSet {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self { buffer, bind_group }
    }
}

pub struct CubeRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    num_vertices: u32,
    scene_uniforms: UniformSet,
    overlay_uniforms: UniformSet,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    overlay_instance_buffer: wgpu::Buffer,
}

impl CubeRenderer {
    pub fn new(
        device: wgpu::Device,
        queue: wgpu::Queue,
        format: wgpu::TextureFormat,
        color_seed: u64,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cube Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Cube Bind Group Layout"),
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

        let scene_uniforms = UniformSet::new(&device, &bind_group_layout, "Scene Uniforms");
        let overlay_uniforms = UniformSet::new(&device, &bind_group_layout, "Overlay Uniforms");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Cube Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Cube Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<CubeInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            2 => Float32x4,
                            3 => Float32x4,
                            4 => Float32x4,
                            5 => Float32x4,
                            6 => Float32,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let vertices = cube_vertices(color_seed);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_capacity = 16;
        let instance_buffer =
            create_instance_buffer(&device, instance_capacity, "Cube Instance Buffer");
        let overlay_instance_buffer = create_instance_buffer(&device, 1, "Overlay Instance Buffer");

        Self {
            device,
            queue,
            pipeline,
            vertex_buffer,
            num_vertices: vertices.len() as u32,
            scene_uniforms,
            overlay_uniforms,
            instance_buffer,
            instance_capacity,
            overlay_instance_buffer,
        }
    }

    /// Uploads one instance per cube, growing the buffer when the scene has
    /// outgrown it.
    fn upload_instances(&mut self, scene: &Scene) {
        let instances: Vec<CubeInstance> = scene.iter().map(CubeInstance::for_cube).collect();

        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            log::debug!("Growing cube instance buffer to {}", self.instance_capacity);
            self.instance_buffer = create_instance_buffer(
                &self.device,
                self.instance_capacity,
                "Cube Instance Buffer",
            );
        }

        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
    }

    /// Draws the scene cubes with the camera's matrices, then the indicator
    /// cube on top with its own depth clear.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
        camera: &CameraState,
        scene: &Scene,
        time: f32,
        size: (u32, u32),
    ) {
        let uniforms = Uniforms::new(camera.view(), camera.projection(), camera.position(), time);
        self.queue.write_buffer(&self.scene_uniforms.buffer, 0, bytemuck::cast_slice(&[uniforms]));
        self.upload_instances(scene);

        let (width, height) = size;
        let screen_projection = overlay_projection(width, height);
        let overlay = Uniforms::new(&Matrix4::IDENTITY, &screen_projection, Vector3::ZERO, time);
        self.queue.write_buffer(&self.overlay_uniforms.buffer, 0, bytemuck::cast_slice(&[overlay]));
        let overlay_instance = CubeInstance::from_model(overlay_model(width, height, time), false);
        self.queue.write_buffer(
            &self.overlay_instance_buffer,
            0,
            bytemuck::cast_slice(&[overlay_instance]),
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Cube Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.08,
                            g: 0.08,
                            b: 0.1,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(depth_attachment(depth_view)),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.scene_uniforms.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass.draw(0..self.num_vertices, 0..scene.len() as u32);
        }

        let mut overlay_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Overlay Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(depth_attachment(depth_view)),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        overlay_pass.set_pipeline(&self.pipeline);
        overlay_pass.set_bind_group(0, &self.overlay_uniforms.bind_group, &[]);
        overlay_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        overlay_pass.set_vertex_buffer(1, self.overlay_instance_buffer.slice(..));
        overlay_pass.draw(0..self.num_vertices, 0..1);
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (capacity * std::mem::size_of::<CubeInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn depth_attachment(depth_view: &wgpu::TextureView) -> wgpu::RenderPassDepthStencilAttachment<'_> {
    wgpu::RenderPassDepthStencilAttachment {
        view: depth_view,
        depth_ops: Some(wgpu::Operations {
            load: wgpu::LoadOp::Clear(1.0),
            store: wgpu::StoreOp::Store,
        }),
        stencil_ops: None,
    }
}

const SHADER_SOURCE: &str = r#"
struct Uniforms {
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    camera_position: vec4<f32>,
    time: f32,
}

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
}

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) active: f32,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
    @location(1) active: f32,
    @location(2) camera_distance: f32,
}

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(instance.model_0, instance.model_1, instance.model_2, instance.model_3);
    let world = model * vec4<f32>(vertex.position, 1.0);

    var clip = uniforms.projection * uniforms.view * world;
    // OpenGL depth range [-1, 1] to wgpu's [0, 1].
    clip.z = 0.5 * (clip.z + clip.w);

    var out: VertexOutput;
    out.clip_position = clip;
    out.color = vertex.color;
    out.active = instance.active;
    out.camera_distance = distance(world.xyz, uniforms.camera_position.xyz);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    var color = in.color;
    if (in.active > 0.5) {
        let pulse = 0.5 + 0.5 * sin(uniforms.time * 4.0);
        color = mix(color, vec3<f32>(1.0, 0.85, 0.2), 0.5 + 0.3 * pulse);
    }
    let fog = clamp(in.camera_distance / 40.0, 0.0, 0.6);
    color = mix(color, vec3<f32>(0.08, 0.08, 0.1), fog);
    return vec4<f32>(color, 1.0);
}
"#;
