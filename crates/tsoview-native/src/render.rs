use anyhow::Context;
use glam::{Mat4, Quat, Vec3};
use std::path::Path;
use std::sync::Arc;
use tso_config::{ProjectionMode, RenderMode};
use wgpu::util::DeviceExt;
use winit::window::Window;

pub const SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub const MAX_INSTANCES: usize = 128;

// Fixed orbit; the panels only drive lens and shading parameters
const CAMERA_EYE: Vec3 = Vec3::new(0.0, 10.0, 40.0);
const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 4.0, 0.0);

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    shading: [f32; 4],
    depth: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub upright: f32,
}

/// Everything one frame reads from the config records.
#[derive(Clone, Copy, Debug)]
pub struct FrameParams {
    pub fovy_degree: f32,
    pub roll_degree: f32,
    pub znear: f32,
    pub zfar: f32,
    pub projection: ProjectionMode,
    pub mode: RenderMode,
    pub occlusion_intensity: f32,
    pub occlusion_radius: f32,
    pub diffusion_intensity: f32,
    pub diffusion_extent: f32,
    pub hoho_alpha: f32,
}

impl FrameParams {
    /// Clip planes usable for drawing. The config records accept any value,
    /// so non-positive or inverted planes are pushed apart here.
    fn clip_planes(&self) -> (f32, f32) {
        let near = if self.znear.is_finite() {
            self.znear.max(0.01)
        } else {
            0.01
        };
        let far = if self.zfar.is_finite() {
            self.zfar.max(near + 0.01)
        } else {
            near + 1000.0
        };
        (near, far)
    }

    fn view_matrix(&self) -> Mat4 {
        let forward = (CAMERA_TARGET - CAMERA_EYE).normalize();
        let up = Quat::from_axis_angle(forward, self.roll_degree.to_radians()) * Vec3::Y;
        Mat4::look_at_rh(CAMERA_EYE, CAMERA_TARGET, up)
    }

    fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let (near, far) = self.clip_planes();
        let fovy = self.fovy_degree.clamp(1.0, 179.0).to_radians();
        match self.projection {
            ProjectionMode::Perspective => Mat4::perspective_rh(fovy, aspect, near, far),
            ProjectionMode::Ortho => {
                let h = (CAMERA_TARGET - CAMERA_EYE).length() * (fovy * 0.5).tan();
                Mat4::orthographic_rh(-h * aspect, h * aspect, -h, h, near, far)
            }
        }
    }

    fn uniforms(&self, aspect: f32) -> Uniforms {
        let view = self.view_matrix();
        let proj = self.projection_matrix(aspect);
        let (near, far) = self.clip_planes();
        let mode_index = RenderMode::ALL
            .iter()
            .position(|m| *m == self.mode)
            .unwrap_or(0);
        Uniforms {
            view_proj: (proj * view).to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            shading: [
                mode_index as f32,
                self.occlusion_intensity,
                self.occlusion_radius,
                self.diffusion_intensity,
            ],
            depth: [near, far, self.diffusion_extent, self.hoho_alpha],
        }
    }
}

// Unit quad, two triangles, centred on the origin
const QUAD: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

const QUAD_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 4] =
    wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32, 3 => Float32x4, 4 => Float32];

impl InstanceData {
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBUTES,
        }
    }
}

/// Surface, device and queue for one window.
struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl Gpu {
    async fn connect(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("no GPU adapter for this window"))?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default(), None)
            .await?;

        // Capture reads the surface format back as 8-bit RGBA/BGRA, so prefer
        // one of those when the surface offers it.
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm
                        | wgpu::TextureFormat::Bgra8UnormSrgb
                        | wgpu::TextureFormat::Rgba8Unorm
                        | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!(
            "[render] {} ({:?}), {format:?}",
            adapter.get_info().name,
            adapter.get_info().backend
        );
        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    /// The scene's only binding: the frame uniforms at group 0, binding 0.
    fn uniform_binding(
        &self,
        buffer: &wgpu::Buffer,
    ) -> (wgpu::BindGroupLayout, wgpu::BindGroup) {
        let layout = self
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("frame_uniforms"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<Uniforms>() as u64
                        ),
                    },
                    count: None,
                }],
            });
        let group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_uniforms"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        (layout, group)
    }

    fn scene_pipeline(&self, uniforms: &wgpu::BindGroupLayout) -> wgpu::RenderPipeline {
        let device = &self.device;
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene"),
            bind_group_layouts: &[uniforms],
            push_constant_ranges: &[],
        });
        let quad = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 2]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &QUAD_ATTRIBUTES,
        };
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[quad, InstanceData::layout()],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            cache: None,
            multiview: None,
        })
    }
}

pub struct Renderer {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_count: u32,
    bind_group: wgpu::BindGroup,
    clear: wgpu::Color,
}

impl Renderer {
    /// `screen_color` is the RGBA clear color in 0..=1.
    pub async fn new(window: Arc<Window>, screen_color: [f64; 4]) -> anyhow::Result<Self> {
        let gpu = Gpu::connect(Arc::clone(&window)).await?;

        let uniform_buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let (uniform_layout, bind_group) = gpu.uniform_binding(&uniform_buffer);
        let pipeline = gpu.scene_pipeline(&uniform_layout);

        let quad_vb = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("quad"),
                contents: bytemuck::cast_slice(&QUAD),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let instance_vb = gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instances"),
            size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let [r, g, b, a] = screen_color;
        let Gpu {
            surface,
            device,
            queue,
            config,
        } = gpu;
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            instance_count: 0,
            bind_group,
            clear: wgpu::Color { r, g, b, a },
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Replace the drawn instances. Extra instances past [`MAX_INSTANCES`]
    /// are dropped.
    pub fn set_instances(&mut self, instances: &[InstanceData]) {
        let count = instances.len().min(MAX_INSTANCES);
        if count < instances.len() {
            log::warn!(
                "[render] {} instances exceed capacity {MAX_INSTANCES}",
                instances.len()
            );
        }
        self.queue.write_buffer(
            &self.instance_vb,
            0,
            bytemuck::cast_slice(&instances[..count]),
        );
        self.instance_count = count as u32;
    }

    fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    fn encode(&self, params: &FrameParams, target: &wgpu::TextureView) -> wgpu::CommandEncoder {
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&params.uniforms(self.aspect())),
        );
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..self.instance_count);
        }
        encoder
    }

    pub fn render(&mut self, params: &FrameParams) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self.encode(params, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Render one frame off-screen at window size and write it as PNG.
    pub fn capture(&self, params: &FrameParams, path: &Path) -> anyhow::Result<()> {
        let format = self.config.format;
        let swap_red_blue = match format {
            wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb => true,
            wgpu::TextureFormat::Rgba8Unorm | wgpu::TextureFormat::Rgba8UnormSrgb => false,
            other => anyhow::bail!("cannot capture surface format {other:?}"),
        };
        let (width, height) = (self.config.width, self.config.height);
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("capture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let unpadded_row = width * 4;
        let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        let padded_row = unpadded_row.div_ceil(align) * align;
        let readback = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("capture_readback"),
            size: u64::from(padded_row) * u64::from(height),
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self.encode(params, &view);
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(Some(encoder.finish()));

        let slice = readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        let _ = self.device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .context("capture readback was dropped")?
            .context("failed to map capture readback")?;

        let mut pixels = Vec::with_capacity((unpadded_row * height) as usize);
        {
            let data = slice.get_mapped_range();
            for row in data.chunks(padded_row as usize) {
                pixels.extend_from_slice(&row[..unpadded_row as usize]);
            }
        }
        readback.unmap();
        if swap_red_blue {
            for px in pixels.chunks_exact_mut(4) {
                px.swap(0, 2);
            }
        }

        let image = image::RgbaImage::from_raw(width, height, pixels)
            .ok_or_else(|| anyhow::anyhow!("capture buffer has the wrong size"))?;
        image
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
