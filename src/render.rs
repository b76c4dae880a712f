use crate::constants::{MSAA_SAMPLES, SHADOW_DEPTH_BIAS};
use crate::core::{App, Stage};
use glam::Mat4;
use std::cell::RefCell;
use web_sys as web;

mod grid;
mod helpers;
mod mesh;
mod shadow;
pub(crate) mod surface;
mod targets;
use grid::{create_grid_resources, GridResources};
use mesh::MeshResources;
use shadow::{create_shadow_resources, light_view_proj, ShadowResources};
use surface::{pick_surface_formats, SurfaceFormats};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    light_view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    // rgb already scaled by intensity
    ambient: [f32; 4],
    // w = 1 when shadows are on
    sun_color: [f32; 4],
    // xyz points at the light, w = shadow depth bias
    sun_dir: [f32; 4],
    // w = range
    point_pos: [[f32; 4]; 2],
    point_color: [[f32; 4]; 2],
}

impl SceneUniforms {
    fn new(app: &App, light_vp: Mat4) -> Self {
        let stage = &app.stage;
        let scaled = |c: [f32; 3], k: f32, w: f32| [c[0] * k, c[1] * k, c[2] * k, w];
        let eye = app.camera.position;
        let dir = stage.sun.to_light();
        Self {
            view_proj: app.camera.view_projection().to_cols_array_2d(),
            light_view_proj: light_vp.to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            ambient: scaled(stage.ambient.color, stage.ambient.intensity, 1.0),
            sun_color: scaled(
                stage.sun.color,
                stage.sun.intensity,
                if stage.shadows && stage.sun.cast_shadow {
                    1.0
                } else {
                    0.0
                },
            ),
            sun_dir: [dir.x, dir.y, dir.z, SHADOW_DEPTH_BIAS],
            point_pos: stage
                .accents
                .map(|p| [p.position.x, p.position.y, p.position.z, p.range]),
            point_color: stage
                .accents
                .map(|p| scaled(p.color, p.intensity, 1.0)),
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    formats: SurfaceFormats,

    targets: RenderTargets,
    uniform_buffer: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    mesh_pipeline: wgpu::RenderPipeline,
    meshes: MeshResources,
    shadow: ShadowResources,
    grid: GridResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    shadows: bool,
}

impl<'a> GpuState<'a> {
    /// Build every GPU resource for the current scene. The hand's meshes are
    /// uploaded once; later frames only refresh their transforms.
    ///
    /// `app` is only borrowed once the adapter and device are ready, so input
    /// handlers stay usable while those requests are pending.
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        app: &RefCell<App>,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
        let caps = surface.get_capabilities(&adapter);
        let formats = pick_surface_formats(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
        // Everything downstream of the swapchain renders through the sRGB view.
        let format = formats.view;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: formats.surface,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: formats.extra_view_formats(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} {:?} (view {:?})",
            width,
            height,
            formats.surface,
            formats.view
        );

        let app = app.borrow();
        let stage: &Stage = &app.stage;
        let sample_count = if stage.antialias { MSAA_SAMPLES } else { 1 };
        let targets = RenderTargets::new(&device, width, height, format, sample_count);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let meshes = MeshResources::upload(&device, &app.scene);
        let scene_bgl = mesh::create_scene_bgl(&device);
        let scene_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: meshes.model_buffer.as_entire_binding(),
                },
            ],
        });
        let shadow = create_shadow_resources(&device, &shader, &scene_bgl);
        let mesh_pipeline = mesh::create_mesh_pipeline(
            &device,
            &shader,
            &scene_bgl,
            &shadow.bgl,
            format,
            sample_count,
        );
        let grid =
            create_grid_resources(&device, &shader, &scene_bgl, &stage.grid, format, sample_count);

        let [r, g, b] = stage.background;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            formats,
            targets,
            uniform_buffer,
            scene_bg,
            mesh_pipeline,
            meshes,
            shadow,
            grid,
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
            shadows: stage.shadows && stage.sun.cast_shadow,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Configure the surface again with the current settings, e.g. after it
    /// was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, app: &App) -> Result<(), wgpu::SurfaceError> {
        let light_vp = light_view_proj(&app.stage.sun);
        let uniforms = SceneUniforms::new(app, light_vp);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.meshes.write_models(&self.queue, &app.scene);

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.formats.view),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: depth from the sun
        if self.shadows {
            let mut spass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shadow_pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.shadow.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            spass.set_pipeline(&self.shadow.pipeline);
            spass.set_bind_group(0, &self.scene_bg, &[]);
            self.meshes.draw(&mut spass);
        }

        // Pass 2: lit meshes and grid, resolved into the swapchain when multisampled
        {
            let (color_view, resolve_target) = match &self.targets.msaa {
                Some((_, msaa_view)) => (msaa_view, Some(&view)),
                None => (&view, None),
            };
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.scene_bg, &[]);
            rpass.set_bind_group(1, &self.shadow.bind_group, &[]);
            self.meshes.draw(&mut rpass);

            rpass.set_pipeline(&self.grid.pipeline);
            rpass.set_bind_group(0, &self.scene_bg, &[]);
            rpass.set_vertex_buffer(0, self.grid.vertex_buffer.slice(..));
            rpass.draw(0..self.grid.vertex_count, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
